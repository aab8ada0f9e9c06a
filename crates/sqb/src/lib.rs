//! sqb is a fluent builder for SQL SELECT statements.
//!
//! Queries are assembled as immutable expression trees and rendered to a
//! single SQL string on demand. Construction is infallible wherever the
//! types allow it; the few operations that can go wrong at runtime (join
//! registration, CASE completion, interval composition) return
//! [`BuildResult`].
//!
//! # Quick start
//!
//! ```
//! use sqb::{from_, Table};
//!
//! let customers = Table::new("customers");
//! let q = from_(&customers)
//!     .select("id")
//!     .select("fname")
//!     .select("lname")
//!     .where_(customers.field("age").gte(18));
//! assert_eq!(
//!     q.to_sql(),
//!     "SELECT id,fname,lname FROM customers WHERE age>=18"
//! );
//! ```
//!
//! # Joins
//!
//! Joined tables receive sequential aliases `t0`, `t1`, ... in registration
//! order, and every scoped column reference is qualified with them:
//!
//! ```
//! use sqb::{from_, tables};
//!
//! let [history, customers] = tables(["history", "customers"]);
//! let q = from_(&history)
//!     .select(history.star())
//!     .join(&customers)
//!     .on(history.field("customer_id").eq(customers.field("id")))?
//!     .where_(customers.field("id").eq(5));
//! assert_eq!(
//!     q.to_sql(),
//!     "SELECT t0.* FROM history t0 JOIN customers t1 ON t0.customer_id=t1.id WHERE t1.id=5"
//! );
//! # Ok::<(), sqb::BuildError>(())
//! ```
//!
//! # Expressions
//!
//! Terms compose with method calls or the standard arithmetic operators, and
//! criteria combine with `&`, `|`, `^` or the named equivalents:
//!
//! ```
//! use sqb::{from_, Table};
//!
//! let accounts = Table::new("accounts");
//! let q = from_(&accounts)
//!     .select((accounts.field("revenue") - accounts.field("cost")).as_("profit"));
//! assert_eq!(q.to_sql(), "SELECT revenue-cost profit FROM accounts");
//! ```

mod case;
mod criterion;
mod error;
mod interval;
mod query;
mod render;
mod table;
mod term;
mod value;

pub mod functions;

pub use case::Case;
pub use criterion::{BoolOp, CmpOp, Criterion};
pub use error::{BuildError, BuildResult};
pub use interval::Interval;
pub use query::{from_, Join, JoinType, Joiner, Order, QueryBuilder};
pub use table::{tables, Table};
pub use term::{IntoColumn, Term};
pub use value::Value;
