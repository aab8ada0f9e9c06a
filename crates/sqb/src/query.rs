//! The fluent SELECT query builder.
//!
//! A builder is obtained from [`from_`] and always carries its source table,
//! so every clause method is available immediately and rendering cannot fail.
//! Methods consume and return the builder (`mut self -> Self`); rebind to
//! mutate between renders.

use crate::criterion::Criterion;
use crate::error::{BuildError, BuildResult};
use crate::table::Table;
use crate::term::{IntoColumn, Term};

/// Sort direction for ORDER BY entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

/// Join flavor, selected by the builder's join entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Outer,
}

impl JoinType {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            JoinType::Inner => "JOIN",
            JoinType::Left => "LEFT JOIN",
            JoinType::Right => "RIGHT JOIN",
            JoinType::Outer => "FULL OUTER JOIN",
        }
    }
}

/// A registered join: table, flavor, and its ON criterion.
#[derive(Debug, Clone)]
pub struct Join {
    pub(crate) table: Table,
    pub(crate) kind: JoinType,
    pub(crate) on: Criterion,
}

impl Join {
    /// The joined table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The join flavor.
    pub fn kind(&self) -> JoinType {
        self.kind
    }

    /// The ON criterion.
    pub fn criterion(&self) -> &Criterion {
        &self.on
    }
}

/// Create a query builder reading from the given table.
///
/// A string names the table directly; pass a [`Table`] to scope column
/// references or to join.
pub fn from_(table: impl Into<Table>) -> QueryBuilder {
    QueryBuilder::from_(table)
}

/// Accumulated SELECT statement state, rendered by [`QueryBuilder::to_sql`].
///
/// # Example
/// ```
/// use sqb::from_;
///
/// let q = from_("customers").select("id").select("fname");
/// assert_eq!(q.to_sql(), "SELECT id,fname FROM customers");
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    pub(crate) source: Table,
    pub(crate) joins: Vec<Join>,
    pub(crate) selects: Vec<Term>,
    pub(crate) wheres: Vec<Criterion>,
    pub(crate) group_by: Vec<Term>,
    pub(crate) order_by: Vec<(Term, Order)>,
    pub(crate) distinct: bool,
}

impl QueryBuilder {
    /// Create a query builder reading from the given table.
    pub fn from_(table: impl Into<Table>) -> Self {
        Self {
            source: table.into(),
            joins: Vec::new(),
            selects: Vec::new(),
            wheres: Vec::new(),
            group_by: Vec::new(),
            order_by: Vec::new(),
            distinct: false,
        }
    }

    // ==================== Clauses ====================

    /// Append a selected term. Bare strings name columns; an empty select
    /// list renders `*`.
    pub fn select(mut self, term: impl IntoColumn) -> Self {
        self.selects.push(term.into_column());
        self
    }

    /// Append a WHERE criterion. Multiple calls combine with AND in call
    /// order.
    pub fn where_(mut self, criterion: Criterion) -> Self {
        self.wheres.push(criterion);
        self
    }

    /// Append a GROUP BY term.
    pub fn groupby(mut self, term: impl IntoColumn) -> Self {
        self.group_by.push(term.into_column());
        self
    }

    /// Append an ORDER BY term with its direction.
    pub fn orderby(mut self, term: impl IntoColumn, order: Order) -> Self {
        self.order_by.push((term.into_column(), order));
        self
    }

    /// Render `SELECT DISTINCT`.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    // ==================== Joins ====================

    /// Start a `JOIN`; the returned [`Joiner`] only accepts `.on(criterion)`.
    pub fn join(self, table: impl Into<Table>) -> Joiner {
        self.join_as(table, JoinType::Inner)
    }

    /// Start a `LEFT JOIN`.
    pub fn left_join(self, table: impl Into<Table>) -> Joiner {
        self.join_as(table, JoinType::Left)
    }

    /// Start a `RIGHT JOIN`.
    pub fn right_join(self, table: impl Into<Table>) -> Joiner {
        self.join_as(table, JoinType::Right)
    }

    /// Start a `FULL OUTER JOIN`.
    pub fn outer_join(self, table: impl Into<Table>) -> Joiner {
        self.join_as(table, JoinType::Outer)
    }

    fn join_as(self, table: impl Into<Table>, kind: JoinType) -> Joiner {
        Joiner {
            query: self,
            table: table.into(),
            kind,
        }
    }

    /// The registered joins, in render order.
    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    /// The source table.
    pub fn source(&self) -> &Table {
        &self.source
    }

    pub(crate) fn is_registered(&self, table: &Table) -> bool {
        &self.source == table || self.joins.iter().any(|j| &j.table == table)
    }

    // ==================== Rendering ====================

    /// Render the current state as SQL. May be called any number of times;
    /// each call reflects the state at call time.
    pub fn to_sql(&self) -> String {
        let sql = crate::render::render_query(self);
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "sqb", sql = %sql, "rendered query");
        sql
    }
}

/// Capability returned by the join entry points, restricted to one
/// operation: [`Joiner::on`]. The join is registered only when `on`
/// succeeds, so an abandoned `Joiner` leaves no trace on the query.
#[derive(Debug)]
pub struct Joiner {
    query: QueryBuilder,
    table: Table,
    kind: JoinType,
}

impl Joiner {
    /// Register the join with its criterion.
    ///
    /// The criterion must reference the joined table and at least one table
    /// already in the query, and may not reference any other table. Joining
    /// a table value already registered is rejected; alias one side for
    /// self-joins.
    pub fn on(self, criterion: Criterion) -> BuildResult<QueryBuilder> {
        if self.query.is_registered(&self.table) {
            return Err(BuildError::join(format!(
                "table '{}' is already part of the query; use a distinct alias for self-joins",
                self.table.name()
            )));
        }

        let mut referenced: Vec<&Table> = Vec::new();
        criterion.referenced_tables(&mut referenced);

        if let Some(unknown) = referenced
            .iter()
            .copied()
            .find(|&t| *t != self.table && !self.query.is_registered(t))
        {
            return Err(BuildError::join(format!(
                "criterion references table '{}' which is not part of the query",
                unknown.name()
            )));
        }
        if !referenced.iter().any(|&t| *t == self.table) {
            return Err(BuildError::join(format!(
                "criterion does not reference the joined table '{}'",
                self.table.name()
            )));
        }
        if !referenced.iter().any(|&t| self.query.is_registered(t)) {
            return Err(BuildError::join(
                "criterion does not reference any table already in the query",
            ));
        }

        let Joiner {
            mut query,
            table,
            kind,
        } = self;
        query.joins.push(Join {
            table,
            kind,
            on: criterion,
        });
        Ok(query)
    }
}
