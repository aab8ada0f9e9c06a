//! The expression tree.
//!
//! A [`Term`] is any node that can appear in a SELECT list or inside a larger
//! expression: column references, literals, arithmetic, function calls,
//! intervals, and CASE expressions. Boolean-valued nodes live in
//! [`Criterion`](crate::Criterion); a criterion can never appear inside pure
//! arithmetic, which makes that misuse a compile error rather than a runtime
//! one.
//!
//! Construction is pure and total. The named constructors (`add`, `sub`,
//! `eq`, `between`, ...) are the contract; the `std::ops` implementations
//! (`+`, `-`, `*`, `/`) are sugar over them.

use chrono::{NaiveDate, NaiveDateTime};

use crate::criterion::{CmpOp, Criterion};
use crate::interval::Interval;
use crate::table::Table;
use crate::value::Value;

/// A node in the expression tree, optionally carrying a SELECT-list alias.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub(crate) kind: TermKind,
    pub(crate) alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TermKind {
    /// Column reference, optionally scoped to a table.
    Field {
        table: Option<Table>,
        name: String,
    },
    /// All-columns sentinel, optionally scoped to a table.
    Star { table: Option<Table> },
    /// Literal value.
    Value(Value),
    /// Binary arithmetic.
    Arithmetic {
        op: ArithOp,
        left: Box<Term>,
        right: Box<Term>,
    },
    /// Function call; the name renders uppercased.
    Function { name: String, args: Vec<Term> },
    /// A single `INTERVAL n UNIT` atom. Multi-component intervals are
    /// decomposed into an addition chain at construction.
    Interval { value: i64, unit: &'static str },
    /// CASE WHEN ... THEN ... [ELSE ...] END.
    Case {
        branches: Vec<(Criterion, Term)>,
        otherwise: Option<Box<Term>>,
    },
}

/// Arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    pub(crate) fn symbol(self) -> char {
        match self {
            ArithOp::Add => '+',
            ArithOp::Sub => '-',
            ArithOp::Mul => '*',
            ArithOp::Div => '/',
        }
    }

    /// Subtraction and division are non-associative: an equal-precedence
    /// right child needs parentheses to preserve left-associativity.
    pub(crate) fn non_associative(self) -> bool {
        matches!(self, ArithOp::Sub | ArithOp::Div)
    }
}

impl Term {
    pub(crate) fn new(kind: TermKind) -> Self {
        Self { kind, alias: None }
    }

    /// An unqualified column reference.
    pub fn field(name: impl Into<String>) -> Self {
        Self::new(TermKind::Field {
            table: None,
            name: name.into(),
        })
    }

    /// The unqualified all-columns sentinel, rendered `*`.
    pub fn star() -> Self {
        Self::new(TermKind::Star { table: None })
    }

    /// A literal value term.
    pub fn value(value: impl Into<Value>) -> Self {
        Self::new(TermKind::Value(value.into()))
    }

    /// A function call term. The name renders uppercased, the arguments
    /// comma-joined without extra parentheses.
    pub fn func(name: impl Into<String>, args: Vec<Term>) -> Self {
        Self::new(TermKind::Function {
            name: name.into(),
            args,
        })
    }

    /// An interval term. Multi-component intervals become a chain of
    /// `INTERVAL n UNIT` atoms joined by `+`, so precedence handling applies
    /// to the chain like any other addition. An interval with no components
    /// set renders as the additive identity `INTERVAL 0 DAY`.
    pub fn interval(interval: Interval) -> Self {
        let mut components = interval.components().into_iter();
        let (value, unit) = components.next().unwrap_or((0, "DAY"));
        let mut term = Self::new(TermKind::Interval { value, unit });
        for (value, unit) in components {
            term = term.add(Self::new(TermKind::Interval { value, unit }));
        }
        term
    }

    pub(crate) fn table_field(table: Table, name: String) -> Self {
        Self::new(TermKind::Field {
            table: Some(table),
            name,
        })
    }

    pub(crate) fn table_star(table: Table) -> Self {
        Self::new(TermKind::Star { table: Some(table) })
    }

    /// Return this term carrying a SELECT-list alias.
    ///
    /// Consumes an owned value, so aliasing never mutates a term shared
    /// elsewhere; clone first to keep the unaliased original.
    pub fn as_(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The SELECT-list alias, if set.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    fn binary(self, op: ArithOp, rhs: Term) -> Term {
        Term::new(TermKind::Arithmetic {
            op,
            left: Box::new(self),
            right: Box::new(rhs),
        })
    }

    // ==================== Arithmetic ====================

    /// `self + rhs`
    pub fn add(self, rhs: impl Into<Term>) -> Term {
        self.binary(ArithOp::Add, rhs.into())
    }

    /// `self - rhs`
    pub fn sub(self, rhs: impl Into<Term>) -> Term {
        self.binary(ArithOp::Sub, rhs.into())
    }

    /// `self * rhs`
    pub fn mul(self, rhs: impl Into<Term>) -> Term {
        self.binary(ArithOp::Mul, rhs.into())
    }

    /// `self / rhs`
    pub fn div(self, rhs: impl Into<Term>) -> Term {
        self.binary(ArithOp::Div, rhs.into())
    }

    // ==================== Comparisons ====================

    fn compare(self, op: CmpOp, rhs: Term) -> Criterion {
        Criterion::Comparison {
            op,
            left: self,
            right: rhs,
        }
    }

    /// `self = rhs`
    pub fn eq(self, rhs: impl Into<Term>) -> Criterion {
        self.compare(CmpOp::Eq, rhs.into())
    }

    /// `self <> rhs`
    pub fn ne(self, rhs: impl Into<Term>) -> Criterion {
        self.compare(CmpOp::Ne, rhs.into())
    }

    /// `self < rhs`
    pub fn lt(self, rhs: impl Into<Term>) -> Criterion {
        self.compare(CmpOp::Lt, rhs.into())
    }

    /// `self <= rhs`
    pub fn lte(self, rhs: impl Into<Term>) -> Criterion {
        self.compare(CmpOp::Lte, rhs.into())
    }

    /// `self > rhs`
    pub fn gt(self, rhs: impl Into<Term>) -> Criterion {
        self.compare(CmpOp::Gt, rhs.into())
    }

    /// `self >= rhs`
    pub fn gte(self, rhs: impl Into<Term>) -> Criterion {
        self.compare(CmpOp::Gte, rhs.into())
    }

    /// `self BETWEEN low AND high` (inclusive).
    pub fn between(self, low: impl Into<Term>, high: impl Into<Term>) -> Criterion {
        Criterion::Between {
            target: self,
            low: low.into(),
            high: high.into(),
        }
    }

    /// `self IN (candidates...)`.
    pub fn isin<I, T>(self, candidates: I) -> Criterion
    where
        I: IntoIterator<Item = T>,
        T: Into<Term>,
    {
        Criterion::In {
            target: self,
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// Render this term standalone (no alias scope, no table qualification).
    pub fn to_sql(&self) -> String {
        crate::render::term_to_sql(self)
    }

    /// Collect the tables this term's references are scoped to.
    pub(crate) fn referenced_tables<'a>(&'a self, out: &mut Vec<&'a Table>) {
        match &self.kind {
            TermKind::Field { table: Some(t), .. } | TermKind::Star { table: Some(t) } => {
                out.push(t)
            }
            TermKind::Field { table: None, .. } | TermKind::Star { table: None } => {}
            TermKind::Value(_) | TermKind::Interval { .. } => {}
            TermKind::Arithmetic { left, right, .. } => {
                left.referenced_tables(out);
                right.referenced_tables(out);
            }
            TermKind::Function { args, .. } => {
                for arg in args {
                    arg.referenced_tables(out);
                }
            }
            TermKind::Case {
                branches,
                otherwise,
            } => {
                for (condition, then) in branches {
                    condition.referenced_tables(out);
                    then.referenced_tables(out);
                }
                if let Some(term) = otherwise {
                    term.referenced_tables(out);
                }
            }
        }
    }
}

// ==================== Conversions ====================

impl From<Value> for Term {
    fn from(value: Value) -> Self {
        Term::value(value)
    }
}

impl From<bool> for Term {
    fn from(b: bool) -> Self {
        Term::value(b)
    }
}

impl From<i32> for Term {
    fn from(n: i32) -> Self {
        Term::value(n)
    }
}

impl From<i64> for Term {
    fn from(n: i64) -> Self {
        Term::value(n)
    }
}

impl From<f64> for Term {
    fn from(n: f64) -> Self {
        Term::value(n)
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::value(s)
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Term::value(s)
    }
}

impl From<NaiveDate> for Term {
    fn from(d: NaiveDate) -> Self {
        Term::value(d)
    }
}

impl From<NaiveDateTime> for Term {
    fn from(t: NaiveDateTime) -> Self {
        Term::value(t)
    }
}

/// Conversion used where a bare string names a column rather than a string
/// literal: `select`, `groupby`, `orderby`, and the function helpers.
pub trait IntoColumn {
    fn into_column(self) -> Term;
}

impl IntoColumn for Term {
    fn into_column(self) -> Term {
        self
    }
}

impl IntoColumn for &str {
    fn into_column(self) -> Term {
        Term::field(self)
    }
}

impl IntoColumn for String {
    fn into_column(self) -> Term {
        Term::field(self)
    }
}

// ==================== Operator sugar ====================

impl<R: Into<Term>> std::ops::Add<R> for Term {
    type Output = Term;

    fn add(self, rhs: R) -> Term {
        self.binary(ArithOp::Add, rhs.into())
    }
}

impl<R: Into<Term>> std::ops::Sub<R> for Term {
    type Output = Term;

    fn sub(self, rhs: R) -> Term {
        self.binary(ArithOp::Sub, rhs.into())
    }
}

impl<R: Into<Term>> std::ops::Mul<R> for Term {
    type Output = Term;

    fn mul(self, rhs: R) -> Term {
        self.binary(ArithOp::Mul, rhs.into())
    }
}

impl<R: Into<Term>> std::ops::Div<R> for Term {
    type Output = Term;

    fn div(self, rhs: R) -> Term {
        self.binary(ArithOp::Div, rhs.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_operands_wrap_as_literals() {
        let t = Term::field("price").mul(2);
        assert_eq!(t.to_sql(), "price*2");
    }

    #[test]
    fn operator_sugar_matches_named_constructors() {
        let named = Term::field("foo").add(Term::field("bar"));
        let sugar = Term::field("foo") + Term::field("bar");
        assert_eq!(named, sugar);
    }

    #[test]
    fn aliasing_is_copy_on_write() {
        let base = Term::field("revenue");
        let aliased = base.clone().as_("rev");
        assert_eq!(base.alias(), None);
        assert_eq!(aliased.alias(), Some("rev"));
    }
}
