//! Boolean-valued expression nodes.
//!
//! A [`Criterion`] is a term guaranteed to evaluate to a boolean: comparisons,
//! BETWEEN, IN, and the AND/OR/XOR combinators. The combinators exist only on
//! `Criterion` (named methods plus `&`, `|`, `^` sugar), so applying them to a
//! non-boolean term does not compile.

use crate::table::Table;
use crate::term::Term;

/// A boolean-valued node in the expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// `left op right`
    Comparison {
        op: CmpOp,
        left: Term,
        right: Term,
    },
    /// `target BETWEEN low AND high` (inclusive)
    Between {
        target: Term,
        low: Term,
        high: Term,
    },
    /// `target IN (candidates...)`
    In {
        target: Term,
        candidates: Vec<Term>,
    },
    /// `left AND|OR|XOR right`
    BoolOp {
        op: BoolOp,
        left: Box<Criterion>,
        right: Box<Criterion>,
    },
}

/// Comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl CmpOp {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Ne => "<>",
            CmpOp::Lt => "<",
            CmpOp::Lte => "<=",
            CmpOp::Gt => ">",
            CmpOp::Gte => ">=",
        }
    }
}

/// Boolean combinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOp {
    And,
    Or,
    Xor,
}

impl BoolOp {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            BoolOp::And => " AND ",
            BoolOp::Or => " OR ",
            BoolOp::Xor => " XOR ",
        }
    }
}

impl Criterion {
    fn combine(self, op: BoolOp, rhs: Criterion) -> Criterion {
        Criterion::BoolOp {
            op,
            left: Box::new(self),
            right: Box::new(rhs),
        }
    }

    /// `self AND rhs`
    pub fn and(self, rhs: Criterion) -> Criterion {
        self.combine(BoolOp::And, rhs)
    }

    /// `self OR rhs`
    pub fn or(self, rhs: Criterion) -> Criterion {
        self.combine(BoolOp::Or, rhs)
    }

    /// `self XOR rhs`
    pub fn xor(self, rhs: Criterion) -> Criterion {
        self.combine(BoolOp::Xor, rhs)
    }

    /// Render this criterion standalone (no alias scope).
    pub fn to_sql(&self) -> String {
        crate::render::criterion_to_sql(self)
    }

    /// Collect the tables this criterion's references are scoped to.
    pub(crate) fn referenced_tables<'a>(&'a self, out: &mut Vec<&'a Table>) {
        match self {
            Criterion::Comparison { left, right, .. } => {
                left.referenced_tables(out);
                right.referenced_tables(out);
            }
            Criterion::Between { target, low, high } => {
                target.referenced_tables(out);
                low.referenced_tables(out);
                high.referenced_tables(out);
            }
            Criterion::In { target, candidates } => {
                target.referenced_tables(out);
                for candidate in candidates {
                    candidate.referenced_tables(out);
                }
            }
            Criterion::BoolOp { left, right, .. } => {
                left.referenced_tables(out);
                right.referenced_tables(out);
            }
        }
    }
}

impl std::ops::BitAnd for Criterion {
    type Output = Criterion;

    fn bitand(self, rhs: Criterion) -> Criterion {
        self.and(rhs)
    }
}

impl std::ops::BitOr for Criterion {
    type Output = Criterion;

    fn bitor(self, rhs: Criterion) -> Criterion {
        self.or(rhs)
    }
}

impl std::ops::BitXor for Criterion {
    type Output = Criterion;

    fn bitxor(self, rhs: Criterion) -> Criterion {
        self.xor(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_sugar_matches_named_combinators() {
        let a = Term::field("a").eq(1);
        let b = Term::field("b").eq(2);
        assert_eq!(
            a.clone() & b.clone(),
            a.clone().and(b.clone())
        );
        assert_eq!(a.clone() | b.clone(), a.clone().or(b.clone()));
        assert_eq!(a.clone() ^ b.clone(), a.xor(b));
    }

    #[test]
    fn referenced_tables_walks_nested_nodes() {
        let t1 = Table::new("a");
        let t2 = Table::new("b");
        let criterion = t1.field("x").eq(t2.field("y")).and(t1.field("z").gt(1));

        let mut tables = Vec::new();
        criterion.referenced_tables(&mut tables);
        assert_eq!(tables, vec![&t1, &t2, &t1]);
    }
}
