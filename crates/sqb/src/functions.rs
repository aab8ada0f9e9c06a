//! Helpers for common SQL functions.
//!
//! Each helper produces a plain function-call [`Term`]; anything not covered
//! here can go through [`Term::func`] directly.

use crate::term::{IntoColumn, Term};

/// `SUM(column)`
pub fn sum(column: impl IntoColumn) -> Term {
    Term::func("SUM", vec![column.into_column()])
}

/// `COUNT(column)`; pass [`Term::star`] for `COUNT(*)`.
pub fn count(column: impl IntoColumn) -> Term {
    Term::func("COUNT", vec![column.into_column()])
}

/// `AVG(column)`
pub fn avg(column: impl IntoColumn) -> Term {
    Term::func("AVG", vec![column.into_column()])
}

/// `MIN(column)`
pub fn min(column: impl IntoColumn) -> Term {
    Term::func("MIN", vec![column.into_column()])
}

/// `MAX(column)`
pub fn max(column: impl IntoColumn) -> Term {
    Term::func("MAX", vec![column.into_column()])
}

/// `LOWER(column)`
pub fn lower(column: impl IntoColumn) -> Term {
    Term::func("LOWER", vec![column.into_column()])
}

/// `UPPER(column)`
pub fn upper(column: impl IntoColumn) -> Term {
    Term::func("UPPER", vec![column.into_column()])
}

/// `NOW()`
pub fn now() -> Term {
    Term::func("NOW", Vec::new())
}

/// `COALESCE(args...)`
pub fn coalesce<I, T>(args: I) -> Term
where
    I: IntoIterator<Item = T>,
    T: IntoColumn,
{
    Term::func(
        "COALESCE",
        args.into_iter().map(IntoColumn::into_column).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_rendering() {
        assert_eq!(sum("revenue").to_sql(), "SUM(revenue)");
        assert_eq!(count(Term::star()).to_sql(), "COUNT(*)");
        assert_eq!(now().to_sql(), "NOW()");
    }

    #[test]
    fn coalesce_joins_args_without_spaces() {
        assert_eq!(
            coalesce(["nickname", "fname"]).to_sql(),
            "COALESCE(nickname,fname)"
        );
    }

    #[test]
    fn names_render_uppercased() {
        assert_eq!(Term::func("ifnull", vec![Term::field("x")]).to_sql(), "IFNULL(x)");
    }
}
