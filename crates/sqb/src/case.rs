//! CASE expression builder.

use crate::criterion::Criterion;
use crate::error::{BuildError, BuildResult};
use crate::term::{Term, TermKind};

/// Accumulator for a `CASE WHEN ... THEN ... [ELSE ...] END` expression.
///
/// `end()` produces the [`Term`] and fails if no branch was added.
///
/// # Example
/// ```
/// use sqb::{Case, Term};
///
/// let label = Case::new()
///     .when(Term::field("age").gte(18), "adult")
///     .otherwise("minor")
///     .end()?;
/// assert_eq!(label.to_sql(), "CASE WHEN age>=18 THEN 'adult' ELSE 'minor' END");
/// # Ok::<(), sqb::BuildError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Case {
    branches: Vec<(Criterion, Term)>,
    otherwise: Option<Term>,
}

impl Case {
    /// Create an empty CASE accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `WHEN condition THEN value` branch.
    pub fn when(mut self, condition: Criterion, then: impl Into<Term>) -> Self {
        self.branches.push((condition, then.into()));
        self
    }

    /// Set the `ELSE` value.
    pub fn otherwise(mut self, term: impl Into<Term>) -> Self {
        self.otherwise = Some(term.into());
        self
    }

    /// Finish the expression, failing when no branch was added.
    pub fn end(self) -> BuildResult<Term> {
        if self.branches.is_empty() {
            return Err(BuildError::EmptyCase);
        }
        Ok(Term::new(TermKind::Case {
            branches: self.branches,
            otherwise: self.otherwise.map(Box::new),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_without_else() {
        let term = Case::new()
            .when(Term::field("status").eq("new"), 1)
            .when(Term::field("status").eq("active"), 2)
            .end()
            .unwrap();
        assert_eq!(
            term.to_sql(),
            "CASE WHEN status='new' THEN 1 WHEN status='active' THEN 2 END"
        );
    }

    #[test]
    fn empty_case_is_rejected() {
        assert_eq!(Case::new().end().unwrap_err(), BuildError::EmptyCase);
        assert_eq!(
            Case::new().otherwise(0).end().unwrap_err(),
            BuildError::EmptyCase
        );
    }
}
