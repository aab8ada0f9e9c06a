//! Error types for sqb

use thiserror::Error;

/// Result type alias for query construction
pub type BuildResult<T> = Result<T, BuildError>;

/// Error types for query construction.
///
/// All failures surface at construction time; rendering a built query never
/// fails. Combining a non-boolean term with a boolean combinator, or calling a
/// clause method on an unsourced builder, are unrepresentable in this API and
/// therefore carry no runtime variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Join criterion does not connect the joined table to the query
    #[error("Join error: {0}")]
    Join(String),

    /// CASE expression finished without a single WHEN branch
    #[error("CASE requires at least one WHEN branch")]
    EmptyCase,

    /// Invalid interval component combination
    #[error("Interval error: {0}")]
    Interval(String),
}

impl BuildError {
    /// Create a join error
    pub fn join(message: impl Into<String>) -> Self {
        Self::Join(message.into())
    }

    /// Create an interval error
    pub fn interval(message: impl Into<String>) -> Self {
        Self::Interval(message.into())
    }

    /// Check if this is a join error
    pub fn is_join(&self) -> bool {
        matches!(self, Self::Join(_))
    }
}
