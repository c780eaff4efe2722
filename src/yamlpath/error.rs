//! Error types for query predicate parsing.

use std::fmt;

/// Errors that can occur while parsing a `#(...)` predicate.
///
/// Path resolution never surfaces these; a malformed predicate simply matches
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The predicate contains none of `>=`, `<=`, `!=`, `>`, `<`, `=`.
    MissingOperator { query: String },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::MissingOperator { query } => {
                write!(f, "Invalid query '{}': expected a comparison operator", query)
            }
        }
    }
}

impl std::error::Error for QueryError {}
