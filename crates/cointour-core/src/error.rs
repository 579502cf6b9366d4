use std::fmt;

/// Errors reported by the planning entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    /// The supplied cost matrix is malformed or undersized: ragged rows,
    /// or no rows at all.
    InvalidInput(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for PathError {}
