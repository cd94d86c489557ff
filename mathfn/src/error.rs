//! mathfn error types

use thiserror::Error;

/// Result type for mathfn operations
pub type Result<T> = core::result::Result<T, MathError>;

/// Error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Input outside the function's domain (empty slice, non-positive limit)
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl MathError {
    /// Stable name of the error kind, as used in test vectors
    pub const fn kind(&self) -> &'static str {
        match self {
            MathError::InvalidArgument(_) => "InvalidArgument",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MathError::InvalidArgument("numbers must not be empty");
        assert_eq!(err.to_string(), "invalid argument: numbers must not be empty");
        assert_eq!(err.kind(), "InvalidArgument");
    }
}
