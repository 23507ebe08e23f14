// ============================================================================
// Numeric Errors
// Error types for string-based decimal arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during decimal string arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Operand does not match `-?digits(.digits)?`
    InvalidNumber {
        /// The offending argument, as received
        argument: String,
    },
    /// Unscaled digits no longer fit the integer accumulator
    Overflow,
}

impl NumericError {
    pub(crate) fn invalid(argument: impl Into<String>) -> Self {
        NumericError::InvalidNumber {
            argument: argument.into(),
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidNumber { argument } => {
                write!(f, "argument \"{}\" is not a number", argument)
            },
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: digits exceed the supported width")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::invalid("1.2.3").to_string(),
            "argument \"1.2.3\" is not a number"
        );
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: digits exceed the supported width"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::invalid("x"), NumericError::invalid("x"));
        assert_ne!(NumericError::invalid("x"), NumericError::Overflow);
    }
}
