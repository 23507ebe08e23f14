// ============================================================================
// Binding Errors
// ============================================================================

use std::fmt;

/// Errors that can occur while attaching spin buttons to an element.
///
/// Each error is fatal to one element only; the rest of a bind batch
/// proceeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The element cannot be measured, so the buttons cannot be positioned
    Attachment { reason: String },
    /// The configuration failed validation
    InvalidConfig(String),
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::Attachment { reason } => write!(f, "attachment failed: {}", reason),
            BindError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for BindError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BindError::Attachment {
            reason: "zero height".to_string(),
        };
        assert_eq!(err.to_string(), "attachment failed: zero height");
        assert_eq!(
            BindError::InvalidConfig("bad".to_string()).to_string(),
            "invalid configuration: bad"
        );
    }
}
