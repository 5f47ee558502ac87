//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
///
/// The conversion engine itself never fails; these errors come from the layers
/// around it (format lookup, option parsing, operation dispatch).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Format does not support the requested direction
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// Operation name not present in the operation table
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
    /// Option value that cannot be interpreted
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            FormatError::FormatNotFound("rtf".to_string()).to_string(),
            "Format 'rtf' not found"
        );
        assert_eq!(
            FormatError::UnknownOperation("shout".to_string()).to_string(),
            "Unknown operation: shout"
        );
    }
}
