//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// No bundle in the catalog has this identifier
    #[error("Unknown bundle: {0}")]
    UnknownBundle(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_bundle_error_message() {
        let err = DomainError::UnknownBundle("7".to_string());
        assert_eq!(err.to_string(), "Unknown bundle: 7");
    }

    #[test]
    fn unknown_bundle_keeps_raw_identifier() {
        let err = DomainError::UnknownBundle(String::new());
        assert_eq!(err, DomainError::UnknownBundle(String::new()));
        assert_eq!(err.to_string(), "Unknown bundle: ");
    }
}
