//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::UnknownBundle("8".to_string()).into();
        assert_eq!(err.to_string(), "Unknown bundle: 8");
    }

    #[test]
    fn external_service_error_message() {
        let err = ApplicationError::ExternalService("telegram down".to_string());
        assert_eq!(err.to_string(), "External service error: telegram down");
    }

    #[test]
    fn configuration_message() {
        assert_eq!(
            ApplicationError::Configuration("no token".to_string()).to_string(),
            "Configuration error: no token"
        );
    }
}
