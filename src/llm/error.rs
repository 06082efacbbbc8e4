//! Text generation backend errors

use thiserror::Error;

/// Why a text generator produced no content
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackendError {
    /// Provider rejected or failed the completion request
    #[error("API error: {message}")]
    ApiError { message: String },

    #[error("Request timed out after {seconds} seconds")]
    TimeoutError { seconds: u64 },

    /// Completion succeeded but carried no text
    #[error("Invalid response from text generator: {message}")]
    InvalidResponse { message: String },

    /// Generator could not be built for the configured provider
    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Error: {message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = BackendError::ApiError {
            message: "groq request failed: 503 Service Unavailable".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "API error: groq request failed: 503 Service Unavailable"
        );
    }

    #[test]
    fn test_timeout_display() {
        let error = BackendError::TimeoutError { seconds: 30 };
        assert_eq!(error.to_string(), "Request timed out after 30 seconds");
    }

    #[test]
    fn test_configuration_error_display() {
        let error = BackendError::ConfigurationError {
            message: "Provider cohere is not supported".to_string(),
        };
        assert!(error.to_string().starts_with("Configuration error:"));
    }
}
