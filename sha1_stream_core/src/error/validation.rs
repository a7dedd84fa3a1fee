//! Validation related error types

use thiserror::Error;

/// Caller-supplied input that the engine cannot accept
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Digest algorithm name that is not registered
    #[error("Digest method not supported: '{algorithm}'")]
    UnsupportedAlgorithm { algorithm: String },

    /// Missing or malformed input where a value was required
    #[error("Invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl ValidationError {
    /// Create an unsupported algorithm error
    pub fn unsupported_algorithm(algorithm: &str) -> Self {
        Self::UnsupportedAlgorithm {
            algorithm: algorithm.to_string(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(parameter: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}
