//! Error types for the SHA-1 streaming engine
//!
//! The engine performs no I/O, so every failure is a caller fault detected
//! at the API boundary. They are grouped under a single validation category.

use thiserror::Error;

pub mod validation;

pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Whether this error came from an unknown digest algorithm name
    pub fn is_unsupported_algorithm(&self) -> bool {
        matches!(
            self,
            Self::Validation(ValidationError::UnsupportedAlgorithm { .. })
        )
    }

    /// Whether this error came from missing or out-of-range input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Validation(ValidationError::InvalidInput { .. }))
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Validation(ValidationError::invalid_configuration(err.to_string()))
    }
}
