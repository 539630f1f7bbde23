//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Algebra failures are never retried: every operation is deterministic, so the
/// category only tells the caller whether its input or its request was wrong.
#[derive(Debug, Error)]
pub enum AppError {
    /// An operand was missing, out of range or of the wrong kind.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The arguments were individually valid but the operation cannot be carried out.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// The operation is not defined for the given kind of unit.
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Returns the error code for diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::InvalidOperation(_) => "INVALID_OPERATION",
            Self::NotSupported(_) => "NOT_SUPPORTED",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Returns true if the caller supplied bad input.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::NotSupported(_))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
