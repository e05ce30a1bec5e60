use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputeError {
    /// Caller supplied an input outside the accepted domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generator configuration is unusable
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ComputeError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ComputeError::InvalidArgument(message.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ComputeError::InvalidArgument(_))
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
