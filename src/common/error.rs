//! Error handling for the Spectra reporting engine

use thiserror::Error;

/// Main error type for Spectra operations
#[derive(Error, Debug)]
pub enum SpectraError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Read failure reported by a [`crate::model::ReportSource`]
    /// implementation. The pipeline never wraps it; it reaches the caller
    /// unchanged.
    #[error("Source error: {0}")]
    Source(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SpectraError>;

/// Result type alias for Spectra operations (alias for Result)
pub type SpectraResult<T> = std::result::Result<T, SpectraError>;

/// Macro for creating internal errors
#[macro_export]
macro_rules! internal_err {
    ($msg:expr) => {
        $crate::common::error::SpectraError::Internal($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::common::error::SpectraError::Internal(format!($fmt, $($arg)*))
    };
}
