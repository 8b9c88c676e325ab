//! # CLI Error Type
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Shell                              │
//! │                                                                         │
//! │  CoreError::InvalidInput ──► CliError::Core ──► printed, loop continues │
//! │  CoreError::CartTooLarge ──► CliError::Core ──► printed, loop continues │
//! │                                                                         │
//! │  io::Error ────────────────► CliError::Io ────► run() returns, exit 1   │
//! │  end of input ─────────────► CliError::InputClosed ──► clean exit       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use shopcart_core::{CoreError, ValidationError};
use thiserror::Error;

/// Errors raised while driving a session.
#[derive(Debug, Error)]
pub enum CliError {
    /// A core rule rejected the input.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering a receipt as JSON failed.
    #[error("Could not render receipt: {0}")]
    Render(#[from] serde_json::Error),

    /// Stdin reached end of file.
    #[error("Input closed")]
    InputClosed,
}

/// Machine-readable error codes, used as a log field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Cart operation failed
    CartError,

    /// Terminal I/O failed
    IoError,

    /// Input ended
    InputClosed,

    /// Anything else
    Internal,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::CartError => "CART_ERROR",
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::InputClosed => "INPUT_CLOSED",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CliError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::Core(CoreError::InvalidInput(_)) => ErrorCode::ValidationError,
            CliError::Core(CoreError::CartTooLarge { .. }) => ErrorCode::CartError,
            CliError::Io(_) => ErrorCode::IoError,
            CliError::InputClosed => ErrorCode::InputClosed,
            CliError::Render(_) => ErrorCode::Internal,
        }
    }

    /// Whether the shell can report this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CliError::Core(_))
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::Core(CoreError::InvalidInput(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let err = CliError::from(ValidationError::Required {
            field: "name".to_string(),
        });
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "Invalid input: name is required");

        let err = CliError::from(CoreError::CartTooLarge { max: 1000 });
        assert_eq!(err.code().to_string(), "CART_ERROR");

        assert_eq!(CliError::InputClosed.code(), ErrorCode::InputClosed);
        assert!(!CliError::InputClosed.is_recoverable());
    }

    #[test]
    fn test_io_error_is_fatal() {
        let err = CliError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"));
        assert_eq!(err.code(), ErrorCode::IoError);
        assert!(!err.is_recoverable());
    }
}
