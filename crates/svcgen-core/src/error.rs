//! Unified error handling for svcgen core.
//!
//! Wraps domain and application errors in one type with a category and
//! user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for svcgen core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SvcgenError {
    /// Errors from the domain layer (rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O and orchestration).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl SvcgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file and SVCGEN_* environment variables".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in svcgen".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Manifest => ErrorCategory::Manifest,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` when the user chose to stop rather than something breaking.
    pub fn is_abort(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::Aborted))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad name or collision.
    Validation,
    /// The user declined to answer.
    Aborted,
    /// Copy, create, read or write failure.
    Filesystem,
    /// Broken template manifest.
    Manifest,
    /// Installer failed or could not start.
    Subprocess,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type SvcgenResult<T> = Result<T, SvcgenError>;
