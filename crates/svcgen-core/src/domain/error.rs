// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use super::pipeline::Stage;
use super::validation::NameViolation;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports hold them after the run ends)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid service name '{name}': {violation}")]
    InvalidServiceName {
        name: String,
        violation: NameViolation,
    },

    #[error("Manifest is not valid JSON: {reason}")]
    ManifestSyntax { reason: String },

    #[error("Manifest must be a JSON object, found {found}")]
    ManifestNotObject { found: &'static str },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Illegal pipeline transition: {from} -> {to}")]
    IllegalTransition { from: Stage, to: Stage },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidServiceName { violation, .. } => vec![
                violation.message().into(),
                "Examples: my-service, billing-api, worker2".into(),
            ],
            Self::ManifestSyntax { .. } | Self::ManifestNotObject { .. } => vec![
                "The template manifest is broken, not your input".into(),
                "Its top level must be a JSON object".into(),
            ],
            Self::IllegalTransition { .. } => vec![
                "This is a bug in svcgen, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidServiceName { .. } => ErrorCategory::Validation,
            Self::ManifestSyntax { .. } | Self::ManifestNotObject { .. } => {
                ErrorCategory::Manifest
            }
            Self::IllegalTransition { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Manifest,
    Internal,
}
