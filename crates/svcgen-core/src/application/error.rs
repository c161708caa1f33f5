//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The user declined to provide a config.
    #[error("No config provided")]
    Aborted,

    /// The prompt itself failed (terminal gone, I/O error).
    #[error("Prompt failed: {reason}")]
    Prompt { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The destination directory already exists.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// The template manifest could not be parsed.
    #[error("Template manifest {path} is invalid: {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    /// The installer ran and exited unsuccessfully. `None` means it was
    /// terminated by a signal.
    #[error("Dependency installation failed ({})", describe_code(.code))]
    InstallFailed { code: Option<i32> },

    /// The installer could not be started at all.
    #[error("Could not run installer '{program}': {reason}")]
    InstallerUnavailable { program: String, reason: String },
}

fn describe_code(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Aborted => vec!["Nothing was created".into()],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Binary template files are not supported (text only)".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different service name".into(),
            ],
            Self::ManifestParse { path, .. } => vec![
                format!("Fix the template manifest at {}", path.display()),
                "This is a template problem, not an input problem".into(),
            ],
            Self::InstallFailed { .. } => vec![
                "The project directory was kept as-is".into(),
                "Check the installer output above, then re-run it by hand".into(),
            ],
            Self::InstallerUnavailable { program, .. } => vec![
                format!("Ensure '{program}' is installed and in your PATH"),
                "Or set install.program in the config file".into(),
            ],
            Self::Prompt { .. } => vec!["Run svcgen from an interactive terminal".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Aborted => ErrorCategory::Aborted,
            Self::Prompt { .. } => ErrorCategory::Internal,
            Self::FilesystemError { .. } => ErrorCategory::Filesystem,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::ManifestParse { .. } => ErrorCategory::Manifest,
            Self::InstallFailed { .. } | Self::InstallerUnavailable { .. } => {
                ErrorCategory::Subprocess
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_failed_message_includes_code() {
        let err = ApplicationError::InstallFailed { code: Some(1) };
        assert_eq!(err.to_string(), "Dependency installation failed (exit status 1)");
    }

    #[test]
    fn install_killed_by_signal() {
        let err = ApplicationError::InstallFailed { code: None };
        assert!(err.to_string().contains("signal"));
    }

    #[test]
    fn install_failure_says_directory_kept() {
        let err = ApplicationError::InstallFailed { code: Some(2) };
        assert!(err.suggestions().iter().any(|s| s.contains("kept")));
        assert_eq!(err.category(), ErrorCategory::Subprocess);
    }

    #[test]
    fn project_exists_is_validation() {
        let err = ApplicationError::ProjectExists {
            path: PathBuf::from("/tmp/x"),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
