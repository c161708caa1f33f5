//! Application layer for svcgen.
//!
//! This layer contains:
//! - **Services**: TemplateCopier, ManifestPatcher and the Orchestrator
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the domain layer and the ports. Rules
//! such as name syntax or manifest merging live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    Collaborators, CopyStats, ManifestPatcher, Orchestrator, RunReport, TemplateCopier,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ConfigPrompter, DependencyInstaller, Filesystem, InstallStatus, Reporter};

pub use error::ApplicationError;
