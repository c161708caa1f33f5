//! svcgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the svcgen
//! service scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           svcgen-cli (CLI)              │
//! │  (Prompter, Reporter, config, logging)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (Orchestrator, TemplateCopier, Patcher) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Installer, Prompter, ...)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    svcgen-adapters (Infrastructure)     │
//! │ (LocalFilesystem, CommandInstaller, ..) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use svcgen_core::prelude::*;
//!
//! let report = Orchestrator::new(
//!     Collaborators { prompter, filesystem, installer, reporter },
//!     TemplateLayout::node("templates/base-service-template"),
//!     std::env::current_dir()?,
//! )
//! .run();
//!
//! assert!(report.is_success());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Collaborators, ManifestPatcher, Orchestrator, RunReport, TemplateCopier,
        ports::{
            ConfigPrompter, DependencyInstaller, DirEntry, EntryKind, Filesystem, InstallStatus,
            Reporter,
        },
    };
    pub use crate::domain::{
        ExclusionSet, Manifest, NameValidator, NameViolation, ServiceConfig, ServiceName, Stage,
        StatusLevel, TemplateLayout, ValidationResult,
    };
    pub use crate::error::{SvcgenError, SvcgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
