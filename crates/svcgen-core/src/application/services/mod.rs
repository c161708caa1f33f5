//! Application services - orchestrate use cases.
//!
//! `TemplateCopier` and `ManifestPatcher` materialize a project; the
//! `Orchestrator` sequences prompt, materialization and installation.

pub mod manifest_patcher;
pub mod orchestrator;
pub mod template_copier;

pub use manifest_patcher::ManifestPatcher;
pub use orchestrator::{Collaborators, Orchestrator, RunReport};
pub use template_copier::{CopyStats, TemplateCopier};
