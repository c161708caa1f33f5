//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `svcgen-adapters` and `svcgen-cli` crates provide implementations.

use std::collections::HashSet;
use std::path::Path;

use crate::domain::{ServiceConfig, StatusLevel};
use crate::error::SvcgenResult;

/// What kind of entry a directory listing returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks, sockets, names that are not UTF-8 and anything else the
    /// copier does not handle.
    Other,
}

/// One immediate child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::File)
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::Directory)
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `svcgen_adapters::filesystem::LocalFilesystem` (production)
/// - `svcgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `create_dir` is exclusive: it fails if the path already exists and
///   never creates missing parents.
/// - `list_dir` returns entries sorted by name so traversal order is stable.
/// - Contents are text; a file that is not valid UTF-8 is a read error.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// List the immediate children of a directory.
    fn list_dir(&self, path: &Path) -> SvcgenResult<Vec<DirEntry>>;

    /// Create a single new directory; fail if anything exists at `path`.
    fn create_dir(&self, path: &Path) -> SvcgenResult<()>;

    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> SvcgenResult<String>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> SvcgenResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> SvcgenResult<()>;
}

/// Port for collecting the answers of one run.
///
/// Implementations validate the service name against `existing` (the
/// entries of the directory the project will be created in). `Ok(None)`
/// means the user aborted.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigPrompter {
    fn prompt(&self, existing: &HashSet<String>) -> SvcgenResult<Option<ServiceConfig>>;
}

/// Exit status of the install command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallStatus {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl InstallStatus {
    pub const SUCCESS: InstallStatus = InstallStatus { code: Some(0) };

    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Port for the external package manager.
///
/// Implemented by `svcgen_adapters::installer::CommandInstaller`.
#[cfg_attr(test, mockall::automock)]
pub trait DependencyInstaller {
    /// Human-readable command line, for logs.
    fn describe(&self) -> String;

    /// Run the install in `project_dir` and wait for it to exit.
    ///
    /// Returns `Err` only when the command could not be run at all; a
    /// command that ran and failed is `Ok` with a non-zero status.
    fn install(&self, project_dir: &Path) -> SvcgenResult<InstallStatus>;
}

/// Port for user-facing status lines.
///
/// Implemented by `svcgen_cli::output::OutputManager`.
#[cfg_attr(test, mockall::automock)]
pub trait Reporter {
    fn report(&self, level: StatusLevel, message: &str);
}
