//! Dependency installer that shells out to a package manager.

use std::path::Path;
use std::process::{Command, Stdio};

use svcgen_core::{
    application::{
        ApplicationError,
        ports::{DependencyInstaller, InstallStatus},
    },
    error::SvcgenResult,
};
use tracing::{debug, instrument};

/// Default package manager program. On Windows `npm` is a batch shim.
#[cfg(windows)]
pub const DEFAULT_PROGRAM: &str = "npm.cmd";
#[cfg(not(windows))]
pub const DEFAULT_PROGRAM: &str = "npm";

/// Default install arguments.
pub const DEFAULT_ARGS: &[&str] = &["i"];

/// Runs `program args...` in the project directory with inherited stdio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInstaller {
    program: String,
    args: Vec<String>,
}

impl CommandInstaller {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `npm i`.
    pub fn npm() -> Self {
        Self::new(DEFAULT_PROGRAM, DEFAULT_ARGS.iter().copied())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for CommandInstaller {
    fn default() -> Self {
        Self::npm()
    }
}

impl DependencyInstaller for CommandInstaller {
    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[instrument(skip_all, fields(command = %self.describe(), dir = %project_dir.display()))]
    fn install(&self, project_dir: &Path) -> SvcgenResult<InstallStatus> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(project_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ApplicationError::InstallerUnavailable {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        debug!(code = ?status.code(), "Installer exited");
        Ok(InstallStatus { code: status.code() })
    }
}
