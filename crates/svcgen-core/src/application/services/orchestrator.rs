//! Orchestrator - main application driver.
//!
//! Runs one pass of the pipeline:
//! 1. Ask for a config (validated service name, author, license)
//! 2. Render the manifest, copy the template, write the manifest
//! 3. Run the dependency installer in the new directory
//! 4. Report the outcome
//!
//! Nothing is retried. Every error ends the run in [`Stage::Failed`] with
//! exactly one status line describing it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ConfigPrompter, DependencyInstaller, Filesystem, Reporter},
        services::{ManifestPatcher, TemplateCopier},
    },
    domain::{ServiceConfig, Stage, StatusLevel, TemplateLayout},
    error::{SvcgenError, SvcgenResult},
};

/// The adapters an [`Orchestrator`] drives.
pub struct Collaborators {
    pub prompter: Box<dyn ConfigPrompter>,
    pub filesystem: Box<dyn Filesystem>,
    pub installer: Box<dyn DependencyInstaller>,
    pub reporter: Box<dyn Reporter>,
}

/// Result of [`Orchestrator::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Always terminal: `Done` or `Failed`.
    pub stage: Stage,
    /// Every stage visited, in order, starting with `Idle`.
    pub history: Vec<Stage>,
    /// Set once the project directory has been fully materialized.
    pub project_dir: Option<PathBuf>,
    /// Set when `stage` is `Failed`.
    pub error: Option<SvcgenError>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.stage == Stage::Done
    }
}

/// Sequences prompt, materialization and installation for one run.
pub struct Orchestrator {
    ports: Collaborators,
    layout: TemplateLayout,
    workspace: PathBuf,
    skip_install: bool,
    stage: Stage,
    history: Vec<Stage>,
    project_dir: Option<PathBuf>,
}

impl Orchestrator {
    /// `workspace` is the directory the new project is created in.
    pub fn new(ports: Collaborators, layout: TemplateLayout, workspace: impl Into<PathBuf>) -> Self {
        Self {
            ports,
            layout,
            workspace: workspace.into(),
            skip_install: false,
            stage: Stage::Idle,
            history: vec![Stage::Idle],
            project_dir: None,
        }
    }

    /// Stop after materialization instead of running the installer.
    pub fn skip_install(mut self, skip: bool) -> Self {
        self.skip_install = skip;
        self
    }

    /// Run the pipeline to completion. Never panics, never returns early:
    /// failures are captured in the report.
    #[instrument(
        skip_all,
        fields(
            template = %self.layout.root().display(),
            workspace = %self.workspace.display()
        )
    )]
    pub fn run(mut self) -> RunReport {
        let error = match self.drive() {
            Ok(()) => None,
            Err(err) => {
                self.report_failure(&err);
                if self.stage.can_advance_to(Stage::Failed) {
                    self.stage = Stage::Failed;
                    self.history.push(Stage::Failed);
                } else {
                    warn!(stage = %self.stage, "Failure outside an active stage");
                    self.stage = Stage::Failed;
                }
                Some(err)
            }
        };

        info!(stage = %self.stage, "Run finished");
        RunReport {
            stage: self.stage,
            history: self.history,
            project_dir: self.project_dir,
            error,
        }
    }

    fn drive(&mut self) -> SvcgenResult<()> {
        // ── Idle -> AwaitingConfig ───────────────────────────────────────
        self.transition(Stage::AwaitingConfig)?;
        let existing = self.existing_entries()?;
        let config = self
            .ports
            .prompter
            .prompt(&existing)?
            .ok_or(ApplicationError::Aborted)?;
        let name = config.service_name().clone();
        info!(service = %name, "Config received");

        // ── AwaitingConfig -> Materializing ──────────────────────────────
        self.transition(Stage::Materializing)?;
        let project_dir = self.workspace.join(name.as_str());
        self.materialize(&config, &project_dir)?;
        self.project_dir = Some(project_dir.clone());
        self.say(
            StatusLevel::Info,
            &format!("Template for \"{name}\" was created!"),
        );

        if self.skip_install {
            self.say(StatusLevel::Warning, "Skipping dependency installation.");
        } else {
            // ── Materializing -> Installing ──────────────────────────────
            self.transition(Stage::Installing)?;
            self.install(&project_dir)?;
        }

        // ── -> Done ──────────────────────────────────────────────────────
        self.transition(Stage::Done)?;
        self.say(
            StatusLevel::Success,
            &format!("A new service \"{name}\" has been successfully created!"),
        );
        Ok(())
    }

    /// Names present in the workspace, for the uniqueness rule.
    fn existing_entries(&self) -> SvcgenResult<HashSet<String>> {
        let entries = self.ports.filesystem.list_dir(&self.workspace)?;
        Ok(entries.into_iter().map(|e| e.name).collect())
    }

    /// Render the manifest first so a broken template fails before anything
    /// is written; then create, copy and write. Rolls back the directory if
    /// anything fails after it was created.
    fn materialize(&self, config: &ServiceConfig, project_dir: &Path) -> SvcgenResult<()> {
        let fs = self.ports.filesystem.as_ref();
        let patcher = ManifestPatcher::new(fs);
        let copier = TemplateCopier::new(fs);

        let manifest = patcher.render(&self.layout.manifest_path(), &config.overrides())?;
        copier.create_root(project_dir)?;

        let filled = copier
            .populate(self.layout.root(), project_dir, self.layout.excludes())
            .and_then(|_| fs.write_file(&project_dir.join(self.layout.manifest_name()), &manifest));

        if let Err(err) = filled {
            warn!(error = %err, "Materialization failed, attempting rollback");
            self.rollback(project_dir);
            return Err(err);
        }
        Ok(())
    }

    fn install(&self, project_dir: &Path) -> SvcgenResult<()> {
        let installer = &self.ports.installer;
        self.say(StatusLevel::Info, "Installing dependencies in progress...");
        info!(command = %installer.describe(), dir = %project_dir.display(), "Installing");

        let status = installer.install(project_dir)?;
        if !status.success() {
            return Err(ApplicationError::InstallFailed { code: status.code }.into());
        }

        self.say(StatusLevel::Success, "All dependencies were successfully installed!");
        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.ports.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }

    fn transition(&mut self, next: Stage) -> SvcgenResult<()> {
        let next = self.stage.advance(next)?;
        debug!(from = %self.stage, to = %next, "Stage transition");
        self.stage = next;
        self.history.push(next);
        Ok(())
    }

    /// The single status line for a failed run.
    fn report_failure(&self, err: &SvcgenError) {
        match err {
            SvcgenError::Application(ApplicationError::Aborted) => {
                self.say(StatusLevel::Warning, "Config was not provided.")
            }
            SvcgenError::Application(ApplicationError::InstallFailed { .. }) => self.say(
                StatusLevel::Error,
                "Something went wrong while dependencies installation.",
            ),
            other => self.say(StatusLevel::Error, &other.to_string()),
        }
    }

    fn say(&self, level: StatusLevel, message: &str) {
        self.ports.reporter.report(level, message);
    }
}
