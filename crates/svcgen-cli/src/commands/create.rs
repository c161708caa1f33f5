//! Implementation of the default `svcgen` command.
//!
//! Responsibility: resolve the template, wire the adapters into the core
//! orchestrator, run it once and translate the outcome. No business logic
//! lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use svcgen_adapters::{CommandInstaller, LocalFilesystem, TemplateLocator};
use svcgen_core::{
    application::{Collaborators, ConfigPrompter, DependencyInstaller, Orchestrator},
    domain::{ExclusionSet, TemplateLayout},
};

use crate::{
    cli::CreateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::PresetPrompter,
};

/// Execute one scaffolding run.
///
/// Dispatch sequence:
/// 1. Resolve the template root (flag, config, install dir, bundled)
/// 2. Pick the prompter (flags or interactive)
/// 3. Run the orchestrator in the current directory
/// 4. Print next steps on success
#[instrument(skip_all)]
pub fn execute(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Template
    let layout = resolve_layout(&args, &config)?;
    debug!(
        template = %layout.root().display(),
        manifest = layout.manifest_name(),
        excludes = layout.excludes().len(),
        "Template resolved"
    );

    // 2. Adapters
    let workspace = std::env::current_dir()?;
    let prompter = build_prompter(&args, &output)?;
    let installer =
        CommandInstaller::new(config.install.program.clone(), config.install.args.clone());
    let install_hint = installer.describe();
    let skip_install = args.skip_install || config.install.skip;

    // 3. Run
    info!(workspace = %workspace.display(), skip_install, "Run started");
    let report = Orchestrator::new(
        Collaborators {
            prompter,
            filesystem: Box::new(LocalFilesystem::new()),
            installer: Box::new(installer),
            reporter: Box::new(output.clone()),
        },
        layout,
        workspace,
    )
    .skip_install(skip_install)
    .run();

    debug!(history = ?report.history, "Pipeline finished");
    if let Some(err) = report.error {
        return Err(CliError::Pipeline(err));
    }

    // 4. Next steps
    if let Some(dir) = report.project_dir.as_deref().and_then(|p| p.file_name()) {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", dir.to_string_lossy()))?;
        if skip_install {
            output.print(&format!("  {install_hint}"))?;
        }
    }

    Ok(())
}

/// Template root plus the manifest/exclusion settings from config.
fn resolve_layout(args: &CreateArgs, config: &AppConfig) -> CliResult<TemplateLayout> {
    if config.template.manifest.trim().is_empty() {
        return Err(CliError::ConfigError {
            message: "template.manifest must not be empty".into(),
            source: None,
        });
    }

    let root: PathBuf = TemplateLocator::new()
        .with_explicit(args.template.clone())
        .with_configured(config.template.path.clone())
        .locate()?;

    let excludes: ExclusionSet = config.template.exclude.iter().cloned().collect();
    Ok(TemplateLayout::new(
        root,
        config.template.manifest.clone(),
        excludes,
    ))
}

fn build_prompter(args: &CreateArgs, output: &OutputManager) -> CliResult<Box<dyn ConfigPrompter>> {
    match args.preset_answers() {
        Some((name, author, license)) => Ok(Box::new(PresetPrompter::new(name, author, license))),
        None => interactive_prompter(output),
    }
}

#[cfg(feature = "interactive")]
fn interactive_prompter(output: &OutputManager) -> CliResult<Box<dyn ConfigPrompter>> {
    Ok(Box::new(crate::prompt::DialoguerPrompter::new(
        output.supports_color(),
    )))
}

#[cfg(not(feature = "interactive"))]
fn interactive_prompter(_output: &OutputManager) -> CliResult<Box<dyn ConfigPrompter>> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
