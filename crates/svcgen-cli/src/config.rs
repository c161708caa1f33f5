//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SVCGEN_<SECTION>__<KEY>`, e.g.
//!    `SVCGEN_INSTALL__PROGRAM=pnpm`
//! 3. Config file: `--config <FILE>` (must exist) or the platform config
//!    path (optional)
//! 4. Built-in defaults (always present)
//!
//! ```toml
//! [template]
//! path = "/opt/templates/node-service"
//! manifest = "package.json"
//! exclude = ["node_modules"]
//!
//! [install]
//! program = "npm"
//! args = ["i"]
//! skip = false
//!
//! [output]
//! no_color = false
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use svcgen_adapters::installer::{DEFAULT_ARGS, DEFAULT_PROGRAM};
use svcgen_core::domain::{DEFAULT_MANIFEST, DEPENDENCY_CACHE_DIR};

const ENV_PREFIX: &str = "SVCGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the template lives and how to read it.
    pub template: TemplateConfig,
    /// The dependency install step.
    pub install: InstallConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Template root; `None` means the installed or bundled template.
    pub path: Option<PathBuf>,
    /// Manifest file patched with the answers (never copied verbatim).
    pub manifest: String,
    /// Entry names skipped at every level of the copy.
    pub exclude: Vec<String>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            path: None,
            manifest: DEFAULT_MANIFEST.into(),
            exclude: vec![DEPENDENCY_CACHE_DIR.into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    pub program: String,
    pub args: Vec<String>,
    /// Same as always passing `--skip-install`.
    pub skip: bool,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.into(),
            args: DEFAULT_ARGS.iter().map(|a| a.to_string()).collect(),
            skip: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from file, environment and defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; when it is
    /// `None` the platform default is read if present.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with_env(config_file, None)
    }

    /// [`Self::load`] with an explicit environment instead of the process
    /// one (tests).
    pub fn load_with_env(
        config_file: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::from(Self::config_path()).required(false),
        };

        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(" ")
            .with_list_parse_key("install.args")
            .with_list_parse_key("template.exclude")
            .try_parsing(true)
            .source(env);

        let settings = Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()
            .with_context(|| match config_file {
                Some(path) => format!("failed to read config file {}", path.display()),
                None => "failed to read configuration".to_string(),
            })?;

        settings
            .try_deserialize()
            .context("configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.svcgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "svcgen", "svcgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".svcgen.toml"))
    }
}
