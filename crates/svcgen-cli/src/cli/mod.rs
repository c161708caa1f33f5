//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "svcgen",
    bin_name = "svcgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create a new Node.js service from a template",
    long_about = "svcgen asks for a service name, an author and a license, copies \
                  the service template into ./<name>, patches its package.json \
                  and installs dependencies.",
    after_help = "EXAMPLES:\n\
        \x20 svcgen\n\
        \x20 svcgen --name billing-api --author \"Jane Doe\" --license MIT\n\
        \x20 svcgen --template ./my-template --skip-install",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub create: CreateArgs,
}

// ── create ────────────────────────────────────────────────────────────────────

/// What to create and from where.
#[derive(Debug, Clone, Default, Args)]
pub struct CreateArgs {
    /// Use this template directory instead of the configured/bundled one.
    #[arg(long = "template", value_name = "DIR", help = "Template directory")]
    pub template: Option<PathBuf>,

    /// Service name; skips the interactive prompt.
    #[arg(
        long = "name",
        value_name = "NAME",
        requires_all = ["author", "license"],
        help = "Service name (kebab-case); requires --author and --license"
    )]
    pub name: Option<String>,

    #[arg(
        long = "author",
        value_name = "AUTHOR",
        requires = "name",
        help = "Author written to package.json"
    )]
    pub author: Option<String>,

    #[arg(
        long = "license",
        value_name = "LICENSE",
        requires = "name",
        help = "License written to package.json"
    )]
    pub license: Option<String>,

    /// Create the project but do not run the installer.
    #[arg(long = "skip-install", help = "Do not install dependencies")]
    pub skip_install: bool,
}

impl CreateArgs {
    /// All three answers, when given on the command line.
    pub fn preset_answers(&self) -> Option<(&str, &str, &str)> {
        match (&self.name, &self.author, &self.license) {
            (Some(name), Some(author), Some(license)) => Some((name, author, license)),
            _ => None,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
