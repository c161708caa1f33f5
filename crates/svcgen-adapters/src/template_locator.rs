//! Template root discovery.
//!
//! # Lookup order
//!
//! ```text
//! 1. explicit      --template <DIR>
//! 2. configured    [template] path = "..."
//! 3. installed     <dir of svcgen executable>/templates/base-service-template
//! 4. bundled       templates/base-service-template in the source checkout
//! ```
//!
//! An explicit or configured path is trusted: if it is not a directory the
//! lookup fails instead of falling through to the defaults.

use std::fmt;
use std::path::{Path, PathBuf};

use svcgen_core::error::{SvcgenError, SvcgenResult};
use tracing::{debug, instrument};

/// Template directory name, relative to an install or checkout root.
pub const TEMPLATE_DIR: &str = "templates/base-service-template";

/// Where a candidate root came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSource {
    Explicit,
    Configured,
    Installed,
    Bundled,
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Explicit => "--template flag",
            Self::Configured => "config file",
            Self::Installed => "next to executable",
            Self::Bundled => "bundled",
        })
    }
}

/// Resolves the template root directory.
#[derive(Debug, Clone, Default)]
pub struct TemplateLocator {
    explicit: Option<PathBuf>,
    configured: Option<PathBuf>,
    exe_dir: Option<PathBuf>,
    bundled: Option<PathBuf>,
}

impl TemplateLocator {
    /// Locator with the installed and bundled defaults filled in.
    pub fn new() -> Self {
        Self {
            exe_dir: std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf)),
            bundled: Some(bundled_template_dir()),
            ..Self::default()
        }
    }

    pub fn with_explicit(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path;
        self
    }

    pub fn with_configured(mut self, path: Option<PathBuf>) -> Self {
        self.configured = path;
        self
    }

    /// Override the executable directory (tests).
    pub fn with_exe_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.exe_dir = dir;
        self
    }

    /// Override the bundled fallback (tests).
    pub fn with_bundled(mut self, dir: Option<PathBuf>) -> Self {
        self.bundled = dir;
        self
    }

    /// Every candidate in lookup order.
    pub fn candidates(&self) -> Vec<(TemplateSource, PathBuf)> {
        [
            (TemplateSource::Explicit, self.explicit.clone()),
            (TemplateSource::Configured, self.configured.clone()),
            (
                TemplateSource::Installed,
                self.exe_dir.as_ref().map(|dir| dir.join(TEMPLATE_DIR)),
            ),
            (TemplateSource::Bundled, self.bundled.clone()),
        ]
        .into_iter()
        .filter_map(|(source, path)| path.map(|p| (source, p)))
        .collect()
    }

    /// Resolve the template root.
    ///
    /// # Errors
    ///
    /// `Configuration` if a user-supplied path is not a directory or no
    /// default location exists.
    #[instrument(skip_all)]
    pub fn locate(&self) -> SvcgenResult<PathBuf> {
        let candidates = self.candidates();

        for (source, path) in &candidates {
            match source {
                TemplateSource::Explicit | TemplateSource::Configured => {
                    if path.is_dir() {
                        debug!(%source, path = %path.display(), "Template root resolved");
                        return Ok(path.clone());
                    }
                    return Err(SvcgenError::Configuration {
                        message: format!(
                            "template root {} ({source}) is not a directory",
                            path.display()
                        ),
                    });
                }
                TemplateSource::Installed | TemplateSource::Bundled => {
                    if path.is_dir() {
                        debug!(%source, path = %path.display(), "Template root resolved");
                        return Ok(path.clone());
                    }
                    debug!(%source, path = %path.display(), "No template here");
                }
            }
        }

        let tried = candidates
            .iter()
            .map(|(_, p)| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(SvcgenError::Configuration {
            message: format!("no template directory found (tried: {tried})"),
        })
    }
}

/// `templates/base-service-template` at the workspace root of this checkout.
pub fn bundled_template_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join(TEMPLATE_DIR)
}
