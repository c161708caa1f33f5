//! Manifest Patcher - renders the template manifest with the user's answers.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{Manifest, ManifestOverrides},
    error::SvcgenResult,
};

/// Reads and merges the manifest through the [`Filesystem`] port. The
/// orchestrator writes the result once the project directory is populated.
pub struct ManifestPatcher<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> ManifestPatcher<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Read the template manifest and return the patched, serialized text.
    ///
    /// Has no side effects, so callers can run it before creating anything.
    ///
    /// # Errors
    ///
    /// `ManifestParse` if the file is not a JSON object; `FilesystemError`
    /// if it cannot be read.
    #[instrument(skip_all, fields(from = %template_manifest.display()))]
    pub fn render(
        &self,
        template_manifest: &Path,
        overrides: &ManifestOverrides,
    ) -> SvcgenResult<String> {
        let raw = self.filesystem.read_to_string(template_manifest)?;
        let manifest = Manifest::parse(&raw).map_err(|e| ApplicationError::ManifestParse {
            path: template_manifest.to_path_buf(),
            reason: e.to_string(),
        })?;

        debug!(
            fields = manifest.len(),
            overrides = overrides.len(),
            "Merging manifest"
        );
        Ok(manifest.merged(overrides).to_pretty_string())
    }
}
