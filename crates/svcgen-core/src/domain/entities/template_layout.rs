use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Name of the dependency cache directory that is never copied.
pub const DEPENDENCY_CACHE_DIR: &str = "node_modules";

/// Default manifest file name.
pub const DEFAULT_MANIFEST: &str = "package.json";

/// Entry names skipped at every level of the template tree.
///
/// Matching is by exact file name, not by path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExclusionSet(BTreeSet<String>);

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.insert(name);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.0.insert(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Where the template lives and how to read it.
///
/// Invariant: `excludes` always contains `manifest_name`, because the
/// manifest is patched rather than copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLayout {
    root: PathBuf,
    manifest_name: String,
    excludes: ExclusionSet,
}

impl TemplateLayout {
    pub fn new(
        root: impl Into<PathBuf>,
        manifest_name: impl Into<String>,
        excludes: ExclusionSet,
    ) -> Self {
        let manifest_name = manifest_name.into();
        let excludes = excludes.with(manifest_name.clone());
        Self {
            root: root.into(),
            manifest_name,
            excludes,
        }
    }

    /// `package.json` manifest, `node_modules` skipped.
    pub fn node(root: impl Into<PathBuf>) -> Self {
        Self::new(
            root,
            DEFAULT_MANIFEST,
            ExclusionSet::new().with(DEPENDENCY_CACHE_DIR),
        )
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest_name(&self) -> &str {
        &self.manifest_name
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest_name)
    }

    pub fn excludes(&self) -> &ExclusionSet {
        &self.excludes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_layout_excludes_cache_and_manifest() {
        let layout = TemplateLayout::node("/tmpl");
        assert!(layout.excludes().contains("node_modules"));
        assert!(layout.excludes().contains("package.json"));
        assert_eq!(layout.manifest_path(), PathBuf::from("/tmpl/package.json"));
    }

    #[test]
    fn manifest_is_always_excluded() {
        let layout = TemplateLayout::new("/t", "service.json", ExclusionSet::new());
        assert!(layout.excludes().contains("service.json"));
        assert_eq!(layout.excludes().len(), 1);
    }

    #[test]
    fn exclusion_is_exact_match() {
        let set: ExclusionSet = ["node_modules"].into_iter().collect();
        assert!(set.contains("node_modules"));
        assert!(!set.contains("node_modules2"));
        assert!(!set.contains("Node_Modules"));
    }
}
