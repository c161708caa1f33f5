//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use svcgen_core::{
    application::{
        ApplicationError,
        ports::{DirEntry, EntryKind, Filesystem},
    },
    error::{SvcgenError, SvcgenResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree, so a test can hand one clone to the
/// orchestrator and inspect the result through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                self.directories.contains(parent) || parent.parent().is_none()
            }
            _ => true,
        }
    }

    fn occupied(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories (builder style).
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        self.add_file(path.as_ref(), content.into());
        self
    }

    /// Seed an empty directory and its parents (builder style).
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            insert_ancestors(&mut inner, path.as_ref());
        }
        self
    }

    fn add_file(&self, path: &Path, content: String) {
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner, parent);
            }
            inner.files.insert(path.to_path_buf(), content);
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All file paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> SvcgenResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write(&self) -> SvcgenResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| poisoned())
    }
}

fn insert_ancestors(inner: &mut MemoryFilesystemInner, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        inner.directories.insert(current.clone());
    }
}

fn poisoned() -> SvcgenError {
    SvcgenError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

fn not_found(path: &Path, what: &str) -> SvcgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("{what} does not exist"),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn list_dir(&self, path: &Path) -> SvcgenResult<Vec<DirEntry>> {
        let inner = self.read()?;
        if !inner.directories.contains(path) {
            return Err(not_found(path, "Directory"));
        }

        let child_name = |p: &Path| -> Option<String> {
            (p.parent() == Some(path))
                .then(|| p.file_name())
                .flatten()
                .map(|n| n.to_string_lossy().into_owned())
        };

        let mut entries: Vec<DirEntry> = inner
            .directories
            .iter()
            .filter_map(|d| child_name(d).map(|n| DirEntry::new(n, EntryKind::Directory)))
            .chain(
                inner
                    .files
                    .keys()
                    .filter_map(|f| child_name(f).map(|n| DirEntry::new(n, EntryKind::File))),
            )
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn create_dir(&self, path: &Path) -> SvcgenResult<()> {
        let mut inner = self.write()?;
        if inner.occupied(path) {
            return Err(ApplicationError::ProjectExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        if !inner.parent_exists(path) {
            return Err(not_found(path, "Parent directory"));
        }
        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> SvcgenResult<String> {
        self.read()?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path, "File"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SvcgenResult<()> {
        let mut inner = self.write()?;
        if !inner.parent_exists(path) {
            return Err(not_found(path, "Parent directory"));
        }
        if inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Is a directory".into(),
            }
            .into());
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> SvcgenResult<()> {
        let mut inner = self.write()?;
        if !inner.directories.contains(path) {
            return Err(not_found(path, "Directory"));
        }
        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}
