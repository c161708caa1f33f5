//! Local filesystem adapter using std::fs.

use std::fs;
use std::io;
use std::path::Path;

use svcgen_core::{
    application::{
        ApplicationError,
        ports::{DirEntry, EntryKind, Filesystem},
    },
    error::{SvcgenError, SvcgenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn list_dir(&self, path: &Path) -> SvcgenResult<Vec<DirEntry>> {
        let reader = fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;

        let mut entries = Vec::new();
        for entry in reader {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            let entry_path = entry.path();
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                // Cannot be copied by name and never equals a kebab-case name.
                Err(raw) => {
                    entries.push(DirEntry::new(
                        raw.to_string_lossy().into_owned(),
                        EntryKind::Other,
                    ));
                    continue;
                }
            };

            // `DirEntry::file_type` does not follow symlinks.
            let file_type = entry
                .file_type()
                .map_err(|e| map_io_error(&entry_path, e, "get file type"))?;
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };

            entries.push(DirEntry::new(name, kind));
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn create_dir(&self, path: &Path) -> SvcgenResult<()> {
        fs::create_dir(path).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => ApplicationError::ProjectExists {
                path: path.to_path_buf(),
            }
            .into(),
            _ => map_io_error(path, e, "create directory"),
        })
    }

    fn read_to_string(&self, path: &Path) -> SvcgenResult<String> {
        fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File is not valid UTF-8 text; binary files are not supported".into(),
            }
            .into(),
            _ => map_io_error(path, e, "read file"),
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> SvcgenResult<()> {
        fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn remove_dir_all(&self, path: &Path) -> SvcgenResult<()> {
        fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> SvcgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
