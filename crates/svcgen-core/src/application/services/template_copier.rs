//! Template Copier - materializes a filtered copy of the template tree.
//!
//! Depth-first and synchronous. The exclusion set is passed down explicitly
//! at every level, so a nested `node_modules` is skipped the same way as a
//! top-level one.

use std::path::Path;

use tracing::{debug, instrument, trace};

use crate::{
    application::ports::{EntryKind, Filesystem},
    domain::ExclusionSet,
    error::SvcgenResult,
};

/// Counts gathered while copying, for logs and tests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyStats {
    pub files: usize,
    /// Directories created below the destination root.
    pub directories: usize,
    /// Entries skipped by name or because of their kind.
    pub skipped: usize,
}

/// Copies a template tree through the [`Filesystem`] port.
pub struct TemplateCopier<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> TemplateCopier<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Create `destination_root` and copy `template_root` into it.
    ///
    /// Fails with `ProjectExists` if the destination is already there; the
    /// exclusive create is the only guard against a name taken between
    /// validation and now.
    pub fn materialize(
        &self,
        template_root: &Path,
        destination_root: &Path,
        excludes: &ExclusionSet,
    ) -> SvcgenResult<CopyStats> {
        self.create_root(destination_root)?;
        self.populate(template_root, destination_root, excludes)
    }

    /// Step 1 of [`Self::materialize`]: exclusive create of the root.
    pub fn create_root(&self, destination_root: &Path) -> SvcgenResult<()> {
        self.filesystem.create_dir(destination_root)
    }

    /// Step 2 of [`Self::materialize`]: copy into an existing, empty root.
    #[instrument(
        skip_all,
        fields(
            from = %template_root.display(),
            to = %destination_root.display()
        )
    )]
    pub fn populate(
        &self,
        template_root: &Path,
        destination_root: &Path,
        excludes: &ExclusionSet,
    ) -> SvcgenResult<CopyStats> {
        let mut stats = CopyStats::default();
        self.copy_dir(template_root, destination_root, excludes, &mut stats)?;
        debug!(
            files = stats.files,
            directories = stats.directories,
            skipped = stats.skipped,
            "Template copied"
        );
        Ok(stats)
    }

    fn copy_dir(
        &self,
        source: &Path,
        destination: &Path,
        excludes: &ExclusionSet,
        stats: &mut CopyStats,
    ) -> SvcgenResult<()> {
        for entry in self.filesystem.list_dir(source)? {
            if excludes.contains(&entry.name) {
                trace!(name = %entry.name, dir = %source.display(), "Excluded");
                stats.skipped += 1;
                continue;
            }

            let from = source.join(&entry.name);
            let to = destination.join(&entry.name);

            match entry.kind {
                EntryKind::File => {
                    let content = self.filesystem.read_to_string(&from)?;
                    self.filesystem.write_file(&to, &content)?;
                    stats.files += 1;
                }
                EntryKind::Directory => {
                    self.filesystem.create_dir(&to)?;
                    stats.directories += 1;
                    self.copy_dir(&from, &to, excludes, stats)?;
                }
                EntryKind::Other => {
                    debug!(path = %from.display(), "Skipping unsupported entry type");
                    stats.skipped += 1;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        path::PathBuf,
        sync::{Arc, Mutex},
    };

    use crate::{
        application::{
            ApplicationError,
            ports::{DirEntry, MockFilesystem},
        },
        domain::DEPENDENCY_CACHE_DIR,
        error::SvcgenError,
    };

    type Log = Arc<Mutex<Vec<String>>>;

    /// Mock backed by a fixed listing:
    ///
    /// ```text
    /// /t/index.js
    /// /t/node_modules/         (excluded)
    /// /t/lib/util.js
    /// /t/lib/node_modules/     (excluded)
    /// /t/link                  (other)
    /// ```
    fn template_fs(created: Log, written: Log) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_list_dir().returning(|path| {
            let listing = match path.to_str().unwrap() {
                "/t" => vec![
                    DirEntry::file("index.js"),
                    DirEntry::dir("lib"),
                    DirEntry::new("link", EntryKind::Other),
                    DirEntry::dir("node_modules"),
                ],
                "/t/lib" => vec![DirEntry::dir("node_modules"), DirEntry::file("util.js")],
                other => panic!("unexpected list_dir({other})"),
            };
            Ok(listing)
        });
        fs.expect_read_to_string()
            .returning(|path| Ok(format!("// {}", path.display())));
        fs.expect_create_dir().returning(move |path| {
            created.lock().unwrap().push(path.display().to_string());
            Ok(())
        });
        fs.expect_write_file().returning(move |path, content| {
            written
                .lock()
                .unwrap()
                .push(format!("{} <- {content}", path.display()));
            Ok(())
        });
        fs
    }

    #[test]
    fn copies_files_and_skips_excluded_at_every_level() {
        let created = Log::default();
        let written = Log::default();
        let fs = template_fs(created.clone(), written.clone());
        let excludes = ExclusionSet::new().with(DEPENDENCY_CACHE_DIR);

        let stats = TemplateCopier::new(&fs)
            .materialize(Path::new("/t"), Path::new("/out/svc"), &excludes)
            .unwrap();

        assert_eq!(
            *created.lock().unwrap(),
            vec!["/out/svc".to_string(), "/out/svc/lib".to_string()]
        );
        assert_eq!(
            *written.lock().unwrap(),
            vec![
                "/out/svc/index.js <- // /t/index.js".to_string(),
                "/out/svc/lib/util.js <- // /t/lib/util.js".to_string(),
            ]
        );
        assert_eq!(
            stats,
            CopyStats {
                files: 2,
                directories: 1,
                skipped: 3,
            }
        );
    }

    #[test]
    fn existing_destination_stops_before_copying() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir().times(1).returning(|path| {
            Err(ApplicationError::ProjectExists {
                path: path.to_path_buf(),
            }
            .into())
        });
        fs.expect_list_dir().never();

        let err = TemplateCopier::new(&fs)
            .materialize(Path::new("/t"), Path::new("/out/svc"), &ExclusionSet::new())
            .unwrap_err();

        assert_eq!(
            err,
            SvcgenError::from(ApplicationError::ProjectExists {
                path: PathBuf::from("/out/svc")
            })
        );
    }

    #[test]
    fn read_failure_propagates() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_list_dir()
            .returning(|_| Ok(vec![DirEntry::file("logo.png")]));
        fs.expect_read_to_string().returning(|path| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "stream did not contain valid UTF-8".into(),
            }
            .into())
        });
        fs.expect_write_file().never();

        let result = TemplateCopier::new(&fs).materialize(
            Path::new("/t"),
            Path::new("/out/svc"),
            &ExclusionSet::new(),
        );

        assert!(matches!(
            result,
            Err(SvcgenError::Application(
                ApplicationError::FilesystemError { .. }
            ))
        ));
    }

    #[test]
    fn empty_exclusion_set_copies_everything() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_list_dir().returning(|path| {
            if path == Path::new("/t") {
                Ok(vec![DirEntry::dir("node_modules")])
            } else {
                Ok(vec![])
            }
        });

        let stats = TemplateCopier::new(&fs)
            .materialize(Path::new("/t"), Path::new("/o"), &ExclusionSet::new())
            .unwrap();
        assert_eq!(stats.directories, 1);
        assert_eq!(stats.skipped, 0);
    }
}
