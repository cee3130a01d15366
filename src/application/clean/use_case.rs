//! Clean Use Case
//!
//! Orchestrates removal of build output.

use std::path::{Component, Path, PathBuf};

use crate::domain::ports::{FileSystem, FsError};
use crate::metadata::DIST_DIR;

use super::options::CleanOptions;
use super::result::{CleanResult, SkipReason};

/// Intermediate directory written by the build backend
pub const BUILD_DIR: &str = "build";

/// Directories searched for generated `*.egg-info` metadata
const METADATA_PARENTS: &[&str] = &[".", "src"];

const METADATA_SUFFIX: &str = ".egg-info";

/// Clean use case - removes build output and packaging metadata
pub struct CleanUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> CleanUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new clean use case
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Remove build output below `project_root`
    pub fn execute(&self, project_root: &Path, options: &CleanOptions) -> CleanResult {
        let mut result = CleanResult::new();

        for candidate in self.candidates(project_root, options, &mut result) {
            if !self.fs.exists(&candidate) {
                result.add_absent(candidate);
                continue;
            }

            if options.dry_run {
                result.add_removed(candidate);
                continue;
            }

            match self.fs.remove_all(&candidate) {
                Ok(()) => {
                    tracing::debug!(path = %candidate.display(), "removed");
                    result.add_removed(candidate);
                }
                // Vanished between the check and the removal
                Err(FsError::NotFound(_)) => result.add_absent(candidate),
                Err(FsError::PermissionDenied(_)) => {
                    tracing::warn!(path = %candidate.display(), "permission denied");
                    result.add_skipped(candidate, SkipReason::PermissionDenied);
                }
                Err(e) => {
                    tracing::warn!(path = %candidate.display(), error = %e, "removal failed");
                    result.add_skipped(candidate, SkipReason::Failed(e.to_string()));
                }
            }
        }

        result
    }

    /// Paths to remove, in order, without duplicates
    fn candidates(
        &self,
        project_root: &Path,
        options: &CleanOptions,
        result: &mut CleanResult,
    ) -> Vec<PathBuf> {
        let mut paths = vec![project_root.join(DIST_DIR), project_root.join(BUILD_DIR)];

        for parent in METADATA_PARENTS {
            let dir = if *parent == "." {
                project_root.to_path_buf()
            } else {
                project_root.join(parent)
            };
            paths.extend(self.metadata_dirs(&dir));
        }

        for extra in &options.extra_paths {
            if escapes_project(extra) {
                result.add_skipped(extra.clone(), SkipReason::OutsideProject);
                continue;
            }
            if names_project_root(extra) {
                result.add_skipped(extra.clone(), SkipReason::ProjectRoot);
                continue;
            }
            paths.push(project_root.join(extra));
        }

        let mut unique = Vec::with_capacity(paths.len());
        for path in paths {
            if !unique.contains(&path) {
                unique.push(path);
            }
        }
        unique
    }

    fn metadata_dirs(&self, dir: &Path) -> Vec<PathBuf> {
        if !self.fs.is_dir(dir) {
            return Vec::new();
        }

        match self.fs.list_dir(dir) {
            Ok(entries) => entries
                .into_iter()
                .filter(|entry| is_metadata_dir_name(entry) && self.fs.is_dir(entry))
                .collect(),
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "cannot list directory");
                Vec::new()
            }
        }
    }
}

fn is_metadata_dir_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(METADATA_SUFFIX) && name.len() > METADATA_SUFFIX.len())
}

fn escapes_project(path: &Path) -> bool {
    path.is_absolute()
        || path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
}

/// Empty or `.`-only paths resolve to the project directory itself
fn names_project_root(path: &Path) -> bool {
    !path
        .components()
        .any(|c| matches!(c, Component::Normal(_)))
}
