//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the clean and build use cases inspect and remove project paths
//! without depending on a concrete implementation (local disk, in-memory mock).

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
}

impl FsError {
    /// Convert an I/O error, remembering which path it concerned.
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
pub trait FileSystem {
    /// Check if a path exists (file or directory)
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// List the entries directly inside a directory
    fn list_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>>;

    /// Remove a file, or a directory and everything below it
    fn remove_all(&self, path: &Path) -> FsResult<()>;

    /// Compute content hash (`sha256:` + hex)
    fn hash(&self, path: &Path) -> FsResult<String>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>> {
        (**self).list_dir(path)
    }

    fn remove_all(&self, path: &Path) -> FsResult<()> {
        (**self).remove_all(path)
    }

    fn hash(&self, path: &Path) -> FsResult<String> {
        (**self).hash(path)
    }
}
