//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling symlink still counts as present
        path.symlink_metadata().is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>> {
        let mut entries = std::fs::read_dir(path)
            .map_err(|e| FsError::at(path, e))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<io::Result<Vec<_>>>()
            .map_err(|e| FsError::at(path, e))?;
        entries.sort();
        Ok(entries)
    }

    fn remove_all(&self, path: &Path) -> FsResult<()> {
        let metadata = path.symlink_metadata().map_err(|e| FsError::at(path, e))?;
        let result = if metadata.is_dir() {
            std::fs::remove_dir_all(path)
        } else {
            std::fs::remove_file(path)
        };
        result.map_err(|e| FsError::at(path, e))
    }

    fn hash(&self, path: &Path) -> FsResult<String> {
        let mut file = File::open(path).map_err(|e| FsError::at(path, e))?;
        let mut hasher = Sha256::new();
        io::copy(&mut file, &mut hasher).map_err(|e| FsError::at(path, e))?;
        Ok(format!("sha256:{:x}", hasher.finalize()))
    }
}
