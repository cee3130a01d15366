//! Clean result types

use std::path::PathBuf;

/// Reason why a path was not removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Path escapes the project directory
    OutsideProject,
    /// Path names the project directory itself
    ProjectRoot,
    /// Permission denied
    PermissionDenied,
    /// Any other removal failure
    Failed(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::OutsideProject => write!(f, "outside project directory"),
            SkipReason::ProjectRoot => write!(f, "refusing to remove the project directory"),
            SkipReason::PermissionDenied => write!(f, "permission denied"),
            SkipReason::Failed(msg) => write!(f, "{}", msg),
        }
    }
}

/// A path that could not be removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPath {
    /// Path that was considered
    pub path: PathBuf,
    /// Reason for skipping
    pub reason: SkipReason,
}

impl SkippedPath {
    pub fn new(path: PathBuf, reason: SkipReason) -> Self {
        Self { path, reason }
    }
}

/// Result of a clean operation
#[derive(Debug, Clone, Default)]
pub struct CleanResult {
    /// Paths that were removed (or would be removed in dry run)
    pub removed: Vec<PathBuf>,
    /// Paths that did not exist
    pub absent: Vec<PathBuf>,
    /// Paths that could not be removed
    pub skipped: Vec<SkippedPath>,
}

impl CleanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a removed path
    pub fn add_removed(&mut self, path: PathBuf) {
        self.removed.push(path);
    }

    /// Add a path that was already gone
    pub fn add_absent(&mut self, path: PathBuf) {
        self.absent.push(path);
    }

    /// Add a skipped path
    pub fn add_skipped(&mut self, path: PathBuf, reason: SkipReason) {
        self.skipped.push(SkippedPath::new(path, reason));
    }

    /// Check if operation was successful
    pub fn is_success(&self) -> bool {
        self.skipped.is_empty()
    }
}
