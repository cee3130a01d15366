//! Build Use Case
//!
//! Runs the build tool, then checks that the expected wheel appeared.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::ports::{FileSystem, ToolRunner};
use crate::domain::services::Toolchain;
use crate::error::WheelwrightResult;
use crate::metadata::PackageDescriptor;

/// Outcome of a build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Where the artifact is expected
    pub artifact: PathBuf,
    /// Whether the artifact exists after the build
    pub present: bool,
    /// `sha256:` digest of the artifact, when present
    pub sha256: Option<String>,
    /// Nothing was executed
    pub dry_run: bool,
}

/// Build use case
pub struct BuildUseCase<R, FS>
where
    R: ToolRunner,
    FS: FileSystem,
{
    runner: R,
    fs: FS,
    toolchain: Toolchain,
}

impl<R, FS> BuildUseCase<R, FS>
where
    R: ToolRunner,
    FS: FileSystem,
{
    pub fn new(runner: R, fs: FS, toolchain: Toolchain) -> Self {
        Self {
            runner,
            fs,
            toolchain,
        }
    }

    /// Build the artifact described by `descriptor`.
    ///
    /// A build tool failure is returned as-is. A missing artifact after a
    /// successful build is reported, not raised: the build tool decides success.
    pub fn execute(&self, descriptor: &PackageDescriptor) -> WheelwrightResult<BuildReport> {
        self.runner.run(&self.toolchain.build())?;

        let artifact = descriptor.artifact_path_in(self.toolchain.project_root());
        if self.runner.is_dry_run() {
            return Ok(BuildReport {
                artifact,
                present: false,
                sha256: None,
                dry_run: true,
            });
        }

        let present = self.fs.exists(&artifact);
        let sha256 = if present {
            self.fs.hash(&artifact).ok()
        } else {
            tracing::warn!(
                artifact = %artifact.display(),
                "build finished but the expected artifact is missing"
            );
            None
        };

        Ok(BuildReport {
            artifact,
            present,
            sha256,
            dry_run: false,
        })
    }
}
