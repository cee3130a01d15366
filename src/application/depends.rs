//! Depends Use Case
//!
//! Fetches the build and test tooling through the package manager.

use crate::domain::ports::ToolRunner;
use crate::domain::services::Toolchain;
use crate::error::WheelwrightResult;

pub struct DependsUseCase<R: ToolRunner> {
    runner: R,
    toolchain: Toolchain,
}

impl<R: ToolRunner> DependsUseCase<R> {
    pub fn new(runner: R, toolchain: Toolchain) -> Self {
        Self { runner, toolchain }
    }

    /// Install `packages`; an empty list runs nothing
    pub fn execute(&self, packages: &[String]) -> WheelwrightResult<()> {
        if packages.is_empty() {
            tracing::info!("no tooling packages configured");
            return Ok(());
        }
        self.runner.run(&self.toolchain.depends(packages))
    }
}
