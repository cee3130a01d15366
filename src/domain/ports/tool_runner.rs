//! ToolRunner port - abstraction over external process execution
//!
//! The build tool and the package manager are opaque collaborators: the
//! runner starts them and reports their status, nothing more.

use crate::domain::value_objects::Invocation;
use crate::error::WheelwrightResult;

/// Runs external commands to completion
///
/// Implementations:
/// - `ProcessRunner` - spawns the program with inherited stdio
/// - `DryRunRunner` - records invocations without running anything
pub trait ToolRunner {
    /// Run the invocation in the foreground.
    ///
    /// Returns `ToolNotFound` when the program cannot be started and
    /// `ToolFailed` (carrying the exit code) when it exits unsuccessfully.
    fn run(&self, invocation: &Invocation) -> WheelwrightResult<()>;

    /// Whether this runner actually executes commands
    fn is_dry_run(&self) -> bool {
        false
    }
}

impl<T: ToolRunner + ?Sized> ToolRunner for &T {
    fn run(&self, invocation: &Invocation) -> WheelwrightResult<()> {
        (**self).run(invocation)
    }

    fn is_dry_run(&self) -> bool {
        (**self).is_dry_run()
    }
}
