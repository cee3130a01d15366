//! Process Runner
//!
//! Runs external tools as child processes in the foreground.

use std::io;
use std::process::{Command, Stdio};

use crate::domain::ports::ToolRunner;
use crate::domain::value_objects::Invocation;
use crate::error::{WheelwrightError, WheelwrightResult};

/// Tool runner that spawns real processes
///
/// The child inherits stdin and stderr. Its stdout is inherited too, unless
/// `quiet_stdout` is set (JSON mode keeps our stdout machine-readable).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner {
    quiet_stdout: bool,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the child's stdout
    pub fn with_quiet_stdout(mut self, quiet: bool) -> Self {
        self.quiet_stdout = quiet;
        self
    }
}

impl ToolRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> WheelwrightResult<()> {
        tracing::info!(
            command = %invocation,
            cwd = %invocation.cwd().display(),
            "running external tool"
        );

        // A missing cwd also spawns with NotFound; keep it apart from a missing program
        if !invocation.cwd().is_dir() {
            return Err(WheelwrightError::io(
                invocation.cwd(),
                io::Error::new(io::ErrorKind::NotFound, "working directory does not exist"),
            ));
        }

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .current_dir(invocation.cwd())
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit());

        if self.quiet_stdout {
            cmd.stdout(Stdio::null());
        } else {
            cmd.stdout(Stdio::inherit());
        }

        let status = cmd.status().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => WheelwrightError::ToolNotFound {
                program: invocation.program.clone(),
            },
            _ => WheelwrightError::io(invocation.cwd(), e),
        })?;

        if !status.success() {
            tracing::debug!(command = %invocation, code = ?status.code(), "external tool failed");
            return Err(WheelwrightError::ToolFailed {
                command: invocation.command_line(),
                code: status.code(),
            });
        }

        Ok(())
    }
}
