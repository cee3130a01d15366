//! Dry-run Runner
//!
//! Records what would run instead of running it.

use std::cell::RefCell;

use crate::domain::ports::ToolRunner;
use crate::domain::value_objects::Invocation;
use crate::error::WheelwrightResult;

/// Tool runner that records invocations and always succeeds
#[derive(Debug, Default)]
pub struct DryRunRunner {
    recorded: RefCell<Vec<Invocation>>,
}

impl DryRunRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invocations recorded so far, in order
    pub fn invocations(&self) -> Vec<Invocation> {
        self.recorded.borrow().clone()
    }
}

impl ToolRunner for DryRunRunner {
    fn run(&self, invocation: &Invocation) -> WheelwrightResult<()> {
        tracing::debug!(command = %invocation, "dry run: not executing");
        self.recorded.borrow_mut().push(invocation.clone());
        Ok(())
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}
