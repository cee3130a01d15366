//! Tool Runner Implementations
//!
//! Concrete implementations of the ToolRunner port.

mod dry_run;
mod local;

pub use dry_run::DryRunRunner;
pub use local::ProcessRunner;
