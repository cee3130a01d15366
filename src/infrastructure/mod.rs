//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local)
//! - `process/` - Tool runners (Process, DryRun)

pub mod fs;
pub mod process;

// Re-export for convenience
pub use fs::LocalFs;
pub use process::{DryRunRunner, ProcessRunner};
