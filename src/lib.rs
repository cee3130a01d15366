//! Wheelwright - build driver for Python wheel projects
//!
//! Reads the package name and version from a project's `setup.cfg`, derives
//! the wheel it expects to produce, and drives the external build tool and
//! package manager to build, install, uninstall or reinstall it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod metadata;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, WarningKind};
pub use domain::ports::{FileSystem, ToolRunner};
pub use domain::services::Toolchain;
pub use domain::value_objects::Invocation;
pub use error::{WheelwrightError, WheelwrightResult};
pub use metadata::{resolve, resolve_file, PackageDescriptor};
