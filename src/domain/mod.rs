//! Domain Layer
//!
//! Pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Invocation)
//! - `services/` - Domain services (Toolchain)
//! - `ports/` - Interface definitions for infrastructure (ToolRunner, FileSystem)
//!
//! All process execution and file system access goes through the ports.

pub mod ports;
pub mod services;
pub mod value_objects;
