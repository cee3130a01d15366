//! Common test utilities for Wheelwright CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project and home directories plus CLI helpers
//! - Fixtures: Reusable metadata and config content

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
