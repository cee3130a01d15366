//! Clean Use Case
//!
//! Removes build output and generated packaging metadata.
//!
//! This module handles:
//! - The output directory (`dist/`) and intermediate `build/` directory
//! - `*.egg-info` directories in the project root and `src/`
//! - Extra paths from configuration
//!
//! Removing a path that is already gone is not an error.

mod options;
mod result;
mod use_case;

pub use options::CleanOptions;
pub use result::{CleanResult, SkipReason, SkippedPath};
pub use use_case::CleanUseCase;
