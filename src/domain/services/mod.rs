//! Domain Services
//!
//! Stateless logic that turns configuration and metadata into work to do.

mod toolchain;

pub use toolchain::Toolchain;
