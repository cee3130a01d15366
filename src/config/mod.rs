//! Configuration module for Wheelwright
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (WHEELWRIGHT_*)
//! 3. Project config (wheelwright.toml)
//! 4. User config (~/.config/wheelwright/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, WarningKind, PROJECT_CONFIG_FILE};
pub use types::{
    CleanConfig, ColorMode, Config, DependsConfig, MetadataConfig, OutputConfig, ToolchainConfig,
};
