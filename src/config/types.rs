//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::WheelwrightResult;

use super::loader::{self, ConfigWarning};

/// Where package metadata is read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataConfig {
    /// Line-oriented configuration file, relative to the project root
    #[serde(default = "default_metadata_file")]
    pub file: PathBuf,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            file: default_metadata_file(),
        }
    }
}

fn default_metadata_file() -> PathBuf {
    PathBuf::from("setup.cfg")
}

/// External tools used for building and installing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainConfig {
    /// Python interpreter used to run `build` and `pip`
    #[serde(default = "default_python")]
    pub python: String,

    /// Arguments passed to the interpreter to build a wheel
    #[serde(default = "default_build_args")]
    pub build_args: Vec<String>,

    /// Extra flags appended to every pip invocation
    #[serde(default)]
    pub pip_args: Vec<String>,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            python: default_python(),
            build_args: default_build_args(),
            pip_args: Vec::new(),
        }
    }
}

fn default_python() -> String {
    "python3".to_string()
}

fn default_build_args() -> Vec<String> {
    vec!["-m".into(), "build".into(), "--wheel".into()]
}

/// Build and test tooling fetched by `depends`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependsConfig {
    #[serde(default = "default_packages")]
    pub packages: Vec<String>,
}

impl Default for DependsConfig {
    fn default() -> Self {
        Self {
            packages: default_packages(),
        }
    }
}

fn default_packages() -> Vec<String> {
    vec!["build".into(), "wheel".into(), "pytest".into()]
}

/// Extra paths removed by `clean`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CleanConfig {
    #[serde(default)]
    pub extra_paths: Vec<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure (`wheelwright.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub metadata: MetadataConfig,

    #[serde(default)]
    pub toolchain: ToolchainConfig,

    #[serde(default)]
    pub depends: DependsConfig,

    #[serde(default)]
    pub clean: CleanConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> WheelwrightResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> WheelwrightResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply env overrides
    pub fn load_layered(project_root: &Path) -> WheelwrightResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(project_root, |key| std::env::var(key).ok())
    }

    /// Metadata file location inside a project directory
    pub fn metadata_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.metadata.file)
    }
}
