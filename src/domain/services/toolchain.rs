//! Toolchain service
//!
//! Turns tool configuration plus a package descriptor into the concrete
//! external invocations for each operation. Nothing here runs a process.

use std::path::{Path, PathBuf};

use crate::config::ToolchainConfig;
use crate::domain::value_objects::Invocation;
use crate::metadata::PackageDescriptor;

/// Builds invocations of the Python build tool and pip
#[derive(Debug, Clone)]
pub struct Toolchain {
    config: ToolchainConfig,
    project_root: PathBuf,
}

impl Toolchain {
    pub fn new(config: ToolchainConfig, project_root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            project_root: project_root.into(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn python(&self) -> Invocation {
        Invocation::new(self.config.python.clone(), self.project_root.clone())
    }

    fn pip(&self, subcommand: &str) -> Invocation {
        self.python().args(["-m", "pip", subcommand])
    }

    /// `{python} {build_args...}`
    pub fn build(&self) -> Invocation {
        self.python().args(self.config.build_args.iter().cloned())
    }

    /// `{python} -m pip install --no-index {pip_args...} {artifact_path}`
    ///
    /// `--no-index` keeps pip from consulting a package index; the artifact
    /// path is relative to the project root, which is the working directory.
    pub fn install(&self, descriptor: &PackageDescriptor) -> Invocation {
        self.pip("install")
            .arg("--no-index")
            .args(self.config.pip_args.iter().cloned())
            .arg(descriptor.artifact_path.clone())
    }

    /// `{python} -m pip uninstall --yes {pip_args...} {normalized_name}`
    pub fn uninstall(&self, descriptor: &PackageDescriptor) -> Invocation {
        self.pip("uninstall")
            .arg("--yes")
            .args(self.config.pip_args.iter().cloned())
            .arg(descriptor.normalized_name.clone())
    }

    /// `{python} -m pip install {pip_args...} {packages...}`
    pub fn depends(&self, packages: &[String]) -> Invocation {
        self.pip("install")
            .args(self.config.pip_args.iter().cloned())
            .args(packages.iter().cloned())
    }
}
