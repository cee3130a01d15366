//! Install, uninstall and reinstall
//!
//! All three hand the descriptor to the package manager. Reinstall is not
//! transactional: uninstall, then install regardless of how uninstall went.

use serde::Serialize;

use crate::domain::ports::{FileSystem, ToolRunner};
use crate::domain::services::Toolchain;
use crate::error::{WheelwrightError, WheelwrightResult};
use crate::metadata::PackageDescriptor;

use super::build::{BuildReport, BuildUseCase};

/// Outcome of an install
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallReport {
    /// Set when the artifact was missing and had to be built first
    pub built: Option<BuildReport>,
    /// Artifact handed to the package manager
    pub artifact_path: String,
}

/// Outcome of a reinstall
#[derive(Debug)]
pub struct ReinstallReport {
    /// Why uninstall failed, if it did (install ran anyway)
    pub uninstall_error: Option<WheelwrightError>,
    pub install: InstallReport,
}

/// Package manager use cases
pub struct InstallUseCase<R, FS>
where
    R: ToolRunner,
    FS: FileSystem,
{
    runner: R,
    fs: FS,
    toolchain: Toolchain,
}

impl<R, FS> InstallUseCase<R, FS>
where
    R: ToolRunner,
    FS: FileSystem,
{
    pub fn new(runner: R, fs: FS, toolchain: Toolchain) -> Self {
        Self {
            runner,
            fs,
            toolchain,
        }
    }

    /// Install the artifact, building it first when it does not exist yet
    pub fn install(&self, descriptor: &PackageDescriptor) -> WheelwrightResult<InstallReport> {
        let artifact = descriptor.artifact_path_in(self.toolchain.project_root());

        let built = if self.fs.exists(&artifact) {
            None
        } else {
            tracing::info!(artifact = %artifact.display(), "artifact missing, building first");
            let builder = BuildUseCase::new(&self.runner, &self.fs, self.toolchain.clone());
            Some(builder.execute(descriptor)?)
        };

        self.runner.run(&self.toolchain.install(descriptor))?;

        Ok(InstallReport {
            built,
            artifact_path: descriptor.artifact_path.clone(),
        })
    }

    /// Remove the installed package by its normalized name
    pub fn uninstall(&self, descriptor: &PackageDescriptor) -> WheelwrightResult<()> {
        self.runner.run(&self.toolchain.uninstall(descriptor))
    }

    /// Uninstall, then install unconditionally.
    ///
    /// The result is the install's result; an uninstall failure is only recorded.
    pub fn reinstall(&self, descriptor: &PackageDescriptor) -> WheelwrightResult<ReinstallReport> {
        let uninstall_error = match self.uninstall(descriptor) {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(error = %e, "uninstall failed, installing anyway");
                Some(e)
            }
        };

        let install = self.install(descriptor)?;

        Ok(ReinstallReport {
            uninstall_error,
            install,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolchainConfig;
    use crate::domain::value_objects::Invocation;
    use crate::infrastructure::LocalFs;
    use std::cell::RefCell;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    /// Records command lines; fails those containing `fail_on` with `code`
    struct ScriptedRunner {
        fail_on: Option<(&'static str, i32)>,
        seen: RefCell<Vec<String>>,
    }

    impl ScriptedRunner {
        fn ok() -> Self {
            Self {
                fail_on: None,
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing(needle: &'static str, code: i32) -> Self {
            Self {
                fail_on: Some((needle, code)),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<String> {
            self.seen.borrow().clone()
        }
    }

    impl ToolRunner for ScriptedRunner {
        fn run(&self, invocation: &Invocation) -> WheelwrightResult<()> {
            let line = invocation.command_line();
            self.seen.borrow_mut().push(line.clone());
            match self.fail_on {
                Some((needle, code)) if line.contains(needle) => {
                    Err(WheelwrightError::ToolFailed {
                        command: line,
                        code: Some(code),
                    })
                }
                _ => Ok(()),
            }
        }
    }

    fn descriptor() -> PackageDescriptor {
        PackageDescriptor::new("sample-tool", "2.3.1")
    }

    fn with_artifact(root: &Path) {
        let artifact = descriptor().artifact_path_in(root);
        fs::create_dir_all(artifact.parent().unwrap()).unwrap();
        fs::write(artifact, "wheel").unwrap();
    }

    fn use_case<'a>(
        runner: &'a ScriptedRunner,
        root: &Path,
    ) -> InstallUseCase<&'a ScriptedRunner, LocalFs> {
        InstallUseCase::new(
            runner,
            LocalFs::new(),
            Toolchain::new(ToolchainConfig::default(), root),
        )
    }

    #[test]
    fn install_existing_artifact_skips_build() {
        let dir = tempdir().unwrap();
        with_artifact(dir.path());
        let runner = ScriptedRunner::ok();

        let report = use_case(&runner, dir.path()).install(&descriptor()).unwrap();

        assert!(report.built.is_none());
        assert_eq!(
            runner.seen(),
            vec!["python3 -m pip install --no-index dist/sample_tool-2.3.1-py3-none-any.whl"]
        );
    }

    #[test]
    fn install_missing_artifact_builds_first() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::ok();

        let report = use_case(&runner, dir.path()).install(&descriptor()).unwrap();

        assert!(report.built.is_some());
        let seen = runner.seen();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], "python3 -m build --wheel");
        assert!(seen[1].starts_with("python3 -m pip install --no-index"));
    }

    #[test]
    fn install_stops_when_build_fails() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::failing("-m build", 2);

        let err = use_case(&runner, dir.path())
            .install(&descriptor())
            .unwrap_err();

        assert_eq!(err.exit_code(), 2);
        assert_eq!(runner.seen().len(), 1);
    }

    #[test]
    fn uninstall_uses_normalized_name() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::ok();

        use_case(&runner, dir.path()).uninstall(&descriptor()).unwrap();

        assert_eq!(
            runner.seen(),
            vec!["python3 -m pip uninstall --yes sample_tool"]
        );
    }

    #[test]
    fn uninstall_propagates_exit_code() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::failing("uninstall", 5);

        let err = use_case(&runner, dir.path())
            .uninstall(&descriptor())
            .unwrap_err();

        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn reinstall_runs_uninstall_then_install() {
        let dir = tempdir().unwrap();
        with_artifact(dir.path());
        let runner = ScriptedRunner::ok();

        let report = use_case(&runner, dir.path())
            .reinstall(&descriptor())
            .unwrap();

        assert!(report.uninstall_error.is_none());
        let seen = runner.seen();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].contains("uninstall"));
        assert!(seen[1].contains("install --no-index"));
    }

    #[test]
    fn reinstall_installs_even_when_uninstall_fails() {
        let dir = tempdir().unwrap();
        with_artifact(dir.path());
        let runner = ScriptedRunner::failing("uninstall", 1);

        let report = use_case(&runner, dir.path())
            .reinstall(&descriptor())
            .unwrap();

        assert!(matches!(
            report.uninstall_error,
            Some(WheelwrightError::ToolFailed { code: Some(1), .. })
        ));
        assert_eq!(runner.seen().len(), 2);
    }

    #[test]
    fn reinstall_reports_install_failure() {
        let dir = tempdir().unwrap();
        with_artifact(dir.path());
        let runner = ScriptedRunner::failing("--no-index", 9);

        let err = use_case(&runner, dir.path())
            .reinstall(&descriptor())
            .unwrap_err();

        assert_eq!(err.exit_code(), 9);
    }
}
