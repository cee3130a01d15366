//! Test environment builder for isolated Wheelwright testing.
//!
//! Provides `TestEnv` - a temp project directory and a temp home directory,
//! plus helpers to run the CLI against them.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a Wheelwright CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON: {l:?}: {e}"))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Temporary directory for HOME and XDG_CONFIG_HOME
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Get path relative to home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run the CLI from a specific directory with extra env vars.
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_wheelwright"));
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_path(".config"))
            .env("NO_COLOR", "1")
            .env_remove("WHEELWRIGHT_PYTHON")
            .env_remove("WHEELWRIGHT_METADATA")
            .env_remove("WHEELWRIGHT_COLOR")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute wheelwright");
        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }

    /// Write a file to the home directory
    pub fn write_home_file(&self, relative_path: &str, content: &str) {
        write_file(&self.home_path(relative_path), content);
    }

    /// Install the fake interpreter into the home directory and return its path
    #[cfg(unix)]
    pub fn install_fake_python(&self) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = self.home_path("bin/fake-python");
        write_file(&path, super::fixtures::FAKE_PYTHON);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake python executable");
        path.display().to_string()
    }

    /// Argument lines recorded by the fake interpreter
    pub fn fake_python_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.home_path("bin/calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    setup_cfg: Option<String>,
    project_config: Option<String>,
    home_config: Option<String>,
    files: Vec<(String, String)>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            setup_cfg: Some(super::fixtures::SAMPLE_SETUP_CFG.to_string()),
            project_config: None,
            home_config: None,
            files: Vec::new(),
        }
    }

    /// Replace the project's setup.cfg
    pub fn with_setup_cfg(mut self, content: &str) -> Self {
        self.setup_cfg = Some(content.to_string());
        self
    }

    /// Do not write a setup.cfg
    pub fn without_setup_cfg(mut self) -> Self {
        self.setup_cfg = None;
        self
    }

    /// Set wheelwright.toml content
    pub fn with_project_config(mut self, toml: &str) -> Self {
        self.project_config = Some(toml.to_string());
        self
    }

    /// Set the user config (`$XDG_CONFIG_HOME/wheelwright/config.toml`)
    pub fn with_home_config(mut self, toml: &str) -> Self {
        self.home_config = Some(toml.to_string());
        self
    }

    /// Add an arbitrary file to the project
    pub fn with_file(mut self, relative_path: &str, content: &str) -> Self {
        self.files
            .push((relative_path.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("Failed to create project temp dir"),
            home_dir: TempDir::new().expect("Failed to create home temp dir"),
        };

        if let Some(cfg) = &self.setup_cfg {
            env.write_project_file("setup.cfg", cfg);
        }
        if let Some(toml) = &self.project_config {
            env.write_project_file("wheelwright.toml", toml);
        }
        if let Some(toml) = &self.home_config {
            env.write_home_file(".config/wheelwright/config.toml", toml);
        }
        for (path, content) in &self.files {
            env.write_project_file(path, content);
        }

        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
