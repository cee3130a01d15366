//! Command handlers
//!
//! Each handler resolves what it needs from a [`CommandContext`], runs one
//! application use case and renders the outcome.

pub mod build;
pub mod clean;
pub mod depends;
pub mod info;
pub mod install;

use std::path::PathBuf;

use anyhow::Result;

use wheelwright::infrastructure::{DryRunRunner, ProcessRunner};
use wheelwright::{resolve_file, Config, PackageDescriptor, ToolRunner, Toolchain};

use crate::cli::{Cli, Commands};
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::views::invocation::render_invocations;

/// Everything a command needs, resolved once per run
pub struct CommandContext {
    pub project_root: PathBuf,
    pub config: Config,
    pub ui: UiContext,
    pub dry_run: bool,
}

impl CommandContext {
    /// Load layered configuration and apply CLI overrides.
    pub fn load(cli: &Cli) -> Result<Self> {
        let project_root = cli.directory.clone();
        let (mut config, warnings) = Config::load_layered(&project_root)?;
        if let Some(metadata) = &cli.metadata {
            config.metadata.file = metadata.clone();
        }

        let ui = UiContext::new(cli.json, cli.color, &config);
        print_config_warnings(&ui, &warnings);

        Ok(Self {
            project_root,
            config,
            ui,
            dry_run: cli.dry_run,
        })
    }

    /// Read the metadata file into a descriptor.
    pub fn descriptor(&self) -> Result<PackageDescriptor> {
        let path = self.config.metadata_path(&self.project_root);
        Ok(resolve_file(&path)?)
    }

    pub fn toolchain(&self) -> Toolchain {
        Toolchain::new(self.config.toolchain.clone(), &self.project_root)
    }

    /// Run `f` with the runner for this invocation.
    ///
    /// In dry-run mode nothing executes; the recorded invocations are printed
    /// afterwards, even when `f` fails.
    pub fn with_runner<T>(&self, f: impl FnOnce(&dyn ToolRunner) -> Result<T>) -> Result<T> {
        if !self.dry_run {
            let runner = ProcessRunner::new().with_quiet_stdout(self.ui.json);
            return f(&runner);
        }

        let runner = DryRunRunner::new();
        let result = f(&runner);
        self.print_invocations(&runner);
        result
    }

    fn print_invocations(&self, runner: &DryRunRunner) {
        let invocations = runner.invocations();
        if self.ui.json {
            for invocation in &invocations {
                let _ = crate::ui::json::emit(serde_json::json!({
                    "event": "invocation",
                    "command": invocation.command_line(),
                    "cwd": invocation.cwd().display().to_string(),
                    "dry_run": true,
                }));
            }
            return;
        }

        print!(
            "{}",
            render_invocations(&invocations, self.ui.color, self.ui.unicode)
        );
    }
}

/// Dispatch a parsed command. No command means `build`.
pub fn dispatch(command: Option<Commands>, ctx: &CommandContext) -> Result<()> {
    match command.unwrap_or(Commands::Build) {
        Commands::Build => build::cmd_build(ctx),
        Commands::Clean => clean::cmd_clean(ctx),
        Commands::Install => install::cmd_install(ctx),
        Commands::Uninstall => install::cmd_uninstall(ctx),
        Commands::Reinstall => install::cmd_reinstall(ctx),
        Commands::Depends => depends::cmd_depends(ctx),
        Commands::Info => info::cmd_info(ctx),
    }
}
