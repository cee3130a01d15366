//! Wheelwright CLI - build driver for Python wheel projects
//!
//! Usage: wheelwright [OPTIONS] [COMMAND]
//!
//! Commands:
//!   build      Build the wheel (default)
//!   clean      Remove build output and packaging metadata
//!   install    Install the wheel without consulting a package index
//!   uninstall  Uninstall the package
//!   reinstall  Uninstall, then install the wheel
//!   depends    Install build and test tooling
//!   info       Show the package name, version and expected wheel

mod cli;
mod commands;
mod ui;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use wheelwright::Config;

use crate::cli::Cli;
use crate::commands::CommandContext;
use crate::ui::context::UiContext;

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_tracing(verbose: u8) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = match CommandContext::load(&cli) {
        Ok(ctx) => ctx,
        Err(err) => {
            // Configuration did not load; only the CLI flags apply
            let output = UiContext::new(cli.json, cli.color, &Config::default());
            fail(&err, &output);
        }
    };

    if let Err(err) = commands::dispatch(cli.command, &ctx) {
        fail(&err, &ctx.ui);
    }
}

fn fail(err: &anyhow::Error, output: &UiContext) -> ! {
    ui::error::print_error(err, output);
    std::process::exit(ui::error::exit_code(err));
}
