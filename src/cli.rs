use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Wheelwright - build driver for Python wheel projects
#[derive(Parser, Debug)]
#[command(name = "wheelwright")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'wheelwright' without a command to build the wheel.")]
pub struct Cli {
    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project directory
    #[arg(short = 'C', long = "directory", default_value = ".", global = true)]
    pub directory: PathBuf,

    /// Metadata file, relative to the project directory (default: setup.cfg)
    #[arg(long, global = true)]
    pub metadata: Option<PathBuf>,

    /// Print what would run without running it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Color output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Build the wheel (default)
    Build,

    /// Remove build output and packaging metadata
    Clean,

    /// Install the wheel without consulting a package index
    Install,

    /// Uninstall the package
    Uninstall,

    /// Uninstall, then install the wheel
    Reinstall,

    /// Install build and test tooling
    Depends,

    /// Show the package name, version and expected wheel
    Info,
}
