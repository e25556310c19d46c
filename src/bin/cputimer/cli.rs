//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// cputimer - Timers for real/process/thread time, and their package recipe
#[derive(Parser)]
#[command(name = "cputimer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to Recipe.toml (defaults to searching upward, then the built-in recipe)
    #[arg(long, global = true, env = "CPUTIMER_MANIFEST")]
    pub manifest: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a Recipe.toml for the cputimer package
    Init(InitArgs),

    /// Show package metadata and package id
    Info(InfoArgs),

    /// List declared dependencies in declaration order
    Deps(DepsArgs),

    /// Copy include/**/*.h from a source tree into a package tree
    Export(ExportArgs),

    /// Check that every dependency is available in a local registry
    Check(CheckArgs),

    /// Time some work with each timer
    Demo(DemoArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to current directory)
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct InfoArgs {
    /// Build type used to compute the package id
    #[arg(long)]
    pub build_type: Option<String>,

    /// Emit JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct DepsArgs {
    /// Emit JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Source tree containing include/ (defaults to config, then current directory)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Package output directory (defaults to config)
    #[arg(long)]
    pub package: Option<PathBuf>,

    /// Emit the export report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Registry root laid out as <name>/<version>/ (defaults to config)
    #[arg(long)]
    pub registry: Option<PathBuf>,
}

#[derive(Args)]
pub struct DemoArgs {
    /// How long the simulated work sleeps, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub work_ms: u64,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
