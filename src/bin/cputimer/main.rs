//! cputimer CLI - timers for real/process/thread time and their package recipe

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cputimer::core::ManifestError;
use cputimer::ops::{ExportError, RequirementError};
use cputimer::util::diagnostic::{emit, suggestions, Diagnostic};
use cputimer::util::GlobalContext;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && std::io::stderr().is_terminal();

    if let Err(e) = run(cli) {
        match diagnostic_for(&e) {
            Some(diag) => emit(&diag, color),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("cputimer=debug")
    } else {
        EnvFilter::new("cputimer=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let ctx = GlobalContext::new()?;
    let manifest = cli.manifest.as_deref();

    // Execute command
    match cli.command {
        Commands::Init(args) => commands::init::execute(&ctx, args),
        Commands::Info(args) => commands::info::execute(&ctx, manifest, args),
        Commands::Deps(args) => commands::deps::execute(&ctx, manifest, args),
        Commands::Export(args) => commands::export::execute(&ctx, args),
        Commands::Check(args) => commands::check::execute(&ctx, manifest, args),
        Commands::Demo(args) => commands::demo::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Render the library's typed errors with their suggestions.
fn diagnostic_for(err: &anyhow::Error) -> Option<Diagnostic> {
    if let Some(e) = err.downcast_ref::<ExportError>() {
        return Some(e.to_diagnostic());
    }
    if let Some(e) = err.downcast_ref::<RequirementError>() {
        return Some(e.to_diagnostic());
    }
    if let Some(e) = err.downcast_ref::<ManifestError>() {
        let diag = Diagnostic::error(format!("{:#}", err));
        return Some(match e {
            ManifestError::NotFound { .. } => diag,
            _ => diag.with_suggestion(suggestions::INVALID_MANIFEST),
        });
    }
    None
}
