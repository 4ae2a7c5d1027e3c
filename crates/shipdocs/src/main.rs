//! shipdocs CLI - Documentation navigation builder.
//!
//! Provides commands for:
//! - `check`: Validate the configuration and cross-check it against the docs
//! - `resolve`: Show the navigation context of one document
//! - `build`: Write navigation data for every document

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs, ResolveArgs};
use output::Output;

/// shipdocs - Documentation navigation builder.
#[derive(Parser)]
#[command(name = "shipdocs", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and report sidebar/content mismatches.
    Check(CheckArgs),
    /// Show the navigation context of one document.
    Resolve(ResolveArgs),
    /// Write navigation data for every discovered document.
    Build(BuildArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Resolve(args) => args.execute(),
        Commands::Build(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
