//! KCS-SYNC CLI - Issue-to-wiki mirroring.
//!
//! Provides commands for:
//! - `sync`: Mirror one issue event onto its BookStack page

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::SyncArgs;
use output::Output;

/// KCS-SYNC - Mirror tracker issues into a BookStack wiki.
#[derive(Parser)]
#[command(name = "kcs-sync", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mirror one issue event onto its BookStack page.
    Sync(SyncArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Sync(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Sync(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
