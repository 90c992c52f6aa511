//! # tracehub CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tracehub_cli::classify::{run_classify, ClassifyArgs};
use tracehub_cli::refdata::{run_refdata, RefdataArgs};

/// TraceHub compliance CLI.
///
/// Classifies HS codes under the EU Deforestation Regulation and the
/// horn/hoof (TRACES veterinary) documentation scheme, and validates
/// regulatory reference-data snapshots.
#[derive(Parser, Debug)]
#[command(name = "tracehub", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify one or more HS codes.
    Classify(ClassifyArgs),

    /// Regulatory snapshot operations (check, show).
    Refdata(RefdataArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Classify(args) => run_classify(&args),
        Commands::Refdata(args) => run_refdata(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
