//! tictacnet CLI - solve tic-tac-toe and export the training dataset
//!
//! Reports go to stdout. Diagnostics go to stderr through `tracing`; set
//! `RUST_LOG` or pass `--verbose` to see them.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictacnet")]
#[command(version, about = "Tic-tac-toe solver and training-set generator", long_about = None)]
struct Cli {
    /// Log solver progress (same as RUST_LOG=info)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the full game and print statistics
    Solve(tictacnet::cli::commands::solve::SolveArgs),

    /// Write the solved positions as a CSV dataset
    Export(tictacnet::cli::commands::export::ExportArgs),

    /// Show the value and optimal moves of positions
    Analyze(tictacnet::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Solve(args) => tictacnet::cli::commands::solve::execute(args),
        Commands::Export(args) => tictacnet::cli::commands::export::execute(args),
        Commands::Analyze(args) => tictacnet::cli::commands::analyze::execute(args),
    }
}
