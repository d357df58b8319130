//! Solve command - run the full search and report on it

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::{
    adapters::MsgPackRepository,
    cli::{config::SolverArgs, output},
    config::SolverConfig,
    export::{DatasetCsvExporter, DatasetSummary},
    ports::SolvedTableRepository,
    solver::SolveStats,
};

#[derive(Parser, Debug)]
#[command(about = "Solve the full game and print statistics")]
pub struct SolveArgs {
    #[command(flatten)]
    pub solver: SolverArgs,

    /// Save the solved table (MessagePack) for later export
    #[arg(long)]
    pub save_table: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SolveReport {
    config: SolverConfig,
    positions: usize,
    stats: SolveStats,
    dataset: DatasetSummary,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let config = args.solver.resolve()?;
    let (table, stats) = super::solve_with_spinner(config)?;

    let records: Vec<_> = DatasetCsvExporter::records(&table).collect();
    let summary = DatasetSummary::from_records(&records);

    if let Some(path) = &args.save_table {
        MsgPackRepository::new()
            .save(&table, path)
            .with_context(|| format!("saving solved table to {}", path.display()))?;
        info!(path = %path.display(), "solved table saved");
    }

    if args.json {
        let report = SolveReport {
            config,
            positions: table.len(),
            stats,
            dataset: summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::print_section("Solve");
    output::print_kv("Tie-break", &config.tie_break.to_string());
    output::print_kv("Transpositions", &config.transpositions.to_string());
    output::print_kv("Solved positions", &output::format_number(table.len()));
    output::print_solve_stats(&stats);
    output::print_dataset_summary(&summary);

    if let Some(path) = &args.save_table {
        println!("\nSolved table saved to: {}", path.display());
    }

    Ok(())
}
