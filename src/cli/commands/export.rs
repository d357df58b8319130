//! Export command - write the training dataset as CSV

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{config::SolverArgs, output},
    export::{DatasetCsvExporter, DatasetSummary},
};

#[derive(Parser, Debug)]
#[command(about = "Write the solved positions as a CSV dataset")]
pub struct ExportArgs {
    /// Output CSV file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Export from a table saved by `solve --save-table` instead of solving
    #[arg(long, conflicts_with_all = ["config", "tie_break", "transpositions"])]
    pub table: Option<PathBuf>,

    #[command(flatten)]
    pub solver: SolverArgs,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let table = match &args.table {
        Some(path) => super::load_table(path)?,
        None => super::solve_with_spinner(args.solver.resolve()?)?.0,
    };

    let rows = DatasetCsvExporter::export(&table, &args.output)
        .with_context(|| format!("writing dataset to {}", args.output.display()))?;

    let records: Vec<_> = DatasetCsvExporter::records(&table).collect();
    output::print_section("Export");
    output::print_kv("Rows written", &output::format_number(rows));
    output::print_dataset_summary(&DatasetSummary::from_records(&records));
    println!("\nDataset exported to: {}", args.output.display());

    Ok(())
}
