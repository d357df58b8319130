//! Subcommands of the tictacnet binary

pub mod analyze;
pub mod export;
pub mod solve;

use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    adapters::MsgPackRepository,
    config::SolverConfig,
    ports::SolvedTableRepository,
    solver::{SolveStats, SolvedTable, Solver},
    tictactoe::Position,
};

use super::output::create_spinner;

/// Solve the game from the empty board behind a spinner.
pub(crate) fn solve_with_spinner(config: SolverConfig) -> Result<(SolvedTable, SolveStats)> {
    let spinner = create_spinner(&format!(
        "Solving ({}, {})...",
        config.tie_break, config.transpositions
    ));
    let mut solver = Solver::new(config);
    let result = solver.solve(&Position::new());
    spinner.finish_and_clear();
    result.context("solving the game")?;

    let stats = solver.stats();
    Ok((solver.into_table(), stats))
}

/// Load a table saved by `solve --save-table`.
pub(crate) fn load_table(path: &Path) -> Result<SolvedTable> {
    MsgPackRepository::new()
        .load(path)
        .with_context(|| format!("loading solved table from {}", path.display()))
}
