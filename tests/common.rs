//! Shared helpers for the tictacnet test suite.
#![allow(dead_code)]

use std::{collections::HashSet, sync::OnceLock};

use tictacnet::{
    SolverConfig, TieBreak, TranspositionPolicy,
    solver::{SolvedTable, solve_game},
    tictactoe::Position,
};

/// Every position reachable from the empty board by alternating play,
/// terminal positions included.
pub fn reachable_positions() -> Vec<Position> {
    let mut seen = HashSet::new();
    let mut stack = vec![Position::new()];
    let mut positions = Vec::new();

    while let Some(position) = stack.pop() {
        if !seen.insert(position.key()) {
            continue;
        }
        if !position.is_terminal() {
            for cell in position.legal_moves() {
                stack.push(position.apply_move(cell).unwrap());
            }
        }
        positions.push(position);
    }
    positions
}

/// Full solve with the default configuration, computed once per test binary.
pub fn default_table() -> &'static SolvedTable {
    static TABLE: OnceLock<SolvedTable> = OnceLock::new();
    TABLE.get_or_init(|| solve_game(SolverConfig::default()).unwrap())
}

/// Full solve keeping every value-optimal move, computed once per test binary.
pub fn all_optimal_table() -> &'static SolvedTable {
    static TABLE: OnceLock<SolvedTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        let config = SolverConfig::new()
            .with_tie_break(TieBreak::AllOptimal)
            .with_transpositions(TranspositionPolicy::Reuse);
        solve_game(config).unwrap()
    })
}
