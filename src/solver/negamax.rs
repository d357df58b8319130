//! Exhaustive negamax search over the full game tree

use std::cmp::Ordering;

use serde::Serialize;
use tracing::{debug, info, instrument};

use super::table::{SolvedEntry, SolvedTable};
use crate::{
    Error, Result,
    config::{SolverConfig, TieBreak, TranspositionPolicy},
    tictactoe::{CellSet, Position, PositionKey},
};

/// Value and optimal moves of a position, seen by the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// +1 win, 0 draw, -1 loss for the side to move
    pub value: i8,
    /// Every optimal cell for the side to move (empty for terminal positions)
    pub best_moves: CellSet,
}

impl Evaluation {
    fn terminal(score: i8) -> Self {
        Evaluation {
            value: score,
            best_moves: CellSet::EMPTY,
        }
    }
}

/// Counters collected during a solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SolveStats {
    /// Positions entered by the search, terminal ones included
    pub nodes_visited: u64,
    /// Terminal positions reached
    pub terminal_nodes: u64,
    /// Visits to a position that was already in the table
    pub transpositions: u64,
    /// Distinct positions recorded in the table
    pub positions_stored: u64,
}

/// Depth-first negamax solver that records every non-terminal position it
/// solves.
///
/// The table belongs to the solver; take it with [`Solver::into_table`] once
/// the search is done.
///
/// ```
/// use tictacnet::{config::SolverConfig, solver::Solver, tictactoe::Position};
///
/// let mut solver = Solver::new(SolverConfig::default());
/// let root = solver.solve(&Position::new())?;
/// assert_eq!(root.value, 0);
/// assert_eq!(solver.table().len(), 4520);
/// # Ok::<(), tictacnet::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    config: SolverConfig,
    table: SolvedTable,
    stats: SolveStats,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Solver {
            config,
            table: SolvedTable::new(),
            stats: SolveStats::default(),
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn table(&self) -> &SolvedTable {
        &self.table
    }

    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    pub fn into_table(self) -> SolvedTable {
        self.table
    }

    /// Solve `position` and every position below it.
    ///
    /// Returns the value and best moves from the point of view of the side
    /// to move. Each non-terminal position searched is recorded in the table
    /// with its value converted to X's point of view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMoves`] if a non-terminal position has no
    /// moves, and [`Error::InconsistentTransposition`] if a position solved
    /// twice gives two different results. Neither happens with a correct
    /// board engine.
    #[instrument(skip_all, fields(position = %position.encode()))]
    pub fn solve(&mut self, position: &Position) -> Result<Evaluation> {
        let evaluation = self.search(position)?;
        debug!(
            value = evaluation.value,
            best_moves = %evaluation.best_moves,
            nodes = self.stats.nodes_visited,
            terminal = self.stats.terminal_nodes,
            transpositions = self.stats.transpositions,
            stored = self.stats.positions_stored,
            "search finished"
        );
        Ok(evaluation)
    }

    fn search(&mut self, position: &Position) -> Result<Evaluation> {
        self.stats.nodes_visited += 1;

        if position.is_terminal() {
            self.stats.terminal_nodes += 1;
            return Ok(Evaluation::terminal(position.score()));
        }

        let key = position.key();
        if let Some(stored) = self.table.get(&key).copied() {
            self.stats.transpositions += 1;
            if self.config.transpositions == TranspositionPolicy::Reuse {
                return Ok(Evaluation {
                    value: stored.mover_value(position.to_move()),
                    best_moves: stored.best_moves,
                });
            }
        }

        let mover = position.to_move();
        let mut best_value = i8::MIN;
        let mut best_moves = CellSet::EMPTY;
        let mut winning_now = CellSet::EMPTY;

        for cell in position.legal_moves() {
            let child = position.apply_move(cell)?;
            if child.winner() == Some(mover) {
                winning_now = winning_now.with(cell);
            }

            let value = -self.search(&child)?.value;
            match value.cmp(&best_value) {
                Ordering::Greater => {
                    best_value = value;
                    best_moves = CellSet::EMPTY.with(cell);
                }
                Ordering::Equal => best_moves = best_moves.with(cell),
                Ordering::Less => {}
            }
        }

        if best_moves.is_empty() {
            return Err(Error::NoLegalMoves {
                position: position.encode(),
            });
        }

        if self.config.tie_break == TieBreak::PreferImmediateWin && !winning_now.is_empty() {
            best_moves = winning_now;
        }

        self.record(key, SolvedEntry::from_mover(mover, best_value, best_moves))?;

        Ok(Evaluation {
            value: best_value,
            best_moves,
        })
    }

    fn record(&mut self, key: PositionKey, entry: SolvedEntry) -> Result<()> {
        match self.table.get(&key) {
            Some(stored) if *stored != entry => Err(Error::InconsistentTransposition {
                position: key.to_string(),
                stored: stored.to_string(),
                recomputed: entry.to_string(),
            }),
            Some(_) => Ok(()),
            None => {
                self.table.insert(key, entry);
                self.stats.positions_stored += 1;
                Ok(())
            }
        }
    }
}

/// Solve the whole game from the empty board and return the table.
///
/// # Errors
///
/// Propagates any error from [`Solver::solve`].
#[instrument]
pub fn solve_game(config: SolverConfig) -> Result<SolvedTable> {
    let mut solver = Solver::new(config);
    let root = solver.solve(&Position::new())?;
    info!(
        root_value = root.value,
        positions = solver.table().len(),
        "solved the game from the empty board"
    );
    Ok(solver.into_table())
}
