//! Tic-tac-toe solver and training-set generator
//!
//! This crate provides:
//! - Bitboard tic-tac-toe positions with validation and text parsing
//! - An exhaustive negamax solver that labels every reachable position with
//!   its value and optimal moves
//! - CSV export of the solved positions as a supervised-learning dataset
//! - A move-predictor interface for models trained on that dataset

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod ports;
pub mod solver;
pub mod tictactoe;

pub use config::{SolverConfig, TieBreak, TranspositionPolicy};
pub use error::{Error, Result};
pub use solver::{SolvedEntry, SolvedTable, Solver, solve_game};
pub use tictactoe::{CellSet, Player, Position, PositionKey};
