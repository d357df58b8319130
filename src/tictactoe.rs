//! Tic-Tac-Toe board engine

pub mod board;
pub mod cells;
pub mod lines;

pub use board::{Player, Position, PositionKey};
pub use cells::{CELL_COUNT, CellSet, feature_cell};
pub use lines::{LineAnalyzer, WINNING_LINES, WINNING_PATTERNS};
