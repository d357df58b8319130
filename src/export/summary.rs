//! Aggregate counts over dataset records

use serde::Serialize;

use super::dataset_csv::DatasetRecord;
use crate::tictactoe::{CELL_COUNT, Player};

/// Row counts by outcome, side to move and depth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub rows: usize,
    /// Rows scored +1 (X wins with best play)
    pub x_wins: usize,
    pub draws: usize,
    /// Rows scored -1 (O wins with best play)
    pub o_wins: usize,
    pub x_to_move: usize,
    pub o_to_move: usize,
    /// Rows per number of pieces on the board (0-9)
    pub by_depth: [usize; CELL_COUNT + 1],
    /// Total number of optimal-move labels set
    pub labelled_moves: usize,
}

impl DatasetSummary {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a DatasetRecord>,
    {
        let mut summary = DatasetSummary::default();
        for record in records {
            summary.rows += 1;
            match record.score {
                1 => summary.x_wins += 1,
                -1 => summary.o_wins += 1,
                _ => summary.draws += 1,
            }
            match record.turn {
                Player::X => summary.x_to_move += 1,
                Player::O => summary.o_to_move += 1,
            }
            let depth = record
                .x
                .iter()
                .chain(&record.o)
                .filter(|&&cell| cell != 0)
                .count();
            summary.by_depth[depth] += 1;
            summary.labelled_moves += record.moves.iter().filter(|&&m| m != 0).count();
        }
        summary
    }
}
