//! Winning line analysis for Tic-Tac-Toe

use super::CellSet;

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Winning lines as bit masks, in the same order as [`WINNING_LINES`]
pub const WINNING_PATTERNS: [CellSet; 8] = {
    let mut patterns = [CellSet::EMPTY; 8];
    let mut i = 0;
    while i < WINNING_LINES.len() {
        patterns[i] = CellSet::from_line(WINNING_LINES[i]);
        i += 1;
    }
    patterns
};

/// Utility for analyzing winning lines against a player's occupancy
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if an occupancy set covers at least one winning line
    pub fn has_won(occupancy: CellSet) -> bool {
        WINNING_PATTERNS
            .iter()
            .any(|&pattern| occupancy.is_superset(pattern))
    }

    /// Cells in `open` that would complete a line for `occupancy`
    pub fn completing_cells(occupancy: CellSet, open: CellSet) -> CellSet {
        WINNING_PATTERNS
            .iter()
            .filter_map(|&pattern| Self::completing_cell(occupancy, open, pattern))
            .collect()
    }

    /// The open cell completing `pattern`, if the player holds the other two
    fn completing_cell(occupancy: CellSet, open: CellSet, pattern: CellSet) -> Option<usize> {
        let held = occupancy.intersection(pattern);
        let missing = pattern.intersection(held.complement());
        if held.len() == 2 && missing.len() == 1 && open.is_superset(missing) {
            missing.cells().next()
        } else {
            None
        }
    }
}
