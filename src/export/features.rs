//! Model input layout shared by the dataset and move predictors

use crate::{
    Result,
    tictactoe::{CELL_COUNT, CellSet, Player, Position},
};

/// Length of a feature vector: nine X cells, nine O cells, side to move
pub const FEATURE_COUNT: usize = 2 * CELL_COUNT + 1;

/// The inputs a move predictor sees for one position.
///
/// Layout matches the `x1..x9, o1..o9, turn` dataset columns: X occupancy
/// and O occupancy flattened most significant cell first, then the side to
/// move (0 for X, 1 for O).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureVector([u8; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(x: CellSet, o: CellSet, to_move: Player) -> Self {
        let mut features = [0; FEATURE_COUNT];
        features[..CELL_COUNT].copy_from_slice(&x.to_features());
        features[CELL_COUNT..2 * CELL_COUNT].copy_from_slice(&o.to_features());
        features[2 * CELL_COUNT] = to_move.index() as u8;
        FeatureVector(features)
    }

    pub fn from_position(position: &Position) -> Self {
        Self::new(position.x(), position.o(), position.to_move())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Rebuild the position the features describe.
    ///
    /// # Errors
    ///
    /// Returns error if the occupancy features overlap.
    pub fn to_position(&self) -> Result<Position> {
        let x = CellSet::from_features(&self.cells(0));
        let o = CellSet::from_features(&self.cells(CELL_COUNT));
        let to_move = if self.0[2 * CELL_COUNT] == 0 {
            Player::X
        } else {
            Player::O
        };
        Position::from_cell_sets(x, o, to_move)
    }

    fn cells(&self, offset: usize) -> [u8; CELL_COUNT] {
        let mut cells = [0; CELL_COUNT];
        cells.copy_from_slice(&self.0[offset..offset + CELL_COUNT]);
        cells
    }
}

impl From<&Position> for FeatureVector {
    fn from(position: &Position) -> Self {
        Self::from_position(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_follows_dataset_columns() {
        // X in the bottom-right corner, O in the top-left, X to move.
        let position = Position::from_bitboards(1 << 8, 1, Player::X).unwrap();
        let features = FeatureVector::from_position(&position);
        let expected: [u8; FEATURE_COUNT] = [
            1, 0, 0, 0, 0, 0, 0, 0, 0, // x1..x9
            0, 0, 0, 0, 0, 0, 0, 0, 1, // o1..o9
            0, // turn
        ];
        assert_eq!(features.as_slice(), &expected);
    }

    #[test]
    fn features_rebuild_the_position() {
        let position = Position::new()
            .apply_move(4)
            .and_then(|p| p.apply_move(0))
            .and_then(|p| p.apply_move(7))
            .unwrap();
        let features = FeatureVector::from(&position);
        assert_eq!(features.as_slice()[2 * CELL_COUNT], 1);
        assert_eq!(features.to_position().unwrap(), position);
    }
}
