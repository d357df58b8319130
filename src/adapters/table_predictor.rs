//! Move predictor backed by a solved table

use crate::{
    Result,
    export::FeatureVector,
    ports::MovePredictor,
    solver::SolvedTable,
    tictactoe::CELL_COUNT,
};

/// Scores the optimal moves of a solved position 1.0 and everything else 0.0.
///
/// Positions missing from the table (terminal or unreachable ones) score all
/// zeros. A trained model should agree with this predictor on every row of
/// the dataset.
#[derive(Debug, Clone)]
pub struct SolvedTablePredictor {
    table: SolvedTable,
}

impl SolvedTablePredictor {
    pub fn new(table: SolvedTable) -> Self {
        SolvedTablePredictor { table }
    }

    pub fn table(&self) -> &SolvedTable {
        &self.table
    }
}

impl MovePredictor for SolvedTablePredictor {
    fn name(&self) -> &str {
        "solved-table"
    }

    fn predict(&self, features: &FeatureVector) -> Result<[f32; CELL_COUNT]> {
        let position = features.to_position()?;
        let mut scores = [0.0; CELL_COUNT];
        if let Some(entry) = self.table.lookup(&position) {
            for (score, label) in scores.iter_mut().zip(entry.best_moves.to_features()) {
                *score = f32::from(label);
            }
        }
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ports::choose_move,
        solver::SolvedEntry,
        tictactoe::{CellSet, Player, Position},
    };

    #[test]
    fn optimal_moves_score_one() {
        let after_center = Position::new().apply_move(4).unwrap();
        let corners: CellSet = [0, 2, 6, 8].into_iter().collect();
        let table: SolvedTable = [(
            after_center.key(),
            SolvedEntry::from_mover(Player::O, 0, corners),
        )]
        .into_iter()
        .collect();
        let predictor = SolvedTablePredictor::new(table);

        let scores = predictor
            .predict(&FeatureVector::from_position(&after_center))
            .unwrap();
        assert_eq!(scores, [1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0]);
        assert_eq!(choose_move(&predictor, &after_center).unwrap(), 8);
    }

    #[test]
    fn unknown_position_scores_zero() {
        let predictor = SolvedTablePredictor::new(SolvedTable::new());
        let scores = predictor
            .predict(&FeatureVector::from_position(&Position::new()))
            .unwrap();
        assert_eq!(scores, [0.0; CELL_COUNT]);
        // Falls back to the first legal output.
        assert_eq!(choose_move(&predictor, &Position::new()).unwrap(), 8);
    }
}
