//! Move-predictor port
//!
//! A predictor maps the [`FeatureVector`] of a position to nine preference
//! scores. Output index `k` refers to cell `8 - k`, the same order as the
//! `m1..m9` dataset columns, so a model trained on the dataset plugs in
//! without reordering.

use crate::{
    Error, Result,
    export::FeatureVector,
    tictactoe::{CELL_COUNT, Position, feature_cell},
};

/// A source of move preferences for a position.
pub trait MovePredictor {
    /// Name used in reports and logs.
    fn name(&self) -> &str;

    /// Preference score for every cell, in dataset column order.
    ///
    /// # Errors
    ///
    /// Returns an error if the predictor cannot score the input.
    fn predict(&self, features: &FeatureVector) -> Result<[f32; CELL_COUNT]>;
}

/// Play the legal cell the predictor scores highest.
///
/// Ties go to the earlier output index, that is the higher-numbered cell.
///
/// # Errors
///
/// Returns [`Error::NoLegalMoves`] for a terminal or full board, and any
/// error raised by the predictor.
pub fn choose_move<P: MovePredictor + ?Sized>(predictor: &P, position: &Position) -> Result<usize> {
    if position.is_terminal() {
        return Err(Error::NoLegalMoves {
            position: position.key().to_string(),
        });
    }

    let scores = predictor.predict(&FeatureVector::from_position(position))?;
    let open = position.empty_cells();

    let mut best: Option<(usize, f32)> = None;
    for (k, &score) in scores.iter().enumerate() {
        let cell = feature_cell(k);
        if !open.contains(cell) {
            continue;
        }
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((cell, score));
        }
    }

    best.map(|(cell, _)| cell).ok_or_else(|| Error::NoLegalMoves {
        position: position.key().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed([f32; CELL_COUNT]);

    impl MovePredictor for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn predict(&self, _features: &FeatureVector) -> Result<[f32; CELL_COUNT]> {
            Ok(self.0)
        }
    }

    #[test]
    fn output_index_maps_to_reversed_cell() {
        // Only output 0 (cell 8) scores.
        let mut scores = [0.0; CELL_COUNT];
        scores[0] = 1.0;
        assert_eq!(choose_move(&Fixed(scores), &Position::new()).unwrap(), 8);

        // Only output 8 (cell 0) scores.
        let mut scores = [0.0; CELL_COUNT];
        scores[8] = 1.0;
        assert_eq!(choose_move(&Fixed(scores), &Position::new()).unwrap(), 0);
    }

    #[test]
    fn occupied_cells_are_skipped() {
        let position = Position::new().apply_move(8).unwrap();
        let mut scores = [0.0; CELL_COUNT];
        scores[0] = 5.0;
        scores[1] = 2.0;
        // Cell 8 is taken, so the next best output (cell 7) wins.
        assert_eq!(choose_move(&Fixed(scores), &position).unwrap(), 7);
    }

    #[test]
    fn ties_go_to_earlier_output() {
        let scores = [1.0; CELL_COUNT];
        assert_eq!(choose_move(&Fixed(scores), &Position::new()).unwrap(), 8);
    }

    #[test]
    fn terminal_position_has_no_move() {
        let won = Position::from_string("XXXOO...._O").unwrap();
        let err = choose_move(&Fixed([1.0; CELL_COUNT]), &won).unwrap_err();
        assert!(matches!(err, Error::NoLegalMoves { .. }));
    }
}
