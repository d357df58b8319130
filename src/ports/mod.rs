//! Ports (trait boundaries) for external dependencies.
//!
//! The solver and dataset code never name a model or a storage format. Move
//! predictors and table storage plug in through these traits, implemented by
//! the types in [`crate::adapters`].

pub mod predictor;
pub mod repository;

pub use predictor::{MovePredictor, choose_move};
pub use repository::SolvedTableRepository;
