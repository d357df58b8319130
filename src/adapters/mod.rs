//! Adapters implementing the traits in [`crate::ports`].

pub mod msgpack_repository;
pub mod table_predictor;

pub use msgpack_repository::MsgPackRepository;
pub use table_predictor::SolvedTablePredictor;
