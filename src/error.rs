//! Error types for the tictacnet crate

use thiserror::Error;

/// Main error type for the tictacnet crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell {position} is out of range or already occupied")]
    InvalidMove { position: usize },

    #[error("invalid position: {reason} (x={x_bits:#011b}, o={o_bits:#011b})")]
    InvalidPosition {
        x_bits: u16,
        o_bits: u16,
        reason: String,
    },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at cell {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid player '{player}' in '{context}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String, context: String },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("position '{position}' has no legal moves")]
    NoLegalMoves { position: String },

    #[error(
        "position '{position}' solved twice with different results: stored ({stored}), recomputed ({recomputed})"
    )]
    InconsistentTransposition {
        position: String,
        stored: String,
        recomputed: String,
    },

    #[error("invalid dataset at line {line}: {message}")]
    InvalidDataset { line: u64, message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
