//! CLI infrastructure for the tictacnet binary

pub mod commands;
pub mod config;
pub mod output;
