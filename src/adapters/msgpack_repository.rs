//! MessagePack implementation of the solved-table repository.
//!
//! The table is written as a list of `(key, entry)` pairs in key order using
//! rmp_serde. Every key is checked when loading, so a corrupted file fails
//! instead of producing impossible positions.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use tracing::debug;

use crate::{
    Result,
    error::Error,
    ports::SolvedTableRepository,
    solver::{SolvedEntry, SolvedTable},
    tictactoe::{Position, PositionKey},
};

/// MessagePack-based solved-table repository.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use tictacnet::{
///     adapters::MsgPackRepository, config::SolverConfig, ports::SolvedTableRepository,
///     solver::solve_game,
/// };
///
/// let repo = MsgPackRepository::new();
/// let table = solve_game(SolverConfig::default())?;
/// repo.save(&table, Path::new("solved.msgpack"))?;
///
/// let loaded = repo.load(Path::new("solved.msgpack"))?;
/// assert_eq!(loaded.len(), table.len());
/// # Ok::<(), tictacnet::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    pub fn new() -> Self {
        Self
    }
}

impl SolvedTableRepository for MsgPackRepository {
    fn save(&self, table: &SolvedTable, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;

        let entries: Vec<(&PositionKey, &SolvedEntry)> = table.iter().collect();
        let mut writer = BufWriter::new(file);
        rmp_serde::encode::write(&mut writer, &entries).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize solved table to MessagePack".to_string(),
                message: e.to_string(),
            }
        })?;
        writer.into_inner().map_err(|e| Error::Io {
            operation: format!("flush file {path:?}"),
            source: e.into_error(),
        })?;

        debug!(entries = entries.len(), ?path, "solved table saved");
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<SolvedTable> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let entries: Vec<(PositionKey, SolvedEntry)> =
            rmp_serde::decode::from_read(BufReader::new(file)).map_err(|e| {
                Error::SerializationContext {
                    operation: "deserialize solved table from MessagePack".to_string(),
                    message: e.to_string(),
                }
            })?;

        for (key, entry) in &entries {
            Position::from_bitboards(key.x.bits(), key.o.bits(), key.to_move)?;
            if !(-1..=1).contains(&entry.value) || entry.best_moves.bits() >> 9 != 0 {
                return Err(Error::SerializationContext {
                    operation: "deserialize solved table from MessagePack".to_string(),
                    message: format!("invalid entry for {key}: {entry}"),
                });
            }
        }

        debug!(entries = entries.len(), ?path, "solved table loaded");
        Ok(entries.into_iter().collect())
    }
}
