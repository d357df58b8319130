//! Repository port for solved-table persistence.

use std::path::Path;

use crate::{Result, solver::SolvedTable};

/// Port for saving and loading a [`SolvedTable`].
///
/// A full solve takes long enough that the CLI caches it on disk and exports
/// from the cached copy later.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use tictacnet::{ports::SolvedTableRepository, solver::SolvedTable};
///
/// fn cache<R: SolvedTableRepository>(repo: &R, table: &SolvedTable) -> tictacnet::Result<()> {
///     repo.save(table, Path::new("solved.msgpack"))
/// }
/// ```
pub trait SolvedTableRepository {
    /// Save a table to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails.
    fn save(&self, table: &SolvedTable, path: &Path) -> Result<()>;

    /// Load a table from persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a valid
    /// table.
    fn load(&self, path: &Path) -> Result<SolvedTable>;
}
