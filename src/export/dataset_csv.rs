//! CSV export of solved positions as training records
//!
//! Each solved position becomes one row: X occupancy, O occupancy and the
//! optimal-move labels as 0/1 columns (most significant cell first), then the
//! side to move and the value from X's point of view.
//!
//! ```text
//! x1,...,x9,o1,...,o9,m1,...,m9,turn,score
//! ```

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use csv::{ReaderBuilder, StringRecord, Writer};
use tracing::{debug, instrument};

use super::features::FeatureVector;
use crate::{
    Error, Result,
    solver::{SolvedEntry, SolvedTable},
    tictactoe::{CELL_COUNT, CellSet, Player, Position, PositionKey},
};

/// Number of columns in a dataset row
pub const COLUMN_COUNT: usize = 3 * CELL_COUNT + 2;

/// Dataset column names in file order
pub fn header() -> Vec<String> {
    let mut columns = Vec::with_capacity(COLUMN_COUNT);
    for prefix in ["x", "o", "m"] {
        columns.extend((1..=CELL_COUNT).map(|i| format!("{prefix}{i}")));
    }
    columns.push("turn".to_string());
    columns.push("score".to_string());
    columns
}

/// One dataset row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatasetRecord {
    pub x: [u8; CELL_COUNT],
    pub o: [u8; CELL_COUNT],
    pub moves: [u8; CELL_COUNT],
    /// Side to move, written as 0 for X and 1 for O
    pub turn: Player,
    /// Value from X's point of view
    pub score: i8,
}

impl DatasetRecord {
    pub fn from_entry(key: &PositionKey, entry: &SolvedEntry) -> Self {
        DatasetRecord {
            x: key.x.to_features(),
            o: key.o.to_features(),
            moves: entry.best_moves.to_features(),
            turn: key.to_move,
            score: entry.value,
        }
    }

    /// Predictor inputs for this row (`x*`, `o*` and `turn` columns)
    pub fn features(&self) -> FeatureVector {
        FeatureVector::new(
            CellSet::from_features(&self.x),
            CellSet::from_features(&self.o),
            self.turn,
        )
    }

    /// The position this row describes
    ///
    /// # Errors
    ///
    /// Returns error if the X and O columns overlap.
    pub fn position(&self) -> Result<Position> {
        Position::from_cell_sets(
            CellSet::from_features(&self.x),
            CellSet::from_features(&self.o),
            self.turn,
        )
    }

    /// Optimal moves as a cell set
    pub fn best_moves(&self) -> CellSet {
        CellSet::from_features(&self.moves)
    }

    /// Row values in column order
    pub fn fields(&self) -> [i8; COLUMN_COUNT] {
        let mut fields = [0; COLUMN_COUNT];
        let labels = self.x.iter().chain(&self.o).chain(&self.moves);
        for (field, &value) in fields.iter_mut().zip(labels) {
            *field = value as i8;
        }
        fields[3 * CELL_COUNT] = self.turn.index() as i8;
        fields[3 * CELL_COUNT + 1] = self.score;
        fields
    }

    fn from_csv(record: &StringRecord, line: u64) -> Result<Self> {
        let invalid = |message: String| Error::InvalidDataset { line, message };

        if record.len() != COLUMN_COUNT {
            return Err(invalid(format!(
                "expected {COLUMN_COUNT} columns, found {}",
                record.len()
            )));
        }

        let mut values = [0i8; COLUMN_COUNT];
        for (column, (value, raw)) in values.iter_mut().zip(record.iter()).enumerate() {
            *value = raw.trim().parse().map_err(|_| {
                invalid(format!("column {} is not an integer: '{raw}'", column + 1))
            })?;
        }

        let binary = |range: std::ops::Range<usize>, name: &str| {
            let mut cells = [0u8; CELL_COUNT];
            for (cell, &value) in cells.iter_mut().zip(&values[range]) {
                if !(0..=1).contains(&value) {
                    return Err(invalid(format!("{name} columns must be 0 or 1, found {value}")));
                }
                *cell = value as u8;
            }
            Ok(cells)
        };

        let x = binary(0..CELL_COUNT, "x")?;
        let o = binary(CELL_COUNT..2 * CELL_COUNT, "o")?;
        let moves = binary(2 * CELL_COUNT..3 * CELL_COUNT, "m")?;

        let raw_turn = values[3 * CELL_COUNT];
        let turn = usize::try_from(raw_turn)
            .ok()
            .and_then(Player::from_index)
            .ok_or_else(|| invalid(format!("turn must be 0 or 1, found {raw_turn}")))?;
        let score = values[3 * CELL_COUNT + 1];
        if !(-1..=1).contains(&score) {
            return Err(invalid(format!("score must be -1, 0 or 1, found {score}")));
        }

        let record = DatasetRecord {
            x,
            o,
            moves,
            turn,
            score,
        };
        record
            .position()
            .map_err(|e| invalid(format!("occupancy columns conflict: {e}")))?;
        Ok(record)
    }
}

/// Writer for dataset CSV files
pub struct DatasetCsvExporter;

impl DatasetCsvExporter {
    /// Records for every solved position, in table order
    pub fn records(table: &SolvedTable) -> impl Iterator<Item = DatasetRecord> + '_ {
        table
            .iter()
            .map(|(key, entry)| DatasetRecord::from_entry(key, entry))
    }

    /// Write the header and one row per solved position.
    ///
    /// # Returns
    /// Number of data rows written
    pub fn write<W: Write>(table: &SolvedTable, writer: W) -> Result<usize> {
        let mut csv = Writer::from_writer(writer);
        csv.write_record(header())?;

        let mut rows = 0;
        for record in Self::records(table) {
            csv.write_record(record.fields().iter().map(i8::to_string))?;
            rows += 1;
        }

        csv.flush().map_err(|source| Error::Io {
            operation: "flush dataset rows".to_string(),
            source,
        })?;
        Ok(rows)
    }

    /// Export the table to a CSV file at `path`.
    ///
    /// # Returns
    /// Number of data rows written
    #[instrument(skip(table), fields(positions = table.len()))]
    pub fn export(table: &SolvedTable, path: &Path) -> Result<usize> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create dataset file {}", path.display()),
            source,
        })?;
        let rows = Self::write(table, BufWriter::new(file))?;
        debug!(rows, "dataset written");
        Ok(rows)
    }
}

/// Read dataset rows, checking the header and every value.
///
/// # Errors
///
/// Returns [`Error::InvalidDataset`] for a wrong header, a malformed row or
/// an out-of-range value, and [`Error::Csv`] if the input is not CSV.
pub fn read_dataset<R: Read>(reader: R) -> Result<Vec<DatasetRecord>> {
    let mut csv = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let expected = header();
    let found = csv.headers()?;
    if found.iter().ne(expected.iter().map(String::as_str)) {
        return Err(Error::InvalidDataset {
            line: 1,
            message: format!("unexpected header '{}'", found.iter().collect::<Vec<_>>().join(",")),
        });
    }

    let mut records = Vec::new();
    for (index, row) in csv.records().enumerate() {
        let row = row?;
        let line = row
            .position()
            .map(|position| position.line())
            .unwrap_or(index as u64 + 2);
        records.push(DatasetRecord::from_csv(&row, line)?);
    }
    Ok(records)
}

/// Read a dataset file from disk.
///
/// # Errors
///
/// Returns error if the file cannot be opened or [`read_dataset`] fails.
pub fn load_dataset(path: &Path) -> Result<Vec<DatasetRecord>> {
    let file = File::open(path).map_err(|source| Error::Io {
        operation: format!("open dataset file {}", path.display()),
        source,
    })?;
    read_dataset(BufReader::new(file))
}
