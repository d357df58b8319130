//! Table of solved positions

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::tictactoe::{CellSet, Player, Position, PositionKey};

/// Result of solving one position, as stored in the table.
///
/// `value` is always from X's point of view, whoever is to move, so the
/// entry can be read without knowing which side produced it. `best_moves`
/// are the optimal cells for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolvedEntry {
    pub value: i8,
    pub best_moves: CellSet,
}

impl SolvedEntry {
    /// Build an entry from a value seen by `to_move`.
    pub fn from_mover(to_move: Player, mover_value: i8, best_moves: CellSet) -> Self {
        let value = match to_move {
            Player::X => mover_value,
            Player::O => -mover_value,
        };
        SolvedEntry { value, best_moves }
    }

    /// The stored value seen by `to_move`.
    pub fn mover_value(&self, to_move: Player) -> i8 {
        match to_move {
            Player::X => self.value,
            Player::O => -self.value,
        }
    }
}

impl fmt::Display for SolvedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value {:+}, best moves {}", self.value, self.best_moves)
    }
}

/// Solved positions keyed by [`PositionKey`].
///
/// Iteration follows key order, so anything derived from the table (such as
/// a dataset file) comes out the same on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolvedTable {
    entries: BTreeMap<PositionKey, SolvedEntry>,
}

impl SolvedTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &PositionKey) -> Option<&SolvedEntry> {
        self.entries.get(key)
    }

    /// Look up a position directly
    pub fn lookup(&self, position: &Position) -> Option<&SolvedEntry> {
        self.get(&position.key())
    }

    pub fn contains(&self, key: &PositionKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PositionKey, &SolvedEntry)> {
        self.entries.iter()
    }

    pub(crate) fn insert(&mut self, key: PositionKey, entry: SolvedEntry) {
        self.entries.insert(key, entry);
    }
}

impl FromIterator<(PositionKey, SolvedEntry)> for SolvedTable {
    fn from_iter<I: IntoIterator<Item = (PositionKey, SolvedEntry)>>(iter: I) -> Self {
        SolvedTable {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SolvedTable {
    type Item = (&'a PositionKey, &'a SolvedEntry);
    type IntoIter = std::collections::btree_map::Iter<'a, PositionKey, SolvedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
