//! Nine-bit cell sets used for occupancy and move labels

use std::{fmt, ops::BitOr};

use serde::{Deserialize, Serialize};

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// A set of board cells packed into the low nine bits of a `u16`.
///
/// Cell `i` is bit `1 << i`; cells run row-major from the top-left (0) to the
/// bottom-right (8). The same type holds a player's occupancy and a set of
/// optimal moves.
///
/// Flattened feature vectors list the most significant cell first: feature
/// `k` is cell `8 - k`.
///
/// ```
/// use tictacnet::tictactoe::CellSet;
///
/// let corners: CellSet = [0, 2, 6, 8].into_iter().collect();
/// assert_eq!(corners.len(), 4);
/// assert_eq!(corners.to_features(), [1, 0, 1, 0, 0, 0, 1, 0, 1]);
/// assert_eq!(corners.cells().collect::<Vec<_>>(), vec![8, 6, 2, 0]);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CellSet(u16);

impl CellSet {
    /// The set with no cells
    pub const EMPTY: CellSet = CellSet(0);

    /// The set with every cell
    pub const FULL: CellSet = CellSet((1 << CELL_COUNT) - 1);

    /// Build a set from raw bits, rejecting bits above cell 8.
    pub const fn from_bits(bits: u16) -> Option<CellSet> {
        if bits & !Self::FULL.0 == 0 {
            Some(CellSet(bits))
        } else {
            None
        }
    }

    /// Build a set from three cells (used for the winning lines table).
    pub(crate) const fn from_line(line: [usize; 3]) -> CellSet {
        CellSet((1 << line[0]) | (1 << line[1]) | (1 << line[2]))
    }

    /// Raw bit representation
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Check whether `cell` is in the set (out-of-range cells never are)
    pub const fn contains(self, cell: usize) -> bool {
        cell < CELL_COUNT && self.0 & (1 << cell) != 0
    }

    /// Return a copy of the set with `cell` added. Cells past 8 are ignored.
    #[must_use = "with returns a new set; the original is unchanged"]
    pub const fn with(self, cell: usize) -> CellSet {
        if cell < CELL_COUNT {
            CellSet(self.0 | (1 << cell))
        } else {
            self
        }
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn union(self, other: CellSet) -> CellSet {
        CellSet(self.0 | other.0)
    }

    pub const fn intersection(self, other: CellSet) -> CellSet {
        CellSet(self.0 & other.0)
    }

    /// Cells on the board that are not in this set
    pub const fn complement(self) -> CellSet {
        CellSet(!self.0 & Self::FULL.0)
    }

    /// True if every cell of `other` is also in `self`
    pub const fn is_superset(self, other: CellSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Iterate over the cells in the set from the highest index to the lowest.
    pub fn cells(self) -> impl Iterator<Item = usize> {
        (0..CELL_COUNT).rev().filter(move |&cell| self.contains(cell))
    }

    /// Flatten into nine 0/1 features, most significant cell first.
    pub fn to_features(self) -> [u8; CELL_COUNT] {
        let mut features = [0; CELL_COUNT];
        for (k, feature) in features.iter_mut().enumerate() {
            *feature = u8::from(self.contains(feature_cell(k)));
        }
        features
    }

    /// Inverse of [`CellSet::to_features`]; any nonzero feature counts as set.
    pub fn from_features(features: &[u8; CELL_COUNT]) -> CellSet {
        features
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(k, _)| feature_cell(k))
            .collect()
    }
}

/// Cell described by feature (or predictor output) index `k`.
pub const fn feature_cell(k: usize) -> usize {
    CELL_COUNT - 1 - k
}

impl BitOr for CellSet {
    type Output = CellSet;

    fn bitor(self, rhs: CellSet) -> CellSet {
        self.union(rhs)
    }
}

impl FromIterator<usize> for CellSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter().fold(CellSet::EMPTY, CellSet::with)
    }
}

impl fmt::Display for CellSet {
    /// Lists the cells in ascending order, e.g. `{0, 4, 8}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cells: Vec<usize> = self.cells().collect();
        cells.reverse();
        write!(f, "{{")?;
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "}}")
    }
}
