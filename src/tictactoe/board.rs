//! Position representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CELL_COUNT, CellSet, lines::LineAnalyzer};

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Both players, X first
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Integer encoding used in datasets and feature vectors (X = 0, O = 1)
    pub fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }

    /// Inverse of [`Player::index`]
    pub fn from_index(index: usize) -> Option<Player> {
        match index {
            0 => Some(Player::X),
            1 => Some(Player::O),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Identity of a position for memoization: both occupancy sets plus the side
/// to move. Positions reached through different move orders share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PositionKey {
    pub x: CellSet,
    pub o: CellSet,
    pub to_move: Player,
}

impl PositionKey {
    /// Rebuild the position this key identifies.
    ///
    /// # Errors
    ///
    /// Returns error if the two occupancy sets overlap.
    pub fn position(&self) -> crate::Result<Position> {
        Position::from_cell_sets(self.x, self.o, self.to_move)
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in 0..CELL_COUNT {
            let c = if self.x.contains(cell) {
                'X'
            } else if self.o.contains(cell) {
                'O'
            } else {
                '.'
            };
            write!(f, "{c}")?;
        }
        write!(f, "_{}", self.to_move)
    }
}

/// A game position: one occupancy set per player, the side to move and the
/// number of moves played so far.
///
/// Positions are immutable values. [`Position::apply_move`] returns a new
/// position and leaves the receiver untouched. The two occupancy sets never
/// overlap and `depth` always equals the number of occupied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    squares: [CellSet; 2],
    to_move: Player,
    depth: u8,
}

impl Position {
    /// The empty board with X to move
    pub fn new() -> Self {
        Position {
            squares: [CellSet::EMPTY; 2],
            to_move: Player::X,
            depth: 0,
        }
    }

    /// Build a position from raw occupancy bits.
    ///
    /// Only disjointness and range are checked, so positions that cannot
    /// arise from alternating play (for example X to move with an extra X on
    /// the board) are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use tictacnet::tictactoe::{Player, Position};
    ///
    /// let position = Position::from_bitboards(0b000_000_011, 0b000_001_000, Player::X).unwrap();
    /// assert_eq!(position.depth(), 3);
    /// assert!(Position::from_bitboards(0b1, 0b1, Player::O).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns error if either set uses bits above cell 8 or the sets overlap.
    pub fn from_bitboards(x_bits: u16, o_bits: u16, to_move: Player) -> crate::Result<Self> {
        let invalid = |reason: &str| crate::Error::InvalidPosition {
            x_bits,
            o_bits,
            reason: reason.to_string(),
        };
        let x = CellSet::from_bits(x_bits).ok_or_else(|| invalid("X occupies bits beyond cell 8"))?;
        let o = CellSet::from_bits(o_bits).ok_or_else(|| invalid("O occupies bits beyond cell 8"))?;
        Self::from_cell_sets(x, o, to_move)
    }

    /// Build a position from two occupancy sets.
    ///
    /// # Errors
    ///
    /// Returns error if the sets overlap.
    pub fn from_cell_sets(x: CellSet, o: CellSet, to_move: Player) -> crate::Result<Self> {
        if !x.intersection(o).is_empty() {
            return Err(crate::Error::InvalidPosition {
                x_bits: x.bits(),
                o_bits: o.bits(),
                reason: "a cell is occupied by both players".to_string(),
            });
        }
        let depth = (x.len() + o.len()) as u8;
        Ok(Position {
            squares: [x, o],
            to_move,
            depth,
        })
    }

    /// Parse a position from text.
    ///
    /// Nine cell characters are read (`X`/`x`, `O`/`o`/`0`, and `.` or `-`
    /// for empty); whitespace and `|` separators are ignored, and in
    /// multi-line input so are row separator lines (four or more `-`/`+`),
    /// so both `XO.......` and the rendered grid parse. An optional `_X` or
    /// `_O` suffix sets the side to move; otherwise it is inferred from the
    /// piece counts (equal counts: X, X one ahead: O).
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Fewer than 9 cell characters are present
    /// - Any character is not a valid cell representation
    /// - The suffix is not `X` or `O`
    /// - No suffix is given and the piece counts do not determine a turn
    pub fn from_string(s: &str) -> crate::Result<Self> {
        let (board_part, specified_turn) = Self::split_board_and_turn(s)?;
        let multi_line = board_part.trim().lines().count() > 1;
        let chars: Vec<char> = board_part
            .lines()
            .filter(|line| !(multi_line && Self::is_separator_line(line)))
            .flat_map(str::chars)
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        let (x, o) = Self::parse_cells(&chars, s)?;

        let to_move = match specified_turn {
            Some(turn) => turn,
            None => Self::determine_turn_from_counts(x.len(), o.len())?,
        };

        Self::from_cell_sets(x, o, to_move)
    }

    fn is_separator_line(line: &str) -> bool {
        let line = line.trim();
        line.len() >= 4 && line.chars().all(|c| c == '-' || c == '+')
    }

    fn split_board_and_turn(s: &str) -> crate::Result<(&str, Option<Player>)> {
        let Some(idx) = s.rfind('_') else {
            return Ok((s, None));
        };
        let suffix = s[idx + 1..].trim();
        let player = match suffix {
            "X" | "x" => Player::X,
            "O" | "o" => Player::O,
            _ => {
                return Err(crate::Error::InvalidPlayerString {
                    player: suffix.to_string(),
                    context: s.to_string(),
                });
            }
        };
        Ok((&s[..idx], Some(player)))
    }

    /// Helper: Parse 9 cells from a slice of characters.
    fn parse_cells(chars: &[char], context: &str) -> crate::Result<(CellSet, CellSet)> {
        if chars.len() < CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut x = CellSet::EMPTY;
        let mut o = CellSet::EMPTY;
        for (cell, &c) in chars.iter().take(CELL_COUNT).enumerate() {
            match c {
                'X' | 'x' => x = x.with(cell),
                'O' | 'o' | '0' => o = o.with(cell),
                '.' | '-' => {}
                _ => {
                    return Err(crate::Error::InvalidCellCharacter {
                        character: c,
                        position: cell,
                        context: context.to_string(),
                    });
                }
            }
        }
        Ok((x, o))
    }

    fn determine_turn_from_counts(x_count: usize, o_count: usize) -> crate::Result<Player> {
        if x_count == o_count {
            Ok(Player::X)
        } else if x_count == o_count + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvalidPieceCounts { x_count, o_count })
        }
    }

    /// Occupancy set of `player`
    pub fn squares(&self, player: Player) -> CellSet {
        self.squares[player.index()]
    }

    pub fn x(&self) -> CellSet {
        self.squares(Player::X)
    }

    pub fn o(&self) -> CellSet {
        self.squares(Player::O)
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Number of moves played so far (0-9)
    pub fn depth(&self) -> usize {
        usize::from(self.depth)
    }

    /// Cells occupied by either player
    pub fn occupied(&self) -> CellSet {
        self.x().union(self.o())
    }

    /// Cells occupied by neither player
    pub fn empty_cells(&self) -> CellSet {
        self.occupied().complement()
    }

    /// Memoization key for this position
    pub fn key(&self) -> PositionKey {
        PositionKey {
            x: self.x(),
            o: self.o(),
            to_move: self.to_move,
        }
    }

    /// Score from the perspective of the side to move: +1 if it has a
    /// completed line, -1 if the opponent has one, 0 otherwise.
    ///
    /// X's lines are examined before O's. Reachable positions never have
    /// lines for both players, so the order only matters for hand-built
    /// positions.
    pub fn score(&self) -> i8 {
        match self.winner() {
            Some(player) if player == self.to_move => 1,
            Some(_) => -1,
            None => 0,
        }
    }

    /// The player with a completed line, checking X first
    pub fn winner(&self) -> Option<Player> {
        Player::ALL
            .into_iter()
            .find(|&player| LineAnalyzer::has_won(self.squares(player)))
    }

    /// Check if the game is over (full board or a completed line)
    pub fn is_terminal(&self) -> bool {
        self.depth() == CELL_COUNT || self.score() != 0
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.depth() == CELL_COUNT && self.winner().is_none()
    }

    /// Every empty cell, from cell 8 down to cell 0.
    ///
    /// The generator does not look at the score, so terminal positions with
    /// empty cells still report them.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.empty_cells().cells().collect()
    }

    /// Cells where the side to move would complete a line right now
    pub fn immediate_wins(&self) -> CellSet {
        LineAnalyzer::completing_cells(self.squares(self.to_move), self.empty_cells())
    }

    /// Play `cell` for the side to move and return the resulting position.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the cell is out of range or
    /// already occupied.
    #[must_use = "apply_move returns a new position; the original is unchanged"]
    pub fn apply_move(&self, cell: usize) -> crate::Result<Position> {
        if !self.empty_cells().contains(cell) {
            return Err(crate::Error::InvalidMove { position: cell });
        }

        let mut next = *self;
        let mover = self.to_move.index();
        next.squares[mover] = self.squares[mover].with(cell);
        next.to_move = self.to_move.opponent();
        next.depth = self.depth + 1;
        Ok(next)
    }

    /// Compact label such as `XO......._X`
    pub fn encode(&self) -> String {
        self.key().to_string()
    }

    fn cell_char(&self, cell: usize) -> char {
        if self.x().contains(cell) {
            'X'
        } else if self.o().contains(cell) {
            'O'
        } else {
            '-'
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    /// Renders the 3x3 grid, e.g.
    ///
    /// ```text
    /// X|O|-
    /// -----
    /// -|X|-
    /// -----
    /// -|-|O
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in 0..CELL_COUNT {
            write!(f, "{}", self.cell_char(cell))?;
            if cell % 3 < 2 {
                write!(f, "|")?;
            } else if cell < CELL_COUNT - 1 {
                write!(f, "\n-----\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[usize]) -> Position {
        moves.iter().fold(Position::new(), |position, &cell| {
            position.apply_move(cell).unwrap()
        })
    }

    #[test]
    fn test_new_board() {
        let board = Position::new();
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(board.depth(), 0);
        assert!(board.occupied().is_empty());
        assert_eq!(board.score(), 0);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_apply_move() {
        let board = Position::new();

        let next = board.apply_move(4).unwrap();
        assert!(next.x().contains(4));
        assert_eq!(next.to_move(), Player::O);
        assert_eq!(next.depth(), 1);

        // The source is left unchanged
        assert_eq!(board, Position::new());

        // Move on occupied cell
        let result = next.apply_move(4);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("occupied"));

        // Out of range
        assert!(next.apply_move(9).is_err());
    }

    #[test]
    fn test_legal_moves_run_high_to_low() {
        let board = play(&[0, 4]);
        assert_eq!(board.legal_moves(), vec![8, 7, 6, 5, 3, 2, 1]);
        assert_eq!(Position::new().legal_moves(), (0..9).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_win_detection_horizontal() {
        // X wins on top row; O is to move and has lost
        let board = play(&[0, 3, 1, 4, 2]);
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
        assert_eq!(board.score(), -1);
    }

    #[test]
    fn test_win_detection_vertical() {
        // O wins on middle column (1, 4, 7)
        let board = play(&[0, 1, 2, 4, 5, 7]);
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(board.score(), -1);
    }

    #[test]
    fn test_score_favours_side_to_move() {
        let x_line = Position::from_bitboards(0b000_000_111, 0b000_011_000, Player::X).unwrap();
        assert_eq!(x_line.score(), 1);
        let x_line = Position::from_bitboards(0b000_000_111, 0b000_011_000, Player::O).unwrap();
        assert_eq!(x_line.score(), -1);
    }

    #[test]
    fn test_draw_detection() {
        let board = play(&[0, 1, 2, 4, 3, 6, 5, 8, 7]);
        assert!(board.is_terminal());
        assert!(board.is_draw());
        assert_eq!(board.winner(), None);
        assert_eq!(board.score(), 0);
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_immediate_wins() {
        // X can win at cell 2
        let board = play(&[0, 3, 1, 4]);
        assert_eq!(board.immediate_wins(), CellSet::EMPTY.with(2));

        // O to move has no line of two
        let board = play(&[0, 4, 1]);
        assert!(board.immediate_wins().is_empty());
    }

    #[test]
    fn test_from_bitboards_rejects_overlap_and_range() {
        assert!(Position::from_bitboards(0b11, 0b10, Player::X).is_err());
        assert!(Position::from_bitboards(1 << 9, 0, Player::X).is_err());
    }

    #[test]
    fn test_from_string() {
        let board = Position::from_string("XOX......").unwrap();
        assert_eq!(board.x(), CellSet::EMPTY.with(0).with(2));
        assert_eq!(board.o(), CellSet::EMPTY.with(1));
        // to_move is calculated based on piece count
        assert_eq!(board.to_move(), Player::O);

        // Invalid string length
        assert!(Position::from_string("XO").is_err());

        // Invalid character
        assert!(Position::from_string("XOZ......").is_err());

        // Impossible counts without a suffix
        assert!(Position::from_string("XXX......").is_err());
    }

    #[test]
    fn test_from_string_with_turn_suffix() {
        let board = Position::from_string("XX.O....._X").unwrap();
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(board.depth(), 3);

        assert!(Position::from_string("........._Q").is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_string() {
        let board = play(&[0, 1, 4, 8]);
        let rendered = board.to_string();
        assert_eq!(rendered, "X|O|-\n-----\n-|X|-\n-----\n-|-|O");
        assert_eq!(Position::from_string(&rendered).unwrap(), board);
    }

    #[test]
    fn test_from_string_keeps_short_dash_rows() {
        let board = Position::from_string("X--\n-O-\n---").unwrap();
        assert_eq!(board.x(), CellSet::EMPTY.with(0));
        assert_eq!(board.o(), CellSet::EMPTY.with(4));

        let empty = Position::from_string("---------").unwrap();
        assert_eq!(empty, Position::new());
    }

    #[test]
    fn test_display_full_board() {
        let board = Position::from_bitboards(0b101_010_101, 0b010_101_010, Player::O).unwrap();
        assert_eq!(board.to_string(), "X|O|X\n-----\nO|X|O\n-----\nX|O|X");
    }

    #[test]
    fn test_encode() {
        let board = play(&[0, 1]);
        assert_eq!(board.encode(), "XO......._X");
        assert_eq!(Position::new().encode(), "........._X");
    }

    #[test]
    fn test_key_identifies_transpositions() {
        let a = play(&[0, 4, 8]);
        let b = play(&[8, 4, 0]);
        assert_eq!(a.key(), b.key());
        assert_eq!(a.key().position().unwrap(), a);
    }

    #[test]
    fn test_player_index_round_trip() {
        for player in Player::ALL {
            assert_eq!(Player::from_index(player.index()), Some(player));
        }
        assert_eq!(Player::from_index(2), None);
    }
}
