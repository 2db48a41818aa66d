//! Board coordinates, algebraic notation and the eight ray directions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 18;

/// Column letters used by algebraic notation, left to right.
const COLUMN_LETTERS: &[u8; BOARD_SIZE] = b"abcdefghijklmnopqr";

/// A cell coordinate on the board.
///
/// Row 0 is the top edge (White's home side) and row `BOARD_SIZE - 1`
/// the bottom edge (Black's home side). A `Coord` may be constructed
/// with any values; the board rejects off-board coordinates on access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Coord {
    /// Creates a new coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if the coordinate lies on the board.
    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Shifts the coordinate, returning `None` if the result leaves the board.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let shifted = Self::new(row, col);
        shifted.is_on_board().then_some(shifted)
    }

    /// Signed displacement `(d_row, d_col)` from `self` to `other`.
    pub fn displacement_to(self, other: Coord) -> (isize, isize) {
        (
            other.row as isize - self.row as isize,
            other.col as isize - self.col as isize,
        )
    }

    /// Iterates over every coordinate on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match COLUMN_LETTERS.get(self.col) {
            Some(&letter) if self.row < BOARD_SIZE => {
                write!(f, "{}{}", letter as char, BOARD_SIZE - self.row)
            }
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// Error parsing algebraic notation such as `c3`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseCoordError {
    /// The input was empty.
    #[display("Empty coordinate")]
    Empty,

    /// The column letter is not on the board.
    #[display("Column {:?} is not between 'a' and 'r'", _0)]
    BadColumn(char),

    /// The row number is missing, malformed or off the board.
    #[display("Row {:?} is not between 1 and 18", _0)]
    BadRow(String),
}

impl std::error::Error for ParseCoordError {}

impl FromStr for Coord {
    type Err = ParseCoordError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or(ParseCoordError::Empty)?;
        let col = COLUMN_LETTERS
            .iter()
            .position(|&c| c as char == letter.to_ascii_lowercase())
            .ok_or(ParseCoordError::BadColumn(letter))?;

        let digits = chars.as_str();
        let number: usize = digits
            .parse()
            .map_err(|_| ParseCoordError::BadRow(digits.to_string()))?;
        if !(1..=BOARD_SIZE).contains(&number) {
            return Err(ParseCoordError::BadRow(digits.to_string()));
        }

        Ok(Coord::new(BOARD_SIZE - number, col))
    }
}

/// One of the eight straight or diagonal rays a footprint can travel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Direction {
    /// Towards row 0.
    North,
    /// Towards row 0 and the last column.
    NorthEast,
    /// Towards the last column.
    East,
    /// Towards the last row and the last column.
    SouthEast,
    /// Towards the last row.
    South,
    /// Towards the last row and column 0.
    SouthWest,
    /// Towards column 0.
    West,
    /// Towards row 0 and column 0.
    NorthWest,
}

impl Direction {
    /// Unit step `(d_row, d_col)` for this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Direction for a unit step, or `None` for `(0, 0)` and non-unit input.
    pub fn from_delta(d_row: isize, d_col: isize) -> Option<Self> {
        match (d_row, d_col) {
            (-1, 0) => Some(Direction::North),
            (-1, 1) => Some(Direction::NorthEast),
            (0, 1) => Some(Direction::East),
            (1, 1) => Some(Direction::SouthEast),
            (1, 0) => Some(Direction::South),
            (1, -1) => Some(Direction::SouthWest),
            (0, -1) => Some(Direction::West),
            (-1, -1) => Some(Direction::NorthWest),
            _ => None,
        }
    }

    /// Returns true for the four diagonal rays.
    pub fn is_diagonal(self) -> bool {
        let (d_row, d_col) = self.delta();
        d_row != 0 && d_col != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_notation_corners() {
        assert_eq!("a18".parse::<Coord>(), Ok(Coord::new(0, 0)));
        assert_eq!("r1".parse::<Coord>(), Ok(Coord::new(17, 17)));
        assert_eq!("c3".parse::<Coord>(), Ok(Coord::new(15, 2)));
        assert_eq!("C3".parse::<Coord>(), Ok(Coord::new(15, 2)));
    }

    #[test]
    fn test_notation_rejects_off_board() {
        assert_eq!("".parse::<Coord>(), Err(ParseCoordError::Empty));
        assert_eq!("s4".parse::<Coord>(), Err(ParseCoordError::BadColumn('s')));
        assert!(matches!("a0".parse::<Coord>(), Err(ParseCoordError::BadRow(_))));
        assert!(matches!("a19".parse::<Coord>(), Err(ParseCoordError::BadRow(_))));
        assert!(matches!("b".parse::<Coord>(), Err(ParseCoordError::BadRow(_))));
    }

    #[test]
    fn test_notation_display_matches_parse() {
        for coord in Coord::all() {
            assert_eq!(coord.to_string().parse::<Coord>(), Ok(coord));
        }
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Coord::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 1), Some(Coord::new(1, 1)));
        assert_eq!(Coord::new(17, 17).offset(0, 1), None);
    }

    #[test]
    fn test_direction_delta_round_trip() {
        for direction in Direction::iter() {
            let (d_row, d_col) = direction.delta();
            assert_eq!(Direction::from_delta(d_row, d_col), Some(direction));
        }
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(2, 0), None);
    }
}
