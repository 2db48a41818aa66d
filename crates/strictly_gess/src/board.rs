//! The 18x18 Gess board.

use crate::position::{BOARD_SIZE, Coord};
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Standard starting layout, top row first (`.` empty, `B` Black, `W` White).
const STANDARD_LAYOUT: [&str; BOARD_SIZE] = [
    ".W.W.WWWWWWWW.W.W.",
    "WWW.W.WWWW.W.W.WWW",
    ".W.W.WWWWWWWW.W.W.",
    "..................",
    "..................",
    ".W..W..W..W..W..W.",
    "..................",
    "..................",
    "..................",
    "..................",
    "..................",
    "..................",
    ".B..B..B..B..B..B.",
    "..................",
    "..................",
    ".B.B.BBBBBBBB.B.B.",
    "BBB.B.BBBB.B.B.BBB",
    ".B.B.BBBBBBBB.B.B.",
];

/// A coordinate outside the board was accessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Coordinate ({}, {}) is outside the board", coord.row, coord.col)]
pub struct OutOfBounds {
    /// The offending coordinate.
    pub coord: Coord,
}

impl std::error::Error for OutOfBounds {}

/// Error building a board from text rows.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// Wrong number of rows.
    #[display("Expected {} rows, found {}", BOARD_SIZE, _0)]
    RowCount(usize),

    /// A row has the wrong number of cells.
    #[display("Row {} has {} cells, expected {}", row, len, BOARD_SIZE)]
    RowLength {
        /// Row index.
        row: usize,
        /// Number of cells found.
        len: usize,
    },

    /// A character is not one of `.`, `B` or `W`.
    #[display("Unexpected cell symbol {:?}", _0)]
    BadSymbol(char),
}

impl std::error::Error for BoardParseError {}

/// Square Gess board.
///
/// All reads and writes go through [`Board::get`] and [`Board::set`].
/// Accessing a coordinate off the board is a programming error and panics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board with no stones.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates the standard starting board, 43 stones per side.
    #[instrument]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (row, line) in STANDARD_LAYOUT.iter().enumerate() {
            for (col, symbol) in line.chars().enumerate() {
                board.cells[row][col] = cell_from_symbol(symbol).unwrap_or_default();
            }
        }
        board
    }

    /// Builds a board from text rows, top row first.
    ///
    /// Each row holds `BOARD_SIZE` symbols: `.` for empty, `B` for Black
    /// and `W` for White.
    ///
    /// # Errors
    ///
    /// Returns [`BoardParseError`] if the shape or a symbol is wrong.
    #[instrument(skip(rows))]
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardParseError> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != BOARD_SIZE {
                return Err(BoardParseError::RowLength { row, len });
            }
            for (col, symbol) in line.chars().enumerate() {
                board.cells[row][col] =
                    cell_from_symbol(symbol).ok_or(BoardParseError::BadSymbol(symbol))?;
            }
        }
        Ok(board)
    }

    /// Returns the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `coord` is off the board.
    pub fn try_get(&self, coord: Coord) -> Result<Cell, OutOfBounds> {
        self.cells
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .copied()
            .ok_or(OutOfBounds { coord })
    }

    /// Returns the cell at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the board.
    #[track_caller]
    pub fn get(&self, coord: Coord) -> Cell {
        match self.try_get(coord) {
            Ok(cell) => cell,
            Err(e) => panic!("{e}"),
        }
    }

    /// Overwrites the cell at `coord` unconditionally.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the board.
    #[track_caller]
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        match self
            .cells
            .get_mut(coord.row)
            .and_then(|row| row.get_mut(coord.col))
        {
            Some(slot) => *slot = cell,
            None => panic!("{}", OutOfBounds { coord }),
        }
    }

    /// Counts the stones owned by `player`.
    pub fn count_stones(&self, player: Player) -> usize {
        self.cells().filter(|(_, cell)| cell.is_owned_by(player)).count()
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::all().map(|coord| (coord, self.get(coord)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Stone(Player::Black) => 'B',
                    Cell::Stone(Player::White) => 'W',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn cell_from_symbol(symbol: char) -> Option<Cell> {
    match symbol {
        '.' => Some(Cell::Empty),
        'B' => Some(Cell::Stone(Player::Black)),
        'W' => Some(Cell::Stone(Player::White)),
        _ => None,
    }
}
