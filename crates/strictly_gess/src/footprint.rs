//! Footprint resolution: the 3x3 window that forms a movable piece.
//!
//! Coordinate arithmetic for pieces lives here and nowhere else. A
//! footprint never reads board contents; it only knows where its nine
//! cells are.

use crate::position::{BOARD_SIZE, Coord, Direction};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Relative offsets `(d_row, d_col)` of the nine cells, in row-major order.
pub const OFFSETS: [(isize, isize); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Index of the center cell within [`OFFSETS`].
pub const CENTER_INDEX: usize = 4;

/// Error resolving a footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum FootprintError {
    /// The 3x3 window around this center would leave the board.
    #[display("Footprint centered at {} does not fit on the board", _0)]
    InvalidCenter(Coord),
}

impl std::error::Error for FootprintError {}

/// A resolved 3x3 footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    center: Coord,
    cells: [Coord; 9],
}

impl Footprint {
    /// Returns true if a footprint centered at `center` fits on the board.
    pub fn is_valid_center(center: Coord) -> bool {
        (1..BOARD_SIZE - 1).contains(&center.row) && (1..BOARD_SIZE - 1).contains(&center.col)
    }

    /// Resolves the footprint centered at `center`.
    ///
    /// # Errors
    ///
    /// Returns [`FootprintError::InvalidCenter`] if the center lies on the
    /// outermost ring of cells (or off the board entirely).
    #[instrument]
    pub fn resolve(center: Coord) -> Result<Self, FootprintError> {
        if !Self::is_valid_center(center) {
            return Err(FootprintError::InvalidCenter(center));
        }

        let mut cells = [center; 9];
        for (cell, &(d_row, d_col)) in cells.iter_mut().zip(OFFSETS.iter()) {
            *cell = center
                .offset(d_row, d_col)
                .ok_or(FootprintError::InvalidCenter(center))?;
        }

        Ok(Self { center, cells })
    }

    /// The center coordinate.
    pub fn center(&self) -> Coord {
        self.center
    }

    /// All nine coordinates in row-major order.
    pub fn cells(&self) -> &[Coord; 9] {
        &self.cells
    }

    /// The cell at a relative offset, each component in `-1..=1`.
    ///
    /// # Panics
    ///
    /// Panics if either component is outside `-1..=1`.
    pub fn at(&self, d_row: isize, d_col: isize) -> Coord {
        assert!(
            (-1..=1).contains(&d_row) && (-1..=1).contains(&d_col),
            "footprint offset ({d_row}, {d_col}) out of range"
        );
        self.cells[((d_row + 1) * 3 + (d_col + 1)) as usize]
    }

    /// The edge or corner cell facing `direction` (the grip cell).
    pub fn toward(&self, direction: Direction) -> Coord {
        let (d_row, d_col) = direction.delta();
        self.at(d_row, d_col)
    }

    /// The eight cells surrounding the center.
    pub fn ring(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(index, _)| index != CENTER_INDEX)
            .map(|(_, &coord)| coord)
    }

    /// Cells on the side(s) of the footprint facing `direction`.
    ///
    /// Three cells for orthogonal directions, five for diagonals.
    pub fn leading_edge(&self, direction: Direction) -> impl Iterator<Item = Coord> + '_ {
        let (s_row, s_col) = direction.delta();
        OFFSETS
            .iter()
            .zip(self.cells.iter())
            .filter(move |&(&(d_row, d_col), _)| {
                (s_row != 0 && d_row == s_row) || (s_col != 0 && d_col == s_col)
            })
            .map(|(_, &coord)| coord)
    }

    /// Footprint shifted `steps` cells along `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`FootprintError::InvalidCenter`] if the shifted footprint
    /// would not fit on the board.
    pub fn shifted(&self, direction: Direction, steps: usize) -> Result<Self, FootprintError> {
        let (s_row, s_col) = direction.delta();
        let steps = steps as isize;
        let center = self
            .center
            .offset(s_row * steps, s_col * steps)
            .ok_or(FootprintError::InvalidCenter(self.center))?;
        Self::resolve(center)
    }
}
