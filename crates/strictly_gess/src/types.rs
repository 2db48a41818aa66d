//! Core domain types for Gess.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Player {
    /// Black (goes first, starts on the bottom rows).
    Black,
    /// White (goes second, starts on the top rows).
    White,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Returns the stone owned by this player.
    pub fn stone(self) -> Cell {
        Cell::Stone(self)
    }
}

/// A cell on the Gess board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's stone.
    Stone(Player),
}

impl Cell {
    /// Returns true if the cell holds no stone.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns true if the cell holds a stone owned by `player`.
    pub fn is_owned_by(self, player: Player) -> bool {
        self == Cell::Stone(player)
    }

    /// Returns the owner of the stone, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Stone(player) => Some(player),
        }
    }
}
