//! First-class action types for Gess.
//!
//! A move is a player's intent to slide one footprint onto another. It is
//! validated against a board snapshot before anything is mutated.

use crate::footprint::Footprint;
use crate::position::{Coord, Direction};
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player sliding the footprint at `origin` to `destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Center of the footprint being moved.
    pub origin: Coord,
    /// Center of the footprint after the move.
    pub destination: Coord,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, origin: Coord, destination: Coord) -> Self {
        Self {
            player,
            origin,
            destination,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.player, self.origin, self.destination)
    }
}

/// Reason a move was rejected.
///
/// Rejections are recoverable: the board is untouched and the same player
/// may try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// The origin footprint holds none of the mover's stones.
    #[display("None of your stones are in the footprint at {}", _0)]
    NoOwnedStoneInOrigin(Coord),

    /// The origin footprint holds at least one opponent stone.
    #[display("The footprint at {} contains opponent stones", _0)]
    ContainsOpponentStone(Coord),

    /// The move is not along a ray, or no grip stone faces that way.
    #[display("Cannot move the footprint {}", _0)]
    BadDirection(DirectionFault),

    /// The move goes too far or through an obstruction.
    #[display("Cannot move that far: {}", _0)]
    BadDistance(DistanceFault),

    /// Origin and destination are the same.
    #[display("The footprint center did not move")]
    CenterUnmoved,

    /// The origin footprint does not fit on the board.
    #[display("No footprint fits around origin {}", _0)]
    OriginOutOfBounds(Coord),

    /// The destination footprint does not fit on the board.
    #[display("No footprint fits around destination {}", _0)]
    DestinationOutOfBounds(Coord),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),
}

impl std::error::Error for MoveError {}

/// Why a direction was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum DirectionFault {
    /// Displacement is not straight or a true diagonal.
    #[display("along an irregular line")]
    NotARay,

    /// No own stone on the footprint edge facing the direction.
    #[display("{} without a stone on that side", _0)]
    NoGrip(Direction),
}

/// Why a distance was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum DistanceFault {
    /// A footprint with an empty center may move exactly one cell.
    #[display("an empty-centered footprint moves one cell, not {}", _0)]
    EmptyCenter(usize),

    /// A stone stops the footprint before it reaches the destination.
    #[display("path blocked at {}", _0)]
    Obstructed(Coord),

    /// An intermediate footprint would leave the board.
    #[display("path leaves the board")]
    OffBoard,
}

/// A move the validator has approved against a specific board.
///
/// Only the validator can construct one; the executor accepts nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedMove {
    player: Player,
    origin: Footprint,
    destination: Footprint,
    direction: Direction,
    distance: usize,
}

impl ValidatedMove {
    pub(crate) fn new(
        player: Player,
        origin: Footprint,
        destination: Footprint,
        direction: Direction,
        distance: usize,
    ) -> Self {
        Self {
            player,
            origin,
            destination,
            direction,
            distance,
        }
    }

    /// The moving player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The resolved origin footprint.
    pub fn origin(&self) -> &Footprint {
        &self.origin
    }

    /// The resolved destination footprint.
    pub fn destination(&self) -> &Footprint {
        &self.destination
    }

    /// Direction of travel.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of cells travelled.
    pub fn distance(&self) -> usize {
        self.distance
    }
}
