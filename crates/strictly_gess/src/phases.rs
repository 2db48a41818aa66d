//! Game status and outcome types.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Externally visible state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; the player is next to move.
    InProgress(Player),
    /// Game has ended with a winner.
    Won(Player),
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Won(_))
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress(player) => write!(f, "{player} to move"),
            GameStatus::Won(player) => write!(f, "{player} wins"),
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum EndReason {
    /// The loser has no ring left.
    #[display("no rings left")]
    RingsLost,
    /// The loser resigned.
    #[display("resignation")]
    Resignation,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    winner: Player,
    reason: EndReason,
}

impl Outcome {
    /// Creates an outcome.
    pub fn new(winner: Player, reason: EndReason) -> Self {
        Self { winner, reason }
    }

    /// The winning player.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// The losing player.
    pub fn loser(&self) -> Player {
        self.winner.opponent()
    }

    /// Why the game ended.
    pub fn reason(&self) -> EndReason {
        self.reason
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wins by {}", self.winner, self.reason)
    }
}
