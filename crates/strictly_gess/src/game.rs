//! Turn-by-turn game facade over the typestate phases.
//!
//! `Game` owns exactly one phase at a time and serializes every request:
//! a move is validated, executed and scanned for rings before the call
//! returns. Rejected moves leave the game untouched.

use crate::action::{Move, MoveError};
use crate::board::Board;
use crate::phases::{GameStatus, Outcome};
use crate::position::Coord;
use crate::types::Player;
use crate::typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
use tracing::{debug, instrument};

/// Result of submitting a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    /// The move was applied.
    Applied {
        /// Board after the move.
        board: Board,
        /// Game status after the move.
        status: GameStatus,
    },
    /// The move was refused; nothing changed.
    Rejected(MoveError),
}

impl MoveResult {
    /// Returns true if the move was applied.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveResult::Applied { .. })
    }
}

#[derive(Debug, Clone)]
enum Phase {
    InProgress(GameInProgress),
    Finished(GameFinished),
}

/// A single Gess game.
#[derive(Debug, Clone)]
pub struct Game {
    phase: Phase,
}

impl Game {
    /// Starts a game on the standard board with Black to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_board(Board::standard(), Player::Black)
    }

    /// Starts a game from an arbitrary board and first player.
    #[instrument(skip(board))]
    pub fn with_board(board: Board, first_player: Player) -> Self {
        Self {
            phase: Phase::InProgress(GameSetup::with_board(board).start(first_player)),
        }
    }

    /// Submits a move for the player whose turn it is.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, origin: Coord, destination: Coord) -> MoveResult {
        let game = match &self.phase {
            Phase::InProgress(game) => game,
            Phase::Finished(_) => return MoveResult::Rejected(MoveError::GameOver),
        };

        let action = Move::new(game.to_move(), origin, destination);
        match game.clone().make_move(action) {
            Ok(GameResult::InProgress(next)) => {
                self.phase = Phase::InProgress(next);
            }
            Ok(GameResult::Finished(done)) => {
                self.phase = Phase::Finished(done);
            }
            Err(reason) => return MoveResult::Rejected(reason),
        }

        debug!(status = %self.status(), "Move accepted");
        MoveResult::Applied {
            board: self.board().clone(),
            status: self.status(),
        }
    }

    /// The player to move resigns. Rejected with `GameOver` once finished.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has already ended.
    #[instrument(skip(self))]
    pub fn resign(&mut self) -> Result<Outcome, MoveError> {
        let Phase::InProgress(game) = &self.phase else {
            return Err(MoveError::GameOver);
        };

        let finished = game.clone().resign();
        let outcome = *finished.outcome();
        self.phase = Phase::Finished(finished);
        Ok(outcome)
    }

    /// Read-only view of the current board.
    pub fn board(&self) -> &Board {
        match &self.phase {
            Phase::InProgress(game) => game.board(),
            Phase::Finished(game) => game.board(),
        }
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        match &self.phase {
            Phase::InProgress(game) => GameStatus::InProgress(game.to_move()),
            Phase::Finished(game) => GameStatus::Won(game.winner()),
        }
    }

    /// The outcome, once the game has finished.
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.phase {
            Phase::InProgress(_) => None,
            Phase::Finished(game) => Some(game.outcome()),
        }
    }

    /// Moves applied so far.
    pub fn history(&self) -> &[Move] {
        match &self.phase {
            Phase::InProgress(game) => game.history(),
            Phase::Finished(game) => game.history(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phases::EndReason;

    #[test]
    fn test_new_game_black_to_move() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::InProgress(Player::Black));
        assert!(game.history().is_empty());
        assert!(game.outcome().is_none());
    }

    #[test]
    fn test_rejection_leaves_game_untouched() {
        let mut game = Game::new();
        let before = game.board().clone();

        let result = game.submit_move(Coord::new(9, 9), Coord::new(9, 9));
        assert_eq!(result, MoveResult::Rejected(MoveError::CenterUnmoved));
        assert_eq!(game.board(), &before);
        assert_eq!(game.status(), GameStatus::InProgress(Player::Black));
    }

    #[test]
    fn test_resign_then_game_over() {
        let mut game = Game::new();
        let outcome = game.resign().expect("game in progress");
        assert_eq!(outcome.winner(), Player::White);
        assert_eq!(outcome.reason(), EndReason::Resignation);
        assert_eq!(game.status(), GameStatus::Won(Player::White));
        assert_eq!(game.resign(), Err(MoveError::GameOver));
    }
}
