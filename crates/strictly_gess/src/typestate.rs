//! Phase-specific typestate structs for Gess.
//!
//! Each phase is its own type with phase-specific fields. A
//! `GameFinished` always has an outcome, and only a `GameInProgress`
//! accepts moves.

use crate::action::{Move, MoveError};
use crate::board::Board;
use crate::contracts::{Contract, MoveContract};
use crate::phases::{EndReason, Outcome};
use crate::rules;
use crate::types::Player;
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - board laid out, no moves yet.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a setup with the standard starting layout.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
        }
    }

    /// Creates a setup from an arbitrary board.
    #[instrument(skip(board))]
    pub fn with_board(board: Board) -> Self {
        Self { board }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game with the first player (consumes setup, returns in-progress).
    #[instrument(skip(self))]
    pub fn start(self, first_player: Player) -> GameInProgress {
        GameInProgress {
            initial_board: self.board.clone(),
            board: self.board,
            history: Vec::new(),
            first_player,
            to_move: first_player,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) initial_board: Board,
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) first_player: Player,
    pub(crate) to_move: Player,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// Returns either a new `InProgress` or a `Finished` state.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] rejection if the move is illegal. Nothing
    /// about the game changes in that case; callers that need to keep
    /// playing should hold on to a clone.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the resulting game breaks an invariant.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        let validated = MoveContract::pre(&self, &action)?;

        let mut game = self;
        rules::execute(&mut game.board, &validated);
        game.history.push(action);
        debug!(%action, "Move applied");

        if let Some(winner) = rules::winner_after_move(&game.board, action.player) {
            info!(%winner, "Game over");
            return Ok(GameResult::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome: Outcome::new(winner, EndReason::RingsLost),
            }));
        }

        game.to_move = game.to_move.opponent();

        #[cfg(debug_assertions)]
        {
            if let Err(violation) = MoveContract::post(&before, &game) {
                panic!("{violation}");
            }
        }

        Ok(GameResult::InProgress(game))
    }

    /// The player to move resigns, ending the game.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn resign(self) -> GameFinished {
        let outcome = Outcome::new(self.to_move.opponent(), EndReason::Resignation);
        info!(%outcome, "Player resigned");
        GameFinished {
            board: self.board,
            history: self.history,
            outcome,
        }
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the player who moved first.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board the game started from.
    pub fn initial_board(&self) -> &Board {
        &self.initial_board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Replays moves on the standard board, Black first.
    ///
    /// # Errors
    ///
    /// Returns the first rejection, or [`MoveError::GameOver`] if moves
    /// remain after the game finished.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new().start(Player::Black);

        for (index, action) in moves.iter().enumerate() {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) if index + 1 == moves.len() => {
                    return Ok(GameResult::Finished(g));
                }
                GameResult::Finished(_) => return Err(MoveError::GameOver),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the winner.
    pub fn winner(&self) -> Player {
        self.outcome.winner()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts the game (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}
