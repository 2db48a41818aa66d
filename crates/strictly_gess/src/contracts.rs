//! Contract-based validation for Gess.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError, ValidatedMove};
use crate::invariants::{GessInvariants, InvariantSet, InvariantViolation, StoneSupplyInvariant};
use crate::rules;
use crate::typestate::GameInProgress;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Evidence produced by a satisfied precondition.
    type Approved;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Approved, MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a move declared by the player who is not to move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.player != game.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the mover is on turn and the rules allow the slide.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<ValidatedMove, MoveError> {
        PlayersTurn::check(mov, game)?;
        rules::validate(game.board(), mov.origin, mov.destination, mov.player)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Must be player's turn
/// - Footprint, direction and distance are legal on the current board
///
/// Postconditions:
/// - Players still alternate
/// - Board matches the replayed history
/// - Both players still own a ring
/// - Nobody gained stones
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    type Approved = ValidatedMove;

    fn pre(game: &GameInProgress, action: &Move) -> Result<ValidatedMove, MoveError> {
        LegalMove::check(action, game).inspect_err(|reason| {
            warn!(%action, %reason, "Move rejected");
        })
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), InvariantViolation> {
        let mut descriptions = match GessInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations.into_iter().map(|v| v.description).collect(),
        };

        if !StoneSupplyInvariant::holds(before.board(), after.board()) {
            descriptions.push(StoneSupplyInvariant::description().to_string());
        }

        if descriptions.is_empty() {
            Ok(())
        } else {
            Err(InvariantViolation::new(format!(
                "Postcondition failed: {}",
                descriptions.join("; ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Coord;
    use crate::types::{Cell, Player};
    use crate::{GameResult, GameSetup};

    #[test]
    fn test_precondition_legal_move() {
        let game = GameSetup::new().start(Player::Black);
        let action = Move::new(Player::Black, Coord::new(13, 1), Coord::new(12, 1));
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameSetup::new().start(Player::Black);
        let action = Move::new(Player::White, Coord::new(4, 1), Coord::new(5, 1));

        assert_eq!(
            MoveContract::pre(&game, &action).map(|_| ()),
            Err(MoveError::WrongPlayer(Player::White))
        );
    }

    #[test]
    fn test_precondition_rule_rejection() {
        let game = GameSetup::new().start(Player::Black);
        let action = Move::new(Player::Black, Coord::new(9, 9), Coord::new(8, 9));

        assert_eq!(
            MoveContract::pre(&game, &action).map(|_| ()),
            Err(MoveError::NoOwnedStoneInOrigin(Coord::new(9, 9)))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = GameSetup::new().start(Player::Black);
        let action = Move::new(Player::Black, Coord::new(13, 1), Coord::new(12, 1));

        match game.clone().make_move(action) {
            Ok(GameResult::InProgress(after)) => assert!(MoveContract::post(&game, &after).is_ok()),
            other => panic!("Expected in-progress game, got {other:?}"),
        }
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = GameSetup::new().start(Player::Black);
        let action = Move::new(Player::Black, Coord::new(13, 1), Coord::new(12, 1));

        match game.clone().make_move(action) {
            Ok(GameResult::InProgress(mut after)) => {
                after.board.set(Coord::new(9, 9), Cell::Stone(Player::White));
                let violation = MoveContract::post(&game, &after).expect_err("corrupted board");
                assert!(violation.description.contains("stone count"));
            }
            other => panic!("Expected in-progress game, got {other:?}"),
        }
    }
}
