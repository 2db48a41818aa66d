//! Rings present invariant: a game still in progress has rings on both sides.

use super::super::{GameInProgress, rules};
use super::Invariant;
use crate::types::Player;
use strum::IntoEnumIterator;

/// Invariant: After any move, an in-progress game has a ring for each player.
///
/// A move that leaves either side without a ring must finish the game.
/// Before the first move the board is whatever the setup provided.
pub struct RingsPresentInvariant;

impl Invariant<GameInProgress> for RingsPresentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        game.history().is_empty() || Player::iter().all(|player| rules::has_ring(game.board(), player))
    }

    fn description() -> &'static str {
        "Both players own a ring while the game is in progress"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Coord;
    use crate::types::Cell;
    use crate::{Board, GameSetup, Move};

    #[test]
    fn test_fixture_without_rings_holds_before_first_move() {
        let game = GameSetup::with_board(Board::empty()).start(Player::Black);
        assert!(RingsPresentInvariant::holds(&game));
    }

    #[test]
    fn test_broken_ring_after_move_violates() {
        let mut game = GameSetup::new().start(Player::Black);
        game.history
            .push(Move::new(Player::Black, Coord::new(13, 1), Coord::new(12, 1)));
        game.board.set(Coord::new(2, 10), Cell::Empty);
        assert!(!RingsPresentInvariant::holds(&game));
    }
}
