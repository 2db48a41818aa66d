//! Stone supply invariant: a move never creates stones.

use crate::board::Board;
use crate::types::Player;
use strum::IntoEnumIterator;

/// Transition invariant: No player's stone count grows across a move.
///
/// The mover's pattern is copied, never extended, and captures only
/// remove stones. This compares the boards before and after one move.
pub struct StoneSupplyInvariant;

impl StoneSupplyInvariant {
    /// Checks that no player gained stones between `before` and `after`.
    pub fn holds(before: &Board, after: &Board) -> bool {
        Player::iter().all(|player| after.count_stones(player) <= before.count_stones(player))
    }

    /// Human-readable description of the invariant.
    pub fn description() -> &'static str {
        "No player's stone count grows across a move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Coord;
    use crate::types::Cell;

    #[test]
    fn test_identical_boards_hold() {
        let board = Board::standard();
        assert!(StoneSupplyInvariant::holds(&board, &board));
    }

    #[test]
    fn test_new_stone_violates() {
        let before = Board::standard();
        let mut after = before.clone();
        after.set(Coord::new(9, 9), Cell::Stone(Player::Black));
        assert!(!StoneSupplyInvariant::holds(&before, &after));
    }
}
