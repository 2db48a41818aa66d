//! History consistency invariant: replaying the history reproduces the board.

use super::super::{GameInProgress, rules};
use super::Invariant;

/// Invariant: The board is exactly the initial board with the history applied.
///
/// Every recorded move must still validate when replayed in order, and
/// the replayed board must match the current board. No stone appears or
/// vanishes outside a recorded move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameInProgress> for HistoryConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mut reconstructed = game.initial_board().clone();

        for mov in game.history() {
            match rules::validate(&reconstructed, mov.origin, mov.destination, mov.player) {
                Ok(validated) => {
                    rules::execute(&mut reconstructed, &validated);
                }
                Err(_) => return false,
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board matches the initial board with the move history replayed"
    }
}
