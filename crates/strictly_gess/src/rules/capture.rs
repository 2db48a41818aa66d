//! Move execution: lifting a footprint and stamping it down elsewhere.

use crate::action::ValidatedMove;
use crate::board::Board;
use crate::position::Coord;
use crate::types::Cell;
use tracing::{debug, instrument};

/// Applies a validated move to `board` and returns the destination cells.
///
/// The mover's stone pattern in the origin footprint is copied, translated,
/// onto the destination footprint. Every origin cell is cleared first and
/// every destination cell is overwritten, so any stone under the
/// destination that does not match the pattern is captured.
///
/// # Panics
///
/// Panics if the board no longer satisfies the move's preconditions
/// (opponent stones in the origin, or no own stones left there). That means
/// the move was validated against a different board.
#[instrument(skip(board, mv), fields(player = %mv.player(), origin = %mv.origin().center(), destination = %mv.destination().center()))]
pub fn execute(board: &mut Board, mv: &ValidatedMove) -> [Coord; 9] {
    let player = mv.player();
    let before = mv.origin().cells().map(|coord| board.get(coord));

    assert!(
        before.iter().any(|cell| cell.is_owned_by(player))
            && !before.iter().any(|cell| cell.is_owned_by(player.opponent())),
        "executed a move that was not validated against this board: {:?}",
        mv
    );

    let pattern = before.map(|cell| cell.is_owned_by(player));
    let captured = mv
        .destination()
        .cells()
        .iter()
        .filter(|&&coord| board.get(coord).is_owned_by(player.opponent()))
        .count();

    for &coord in mv.origin().cells() {
        board.set(coord, Cell::Empty);
    }
    for (&coord, own) in mv.destination().cells().iter().zip(pattern) {
        board.set(coord, if own { Cell::Stone(player) } else { Cell::Empty });
    }

    debug!(captured, "Move executed");
    *mv.destination().cells()
}
