//! Ring detection.
//!
//! A ring is eight stones of one player around an empty center. A player
//! with no ring anywhere on the board has lost.

use crate::board::Board;
use crate::footprint::Footprint;
use crate::position::Coord;
use crate::types::Player;
use tracing::instrument;

/// Returns true if `center` is the empty middle of a ring owned by `player`.
pub fn is_ring_at(board: &Board, center: Coord, player: Player) -> bool {
    let Ok(footprint) = Footprint::resolve(center) else {
        return false;
    };
    board.get(center).is_empty() && footprint.ring().all(|coord| board.get(coord).is_owned_by(player))
}

/// Returns true if `player` owns at least one ring.
#[instrument(skip(board))]
pub fn has_ring(board: &Board, player: Player) -> bool {
    Coord::all()
        .filter(|&center| Footprint::is_valid_center(center))
        .any(|center| is_ring_at(board, center, player))
}

/// Returns the centers of every ring owned by `player`, in row-major order.
#[instrument(skip(board))]
pub fn ring_centers(board: &Board, player: Player) -> Vec<Coord> {
    Coord::all()
        .filter(|&center| Footprint::is_valid_center(center))
        .filter(|&center| is_ring_at(board, center, player))
        .collect()
}

/// Returns true if `player` has no ring left.
pub fn player_has_lost(board: &Board, player: Player) -> bool {
    !has_ring(board, player)
}

/// Decides the winner, if any, after `mover` completed a move.
///
/// The mover's own rings are checked first: breaking your own last ring
/// loses even if the opponent's last ring broke on the same move.
#[instrument(skip(board))]
pub fn winner_after_move(board: &Board, mover: Player) -> Option<Player> {
    if player_has_lost(board, mover) {
        Some(mover.opponent())
    } else if player_has_lost(board, mover.opponent()) {
        Some(mover)
    } else {
        None
    }
}
