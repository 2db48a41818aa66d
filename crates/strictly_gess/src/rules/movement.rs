//! Move validation.
//!
//! Validation is a pure function of the board snapshot and the declared
//! centers. It never mutates the board.

use crate::action::{DirectionFault, DistanceFault, MoveError, ValidatedMove};
use crate::board::Board;
use crate::footprint::Footprint;
use crate::position::{Coord, Direction};
use crate::types::{Cell, Player};
use tracing::{debug, instrument};

/// Checks whether `player` may slide the footprint at `origin` to `destination`.
///
/// Checks run in a fixed order: zero displacement, footprint bounds,
/// ownership, ray shape, grip stone, then distance.
///
/// # Errors
///
/// Returns the first [`MoveError`] rejection encountered.
#[instrument(skip(board))]
pub fn validate(
    board: &Board,
    origin: Coord,
    destination: Coord,
    player: Player,
) -> Result<ValidatedMove, MoveError> {
    if origin == destination {
        return Err(MoveError::CenterUnmoved);
    }

    let origin_fp =
        Footprint::resolve(origin).map_err(|_| MoveError::OriginOutOfBounds(origin))?;
    let destination_fp = Footprint::resolve(destination)
        .map_err(|_| MoveError::DestinationOutOfBounds(destination))?;

    check_ownership(board, &origin_fp, player)?;
    let (direction, distance) = ray_between(origin, destination)?;
    check_grip(board, &origin_fp, direction, player)?;
    check_distance(board, &origin_fp, direction, distance, player)?;

    debug!(?direction, distance, "Move validated");
    Ok(ValidatedMove::new(
        player,
        origin_fp,
        destination_fp,
        direction,
        distance,
    ))
}

/// The footprint must hold no opponent stones and at least one own stone.
fn check_ownership(board: &Board, footprint: &Footprint, player: Player) -> Result<(), MoveError> {
    let cells = footprint.cells().map(|coord| board.get(coord));

    if cells.iter().any(|cell| cell.is_owned_by(player.opponent())) {
        return Err(MoveError::ContainsOpponentStone(footprint.center()));
    }
    if !cells.iter().any(|cell| cell.is_owned_by(player)) {
        return Err(MoveError::NoOwnedStoneInOrigin(footprint.center()));
    }
    Ok(())
}

/// Reduces a displacement to one of the eight rays and a distance.
fn ray_between(origin: Coord, destination: Coord) -> Result<(Direction, usize), MoveError> {
    let (d_row, d_col) = origin.displacement_to(destination);
    if d_row == 0 && d_col == 0 {
        return Err(MoveError::CenterUnmoved);
    }
    if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
        return Err(MoveError::BadDirection(DirectionFault::NotARay));
    }

    let direction = Direction::from_delta(d_row.signum(), d_col.signum())
        .ok_or(MoveError::BadDirection(DirectionFault::NotARay))?;
    let distance = d_row.unsigned_abs().max(d_col.unsigned_abs());
    Ok((direction, distance))
}

/// A footprint may only travel towards a side holding one of its own stones.
fn check_grip(
    board: &Board,
    footprint: &Footprint,
    direction: Direction,
    player: Player,
) -> Result<(), MoveError> {
    if board.get(footprint.toward(direction)).is_owned_by(player) {
        Ok(())
    } else {
        Err(MoveError::BadDirection(DirectionFault::NoGrip(direction)))
    }
}

/// Empty-centered footprints step once; stone-centered ones slide until blocked.
fn check_distance(
    board: &Board,
    footprint: &Footprint,
    direction: Direction,
    distance: usize,
    player: Player,
) -> Result<(), MoveError> {
    match board.get(footprint.center()) {
        Cell::Empty => {
            if distance == 1 {
                Ok(())
            } else {
                Err(MoveError::BadDistance(DistanceFault::EmptyCenter(distance)))
            }
        }
        Cell::Stone(owner) if owner == player => check_path(board, footprint, direction, distance),
        Cell::Stone(_) => Err(MoveError::ContainsOpponentStone(footprint.center())),
    }
}

/// Walks every intermediate position; any stone on the leading edge stops the slide.
fn check_path(
    board: &Board,
    footprint: &Footprint,
    direction: Direction,
    distance: usize,
) -> Result<(), MoveError> {
    for step in 1..distance {
        let position = footprint
            .shifted(direction, step)
            .map_err(|_| MoveError::BadDistance(DistanceFault::OffBoard))?;

        if let Some(blocker) = position
            .leading_edge(direction)
            .find(|&coord| !board.get(coord).is_empty())
        {
            debug!(step, %blocker, "Path obstructed");
            return Err(MoveError::BadDistance(DistanceFault::Obstructed(blocker)));
        }
    }
    Ok(())
}
