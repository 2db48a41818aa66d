//! Game rules for Gess.
//!
//! Pure functions over a [`Board`](crate::Board): move validation, move
//! execution and ring detection. Rules are separated from game state so
//! the typestate layer and contracts can compose them.

pub mod capture;
pub mod movement;
pub mod ring;

pub use capture::execute;
pub use movement::validate;
pub use ring::{has_ring, is_ring_at, player_has_lost, ring_centers, winner_after_move};
