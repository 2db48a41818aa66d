//! Strictly Gess - a type-safe rule engine for Gess.
//!
//! Gess is a Go/Chess hybrid played on an 18x18 board. A piece is any
//! 3x3 footprint holding only the mover's stones; it slides in the
//! directions its edge stones point, capturing whatever lies under its
//! destination. A player with no ring (eight stones around an empty
//! center) loses.
//!
//! # Architecture
//!
//! - **Board**: bounds-checked cell storage
//! - **Footprint**: pure 3x3 coordinate resolution
//! - **Rules**: move validation, execution and ring detection
//! - **Typestate**: `GameSetup` → `GameInProgress` → `GameFinished`
//! - **Game**: turn-by-turn facade for front ends
//!
//! # Example
//!
//! ```
//! use strictly_gess::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! let result = game.submit_move("b5".parse()?, "b6".parse()?);
//! assert!(result.is_applied());
//! assert_eq!(game.status(), GameStatus::InProgress(Player::White));
//! # Ok::<(), strictly_gess::ParseCoordError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod footprint;
mod game;
mod phases;
mod position;
mod types;
mod typestate;

pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use board::{Board, BoardParseError, OutOfBounds};
pub use position::{BOARD_SIZE, Coord, Direction, ParseCoordError};
pub use types::{Cell, Player};

// Crate-level exports - Footprints
pub use footprint::{Footprint, FootprintError};

// Crate-level exports - Actions
pub use action::{DirectionFault, DistanceFault, Move, MoveError, ValidatedMove};

// Crate-level exports - Contracts
pub use contracts::{Contract, LegalMove, MoveContract, PlayersTurn};

// Crate-level exports - Game phases
pub use game::{Game, MoveResult};
pub use phases::{EndReason, GameStatus, Outcome};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
