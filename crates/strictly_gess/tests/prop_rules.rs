//! Property-based tests for the move rules.

#![allow(missing_docs)]

use proptest::prelude::*;

use strictly_gess::rules::{execute, validate};
use strictly_gess::{
    BOARD_SIZE, Board, Cell, Coord, Direction, DistanceFault, Footprint, FootprintError,
    MoveError, Player,
};

const DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::Black), Just(Player::White)]
}

fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        6 => Just(Cell::Empty),
        2 => Just(Cell::Stone(Player::Black)),
        2 => Just(Cell::Stone(Player::White)),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    prop::collection::vec(cell(), BOARD_SIZE * BOARD_SIZE).prop_map(|cells| {
        let mut board = Board::empty();
        for (index, cell) in cells.into_iter().enumerate() {
            board.set(Coord::new(index / BOARD_SIZE, index % BOARD_SIZE), cell);
        }
        board
    })
}

fn valid_center() -> impl Strategy<Value = Coord> {
    (1..BOARD_SIZE - 1, 1..BOARD_SIZE - 1).prop_map(|(row, col)| Coord::new(row, col))
}

fn edge_center() -> impl Strategy<Value = Coord> {
    (
        prop::sample::select(vec![0, BOARD_SIZE - 1]),
        0..BOARD_SIZE,
        any::<bool>(),
    )
        .prop_map(|(edge, other, swap)| {
            if swap {
                Coord::new(other, edge)
            } else {
                Coord::new(edge, other)
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Centers on the outer ring never resolve.
    #[test]
    fn prop_edge_center_invalid(center in edge_center()) {
        prop_assert_eq!(Footprint::resolve(center), Err(FootprintError::InvalidCenter(center)));
    }

    /// Interior centers always resolve to nine distinct on-board cells.
    #[test]
    fn prop_interior_center_resolves(center in valid_center()) {
        let footprint = Footprint::resolve(center).unwrap();
        let mut cells = footprint.cells().to_vec();
        cells.sort();
        cells.dedup();
        prop_assert_eq!(cells.len(), 9);
        prop_assert!(cells.iter().all(|coord| coord.is_on_board()));
    }

    /// Zero displacement is reported before anything else.
    #[test]
    fn prop_zero_displacement(
        board in board(),
        row in 0..BOARD_SIZE + 2,
        col in 0..BOARD_SIZE + 2,
        mover in player(),
    ) {
        let center = Coord::new(row, col);
        prop_assert_eq!(validate(&board, center, center, mover), Err(MoveError::CenterUnmoved));
    }

    /// An opponent stone anywhere in the origin footprint always rejects the move.
    #[test]
    fn prop_opponent_in_origin(
        board in board(),
        origin in valid_center(),
        destination in valid_center(),
        slot in 0usize..9,
        mover in player(),
    ) {
        prop_assume!(origin != destination);

        let mut board = board;
        let footprint = Footprint::resolve(origin).unwrap();
        board.set(footprint.cells()[slot], Cell::Stone(mover.opponent()));

        prop_assert_eq!(
            validate(&board, origin, destination, mover),
            Err(MoveError::ContainsOpponentStone(origin))
        );
    }

    /// A piece with an empty center never travels two squares.
    #[test]
    fn prop_empty_center_single_step(
        origin_row in 3..BOARD_SIZE - 3,
        origin_col in 3..BOARD_SIZE - 3,
        direction in prop::sample::select(DIRECTIONS.to_vec()),
        pattern in prop::collection::vec(any::<bool>(), 9),
        mover in player(),
    ) {
        let origin = Coord::new(origin_row, origin_col);
        let footprint = Footprint::resolve(origin).unwrap();
        let (d_row, d_col) = direction.delta();
        let destination = origin.offset(2 * d_row, 2 * d_col).unwrap();

        let mut board = Board::empty();
        for (&coord, &filled) in footprint.cells().iter().zip(&pattern) {
            if filled {
                board.set(coord, Cell::Stone(mover));
            }
        }
        board.set(footprint.center(), Cell::Empty);
        board.set(footprint.toward(direction), Cell::Stone(mover));

        prop_assert_eq!(
            validate(&board, origin, destination, mover),
            Err(MoveError::BadDistance(DistanceFault::EmptyCenter(2)))
        );
    }

    /// Every accepted move leaves the origin's own-stone pattern at the
    /// destination and empties the rest of the origin.
    #[test]
    fn prop_execute_moves_pattern(
        board in board(),
        origin in valid_center(),
        mover in player(),
    ) {
        let origin_fp = Footprint::resolve(origin).unwrap();
        let pattern = origin_fp.cells().map(|coord| board.get(coord));

        for row in 1..BOARD_SIZE - 1 {
            for col in 1..BOARD_SIZE - 1 {
                let destination = Coord::new(row, col);
                let Ok(validated) = validate(&board, origin, destination, mover) else {
                    continue;
                };

                let mut after = board.clone();
                let touched = execute(&mut after, &validated);
                let destination_fp = Footprint::resolve(destination).unwrap();
                prop_assert_eq!(&touched, destination_fp.cells());

                for (&coord, &cell) in destination_fp.cells().iter().zip(&pattern) {
                    prop_assert_eq!(after.get(coord), cell);
                }
                for &coord in origin_fp.cells() {
                    if !destination_fp.cells().contains(&coord) {
                        prop_assert_eq!(after.get(coord), Cell::Empty);
                    }
                }

                prop_assert!(after.count_stones(mover.opponent()) <= board.count_stones(mover.opponent()));
                prop_assert!(after.count_stones(mover) <= board.count_stones(mover));
            }
        }
    }
}
