//! Text rendering of the board.

use crate::config::GessConfig;
use strictly_gess::{BOARD_SIZE, Board, Cell, Player};

const COLUMN_LABELS: &str = "abcdefghijklmnopqr";

/// Renders `board` with the configured symbols, one board row per line.
///
/// With coordinates enabled, a header of column letters precedes the rows
/// and each row starts with its zero-padded row number (18 at the top).
pub fn render(board: &Board, config: &GessConfig) -> String {
    let mut out = String::new();

    if *config.show_coordinates() {
        let header: Vec<String> = COLUMN_LABELS.chars().map(String::from).collect();
        out.push_str("   ");
        out.push_str(&header.join(" "));
        out.push('\n');
    }

    let separator = if *config.show_coordinates() { " " } else { "" };
    for (coord, cell) in board.cells() {
        if coord.col == 0 && *config.show_coordinates() {
            out.push_str(&format!("{:02} ", BOARD_SIZE - coord.row));
        }
        out.push(symbol(cell, config));
        out.push_str(if coord.col + 1 == BOARD_SIZE { "\n" } else { separator });
    }

    out
}

fn symbol(cell: Cell, config: &GessConfig) -> char {
    match cell {
        Cell::Empty => *config.empty_symbol(),
        Cell::Stone(Player::Black) => *config.black_symbol(),
        Cell::Stone(Player::White) => *config.white_symbol(),
    }
}
