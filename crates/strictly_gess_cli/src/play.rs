//! Interactive two-player session over a line-based prompt.

use crate::config::GessConfig;
use crate::render::render;
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_gess::{Coord, Game, GameStatus, MoveResult, Outcome, ParseCoordError};
use tracing::{debug, info, instrument};

const HELP: &str = "Commands:
  v              view the board
  m <from> <to>  move the piece centered at <from> to <to>, e.g. m b5 b6
  q              resign
  h              show this help";

/// A command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Print the board.
    View,
    /// Move a piece.
    Move {
        /// Center of the piece.
        from: Coord,
        /// Center to move it to.
        to: Coord,
    },
    /// Resign after confirmation.
    Resign,
    /// Print the command list.
    Help,
}

/// Why a prompt line was not understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ActionParseError {
    /// Blank line.
    #[display("Enter a command, or h for help")]
    Empty,
    /// Unrecognized command word.
    #[display("Unknown command '{}', h for help", _0)]
    Unknown(String),
    /// `m` without exactly two coordinates.
    #[display("Usage: m <from> <to>, e.g. m b5 b6")]
    MoveArguments,
    /// A coordinate failed to parse.
    #[display("Bad coordinate: {}", _0)]
    BadCoordinate(ParseCoordError),
}

impl std::error::Error for ActionParseError {}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Err(ActionParseError::Empty);
        };

        match command {
            "v" => Ok(Action::View),
            "q" => Ok(Action::Resign),
            "h" | "?" => Ok(Action::Help),
            "m" => {
                let (Some(from), Some(to), None) = (words.next(), words.next(), words.next()) else {
                    return Err(ActionParseError::MoveArguments);
                };
                let from = from.parse().map_err(ActionParseError::BadCoordinate)?;
                let to = to.parse().map_err(ActionParseError::BadCoordinate)?;
                Ok(Action::Move { from, to })
            }
            other => Err(ActionParseError::Unknown(other.to_string())),
        }
    }
}

/// Runs `game` against the prompt until it ends or input runs out.
///
/// Returns the outcome if the game finished.
///
/// # Errors
///
/// Fails only on I/O errors.
#[instrument(skip_all)]
pub fn run<R, W>(
    game: &mut Game,
    input: R,
    output: &mut W,
    config: &GessConfig,
) -> anyhow::Result<Option<Outcome>>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    writeln!(output, "Welcome to Gess! Black moves first.")?;
    write!(output, "{}", render(game.board(), config))?;

    while let GameStatus::InProgress(player) = game.status() {
        write!(output, "{player} to move (h for help)> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            debug!("Input closed");
            break;
        };

        match line?.parse::<Action>() {
            Ok(Action::View) => write!(output, "{}", render(game.board(), config))?,
            Ok(Action::Move { from, to }) => match game.submit_move(from, to) {
                MoveResult::Applied { board, .. } => write!(output, "{}", render(&board, config))?,
                MoveResult::Rejected(reason) => writeln!(output, "Illegal move: {reason}")?,
            },
            Ok(Action::Resign) => {
                write!(output, "{player}, resign the game? Enter y to confirm> ")?;
                output.flush()?;
                let confirmed = match lines.next() {
                    Some(answer) => answer?.trim() == "y",
                    None => false,
                };
                if confirmed {
                    game.resign()?;
                }
            }
            Ok(Action::Help) => writeln!(output, "{HELP}")?,
            Err(e) => writeln!(output, "{e}")?,
        }
    }

    let outcome = game.outcome().copied();
    if let Some(outcome) = outcome {
        info!(%outcome, "Session finished");
        writeln!(output, "Game over: {outcome}")?;
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use strictly_gess::{EndReason, Player};

    fn session(script: &str) -> (Option<Outcome>, String) {
        let mut game = Game::new();
        let mut output = Vec::new();
        let outcome = run(&mut game, Cursor::new(script), &mut output, &GessConfig::default())
            .expect("in-memory I/O");
        (outcome, String::from_utf8(output).expect("utf-8 output"))
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!("v".parse::<Action>(), Ok(Action::View));
        assert_eq!(" q ".parse::<Action>(), Ok(Action::Resign));
        assert_eq!(
            "m b5 b6".parse::<Action>(),
            Ok(Action::Move {
                from: Coord::new(13, 1),
                to: Coord::new(12, 1),
            })
        );
        assert_eq!("".parse::<Action>(), Err(ActionParseError::Empty));
        assert_eq!("m b5".parse::<Action>(), Err(ActionParseError::MoveArguments));
        assert_eq!("m b5 b6 b7".parse::<Action>(), Err(ActionParseError::MoveArguments));
        assert_eq!(
            "jump".parse::<Action>(),
            Err(ActionParseError::Unknown("jump".to_string()))
        );
        assert!(matches!(
            "m z1 b6".parse::<Action>(),
            Err(ActionParseError::BadCoordinate(_))
        ));
    }

    #[test]
    fn test_move_then_resign() {
        let (outcome, text) = session("m b5 b6\nq\ny\n");
        let outcome = outcome.expect("game finished");
        assert_eq!(outcome.winner(), Player::Black);
        assert_eq!(outcome.reason(), EndReason::Resignation);
        assert!(text.contains("White to move"));
        assert!(text.ends_with("Game over: Black wins by resignation\n"));
    }

    #[test]
    fn test_illegal_move_reported() {
        let (outcome, text) = session("m j9 j10\n");
        assert!(outcome.is_none());
        assert!(text.contains("Illegal move: None of your stones"));
        assert!(!text.contains("White to move"));
    }

    #[test]
    fn test_declined_resignation_keeps_playing() {
        let (outcome, text) = session("q\nn\nv\n");
        assert!(outcome.is_none());
        assert_eq!(text.matches("Black to move").count(), 3);
    }

    #[test]
    fn test_unknown_command_shows_hint() {
        let (_, text) = session("x\n");
        assert!(text.contains("Unknown command 'x'"));
    }
}
