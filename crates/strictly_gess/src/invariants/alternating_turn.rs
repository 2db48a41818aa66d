//! Alternating turn invariant: players alternate Black, White, Black, ...

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must alternate starting with the game's first player,
/// and the player to move must be the one who did not move last.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return game.to_move() == game.first_player();
        };

        if first.player != game.first_player() {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        history
            .last()
            .is_some_and(|last| game.to_move() == last.player.opponent())
    }

    fn description() -> &'static str {
        "Players alternate turns, starting with the first player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Coord;
    use crate::types::Player;
    use crate::{GameResult, GameSetup, Move};

    #[test]
    fn test_empty_game_holds() {
        let game = GameSetup::new().start(Player::Black);
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_single_move_holds() {
        let game = GameSetup::new().start(Player::Black);
        let action = Move::new(Player::Black, Coord::new(13, 1), Coord::new(12, 1));

        match game.make_move(action) {
            Ok(GameResult::InProgress(game)) => {
                assert!(AlternatingTurnInvariant::holds(&game));
                assert_eq!(game.to_move(), Player::White);
            }
            other => panic!("Expected in-progress game, got {other:?}"),
        }
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = GameSetup::new().start(Player::Black);
        game.history
            .push(Move::new(Player::Black, Coord::new(13, 1), Coord::new(12, 1)));
        game.history
            .push(Move::new(Player::Black, Coord::new(13, 4), Coord::new(12, 4)));

        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_stale_to_move_violates() {
        let mut game = GameSetup::new().start(Player::Black);
        game.to_move = Player::White;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
