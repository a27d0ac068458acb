//! Session evaluation: playing whole games to measure a policy.
//!
//! A session starts from a fresh or prepared [`GameModel`] and asks a
//! [`Player`] for moves until the game ends. The final score of the session is
//! the fitness used by the genetic trainer.
//!
//! A session ends when
//!
//! - the game is over (every stack and the discard pile are full),
//! - the player has no move to offer,
//! - the optional move limit is reached, or
//! - the player picks a pile the rules reject.
//!
//! # Usage
//!
//! ```rust
//! use solitaire_engine::{GameConfig, TileSeed};
//! use solitaire_evaluator::{basic_bot::BasicBot, session_evaluator::SessionEvaluator};
//!
//! let evaluator = SessionEvaluator::new(Some(500));
//! let seed = TileSeed::from_bytes([2; 16]);
//! let fitness = evaluator.evaluate(&GameConfig::default(), seed, &BasicBot::new());
//! println!("fitness: {fitness}");
//! ```

use solitaire_engine::{GameConfig, GameModel, GameStats, InvalidMoveError, MoveOutcome, TileSeed};

use crate::turn_evaluator::Player;

/// Why a session stopped.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionEnd {
    GameOver,
    /// The player returned no move while the game was still running.
    NoMove,
    MoveLimit,
    /// The player chose a pile that cannot take the next tile.
    Rejected(InvalidMoveError),
}

#[derive(Debug, Clone)]
pub struct SessionOutcome {
    stats: GameStats,
    end: SessionEnd,
}

impl SessionOutcome {
    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn end(&self) -> &SessionEnd {
        &self.end
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.stats.score()
    }
}

/// Plays complete game sessions, optionally capped at a number of moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionEvaluator {
    move_limit: Option<usize>,
}

impl SessionEvaluator {
    #[must_use]
    pub const fn new(move_limit: Option<usize>) -> Self {
        Self { move_limit }
    }

    #[must_use]
    pub const fn move_limit(&self) -> Option<usize> {
        self.move_limit
    }

    /// Plays `game` to the end with `player`.
    ///
    /// `observer` is called after every applied move with the updated game.
    pub fn play_session<F>(
        &self,
        game: &mut GameModel,
        player: &dyn Player,
        mut observer: F,
    ) -> SessionOutcome
    where
        F: FnMut(&GameModel, &MoveOutcome),
    {
        let mut moves = 0;
        let end = loop {
            if game.game_over() {
                break SessionEnd::GameOver;
            }
            if self.move_limit.is_some_and(|limit| moves >= limit) {
                break SessionEnd::MoveLimit;
            }
            let Some(pile) = player.select_move(game) else {
                break SessionEnd::NoMove;
            };
            match game.try_make_move(pile) {
                Ok(outcome) => observer(game, &outcome),
                Err(err) => break SessionEnd::Rejected(err),
            }
            moves += 1;
        };

        SessionOutcome {
            stats: game.stats().clone(),
            end,
        }
    }

    /// Plays a fresh game seeded with `seed` and returns its final score.
    #[must_use]
    pub fn evaluate(&self, config: &GameConfig, seed: TileSeed, player: &dyn Player) -> usize {
        let mut game = GameModel::with_seed(config, seed);
        self.play_session(&mut game, player, |_, _| {}).score()
    }
}

#[cfg(test)]
mod tests {
    use solitaire_engine::{PileId, TileSeed};

    use super::*;
    use crate::{basic_bot::BasicBot, dna::Dna, turn_evaluator::TurnEvaluator};

    #[derive(Debug)]
    struct FixedPlayer(Option<PileId>);

    impl Player for FixedPlayer {
        fn select_move(&self, _game: &GameModel) -> Option<PileId> {
            self.0
        }
    }

    fn new_game(seed: u8) -> GameModel {
        GameModel::with_seed(&GameConfig::default(), TileSeed::from_bytes([seed; 16]))
    }

    #[test]
    fn test_plays_until_game_over() {
        let mut game = new_game(1);
        let dna = Dna::from_genes([0.9, -0.3, 0.4, -0.6, -0.8, -0.5, 0.1]);
        let player = TurnEvaluator::new(Box::new(dna));
        let mut observed = 0;
        let outcome = SessionEvaluator::new(None).play_session(&mut game, &player, |_, _| {
            observed += 1;
        });

        assert_eq!(outcome.end(), &SessionEnd::GameOver);
        assert!(game.game_over());
        assert_eq!(outcome.stats().moves(), observed);
        assert_eq!(outcome.score(), game.score());
    }

    #[test]
    fn test_move_limit() {
        let mut game = new_game(2);
        let outcome =
            SessionEvaluator::new(Some(5)).play_session(&mut game, &BasicBot::new(), |_, _| {});
        assert!(outcome.end().is_move_limit());
        assert_eq!(outcome.stats().moves(), 5);
    }

    #[test]
    fn test_no_move_stops_session() {
        let mut game = new_game(3);
        let outcome =
            SessionEvaluator::new(None).play_session(&mut game, &FixedPlayer(None), |_, _| {});
        assert!(outcome.end().is_no_move());
        assert_eq!(outcome.stats().moves(), 0);
    }

    #[test]
    fn test_rejected_move_stops_session() {
        let mut game = new_game(4);
        // The discard pile (id 4) fills after two moves.
        let outcome = SessionEvaluator::new(None).play_session(
            &mut game,
            &FixedPlayer(Some(PileId::new(4))),
            |_, _| {},
        );
        assert_eq!(outcome.end(), &SessionEnd::Rejected(InvalidMoveError::DiscardPileFull));
        assert_eq!(outcome.stats().moves(), 2);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let evaluator = SessionEvaluator::new(None);
        let config = GameConfig::default();
        let seed = TileSeed::from_bytes([42; 16]);
        let dna = Dna::from_genes([1.0, -0.2, 0.3, -0.4, -1.0, -0.7, 0.0]);
        let player = TurnEvaluator::new(Box::new(dna));

        let a = evaluator.evaluate(&config, seed, &player);
        let b = evaluator.evaluate(&config, seed, &player);
        assert_eq!(a, b);
    }
}
