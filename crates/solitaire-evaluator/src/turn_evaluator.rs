//! Turn evaluation: choosing the pile for the upcoming tile.
//!
//! Every turn offers at most `N + 1` moves: one per stack that can take the
//! next tile, plus the discard pile while it has room. The [`TurnEvaluator`]
//! simulates each of them through [`MoveAnalysis`], scores the result with a
//! [`MoveEvaluator`] and keeps the best one.
//!
//! # Design: Greedy One-Step Lookahead
//!
//! Only the immediate move is considered. The second tile in the queue is
//! visible but never used for planning.
//!
//! # Usage
//!
//! ```rust
//! use solitaire_engine::{GameConfig, GameModel, TileSeed};
//! use solitaire_evaluator::{
//!     dna::Dna,
//!     turn_evaluator::{Player, TurnEvaluator},
//! };
//!
//! let dna = Dna::from_genes([1.0, -0.5, 0.5, -0.2, -1.0, -0.8, 0.0]);
//! let evaluator = TurnEvaluator::new(Box::new(dna));
//!
//! let mut game = GameModel::with_seed(&GameConfig::default(), TileSeed::from_bytes([3; 16]));
//! if let Some(pile) = evaluator.select_move(&game) {
//!     game.try_make_move(pile).unwrap();
//! }
//! ```

use std::fmt;

use solitaire_engine::{GameModel, PileId};

use crate::{move_analysis::MoveAnalysis, move_evaluator::MoveEvaluator};

/// Anything that can decide where the next tile goes.
pub trait Player: fmt::Debug + Send + Sync {
    /// Returns the pile to play the next tile on, or `None` to stop playing.
    ///
    /// A returned pile is expected to be legal for `game`.
    fn select_move(&self, game: &GameModel) -> Option<PileId>;
}

impl<P> Player for &P
where
    P: Player + ?Sized,
{
    fn select_move(&self, game: &GameModel) -> Option<PileId> {
        (**self).select_move(game)
    }
}

/// Selects the best-scoring legal move for the current turn.
#[derive(Debug)]
pub struct TurnEvaluator<'a> {
    move_evaluator: Box<dyn MoveEvaluator + 'a>,
}

impl<'a> TurnEvaluator<'a> {
    #[must_use]
    pub fn new(move_evaluator: Box<dyn MoveEvaluator + 'a>) -> Self {
        Self { move_evaluator }
    }

    /// Evaluates every legal move and returns the best one with its analysis.
    ///
    /// Candidates are stacks in ascending identifier order followed by the
    /// discard pile. On equal scores the earlier candidate wins.
    ///
    /// Returns `None` if no pile can take the next tile.
    #[must_use]
    pub fn select_best_move(&self, game: &GameModel) -> Option<(PileId, MoveAnalysis)> {
        let mut best: Option<(f32, MoveAnalysis)> = None;

        for pile in game.legal_moves() {
            let analysis = MoveAnalysis::from_game(game, pile);
            let score = self.move_evaluator.evaluate_move(&analysis);
            if best.as_ref().is_none_or(|(best_score, _)| score > *best_score) {
                best = Some((score, analysis));
            }
        }

        best.map(|(_score, analysis)| (analysis.target(), analysis))
    }
}

impl Player for TurnEvaluator<'_> {
    fn select_move(&self, game: &GameModel) -> Option<PileId> {
        self.select_best_move(game).map(|(pile, _analysis)| pile)
    }
}
