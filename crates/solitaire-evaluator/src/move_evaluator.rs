//! Move evaluation: scoring a single hypothetical move.
//!
//! A [`MoveEvaluator`] turns a [`MoveAnalysis`] into a score, where a higher
//! score marks a more attractive move. The only learned implementation is
//! [`Dna`](crate::dna::Dna), a linear combination of move features.

use std::fmt;

use crate::move_analysis::MoveAnalysis;

/// Scores hypothetical moves.
pub trait MoveEvaluator: fmt::Debug + Send + Sync {
    /// Evaluates a move and returns a score (higher is better).
    ///
    /// The score is unbounded; only its order among the candidate moves of one
    /// turn matters.
    fn evaluate_move(&self, analysis: &MoveAnalysis) -> f32;
}

impl<E> MoveEvaluator for &E
where
    E: MoveEvaluator + ?Sized,
{
    fn evaluate_move(&self, analysis: &MoveAnalysis) -> f32 {
        (**self).evaluate_move(analysis)
    }
}
