//! Analysis of the game state after a hypothetical move.
//!
//! [`MoveAnalysis`] plays one move on a private copy of the game and records the
//! features of the resulting position. The real game is never touched, so a
//! policy can compare every candidate pile before committing to one.
//!
//! ```rust
//! use solitaire_engine::{GameConfig, GameModel, PileId, TileSeed};
//! use solitaire_evaluator::move_analysis::MoveAnalysis;
//!
//! let game = GameModel::with_seed(&GameConfig::default(), TileSeed::from_bytes([1; 16]));
//! let analysis = MoveAnalysis::from_game(&game, PileId::new(0));
//!
//! assert_eq!(analysis.num_tiles(), 1);
//! assert_eq!(game.stacks()[0].tiles().len(), 0);
//! ```

use solitaire_engine::{GameModel, MoveOutcome, Pile, PileId, Stack};

#[derive(Debug, Clone, PartialEq)]
pub struct MoveAnalysis {
    target: PileId,
    num_merges: usize,
    num_discontinuities: usize,
    num_tiles: usize,
    score_change: usize,
    largest_height: usize,
    lowest_height: usize,
    average_height: f32,
    num_discards: usize,
    fill_ratio: f32,
}

impl MoveAnalysis {
    /// Simulates placing the next tile on `target` and analyzes the result.
    ///
    /// Legality is not checked; callers only offer legal targets.
    ///
    /// # Panics
    ///
    /// Panics if `target` does not name a pile of `game`.
    #[must_use]
    pub fn from_game(game: &GameModel, target: PileId) -> Self {
        let mut after = game.clone();
        let original_height = game.stacks().get(target.index()).map_or(0, Stack::len);

        let num_merges = match after.make_move(target) {
            MoveOutcome::Stack { merge, .. } if merge.breakthrough() => original_height,
            MoveOutcome::Stack { .. } => {
                let new_height = after.stacks()[target.index()].len();
                original_height + 1 - new_height
            }
            MoveOutcome::Discard { .. } => 0,
        };

        let stacks = after.stacks();
        let num_tiles = stacks.iter().map(Stack::len).sum::<usize>();
        let num_discards = after.discard_pile().num_discards();
        let total_capacity =
            stacks.iter().map(Stack::capacity).sum::<usize>() + after.discard_pile().max_discards();

        Self {
            target,
            num_merges,
            num_discontinuities: stacks.iter().map(Stack::num_discontinuities).sum(),
            num_tiles,
            score_change: after.score() - game.score(),
            largest_height: stacks.iter().map(Stack::len).max().unwrap_or(0),
            lowest_height: lowest_height(stacks),
            average_height: ratio(num_tiles, stacks.len()),
            num_discards,
            fill_ratio: ratio(num_tiles + num_discards, total_capacity),
        }
    }

    /// The pile the move was played on.
    #[must_use]
    pub fn target(&self) -> PileId {
        self.target
    }

    /// Merges caused by the move. A breakthrough counts every tile that was in the stack.
    #[must_use]
    pub fn num_merges(&self) -> usize {
        self.num_merges
    }

    /// Adjacent pairs across all stacks where a lower tile sits beneath a higher one.
    #[must_use]
    pub fn num_discontinuities(&self) -> usize {
        self.num_discontinuities
    }

    /// Tiles on all stacks.
    #[must_use]
    pub fn num_tiles(&self) -> usize {
        self.num_tiles
    }

    #[must_use]
    pub fn score_change(&self) -> usize {
        self.score_change
    }

    #[must_use]
    pub fn largest_height(&self) -> usize {
        self.largest_height
    }

    #[must_use]
    pub fn lowest_height(&self) -> usize {
        self.lowest_height
    }

    #[must_use]
    pub fn average_height(&self) -> f32 {
        self.average_height
    }

    #[must_use]
    pub fn num_discards(&self) -> usize {
        self.num_discards
    }

    /// Occupied slots over total capacity, discard pile included.
    #[must_use]
    pub fn fill_ratio(&self) -> f32 {
        self.fill_ratio
    }
}

/// Lowest stack height, each stack bounded by its own capacity.
fn lowest_height(stacks: &[Stack]) -> usize {
    stacks
        .iter()
        .map(|s| usize::min(s.len(), s.capacity()))
        .min()
        .unwrap_or(0)
}

#[expect(clippy::cast_precision_loss)]
fn ratio(numerator: usize, denominator: usize) -> f32 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f32 / denominator as f32
}

#[cfg(test)]
mod tests {
    use solitaire_engine::{DiscardPile, Tile, TileQueue, TileSeed};

    use super::*;

    fn tile(value: u32) -> Tile {
        Tile::new(value).unwrap()
    }

    fn game(stacks: &[&[u32]], capacity: usize, num_discards: usize, next: u32) -> GameModel {
        let stacks = stacks
            .iter()
            .enumerate()
            .map(|(i, tiles)| {
                Stack::with_tiles(PileId::new(i), capacity, tiles.iter().map(|v| tile(*v)))
            })
            .collect::<Vec<_>>();
        let discard = DiscardPile::with_discards(PileId::new(stacks.len()), 2, num_discards);
        let queue = TileQueue::with_tiles([tile(next), tile(2)], TileSeed::from_bytes([5; 16]));
        GameModel::from_parts(stacks, discard, queue)
    }

    #[test]
    fn test_stack_move_features() {
        let game = game(&[&[8, 4], &[2, 16], &[]], 4, 1, 4);
        let analysis = MoveAnalysis::from_game(&game, PileId::new(0));

        assert_eq!(analysis.target(), PileId::new(0));
        assert_eq!(analysis.num_merges(), 2);
        assert_eq!(analysis.score_change(), 40);
        assert_eq!(analysis.num_tiles(), 3);
        assert_eq!(analysis.num_discontinuities(), 1);
        assert_eq!(analysis.largest_height(), 2);
        assert_eq!(analysis.lowest_height(), 0);
        assert!((analysis.average_height() - 1.0).abs() < f32::EPSILON);
        assert_eq!(analysis.num_discards(), 1);
        assert!((analysis.fill_ratio() - 4.0 / 14.0).abs() < 1e-6);
    }

    #[test]
    fn test_game_is_untouched() {
        let game = game(&[&[8, 4], &[]], 4, 0, 4);
        let before = game.to_string();
        let _ = MoveAnalysis::from_game(&game, PileId::new(0));
        let _ = MoveAnalysis::from_game(&game, PileId::new(2));
        assert_eq!(game.to_string(), before);
    }

    #[test]
    fn test_discard_move_features() {
        let game = game(&[&[8, 4], &[16]], 4, 0, 32);
        let analysis = MoveAnalysis::from_game(&game, PileId::new(2));

        assert_eq!(analysis.num_merges(), 0);
        assert_eq!(analysis.score_change(), 0);
        assert_eq!(analysis.num_discards(), 1);
        assert_eq!(analysis.num_tiles(), 3);
        assert_eq!(analysis.lowest_height(), 1);
    }

    #[test]
    fn test_breakthrough_counts_original_height() {
        let game = game(&[&[1024, 512, 256], &[2]], 4, 2, 256);
        let analysis = MoveAnalysis::from_game(&game, PileId::new(0));

        assert_eq!(analysis.num_merges(), 3);
        assert_eq!(analysis.num_discards(), 0);
        assert_eq!(analysis.num_tiles(), 1);
        assert_eq!(analysis.lowest_height(), 0);
    }

    #[test]
    fn test_lowest_height_uses_stack_capacity() {
        let game = game(&[&[64, 32, 16, 8, 4, 2], &[64, 32, 16, 8, 4, 2]], 6, 0, 8);
        let analysis = MoveAnalysis::from_game(&game, PileId::new(2));
        assert_eq!(analysis.lowest_height(), 6);
        assert_eq!(analysis.largest_height(), 6);
    }

    #[test]
    fn test_lowest_height_of_tall_stacks_with_mixed_capacities() {
        let descending = |len: u32| (0..len).map(|i| tile(1 << (len - i))).collect::<Vec<_>>();
        let stacks = vec![
            Stack::with_tiles(PileId::new(0), 12, descending(11)),
            Stack::with_tiles(PileId::new(1), 10, descending(9)),
            Stack::with_tiles(PileId::new(2), 10, descending(10)),
        ];
        let game = GameModel::from_parts(
            stacks,
            DiscardPile::new(PileId::new(3), 2),
            TileQueue::with_tiles([tile(2), tile(2)], TileSeed::from_bytes([6; 16])),
        );
        let analysis = MoveAnalysis::from_game(&game, PileId::new(3));

        assert_eq!(analysis.lowest_height(), 9);
        assert_eq!(analysis.largest_height(), 11);
        assert!((analysis.fill_ratio() - 31.0 / 34.0).abs() < 1e-6);
    }
}
