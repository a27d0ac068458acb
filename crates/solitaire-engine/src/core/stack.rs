use super::{
    pile::{Pile, PileId},
    tile::Tile,
};

/// Result of placing a tile on a [`Stack`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    score: usize,
    merges: usize,
    breakthrough: bool,
}

impl MergeOutcome {
    /// Points earned by the merge cascade.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Number of merges in the cascade.
    #[must_use]
    pub const fn merges(&self) -> usize {
        self.merges
    }

    /// Whether the stack collapsed into a single breakthrough tile and was emptied.
    #[must_use]
    pub const fn breakthrough(&self) -> bool {
        self.breakthrough
    }
}

/// A merging pile of tiles.
///
/// Tiles are stored bottom first. Whenever a tile is placed, equal tiles at the
/// top are merged repeatedly. The `k`-th merge of one cascade earns
/// `merged_value * k` points, so long chains are worth more than isolated
/// merges.
///
/// # Example
///
/// ```
/// use solitaire_engine::{PileId, Stack, Tile};
///
/// let tile = |v| Tile::new(v).unwrap();
/// let mut stack = Stack::with_tiles(PileId::new(0), 8, [tile(8), tile(4)]);
///
/// let outcome = stack.add_tile(tile(4));
/// assert_eq!(outcome.score(), 8 + 16 * 2);
/// assert_eq!(stack.tiles(), &[tile(16)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    id: PileId,
    capacity: usize,
    tiles: Vec<Tile>,
}

impl Stack {
    #[must_use]
    pub fn new(id: PileId, capacity: usize) -> Self {
        Self {
            id,
            capacity,
            tiles: Vec::with_capacity(capacity + 1),
        }
    }

    /// Creates a stack holding `tiles` (bottom first) without merging them.
    ///
    /// # Panics
    ///
    /// Panics if more than `capacity` tiles are given.
    #[must_use]
    pub fn with_tiles<I>(id: PileId, capacity: usize, tiles: I) -> Self
    where
        I: IntoIterator<Item = Tile>,
    {
        let mut stack = Self::new(id, capacity);
        stack.tiles.extend(tiles);
        assert!(stack.tiles.len() <= capacity, "too many tiles for stack");
        stack
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn top(&self) -> Option<Tile> {
        self.tiles.last().copied()
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn worth(&self) -> u32 {
        self.tiles.iter().map(|t| t.value()).sum()
    }

    /// Counts adjacent pairs where a lower tile sits beneath a higher one.
    #[must_use]
    pub fn num_discontinuities(&self) -> usize {
        self.tiles.windows(2).filter(|w| w[0] < w[1]).count()
    }

    /// Places `tile` on top and runs the merge cascade.
    ///
    /// Legality is not checked here; a full stack whose top differs from
    /// `tile` ends up over capacity.
    pub fn add_tile(&mut self, tile: Tile) -> MergeOutcome {
        self.tiles.push(tile);

        let mut outcome = MergeOutcome::default();
        let mut multiplier = 1;
        loop {
            let len = self.tiles.len();
            if len < 2 || self.tiles[len - 1] != self.tiles[len - 2] {
                break;
            }
            let merged = self.tiles[len - 1].doubled();
            self.tiles.truncate(len - 2);
            self.tiles.push(merged);
            outcome.score += merged.value() as usize * multiplier;
            outcome.merges += 1;
            multiplier += 1;
        }

        if self.tiles.as_slice() == [Tile::BREAKTHROUGH] {
            self.tiles.clear();
            outcome.breakthrough = true;
        }
        outcome
    }
}

impl Pile for Stack {
    fn id(&self) -> PileId {
        self.id
    }

    fn len(&self) -> usize {
        self.tiles.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn accepts(&self, tile: Tile) -> bool {
        !self.is_full() || self.top() == Some(tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(value: u32) -> Tile {
        Tile::new(value).unwrap()
    }

    fn stack(tiles: &[u32]) -> Stack {
        Stack::with_tiles(PileId::new(0), 8, tiles.iter().map(|v| tile(*v)))
    }

    fn values(stack: &Stack) -> Vec<u32> {
        stack.tiles().iter().map(|t| t.value()).collect()
    }

    #[test]
    fn test_add_without_merge() {
        let mut stack = stack(&[8, 4]);
        let outcome = stack.add_tile(tile(2));
        assert_eq!(outcome, MergeOutcome::default());
        assert_eq!(values(&stack), [8, 4, 2]);
    }

    #[test]
    fn test_single_merge_scores_merged_value() {
        let mut stack = stack(&[16, 4]);
        let outcome = stack.add_tile(tile(4));
        assert_eq!(outcome.score(), 8);
        assert_eq!(outcome.merges(), 1);
        assert_eq!(values(&stack), [16, 8]);
    }

    #[test]
    fn test_cascade_multiplier_increases() {
        let mut stack = stack(&[8, 4]);
        let outcome = stack.add_tile(tile(4));
        assert_eq!(outcome.score(), 8 + 16 * 2);
        assert_eq!(outcome.merges(), 2);
        assert_eq!(values(&stack), [16]);

        let mut stack = self::stack(&[32, 8, 4, 2]);
        let outcome = stack.add_tile(tile(2));
        assert_eq!(outcome.score(), 4 + 8 * 2 + 16 * 3);
        assert_eq!(values(&stack), [32, 16]);
    }

    #[test]
    fn test_top_two_never_equal_after_add() {
        let mut stack = Stack::new(PileId::new(0), 64);
        for value in [2, 2, 4, 64, 8, 8, 16, 32, 2, 4, 4, 2, 2, 8, 16, 32, 64] {
            stack.add_tile(tile(value));
            let tiles = stack.tiles();
            if let [.., below, top] = tiles {
                assert_ne!(below, top, "unmerged top pair in {tiles:?}");
            }
        }
    }

    #[test]
    fn test_breakthrough_empties_stack() {
        let mut stack = stack(&[1024, 512, 256]);
        let outcome = stack.add_tile(tile(256));
        assert!(outcome.breakthrough());
        assert_eq!(outcome.merges(), 3);
        assert_eq!(outcome.score(), 512 + 1024 * 2 + 2048 * 3);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_breakthrough_requires_single_tile() {
        let mut stack = stack(&[4, 1024]);
        let outcome = stack.add_tile(tile(1024));
        assert!(!outcome.breakthrough());
        assert_eq!(values(&stack), [4, 2048]);
    }

    #[test]
    fn test_full_stack_accepts_matching_tile() {
        let stack = Stack::with_tiles(PileId::new(0), 2, [tile(8), tile(4)]);
        assert!(stack.is_full());
        assert!(stack.accepts(tile(4)));
        assert!(!stack.accepts(tile(8)));
    }

    #[test]
    fn test_discontinuities_and_worth() {
        let stack = stack(&[8, 16, 4, 32]);
        assert_eq!(stack.num_discontinuities(), 2);
        assert_eq!(stack.worth(), 60);
    }
}
