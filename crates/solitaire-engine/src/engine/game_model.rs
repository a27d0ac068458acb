use std::fmt;

use crate::{
    InvalidMoveError, UnknownPileError,
    core::{DiscardPile, MergeOutcome, Pile, PileId, PileRef, Stack, Tile},
};

use super::{
    game_config::GameConfig,
    game_stats::GameStats,
    tile_queue::{TileQueue, TileSeed},
};

/// What happened when a tile was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveOutcome {
    /// The tile went onto a stack.
    Stack {
        pile_id: PileId,
        tile: Tile,
        merge: MergeOutcome,
    },
    /// The tile was discarded.
    Discard { pile_id: PileId, tile: Tile },
}

impl MoveOutcome {
    #[must_use]
    pub const fn tile(&self) -> Tile {
        match self {
            MoveOutcome::Stack { tile, .. } | MoveOutcome::Discard { tile, .. } => *tile,
        }
    }

    /// The pile the tile was placed on.
    #[must_use]
    pub const fn pile_id(&self) -> PileId {
        match self {
            MoveOutcome::Stack { pile_id, .. } | MoveOutcome::Discard { pile_id, .. } => *pile_id,
        }
    }

    /// Points earned by this move.
    #[must_use]
    pub const fn score(&self) -> usize {
        match self {
            MoveOutcome::Stack { merge, .. } => merge.score(),
            MoveOutcome::Discard { .. } => 0,
        }
    }
}

/// Complete state of one game.
///
/// Owns the stacks (identifiers `0..N`), the discard pile (identifier `N`),
/// the tile queue and the running statistics. `Clone` produces a fully
/// independent copy, which move evaluation relies on to try out hypothetical
/// moves.
///
/// # Example
///
/// ```
/// use solitaire_engine::{GameConfig, GameModel, TileSeed};
///
/// let mut game = GameModel::with_seed(&GameConfig::default(), TileSeed::from_bytes([7; 16]));
///
/// while !game.game_over() {
///     let Some(pile) = game.legal_moves().next() else {
///         break;
///     };
///     game.try_make_move(pile).unwrap();
/// }
/// println!("final score: {}", game.score());
/// ```
#[derive(Debug, Clone)]
pub struct GameModel {
    stacks: Vec<Stack>,
    discard_pile: DiscardPile,
    tile_queue: TileQueue,
    stats: GameStats,
}

impl GameModel {
    /// Creates a game with a randomly seeded tile queue.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::from_parts(
            empty_stacks(config),
            DiscardPile::new(PileId::new(config.num_stacks), config.max_discards),
            TileQueue::new(),
        )
    }

    /// Like [`Self::new`], but the tile sequence is determined by `seed`.
    #[must_use]
    pub fn with_seed(config: &GameConfig, seed: TileSeed) -> Self {
        Self::from_parts(
            empty_stacks(config),
            DiscardPile::new(PileId::new(config.num_stacks), config.max_discards),
            TileQueue::with_seed(seed),
        )
    }

    /// Assembles a game from prepared piles.
    ///
    /// # Panics
    ///
    /// Panics if the stack identifiers are not `0..N` in order or the discard
    /// pile identifier is not `N`.
    #[must_use]
    pub fn from_parts(stacks: Vec<Stack>, discard_pile: DiscardPile, tile_queue: TileQueue) -> Self {
        for (i, stack) in stacks.iter().enumerate() {
            assert_eq!(stack.id(), PileId::new(i), "stack ids must be contiguous");
        }
        assert_eq!(discard_pile.id(), PileId::new(stacks.len()));
        Self {
            stacks,
            discard_pile,
            tile_queue,
            stats: GameStats::new(),
        }
    }

    #[must_use]
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    #[must_use]
    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard_pile
    }

    #[must_use]
    pub fn tile_queue(&self) -> &TileQueue {
        &self.tile_queue
    }

    /// The tile the next move will place.
    #[must_use]
    pub fn next_tile(&self) -> Tile {
        self.tile_queue.peek(0)
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.stats.score()
    }

    /// Identifiers of every pile, stacks first.
    pub fn pile_ids(&self) -> impl Iterator<Item = PileId> + use<> {
        (0..=self.stacks.len()).map(PileId::new)
    }

    /// Returns the stack with `id`, or the discard pile if `id` is one past the last stack.
    pub fn pile(&self, id: PileId) -> Result<PileRef<'_>, UnknownPileError> {
        if let Some(stack) = self.stacks.get(id.index()) {
            return Ok(PileRef::Stack(stack));
        }
        if id == self.discard_pile.id() {
            return Ok(PileRef::Discard(&self.discard_pile));
        }
        Err(UnknownPileError(id))
    }

    /// Checks whether the next tile may be placed on `id`.
    pub fn check_move(&self, id: PileId) -> Result<(), InvalidMoveError> {
        let next = self.next_tile();
        match self.pile(id)? {
            PileRef::Discard(discard) if !discard.accepts(next) => {
                Err(InvalidMoveError::DiscardPileFull)
            }
            PileRef::Stack(stack) if !stack.accepts(next) => Err(InvalidMoveError::StackFull {
                pile_id: id,
                top: stack.top().unwrap_or(next),
                next,
            }),
            PileRef::Discard(_) | PileRef::Stack(_) => Ok(()),
        }
    }

    #[must_use]
    pub fn can_accept(&self, id: PileId) -> bool {
        self.check_move(id).is_ok()
    }

    /// Piles that can take the next tile, stacks in ascending order then the discard pile.
    pub fn legal_moves(&self) -> impl Iterator<Item = PileId> + '_ {
        self.pile_ids().filter(|id| self.can_accept(*id))
    }

    /// Places the next tile on `id` without checking legality.
    ///
    /// The cascade score is added to the running score, and a breakthrough
    /// clears the discard pile.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not name a pile of this game.
    pub fn make_move(&mut self, id: PileId) -> MoveOutcome {
        assert!(id <= self.discard_pile.id(), "no pile with id {id}");
        let tile = self.tile_queue.pull();
        let Some(stack) = self.stacks.get_mut(id.index()) else {
            self.discard_pile.add_tile(tile);
            self.stats.record_discard();
            return MoveOutcome::Discard { pile_id: id, tile };
        };

        let merge = stack.add_tile(tile);
        if merge.breakthrough() {
            self.discard_pile.clear_discards();
        }
        self.stats.record_stack_move(&merge);
        MoveOutcome::Stack {
            pile_id: id,
            tile,
            merge,
        }
    }

    /// Validates the move, then applies it. The game is unchanged on error.
    pub fn try_make_move(&mut self, id: PileId) -> Result<MoveOutcome, InvalidMoveError> {
        self.check_move(id)?;
        Ok(self.make_move(id))
    }

    /// Returns `true` once every stack and the discard pile are full.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.stacks.iter().all(Stack::is_full) && self.discard_pile.is_full()
    }
}

fn empty_stacks(config: &GameConfig) -> Vec<Stack> {
    (0..config.num_stacks)
        .map(|i| Stack::new(PileId::new(i), config.max_stack_size))
        .collect()
}

impl fmt::Display for GameModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score: {}  Next:", self.score())?;
        for tile in self.tile_queue.tiles() {
            write!(f, " {tile}")?;
        }
        writeln!(f)?;
        for stack in &self.stacks {
            write!(f, "  [{}] {:>2}/{}:", stack.id(), stack.len(), stack.capacity())?;
            for tile in stack.tiles() {
                write!(f, " {tile}")?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "  [{}] discards {}/{}",
            self.discard_pile.id(),
            self.discard_pile.num_discards(),
            self.discard_pile.max_discards()
        )
    }
}
