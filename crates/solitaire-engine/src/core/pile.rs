use serde::{Deserialize, Serialize};

use super::{discard_pile::DiscardPile, stack::Stack, tile::Tile};

/// Identifier of a pile within a game.
///
/// Stacks are numbered `0..N`; the discard pile always takes `N`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct PileId(usize);

impl PileId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Capabilities shared by every pile kind.
pub trait Pile {
    fn id(&self) -> PileId;

    /// Number of occupied slots.
    fn len(&self) -> usize;

    /// Number of slots available when the pile is at rest.
    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Returns `true` if `tile` may legally be placed on this pile.
    fn accepts(&self, tile: Tile) -> bool;
}

/// Borrowed view of either pile kind.
#[derive(Debug, Clone, Copy, derive_more::IsVariant)]
pub enum PileRef<'a> {
    Stack(&'a Stack),
    Discard(&'a DiscardPile),
}

impl Pile for PileRef<'_> {
    fn id(&self) -> PileId {
        match self {
            PileRef::Stack(stack) => stack.id(),
            PileRef::Discard(discard) => discard.id(),
        }
    }

    fn len(&self) -> usize {
        match self {
            PileRef::Stack(stack) => stack.len(),
            PileRef::Discard(discard) => discard.len(),
        }
    }

    fn capacity(&self) -> usize {
        match self {
            PileRef::Stack(stack) => stack.capacity(),
            PileRef::Discard(discard) => discard.capacity(),
        }
    }

    fn accepts(&self, tile: Tile) -> bool {
        match self {
            PileRef::Stack(stack) => stack.accepts(tile),
            PileRef::Discard(discard) => discard.accepts(tile),
        }
    }
}
