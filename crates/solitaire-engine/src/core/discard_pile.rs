use super::{
    pile::{Pile, PileId},
    tile::Tile,
};

/// Limited-capacity pile that swallows unwanted tiles.
///
/// Only the number of discarded tiles is tracked. The counter is cleared when
/// any stack breaks through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardPile {
    id: PileId,
    max_discards: usize,
    num_discards: usize,
}

impl DiscardPile {
    #[must_use]
    pub const fn new(id: PileId, max_discards: usize) -> Self {
        Self {
            id,
            max_discards,
            num_discards: 0,
        }
    }

    /// Like [`Self::new`], but with some discards already used.
    ///
    /// # Panics
    ///
    /// Panics if `num_discards` exceeds `max_discards`.
    #[must_use]
    pub fn with_discards(id: PileId, max_discards: usize, num_discards: usize) -> Self {
        assert!(num_discards <= max_discards);
        Self {
            id,
            max_discards,
            num_discards,
        }
    }

    #[must_use]
    pub const fn num_discards(&self) -> usize {
        self.num_discards
    }

    #[must_use]
    pub const fn max_discards(&self) -> usize {
        self.max_discards
    }

    /// Records a discarded tile. The counter never exceeds the bound.
    pub fn add_tile(&mut self, _tile: Tile) {
        self.num_discards = usize::min(self.num_discards + 1, self.max_discards);
    }

    pub fn clear_discards(&mut self) {
        self.num_discards = 0;
    }
}

impl Pile for DiscardPile {
    fn id(&self) -> PileId {
        self.id
    }

    fn len(&self) -> usize {
        self.num_discards
    }

    fn capacity(&self) -> usize {
        self.max_discards
    }

    fn accepts(&self, _tile: Tile) -> bool {
        !self.is_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_up_to_bound() {
        let mut pile = DiscardPile::new(PileId::new(4), 2);
        assert!(pile.accepts(Tile::MIN));
        pile.add_tile(Tile::MIN);
        assert!(!pile.is_full());
        pile.add_tile(Tile::MIN);
        assert!(pile.is_full());
        assert!(!pile.accepts(Tile::MIN));
        assert_eq!(pile.num_discards(), 2);
    }

    #[test]
    fn test_clear_discards() {
        let mut pile = DiscardPile::with_discards(PileId::new(1), 3, 3);
        pile.clear_discards();
        assert_eq!(pile.num_discards(), 0);
        assert!(pile.is_empty());
    }
}
