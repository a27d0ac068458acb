use std::fmt;

use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

/// A single numbered tile.
///
/// Tile values are always powers of two. Fresh tiles are drawn from
/// [`Tile::SPAWN_VALUES`] (2 through 64) and only grow by merging, which
/// doubles the value.
///
/// # Example
///
/// ```
/// use solitaire_engine::Tile;
///
/// let tile = Tile::new(8).unwrap();
/// assert_eq!(tile.doubled().value(), 16);
/// assert!(Tile::new(12).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Tile(u32);

impl Tile {
    /// Smallest tile value.
    pub const MIN: Self = Self(2);

    /// Value that empties a stack when it is the only tile left.
    pub const BREAKTHROUGH: Self = Self(2048);

    /// Values a freshly generated tile can take, each with equal probability.
    pub const SPAWN_VALUES: [Self; 6] = [
        Self(2),
        Self(4),
        Self(8),
        Self(16),
        Self(32),
        Self(64),
    ];

    /// Creates a tile, returning `None` unless `value` is a power of two of at least 2.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        if value >= 2 && value.is_power_of_two() {
            Some(Self(value))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the tile produced by merging two tiles of this value.
    #[must_use]
    pub const fn doubled(self) -> Self {
        Self(self.0 * 2)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Tile> for u32 {
    fn from(tile: Tile) -> Self {
        tile.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid tile value {_0}: must be a power of two of at least 2")]
pub struct InvalidTileError(#[error(not(source))] pub u32);

impl TryFrom<u32> for Tile {
    type Error = InvalidTileError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidTileError(value))
    }
}

impl Distribution<Tile> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        Tile(1 << rng.random_range(1..=6))
    }
}
