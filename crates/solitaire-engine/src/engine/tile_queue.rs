use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Tile;

/// Lookahead queue holding the next two tiles.
///
/// The queue owns its random stream, so cloning a game model also clones the
/// upcoming tile sequence. Pulling always removes the front tile and appends a
/// freshly generated one, keeping the length at [`TileQueue::LEN`].
///
/// # Example
///
/// ```
/// use solitaire_engine::{TileQueue, TileSeed};
/// use rand::Rng as _;
///
/// let seed: TileSeed = rand::rng().random();
/// let mut queue = TileQueue::with_seed(seed);
///
/// let next = queue.peek(0);
/// assert_eq!(queue.pull(), next);
/// assert_eq!(queue.tiles().len(), TileQueue::LEN);
/// ```
#[derive(Debug, Clone)]
pub struct TileQueue {
    rng: Pcg32,
    tiles: [Tile; TileQueue::LEN],
}

impl Default for TileQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed for deterministic tile generation.
///
/// A 128-bit seed for the queue's random stream. The same seed always produces
/// the same tile sequence, which makes games reproducible for training and
/// replays.
///
/// Written as 32 lowercase hex digits, both by [`Display`](fmt::Display) and
/// in serialized form.
///
/// # Example
///
/// ```
/// use solitaire_engine::TileSeed;
///
/// let seed: TileSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
/// assert_eq!(seed, TileSeed::from_bytes(std::array::from_fn(|i| i as u8)));
/// assert_eq!(seed.to_string(), "000102030405060708090a0b0c0d0e0f");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSeed([u8; 16]);

impl TileSeed {
    const HEX_LEN: usize = 32;

    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

/// Text that is not a 32-digit hex tile seed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseTileSeedError {
    #[display("tile seed must have 32 hex digits, got {_0}")]
    Length(#[error(not(source))] usize),
    #[display("tile seed {_0:?} contains a non-hex character")]
    Digit(#[error(not(source))] String),
}

impl fmt::Display for TileSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for TileSeed {
    type Err = ParseTileSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != Self::HEX_LEN {
            return Err(ParseTileSeedError::Length(s.len()));
        }
        // `from_str_radix` would also take a leading sign
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseTileSeedError::Digit(s.to_owned()));
        }
        let num =
            u128::from_str_radix(s, 16).map_err(|_| ParseTileSeedError::Digit(s.to_owned()))?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for TileSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TileSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

impl Distribution<TileSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TileSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        TileSeed(seed)
    }
}

impl TileQueue {
    /// Number of tiles visible in the queue.
    pub const LEN: usize = 2;

    /// Creates a queue seeded from the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed.
    #[must_use]
    pub fn with_seed(seed: TileSeed) -> Self {
        let mut rng = Pcg32::from_seed(seed.0);
        let tiles = [rng.random(), rng.random()];
        Self { rng, tiles }
    }

    /// Creates a queue showing `tiles` first, then continuing from `seed`.
    #[must_use]
    pub fn with_tiles(tiles: [Tile; Self::LEN], seed: TileSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
            tiles,
        }
    }

    /// Removes and returns the front tile, appending a new one at the back.
    pub fn pull(&mut self) -> Tile {
        let [front, back] = self.tiles;
        self.tiles = [back, self.rng.random()];
        front
    }

    /// Returns the tile at `index` without removing it.
    ///
    /// # Panics
    ///
    /// Panics if `index >= TileQueue::LEN`.
    #[must_use]
    pub fn peek(&self, index: usize) -> Tile {
        self.tiles[index]
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
