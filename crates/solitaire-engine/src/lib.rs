//! Game engine for merge solitaire.
//!
//! Tiles numbered with powers of two arrive one at a time from a two-tile
//! lookahead queue. Each tile must be placed on one of several stacks, where
//! equal tiles merge, or thrown onto a small discard pile. A stack that
//! collapses into a single 2048 tile is emptied and clears the discard pile.
//! The game ends once every stack and the discard pile are full.
//!
//! - [`core`] - Tiles and piles
//! - [`engine`] - Game model, tile queue, configuration and statistics

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// A pile identifier outside the game's identifier range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no pile with id {_0}")]
pub struct UnknownPileError(#[error(not(source))] pub PileId);

/// A move rejected before any state was changed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMoveError {
    #[display("discard pile is full")]
    DiscardPileFull,
    #[display("stack {pile_id} is full and its top tile {top} does not match next tile {next}")]
    StackFull { pile_id: PileId, top: Tile, next: Tile },
    #[display("{_0}")]
    UnknownPile(UnknownPileError),
}

impl From<UnknownPileError> for InvalidMoveError {
    fn from(err: UnknownPileError) -> Self {
        Self::UnknownPile(err)
    }
}

/// A configuration value that cannot host a game or a training run.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid `{field}`: {reason}")]
pub struct ConfigError {
    field: &'static str,
    reason: &'static str,
}

impl ConfigError {
    #[must_use]
    pub const fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }

    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }
}
