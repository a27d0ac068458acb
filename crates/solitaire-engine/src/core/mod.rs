//! Core data structures: tiles and the piles that hold them.
//!
//! - [`Tile`] - A power-of-two tile value
//! - [`Stack`] - Merging pile with a fixed capacity
//! - [`DiscardPile`] - Capacity-limited discard counter
//! - [`Pile`] / [`PileRef`] - Shared pile capabilities and a borrowed view over both kinds

pub use self::{discard_pile::*, pile::*, stack::*, tile::*};

pub(crate) mod discard_pile;
pub(crate) mod pile;
pub(crate) mod stack;
pub(crate) mod tile;
