//! Game state and rules.
//!
//! - [`GameModel`] - Stacks, discard pile, tile queue and score of one game
//! - [`TileQueue`] - Two-tile lookahead queue with its own random stream
//! - [`TileSeed`] - Seed for deterministic tile generation
//! - [`GameConfig`] - Board layout
//! - [`GameStats`] - Score, moves, merges, breakthroughs and discards
//!
//! # Game Flow
//!
//! 1. Create a [`GameModel`] from a [`GameConfig`] (optionally with a [`TileSeed`])
//! 2. Pick a pile for [`GameModel::next_tile`] from [`GameModel::legal_moves`]
//! 3. Apply it with [`GameModel::try_make_move`]
//! 4. Repeat until [`GameModel::game_over`] or no legal move remains

pub use self::{game_config::*, game_model::*, game_stats::*, tile_queue::*};

mod game_config;
mod game_model;
mod game_stats;
mod tile_queue;
