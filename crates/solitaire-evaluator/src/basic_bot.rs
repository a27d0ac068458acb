//! Hand-tuned policy that needs no training.
//!
//! The bot looks for stacks where the next tile would build a clean descending
//! run: empty stacks, or stacks whose top equals the tile. If there are none,
//! it repeats the search with doubled values, so a `4` may be placed onto a
//! stack topped by `8`. Among the candidates the stack with the highest worth
//! (sum of its tiles) wins, which concentrates large tiles in few stacks.

use solitaire_engine::{GameModel, Pile, PileId, Stack, Tile};

use crate::turn_evaluator::Player;

#[derive(Debug, Default, Clone, Copy)]
pub struct BasicBot {}

impl BasicBot {
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Chooses a pile following the fixed rule set.
    ///
    /// The choice is checked against the game rules; an illegal choice is
    /// replaced by the first legal move.
    #[must_use]
    pub fn choose(&self, game: &GameModel) -> Option<PileId> {
        let preferred = preferred_pile(game);
        preferred
            .filter(|pile| game.can_accept(*pile))
            .or_else(|| game.legal_moves().next())
    }
}

impl Player for BasicBot {
    fn select_move(&self, game: &GameModel) -> Option<PileId> {
        self.choose(game)
    }
}

fn preferred_pile(game: &GameModel) -> Option<PileId> {
    let stacks = game.stacks();
    let candidates = matching_stacks(stacks, game.next_tile());

    if candidates.is_empty() {
        if !game.discard_pile().is_full() {
            return Some(game.discard_pile().id());
        }
        return lowest_worth(stacks.iter());
    }

    highest_worth(candidates.iter().copied()).or_else(|| highest_worth(stacks.iter()))
}

/// Stacks that are empty or topped by `tile`, doubling `tile` until some match.
fn matching_stacks(stacks: &[Stack], tile: Tile) -> Vec<&Stack> {
    let mut value = tile;
    while value < Tile::BREAKTHROUGH {
        let matching = stacks
            .iter()
            .filter(|s| s.top().is_none_or(|top| top == value))
            .collect::<Vec<_>>();
        if !matching.is_empty() {
            return matching;
        }
        value = value.doubled();
    }
    vec![]
}

fn highest_worth<'a>(stacks: impl Iterator<Item = &'a Stack>) -> Option<PileId> {
    let mut best: Option<&Stack> = None;
    for stack in stacks.filter(|s| !s.is_full()) {
        if best.is_none_or(|b| stack.worth() > b.worth()) {
            best = Some(stack);
        }
    }
    best.map(Stack::id)
}

fn lowest_worth<'a>(stacks: impl Iterator<Item = &'a Stack>) -> Option<PileId> {
    let mut best: Option<&Stack> = None;
    for stack in stacks.filter(|s| !s.is_full()) {
        if best.is_none_or(|b| stack.worth() < b.worth()) {
            best = Some(stack);
        }
    }
    best.map(Stack::id)
}
