use crate::MergeOutcome;

/// Running statistics of one game.
///
/// # Example
///
/// ```
/// use solitaire_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.record_discard();
///
/// assert_eq!(stats.moves(), 1);
/// assert_eq!(stats.discards(), 1);
/// assert_eq!(stats.score(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameStats {
    score: usize,
    moves: usize,
    merges: usize,
    breakthroughs: usize,
    discards: usize,
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            moves: 0,
            merges: 0,
            breakthroughs: 0,
            discards: 0,
        }
    }

    /// Sum of all merge cascade scores.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Number of tiles placed so far.
    #[must_use]
    pub const fn moves(&self) -> usize {
        self.moves
    }

    #[must_use]
    pub const fn merges(&self) -> usize {
        self.merges
    }

    #[must_use]
    pub const fn breakthroughs(&self) -> usize {
        self.breakthroughs
    }

    /// Total tiles discarded over the whole game, including cleared ones.
    #[must_use]
    pub const fn discards(&self) -> usize {
        self.discards
    }

    pub const fn record_stack_move(&mut self, outcome: &MergeOutcome) {
        self.moves += 1;
        self.score += outcome.score();
        self.merges += outcome.merges();
        if outcome.breakthrough() {
            self.breakthroughs += 1;
        }
    }

    pub const fn record_discard(&mut self) {
        self.moves += 1;
        self.discards += 1;
    }
}
