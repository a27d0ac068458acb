use std::path::Path;

use anyhow::{Context as _, ensure};
use serde::{Deserialize, Serialize};
use solitaire_engine::{GameConfig, GameModel, MoveOutcome, PileId, Tile, TileSeed};

use crate::util;

/// Every move of one game, enough to play it again.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameRecord {
    pub player: String,
    pub config: GameConfig,
    pub seed: TileSeed,
    pub moves: Vec<RecordedMove>,
    pub score: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecordedMove {
    pub tile: Tile,
    pub pile_id: PileId,
}

impl GameRecord {
    pub fn new(player: String, config: GameConfig, seed: TileSeed) -> Self {
        Self {
            player,
            config,
            seed,
            moves: vec![],
            score: 0,
        }
    }

    pub fn push(&mut self, outcome: &MoveOutcome) {
        self.moves.push(RecordedMove {
            tile: outcome.tile(),
            pile_id: outcome.pile_id(),
        });
        self.score += outcome.score();
    }

    pub fn open<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        util::read_json_file("game record", path)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        util::write_json_file("game record", self, Some(path))
    }

    /// Plays the recorded moves again on a fresh game.
    ///
    /// Fails as soon as the replayed game diverges from the record: a
    /// different tile comes up, a move is illegal, or the final score differs.
    pub fn replay<F>(&self, mut observer: F) -> anyhow::Result<GameModel>
    where
        F: FnMut(&GameModel, &MoveOutcome),
    {
        self.config
            .validate()
            .context("Invalid game configuration in record")?;

        let mut game = GameModel::with_seed(&self.config, self.seed);
        for (i, recorded) in self.moves.iter().enumerate() {
            let next = game.next_tile();
            ensure!(
                next == recorded.tile,
                "move {}: recorded tile {} but the seed deals {next}",
                i + 1,
                recorded.tile
            );
            let outcome = game
                .try_make_move(recorded.pile_id)
                .with_context(|| format!("move {}: cannot replay", i + 1))?;
            observer(&game, &outcome);
        }
        ensure!(
            game.score() == self.score,
            "replayed score {} does not match recorded score {}",
            game.score(),
            self.score
        );
        Ok(game)
    }
}
