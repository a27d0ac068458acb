use std::path::PathBuf;

use anyhow::Context as _;
use rand::Rng as _;
use solitaire_engine::{GameModel, MoveOutcome, TileSeed};
use solitaire_evaluator::{
    basic_bot::BasicBot,
    session_evaluator::{SessionEnd, SessionEvaluator},
    turn_evaluator::{Player, TurnEvaluator},
};

use crate::{
    command::GameArg,
    config::AppConfig,
    model::{ai_model::AiModel, game_record::GameRecord},
};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub(crate) enum PlayerKind {
    #[default]
    Basic,
    Genetic,
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct AutoPlayArg {
    /// Player to use: `basic` (hand-tuned rules) or `genetic` (trained model)
    #[arg(long, default_value = "basic")]
    player: PlayerKind,
    /// Path to the model file for the genetic player (JSON format)
    #[arg(long)]
    model: Option<PathBuf>,
    /// Tile seed as 32 hex digits; a random seed is drawn and logged if omitted
    #[arg(long)]
    seed: Option<TileSeed>,
    /// Save every move of the game to this file (JSON format), for `replay`
    #[arg(long)]
    record: Option<PathBuf>,
    /// Stop after this many moves
    #[arg(long)]
    move_limit: Option<usize>,
    /// Print only the final result
    #[arg(long)]
    quiet: bool,
    #[clap(flatten)]
    game: GameArg,
}

pub(crate) fn run(arg: &AutoPlayArg, config: &AppConfig) -> anyhow::Result<()> {
    let AutoPlayArg {
        player,
        model,
        seed,
        record,
        move_limit,
        quiet,
        game,
    } = arg;

    let mut game_config = config.game;
    game.apply(&mut game_config);
    game_config
        .validate()
        .context("Invalid game configuration")?;

    let (player_name, player): (String, Box<dyn Player>) = match player {
        PlayerKind::Basic => ("basic".to_owned(), Box::new(BasicBot::new())),
        PlayerKind::Genetic => {
            let path = model
                .as_ref()
                .context("The genetic player needs a model file (--model)")?;
            let model = AiModel::open(path)?;
            log::info!(
                "Loaded model {:?} trained at {} (fitness {})",
                model.name,
                model.trained_at,
                model.final_fitness
            );
            (model.name, Box::new(TurnEvaluator::new(Box::new(model.dna))))
        }
    };

    let tile_seed = seed.unwrap_or_else(|| rand::rng().random());
    log::info!("Tile seed: {tile_seed}");
    let mut game_record = GameRecord::new(player_name, game_config, tile_seed);
    let mut game_model = GameModel::with_seed(&game_config, tile_seed);
    if !quiet {
        println!("{game_model}");
    }

    let session_evaluator = SessionEvaluator::new(*move_limit);
    let outcome = session_evaluator.play_session(&mut game_model, &*player, |game, outcome| {
        game_record.push(outcome);
        if *quiet {
            return;
        }
        println!();
        println!("Move {}: {}", game.stats().moves(), describe_move(outcome));
        println!("{game}");
    });

    let stats = outcome.stats();
    println!();
    println!("Game finished: {}", describe_end(outcome.end()));
    println!("  Score: {}", stats.score());
    println!("  Moves: {}", stats.moves());
    println!("  Merges: {}", stats.merges());
    println!("  Breakthroughs: {}", stats.breakthroughs());
    println!("  Discards: {}", stats.discards());

    if let Some(path) = record {
        game_record.save(path)?;
        eprintln!("Game record saved to {}", path.display());
    }

    Ok(())
}

fn describe_move(outcome: &MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Stack { tile, merge, .. } if merge.breakthrough() => {
            format!("{tile} stacked, breakthrough! (+{})", merge.score())
        }
        MoveOutcome::Stack { tile, merge, .. } if merge.merges() > 0 => {
            format!("{tile} stacked, {} merges (+{})", merge.merges(), merge.score())
        }
        MoveOutcome::Stack { tile, .. } => format!("{tile} stacked"),
        MoveOutcome::Discard { tile, .. } => format!("{tile} discarded"),
    }
}

fn describe_end(end: &SessionEnd) -> String {
    match end {
        SessionEnd::GameOver => "no room left".to_owned(),
        SessionEnd::NoMove => "player gave up".to_owned(),
        SessionEnd::MoveLimit => "move limit reached".to_owned(),
        SessionEnd::Rejected(err) => format!("illegal move ({err})"),
    }
}

#[cfg(test)]
mod tests {
    use solitaire_engine::{MergeOutcome, PileId, Tile};

    use super::*;

    #[test]
    fn test_player_kind_from_str() {
        assert_eq!("basic".parse::<PlayerKind>().unwrap(), PlayerKind::Basic);
        assert_eq!("Genetic".parse::<PlayerKind>().unwrap(), PlayerKind::Genetic);
        assert!("random".parse::<PlayerKind>().is_err());
    }

    #[test]
    fn test_describe_discard() {
        let outcome = MoveOutcome::Discard {
            pile_id: PileId::new(4),
            tile: Tile::MIN,
        };
        assert_eq!(describe_move(&outcome), "2 discarded");
        let outcome = MoveOutcome::Stack {
            pile_id: PileId::new(0),
            tile: Tile::MIN,
            merge: MergeOutcome::default(),
        };
        assert_eq!(describe_move(&outcome), "2 stacked");
    }
}
