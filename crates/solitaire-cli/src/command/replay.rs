use std::path::PathBuf;

use crate::model::game_record::GameRecord;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ReplayArg {
    /// Path to the game record written by `auto-play --record` (JSON format)
    record_file: PathBuf,
    /// Print only the final result
    #[arg(long)]
    quiet: bool,
}

pub(crate) fn run(arg: &ReplayArg) -> anyhow::Result<()> {
    let ReplayArg { record_file, quiet } = arg;

    eprintln!("Loading game record from {}", record_file.display());
    let record = GameRecord::open(record_file)?;
    log::info!(
        "Replaying {} moves by {:?} with tile seed {}",
        record.moves.len(),
        record.player,
        record.seed
    );

    let game = record.replay(|game, outcome| {
        if *quiet {
            return;
        }
        println!(
            "Move {}: {} onto pile {}",
            game.stats().moves(),
            outcome.tile(),
            outcome.pile_id()
        );
        println!("{game}");
        println!();
    })?;

    println!(
        "Replay matches the record: score {} after {} moves",
        game.score(),
        game.stats().moves()
    );
    Ok(())
}
