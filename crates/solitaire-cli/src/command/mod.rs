use std::path::PathBuf;

use clap::{Parser, Subcommand};
use solitaire_engine::GameConfig;

use crate::{config::AppConfig, logging};

use self::{auto_play::AutoPlayArg, replay::ReplayArg, train::TrainArg};

mod auto_play;
mod replay;
mod train;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// JSON configuration file with `game` and `training` sections
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log level specification, overriding `RUST_LOG` (e.g. `debug`)
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Train a DNA with the genetic algorithm and save it as a model file
    Train(#[clap(flatten)] TrainArg),
    /// Let a bot play one game and print the board after every move
    #[command(name = "auto-play")]
    AutoPlay(#[clap(flatten)] AutoPlayArg),
    /// Play a recorded game again and check that it ends with the recorded score
    Replay(#[clap(flatten)] ReplayArg),
}

/// Command-line overrides for the `game` section of the configuration.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GameArg {
    /// Number of stacks
    #[arg(long)]
    num_stacks: Option<usize>,
    /// Capacity of each stack
    #[arg(long)]
    max_stack_size: Option<usize>,
    /// Capacity of the discard pile
    #[arg(long)]
    max_discards: Option<usize>,
}

impl GameArg {
    fn apply(&self, config: &mut GameConfig) {
        let Self {
            num_stacks,
            max_stack_size,
            max_discards,
        } = self;
        if let Some(num_stacks) = num_stacks {
            config.num_stacks = *num_stacks;
        }
        if let Some(max_stack_size) = max_stack_size {
            config.max_stack_size = *max_stack_size;
        }
        if let Some(max_discards) = max_discards {
            config.max_discards = *max_discards;
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let _logger = logging::setup_logging(args.log_level.as_deref())?;
    let config = AppConfig::load(args.config.as_deref())?;

    match args.mode {
        Mode::Train(arg) => train::run(&arg, config)?,
        Mode::AutoPlay(arg) => auto_play::run(&arg, &config)?,
        Mode::Replay(arg) => replay::run(&arg)?,
    }
    Ok(())
}
