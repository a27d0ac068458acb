use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Utc;
use rand::SeedableRng as _;
use rand_pcg::Pcg32;
use solitaire_training::{
    genetic::Bot,
    trainer::{Trainer, TrainingConfig},
};

use crate::{command::GameArg, config::AppConfig, model::ai_model::AiModel};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct TrainArg {
    /// Model name stored in the output file
    #[arg(long, default_value = "genetic")]
    name: String,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Bots per generation
    #[arg(long)]
    population_size: Option<usize>,
    /// Percent chance (0 to 100) that a gene mutates
    #[arg(long)]
    mutation_rate: Option<f64>,
    /// Amount a mutation adds to or subtracts from a gene
    #[arg(long)]
    mutation_step: Option<f32>,
    /// Stop once a bot scores at least this much
    #[arg(long)]
    target_score: Option<usize>,
    /// Probability of descending into the fitter half during parent selection
    #[arg(long)]
    fitter_half_probability: Option<f64>,
    /// Stop after this many generations
    #[arg(long)]
    max_generations: Option<usize>,
    /// Cap on moves per game
    #[arg(long)]
    move_limit: Option<usize>,
    #[clap(flatten)]
    game: GameArg,
}

impl TrainArg {
    fn apply(&self, config: &mut TrainingConfig) {
        if let Some(v) = self.population_size {
            config.population_size = v;
        }
        if let Some(v) = self.mutation_rate {
            config.mutation_rate = v;
        }
        if let Some(v) = self.mutation_step {
            config.mutation_step = v;
        }
        if let Some(v) = self.target_score {
            config.target_score = v;
        }
        if let Some(v) = self.fitter_half_probability {
            config.fitter_half_probability = v;
        }
        if self.max_generations.is_some() {
            config.max_generations = self.max_generations;
        }
        if self.move_limit.is_some() {
            config.move_limit = self.move_limit;
        }
    }
}

pub(crate) fn run(arg: &TrainArg, config: AppConfig) -> anyhow::Result<()> {
    let AppConfig {
        mut game,
        mut training,
    } = config;
    arg.game.apply(&mut game);
    arg.apply(&mut training);
    let trainer = Trainer::new(game, training).context("Invalid configuration")?;

    let mut rng = match arg.seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::from_rng(&mut rand::rng()),
    };

    log::info!("Game: {:?}", trainer.game_config());
    log::info!("Training: {:?}", trainer.config());

    // The fittest bot of the last generation may be weaker than an earlier one.
    let mut best: Option<Bot> = None;
    let outcome = trainer.run(&mut rng, |report| {
        let fittest = report.fittest();
        if best.as_ref().is_none_or(|b| fittest.fitness() > b.fitness()) {
            best = Some(fittest.clone());
        }
    });
    let best = best.unwrap_or(outcome.fittest);

    eprintln!("Training completed: {}", outcome.end);
    eprintln!("  Generations: {}", outcome.generations);

    let model = AiModel {
        name: arg.name.clone(),
        trained_at: Utc::now(),
        generations: outcome.generations,
        final_fitness: best.fitness().unwrap_or(0),
        dna: *best.dna(),
    };
    model.save(arg.output.as_deref())?;

    eprintln!();
    eprintln!("Model saved successfully");
    if let Some(path) = &arg.output {
        eprintln!("  Path: {}", path.display());
    }
    eprintln!("  Name: {}", model.name);
    eprintln!("  Trained at: {}", model.trained_at);
    eprintln!("  Final fitness: {}", model.final_fitness);
    eprintln!("  DNA: {:.3?}", model.dna.genes());

    Ok(())
}
