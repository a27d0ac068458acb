//! Training loop: evolves generations until a bot reaches the target score.

use rand::Rng;
use serde::{Deserialize, Serialize};
use solitaire_engine::{ConfigError, GameConfig};
use solitaire_evaluator::{move_feature::MoveFeature, session_evaluator::SessionEvaluator};
use solitaire_stats::descriptive::DescriptiveStats;

use crate::genetic::{Bot, Generation, GenerationEvolver};

/// Parameters of a training run.
///
/// Missing fields in a configuration file take their default values.
///
/// ```
/// use solitaire_training::trainer::TrainingConfig;
///
/// let config: TrainingConfig = serde_json::from_str(r#"{ "population_size": 12 }"#).unwrap();
/// assert_eq!(config.population_size, 12);
/// assert_eq!(config.mutation_rate, 10.0);
/// assert_eq!(config.max_generations, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainingConfig {
    /// Bots per generation
    pub population_size: usize,
    /// Percent chance (0 to 100) that a gene of a child mutates
    pub mutation_rate: f64,
    /// Amount a mutation adds to or subtracts from a gene
    pub mutation_step: f32,
    /// Training stops at the first generation whose best score reaches this
    pub target_score: usize,
    /// Probability of descending into the fitter half during parent selection
    pub fitter_half_probability: f64,
    /// Upper bound on the number of generations, unbounded if `None`
    pub max_generations: Option<usize>,
    /// Upper bound on moves per game, unbounded if `None`
    pub move_limit: Option<usize>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            mutation_rate: 10.0,
            mutation_step: 0.1,
            target_score: 10_000,
            fitter_half_probability: 0.65,
            max_generations: None,
            move_limit: None,
        }
    }
}

impl TrainingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::new("population_size", "must be at least 1"));
        }
        if !(0.0..=100.0).contains(&self.mutation_rate) {
            return Err(ConfigError::new("mutation_rate", "must be between 0 and 100"));
        }
        if !self.mutation_step.is_finite() {
            return Err(ConfigError::new("mutation_step", "must be a finite number"));
        }
        if !(0.0..=1.0).contains(&self.fitter_half_probability) {
            return Err(ConfigError::new(
                "fitter_half_probability",
                "must be between 0 and 1",
            ));
        }
        if self.max_generations == Some(0) {
            return Err(ConfigError::new("max_generations", "must be at least 1"));
        }
        if self.move_limit == Some(0) {
            return Err(ConfigError::new("move_limit", "must be at least 1"));
        }
        Ok(())
    }

    /// Per-gene mutation probability in `[0, 1]`.
    #[must_use]
    pub fn mutation_probability(&self) -> f64 {
        self.mutation_rate / 100.0
    }

    #[must_use]
    pub fn evolver(&self) -> GenerationEvolver {
        GenerationEvolver {
            mutation_rate: self.mutation_probability(),
            mutation_step: self.mutation_step,
            fitter_half_probability: self.fitter_half_probability,
        }
    }
}

/// Summary of an evaluated generation, passed to the progress callback.
#[derive(Debug)]
pub struct GenerationReport<'a> {
    generation: &'a Generation,
    fitness_stats: DescriptiveStats,
    gene_stats: Vec<(MoveFeature, DescriptiveStats)>,
}

impl<'a> GenerationReport<'a> {
    #[must_use]
    pub fn new(generation: &'a Generation) -> Self {
        Self {
            generation,
            fitness_stats: generation.compute_fitness_stats(),
            gene_stats: generation.compute_gene_stats(),
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.generation.index()
    }

    #[must_use]
    pub fn generation(&self) -> &'a Generation {
        self.generation
    }

    #[must_use]
    pub fn fittest(&self) -> &'a Bot {
        self.generation.fittest()
    }

    #[must_use]
    pub fn fitness_stats(&self) -> &DescriptiveStats {
        &self.fitness_stats
    }

    #[must_use]
    pub fn gene_stats(&self) -> &[(MoveFeature, DescriptiveStats)] {
        &self.gene_stats
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TrainingEnd {
    #[display("target score reached")]
    TargetReached,
    #[display("generation limit reached")]
    GenerationLimit,
}

#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    /// Number of generations evaluated
    pub generations: usize,
    /// Fittest bot of the last generation
    pub fittest: Bot,
    pub end: TrainingEnd,
}

/// Runs the genetic algorithm for one game configuration.
#[derive(Debug, Clone)]
pub struct Trainer {
    game_config: GameConfig,
    config: TrainingConfig,
}

impl Trainer {
    /// Creates a trainer after validating both configurations.
    pub fn new(game_config: GameConfig, config: TrainingConfig) -> Result<Self, ConfigError> {
        game_config.validate()?;
        config.validate()?;
        Ok(Self {
            game_config,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    #[must_use]
    pub fn game_config(&self) -> &GameConfig {
        &self.game_config
    }

    /// Evolves generations until the target score or the generation limit is
    /// reached.
    ///
    /// `on_generation` is called once per evaluated generation. All randomness
    /// (initial DNA, tile seeds, selection, crossover and mutation) comes from
    /// `rng`, so a seeded generator reproduces the whole run.
    pub fn run<R, F>(&self, rng: &mut R, mut on_generation: F) -> TrainingOutcome
    where
        R: Rng + ?Sized,
        F: FnMut(&GenerationReport<'_>),
    {
        let session_evaluator = SessionEvaluator::new(self.config.move_limit);
        let evolver = self.config.evolver();

        let mut generation = Generation::random(self.config.population_size, rng);
        loop {
            generation.evaluate_fitness(&self.game_config, &session_evaluator, rng);

            let report = GenerationReport::new(&generation);
            log_report(&report);
            on_generation(&report);

            let best = report.fittest().fitness().unwrap_or(0);
            let end = if best >= self.config.target_score {
                Some(TrainingEnd::TargetReached)
            } else if self
                .config
                .max_generations
                .is_some_and(|max| generation.index() + 1 >= max)
            {
                Some(TrainingEnd::GenerationLimit)
            } else {
                None
            };

            if let Some(end) = end {
                log::info!(
                    "Training finished after {} generations: {end}",
                    generation.index() + 1
                );
                return TrainingOutcome {
                    generations: generation.index() + 1,
                    fittest: generation.fittest().clone(),
                    end,
                };
            }

            generation = evolver.evolve(&generation, rng);
        }
    }
}

fn log_report(report: &GenerationReport<'_>) {
    log::info!(
        "Generation #{}: best {} ({})",
        report.index(),
        report.fittest().fitness().unwrap_or(0),
        report.fitness_stats()
    );
    for (i, bot) in report.generation().bots().iter().enumerate() {
        log::debug!(
            "  {i:2}: {:.3?} => {}",
            bot.dna().genes(),
            bot.fitness().unwrap_or(0)
        );
    }
    for (feature, stats) in report.gene_stats() {
        log::debug!("  {:>20}: {stats}", feature.id());
    }
}
