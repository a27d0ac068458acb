//! Training system for evolving move-scoring DNA with a genetic algorithm.
//!
//! # How Training Works
//!
//! 1. **Generation** - Create bots with random DNA (weights in `[-1, 1]`)
//! 2. **Evaluation** - Each bot plays one full game; the final score is its fitness
//! 3. **Selection** - Pick parents by recursive halving, favoring the fitter half
//! 4. **Reproduction** - Uniform crossover and fixed-step mutation build the next generation
//! 5. **Repeat** - Continue until a bot reaches the target score
//!
//! # Architecture
//!
//! ```text
//! Trainer
//!     ↓ evolves
//! Generation of Bots (DNA + fitness)
//!     ↓ DNA used by
//! Turn Evaluator (solitaire-evaluator)
//!     ↓ played by
//! Session Evaluator (final score = fitness)
//!     ↓ guides
//! Selection & Reproduction
//! ```
//!
//! # Example
//!
//! ```rust
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg32;
//! use solitaire_engine::GameConfig;
//! use solitaire_training::trainer::{Trainer, TrainingConfig};
//!
//! let config = TrainingConfig {
//!     population_size: 4,
//!     max_generations: Some(2),
//!     move_limit: Some(100),
//!     ..TrainingConfig::default()
//! };
//! let trainer = Trainer::new(GameConfig::default(), config).unwrap();
//! let outcome = trainer.run(&mut Pcg32::seed_from_u64(0), |report| {
//!     println!("generation {}: {}", report.index(), report.fitness_stats());
//! });
//! println!("best DNA: {:?}", outcome.fittest.dna());
//! ```
//!
//! # Current Limitations
//!
//! - **Single game per bot**: Fitness is the score of one game, so a lucky tile
//!   sequence can promote a weak DNA
//! - **No elitism**: The fittest bot is not carried over, and its genes can be
//!   lost between generations

pub mod genes;
pub mod genetic;
pub mod trainer;
