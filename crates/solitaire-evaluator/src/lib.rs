//! Move evaluation and playing policies for merge solitaire.
//!
//! This crate implements a three-level evaluation architecture:
//!
//! 1. **Move Evaluation** ([`move_evaluator`]) - Scores a single hypothetical
//!    move from the features of the position it leads to.
//!
//! 2. **Turn Evaluation** ([`turn_evaluator`]) - Tries every legal pile for the
//!    next tile and picks the highest-scoring one.
//!
//! 3. **Session Evaluation** ([`session_evaluator`]) - Plays whole games with a
//!    [`Player`](turn_evaluator::Player) and reports the final score, which the
//!    genetic trainer uses as fitness.
//!
//! # Architecture
//!
//! ```text
//! Session Evaluation (fitness for training)
//!     ↓ uses
//! Turn Evaluation (select best pile)
//!     ↓ uses
//! Move Evaluation (score single move)
//! ```
//!
//! # Supporting Modules
//!
//! - [`move_analysis`] - Plays a move on a copy of the game and measures the result
//! - [`move_feature`] - Named features read from a move analysis
//! - [`dna`] - Learned feature weights, the evaluator trained by the genetic algorithm
//! - [`basic_bot`] - A fixed rule-based player used as a baseline
//!
//! # Example
//!
//! ```rust
//! use solitaire_engine::{GameConfig, GameModel, TileSeed};
//! use solitaire_evaluator::{
//!     dna::Dna, session_evaluator::SessionEvaluator, turn_evaluator::TurnEvaluator,
//! };
//!
//! let player = TurnEvaluator::new(Box::new(Dna::from_genes([
//!     1.0, -0.4, 0.6, -0.3, -0.9, -0.7, 0.0,
//! ])));
//! let mut game = GameModel::with_seed(&GameConfig::default(), TileSeed::from_bytes([8; 16]));
//! let outcome = SessionEvaluator::new(Some(1000)).play_session(&mut game, &player, |_, _| {});
//! println!("{:?}: {}", outcome.end(), outcome.score());
//! ```

pub mod basic_bot;
pub mod dna;
pub mod move_analysis;
pub mod move_evaluator;
pub mod move_feature;
pub mod session_evaluator;
pub mod turn_evaluator;
