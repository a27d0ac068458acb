//! Genetic algorithm over heuristic DNA.
//!
//! # Algorithm Overview
//!
//! 1. **Evaluate Fitness** - Every bot plays one full game; its fitness is the final score
//! 2. **Parent Selection** - Recursive halving over the fitness-ordered generation
//! 3. **Crossover** - Uniform per gene
//! 4. **Mutation** - Fixed-step nudges with a per-gene probability
//! 5. **Replacement** - Children fill the whole next generation (no elitism)
//!
//! # Key Components
//!
//! - [`Bot`] - A DNA and the fitness it earned
//! - [`Generation`] - The bots evaluated together
//! - [`GenerationEvolver`] - Produces the next generation from an evaluated one
//!
//! # Parent Selection
//!
//! Parents are ordered by ascending fitness. The ordered slice is split in
//! half; with probability `fitter_half_probability` the search continues in
//! the fitter half, otherwise in the weaker half, until a single bot remains.
//! With the default probability of `0.65` the fittest bot of a generation of
//! 30 is picked about 12% of the time, while weak bots still get a chance.
//!
//! The second parent is drawn again while its fitness equals the first
//! parent's. When selection keeps landing on the same fitness (as it does with
//! a probability of `0.0` or `1.0`), the nearest bot of a different fitness is
//! taken, so a child never descends from two equally fit parents unless the
//! whole generation shares one fitness.
//!
//! # Parallelization
//!
//! Fitness is evaluated on scoped threads, one per bot. The tile seed of every
//! game is drawn from the caller's RNG before any thread starts, so results
//! do not depend on scheduling.

use std::{iter, thread};

use rand::Rng;
use solitaire_engine::{GameConfig, TileSeed};
use solitaire_evaluator::{
    dna::Dna, move_feature::MoveFeature, session_evaluator::SessionEvaluator,
    turn_evaluator::TurnEvaluator,
};
use solitaire_stats::descriptive::DescriptiveStats;

use crate::genes;

/// Redraws allowed when looking for a second parent of different fitness.
const MAX_PARENT_REDRAWS: usize = 64;

/// A candidate policy and its fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Bot {
    dna: Dna,
    fitness: Option<usize>,
}

impl Bot {
    #[must_use]
    pub const fn new(dna: Dna) -> Self {
        Self { dna, fitness: None }
    }

    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::new(Dna::random(rng))
    }

    #[must_use]
    pub const fn dna(&self) -> &Dna {
        &self.dna
    }

    /// Final score of the bot's game, or `None` before evaluation.
    #[must_use]
    pub const fn fitness(&self) -> Option<usize> {
        self.fitness
    }

    /// Plays one game seeded with `seed` and records its score.
    ///
    /// Fitness is computed once; later calls keep the first result.
    pub fn evaluate_fitness(
        &mut self,
        config: &GameConfig,
        session_evaluator: &SessionEvaluator,
        seed: TileSeed,
    ) -> usize {
        if let Some(fitness) = self.fitness {
            return fitness;
        }
        let player = TurnEvaluator::new(Box::new(self.dna));
        let fitness = session_evaluator.evaluate(config, seed, &player);
        self.fitness = Some(fitness);
        fitness
    }
}

/// The bots of one generation.
#[derive(Debug, Clone)]
pub struct Generation {
    index: usize,
    bots: Vec<Bot>,
}

impl Generation {
    /// Creates the first generation with `count` random bots.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn random<R>(count: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::from_bots(0, (0..count).map(|_| Bot::random(rng)).collect())
    }

    /// Creates a generation from existing bots.
    ///
    /// # Panics
    ///
    /// Panics if `bots` is empty.
    #[must_use]
    pub fn from_bots(index: usize, bots: Vec<Bot>) -> Self {
        assert!(!bots.is_empty(), "generation must contain at least one bot");
        Self { index, bots }
    }

    /// Zero-based position of this generation in the run.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Bots of this generation, in ascending fitness order once evaluated.
    #[must_use]
    pub fn bots(&self) -> &[Bot] {
        &self.bots
    }

    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.bots.iter().all(|bot| bot.fitness.is_some())
    }

    /// Evaluates fitness for all bots in parallel.
    ///
    /// One tile seed per bot is drawn from `rng` in bot order. Afterwards the
    /// bots are sorted by ascending fitness; equally fit bots keep their order.
    pub fn evaluate_fitness<R>(
        &mut self,
        config: &GameConfig,
        session_evaluator: &SessionEvaluator,
        rng: &mut R,
    ) where
        R: Rng + ?Sized,
    {
        let seeds = self
            .bots
            .iter()
            .map(|_| rng.random::<TileSeed>())
            .collect::<Vec<_>>();

        thread::scope(|s| {
            for (bot, seed) in iter::zip(&mut self.bots, seeds) {
                s.spawn(move || bot.evaluate_fitness(config, session_evaluator, seed));
            }
        });

        self.bots.sort_by_key(|bot| bot.fitness);
    }

    /// The bot with the highest fitness. Ties go to the later bot.
    #[must_use]
    pub fn fittest(&self) -> &Bot {
        self.bots
            .iter()
            .max_by_key(|bot| bot.fitness)
            .expect("generation is never empty")
    }

    /// Computes descriptive statistics for fitness across all bots.
    #[must_use]
    pub fn compute_fitness_stats(&self) -> DescriptiveStats {
        DescriptiveStats::from_counts(self.bots.iter().map(|bot| bot.fitness.unwrap_or(0)))
            .expect("generation is never empty")
    }

    /// Computes descriptive statistics for each gene across all bots, in
    /// [`MoveFeature::ALL`] order.
    #[must_use]
    pub fn compute_gene_stats(&self) -> Vec<(MoveFeature, DescriptiveStats)> {
        MoveFeature::ALL
            .into_iter()
            .map(|feature| {
                let genes = self.bots.iter().map(|bot| bot.dna.weight(feature));
                let stats = DescriptiveStats::new(genes).expect("generation is never empty");
                (feature, stats)
            })
            .collect()
    }
}

/// Controls how one generation turns into the next.
#[derive(Debug, Clone, Copy)]
pub struct GenerationEvolver {
    /// Probability of mutating each gene, in `[0, 1]`
    pub mutation_rate: f64,
    /// Amount added to or subtracted from a mutated gene
    pub mutation_step: f32,
    /// Probability of descending into the fitter half during parent selection
    pub fitter_half_probability: f64,
}

impl GenerationEvolver {
    /// Breeds a new generation of the same size from an evaluated one.
    ///
    /// # Panics
    ///
    /// Panics if `parents` has not been evaluated.
    #[must_use]
    pub fn evolve<R>(&self, parents: &Generation, rng: &mut R) -> Generation
    where
        R: Rng + ?Sized,
    {
        assert!(parents.is_evaluated(), "parents must be evaluated first");
        assert!(parents.bots.is_sorted_by_key(|bot| bot.fitness));

        let parents_bots = parents.bots();
        let mut children = Vec::with_capacity(parents_bots.len());
        while children.len() < parents_bots.len() {
            let (p1, p2) = self.select_parents(parents_bots, rng);
            let mut child = genes::crossover(&p1.dna, &p2.dna, rng);
            genes::mutate(&mut child, self.mutation_rate, self.mutation_step, rng);
            children.push(Bot::new(child));
        }

        Generation::from_bots(parents.index + 1, children)
    }

    /// Selects the two parents of one child.
    ///
    /// The second parent is redrawn while its fitness equals the first one's.
    /// If the redraws run out, the bot closest to the first parent in fitness
    /// order with a different fitness is taken instead. Only a generation that
    /// shares a single fitness yields two equally fit parents.
    ///
    /// `parents` must be sorted by ascending fitness.
    ///
    /// # Panics
    ///
    /// Panics if `parents` is empty.
    pub fn select_parents<'a, R>(&self, parents: &'a [Bot], rng: &mut R) -> (&'a Bot, &'a Bot)
    where
        R: Rng + ?Sized,
    {
        let p1 = self.select_parent(parents, rng);
        let mut p2 = self.select_parent(parents, rng);
        if parents.first().map(Bot::fitness) == parents.last().map(Bot::fitness) {
            return (p1, p2);
        }
        for _ in 0..MAX_PARENT_REDRAWS {
            if p2.fitness != p1.fitness {
                return (p1, p2);
            }
            p2 = self.select_parent(parents, rng);
        }
        if p2.fitness == p1.fitness {
            p2 = nearest_other_fitness(parents, p1).unwrap_or(p2);
        }
        (p1, p2)
    }

    /// Selects a parent by recursive halving over bots in ascending fitness order.
    ///
    /// # Panics
    ///
    /// Panics if `parents` is empty.
    pub fn select_parent<'a, R>(&self, parents: &'a [Bot], rng: &mut R) -> &'a Bot
    where
        R: Rng + ?Sized,
    {
        let mut candidates = parents;
        while candidates.len() > 1 {
            let (weaker, fitter) = candidates.split_at(candidates.len() / 2);
            candidates = if rng.random_bool(self.fitter_half_probability) {
                fitter
            } else {
                weaker
            };
        }
        &candidates[0]
    }
}

/// The bot next to `bot`'s fitness group in `parents`, preferring the fitter side.
fn nearest_other_fitness<'a>(parents: &'a [Bot], bot: &Bot) -> Option<&'a Bot> {
    let above = parents.partition_point(|b| b.fitness <= bot.fitness);
    let below = parents.partition_point(|b| b.fitness < bot.fitness);
    parents
        .get(above)
        .or_else(|| below.checked_sub(1).map(|i| &parents[i]))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn evaluated(fitness: &[usize]) -> Generation {
        let bots = fitness
            .iter()
            .enumerate()
            .map(|(i, f)| {
                #[expect(clippy::cast_precision_loss)]
                let dna = Dna::from_genes([i as f32; 7]);
                Bot {
                    dna,
                    fitness: Some(*f),
                }
            })
            .collect();
        Generation::from_bots(0, bots)
    }

    fn evolver(fitter_half_probability: f64) -> GenerationEvolver {
        GenerationEvolver {
            mutation_rate: 0.0,
            mutation_step: 0.1,
            fitter_half_probability,
        }
    }

    #[test]
    fn test_select_from_single_parent() {
        let mut rng = Pcg32::seed_from_u64(0);
        let generation = evaluated(&[17]);
        for _ in 0..10 {
            let parent = evolver(0.65).select_parent(generation.bots(), &mut rng);
            assert_eq!(parent.fitness(), Some(17));
        }
    }

    #[test]
    fn test_select_always_fitter_half() {
        let mut rng = Pcg32::seed_from_u64(1);
        let generation = evaluated(&[1, 2, 3, 4, 5, 6, 7]);
        let parent = evolver(1.0).select_parent(generation.bots(), &mut rng);
        assert_eq!(parent.fitness(), Some(7));
        let parent = evolver(0.0).select_parent(generation.bots(), &mut rng);
        assert_eq!(parent.fitness(), Some(1));
    }

    #[test]
    fn test_selection_favors_fitter_bots() {
        let mut rng = Pcg32::seed_from_u64(2);
        let generation = evaluated(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let mut upper = 0;
        for _ in 0..1000 {
            let parent = evolver(0.65).select_parent(generation.bots(), &mut rng);
            if parent.fitness() > Some(4) {
                upper += 1;
            }
        }
        assert!((550..750).contains(&upper), "upper half picked {upper} times");
    }

    #[test]
    fn test_evolve_keeps_size_without_elitism() {
        let mut rng = Pcg32::seed_from_u64(3);
        let parents = evaluated(&[10, 20, 30, 40, 50]);
        let children = evolver(0.65).evolve(&parents, &mut rng);

        assert_eq!(children.index(), 1);
        assert_eq!(children.bots().len(), 5);
        assert!(children.bots().iter().all(|bot| bot.fitness().is_none()));
    }

    #[test]
    fn test_evolve_with_equal_fitness_terminates() {
        let mut rng = Pcg32::seed_from_u64(4);
        let parents = evaluated(&[5, 5, 5]);
        let children = evolver(1.0).evolve(&parents, &mut rng);
        // Always the last parent, crossed with itself.
        assert!(
            children
                .bots()
                .iter()
                .all(|bot| bot.dna() == parents.bots()[2].dna())
        );
    }

    #[test]
    fn test_deterministic_selection_still_pairs_different_fitness() {
        let mut rng = Pcg32::seed_from_u64(6);
        let parents = evaluated(&[0, 10, 20, 30]);

        let (p1, p2) = evolver(1.0).select_parents(parents.bots(), &mut rng);
        assert_eq!((p1.fitness(), p2.fitness()), (Some(30), Some(20)));
        let (p1, p2) = evolver(0.0).select_parents(parents.bots(), &mut rng);
        assert_eq!((p1.fitness(), p2.fitness()), (Some(0), Some(10)));

        let children = evolver(1.0).evolve(&parents, &mut rng);
        for child in children.bots() {
            assert!(child.dna().genes().iter().all(|g| [2.0, 3.0].contains(g)));
        }
        let mut genes = children.bots().iter().flat_map(|bot| bot.dna().genes());
        assert!(genes.any(|g| g < 3.0));
    }

    #[test]
    fn test_nearest_other_fitness_skips_equal_group() {
        let parents = evaluated(&[1, 4, 4, 4, 9]);
        let bots = parents.bots();
        assert_eq!(nearest_other_fitness(bots, &bots[2]).map(Bot::fitness), Some(Some(9)));
        assert_eq!(nearest_other_fitness(bots, &bots[4]).map(Bot::fitness), Some(Some(4)));
        assert_eq!(nearest_other_fitness(&bots[1..4], &bots[1]), None);
    }

    #[test]
    fn test_children_inherit_parent_genes() {
        let mut rng = Pcg32::seed_from_u64(5);
        let parents = evaluated(&[1, 2, 3, 4]);
        let children = evolver(0.5).evolve(&parents, &mut rng);
        for child in children.bots() {
            assert!(child.dna().genes().iter().all(|g| (0.0..4.0).contains(g)));
        }
    }

    #[test]
    fn test_seeded_generation_matches_replayed_games() {
        let config = GameConfig::default();
        let session_evaluator = SessionEvaluator::new(Some(2000));
        let dnas = [
            Dna::from_genes([1.0, -0.3, 0.5, -0.2, -0.9, -0.6, 0.0]),
            Dna::from_genes([0.2, 0.4, -0.1, 0.3, -0.2, 0.8, 0.5]),
            Dna::from_genes([-0.5, -0.5, -0.5, -0.5, -0.5, -0.5, -0.5]),
            Dna::from_genes([0.7, -0.8, 0.9, -0.1, -1.0, -0.2, 0.3]),
        ];

        let mut generation = Generation::from_bots(0, dnas.iter().copied().map(Bot::new).collect());
        generation.evaluate_fitness(&config, &session_evaluator, &mut Pcg32::seed_from_u64(99));

        let mut rng = Pcg32::seed_from_u64(99);
        let replayed = dnas
            .iter()
            .map(|dna| {
                let seed = rng.random::<TileSeed>();
                let player = TurnEvaluator::new(Box::new(*dna));
                (*dna, session_evaluator.evaluate(&config, seed, &player))
            })
            .collect::<Vec<_>>();

        for (dna, fitness) in &replayed {
            let bot = generation.bots().iter().find(|b| b.dna() == dna).unwrap();
            assert_eq!(bot.fitness(), Some(*fitness));
        }
        let best = replayed.iter().map(|(_, f)| *f).max();
        assert_eq!(generation.fittest().fitness(), best);
        assert!(generation.bots().is_sorted_by_key(|bot| bot.fitness()));
    }
}
