//! Gene operations for the genetic algorithm.
//!
//! A gene is one weight of a [`Dna`]. These operations are used by
//! [`GenerationEvolver`](crate::genetic::GenerationEvolver) to create children.
//!
//! # Operations
//!
//! - **Crossover**: [`crossover`] takes each gene from either parent with equal
//!   probability
//! - **Mutation**: [`mutate`] nudges genes up or down by a fixed step
//!
//! Weights are never clamped or normalized, so they can drift outside the
//! initial `[-1, 1]` range over many generations.

use rand::Rng;
use solitaire_evaluator::dna::Dna;

/// Uniform crossover: every gene comes from `p1` or `p2` with equal probability.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg32;
/// use solitaire_evaluator::dna::Dna;
/// use solitaire_training::genes;
///
/// let mut rng = Pcg32::seed_from_u64(0);
/// let p1 = Dna::from_genes([1.0; 7]);
/// let p2 = Dna::from_genes([-1.0; 7]);
/// let child = genes::crossover(&p1, &p2, &mut rng);
/// assert!(child.genes().iter().all(|g| g.abs() == 1.0));
/// ```
pub fn crossover<R>(p1: &Dna, p2: &Dna, rng: &mut R) -> Dna
where
    R: Rng + ?Sized,
{
    let (g1, g2) = (p1.genes(), p2.genes());
    Dna::from_genes(std::array::from_fn(|i| {
        if rng.random_bool(0.5) { g1[i] } else { g2[i] }
    }))
}

/// Mutates genes in place.
///
/// Each gene is, with probability `rate`, shifted by `+step` or `-step` with
/// equal probability.
///
/// # Panics
///
/// Panics if `rate` is outside `[0, 1]`.
pub fn mutate<R>(dna: &mut Dna, rate: f64, step: f32, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let mut genes = dna.genes();
    for gene in &mut genes {
        if rng.random_bool(rate) {
            if rng.random_bool(0.5) {
                *gene += step;
            } else {
                *gene -= step;
            }
        }
    }
    *dna = Dna::from_genes(genes);
}
