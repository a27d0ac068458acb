//! Weight vectors for the linear move-scoring policy.
//!
//! A [`Dna`] holds one weight per [`MoveFeature`]. The score of a move is the
//! dot product of the scored weights with the move's features:
//!
//! ```text
//! score = w_merges·merges + w_height_largest·largest + w_height_lowest·lowest
//!       + w_height_average·average + w_num_discontinuities·discontinuities
//!       + w_num_discards·discards
//! ```
//!
//! No normalization is applied, so weights are directly comparable only
//! within a single DNA.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    move_analysis::MoveAnalysis, move_evaluator::MoveEvaluator, move_feature::MoveFeature,
};

/// Feature weights of one heuristic policy.
///
/// # Example
///
/// ```
/// use solitaire_evaluator::{dna::Dna, move_feature::MoveFeature};
///
/// let dna = Dna::from_genes([1.0, 0.0, 0.0, 0.0, -0.5, -0.2, 0.0]);
/// assert_eq!(dna.weight(MoveFeature::NumDiscontinuities), -0.5);
///
/// let json = serde_json::to_string(&dna).unwrap();
/// assert!(json.contains("\"merges\":1.0"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dna {
    pub merges: f32,
    pub height_largest: f32,
    pub height_lowest: f32,
    pub height_average: f32,
    pub num_discontinuities: f32,
    pub num_discards: f32,
    pub fill_ratio: f32,
}

impl Dna {
    /// Creates a DNA with every weight drawn uniformly from `[-1, 1]`.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::from_genes(std::array::from_fn(|_| rng.random_range(-1.0..=1.0)))
    }

    /// Builds a DNA from weights in [`MoveFeature::ALL`] order.
    #[must_use]
    pub const fn from_genes(genes: [f32; MoveFeature::LEN]) -> Self {
        let [
            merges,
            height_largest,
            height_lowest,
            height_average,
            num_discontinuities,
            num_discards,
            fill_ratio,
        ] = genes;
        Self {
            merges,
            height_largest,
            height_lowest,
            height_average,
            num_discontinuities,
            num_discards,
            fill_ratio,
        }
    }

    /// Weights in [`MoveFeature::ALL`] order.
    #[must_use]
    pub const fn genes(&self) -> [f32; MoveFeature::LEN] {
        [
            self.merges,
            self.height_largest,
            self.height_lowest,
            self.height_average,
            self.num_discontinuities,
            self.num_discards,
            self.fill_ratio,
        ]
    }

    #[must_use]
    pub const fn weight(&self, feature: MoveFeature) -> f32 {
        self.genes()[feature.index()]
    }

    /// Scores a move as the weighted sum of its scored features.
    #[must_use]
    pub fn evaluate(&self, analysis: &MoveAnalysis) -> f32 {
        MoveFeature::SCORED
            .into_iter()
            .map(|f| self.weight(f) * f.value(analysis))
            .sum()
    }
}

impl MoveEvaluator for Dna {
    fn evaluate_move(&self, analysis: &MoveAnalysis) -> f32 {
        self.evaluate(analysis)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;
    use solitaire_engine::{DiscardPile, GameModel, PileId, Stack, Tile, TileQueue, TileSeed};

    use super::*;

    fn analysis() -> MoveAnalysis {
        let tile = |v| Tile::new(v).unwrap();
        let stacks = vec![
            Stack::with_tiles(PileId::new(0), 4, [tile(8), tile(4)]),
            Stack::with_tiles(PileId::new(1), 4, [tile(2), tile(16)]),
        ];
        let game = GameModel::from_parts(
            stacks,
            DiscardPile::with_discards(PileId::new(2), 2, 1),
            TileQueue::with_tiles([tile(4), tile(2)], TileSeed::from_bytes([0; 16])),
        );
        // stacks become [16] and [2, 16]
        MoveAnalysis::from_game(&game, PileId::new(0))
    }

    #[test]
    fn test_random_weights_in_range() {
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..100 {
            let dna = Dna::random(&mut rng);
            assert!(dna.genes().iter().all(|w| (-1.0..=1.0).contains(w)));
        }
    }

    #[test]
    fn test_genes_roundtrip_order() {
        let genes = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];
        let dna = Dna::from_genes(genes);
        assert_eq!(dna.genes(), genes);
        assert_eq!(dna.weight(MoveFeature::FillRatio), 0.7);
        assert_eq!(dna.weight(MoveFeature::Merges), 0.1);
    }

    #[test]
    fn test_evaluate_is_dot_product() {
        let analysis = analysis();
        // merges 2, largest 2, lowest 1, average 1.5, discontinuities 1, discards 1
        let dna = Dna::from_genes([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 100.0]);
        let expected = 2.0 + 2.0 * 2.0 + 3.0 + 4.0 * 1.5 + 5.0 + 6.0;
        assert!((dna.evaluate(&analysis) - expected).abs() < 1e-5);
    }

    #[test]
    fn test_fill_ratio_weight_does_not_score() {
        let analysis = analysis();
        let a = Dna::from_genes([0.5, -0.5, 0.2, 0.1, -1.0, -0.3, 0.0]);
        let b = Dna { fill_ratio: 1.0, ..a };
        assert_eq!(a.evaluate(&analysis), b.evaluate(&analysis));
    }

    #[test]
    fn test_deserialize_rejects_unknown_gene() {
        let json = r#"{"merges":1,"height_largest":0,"height_lowest":0,"height_average":0,
            "num_discontinuities":0,"num_discards":0,"fill_ratio":0,"bogus":1}"#;
        assert!(serde_json::from_str::<Dna>(json).is_err());
    }
}
