//! Named move features that a [`Dna`](crate::dna::Dna) assigns weights to.
//!
//! Each feature reads one value out of a [`MoveAnalysis`]. The feature list is
//! fixed; its order is the gene order used by the genetic algorithm.
//!
//! | Feature | Value | Scored |
//! |---------|-------|--------|
//! | `merges` | merges caused by the move | yes |
//! | `height_largest` | tallest stack | yes |
//! | `height_lowest` | shortest stack | yes |
//! | `height_average` | mean stack height | yes |
//! | `num_discontinuities` | inverted tile pairs | yes |
//! | `num_discards` | discard pile counter | yes |
//! | `fill_ratio` | occupied share of all slots | no |
//!
//! `fill_ratio` is carried as a gene and inherited like the others, but it does
//! not contribute to the move score.

use std::fmt;

use crate::move_analysis::MoveAnalysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveFeature {
    Merges,
    HeightLargest,
    HeightLowest,
    HeightAverage,
    NumDiscontinuities,
    NumDiscards,
    FillRatio,
}

impl MoveFeature {
    pub const LEN: usize = 7;

    /// All features in gene order.
    pub const ALL: [Self; Self::LEN] = [
        Self::Merges,
        Self::HeightLargest,
        Self::HeightLowest,
        Self::HeightAverage,
        Self::NumDiscontinuities,
        Self::NumDiscards,
        Self::FillRatio,
    ];

    /// Features that contribute to the move score.
    pub const SCORED: [Self; 6] = [
        Self::Merges,
        Self::HeightLargest,
        Self::HeightLowest,
        Self::HeightAverage,
        Self::NumDiscontinuities,
        Self::NumDiscards,
    ];

    /// Position of the feature in [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable identifier used in model files.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Merges => "merges",
            Self::HeightLargest => "height_largest",
            Self::HeightLowest => "height_lowest",
            Self::HeightAverage => "height_average",
            Self::NumDiscontinuities => "num_discontinuities",
            Self::NumDiscards => "num_discards",
            Self::FillRatio => "fill_ratio",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }

    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn value(self, analysis: &MoveAnalysis) -> f32 {
        match self {
            Self::Merges => analysis.num_merges() as f32,
            Self::HeightLargest => analysis.largest_height() as f32,
            Self::HeightLowest => analysis.lowest_height() as f32,
            Self::HeightAverage => analysis.average_height(),
            Self::NumDiscontinuities => analysis.num_discontinuities() as f32,
            Self::NumDiscards => analysis.num_discards() as f32,
            Self::FillRatio => analysis.fill_ratio(),
        }
    }
}

impl fmt::Display for MoveFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_gene_order() {
        for (i, feature) in MoveFeature::ALL.into_iter().enumerate() {
            assert_eq!(feature.index(), i);
            assert_eq!(MoveFeature::from_id(feature.id()), Some(feature));
        }
        assert_eq!(MoveFeature::from_id("unknown"), None);
    }

    #[test]
    fn test_fill_ratio_is_not_scored() {
        assert!(!MoveFeature::SCORED.contains(&MoveFeature::FillRatio));
        assert_eq!(MoveFeature::SCORED.len(), MoveFeature::LEN - 1);
    }
}
