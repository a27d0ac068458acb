use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use solitaire_evaluator::dna::Dna;

use crate::util;

/// A trained DNA as stored on disk.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AiModel {
    pub name: String,
    pub trained_at: DateTime<Utc>,
    /// Generations evaluated during training
    pub generations: usize,
    /// Score of the game that earned the DNA its place
    pub final_fitness: usize,
    pub dna: Dna,
}

impl AiModel {
    pub fn open<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        util::read_json_file("AI model", path)
    }

    pub fn save(&self, path: Option<&Path>) -> anyhow::Result<()> {
        util::write_json_file("AI model", self, path)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    #[test]
    fn test_json_layout() {
        let model = AiModel {
            name: "genetic".to_owned(),
            trained_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
            generations: 12,
            final_fitness: 10_240,
            dna: Dna::from_genes([1.0, -0.5, 0.25, 0.0, -1.0, -0.75, 0.5]),
        };
        let value = serde_json::to_value(&model).unwrap();

        assert_eq!(value["name"], "genetic");
        assert_eq!(value["trained_at"], "2026-01-02T03:04:05Z");
        assert_eq!(value["generations"], 12);
        assert_eq!(value["final_fitness"], 10_240);
        assert_eq!(value["dna"]["num_discontinuities"], -1.0);
        assert_eq!(value["dna"]["fill_ratio"], 0.5);

        let parsed: AiModel = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, model);
    }
}
