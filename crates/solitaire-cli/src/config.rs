use std::path::Path;

use serde::{Deserialize, Serialize};
use solitaire_engine::GameConfig;
use solitaire_training::trainer::TrainingConfig;

use crate::util;

/// Contents of the optional configuration file.
///
/// ```json
/// {
///   "game": { "num_stacks": 4, "max_stack_size": 8, "max_discards": 2 },
///   "training": { "population_size": 30, "mutation_rate": 10, "target_score": 10000 }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub game: GameConfig,
    pub training: TrainingConfig,
}

impl AppConfig {
    /// Reads the configuration file, or returns the defaults if no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => util::read_json_file("config", path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r#"{ "training": { "population_size": 8, "max_generations": 50 } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.game, GameConfig::default());
        assert_eq!(config.training.population_size, 8);
        assert_eq!(config.training.max_generations, Some(50));
        assert_eq!(config.training.target_score, TrainingConfig::default().target_score);
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }
}
