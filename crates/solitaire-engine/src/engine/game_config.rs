use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Board layout of a game.
///
/// Missing fields fall back to the defaults (4 stacks of 8 tiles, 2 discards)
/// when deserializing.
///
/// # Example
///
/// ```
/// use solitaire_engine::GameConfig;
///
/// let config: GameConfig = serde_json::from_str(r#"{ "num_stacks": 3 }"#).unwrap();
/// assert_eq!(config.num_stacks, 3);
/// assert_eq!(config.max_stack_size, GameConfig::default().max_stack_size);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of merging stacks.
    pub num_stacks: usize,
    /// Capacity of each stack.
    pub max_stack_size: usize,
    /// Capacity of the discard pile.
    pub max_discards: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_stacks: 4,
            max_stack_size: 8,
            max_discards: 2,
        }
    }
}

impl GameConfig {
    /// Checks that the layout can host a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_stacks == 0 {
            return Err(ConfigError::new("num_stacks", "must be at least 1"));
        }
        if self.max_stack_size == 0 {
            return Err(ConfigError::new("max_stack_size", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_layout() {
        let config = GameConfig {
            num_stacks: 0,
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("num_stacks"));
    }
}
