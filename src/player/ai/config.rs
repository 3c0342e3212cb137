use crate::core::Difficulty;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// AI tuning, loaded once from `ai_config.json` next to the binary if the
/// file exists, otherwise built from `Default`. The defaults match the
/// reference configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIConfig {
    pub default_difficulty: Difficulty,
    pub evaluation: EvaluationConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Flat bonus per owned corner.
    pub corner_weight: f64,
    /// Cost per owned square adjacent to a corner.
    pub corner_adjacent_penalty: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub medium_depth: u8,
    pub hard_depth: u8,
}

impl AIConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string("ai_config.json")?;
        let config: AIConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| Self::default())
    }

    /// Cached config; the file is read at most once per process.
    pub fn get() -> &'static AIConfig {
        static CONFIG: Lazy<AIConfig> = Lazy::new(AIConfig::load_or_default);
        &CONFIG
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            default_difficulty: Difficulty::Medium,
            evaluation: EvaluationConfig {
                corner_weight: 25.0,
                corner_adjacent_penalty: 12.5,
            },
            search: SearchConfig {
                medium_depth: 3,
                hard_depth: 4,
            },
        }
    }
}
