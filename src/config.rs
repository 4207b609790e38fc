use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

/// Default log filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "stickyboard=warn";

/// Session configuration, optionally loaded from a YAML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Seed for the color picker. Unseeded boards draw from OS entropy.
    pub seed: Option<u64>,
    /// Render the board as JSON instead of text.
    pub json: bool,
    /// tracing-subscriber filter directive.
    pub log_filter: Option<String>,
    /// Prompt printed before each gesture on an interactive terminal.
    pub prompt: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            seed: None,
            json: false,
            log_filter: None,
            prompt: "> ".to_string(),
        }
    }
}

impl BoardConfig {
    /// Load a config file. Missing keys fall back to their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: BoardConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(filter) = &self.log_filter {
            if filter.trim().is_empty() {
                return Err(BoardError::Config("log_filter must not be empty".to_string()));
            }
        }
        Ok(())
    }

    /// Filter directive to hand to the subscriber.
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
