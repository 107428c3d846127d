//! Workflow configuration.
//!
//! All fields have defaults, so an empty JSON object is a valid config.
//! Unknown keys are rejected to catch typos early.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::InterviewDuration;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct TriageConfig {
    /// Round label shown in the scheduler dialog when accepting.
    pub first_round_label: String,
    /// Used when the recruiter leaves the meeting link empty.
    pub placeholder_link: String,
    pub default_duration: InterviewDuration,
    pub evaluation_delay_ms: u64,
    pub score_range: ScoreRange,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            first_round_label: "Initial Screening".into(),
            placeholder_link: "https://meet.google.com/new".into(),
            default_duration: InterviewDuration::Minutes60,
            evaluation_delay_ms: 2000,
            score_range: ScoreRange { min: 65, max: 95 },
        }
    }
}

impl TriageConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TriageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn evaluation_delay(&self) -> Duration {
        Duration::from_millis(self.evaluation_delay_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.first_round_label.trim().is_empty() {
            return Err(ConfigError::Invalid("firstRoundLabel must not be empty".into()));
        }
        if self.placeholder_link.trim().is_empty() {
            return Err(ConfigError::Invalid("placeholderLink must not be empty".into()));
        }
        let ScoreRange { min, max } = self.score_range;
        if min > max || max > 100 {
            return Err(ConfigError::Invalid(format!(
                "scoreRange {min}..={max} must be ordered and within 0..=100"
            )));
        }
        Ok(())
    }
}
