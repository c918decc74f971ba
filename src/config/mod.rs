use std::env;

use crate::workflows::interview::scoring::ScoringConfig;

/// Top-level configuration for the reporting engine.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub scoring: ScoringConfig,
}

impl AppConfig {
    /// Reads `REPORT_*` overrides from the environment, falling back to the
    /// shipped rubric defaults.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = ScoringConfig::default();
        let scoring = ScoringConfig {
            gap_threshold: read_score("REPORT_GAP_THRESHOLD", defaults.gap_threshold)?,
            high_priority_threshold: read_score(
                "REPORT_HIGH_PRIORITY_THRESHOLD",
                defaults.high_priority_threshold,
            )?,
            strength_threshold: read_score(
                "REPORT_STRENGTH_THRESHOLD",
                defaults.strength_threshold,
            )?,
            max_gaps: read_count("REPORT_MAX_GAPS", defaults.max_gaps)?,
            competency_target: read_score("REPORT_COMPETENCY_TARGET", defaults.competency_target)?,
        };

        Ok(Self { scoring })
    }
}

fn read_score(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidNumber { key }),
        Err(_) => Ok(default),
    }
}

fn read_count(key: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidCount { key }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a number")]
    InvalidNumber { key: &'static str },
    #[error("{key} must be a non-negative integer")]
    InvalidCount { key: &'static str },
}
