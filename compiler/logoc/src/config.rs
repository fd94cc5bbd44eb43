//! Runtime configuration.
//!
//! Values come from the environment first (`LOGO_KEYWORDS`,
//! `LOGO_MAX_STEP`) and are then overridden by command-line flags
//! (`--keywords=<set>`, `--max-step=<n>`).

use logo_eval::{KeywordSet, UnknownKeywordSet};
use thiserror::Error;

/// Keyword table to analyze programs with (`fr` or `en`).
pub const KEYWORDS_VAR: &str = "LOGO_KEYWORDS";

/// Largest magnitude accepted by the turtle primitives.
pub const MAX_STEP_VAR: &str = "LOGO_MAX_STEP";

pub const DEFAULT_MAX_STEP: f64 = 1000.0;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Keywords(#[from] UnknownKeywordSet),
    #[error("invalid max step `{0}` (expected a positive number)")]
    InvalidMaxStep(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub keywords: KeywordSet,
    pub max_step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            keywords: KeywordSet::default(),
            max_step: DEFAULT_MAX_STEP,
        }
    }
}

impl Config {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source; unset variables keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        if let Some(keywords) = lookup(KEYWORDS_VAR) {
            config.keywords = keywords.trim().parse()?;
        }
        if let Some(max_step) = lookup(MAX_STEP_VAR) {
            config.max_step = parse_max_step(&max_step)?;
        }
        Ok(config)
    }

    /// Apply one command-line flag. Returns `false` when `arg` is not a
    /// configuration flag.
    pub fn apply_arg(&mut self, arg: &str) -> Result<bool, ConfigError> {
        if let Some(keywords) = arg.strip_prefix("--keywords=") {
            self.keywords = keywords.parse()?;
        } else if let Some(max_step) = arg.strip_prefix("--max-step=") {
            self.max_step = parse_max_step(max_step)?;
        } else {
            return Ok(false);
        }
        Ok(true)
    }
}

fn parse_max_step(text: &str) -> Result<f64, ConfigError> {
    match text.trim().parse::<f64>() {
        Ok(step) if step.is_finite() && step > 0.0 => Ok(step),
        _ => Err(ConfigError::InvalidMaxStep(text.to_string())),
    }
}
