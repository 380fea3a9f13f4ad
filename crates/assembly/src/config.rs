//! Engine configuration.
//!
//! Read from JSON; every field is optional and falls back to its default:
//!
//! ```json
//! {
//!   "strategy": "content-based",
//!   "top_k": 3,
//!   "weights": { "genre": 0.3, "producer": 0.5 },
//!   "min_score": 0.0,
//!   "high_rating_threshold": 4.0,
//!   "min_support": 1,
//!   "ranking_table": null
//! }
//! ```

use crate::error::{ConfigError, Result};
use pipeline::{SimilarityWeights, DEFAULT_TOP_K};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which filter the engine delegates to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    #[default]
    ContentBased,
    Collaborative,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::ContentBased, StrategyKind::Collaborative];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::ContentBased => "content-based",
            StrategyKind::Collaborative => "collaborative",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| ConfigError::UnknownStrategy(s.to_string()))
    }
}

/// Everything the assembly step needs to build an engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub strategy: StrategyKind,

    /// Number of titles returned per request
    pub top_k: usize,

    /// Content-based: attribute weights
    pub weights: SimilarityWeights,

    /// Content-based: candidates scoring below this are dropped
    pub min_score: f32,

    /// Collaborative: minimum rating that counts as "liked"
    pub high_rating_threshold: f32,

    /// Collaborative: minimum number of shared fans
    pub min_support: u32,

    /// Collaborative: precomputed seed -> titles JSON table. When unset the
    /// ranking is computed from the catalog's ratings.
    pub ranking_table: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            top_k: DEFAULT_TOP_K,
            weights: SimilarityWeights::default(),
            min_score: 0.0,
            high_rating_threshold: 4.0,
            min_support: 1,
            ranking_table: None,
        }
    }
}

impl EngineConfig {
    /// Load and validate a JSON configuration file.
    ///
    /// A relative `ranking_table` is resolved against the config file's
    /// directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_json_str(&text)?;
        if let (Some(table), Some(base)) = (config.ranking_table.as_mut(), path.parent()) {
            if table.is_relative() {
                *table = base.join(&*table);
            }
        }
        Ok(config)
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Check values serde can't: positive K, finite non-negative weights
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(ConfigError::Invalid("top_k must be at least 1".to_string()));
        }

        for (name, value) in [
            ("weights.genre", self.weights.genre),
            ("weights.producer", self.weights.producer),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a finite, non-negative number (got {})",
                    name, value
                )));
            }
        }

        if !self.min_score.is_finite() {
            return Err(ConfigError::Invalid("min_score must be finite".to_string()));
        }

        if !(1.0..=5.0).contains(&self.high_rating_threshold) {
            return Err(ConfigError::Invalid(format!(
                "high_rating_threshold must be between 1.0 and 5.0 (got {})",
                self.high_rating_threshold
            )));
        }

        Ok(())
    }
}
