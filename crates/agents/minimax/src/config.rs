//! Search agent configuration.
//!
//! Loadable from TOML; every field has a default so a partial file works.
//! Validation happens once, at agent construction, so a bad depth, timeout,
//! or method name surfaces before any search is run.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::eval::Strategy;

/// Which search the driver runs at each depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMethod {
    #[default]
    Minimax,
    Alphabeta,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("search_depth must be at least 1, got {0}")]
    InvalidDepth(u32),
    #[error("timeout_ms must be positive, got {0}")]
    InvalidTimeout(f64),
    #[error("failed to parse agent config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read agent config: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for [`SearchAgent`](crate::SearchAgent).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Fixed search depth in plies; only used when `iterative` is off.
    pub search_depth: u32,
    /// Evaluation strategy applied at cutoff leaves.
    pub strategy: Strategy,
    /// Iterative deepening (on) versus a single fixed-depth search (off).
    pub iterative: bool,
    /// `minimax` or `alphabeta`.
    pub method: SearchMethod,
    /// Remaining milliseconds below which the search aborts.
    pub timeout_ms: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            strategy: Strategy::default(),
            iterative: true,
            method: SearchMethod::Minimax,
            timeout_ms: 10.0,
        }
    }
}

impl SearchConfig {
    /// Checks the numeric fields; enum fields are already vetted by serde.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::InvalidDepth(self.search_depth));
        }
        if !(self.timeout_ms > 0.0) {
            return Err(ConfigError::InvalidTimeout(self.timeout_ms));
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
