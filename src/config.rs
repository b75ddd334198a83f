use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default maximum characters per chunk
pub const DEFAULT_MAX_LEN: usize = 280;

/// Characters reserved per chunk for the worst-case ordinal tag " (NN/NN)"
pub const DEFAULT_FUZZ: usize = 8;

/// Default share of the budget that may stay unused before a boundary is
/// rejected as too early
pub const DEFAULT_ACCEPT_RATIO: f64 = 0.5;

/// Chunking configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum characters per chunk, ordinal tag included
    pub max_len: usize,
    /// Characters held back from each chunk for the ordinal tag
    pub fuzz: usize,
    /// A boundary is accepted once the unused budget drops below
    /// `available * accept_ratio`
    pub accept_ratio: f64,
    /// Soft-wrap chunk bodies at this column (cosmetic)
    pub fill_column: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            fuzz: DEFAULT_FUZZ,
            accept_ratio: DEFAULT_ACCEPT_RATIO,
            fill_column: None,
        }
    }
}

impl Config {
    /// Default configuration with a different length budget
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len,
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_len <= self.fuzz {
            return Err(Error::BudgetTooSmall {
                max_len: self.max_len,
                fuzz: self.fuzz,
            });
        }
        if !(self.accept_ratio > 0.0 && self.accept_ratio <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "accept_ratio must be in (0, 1], got {}",
                self.accept_ratio
            )));
        }
        if self.fill_column == Some(0) {
            return Err(Error::InvalidConfig("fill_column must be positive".to_string()));
        }
        Ok(())
    }

    /// Characters a chunk body may use before its ordinal tag
    pub fn available(&self) -> usize {
        self.max_len.saturating_sub(self.fuzz)
    }

    /// Unused budget below which a boundary is accepted
    pub fn accept_threshold(&self) -> f64 {
        self.available() as f64 * self.accept_ratio
    }
}
