//! Simulation parameters with documented ranges
//!
//! `Params` is immutable within one generational step and may be changed
//! between steps. `Params::default()` is the template callers clone and
//! override; there is no global instance.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

/// Upper bound on both noise standard deviations
///
/// Keeps the log-wealth term well inside the range where `exp` is finite
/// and non-zero.
pub const MAX_NOISE_STD: f64 = 10.0;

/// Configuration for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Number of agents in the founding generation
    ///
    /// Later generations keep this size when it is even and drop one
    /// unpaired agent when it is odd.
    pub population_size: usize,

    /// Weight of genes vs. environment in the education score (0-1)
    ///
    /// 1.0 = education is purely genetic, 0.0 = purely environmental.
    pub gene_env_weight: f64,

    /// Standard deviation of the noise added to the rank-transformed environment
    pub env_noise_std: f64,

    /// Weight of education-derived wealth vs. inherited wealth (0-1)
    ///
    /// 1.0 = pure meritocracy, 0.0 = pure hereditary transmission.
    pub finance_weight: f64,

    /// Standard deviation of the noise in the merit channel's log-wealth term
    pub finance_noise: f64,

    /// Strength of assortative mating
    pub homophily: HomophilyParams,

    /// Nearest-neighbor mate search
    pub kd: KdParams,
}

/// Assortative-mating strength along each dimension
///
/// Values in [0, 1). 1.0 is allowed as the strict limit case and is mapped to
/// a large finite stretch factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomophilyParams {
    pub gene: f64,
    pub env: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KdParams {
    /// Candidate pool size for nearest-neighbor mate sampling
    pub k_neighbors: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            population_size: 1000,
            gene_env_weight: 0.5,
            env_noise_std: 0.5,
            finance_weight: 0.5,
            finance_noise: 0.5,
            homophily: HomophilyParams::default(),
            kd: KdParams::default(),
        }
    }
}

impl Default for HomophilyParams {
    fn default() -> Self {
        Self { gene: 0.5, env: 0.5 }
    }
}

impl Default for KdParams {
    fn default() -> Self {
        Self { k_neighbors: 10 }
    }
}

impl HomophilyParams {
    /// Mean of the two homophily strengths
    ///
    /// Probability that an initiator searches for a similar mate instead of
    /// picking one uniformly at random.
    pub fn average(&self) -> f64 {
        (self.gene + self.env) / 2.0
    }
}

impl Params {
    /// Create params with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse params from TOML text and validate them
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let params: Params = toml::from_str(content)?;
        params.validate()?;
        Ok(params)
    }

    /// Load params from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Validate parameters against their documented ranges
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(SimError::InvalidParams(
                "population_size must be positive".into(),
            ));
        }

        check_unit("gene_env_weight", self.gene_env_weight)?;
        check_unit("finance_weight", self.finance_weight)?;
        check_unit("homophily.gene", self.homophily.gene)?;
        check_unit("homophily.env", self.homophily.env)?;
        check_noise("env_noise_std", self.env_noise_std)?;
        check_noise("finance_noise", self.finance_noise)?;

        if self.kd.k_neighbors == 0 {
            return Err(SimError::InvalidParams(
                "kd.k_neighbors must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

fn check_unit(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SimError::InvalidParams(format!(
            "{} ({}) must be within [0, 1]",
            name, value
        )));
    }
    Ok(())
}

fn check_noise(name: &str, value: f64) -> Result<()> {
    if !(0.0..=MAX_NOISE_STD).contains(&value) {
        return Err(SimError::InvalidParams(format!(
            "{} ({}) must be within [0, {}]",
            name, value, MAX_NOISE_STD
        )));
    }
    Ok(())
}
