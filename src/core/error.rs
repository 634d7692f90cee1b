use thiserror::Error;

use crate::core::types::AgentId;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Population too small to pair: {size} agent(s), need at least 2")]
    PopulationTooSmall { size: usize },

    #[error("No eligible mate found for initiator {initiator:?}")]
    NoEligibleMate { initiator: AgentId },

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Distribution error: {0}")]
    Distribution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
