pub mod config;
pub mod error;
pub mod types;

pub use config::{HomophilyParams, KdParams, Params};
pub use error::{Result, SimError};
pub use types::{AgentId, Generation};
