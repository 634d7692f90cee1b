//! Generation-by-generation run loop with recorded statistics

pub mod output;
pub mod runner;

pub use output::{AgentRecord, GenerationRecord, SimulationOutput};
pub use runner::{GenerationStats, Simulation};
