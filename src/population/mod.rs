//! Generational population model
//!
//! Founding generation, scoring, environment transform, mate selection,
//! reproduction and the step that ties them together.

pub mod agent;
pub mod constants;
pub mod environment;
pub mod generation;
pub mod mating;
pub mod reproduction;
pub mod scoring;

pub use agent::{Agent, ParentSnapshot};
pub use environment::{average_ranks, env_from_wealth};
pub use generation::{initialize_population, next_generation};
pub use mating::{select_mating_pool, select_mating_pool_with, stretch_factor, MatingPair};
pub use reproduction::mate;
pub use scoring::{education_score, potential_wealth, wealth_from_score};
