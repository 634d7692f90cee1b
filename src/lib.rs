//! Inheritance Sim - generational wealth-inequality simulation

pub mod core;
pub mod population;
pub mod sampling;
pub mod simulation;
pub mod spatial;
pub mod stats;
