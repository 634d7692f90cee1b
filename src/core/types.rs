//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Identifier of an agent within one generation
///
/// Ids are reassigned every generation; only the parent snapshot links a child
/// back to the previous cohort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u32);

impl AgentId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// The id immediately after this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Generation counter (simulation time unit)
pub type Generation = u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_id_equality() {
        let a = AgentId(1);
        let b = AgentId(1);
        let c = AgentId(2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_agent_id_next() {
        assert_eq!(AgentId::new(7).next(), AgentId(8));
    }

    #[test]
    fn test_agent_id_ordering() {
        assert!(AgentId(3) < AgentId(4));
    }
}
