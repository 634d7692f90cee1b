//! Agent - one simulated individual

use serde::{Deserialize, Serialize};

use crate::core::types::AgentId;

/// One simulated individual
///
/// Fields are filled in a fixed order each generation: alleles and parentage
/// at birth, then `env`/`rawenv` by the cohort-wide environment transform,
/// then `education_score`, then `wealth`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    alleles: [f64; 2],
    mean_allele: f64,
    /// Realized environmental quality (rank transform + noise)
    pub env: f64,
    /// Noise-free environmental quality (rank transform only)
    pub rawenv: f64,
    pub education_score: f64,
    pub wealth: f64,
    /// Combined wealth of both parents (founder baseline for generation 0)
    pub parent_wealth: f64,
    /// Snapshot of both parents at mating time; `None` for founders
    pub parents: Option<Box<[ParentSnapshot; 2]>>,
}

/// Frozen copy of a parent's state at mating time
///
/// Carries no parents of its own: only one generation of ancestry is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentSnapshot {
    pub id: AgentId,
    pub alleles: [f64; 2],
    pub mean_allele: f64,
    pub parent_wealth: f64,
    pub env: f64,
    pub rawenv: f64,
    pub education_score: f64,
    pub wealth: f64,
}

impl Agent {
    /// Create an agent with the given genes and ancestry
    ///
    /// Environment, education and wealth start at 0 until the generational
    /// pipeline computes them.
    pub fn new(
        id: AgentId,
        alleles: [f64; 2],
        parent_wealth: f64,
        parents: Option<Box<[ParentSnapshot; 2]>>,
    ) -> Self {
        Self {
            id,
            alleles,
            mean_allele: mean_of(alleles),
            env: 0.0,
            rawenv: 0.0,
            education_score: 0.0,
            wealth: 0.0,
            parent_wealth,
            parents,
        }
    }

    pub fn alleles(&self) -> [f64; 2] {
        self.alleles
    }

    /// Mean of the two alleles, kept in sync with `alleles`
    pub fn mean_allele(&self) -> f64 {
        self.mean_allele
    }

    /// Replace both alleles and recompute the mean
    pub fn set_alleles(&mut self, alleles: [f64; 2]) {
        self.alleles = alleles;
        self.mean_allele = mean_of(alleles);
    }

    /// Position in the (gene, environment) plane used for mate search
    pub fn trait_coords(&self) -> [f64; 2] {
        [self.mean_allele, self.env]
    }

    pub fn is_founder(&self) -> bool {
        self.parents.is_none()
    }

    /// Freeze the current state for a child's ancestry record
    pub fn snapshot(&self) -> ParentSnapshot {
        ParentSnapshot {
            id: self.id,
            alleles: self.alleles,
            mean_allele: self.mean_allele,
            parent_wealth: self.parent_wealth,
            env: self.env,
            rawenv: self.rawenv,
            education_score: self.education_score,
            wealth: self.wealth,
        }
    }
}

#[inline]
fn mean_of(alleles: [f64; 2]) -> f64 {
    (alleles[0] + alleles[1]) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_agent_mean_allele() {
        let agent = Agent::new(AgentId(0), [1.0, -0.5], 100.0, None);
        assert_eq!(agent.mean_allele(), 0.25);
        assert!(agent.is_founder());
        assert_eq!(agent.wealth, 0.0);
    }

    #[test]
    fn test_set_alleles_recomputes_mean() {
        let mut agent = Agent::new(AgentId(0), [0.0, 0.0], 100.0, None);
        agent.set_alleles([2.0, 4.0]);
        assert_eq!(agent.alleles(), [2.0, 4.0]);
        assert_eq!(agent.mean_allele(), 3.0);
    }

    #[test]
    fn test_snapshot_copies_state() {
        let mut agent = Agent::new(AgentId(3), [0.2, 0.4], 50.0, None);
        agent.env = 1.0;
        agent.rawenv = 0.9;
        agent.education_score = 0.7;
        agent.wealth = 1234.0;

        let snap = agent.snapshot();
        agent.wealth = 0.0;

        assert_eq!(snap.id, AgentId(3));
        assert_eq!(snap.wealth, 1234.0);
        assert_eq!(snap.rawenv, 0.9);
        assert!((snap.mean_allele - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_trait_coords() {
        let mut agent = Agent::new(AgentId(0), [1.0, 3.0], 0.0, None);
        agent.env = -0.5;
        assert_eq!(agent.trait_coords(), [2.0, -0.5]);
    }
}
