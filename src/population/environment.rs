//! Environment from ancestral wealth
//!
//! Ranks a cohort by `parent_wealth` and maps the ranks through the inverse
//! normal CDF, so the environment is standard normal whatever the shape of
//! the wealth distribution, with rank order preserved exactly.

use rand::Rng;

use crate::core::config::Params;
use crate::population::agent::Agent;
use crate::sampling::{gaussian, normal_inv_cdf};

/// 1-based ranks of `values`, ties receiving the average of their positions
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; n];
    let mut start = 0;
    while start < n {
        let mut end = start + 1;
        while end < n && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // Positions start..end are 0-based; ranks are 1-based
        let avg = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = avg;
        }
        start = end;
    }

    ranks
}

/// Set `rawenv` and `env` for a whole cohort from its ancestral wealth
///
/// `rawenv = Φ⁻¹(max(rank / (N+1), 1 / (N+1)))` and
/// `env = rawenv + Normal(0, env_noise_std)`.
pub fn env_from_wealth<R: Rng + ?Sized>(agents: &mut [Agent], params: &Params, rng: &mut R) {
    let n = agents.len();
    if n == 0 {
        return;
    }

    let wealth: Vec<f64> = agents.iter().map(|a| a.parent_wealth).collect();
    let ranks = average_ranks(&wealth);
    let denom = (n + 1) as f64;
    let floor = 1.0 / denom;

    for (agent, rank) in agents.iter_mut().zip(ranks) {
        let p = (rank / denom).max(floor);
        agent.rawenv = normal_inv_cdf(p);
        agent.env = agent.rawenv + gaussian(rng, params.env_noise_std);
    }
}
