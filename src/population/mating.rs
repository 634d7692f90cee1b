//! Homophily-weighted mate selection
//!
//! Half the population (shuffled) act as initiators. Each initiator either
//! picks a uniformly random partner or samples one of its nearest neighbors
//! in the stretched (gene, environment) plane with softmax weights on
//! distance. Partners are never removed from the pool, so one agent may be
//! chosen by several initiators.

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::Params;
use crate::core::error::{Result, SimError};
use crate::population::agent::Agent;
use crate::population::constants::{MAX_SHIFTED_DISTANCE, MAX_STRETCH};
use crate::sampling::uniform_index;
use crate::spatial::{IndexedPoint, Neighbor, NeighborIndex, RTreeIndex};

/// Indices of two agents in the population slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatingPair {
    pub initiator: usize,
    pub partner: usize,
}

/// Map homophily in [0, 1) to a distance stretch in [0, ∞)
///
/// `h / (1 - h)`, with a finite cap at `h >= 1`.
pub fn stretch_factor(homophily: f64) -> f64 {
    if homophily >= 1.0 {
        MAX_STRETCH
    } else {
        (homophily / (1.0 - homophily)).min(MAX_STRETCH)
    }
}

/// Draw `floor(N / 2)` pairs using an R*-tree for the neighbor search
pub fn select_mating_pool<R: Rng + ?Sized>(
    population: &[Agent],
    params: &Params,
    rng: &mut R,
) -> Result<Vec<MatingPair>> {
    select_mating_pool_with::<RTreeIndex, R>(population, params, rng)
}

/// Draw `floor(N / 2)` pairs using any [`NeighborIndex`] implementation
pub fn select_mating_pool_with<I: NeighborIndex, R: Rng + ?Sized>(
    population: &[Agent],
    params: &Params,
    rng: &mut R,
) -> Result<Vec<MatingPair>> {
    let n = population.len();
    if n < 2 {
        return Err(SimError::PopulationTooSmall { size: n });
    }

    let alpha_gene = stretch_factor(params.homophily.gene);
    let alpha_env = stretch_factor(params.homophily.env);
    let stretched = |agent: &Agent| {
        let [gene, env] = agent.trait_coords();
        [alpha_gene * gene, alpha_env * env]
    };

    let index = I::build(
        population
            .iter()
            .enumerate()
            .map(|(i, agent)| IndexedPoint::new(i, stretched(agent)))
            .collect(),
    );

    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    let initiators = &order[..n / 2];

    let avg_homophily = params.homophily.average();
    let k = params.kd.k_neighbors;

    let mut pairs = Vec::with_capacity(initiators.len());
    for &initiator in initiators {
        let partner = if rng.gen::<f64>() < 1.0 - avg_homophily {
            random_partner(initiator, n, rng)
        } else {
            let neighbors: Vec<Neighbor> = index
                .k_nearest(stretched(&population[initiator]), k + 1)
                .into_iter()
                .filter(|nb| nb.index != initiator)
                .collect();
            if neighbors.is_empty() {
                return Err(SimError::NoEligibleMate {
                    initiator: population[initiator].id,
                });
            }
            sample_by_distance(&neighbors, rng)?
        };

        pairs.push(MatingPair { initiator, partner });
    }

    tracing::debug!(
        population = n,
        pairs = pairs.len(),
        avg_homophily,
        "Selected mating pool"
    );

    Ok(pairs)
}

/// Uniform partner other than the initiator itself
fn random_partner<R: Rng + ?Sized>(initiator: usize, n: usize, rng: &mut R) -> usize {
    let pick = uniform_index(rng, n - 1);
    if pick >= initiator {
        pick + 1
    } else {
        pick
    }
}

/// Softmax weights `exp(-(d - d_min))` with the shift capped before `exp`
pub fn softmax_weights(distances: &[f64]) -> Vec<f64> {
    let d_min = distances.iter().copied().fold(f64::INFINITY, f64::min);
    distances
        .iter()
        .map(|&d| (-(d - d_min).min(MAX_SHIFTED_DISTANCE)).exp())
        .collect()
}

/// Roulette-wheel draw over neighbors weighted by closeness
fn sample_by_distance<R: Rng + ?Sized>(neighbors: &[Neighbor], rng: &mut R) -> Result<usize> {
    let distances: Vec<f64> = neighbors.iter().map(|nb| nb.distance).collect();
    let weights = softmax_weights(&distances);
    let dist = WeightedIndex::new(&weights)
        .map_err(|e| SimError::Distribution(format!("mate weights: {}", e)))?;
    Ok(neighbors[dist.sample(rng)].index)
}
