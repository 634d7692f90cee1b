//! Education and wealth scoring
//!
//! Wealth is a log-normal bulk times a Pareto tail multiplier, blended between
//! a merit channel (own education) and an inheritance channel (environment
//! plus a stochastic share of parental wealth).

use rand::Rng;

use crate::core::config::Params;
use crate::core::error::Result;
use crate::population::agent::Agent;
use crate::population::constants::{
    CATASTROPHE_ALPHA, CATASTROPHE_BETA, LOGNORMAL_MU, LOGNORMAL_SIGMA, MAX_LOG_WEALTH,
    PARETO_ALPHA, TAIL_PROB_FLOOR,
};
use crate::sampling::{beta, gaussian, normal_cdf};

/// Weighted blend of genes and environment
///
/// `w * mean_allele + (1 - w) * env`; the weight is not range-checked here.
pub fn education_score(agent: &Agent, params: &Params) -> f64 {
    let w = params.gene_env_weight;
    w * agent.mean_allele() + (1.0 - w) * agent.env
}

/// Wealth an agent with percentile-like `score` could reach
///
/// # Arguments
/// * `score` - Standardized score; Φ(score) is read as a percentile
/// * `noise_std` - Std-dev of Gaussian noise on the log term (0 = none)
/// * `rng` - Random number generator for the noise draw
pub fn potential_wealth<R: Rng + ?Sized>(score: f64, noise_std: f64, rng: &mut R) -> f64 {
    let noise = gaussian(rng, noise_std);
    let log_bulk = (LOGNORMAL_MU + LOGNORMAL_SIGMA * score + noise)
        .clamp(-MAX_LOG_WEALTH, MAX_LOG_WEALTH);
    let bulk = log_bulk.exp();

    let tail_prob = (1.0 - normal_cdf(score)).clamp(TAIL_PROB_FLOOR, 1.0);
    let tail = tail_prob.powf(-1.0 / PARETO_ALPHA);

    bulk * tail
}

/// Final wealth of an agent from its education, environment and ancestry
///
/// `finance_weight * merit + (1 - finance_weight) * (env_potential + inherited)`
/// where `inherited = parent_wealth * Beta(0.01, 1)`.
pub fn wealth_from_score<R: Rng + ?Sized>(
    agent: &Agent,
    params: &Params,
    rng: &mut R,
) -> Result<f64> {
    let merit = potential_wealth(agent.education_score, params.finance_noise, rng);
    let env_potential = potential_wealth(agent.rawenv, 0.0, rng);

    // f64::max discards a NaN draw
    let kept_share = beta(rng, CATASTROPHE_ALPHA, CATASTROPHE_BETA)?.max(0.0);
    let inherited = agent.parent_wealth * kept_share;

    let fw = params.finance_weight;
    Ok(fw * merit + (1.0 - fw) * (env_potential + inherited))
}
