//! Generational driver
//!
//! One call produces the whole next cohort or an error; the previous cohort
//! is only read.

use rand::Rng;

use crate::core::config::Params;
use crate::core::error::Result;
use crate::core::types::AgentId;
use crate::population::agent::Agent;
use crate::population::constants::FOUNDER_PARENT_WEALTH;
use crate::population::environment::env_from_wealth;
use crate::population::mating::select_mating_pool;
use crate::population::reproduction::mate;
use crate::population::scoring::{education_score, wealth_from_score};
use crate::sampling::standard_normal;

/// Bootstrap the founding generation
///
/// Founders draw alleles, environment and education score independently
/// from N(0,1) (`rawenv == env`, no rank transform), share the baseline
/// ancestral wealth, and get wealth from the regular wealth function.
pub fn initialize_population<R: Rng + ?Sized>(params: &Params, rng: &mut R) -> Result<Vec<Agent>> {
    params.validate()?;

    let mut population = Vec::with_capacity(params.population_size);
    for i in 0..params.population_size {
        let alleles = [standard_normal(rng), standard_normal(rng)];
        let mut agent = Agent::new(AgentId(i as u32), alleles, FOUNDER_PARENT_WEALTH, None);

        agent.env = standard_normal(rng);
        agent.rawenv = agent.env;
        agent.education_score = standard_normal(rng);
        agent.wealth = wealth_from_score(&agent, params, rng)?;

        population.push(agent);
    }

    tracing::debug!(population = population.len(), "Initialized founding generation");
    Ok(population)
}

/// Produce generation N+1 from generation N
///
/// Pairs are drawn once, every pair yields two children with consecutive
/// ids, then the environment transform runs over the whole new cohort before
/// education and wealth are scored per child.
pub fn next_generation<R: Rng + ?Sized>(
    old_population: &[Agent],
    params: &Params,
    rng: &mut R,
) -> Result<Vec<Agent>> {
    params.validate()?;

    let pairs = select_mating_pool(old_population, params, rng)?;
    if old_population.len() % 2 == 1 {
        tracing::warn!(
            population = old_population.len(),
            "Odd population size, one agent left unpaired"
        );
    }

    let mut cohort = Vec::with_capacity(pairs.len() * 2);
    let mut next_id = AgentId(0);
    for pair in &pairs {
        let children = mate(
            &old_population[pair.initiator],
            &old_population[pair.partner],
            next_id,
            rng,
        );
        next_id = AgentId(next_id.0 + 2);
        cohort.extend(children);
    }

    // Ranks are cohort-wide, so this must finish before any scoring
    env_from_wealth(&mut cohort, params, rng);

    for child in &mut cohort {
        child.education_score = education_score(child, params);
        child.wealth = wealth_from_score(child, params, rng)?;
    }

    tracing::debug!(
        parents = old_population.len(),
        children = cohort.len(),
        "Generation complete"
    );
    Ok(cohort)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SimError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn small_params(n: usize) -> Params {
        Params {
            population_size: n,
            ..Params::default()
        }
    }

    #[test]
    fn test_founders() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let pop = initialize_population(&small_params(100), &mut rng).unwrap();

        assert_eq!(pop.len(), 100);
        for (i, agent) in pop.iter().enumerate() {
            assert_eq!(agent.id, AgentId(i as u32));
            assert!(agent.is_founder());
            assert_eq!(agent.env, agent.rawenv);
            assert_eq!(agent.parent_wealth, FOUNDER_PARENT_WEALTH);
            assert!(agent.wealth > 0.0);
        }
    }

    #[test]
    fn test_initialize_rejects_invalid_params() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let result = initialize_population(&small_params(0), &mut rng);
        assert!(matches!(result, Err(SimError::InvalidParams(_))));
    }

    #[test]
    fn test_even_population_preserved() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let params = small_params(64);
        let pop = initialize_population(&params, &mut rng).unwrap();
        let next = next_generation(&pop, &params, &mut rng).unwrap();
        assert_eq!(next.len(), 64);
    }

    #[test]
    fn test_odd_population_drops_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let params = small_params(33);
        let pop = initialize_population(&params, &mut rng).unwrap();
        let next = next_generation(&pop, &params, &mut rng).unwrap();
        assert_eq!(next.len(), 32);
    }

    #[test]
    fn test_ids_unique_and_sequential() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let params = small_params(50);
        let pop = initialize_population(&params, &mut rng).unwrap();
        let next = next_generation(&pop, &params, &mut rng).unwrap();
        for (i, agent) in next.iter().enumerate() {
            assert_eq!(agent.id, AgentId(i as u32));
        }
    }

    #[test]
    fn test_children_fully_scored() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let params = small_params(80);
        let pop = initialize_population(&params, &mut rng).unwrap();
        let next = next_generation(&pop, &params, &mut rng).unwrap();

        for child in &next {
            assert!(child.wealth > 0.0 && child.wealth.is_finite());
            assert!(child.rawenv.is_finite());
            let expected = education_score(child, &params);
            assert_eq!(child.education_score, expected);
            let parents = child.parents.as_ref().unwrap();
            assert_eq!(child.parent_wealth, parents[0].wealth + parents[1].wealth);
        }
    }

    #[test]
    fn test_single_agent_cannot_reproduce() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let params = small_params(1);
        let pop = initialize_population(&params, &mut rng).unwrap();
        let result = next_generation(&pop, &params, &mut rng);
        assert!(matches!(result, Err(SimError::PopulationTooSmall { size: 1 })));
    }

    #[test]
    fn test_same_seed_same_generation() {
        let params = small_params(40);
        let run = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let pop = initialize_population(&params, &mut rng).unwrap();
            next_generation(&pop, &params, &mut rng).unwrap()
        };
        assert_eq!(run(7), run(7));
    }
}
