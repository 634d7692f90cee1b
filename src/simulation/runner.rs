//! Run loop over generations

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::Params;
use crate::core::error::Result;
use crate::core::types::Generation;
use crate::population::{initialize_population, next_generation, Agent};
use crate::simulation::output::SimulationOutput;
use crate::stats::{
    gini, intergenerational_correlation, log_wealth_correlation, Feature, Summary,
};

/// Aggregate statistics recorded after each generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: Generation,
    pub population: usize,
    pub gini: f64,
    pub wealth: Summary,
    pub education: Summary,
    /// Parent-wealth vs. wealth Pearson correlation; `None` for founders
    pub intergenerational_correlation: Option<f64>,
    /// The same correlation on log wealth
    pub log_wealth_correlation: Option<f64>,
}

impl GenerationStats {
    pub fn from_population(generation: Generation, agents: &[Agent]) -> Self {
        let wealth = Feature::Wealth.values(agents);
        Self {
            generation,
            population: agents.len(),
            gini: gini(&wealth),
            wealth: Summary::of(&wealth),
            education: Summary::of(&Feature::Education.values(agents)),
            intergenerational_correlation: intergenerational_correlation(agents),
            log_wealth_correlation: log_wealth_correlation(agents),
        }
    }
}

/// A running simulation: params, current cohort, seeded RNG and history
///
/// Each `step` is atomic; a failed step leaves the current cohort in place.
pub struct Simulation {
    params: Params,
    population: Vec<Agent>,
    generation: Generation,
    rng: ChaCha8Rng,
    seed: u64,
    history: Vec<GenerationStats>,
    started: Instant,
}

impl Simulation {
    /// Bootstrap generation 0; a random seed is drawn when none is given
    pub fn new(params: Params, seed: Option<u64>) -> Result<Self> {
        let seed = seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let population = initialize_population(&params, &mut rng)?;
        let history = vec![GenerationStats::from_population(0, &population)];

        tracing::info!(
            seed,
            population = population.len(),
            gini = history[0].gini,
            "Founding generation ready"
        );

        Ok(Self {
            params,
            population,
            generation: 0,
            rng,
            seed,
            history,
            started: Instant::now(),
        })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Params may be edited between steps; they are validated by the next step
    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    pub fn population(&self) -> &[Agent] {
        &self.population
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// Advance one generation
    pub fn step(&mut self) -> Result<&GenerationStats> {
        let next = next_generation(&self.population, &self.params, &mut self.rng)?;
        self.population = next;
        self.generation += 1;

        let stats = GenerationStats::from_population(self.generation, &self.population);
        tracing::info!(
            generation = stats.generation,
            population = stats.population,
            gini = stats.gini,
            mean_wealth = stats.wealth.mean,
            "Generation advanced"
        );
        self.history.push(stats);
        Ok(&self.history[self.history.len() - 1])
    }

    /// Run up to `generations` steps, asking `should_continue` after each
    ///
    /// Returns how many steps ran. Stops at the first error.
    pub fn run<F>(&mut self, generations: u32, mut should_continue: F) -> Result<u32>
    where
        F: FnMut(&GenerationStats) -> bool,
    {
        let mut completed = 0;
        while completed < generations {
            let stats = self.step()?;
            completed += 1;
            if !should_continue(stats) {
                tracing::debug!(completed, "Run stopped by caller");
                break;
            }
        }
        Ok(completed)
    }

    /// Start over from a fresh founding generation with new params
    ///
    /// The RNG stream continues; the seed reported stays the original one.
    pub fn reset(&mut self, params: Params) -> Result<()> {
        let population = initialize_population(&params, &mut self.rng)?;
        self.params = params;
        self.population = population;
        self.generation = 0;
        self.history = vec![GenerationStats::from_population(0, &self.population)];
        self.started = Instant::now();
        tracing::info!("Simulation reset");
        Ok(())
    }

    /// Snapshot the run for reporting
    pub fn output(&self) -> SimulationOutput {
        SimulationOutput::new(
            &self.params,
            self.seed,
            &self.population,
            &self.history,
            self.started.elapsed(),
        )
    }
}
