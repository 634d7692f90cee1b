//! Simulation output and serialization

use std::io::Write;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::config::Params;
use crate::core::error::Result;
use crate::population::Agent;
use crate::simulation::runner::GenerationStats;
use crate::stats::{lorenz_curve, sorted_by_wealth_desc, Feature};

/// Complete simulation output
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub params: Params,
    pub seed: u64,
    pub generations: u32,
    pub simulation_time_ms: u64,
    /// Final cohort, richest first
    pub final_population: Vec<Agent>,
    /// Lorenz curve of the final cohort's wealth
    pub lorenz: Vec<(f64, f64)>,
    pub history: Vec<GenerationStats>,
}

impl SimulationOutput {
    pub fn new(
        params: &Params,
        seed: u64,
        population: &[Agent],
        history: &[GenerationStats],
        elapsed: Duration,
    ) -> Self {
        Self {
            params: params.clone(),
            seed,
            generations: history.last().map(|s| s.generation).unwrap_or(0),
            simulation_time_ms: elapsed.as_millis() as u64,
            final_population: sorted_by_wealth_desc(population),
            lorenz: lorenz_curve(&Feature::Wealth.values(population)),
            history: history.to_vec(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Final cohort as CSV, one row per agent, richest first
    pub fn write_population_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for agent in &self.final_population {
            wtr.serialize(AgentRecord::from(agent))?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Per-generation statistics as CSV, one row per generation
    pub fn write_history_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for stats in &self.history {
            wtr.serialize(GenerationRecord::from(stats))?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn summary(&self) -> String {
        let last = self.history.last();
        let gini_start = self.history.first().map(|s| s.gini).unwrap_or(0.0);
        let gini_end = last.map(|s| s.gini).unwrap_or(0.0);
        let correlation = last
            .and_then(|s| s.intergenerational_correlation)
            .map(|r| format!("{:.3}", r))
            .unwrap_or_else(|| "n/a".to_string());

        format!(
            "Simulated {} generations in {}ms (seed {})\n{} agents, Gini {:.3} -> {:.3}, mean wealth {:.1}, parent/child correlation {}",
            self.generations,
            self.simulation_time_ms,
            self.seed,
            self.final_population.len(),
            gini_start,
            gini_end,
            last.map(|s| s.wealth.mean).unwrap_or(0.0),
            correlation,
        )
    }
}

/// Flat CSV row for one agent
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: u32,
    pub mean_allele: f64,
    pub env: f64,
    pub rawenv: f64,
    pub education_score: f64,
    pub wealth: f64,
    pub parent_wealth: f64,
}

impl From<&Agent> for AgentRecord {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id.0,
            mean_allele: agent.mean_allele(),
            env: agent.env,
            rawenv: agent.rawenv,
            education_score: agent.education_score,
            wealth: agent.wealth,
            parent_wealth: agent.parent_wealth,
        }
    }
}

/// Flat CSV row for one generation's statistics
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub generation: u32,
    pub population: usize,
    pub gini: f64,
    pub mean_wealth: f64,
    pub median_wealth: f64,
    pub max_wealth: f64,
    pub mean_education: f64,
    pub intergenerational_correlation: Option<f64>,
    pub log_wealth_correlation: Option<f64>,
}

impl From<&GenerationStats> for GenerationRecord {
    fn from(stats: &GenerationStats) -> Self {
        Self {
            generation: stats.generation,
            population: stats.population,
            gini: stats.gini,
            mean_wealth: stats.wealth.mean,
            median_wealth: stats.wealth.median,
            max_wealth: stats.wealth.max,
            mean_education: stats.education.mean,
            intergenerational_correlation: stats.intergenerational_correlation,
            log_wealth_correlation: stats.log_wealth_correlation,
        }
    }
}
