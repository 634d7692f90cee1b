//! Summary statistics, histograms and feature extraction

use serde::{Deserialize, Serialize};

use crate::population::Agent;

/// Agent attribute selectable for display and analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    Genes,
    Environment,
    Education,
    Wealth,
    ParentWealth,
}

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::Genes,
        Feature::Environment,
        Feature::Education,
        Feature::Wealth,
        Feature::ParentWealth,
    ];

    pub fn value(&self, agent: &Agent) -> f64 {
        match self {
            Feature::Genes => agent.mean_allele(),
            Feature::Environment => agent.env,
            Feature::Education => agent.education_score,
            Feature::Wealth => agent.wealth,
            Feature::ParentWealth => agent.parent_wealth,
        }
    }

    pub fn values(&self, agents: &[Agent]) -> Vec<f64> {
        agents.iter().map(|a| self.value(a)).collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Feature::Genes => "genes",
            Feature::Environment => "environment",
            Feature::Education => "education",
            Feature::Wealth => "wealth",
            Feature::ParentWealth => "parent_wealth",
        }
    }
}

/// Descriptive statistics of one sample
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Population variance
    pub variance: f64,
    pub std_dev: f64,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

impl Summary {
    /// Summarize `values`; all-zero for an empty sample
    pub fn of(values: &[f64]) -> Self {
        let count = values.len();
        if count == 0 {
            return Self::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mean = sorted.iter().sum::<f64>() / count as f64;
        let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;
        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };

        Self {
            count,
            mean,
            variance,
            std_dev: variance.sqrt(),
            min: sorted[0],
            median,
            max: sorted[count - 1],
        }
    }
}

/// Equal-width histogram bin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram spanning min..=max of `values`
///
/// The last bin is closed on the right. A constant sample lands in one bin.
pub fn histogram(values: &[f64], bins: usize) -> Vec<Bin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = if max > min { (max - min) / bins as f64 } else { 1.0 };

    let mut result: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            lower: min + i as f64 * width,
            upper: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for &v in values {
        let slot = (((v - min) / width) as usize).min(bins - 1);
        result[slot].count += 1;
    }
    result
}

/// Agents ordered richest first, the layout raster views expect
pub fn sorted_by_wealth_desc(agents: &[Agent]) -> Vec<Agent> {
    let mut sorted = agents.to_vec();
    sorted.sort_by(|a, b| b.wealth.total_cmp(&a.wealth));
    sorted
}
