//! Random sampling primitives
//!
//! Every draw goes through an explicitly passed generator so a run seeded
//! with the same value replays exactly.

mod normal;

pub use normal::{erfc, normal_cdf, normal_inv_cdf};

use rand::Rng;
use rand_distr::{Beta, Distribution, StandardNormal};

use crate::core::error::{Result, SimError};

/// Draw from Normal(0, 1)
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.sample(StandardNormal)
}

/// Draw from Normal(0, std)
///
/// A zero standard deviation contributes exactly 0 without consuming a draw.
pub fn gaussian<R: Rng + ?Sized>(rng: &mut R, std: f64) -> f64 {
    if std == 0.0 {
        return 0.0;
    }
    standard_normal(rng) * std
}

/// Draw from Beta(alpha, beta)
pub fn beta<R: Rng + ?Sized>(rng: &mut R, alpha: f64, beta: f64) -> Result<f64> {
    let dist = Beta::new(alpha, beta)
        .map_err(|e| SimError::Distribution(format!("Beta({}, {}): {}", alpha, beta, e)))?;
    Ok(dist.sample(rng))
}

/// Uniform index in `0..len`
pub fn uniform_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    rng.gen_range(0..len)
}
