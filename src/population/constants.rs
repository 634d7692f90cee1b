//! Fixed model constants
//!
//! These calibrate the wealth model and the mating search. They are not
//! exposed through `Params`.

// === WEALTH MODEL ===

/// Location of the log-normal bulk, ln(1000)
///
/// A score of 0 with no noise yields a bulk value of 1000.
pub const LOGNORMAL_MU: f64 = 6.907_755_278_982_137;

/// Log-scale spread of the bulk per unit of score
pub const LOGNORMAL_SIGMA: f64 = 0.5;

/// Pareto tail exponent κ
///
/// At 1.0 the tail multiplier is simply 1 / (1 - Φ(score)).
pub const PARETO_ALPHA: f64 = 1.0;

/// Floor on the tail probability 1 - Φ(score)
///
/// Caps the Pareto multiplier at 1e6 for extreme scores.
pub const TAIL_PROB_FLOOR: f64 = 1e-6;

/// Bound on the magnitude of the log-normal exponent
///
/// exp(±300) times the largest tail multiplier stays finite and non-zero,
/// with room for parent wealth to accumulate across generations.
pub const MAX_LOG_WEALTH: f64 = 300.0;

/// Shape parameters of the inheritance "catastrophe" multiplier, Beta(0.01, 1)
///
/// Most draws are close to 0 (inheritance mostly lost); a few are close to 1.
pub const CATASTROPHE_ALPHA: f64 = 0.01;
pub const CATASTROPHE_BETA: f64 = 1.0;

// === FOUNDERS ===

/// Ancestral wealth assigned to every founder
pub const FOUNDER_PARENT_WEALTH: f64 = 1000.0;

// === REPRODUCTION ===

/// Probability that an allele slot is replaced by a fresh N(0,1) draw
pub const MUTATION_PROBABILITY: f64 = 0.01;

// === MATE SELECTION ===

/// Stretch factor used when homophily is exactly 1
///
/// Finite so the spatial index never sees infinite coordinates.
pub const MAX_STRETCH: f64 = 1e6;

/// Upper bound on shifted distances before exponentiation
pub const MAX_SHIFTED_DISTANCE: f64 = 700.0;
