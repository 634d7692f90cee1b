//! Spatial indices for similarity-based mate search
//!
//! Points live in a stretched (gene, environment) plane and distance is
//! Manhattan, so a caller that pre-multiplies each axis by its stretch factor
//! gets the weighted distance `αg·|Δgene| + αe·|Δenv|` for free.

mod linear;
mod rtree;

pub use linear::LinearScanIndex;
pub use rtree::RTreeIndex;

use serde::{Deserialize, Serialize};

/// A point keyed by its position in the population slice
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexedPoint {
    pub index: usize,
    pub coords: [f64; 2],
}

impl IndexedPoint {
    pub fn new(index: usize, coords: [f64; 2]) -> Self {
        Self { index, coords }
    }
}

/// One result of a nearest-neighbor query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub distance: f64,
}

/// Build once, query k-nearest many times
pub trait NeighborIndex {
    /// Build an index over the given points
    fn build(points: Vec<IndexedPoint>) -> Self
    where
        Self: Sized;

    /// Up to `k` points closest to `query`, nearest first
    ///
    /// Ties are broken by ascending index so results are deterministic.
    fn k_nearest(&self, query: [f64; 2], k: usize) -> Vec<Neighbor>;

    /// Number of indexed points
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Manhattan distance between two points
#[inline]
pub fn manhattan(a: [f64; 2], b: [f64; 2]) -> f64 {
    (a[0] - b[0]).abs() + (a[1] - b[1]).abs()
}

/// Sort by distance then index and keep the first `k`
fn nearest_first(mut neighbors: Vec<Neighbor>, k: usize) -> Vec<Neighbor> {
    neighbors.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then(a.index.cmp(&b.index))
    });
    neighbors.truncate(k);
    neighbors
}
