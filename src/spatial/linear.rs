//! Brute-force O(N) index

use ordered_float::OrderedFloat;

use super::{manhattan, nearest_first, IndexedPoint, Neighbor, NeighborIndex};

/// Scans every point per query; fine for small populations and as a reference
#[derive(Debug, Clone, Default)]
pub struct LinearScanIndex {
    points: Vec<IndexedPoint>,
}

impl NeighborIndex for LinearScanIndex {
    fn build(points: Vec<IndexedPoint>) -> Self {
        Self { points }
    }

    fn k_nearest(&self, query: [f64; 2], k: usize) -> Vec<Neighbor> {
        if k == 0 {
            return Vec::new();
        }

        // Partial select before the full sort keeps large scans cheap
        let mut scored: Vec<(OrderedFloat<f64>, usize)> = self
            .points
            .iter()
            .map(|p| (OrderedFloat(manhattan(p.coords, query)), p.index))
            .collect();
        if scored.len() > k {
            scored.select_nth_unstable(k - 1);
            scored.truncate(k);
        }

        let neighbors = scored
            .into_iter()
            .map(|(distance, index)| Neighbor {
                index,
                distance: distance.into_inner(),
            })
            .collect();
        nearest_first(neighbors, k)
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_by_distance() {
        let index = LinearScanIndex::build(vec![
            IndexedPoint::new(0, [5.0, 0.0]),
            IndexedPoint::new(1, [1.0, 0.0]),
            IndexedPoint::new(2, [0.0, 3.0]),
        ]);
        let result = index.k_nearest([0.0, 0.0], 2);
        assert_eq!(result[0], Neighbor { index: 1, distance: 1.0 });
        assert_eq!(result[1], Neighbor { index: 2, distance: 3.0 });
    }

    #[test]
    fn test_zero_k() {
        let index = LinearScanIndex::build(vec![IndexedPoint::new(0, [0.0, 0.0])]);
        assert!(index.k_nearest([0.0, 0.0], 0).is_empty());
    }
}
