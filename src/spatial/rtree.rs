//! R*-tree backed index

use rstar::{RTree, RTreeObject, AABB};

use super::{manhattan, nearest_first, IndexedPoint, Neighbor, NeighborIndex};

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.coords)
    }
}

/// R*-tree over stretched coordinates, bulk loaded in O(n log n)
///
/// k-nearest queries grow a square window around the query until it holds
/// `k` points inside the Manhattan ball of the window's half-width; the
/// square always contains that ball, so no closer point can be missed.
pub struct RTreeIndex {
    tree: RTree<IndexedPoint>,
    bounds: Option<([f64; 2], [f64; 2])>,
}

impl RTreeIndex {
    /// Half-width of the first query window
    fn initial_radius(&self, k: usize) -> f64 {
        let Some((lo, hi)) = self.bounds else {
            return 0.0;
        };
        let extent = (hi[0] - lo[0]).max(hi[1] - lo[1]);
        let n = self.tree.size().max(1) as f64;
        extent * (k as f64 / n).sqrt()
    }

    /// True when the window around `query` covers every indexed point
    fn covers_all(&self, query: [f64; 2], radius: f64) -> bool {
        match self.bounds {
            None => true,
            Some((lo, hi)) => {
                query[0] - radius <= lo[0]
                    && query[1] - radius <= lo[1]
                    && query[0] + radius >= hi[0]
                    && query[1] + radius >= hi[1]
            }
        }
    }
}

impl NeighborIndex for RTreeIndex {
    fn build(points: Vec<IndexedPoint>) -> Self {
        let bounds = points.iter().fold(None, |acc: Option<([f64; 2], [f64; 2])>, p| {
            let (lo, hi) = acc.unwrap_or((p.coords, p.coords));
            Some((
                [lo[0].min(p.coords[0]), lo[1].min(p.coords[1])],
                [hi[0].max(p.coords[0]), hi[1].max(p.coords[1])],
            ))
        });

        Self {
            tree: RTree::bulk_load(points),
            bounds,
        }
    }

    fn k_nearest(&self, query: [f64; 2], k: usize) -> Vec<Neighbor> {
        if k == 0 || self.tree.size() == 0 {
            return Vec::new();
        }

        let mut radius = self.initial_radius(k);
        loop {
            let window = AABB::from_corners(
                [query[0] - radius, query[1] - radius],
                [query[0] + radius, query[1] + radius],
            );
            let candidates: Vec<Neighbor> = self
                .tree
                .locate_in_envelope(&window)
                .map(|p| Neighbor {
                    index: p.index,
                    distance: manhattan(p.coords, query),
                })
                .collect();

            let within = candidates.iter().filter(|n| n.distance <= radius).count();
            if within >= k || self.covers_all(query, radius) {
                return nearest_first(candidates, k);
            }

            radius = if radius > 0.0 { radius * 2.0 } else { 1e-9 };
        }
    }

    fn len(&self) -> usize {
        self.tree.size()
    }
}
