//! Dense pairwise color distances.

use super::catalog::ColorCatalog;
use crate::error::{Error, Result};

/// Complete symmetric matrix of Euclidean distances between distinct colors.
///
/// Stored flat in row-major order (`i * n + j`). Symmetry and a zero
/// diagonal are invariants: only the upper triangle is computed, then
/// mirrored.
#[derive(Clone, Debug)]
pub struct DistanceGraph {
    dists: Vec<f64>,
    n: usize,
}

impl DistanceGraph {
    /// Build the complete graph over a catalog's colors. O(d²).
    pub fn build(catalog: &ColorCatalog) -> Self {
        let colors = catalog.colors();
        let n = colors.len();
        let mut dists = vec![0.0f64; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = colors[i].distance(colors[j]);
                dists[i * n + j] = d;
                dists[j * n + i] = d;
            }
        }
        Self { dists, n }
    }

    /// Number of nodes (distinct colors).
    pub fn len(&self) -> usize {
        self.n
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between colors `i` and `j`, bounds-checked.
    pub fn distance(&self, i: usize, j: usize) -> Result<f64> {
        if i >= self.n {
            return Err(Error::IndexOutOfBounds { index: i, len: self.n });
        }
        if j >= self.n {
            return Err(Error::IndexOutOfBounds { index: j, len: self.n });
        }
        Ok(self.dists[i * self.n + j])
    }

    /// Distance without the bounds check wrapper, for hot loops that already
    /// iterate over `0..len()`.
    #[inline]
    pub(crate) fn get(&self, i: usize, j: usize) -> f64 {
        self.dists[i * self.n + j]
    }
}
