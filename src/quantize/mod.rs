//! MST-based color quantization.
//!
//! Reduces an image's palette to `k` representative colors while keeping
//! perceptual distortion low.
//!
//! # Algorithm Outline
//!
//! 1. **Distinct colors**: Deduplicate pixels into a catalog, indexed by
//!    first occurrence in a row-major scan ([`ColorCatalog`]).
//!
//! 2. **Complete graph**: Every pair of distinct colors gets an edge
//!    weighted by Euclidean RGB distance ([`DistanceGraph`], O(d²)).
//!
//! 3. **Minimum spanning tree**: Prim's algorithm over an indexed binary
//!    min-heap with O(log n) decrease-key ([`Mst`], [`IndexedMinHeap`]).
//!    Similar colors end up joined by cheap tree edges.
//!
//! 4. **Cluster cut**: Contract the cheapest remaining MST edge until
//!    exactly `k` label sets survive ([`assign_clusters`]), the
//!    bottom-up equivalent of deleting the `k − 1` heaviest edges.
//!
//! 5. **Recolor**: Replace every pixel with its cluster's mean color
//!    ([`ClusterMeans`], [`remap`]).
//!
//! # Complexity
//!
//! O(H·W) over the pixels plus O(d²) over the distinct-color count `d`.
//! Suitable for images up to a few tens of thousands of distinct colors.
//!
//! # Usage
//!
//! ```rust
//! use quantree::{Quantizer, Rgb};
//!
//! let pixels = vec![
//!     Rgb::new(0, 0, 0),
//!     Rgb::new(0, 0, 0),
//!     Rgb::new(255, 255, 255),
//!     Rgb::new(10, 10, 10),
//! ];
//!
//! let result = Quantizer::new(2).quantize(&pixels, 2, 2).unwrap();
//! assert_eq!(result.distinct_colors, 3);
//! // Black and near-black share a palette entry; white keeps its own.
//! assert_eq!(result.pixels[0], result.pixels[3]);
//! assert_eq!(result.pixels[2], Rgb::new(255, 255, 255));
//! ```
//!
//! The six pipeline stages are also public individually, for callers
//! that want to reuse an intermediate (say, requantize at several `k`
//! values over one catalog/graph/MST).

mod assign;
mod catalog;
mod graph;
mod heap;
mod mst;
mod palette;
mod pixel;

pub use assign::assign_clusters;
pub use catalog::ColorCatalog;
pub use graph::DistanceGraph;
pub use heap::IndexedMinHeap;
pub use mst::{Mst, NO_PARENT};
pub use palette::{remap, ClusterMeans};
pub use pixel::Rgb;

use crate::error::{Error, Result};

/// Palette reduction front door.
///
/// One `Quantizer` run owns all of its intermediate state; nothing is
/// shared between runs, so concurrent quantizations just use separate
/// instances.
#[derive(Clone, Debug)]
pub struct Quantizer {
    palette_size: usize,
}

/// Output of a quantization run.
#[derive(Clone, Debug)]
pub struct Quantized {
    /// Recolored pixels, same dimensions as the input, at most `k`
    /// distinct colors.
    pub pixels: Vec<Rgb>,
    /// Distinct colors found in the input.
    pub distinct_colors: usize,
    /// Total weight of the MST over the distinct colors (0 when the
    /// degenerate short-circuit skipped tree construction).
    pub mst_weight: f64,
}

impl Quantizer {
    /// Create a quantizer targeting `palette_size` colors.
    pub fn new(palette_size: usize) -> Self {
        Self { palette_size }
    }

    /// Set the target palette size.
    pub fn with_palette_size(mut self, palette_size: usize) -> Self {
        self.palette_size = palette_size;
        self
    }

    /// The configured palette size.
    pub fn palette_size(&self) -> usize {
        self.palette_size
    }

    /// Quantize a row-major pixel buffer of the given dimensions.
    ///
    /// Fail-fast: the output buffer is only produced once every stage has
    /// succeeded; no partial result is ever observable.
    ///
    /// # Errors
    ///
    /// - [`Error::PixelCountMismatch`] if `pixels.len() != height * width`.
    /// - [`Error::EmptyImage`] for a zero-pixel image.
    /// - [`Error::InvalidClusterCount`] if `k` is 0 or exceeds the number
    ///   of distinct colors.
    ///
    /// An image with a single distinct color short-circuits: the output
    /// equals the input and no tree or clustering work is done.
    pub fn quantize(&self, pixels: &[Rgb], height: usize, width: usize) -> Result<Quantized> {
        let k = self.palette_size;
        let catalog = ColorCatalog::extract(pixels, height, width)?;
        let distinct = catalog.len();

        if k < 1 {
            return Err(Error::InvalidClusterCount {
                requested: k,
                distinct,
            });
        }
        if distinct <= 1 {
            return Ok(Quantized {
                pixels: pixels.to_vec(),
                distinct_colors: distinct,
                mst_weight: 0.0,
            });
        }
        if k > distinct {
            return Err(Error::InvalidClusterCount {
                requested: k,
                distinct,
            });
        }

        let graph = DistanceGraph::build(&catalog);
        let mst = Mst::build(&graph)?;
        let labels = assign_clusters(&mst, k)?;
        let means = ClusterMeans::compute(&catalog, &labels)?;
        let out = remap(pixels, &catalog, &labels, &means)?;

        Ok(Quantized {
            pixels: out,
            distinct_colors: distinct,
            mst_weight: mst.total_weight(),
        })
    }
}
