//! Distinct-color extraction.
//!
//! Every downstream structure (distance matrix, MST, cluster labels) is
//! indexed by the catalog's discovery order, so the order must be stable:
//! colors are numbered by first occurrence in a row-major scan.

use std::collections::HashMap;

use super::pixel::Rgb;
use crate::error::{Error, Result};

/// Deduplicated colors of an image, in first-seen row-major order.
#[derive(Clone, Debug)]
pub struct ColorCatalog {
    colors: Vec<Rgb>,
    index: HashMap<u32, usize>,
}

impl ColorCatalog {
    /// Scan a row-major pixel buffer and collect its distinct colors.
    ///
    /// O(height·width) with an O(1) amortized membership test; the
    /// color→index map is keyed by the packed 24-bit color value.
    pub fn extract(pixels: &[Rgb], height: usize, width: usize) -> Result<Self> {
        let expected = height
            .checked_mul(width)
            .ok_or(Error::InvalidParameter {
                name: "dimensions",
                message: "height * width overflows",
            })?;
        if pixels.len() != expected {
            return Err(Error::PixelCountMismatch {
                height,
                width,
                expected,
                found: pixels.len(),
            });
        }
        if pixels.is_empty() {
            return Err(Error::EmptyImage);
        }

        let mut colors = Vec::new();
        let mut index = HashMap::with_capacity(expected.min(1 << 16));
        for &p in pixels {
            index.entry(p.packed()).or_insert_with(|| {
                colors.push(p);
                colors.len() - 1
            });
        }

        Ok(Self { colors, index })
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True if the catalog holds no colors (never the case after `extract`).
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The distinct colors, in discovery order.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Catalog index of a color, if present.
    pub fn index_of(&self, color: Rgb) -> Option<usize> {
        self.index.get(&color.packed()).copied()
    }

    /// Color at a catalog index.
    pub fn color(&self, index: usize) -> Result<Rgb> {
        self.colors
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                index,
                len: self.colors.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_indices_in_first_seen_order() {
        let a = Rgb::new(1, 1, 1);
        let b = Rgb::new(2, 2, 2);
        let c = Rgb::new(3, 3, 3);
        let pixels = vec![a, b, a, c, b, a];
        let catalog = ColorCatalog::extract(&pixels, 2, 3).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.colors(), &[a, b, c]);
        assert_eq!(catalog.index_of(a), Some(0));
        assert_eq!(catalog.index_of(b), Some(1));
        assert_eq!(catalog.index_of(c), Some(2));
        assert_eq!(catalog.index_of(Rgb::new(9, 9, 9)), None);
    }

    #[test]
    fn single_color_image() {
        let pixels = vec![Rgb::new(7, 7, 7); 12];
        let catalog = ColorCatalog::extract(&pixels, 3, 4).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.color(0).unwrap(), Rgb::new(7, 7, 7));
    }

    #[test]
    fn rejects_dimension_mismatch() {
        let pixels = vec![Rgb::new(0, 0, 0); 5];
        let err = ColorCatalog::extract(&pixels, 2, 3).unwrap_err();
        assert_eq!(
            err,
            Error::PixelCountMismatch {
                height: 2,
                width: 3,
                expected: 6,
                found: 5
            }
        );
    }

    #[test]
    fn rejects_empty_image() {
        let err = ColorCatalog::extract(&[], 0, 0).unwrap_err();
        assert_eq!(err, Error::EmptyImage);
    }

    #[test]
    fn out_of_range_color_lookup_is_an_error() {
        let pixels = vec![Rgb::new(1, 2, 3)];
        let catalog = ColorCatalog::extract(&pixels, 1, 1).unwrap();
        assert_eq!(
            catalog.color(1).unwrap_err(),
            Error::IndexOutOfBounds { index: 1, len: 1 }
        );
    }
}
