//! Cluster mean colors and pixel remapping.

use super::catalog::ColorCatalog;
use super::pixel::{ChannelSum, Rgb};
use crate::error::{Error, Result};

/// Mean color per cluster label.
///
/// Labels coming out of the assigner are color indices of merge survivors,
/// not contiguous `0..k`, so means are stored dense by label value.
#[derive(Clone, Debug)]
pub struct ClusterMeans {
    means: Vec<Option<Rgb>>,
}

impl ClusterMeans {
    /// Average each cluster's member colors, channel-wise over the
    /// catalog's distinct colors, rounding to the nearest byte.
    pub fn compute(catalog: &ColorCatalog, labels: &[usize]) -> Result<Self> {
        let n = catalog.len();
        if labels.len() != n {
            return Err(Error::InvalidParameter {
                name: "labels",
                message: "one label per catalog color required",
            });
        }

        let mut sums = vec![ChannelSum::default(); n];
        for (i, &label) in labels.iter().enumerate() {
            if label >= n {
                return Err(Error::IndexOutOfBounds { index: label, len: n });
            }
            sums[label].add(catalog.color(i)?);
        }

        let means = sums
            .into_iter()
            .map(|s| if s.count > 0 { Some(s.mean()) } else { None })
            .collect();
        Ok(Self { means })
    }

    /// Mean color for a label, if that label names a cluster.
    pub fn mean(&self, label: usize) -> Option<Rgb> {
        self.means.get(label).copied().flatten()
    }
}

/// Rewrite every pixel to its cluster's mean color.
///
/// The output is a fresh buffer of identical dimensions; the input and
/// all intermediate structures are left untouched. Fails if a pixel's
/// color is missing from the catalog or its label has no mean; both
/// indicate the stages were fed inconsistent state.
pub fn remap(
    pixels: &[Rgb],
    catalog: &ColorCatalog,
    labels: &[usize],
    means: &ClusterMeans,
) -> Result<Vec<Rgb>> {
    let mut out = Vec::with_capacity(pixels.len());
    for &p in pixels {
        let index = catalog.index_of(p).ok_or(Error::InvalidParameter {
            name: "pixels",
            message: "pixel color missing from the catalog",
        })?;
        let label = *labels.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: labels.len(),
        })?;
        let mean = means.mean(label).ok_or(Error::IndexOutOfBounds {
            index: label,
            len: catalog.len(),
        })?;
        out.push(mean);
    }
    Ok(out)
}
