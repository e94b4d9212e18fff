//! Cutting the MST into K clusters.
//!
//! Rather than literally deleting the K−1 heaviest tree edges and taking
//! connected components, the assigner works bottom-up: a min-heap over
//! every node's attachment distance yields the cheapest still-standing
//! MST edge, and each pop merges that node's label set into its parent's.
//! After exactly `d − K` merges the cheap edges are all contracted and
//! only the K expensive ones still separate label sets, which is the
//! same partition the top-down cut would produce.
//!
//! Relabeling is a full linear pass per merge. Labels are plain values
//! copied around, not union-find representatives, which keeps the merge
//! order semantics exact and observable.

use super::heap::IndexedMinHeap;
use super::mst::{Mst, NO_PARENT};
use crate::error::{Error, Result};

/// Merge MST nodes until exactly `k` cluster labels remain.
///
/// Returns one label per color index. Labels are drawn from the color
/// indices themselves and are *not* contiguous `0..k`; equal label means
/// same cluster. With `k` equal to the node count the labels are the
/// identity; `k` of 1 puts every color in the root's cluster.
pub fn assign_clusters(mst: &Mst, k: usize) -> Result<Vec<usize>> {
    let n = mst.len();
    if k < 1 || k > n {
        return Err(Error::InvalidClusterCount {
            requested: k,
            distinct: n,
        });
    }

    let parent = mst.parent();
    let distance = mst.distance();
    let mut labels: Vec<usize> = (0..n).collect();

    // Every non-root node is a candidate merge, keyed by the cost of the
    // edge to its parent.
    let mut heap = IndexedMinHeap::with_capacity(n);
    for i in 0..n {
        if parent[i] != NO_PARENT {
            heap.insert(distance[i], i)?;
        }
    }

    for _ in 0..(n - k) {
        let (_, u) = heap.pop_min()?;
        let old_label = labels[u];
        let merged_label = labels[parent[u]];
        labels[u] = merged_label;
        // Drag the whole old label set across.
        for label in labels.iter_mut() {
            if *label == old_label {
                *label = merged_label;
            }
        }
    }

    Ok(labels)
}
