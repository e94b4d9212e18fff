//! MST-based color quantization.
//!
//! `quantree` reduces an image's palette to K representative colors by
//! treating its distinct colors as nodes of a complete weighted graph,
//! building a minimum spanning tree over them with Prim's algorithm, and
//! contracting the tree's cheapest edges until K clusters remain. Each
//! pixel is then rewritten to its cluster's mean color.
//!
//! The primary public API is [`Quantizer`]; the individual pipeline
//! stages live under [`quantize`] and [`smooth`] offers an optional
//! Gaussian pre-blur.
//!
//! The crate is a pure batch computation: no I/O, no global state, no
//! threads. Image decoding/encoding and display are the caller's job;
//! input and output are plain row-major `Rgb` buffers.

#![forbid(unsafe_code)]

pub mod error;
pub mod quantize;
pub mod smooth;

pub use error::{Error, Result};
pub use quantize::{
    assign_clusters, remap, ClusterMeans, ColorCatalog, DistanceGraph, IndexedMinHeap, Mst,
    Quantized, Quantizer, Rgb, NO_PARENT,
};
pub use smooth::gaussian_smooth;
