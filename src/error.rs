use thiserror::Error;

/// Errors returned by the quantization pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Input image has no pixels.
    #[error("empty image")]
    EmptyImage,

    /// Pixel buffer length does not match the stated dimensions.
    #[error("pixel count mismatch: {height}x{width} needs {expected} pixels, got {found}")]
    PixelCountMismatch {
        /// Stated image height.
        height: usize,
        /// Stated image width.
        width: usize,
        /// `height * width`.
        expected: usize,
        /// Actual buffer length.
        found: usize,
    },

    /// Requested palette size is incompatible with the image.
    #[error("invalid cluster count: requested {requested}, but image has {distinct} distinct colors")]
    InvalidClusterCount {
        /// Requested number of palette clusters.
        requested: usize,
        /// Number of distinct colors in the image.
        distinct: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Heap operation on an empty heap.
    #[error("empty heap")]
    HeapEmpty,

    /// Insert past the heap's configured capacity.
    #[error("heap full: capacity {capacity}")]
    HeapFull {
        /// Configured capacity.
        capacity: usize,
    },

    /// Index outside the valid range for the structure being addressed.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Offending index.
        index: usize,
        /// Valid length.
        len: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
