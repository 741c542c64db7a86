//! Error type for pixel grid construction.

use std::fmt;

/// Error type for building or resizing a [`PixelGrid`](super::PixelGrid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero
    ZeroDimension {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
    /// Buffer length does not match `width * height * channels`
    BufferLength {
        /// Expected length in elements
        expected: usize,
        /// Actual length in elements
        actual: usize,
    },
    /// A resampler returned a grid of the wrong size
    ResampledSize {
        /// Requested `(width, height)`
        expected: (u32, u32),
        /// Returned `(width, height)`
        actual: (u32, u32),
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ZeroDimension { width, height } => {
                write!(f, "grid dimensions must be non-zero, got {}x{}", width, height)
            }
            GridError::BufferLength { expected, actual } => {
                write!(
                    f,
                    "buffer length mismatch: expected {} elements, got {}",
                    expected, actual
                )
            }
            GridError::ResampledSize { expected, actual } => {
                write!(
                    f,
                    "resampler returned {}x{}, expected {}x{}",
                    actual.0, actual.1, expected.0, expected.1
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
