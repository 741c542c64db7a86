//! Public API for the pixel-quantize crate.
//!
//! This module provides the high-level [`PixelArtCleaner`] builder.

mod builder;

pub use builder::{
    CleanReport, Corner, PixelArtCleaner, WorkingSize, DEFAULT_TOLERANCE, DEFAULT_WORKING_SIZE,
};
