//! Palette strategies and utilities
//!
//! A palette strategy maps an arbitrary pixel to its representative color.
//! Two strategies exist:
//!
//! - [`ExplicitPalette`]: nearest color (Manhattan distance) in a fixed set
//! - [`BitDepthPalette`]: per-channel rounding to a reduced bit depth
//!
//! [`PaletteStrategy`] wraps either one behind the [`NearestColor`] trait.

mod bit_depth;
mod error;
mod explicit;
mod strategy;

pub use bit_depth::{BitDepthPalette, DEFAULT_BITS_PER_PIXEL};
pub use error::{PaletteError, ParseColorError};
pub use explicit::ExplicitPalette;
pub use strategy::PaletteStrategy;

use crate::color::Rgba;

/// Maps a pixel to its representative palette color.
///
/// Implementations must be pure: the same input always yields the same
/// output, and a returned color maps to itself.
pub trait NearestColor {
    /// Representative color for `color`.
    fn nearest_color(&self, color: Rgba) -> Rgba;
}
