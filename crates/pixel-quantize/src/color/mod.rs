//! Pixel type and color arithmetic
//!
//! - [`Rgba`]: the 8-bit pixel value every stage operates on
//! - [`color_difference`], [`clamp`], [`closest_multiple`]: stateless
//!   helpers used by palette matching and flood fill

mod math;
mod rgba;

pub use math::{clamp, closest_multiple, color_difference};
pub use rgba::Rgba;
