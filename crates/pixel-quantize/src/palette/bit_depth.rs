//! Per-channel bit-depth reduction.

use super::NearestColor;
use crate::color::{clamp, closest_multiple, Rgba};

/// Default total bit budget: 5 bits per channel, as in 15-bit (GBA-style) RGB.
pub const DEFAULT_BITS_PER_PIXEL: u32 = 15;

/// Reduces each channel to a fixed number of representable levels.
///
/// The total budget `bits_per_pixel` is split evenly across R, G and B
/// (`bits_per_pixel / 3`, remainder unused) and clamped to 1..=8 bits per
/// channel. Each channel is then snapped with [`closest_multiple`] to a
/// multiple of `2^(8 - bits)` and clamped to 0..=255.
///
/// Alpha goes through the same rounding as the color channels. Fully
/// opaque and fully transparent pixels keep their alpha at every depth.
///
/// # Example
///
/// ```
/// use pixel_quantize::{BitDepthPalette, NearestColor, Rgba};
///
/// let gba = BitDepthPalette::new(15);
/// assert_eq!(gba.bits_per_channel(), 5);
/// assert_eq!(gba.nearest_color(Rgba::opaque(19, 20, 255)), Rgba::opaque(16, 24, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitDepthPalette {
    bits_per_pixel: u32,
    bits_per_channel: u32,
    step: i32,
}

impl BitDepthPalette {
    /// Create a bit-depth palette for a total bits-per-pixel budget.
    ///
    /// Out-of-range budgets are clamped silently: anything below 3 acts
    /// as 1 bit per channel, anything above 24 as 8 bits per channel.
    pub fn new(bits_per_pixel: u32) -> Self {
        let bits_per_channel = clamp(bits_per_pixel / 3, 1, 8);
        Self {
            bits_per_pixel,
            bits_per_channel,
            step: 1 << (8 - bits_per_channel),
        }
    }

    /// The budget this palette was created with (before clamping).
    #[inline]
    pub fn bits_per_pixel(&self) -> u32 {
        self.bits_per_pixel
    }

    /// Effective bits per channel after splitting and clamping.
    #[inline]
    pub fn bits_per_channel(&self) -> u32 {
        self.bits_per_channel
    }

    /// Distance between adjacent representable channel values.
    #[inline]
    pub fn step(&self) -> u32 {
        self.step as u32
    }

    #[inline]
    fn round_channel(&self, value: u8) -> u8 {
        clamp(closest_multiple(i32::from(value), self.step), 0, 255) as u8
    }
}

impl Default for BitDepthPalette {
    fn default() -> Self {
        Self::new(DEFAULT_BITS_PER_PIXEL)
    }
}

impl NearestColor for BitDepthPalette {
    fn nearest_color(&self, color: Rgba) -> Rgba {
        Rgba::new(
            self.round_channel(color.r),
            self.round_channel(color.g),
            self.round_channel(color.b),
            self.round_channel(color.a),
        )
    }
}
