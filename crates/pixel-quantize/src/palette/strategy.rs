//! Palette strategy selection.

use super::{BitDepthPalette, ExplicitPalette, NearestColor, PaletteError};
use crate::color::Rgba;

/// The palette strategy a quantization pass uses.
///
/// Callers hold a `PaletteStrategy` without caring which variant it is;
/// [`NearestColor`] dispatches to the variant.
///
/// # Example
///
/// ```
/// use pixel_quantize::{NearestColor, PaletteStrategy, Rgba};
///
/// let gba = PaletteStrategy::bit_depth(15);
/// let two = PaletteStrategy::explicit([Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)]).unwrap();
///
/// let grey = Rgba::opaque(100, 100, 100);
/// assert_eq!(gba.nearest_color(grey), Rgba::opaque(104, 104, 104));
/// assert_eq!(two.nearest_color(grey), Rgba::opaque(0, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteStrategy {
    /// Nearest color from an explicit color set.
    Explicit(ExplicitPalette),
    /// Per-channel rounding to a fixed bit depth.
    BitDepth(BitDepthPalette),
}

impl PaletteStrategy {
    /// Strategy backed by an explicit color set.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn explicit<I>(colors: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = Rgba>,
    {
        Ok(Self::Explicit(ExplicitPalette::new(colors)?))
    }

    /// Strategy that reduces every channel to `bits_per_pixel / 3` bits.
    pub fn bit_depth(bits_per_pixel: u32) -> Self {
        Self::BitDepth(BitDepthPalette::new(bits_per_pixel))
    }

    /// Short human-readable description, used in logs.
    pub fn describe(&self) -> String {
        match self {
            PaletteStrategy::Explicit(p) => format!("explicit palette ({} colors)", p.len()),
            PaletteStrategy::BitDepth(p) => format!(
                "{}-bit color ({} bits per channel)",
                p.bits_per_pixel(),
                p.bits_per_channel()
            ),
        }
    }
}

impl Default for PaletteStrategy {
    fn default() -> Self {
        Self::BitDepth(BitDepthPalette::default())
    }
}

impl From<ExplicitPalette> for PaletteStrategy {
    fn from(palette: ExplicitPalette) -> Self {
        Self::Explicit(palette)
    }
}

impl From<BitDepthPalette> for PaletteStrategy {
    fn from(palette: BitDepthPalette) -> Self {
        Self::BitDepth(palette)
    }
}

impl NearestColor for PaletteStrategy {
    #[inline]
    fn nearest_color(&self, color: Rgba) -> Rgba {
        match self {
            PaletteStrategy::Explicit(p) => p.nearest_color(color),
            PaletteStrategy::BitDepth(p) => p.nearest_color(color),
        }
    }
}
