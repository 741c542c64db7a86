//! 8-bit RGBA pixel type
//!
//! Every stage of the pipeline works on straight (non-premultiplied) 8-bit
//! channels. Channel values are `u8`, so the [0, 255] range holds by
//! construction.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A single RGBA pixel with 8 bits per channel.
///
/// `Rgba` is a plain value type: it is `Copy`, compared and hashed by
/// value, which is what palette set membership relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0 = fully transparent, 255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Fully opaque black.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    /// Fully opaque white.
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    /// Create a pixel from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque pixel.
    ///
    /// # Example
    /// ```
    /// use pixel_quantize::Rgba;
    /// let red = Rgba::opaque(255, 0, 0);
    /// assert_eq!(red.a, 255);
    /// ```
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a pixel from a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The color channels only, `[R, G, B]`.
    #[inline]
    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Returns true if alpha is zero.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<[u8; 3]> for Rgba {
    fn from(rgb: [u8; 3]) -> Self {
        Self::opaque(rgb[0], rgb[1], rgb[2])
    }
}

impl fmt::Display for Rgba {
    /// Formats as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse an opaque color from `#RRGGBB` or `RRGGBB`.
    ///
    /// Exactly six hex digits are required after the optional `#`. Leading
    /// and trailing whitespace is trimmed; parsing is case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_quantize::Rgba;
    ///
    /// let c: Rgba = "#FF8000".parse().unwrap();
    /// assert_eq!(c, Rgba::opaque(255, 128, 0));
    ///
    /// let c: Rgba = "00ff00".parse().unwrap();
    /// assert_eq!(c, Rgba::opaque(0, 255, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let len = s.chars().count();
        if len != 6 {
            return Err(ParseColorError::InvalidLength(len));
        }

        let mut digits = [0u8; 6];
        for (slot, c) in digits.iter_mut().zip(s.chars()) {
            *slot = c.to_digit(16).ok_or(ParseColorError::InvalidDigit(c))? as u8;
        }
        let [r1, r0, g1, g0, b1, b0] = digits;
        Ok(Self::opaque((r1 << 4) | r0, (g1 << 4) | g0, (b1 << 4) | b0))
    }
}
