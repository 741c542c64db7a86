//! Nearest-color matching against an explicit list of colors.

use std::collections::HashSet;

use super::error::PaletteError;
use super::NearestColor;
use crate::color::{color_difference, Rgba};

/// A fixed set of RGB colors with nearest-color lookup.
///
/// Colors are stored in insertion order with duplicates removed (first
/// occurrence wins). Alpha of the supplied colors is discarded; every
/// stored and returned color is fully opaque.
///
/// An `ExplicitPalette` is never empty, so lookups cannot fail once one has
/// been built.
///
/// # Example
///
/// ```
/// use pixel_quantize::{ExplicitPalette, NearestColor, Rgba};
///
/// let palette = ExplicitPalette::new([Rgba::opaque(0, 0, 0), Rgba::opaque(255, 0, 0)]).unwrap();
/// assert_eq!(palette.nearest_color(Rgba::opaque(200, 10, 10)), Rgba::opaque(255, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplicitPalette {
    colors: Vec<Rgba>,
}

impl ExplicitPalette {
    /// Build a palette from any collection of colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` yields nothing.
    pub fn new<I>(colors: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = Rgba>,
    {
        let mut seen = HashSet::new();
        let colors: Vec<Rgba> = colors
            .into_iter()
            .map(|c| c.with_alpha(255))
            .filter(|c| seen.insert(*c))
            .collect();

        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        Ok(Self { colors })
    }

    /// Parse a palette listing with one hex color per line.
    ///
    /// Each line is `#RRGGBB` or `RRGGBB`. Blank lines are skipped. The
    /// first malformed line aborts parsing.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::Parse`] with the 1-based line number of the first
    ///   malformed line
    /// - [`PaletteError::EmptyPalette`] if no line held a color
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_quantize::ExplicitPalette;
    ///
    /// let palette = ExplicitPalette::from_hex_lines("#000000\nffffff\n").unwrap();
    /// assert_eq!(palette.len(), 2);
    /// ```
    pub fn from_hex_lines(text: &str) -> Result<Self, PaletteError> {
        let mut colors = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let color = line.parse::<Rgba>().map_err(|source| PaletteError::Parse {
                line: idx + 1,
                source,
            })?;
            colors.push(color);
        }
        Self::new(colors)
    }

    /// Number of distinct colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The colors in insertion order.
    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Returns true if the palette holds this RGB color (alpha ignored).
    pub fn contains(&self, color: Rgba) -> bool {
        self.colors.contains(&color.with_alpha(255))
    }
}

impl NearestColor for ExplicitPalette {
    /// Palette color with the smallest Manhattan distance to `color`.
    ///
    /// Ties go to the color that was inserted first.
    fn nearest_color(&self, color: Rgba) -> Rgba {
        let mut best = self.colors[0];
        let mut best_dist = color_difference(best, color);

        for &candidate in &self.colors[1..] {
            if best_dist == 0 {
                break;
            }
            let dist = color_difference(candidate, color);
            if dist < best_dist {
                best_dist = dist;
                best = candidate;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ParseColorError;

    fn bw_red() -> ExplicitPalette {
        ExplicitPalette::new([
            Rgba::opaque(0, 0, 0),
            Rgba::opaque(255, 255, 255),
            Rgba::opaque(255, 0, 0),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_palette_rejected() {
        let result = ExplicitPalette::new(Vec::new());
        assert_eq!(result, Err(PaletteError::EmptyPalette));
    }

    #[test]
    fn test_duplicates_dropped_first_kept() {
        let palette = ExplicitPalette::new([
            Rgba::opaque(1, 2, 3),
            Rgba::opaque(9, 9, 9),
            Rgba::new(1, 2, 3, 7),
        ])
        .unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.colors(), &[Rgba::opaque(1, 2, 3), Rgba::opaque(9, 9, 9)]);
    }

    #[test]
    fn test_exact_match_returns_itself() {
        let palette = bw_red();
        for &c in palette.colors() {
            assert_eq!(palette.nearest_color(c), c);
        }
    }

    #[test]
    fn test_output_is_opaque() {
        let palette = bw_red();
        let out = palette.nearest_color(Rgba::new(250, 250, 250, 0));
        assert_eq!(out, Rgba::WHITE);
    }

    #[test]
    fn test_tie_goes_to_first_inserted() {
        // (10,0,0) is 10 away from both entries
        let palette =
            ExplicitPalette::new([Rgba::opaque(0, 0, 0), Rgba::opaque(20, 0, 0)]).unwrap();
        assert_eq!(palette.nearest_color(Rgba::opaque(10, 0, 0)), Rgba::opaque(0, 0, 0));

        let reversed =
            ExplicitPalette::new([Rgba::opaque(20, 0, 0), Rgba::opaque(0, 0, 0)]).unwrap();
        assert_eq!(reversed.nearest_color(Rgba::opaque(10, 0, 0)), Rgba::opaque(20, 0, 0));
    }

    #[test]
    fn test_nearest_is_minimal() {
        let palette = bw_red();
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(85) {
                    let p = Rgba::opaque(r, g, b);
                    let nearest = palette.nearest_color(p);
                    assert!(palette.contains(nearest));
                    let d = color_difference(nearest, p);
                    for &c in palette.colors() {
                        assert!(color_difference(c, p) >= d);
                    }
                }
            }
        }
    }

    #[test]
    fn test_from_hex_lines() {
        let palette = ExplicitPalette::from_hex_lines("#000000\n\nFF0000\r\n#00ff00").unwrap();
        assert_eq!(
            palette.colors(),
            &[
                Rgba::opaque(0, 0, 0),
                Rgba::opaque(255, 0, 0),
                Rgba::opaque(0, 255, 0)
            ]
        );
    }

    #[test]
    fn test_from_hex_lines_reports_bad_line() {
        let result = ExplicitPalette::from_hex_lines("#000000\n#FFFFFF\n#12345\n#00FF00");
        assert_eq!(
            result,
            Err(PaletteError::Parse {
                line: 3,
                source: ParseColorError::InvalidLength(5),
            })
        );
    }

    #[test]
    fn test_from_hex_lines_rejects_signed_digits() {
        let result = ExplicitPalette::from_hex_lines("#000000\n+F+F+F\n");
        assert_eq!(
            result,
            Err(PaletteError::Parse {
                line: 2,
                source: ParseColorError::InvalidDigit('+'),
            })
        );
    }

    #[test]
    fn test_from_hex_lines_empty_text() {
        assert_eq!(
            ExplicitPalette::from_hex_lines("\n  \n"),
            Err(PaletteError::EmptyPalette)
        );
    }
}
