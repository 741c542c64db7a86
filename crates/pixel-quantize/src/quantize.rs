//! Whole-grid palette quantization.

use crate::grid::PixelGrid;
use crate::palette::NearestColor;

/// Replace every pixel of `grid` with its representative color.
///
/// Takes ownership of the grid and returns it with identical dimensions.
/// Pixels are mapped independently, so the result does not depend on
/// traversal order.
///
/// `strategy` can be a [`PaletteStrategy`](crate::PaletteStrategy) or either
/// concrete palette type.
///
/// # Example
///
/// ```
/// use pixel_quantize::{quantize, PaletteStrategy, PixelGrid, Rgba};
///
/// let grid = PixelGrid::filled(2, 2, Rgba::opaque(30, 30, 30));
/// let palette = PaletteStrategy::explicit([Rgba::BLACK, Rgba::WHITE]).unwrap();
///
/// let out = quantize(grid, &palette);
/// assert!(out.pixels().iter().all(|&p| p == Rgba::BLACK));
/// ```
pub fn quantize<S>(mut grid: PixelGrid, strategy: &S) -> PixelGrid
where
    S: NearestColor + ?Sized,
{
    for pixel in grid.pixels_mut() {
        *pixel = strategy.nearest_color(*pixel);
    }
    grid
}
