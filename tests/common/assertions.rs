//! Assertion helpers for tests.

use pixel_quantize::{PixelGrid, Rgba};
use pretty_assertions::assert_eq;

/// Assert the grid has the given dimensions
pub fn assert_size(grid: &PixelGrid, width: u32, height: u32) {
    assert_eq!(
        (grid.width(), grid.height()),
        (width, height),
        "Unexpected image size"
    );
}

/// Assert every pixel inside the rectangle matches `expected` exactly
pub fn assert_region(
    grid: &PixelGrid,
    xs: std::ops::Range<u32>,
    ys: std::ops::Range<u32>,
    expected: Rgba,
) {
    for y in ys {
        for x in xs.clone() {
            assert_eq!(grid.get_pixel(x, y), expected, "Pixel ({x}, {y})");
        }
    }
}

/// Assert every pixel outside the rectangle is transparent
pub fn assert_transparent_outside(
    grid: &PixelGrid,
    xs: std::ops::Range<u32>,
    ys: std::ops::Range<u32>,
) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if xs.contains(&x) && ys.contains(&y) {
                continue;
            }
            assert!(
                grid.get_pixel(x, y).is_transparent(),
                "Expected transparent pixel at ({x}, {y}), got {}",
                grid.get_pixel(x, y)
            );
        }
    }
}

/// Assert every opaque pixel is one of `palette`
pub fn assert_opaque_within(grid: &PixelGrid, palette: &[Rgba]) {
    for (idx, pixel) in grid.pixels().iter().enumerate() {
        if pixel.is_transparent() {
            continue;
        }
        assert!(
            palette.contains(pixel),
            "Pixel {idx} ({pixel}) is not a palette color"
        );
    }
}
