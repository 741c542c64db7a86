//! Test fixtures and constants.

use std::path::{Path, PathBuf};

use pixel_quantize::PixelGrid;
use pixclean::rendering::image_io;

/// Colors used by the synthetic test images
pub mod colors {
    use pixel_quantize::Rgba;

    /// Near-white backdrop, rounds to #F8F8F8 at 15 bits
    pub const BACKDROP: Rgba = Rgba::opaque(250, 250, 250);

    /// BACKDROP after 15-bit rounding
    pub const BACKDROP_15: Rgba = Rgba::opaque(248, 248, 248);

    /// Sprite color, unchanged by 15-bit rounding
    pub const SPRITE: Rgba = Rgba::opaque(0, 0, 255);
}

/// The four Game Boy greens, darkest first
pub const GAME_BOY_PALETTE: &str = "#0F380F\n#306230\n#8BAC0F\n#9BBC0F\n";

/// 16x16 backdrop with a solid 8x8 sprite at (4,4).
///
/// Block edges sit on even coordinates, so a 2x box shrink keeps every
/// working pixel a flat color.
pub fn square_sprite() -> PixelGrid {
    PixelGrid::from_fn(16, 16, |x, y| {
        if (4..12).contains(&x) && (4..12).contains(&y) {
            colors::SPRITE
        } else {
            colors::BACKDROP
        }
    })
}

/// 16x16 backdrop with a sprite ring at (4,4)..(12,12) whose 4x4 center is
/// backdrop-colored but not connected to the outside.
pub fn ring_sprite() -> PixelGrid {
    PixelGrid::from_fn(16, 16, |x, y| {
        let outer = (4..12).contains(&x) && (4..12).contains(&y);
        let inner = (6..10).contains(&x) && (6..10).contains(&y);
        if outer && !inner {
            colors::SPRITE
        } else {
            colors::BACKDROP
        }
    })
}

/// 32x32 white backdrop with a black 16x16 square at (8,8).
///
/// Edges sit on the 8x8 JPEG block grid, which keeps compression noise
/// small.
pub fn photo_sprite() -> PixelGrid {
    PixelGrid::from_fn(32, 32, |x, y| {
        if (8..24).contains(&x) && (8..24).contains(&y) {
            pixel_quantize::Rgba::BLACK
        } else {
            pixel_quantize::Rgba::WHITE
        }
    })
}

/// Scratch directory holding inputs and outputs for one test
pub struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `grid` as a PNG and return its path
    pub fn write_png(&self, name: &str, grid: PixelGrid) -> PathBuf {
        let path = self.path(name);
        image_io::write_png(&path, grid).expect("Failed to write PNG fixture");
        path
    }

    /// Write `grid` as a JPEG (alpha dropped) and return its path
    pub fn write_jpeg(&self, name: &str, grid: PixelGrid) -> PathBuf {
        let path = self.path(name);
        let rgb = image::RgbImage::from_fn(grid.width(), grid.height(), |x, y| {
            let [r, g, b] = grid.get_pixel(x, y).rgb();
            image::Rgb([r, g, b])
        });
        rgb.save_with_format(&path, image::ImageFormat::Jpeg)
            .expect("Failed to write JPEG fixture");
        path
    }

    /// Write a text file and return its path
    pub fn write_text(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    pub fn read_png(&self, path: &Path) -> PixelGrid {
        image_io::read_image(path).expect("Failed to read PNG output")
    }
}
