#![allow(clippy::needless_range_loop, clippy::module_inception)]

//! pixel-quantize: palette quantization and background removal for pixel art
//!
//! This library turns an arbitrary raster image into clean, limited-palette
//! pixel art: shrink it to a small working canvas, snap every pixel to a
//! palette, clear the background with a tolerance flood fill, and scale it
//! back up with hard edges.
//!
//! # Quick Start
//!
//! The [`PixelArtCleaner`] builder is the primary entry point. Resizing is
//! not part of this crate: the caller passes a [`Resampler`], and any
//! closure with the matching signature is one.
//!
//! ```
//! use pixel_quantize::{GridError, PixelArtCleaner, PaletteStrategy, PixelGrid, ResampleFilter, Rgba};
//!
//! // A stand-in resampler that is exact for flat images.
//! let flat = |grid: PixelGrid, w: u32, h: u32, _: ResampleFilter| {
//!     Ok::<_, GridError>(PixelGrid::filled(w, h, grid.get_pixel(0, 0)))
//! };
//!
//! let cleaner = PixelArtCleaner::new(PaletteStrategy::bit_depth(15));
//!
//! let photo = PixelGrid::filled(128, 128, Rgba::opaque(250, 250, 250));
//! let art = cleaner.clean(photo, &flat).unwrap();
//!
//! assert_eq!(art.width(), 128);
//! assert!(art.get_pixel(0, 0).is_transparent());
//! ```
//!
//! # Building Blocks
//!
//! Each in-crate stage is also available on its own. Every stage takes a
//! [`PixelGrid`] by value and returns one, so a grid is only ever owned by
//! the stage working on it:
//!
//! ```
//! use pixel_quantize::{flood_fill_transparency, quantize, Coordinate, PaletteStrategy, PixelGrid, Rgba};
//!
//! let palette = PaletteStrategy::explicit([Rgba::BLACK, Rgba::opaque(255, 0, 0)]).unwrap();
//!
//! let grid = PixelGrid::filled(8, 8, Rgba::opaque(12, 12, 12));
//! let grid = quantize(grid, &palette);
//! let grid = flood_fill_transparency(grid, Coordinate::new(0, 0), Rgba::BLACK, 0);
//!
//! assert!(grid.pixels().iter().all(|p| p.is_transparent()));
//! ```
//!
//! # Palette Strategies
//!
//! - [`ExplicitPalette`]: nearest color from a fixed set, by Manhattan
//!   distance over RGB
//! - [`BitDepthPalette`]: each channel rounded to `bits_per_pixel / 3` bits
//!   (15 bits per pixel by default, 5 per channel)
//!
//! Both implement [`NearestColor`]; [`PaletteStrategy`] holds either.
//!
//! # Color Distance
//!
//! Every color comparison in the crate, palette matching and the
//! background tolerance alike, uses [`color_difference`]: the sum of the
//! absolute R, G and B differences. Alpha never contributes.

pub mod api;
pub mod color;
pub mod flood_fill;
pub mod grid;
pub mod palette;
pub mod quantize;
pub mod resample;


pub use api::{
    CleanReport, Corner, PixelArtCleaner, WorkingSize, DEFAULT_TOLERANCE, DEFAULT_WORKING_SIZE,
};
pub use color::{clamp, closest_multiple, color_difference, Rgba};
pub use flood_fill::flood_fill_transparency;
pub use grid::{Coordinate, GridError, PixelGrid};
pub use palette::{
    BitDepthPalette, ExplicitPalette, NearestColor, PaletteError, PaletteStrategy,
    ParseColorError,
};
pub use quantize::quantize;
pub use resample::{ResampleFilter, Resampler};
