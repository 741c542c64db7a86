//! Owned 2D RGBA pixel buffer.
//!
//! [`PixelGrid`] is the unit of ownership between pipeline stages: each
//! stage takes a grid by value and hands back a grid, so no two stages ever
//! see the same buffer.
//!
//! Constructors come in two flavors. [`PixelGrid::new`] and
//! [`PixelGrid::from_rgba_bytes`] wrap caller data and return
//! [`GridError`] for zero dimensions or a bad buffer length.
//! [`PixelGrid::filled`] and [`PixelGrid::from_fn`] take dimensions the
//! caller controls and panic on zero, like indexing out of bounds would.

mod error;

pub use error::GridError;

use crate::color::Rgba;

/// A grid position, zero-indexed from the top-left corner.
///
/// Coordinates are signed so that positions just outside the grid (flood
/// fill neighbors, a caller-supplied seed) can be represented and rejected
/// by a bounds check instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    /// Column
    pub x: i64,
    /// Row
    pub y: i64,
}

impl Coordinate {
    /// Create a coordinate.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Coordinate shifted by `(dx, dy)`.
    #[inline]
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// A rectangular, row-major grid of [`Rgba`] pixels.
///
/// Dimensions are fixed at construction; only pixel content can change.
///
/// # Example
///
/// ```
/// use pixel_quantize::{PixelGrid, Rgba};
///
/// let mut grid = PixelGrid::filled(3, 2, Rgba::WHITE);
/// grid.put_pixel(2, 1, Rgba::BLACK);
///
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.get_pixel(2, 1), Rgba::BLACK);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelGrid {
    /// Wrap an existing row-major pixel vector.
    ///
    /// # Errors
    ///
    /// - [`GridError::ZeroDimension`] if `width` or `height` is zero
    /// - [`GridError::BufferLength`] if `pixels.len() != width * height`
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(GridError::BufferLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A grid where every pixel is `color`.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Build a grid by evaluating `f(x, y)` for every position.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Rgba,
    {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build a grid from interleaved `[R, G, B, A, ...]` bytes.
    ///
    /// # Errors
    ///
    /// Same as [`PixelGrid::new`], with the expected length in bytes.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(GridError::BufferLength {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| Rgba::new(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Flatten into interleaved `[R, G, B, A, ...]` bytes.
    pub fn into_rgba_bytes(self) -> Vec<u8> {
        self.pixels.into_iter().flat_map(Rgba::to_bytes).collect()
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Mutable pixels in row-major order. The length cannot change.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// Returns true if `coord` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < i64::from(self.width)
            && coord.y < i64::from(self.height)
    }

    /// Row-major index of `coord`, or `None` if it is outside the grid.
    #[inline]
    pub fn index_of(&self, coord: Coordinate) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.y as usize * self.width as usize + coord.x as usize)
        } else {
            None
        }
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Rgba {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    #[inline]
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels[idx] = color;
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::ZeroDimension { width, height });
    }
    Ok(())
}
