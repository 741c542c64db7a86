//! The resampling seam.
//!
//! The cleanup pipeline shrinks its input to a working canvas and grows the
//! result back, but resampling itself lives outside this crate. Callers
//! hand [`PixelArtCleaner`](crate::PixelArtCleaner) a [`Resampler`]; any
//! closure with the right signature is one.

use crate::grid::{GridError, PixelGrid};

/// Resampling filter requested from a [`Resampler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResampleFilter {
    /// Area average over the source pixels each output pixel covers.
    #[default]
    Box,
    /// Linear interpolation at the output pixel center.
    Bilinear,
    /// Copy of the source pixel under the output pixel center.
    Nearest,
}

impl ResampleFilter {
    /// Parse a filter name (`box`, `bilinear`/`linear`, `nearest`), case-insensitive.
    pub fn from_name(s: &str) -> Option<ResampleFilter> {
        match s.trim().to_lowercase().as_str() {
            "box" | "area" => Some(ResampleFilter::Box),
            "bilinear" | "linear" => Some(ResampleFilter::Bilinear),
            "nearest" => Some(ResampleFilter::Nearest),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            ResampleFilter::Box => "box",
            ResampleFilter::Bilinear => "bilinear",
            ResampleFilter::Nearest => "nearest",
        }
    }
}

/// Resize capability consumed by the cleanup pipeline.
///
/// The pipeline never asks for a zero dimension and never asks for the
/// size the grid already has.
///
/// # Example
///
/// ```
/// use pixel_quantize::{GridError, PixelGrid, ResampleFilter, Resampler, Rgba};
///
/// // Only supports keeping the top-left pixel.
/// let corner = |grid: PixelGrid, w: u32, h: u32, _: ResampleFilter| {
///     Ok::<_, GridError>(PixelGrid::filled(w, h, grid.get_pixel(0, 0)))
/// };
///
/// let out = corner
///     .resample(PixelGrid::filled(4, 4, Rgba::WHITE), 2, 2, ResampleFilter::Box)
///     .unwrap();
/// assert_eq!(out.pixels(), &[Rgba::WHITE; 4]);
/// ```
pub trait Resampler {
    /// Resize `grid` to `width` x `height` using `filter`.
    fn resample(
        &self,
        grid: PixelGrid,
        width: u32,
        height: u32,
        filter: ResampleFilter,
    ) -> Result<PixelGrid, GridError>;
}

impl<F> Resampler for F
where
    F: Fn(PixelGrid, u32, u32, ResampleFilter) -> Result<PixelGrid, GridError>,
{
    #[inline]
    fn resample(
        &self,
        grid: PixelGrid,
        width: u32,
        height: u32,
        filter: ResampleFilter,
    ) -> Result<PixelGrid, GridError> {
        self(grid, width, height, filter)
    }
}

/// Nearest-neighbor stand-in for pipeline tests.
#[cfg(test)]
pub(crate) fn nearest_for_tests(
    grid: PixelGrid,
    width: u32,
    height: u32,
    _filter: ResampleFilter,
) -> Result<PixelGrid, GridError> {
    let pick = |i: u32, src: u32, dst: u32| ((2 * i + 1) * src / (2 * dst)).min(src - 1);
    Ok(PixelGrid::from_fn(width, height, |x, y| {
        grid.get_pixel(
            pick(x, grid.width(), width),
            pick(y, grid.height(), height),
        )
    }))
}
