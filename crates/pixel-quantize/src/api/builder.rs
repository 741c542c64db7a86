//! PixelArtCleaner builder -- the primary ergonomic entry point for the crate.
//!
//! [`PixelArtCleaner`] wraps the full pipeline (downscale, quantize,
//! background removal, upscale) with fluent configuration.

use crate::color::Rgba;
use crate::flood_fill::flood_fill_transparency;
use crate::grid::{Coordinate, GridError, PixelGrid};
use crate::palette::PaletteStrategy;
use crate::quantize::quantize;
use crate::resample::{ResampleFilter, Resampler};

/// Default working canvas edge length (2^6).
pub const DEFAULT_WORKING_SIZE: u32 = 64;

/// Default background tolerance (Manhattan distance over RGB).
pub const DEFAULT_TOLERANCE: u32 = 30;

/// Grid corner used to seed background removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Corner {
    /// `(0, 0)`
    #[default]
    TopLeft,
    /// `(width - 1, 0)`
    TopRight,
    /// `(0, height - 1)`
    BottomLeft,
    /// `(width - 1, height - 1)`
    BottomRight,
}

impl Corner {
    /// Parse a corner name such as `top-left` or `bottom_right`, case-insensitive.
    pub fn from_name(s: &str) -> Option<Corner> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "top-left" | "tl" => Some(Corner::TopLeft),
            "top-right" | "tr" => Some(Corner::TopRight),
            "bottom-left" | "bl" => Some(Corner::BottomLeft),
            "bottom-right" | "br" => Some(Corner::BottomRight),
            _ => None,
        }
    }

    /// Pixel position of this corner in a `width` x `height` grid.
    pub fn position(self, width: u32, height: u32) -> (u32, u32) {
        let right = width.saturating_sub(1);
        let bottom = height.saturating_sub(1);
        match self {
            Corner::TopLeft => (0, 0),
            Corner::TopRight => (right, 0),
            Corner::BottomLeft => (0, bottom),
            Corner::BottomRight => (right, bottom),
        }
    }

    /// Same as [`position`](Self::position), as a flood-fill seed.
    pub fn coordinate(self, width: u32, height: u32) -> Coordinate {
        let (x, y) = self.position(width, height);
        Coordinate::new(i64::from(x), i64::from(y))
    }
}

/// Size of the canvas the palette work happens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkingSize {
    /// Resize to exactly this size regardless of the source aspect ratio.
    Fixed {
        /// Working width in pixels
        width: u32,
        /// Working height in pixels
        height: u32,
    },
    /// Divide both source dimensions by an integer factor (at least 1 pixel).
    Scale(u32),
}

impl Default for WorkingSize {
    fn default() -> Self {
        WorkingSize::Fixed {
            width: DEFAULT_WORKING_SIZE,
            height: DEFAULT_WORKING_SIZE,
        }
    }
}

impl WorkingSize {
    /// Working dimensions for a source of `width` x `height`.
    ///
    /// A scale factor of 0 is treated as 1.
    pub fn resolve(self, width: u32, height: u32) -> (u32, u32) {
        match self {
            WorkingSize::Fixed { width, height } => (width, height),
            WorkingSize::Scale(factor) => {
                let factor = factor.max(1);
                ((width / factor).max(1), (height / factor).max(1))
            }
        }
    }
}

/// What one [`PixelArtCleaner::clean_with_report`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    /// Source dimensions (also the output dimensions)
    pub source_size: (u32, u32),
    /// Working canvas dimensions
    pub working_size: (u32, u32),
    /// Color the background fill matched against, if the fill ran
    pub target_color: Option<Rgba>,
    /// Working-canvas pixels made transparent
    pub transparent_pixels: usize,
}

/// High-level pixel-art cleanup builder.
///
/// # Design
///
/// - Constructor requires a [`PaletteStrategy`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`clean()`](Self::clean) takes `&self`, so one cleaner can process
///   many images
///
/// # Pipeline
///
/// 1. Resize the source to the working size (default 64x64, box filter)
/// 2. Quantize every pixel with the palette strategy
/// 3. Flood-fill transparency from a corner (default top-left), matching
///    the color of that corner in the *quantized* canvas within the
///    tolerance (default 30)
/// 4. Resize back to the source size (default nearest)
///
/// Resizing is delegated to the [`Resampler`] passed to
/// [`clean()`](Self::clean).
///
/// # Example
///
/// ```
/// use pixel_quantize::{
///     GridError, PixelArtCleaner, PaletteStrategy, PixelGrid, ResampleFilter, Rgba, WorkingSize,
/// };
///
/// let cleaner = PixelArtCleaner::new(PaletteStrategy::bit_depth(15))
///     .working_size(WorkingSize::Scale(4))
///     .tolerance(10);
///
/// // Flat input, so any pixel is a fine sample.
/// let flat = |grid: PixelGrid, w: u32, h: u32, _: ResampleFilter| {
///     Ok::<_, GridError>(PixelGrid::filled(w, h, grid.get_pixel(0, 0)))
/// };
///
/// let photo = PixelGrid::filled(16, 16, Rgba::WHITE);
/// let art = cleaner.clean(photo, &flat).unwrap();
///
/// assert_eq!((art.width(), art.height()), (16, 16));
/// assert!(art.pixels().iter().all(|p| p.a == 0));
/// ```
#[derive(Debug, Clone)]
pub struct PixelArtCleaner {
    strategy: PaletteStrategy,
    working_size: WorkingSize,
    downscale_filter: ResampleFilter,
    upscale_filter: ResampleFilter,
    tolerance: u32,
    seed_corner: Corner,
    target_color: Option<Rgba>,
    transparency: bool,
}

impl Default for PixelArtCleaner {
    /// 15-bit color on a 64x64 canvas with tolerance 30.
    fn default() -> Self {
        Self::new(PaletteStrategy::default())
    }
}

impl PixelArtCleaner {
    /// Create a cleaner with the given palette strategy and default settings.
    pub fn new(strategy: PaletteStrategy) -> Self {
        Self {
            strategy,
            working_size: WorkingSize::default(),
            downscale_filter: ResampleFilter::Box,
            upscale_filter: ResampleFilter::Nearest,
            tolerance: DEFAULT_TOLERANCE,
            seed_corner: Corner::TopLeft,
            target_color: None,
            transparency: true,
        }
    }

    /// Set the working canvas size.
    #[inline]
    pub fn working_size(mut self, size: WorkingSize) -> Self {
        self.working_size = size;
        self
    }

    /// Set the filter used to shrink the source to the working canvas.
    #[inline]
    pub fn downscale_filter(mut self, filter: ResampleFilter) -> Self {
        self.downscale_filter = filter;
        self
    }

    /// Set the filter used to grow the result back to the source size.
    #[inline]
    pub fn upscale_filter(mut self, filter: ResampleFilter) -> Self {
        self.upscale_filter = filter;
        self
    }

    /// Set the background tolerance.
    #[inline]
    pub fn tolerance(mut self, tolerance: u32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the corner that seeds background removal.
    #[inline]
    pub fn seed_corner(mut self, corner: Corner) -> Self {
        self.seed_corner = corner;
        self
    }

    /// Match the background against `color` instead of the sampled corner.
    #[inline]
    pub fn target_color(mut self, color: Rgba) -> Self {
        self.target_color = Some(color);
        self
    }

    /// Enable or disable background removal.
    #[inline]
    pub fn transparency(mut self, enabled: bool) -> Self {
        self.transparency = enabled;
        self
    }

    /// The palette strategy in use.
    #[inline]
    pub fn strategy(&self) -> &PaletteStrategy {
        &self.strategy
    }

    /// The configured background tolerance.
    #[inline]
    pub fn tolerance_value(&self) -> u32 {
        self.tolerance
    }

    /// The configured seed corner.
    #[inline]
    pub fn corner(&self) -> Corner {
        self.seed_corner
    }

    /// Run the pipeline on `source`, resizing with `resampler`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ZeroDimension`] if the working size resolves to
    /// a zero dimension, and passes through any error from `resampler`.
    pub fn clean<R>(&self, source: PixelGrid, resampler: &R) -> Result<PixelGrid, GridError>
    where
        R: Resampler + ?Sized,
    {
        self.clean_with_report(source, resampler).map(|(grid, _)| grid)
    }

    /// Run the pipeline and describe what happened.
    ///
    /// # Errors
    ///
    /// Same as [`clean`](Self::clean).
    pub fn clean_with_report<R>(
        &self,
        source: PixelGrid,
        resampler: &R,
    ) -> Result<(PixelGrid, CleanReport), GridError>
    where
        R: Resampler + ?Sized,
    {
        let (src_w, src_h) = (source.width(), source.height());
        let (work_w, work_h) = self.working_size.resolve(src_w, src_h);
        if work_w == 0 || work_h == 0 {
            return Err(GridError::ZeroDimension {
                width: work_w,
                height: work_h,
            });
        }

        let small = resample_to(resampler, source, work_w, work_h, self.downscale_filter)?;
        let mut art = quantize(small, &self.strategy);

        let mut report = CleanReport {
            source_size: (src_w, src_h),
            working_size: (work_w, work_h),
            target_color: None,
            transparent_pixels: 0,
        };

        if self.transparency {
            let (x, y) = self.seed_corner.position(work_w, work_h);
            let target = self.target_color.unwrap_or_else(|| art.get_pixel(x, y));

            let before = count_transparent(&art);
            let seed = self.seed_corner.coordinate(work_w, work_h);
            art = flood_fill_transparency(art, seed, target, self.tolerance);
            report.target_color = Some(target);
            report.transparent_pixels = count_transparent(&art) - before;
        }

        let out = resample_to(resampler, art, src_w, src_h, self.upscale_filter)?;
        Ok((out, report))
    }
}

fn resample_to<R>(
    resampler: &R,
    grid: PixelGrid,
    width: u32,
    height: u32,
    filter: ResampleFilter,
) -> Result<PixelGrid, GridError>
where
    R: Resampler + ?Sized,
{
    if grid.width() == width && grid.height() == height {
        return Ok(grid);
    }
    let out = resampler.resample(grid, width, height, filter)?;
    if (out.width(), out.height()) != (width, height) {
        return Err(GridError::ResampledSize {
            expected: (width, height),
            actual: (out.width(), out.height()),
        });
    }
    Ok(out)
}

fn count_transparent(grid: &PixelGrid) -> usize {
    grid.pixels().iter().filter(|p| p.is_transparent()).count()
}
