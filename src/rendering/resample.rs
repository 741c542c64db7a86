//! `image`-backed resampling for the cleanup pipeline.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use pixel_quantize::{GridError, PixelGrid, ResampleFilter, Resampler};

/// Resizes grids with `image::imageops`.
///
/// - [`ResampleFilter::Box`]: `imageops::thumbnail` (area averaging)
/// - [`ResampleFilter::Bilinear`]: `imageops::resize` with `Triangle`
/// - [`ResampleFilter::Nearest`]: `imageops::resize` with `Nearest`
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageResampler;

impl Resampler for ImageResampler {
    fn resample(
        &self,
        grid: PixelGrid,
        width: u32,
        height: u32,
        filter: ResampleFilter,
    ) -> Result<PixelGrid, GridError> {
        let source = to_rgba_image(grid)?;
        let resized = match filter {
            ResampleFilter::Box => imageops::thumbnail(&source, width, height),
            ResampleFilter::Bilinear => {
                imageops::resize(&source, width, height, FilterType::Triangle)
            }
            ResampleFilter::Nearest => imageops::resize(&source, width, height, FilterType::Nearest),
        };
        let (out_w, out_h) = resized.dimensions();
        PixelGrid::from_rgba_bytes(out_w, out_h, resized.as_raw())
    }
}

fn to_rgba_image(grid: PixelGrid) -> Result<RgbaImage, GridError> {
    let (width, height) = (grid.width(), grid.height());
    let bytes = grid.into_rgba_bytes();
    let actual = bytes.len();
    RgbaImage::from_raw(width, height, bytes).ok_or(GridError::BufferLength {
        expected: width as usize * height as usize * 4,
        actual,
    })
}
