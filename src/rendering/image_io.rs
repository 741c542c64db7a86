//! Image decode/encode for pixel grids.
//!
//! Input goes through the `image` crate, so photos (JPEG) and PNGs of any
//! color type or bit depth are accepted and converted to 8-bit RGBA.
//! Output is always an 8-bit RGBA PNG written with `png` so transparency
//! survives.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::ImageReader;
use pixel_quantize::PixelGrid;

use crate::error::AppError;

/// Decode image bytes (format sniffed from content) into a grid.
pub fn decode_image(bytes: &[u8]) -> Result<PixelGrid, AppError> {
    let image = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| AppError::Decode(e.to_string()))?
        .decode()
        .map_err(|e| AppError::Decode(e.to_string()))?
        .to_rgba8();

    let (width, height) = image.dimensions();
    Ok(PixelGrid::from_rgba_bytes(width, height, image.as_raw())?)
}

/// Encode a grid as an 8-bit RGBA PNG.
pub fn encode_png(grid: PixelGrid) -> Result<Vec<u8>, AppError> {
    let (width, height) = (grid.width(), grid.height());
    let data = grid.into_rgba_bytes();

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Read and decode an image file.
pub fn read_image(path: &Path) -> Result<PixelGrid, AppError> {
    let bytes = fs::read(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_image(&bytes)
}

/// Encode a grid and write it to `path` as PNG.
pub fn write_png(path: &Path, grid: PixelGrid) -> Result<(), AppError> {
    let bytes = encode_png(grid)?;
    fs::write(path, bytes).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}
