use std::path::Path;
use std::time::Instant;

use pixel_quantize::{CleanReport, PixelArtCleaner};

use crate::error::AppError;
use crate::rendering::{image_io, ImageResampler};

/// Runs the cleanup pipeline between PNG files
pub struct CleanService {
    cleaner: PixelArtCleaner,
}

impl CleanService {
    pub fn new(cleaner: PixelArtCleaner) -> Self {
        tracing::debug!(
            palette = %cleaner.strategy().describe(),
            tolerance = cleaner.tolerance_value(),
            "Initialized clean service"
        );
        Self { cleaner }
    }

    /// Clean encoded image bytes (PNG or JPEG), returning PNG bytes
    pub fn clean_bytes(&self, input: &[u8]) -> Result<(Vec<u8>, CleanReport), AppError> {
        let start = Instant::now();

        let source = image_io::decode_image(input)?;
        tracing::info!(
            width = source.width(),
            height = source.height(),
            "Decoded source image"
        );

        let (art, report) = self.cleaner.clean_with_report(source, &ImageResampler)?;
        tracing::info!(
            working_width = report.working_size.0,
            working_height = report.working_size.1,
            palette = %self.cleaner.strategy().describe(),
            target = ?report.target_color.map(|c| c.to_string()),
            transparent = report.transparent_pixels,
            "Cleaned image"
        );

        let png = image_io::encode_png(art)?;
        tracing::debug!(
            bytes = png.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Encoded output"
        );
        Ok((png, report))
    }

    /// Clean `input` and write the result to `output`
    pub fn clean_file(&self, input: &Path, output: &Path) -> Result<CleanReport, AppError> {
        let bytes = std::fs::read(input).map_err(|source| AppError::Read {
            path: input.to_path_buf(),
            source,
        })?;
        let (png, report) = self.clean_bytes(&bytes)?;
        std::fs::write(output, png).map_err(|source| AppError::Write {
            path: output.to_path_buf(),
            source,
        })?;
        tracing::info!(output = %output.display(), "Wrote pixel art");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixel_quantize::{PixelGrid, Rgba, WorkingSize};

    #[test]
    fn test_clean_bytes_round_trip() {
        let source = PixelGrid::from_fn(8, 8, |x, y| {
            if (2..6).contains(&x) && (2..6).contains(&y) {
                Rgba::opaque(0, 0, 255)
            } else {
                Rgba::opaque(250, 250, 250)
            }
        });
        let input = image_io::encode_png(source).unwrap();

        let service =
            CleanService::new(PixelArtCleaner::default().working_size(WorkingSize::Scale(2)));
        let (output, report) = service.clean_bytes(&input).unwrap();

        assert_eq!(report.source_size, (8, 8));
        assert_eq!(report.working_size, (4, 4));
        let art = image_io::decode_image(&output).unwrap();
        assert!(art.get_pixel(0, 0).is_transparent());
        assert_eq!(art.get_pixel(4, 4), Rgba::opaque(0, 0, 255));
    }

    #[test]
    fn test_clean_bytes_rejects_garbage() {
        let service = CleanService::new(PixelArtCleaner::default());
        assert!(matches!(
            service.clean_bytes(b"garbage"),
            Err(AppError::Decode(_))
        ));
    }
}
