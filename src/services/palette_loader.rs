//! Palette file loading.
//!
//! A palette file lists one hex color per line (`#RRGGBB` or `RRGGBB`), the
//! format used by common pixel-art palette sites. Loading is fail-fast: the
//! first malformed line aborts with its line number.

use std::fs;
use std::path::Path;

use pixel_quantize::{ExplicitPalette, Rgba};

use crate::error::AppError;

/// Load an explicit palette from a hex listing on disk.
pub fn load_palette_file(path: &Path) -> Result<ExplicitPalette, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let palette = ExplicitPalette::from_hex_lines(&text).map_err(|source| {
        AppError::PaletteFile {
            path: path.to_path_buf(),
            source,
        }
    })?;

    tracing::debug!(path = %path.display(), colors = palette.len(), "Loaded palette file");
    Ok(palette)
}

/// Build an explicit palette from hex strings given inline (config or CLI).
pub fn palette_from_hex_list<S: AsRef<str>>(colors: &[S]) -> Result<ExplicitPalette, AppError> {
    let parsed = colors
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            s.as_ref()
                .parse::<Rgba>()
                .map_err(|source| pixel_quantize::PaletteError::Parse {
                    line: idx + 1,
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ExplicitPalette::new(parsed)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixel_quantize::PaletteError;
    use std::io::Write;

    #[test]
    fn test_load_palette_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "#0F380F\n#306230\n8BAC0F\n#9BBC0F").unwrap();

        let palette = load_palette_file(file.path()).unwrap();
        assert_eq!(palette.len(), 4);
        assert_eq!(palette.colors()[2], Rgba::opaque(0x8B, 0xAC, 0x0F));
    }

    #[test]
    fn test_malformed_line_aborts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "#000000\nnot-a-color\n#FFFFFF").unwrap();

        match load_palette_file(file.path()) {
            Err(AppError::PaletteFile {
                source: PaletteError::Parse { line, .. },
                ..
            }) => assert_eq!(line, 2),
            other => panic!("Expected PaletteFile parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let result = load_palette_file(Path::new("/definitely/not/here.hex"));
        assert!(matches!(result, Err(AppError::Read { .. })));
    }

    #[test]
    fn test_inline_list() {
        let palette = palette_from_hex_list(&["#000000", "ff0000"]).unwrap();
        assert_eq!(palette.colors(), &[Rgba::BLACK, Rgba::opaque(255, 0, 0)]);

        let result = palette_from_hex_list::<&str>(&[]);
        assert!(matches!(result, Err(AppError::Palette(PaletteError::EmptyPalette))));
    }
}
