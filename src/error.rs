use std::path::PathBuf;

use pixel_quantize::{GridError, PaletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image decode error: {0}")]
    Decode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Palette file {path}: {source}")]
    PaletteFile {
        path: PathBuf,
        #[source]
        source: PaletteError,
    },

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("Invalid image: {0}")]
    Grid(#[from] GridError),

    #[error("Config error: {0}")]
    Config(String),
}
