use pixel_quantize::{
    Corner, PaletteStrategy, PixelArtCleaner, ResampleFilter, Rgba, WorkingSize,
    DEFAULT_TOLERANCE, DEFAULT_WORKING_SIZE,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::services::palette_loader::{load_palette_file, palette_from_hex_list};

/// Cleaner configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Working canvas width (ignored when `scale` is set)
    pub width: u32,

    /// Working canvas height (ignored when `scale` is set)
    pub height: u32,

    /// Shrink by this integer factor instead of a fixed working size
    pub scale: Option<u32>,

    /// Filter used to shrink to the working canvas
    pub downscale: String,

    /// Filter used to grow back to the source size
    pub upscale: String,

    /// Background tolerance (Manhattan RGB distance)
    pub tolerance: u32,

    /// Corner that seeds background removal
    pub corner: String,

    /// Background color to remove; sampled from the corner when absent
    pub target: Option<String>,

    /// Whether to remove the background at all
    pub transparency: bool,

    /// Palette selection
    pub palette: PaletteConfig,
}

/// Palette section. The first of `colors`, `file`, `bits` that is set wins.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    /// Inline hex colors
    pub colors: Option<Vec<String>>,

    /// Palette file, relative paths resolve against the config file
    pub file: Option<PathBuf>,

    /// Bits per pixel for bit-depth reduction
    pub bits: Option<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WORKING_SIZE,
            height: DEFAULT_WORKING_SIZE,
            scale: None,
            downscale: "box".to_string(),
            upscale: "nearest".to_string(),
            tolerance: DEFAULT_TOLERANCE,
            corner: "top-left".to_string(),
            target: None,
            transparency: true,
            palette: PaletteConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load configuration from a file.
    ///
    /// A missing file falls back to defaults; a file that exists but does
    /// not parse is an error. Relative palette paths are resolved against
    /// the config file's directory.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(AppError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let mut config = Self::from_yaml(&content)?;
        if let (Some(file), Some(dir)) = (config.palette.file.as_mut(), path.parent()) {
            if file.is_relative() {
                *file = dir.join(&*file);
            }
        }

        tracing::info!(
            path = %path.display(),
            tolerance = config.tolerance,
            corner = %config.corner,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Resolve the palette section into a strategy
    pub fn palette_strategy(&self) -> Result<PaletteStrategy, AppError> {
        if let Some(colors) = &self.palette.colors {
            return Ok(palette_from_hex_list(colors)?.into());
        }
        if let Some(file) = &self.palette.file {
            return Ok(load_palette_file(file)?.into());
        }
        Ok(match self.palette.bits {
            Some(bits) => PaletteStrategy::bit_depth(bits),
            None => PaletteStrategy::default(),
        })
    }

    /// Working canvas size
    pub fn working_size(&self) -> WorkingSize {
        match self.scale {
            Some(factor) => WorkingSize::Scale(factor),
            None => WorkingSize::Fixed {
                width: self.width,
                height: self.height,
            },
        }
    }

    /// Build a configured cleaner
    pub fn build_cleaner(&self) -> Result<PixelArtCleaner, AppError> {
        let downscale = parse_filter(&self.downscale)?;
        let upscale = parse_filter(&self.upscale)?;
        let corner = Corner::from_name(&self.corner)
            .ok_or_else(|| AppError::Config(format!("unknown corner '{}'", self.corner)))?;

        let mut cleaner = PixelArtCleaner::new(self.palette_strategy()?)
            .working_size(self.working_size())
            .downscale_filter(downscale)
            .upscale_filter(upscale)
            .tolerance(self.tolerance)
            .seed_corner(corner)
            .transparency(self.transparency);

        if let Some(target) = &self.target {
            let color: Rgba = target
                .parse()
                .map_err(|e| AppError::Config(format!("invalid target color '{target}': {e}")))?;
            cleaner = cleaner.target_color(color);
        }

        Ok(cleaner)
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub palette_file: Option<PathBuf>,
    pub bits: Option<u32>,
    pub size: Option<u32>,
    pub scale: Option<u32>,
    pub tolerance: Option<u32>,
    pub corner: Option<String>,
    pub target: Option<String>,
    pub no_transparency: bool,
}

impl ConfigOverrides {
    /// Apply the set overrides on top of `config`
    pub fn apply(self, config: &mut AppConfig) {
        if let Some(file) = self.palette_file {
            config.palette = PaletteConfig {
                file: Some(file),
                ..Default::default()
            };
        } else if let Some(bits) = self.bits {
            config.palette = PaletteConfig {
                bits: Some(bits),
                ..Default::default()
            };
        }
        if let Some(size) = self.size {
            config.width = size;
            config.height = size;
            config.scale = None;
        }
        if let Some(scale) = self.scale {
            config.scale = Some(scale);
        }
        if let Some(tolerance) = self.tolerance {
            config.tolerance = tolerance;
        }
        if let Some(corner) = self.corner {
            config.corner = corner;
        }
        if let Some(target) = self.target {
            config.target = Some(target);
        }
        if self.no_transparency {
            config.transparency = false;
        }
    }
}

fn parse_filter(name: &str) -> Result<ResampleFilter, AppError> {
    ResampleFilter::from_name(name)
        .ok_or_else(|| AppError::Config(format!("unknown filter '{name}'")))
}
