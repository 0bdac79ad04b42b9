//! JSON configuration for directories, defaults and export settings.
//!
//! Every field has a default, so an empty object `{}` is a complete
//! configuration.

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::export::{SaveOptions, DEFAULT_EXTENSIONS};
use crate::palettes::DEFAULT_PALETTE;
use crate::plotting::error::{PlotError, PlotResult};
use crate::{fonts, styles};

// ============================================================================
// Export Configuration
// ============================================================================

/// Defaults for `savefig`
#[derive(Deserialize, Debug, Clone)]
pub struct ExportConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_dpi")]
    pub dpi: f64,
    #[serde(default)]
    pub transparent: bool,
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}
fn default_dpi() -> f64 { 300.0 }
fn default_jpeg_quality() -> u8 { 95 }

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            extensions: default_extensions(),
            dpi: default_dpi(),
            transparent: false,
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

impl ExportConfig {
    pub fn save_options(&self) -> SaveOptions {
        SaveOptions::default()
            .dpi(self.dpi)
            .transparent(self.transparent)
            .jpeg_quality(self.jpeg_quality)
            .extensions(self.extensions.iter().cloned())
    }
}

// ============================================================================
// Top-level Configuration
// ============================================================================

#[derive(Deserialize, Debug, Clone)]
pub struct SciplotsConfig {
    /// Stylesheet directory; the bundled `styles/` when absent
    #[serde(default)]
    pub styles_dir: Option<PathBuf>,
    /// Font directory; the bundled `fonts/` when absent
    #[serde(default)]
    pub fonts_dir: Option<PathBuf>,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default = "default_style")]
    pub default_style: String,
    #[serde(default = "default_palette")]
    pub default_palette: String,
}

fn default_style() -> String { styles::DEFAULT_STYLE.to_string() }
fn default_palette() -> String { DEFAULT_PALETTE.to_string() }

impl Default for SciplotsConfig {
    fn default() -> Self {
        SciplotsConfig {
            styles_dir: None,
            fonts_dir: None,
            export: ExportConfig::default(),
            default_style: default_style(),
            default_palette: default_palette(),
        }
    }
}

impl SciplotsConfig {
    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> PlotResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: SciplotsConfig = serde_json::from_reader(reader).map_err(|e| {
            PlotError::InvalidData(format!("Invalid config {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    pub fn styles_dir(&self) -> PathBuf {
        self.styles_dir
            .clone()
            .unwrap_or_else(styles::bundled_styles_dir)
    }

    pub fn fonts_dir(&self) -> PathBuf {
        self.fonts_dir.clone().unwrap_or_else(fonts::bundled_fonts_dir)
    }

    /// Path of stylesheet `name`, or of the configured default style.
    pub fn style_path(&self, name: Option<&str>) -> PathBuf {
        styles::get_style_in(self.styles_dir(), name.unwrap_or(&self.default_style))
    }
}
