//! Saving one figure in several file formats at once.
//!
//! SVG is written as rendered. PNG and JPEG come from rasterizing that SVG
//! at the requested dpi; PDF and EPS embed the JPEG raster on a page sized
//! to the figure in points.

mod eps;
mod pdf;
mod raster;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use std::str::FromStr;

use log::{debug, info};

use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::figure::{Figure, RenderOptions};
use crate::plotting::style::Color;

pub use raster::RasterImage;

/// Figure units per inch; one unit is one point.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Extensions written when none are configured.
pub const DEFAULT_EXTENSIONS: [&str; 5] = ["pdf", "png", "eps", "svg", "jpg"];

/// Output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Png,
    Eps,
    Svg,
    Jpg,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Png => "png",
            ExportFormat::Eps => "eps",
            ExportFormat::Svg => "svg",
            ExportFormat::Jpg => "jpg",
        }
    }

    fn needs_raster(self) -> bool {
        !matches!(self, ExportFormat::Svg)
    }
}

impl FromStr for ExportFormat {
    type Err = PlotError;

    /// Parse an extension, with or without its leading dot.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "png" => Ok(ExportFormat::Png),
            "eps" => Ok(ExportFormat::Eps),
            "svg" => Ok(ExportFormat::Svg),
            "jpg" | "jpeg" => Ok(ExportFormat::Jpg),
            _ => Err(PlotError::UnsupportedOption(format!(
                "Cannot save figures as '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Settings forwarded to every written format.
#[derive(Debug, Clone)]
pub struct SaveOptions {
    /// Raster resolution in dots per inch
    pub dpi: f64,
    /// Leave the figure and axes backgrounds unpainted
    pub transparent: bool,
    /// Figure background override
    pub facecolor: Option<Color>,
    /// JPEG quality (1-100), also used for the PDF and EPS rasters
    pub jpeg_quality: u8,
    /// Extensions to write, without dots
    pub extensions: Vec<String>,
}

impl Default for SaveOptions {
    fn default() -> Self {
        SaveOptions {
            dpi: 300.0,
            transparent: false,
            facecolor: None,
            jpeg_quality: 95,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl SaveOptions {
    pub fn dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    pub fn facecolor(mut self, color: impl Into<Color>) -> Self {
        self.facecolor = Some(color.into());
        self
    }

    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }

    pub fn extensions<S: Into<String>>(mut self, extensions: impl IntoIterator<Item = S>) -> Self {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }
}

/// Where [`savefig`] writes: `<dir>/<stem>.<ext>` for each target.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveTargets {
    pub dir: PathBuf,
    pub stem: String,
    pub files: Vec<(String, ExportFormat)>,
}

impl SaveTargets {
    /// Resolve a save path against the configured extensions.
    ///
    /// A path ending in a separator names the output directory, and the
    /// files are named after that directory. Otherwise a directory named
    /// after the file stem is created next to it, and the path's own
    /// extension joins the configured ones.
    pub fn resolve(path: impl AsRef<Path>, extensions: &[String]) -> PlotResult<Self> {
        let path = path.as_ref();
        let raw = path.to_string_lossy();
        let names_dir = raw.ends_with('/') || raw.ends_with(MAIN_SEPARATOR);

        let mut wanted: Vec<String> = extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .collect();

        let (dir, stem) = if names_dir {
            let stem = file_name_of(path)?;
            (path.to_path_buf(), stem)
        } else {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| invalid_path(path))?
                .to_string();
            if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                if !ext.is_empty() && !wanted.iter().any(|w| w == ext) {
                    wanted.push(ext.to_string());
                }
            }
            let parent = path.parent().unwrap_or_else(|| Path::new(""));
            (parent.join(&stem), stem)
        };

        let mut files: Vec<(String, ExportFormat)> = Vec::with_capacity(wanted.len());
        for ext in wanted {
            let format = ext.parse::<ExportFormat>()?;
            if !files.iter().any(|(e, _)| *e == ext) {
                files.push((ext, format));
            }
        }
        if files.is_empty() {
            return Err(PlotError::InvalidConfig(
                "No file extensions to save".to_string(),
            ));
        }
        Ok(SaveTargets { dir, stem, files })
    }

    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.files
            .iter()
            .map(|(ext, _)| self.dir.join(format!("{}.{}", self.stem, ext)))
    }
}

fn file_name_of(path: &Path) -> PlotResult<String> {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .ok_or_else(|| invalid_path(path))
}

fn invalid_path(path: &Path) -> PlotError {
    PlotError::InvalidConfig(format!("Cannot derive a file name from '{}'", path.display()))
}

/// Save `fig` in every configured format and return the written paths.
///
/// All extensions are validated before anything touches the disk.
pub fn savefig(
    fig: &Figure,
    path: impl AsRef<Path>,
    options: &SaveOptions,
) -> PlotResult<Vec<PathBuf>> {
    if !(options.dpi.is_finite() && options.dpi > 0.0) {
        return Err(PlotError::InvalidConfig(format!(
            "dpi must be positive, got {}",
            options.dpi
        )));
    }
    let targets = SaveTargets::resolve(path, &options.extensions)?;
    debug!(
        "Saving '{}' into {} as {:?}",
        targets.stem,
        targets.dir.display(),
        targets.files
    );

    let svg = fig.render_with(&RenderOptions {
        transparent: options.transparent,
        facecolor: options.facecolor.clone(),
    });
    let image = if targets.files.iter().any(|(_, f)| f.needs_raster()) {
        Some(raster::rasterize(&svg, options.dpi / POINTS_PER_INCH)?)
    } else {
        None
    };
    let page = (fig.width, fig.height);

    fs::create_dir_all(&targets.dir)?;
    let mut written = Vec::with_capacity(targets.files.len());
    for ((_, format), path) in targets.files.iter().zip(targets.paths()) {
        let bytes = match (format, image.as_ref()) {
            (ExportFormat::Svg, _) => svg.clone().into_bytes(),
            (ExportFormat::Png, Some(image)) => image.encode_png()?,
            (ExportFormat::Jpg, Some(image)) => image.encode_jpeg(options.jpeg_quality)?,
            (ExportFormat::Pdf, Some(image)) => {
                pdf::write_pdf(image, &image.encode_jpeg(options.jpeg_quality)?, page)
            }
            (ExportFormat::Eps, Some(image)) => {
                eps::write_eps(image, &image.encode_jpeg(options.jpeg_quality)?, page)
            }
            (_, None) => {
                return Err(PlotError::RenderError(format!(
                    "No raster available for {}",
                    format
                )))
            }
        };
        fs::write(&path, bytes)?;
        info!("Saved {}", path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("sciplots-export-{}", std::process::id()))
            .join(name);
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn small_figure() -> Figure {
        let mut fig = Figure::new(144.0, 108.0);
        let ax = fig.add_subplot(1, 1, 1).unwrap();
        fig.axes_mut(ax)
            .unwrap()
            .plot(vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 2.0])
            .build();
        fig
    }

    fn defaults() -> Vec<String> {
        SaveOptions::default().extensions
    }

    #[test]
    fn test_format_names() {
        assert_eq!(".PNG".parse::<ExportFormat>().unwrap(), ExportFormat::Png);
        assert_eq!("jpeg".parse::<ExportFormat>().unwrap(), ExportFormat::Jpg);
        assert!(matches!(
            "tiff".parse::<ExportFormat>(),
            Err(PlotError::UnsupportedOption(_))
        ));
    }

    #[test]
    fn test_path_with_trailing_separator_names_directory() {
        let targets = SaveTargets::resolve("figures/savefig_example/", &defaults()).unwrap();
        assert_eq!(targets.dir, PathBuf::from("figures/savefig_example/"));
        assert_eq!(targets.stem, "savefig_example");
        let paths: Vec<PathBuf> = targets.paths().collect();
        assert_eq!(paths.len(), 5);
        assert_eq!(
            paths[0],
            PathBuf::from("figures/savefig_example/savefig_example.pdf")
        );
    }

    #[test]
    fn test_path_without_extension_becomes_directory() {
        let targets = SaveTargets::resolve("figures/savefig_example", &defaults()).unwrap();
        assert_eq!(targets.dir, PathBuf::from("figures/savefig_example"));
        assert_eq!(targets.stem, "savefig_example");
        assert_eq!(targets.files.len(), 5);
    }

    #[test]
    fn test_path_extension_joins_the_list_once() {
        let targets = SaveTargets::resolve("figures/example.png", &defaults()).unwrap();
        assert_eq!(targets.dir, PathBuf::from("figures/example"));
        assert_eq!(targets.files.len(), 5);

        let targets = SaveTargets::resolve("figures/example.jpeg", &defaults()).unwrap();
        assert_eq!(targets.files.len(), 6);
        assert_eq!(
            targets.files.last(),
            Some(&("jpeg".to_string(), ExportFormat::Jpg))
        );
    }

    #[test]
    fn test_unknown_extension_writes_nothing() {
        let dir = scratch_dir("unknown");
        let err = savefig(&small_figure(), dir.join("fig.xyz"), &SaveOptions::default());
        assert!(matches!(err, Err(PlotError::UnsupportedOption(_))));
        assert!(!dir.exists());
    }

    #[test]
    fn test_svg_only() {
        let dir = scratch_dir("svg");
        let options = SaveOptions::default().extensions(["svg"]);
        let written = savefig(&small_figure(), dir.join("plot"), &options).unwrap();
        assert_eq!(written, vec![dir.join("plot").join("plot.svg")]);
        let text = fs::read_to_string(&written[0]).unwrap();
        assert!(text.contains("<svg"));
    }

    #[test]
    fn test_all_formats() {
        let dir = scratch_dir("all");
        let options = SaveOptions::default().dpi(72.0);
        let written = savefig(&small_figure(), dir.join("fig/"), &options).unwrap();
        assert_eq!(written.len(), 5);

        let read = |ext: &str| fs::read(dir.join("fig").join(format!("fig.{}", ext))).unwrap();
        assert!(read("png").starts_with(b"\x89PNG"));
        assert!(read("jpg").starts_with(&[0xFF, 0xD8]));
        assert!(read("pdf").starts_with(b"%PDF-"));
        assert!(read("eps").starts_with(b"%!PS-Adobe-3.0 EPSF-3.0"));
        assert!(String::from_utf8(read("svg")).unwrap().contains("</svg>"));
    }
}
