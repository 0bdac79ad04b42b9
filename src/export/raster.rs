//! SVG rasterization and PNG/JPEG encoding.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use log::{debug, warn};
use resvg::{tiny_skia, usvg};

use crate::fonts;
use crate::plotting::error::{PlotError, PlotResult};

/// A rendered figure with straight (non-premultiplied) RGBA pixels.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Render an SVG document, scaling its user units by `scale`.
pub fn rasterize(svg: &str, scale: f64) -> PlotResult<RasterImage> {
    let mut opt = usvg::Options::default();
    let fontdb = opt.fontdb_mut();
    fontdb.load_system_fonts();
    for font in fonts::registered_fonts() {
        if let Err(err) = fontdb.load_font_file(&font) {
            warn!("Could not load font {}: {}", font.display(), err);
        }
    }

    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|e| PlotError::RenderError(format!("Could not parse rendered SVG: {}", e)))?;
    let scale = scale as f32;
    let size = tree
        .size()
        .to_int_size()
        .scale_by(scale)
        .ok_or_else(|| PlotError::RenderError(format!("Invalid raster scale {}", scale)))?;
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        PlotError::RenderError(format!(
            "Cannot allocate a {}x{} raster",
            size.width(),
            size.height()
        ))
    })?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    debug!("Rasterized figure at {}x{} px", size.width(), size.height());

    let rgba = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    Ok(RasterImage {
        width: size.width(),
        height: size.height(),
        rgba,
    })
}

impl RasterImage {
    /// RGB pixels composited over white.
    pub fn to_rgb_on_white(&self) -> Vec<u8> {
        self.rgba
            .chunks_exact(4)
            .flat_map(|px| {
                let a = px[3] as u32;
                let blend = |c: u8| ((c as u32 * a + 255 * (255 - a) + 127) / 255) as u8;
                [blend(px[0]), blend(px[1]), blend(px[2])]
            })
            .collect()
    }

    pub fn encode_png(&self) -> PlotResult<Vec<u8>> {
        let mut buf = Vec::new();
        PngEncoder::new(&mut buf)
            .write_image(&self.rgba, self.width, self.height, ExtendedColorType::Rgba8)
            .map_err(|e| PlotError::RenderError(format!("PNG encoding failed: {}", e)))?;
        Ok(buf)
    }

    pub fn encode_jpeg(&self, quality: u8) -> PlotResult<Vec<u8>> {
        let mut buf = Vec::new();
        JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100))
            .encode(
                &self.to_rgb_on_white(),
                self.width,
                self.height,
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| PlotError::RenderError(format!("JPEG encoding failed: {}", e)))?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="20">
<rect x="0" y="0" width="10" height="10" fill="rgb(255,0,0)"/>
</svg>"#;

    #[test]
    fn test_scale_sets_pixel_size() {
        let image = rasterize(SQUARE, 2.0).unwrap();
        assert_eq!((image.width, image.height), (20, 40));
        assert_eq!(image.rgba.len(), 20 * 40 * 4);
        // Top half red, bottom half left transparent
        assert_eq!(&image.rgba[..4], &[255, 0, 0, 255]);
        assert_eq!(image.rgba[image.rgba.len() - 1], 0);
    }

    #[test]
    fn test_transparent_pixels_flatten_to_white() {
        let image = RasterImage {
            width: 2,
            height: 1,
            rgba: vec![0, 0, 0, 0, 10, 20, 30, 255],
        };
        assert_eq!(image.to_rgb_on_white(), vec![255, 255, 255, 10, 20, 30]);
    }

    #[test]
    fn test_invalid_svg() {
        assert!(matches!(
            rasterize("not svg", 1.0),
            Err(PlotError::RenderError(_))
        ));
    }
}
