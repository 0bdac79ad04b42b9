//! Horizontal band spanning an x interval.

use crate::plotting::element::{Bounds, RenderContext};
use crate::plotting::plot::Plot;
use crate::plotting::style::{Color, FillStyle};

/// A filled rectangle between two y values across an x span, in data
/// coordinates.
#[derive(Debug, Clone)]
pub struct BandPlot {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub fill_style: FillStyle,
    pub zorder: f64,
}

impl BandPlot {
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        BandPlot {
            x: (x.0.min(x.1), x.0.max(x.1)),
            y: (y.0.min(y.1), y.0.max(y.1)),
            fill_style: FillStyle::default(),
            zorder: 1.0,
        }
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.fill_style.color = color.into();
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.fill_style.opacity = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn zorder(mut self, zorder: f64) -> Self {
        self.zorder = zorder;
        self
    }
}

impl Plot for BandPlot {
    fn bounds(&self) -> Option<Bounds> {
        let b = Bounds::new(self.x.0, self.x.1, self.y.0, self.y.1);
        b.is_finite().then_some(b)
    }

    fn zorder(&self) -> f64 {
        self.zorder
    }

    fn render_svg(&self, ctx: &RenderContext) -> String {
        if self.bounds().is_none() {
            return String::new();
        }
        let (x0, y_top) = ctx.transform(self.x.0, self.y.1);
        let (x1, y_bottom) = ctx.transform(self.x.1, self.y.0);

        format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>\n",
            x0.min(x1),
            y_top.min(y_bottom),
            (x1 - x0).abs(),
            (y_bottom - y_top).abs(),
            self.fill_style.to_svg_style()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_rect() {
        let ctx = RenderContext {
            data_bounds: Bounds::new(0.0, 10.0, -2.0, 0.0),
            pixel_bounds: Bounds::new(0.0, 100.0, 0.0, 100.0),
        };
        let band = BandPlot::new((0.0, 10.0), (-0.98, -0.02))
            .color(Color::SHADOW_GRAY)
            .alpha(0.15)
            .zorder(0.0);
        let svg = band.render_svg(&ctx);
        assert!(svg.starts_with("<rect x=\"0.00\" y=\"1.00\" width=\"100.00\" height=\"48.00\""));
        assert!(svg.contains("fill-opacity=\"0.15\""));
        assert_eq!(Plot::zorder(&band), 0.0);
    }

    #[test]
    fn test_reversed_extents_are_ordered() {
        let band = BandPlot::new((5.0, 1.0), (2.0, -2.0));
        assert_eq!(band.bounds(), Some(Bounds::new(1.0, 5.0, -2.0, 2.0)));
    }
}
