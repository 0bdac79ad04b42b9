//! Text placed in data coordinates.

use crate::plotting::element::{escape_xml, Bounds, RenderContext};
use crate::plotting::plot::Plot;
use crate::plotting::style::{DominantBaseline, TextAnchor, TextStyle};

/// A text label anchored at a data-space point.
///
/// Text does not contribute to autoscaling.
#[derive(Debug, Clone)]
pub struct TextPlot {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub style: TextStyle,
    pub zorder: f64,
}

impl TextPlot {
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        TextPlot {
            x,
            y,
            content: content.into(),
            style: TextStyle::new()
                .anchor(TextAnchor::End)
                .baseline(DominantBaseline::Middle),
            zorder: 3.0,
        }
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.style.font_size = size;
        self
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.style.anchor = anchor;
        self
    }

    pub fn baseline(mut self, baseline: DominantBaseline) -> Self {
        self.style.baseline = baseline;
        self
    }

    pub fn zorder(mut self, zorder: f64) -> Self {
        self.zorder = zorder;
        self
    }
}

impl Plot for TextPlot {
    fn bounds(&self) -> Option<Bounds> {
        None
    }

    fn zorder(&self) -> f64 {
        self.zorder
    }

    fn render_svg(&self, ctx: &RenderContext) -> String {
        if !self.x.is_finite() || !self.y.is_finite() {
            return String::new();
        }
        let (px, py) = ctx.transform(self.x, self.y);
        format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" {}>{}</text>\n",
            px,
            py,
            self.style.to_svg_attrs(),
            escape_xml(&self.content)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_right_aligned_and_centered() {
        let ctx = RenderContext {
            data_bounds: Bounds::new(0.0, 10.0, -2.0, 0.0),
            pixel_bounds: Bounds::new(0.0, 100.0, 0.0, 100.0),
        };
        let text = TextPlot::new(9.5, -0.5, "Thur & Fri").font_size(7.0);
        let svg = text.render_svg(&ctx);
        assert!(svg.starts_with("<text x=\"95.00\" y=\"25.00\""));
        assert!(svg.contains("text-anchor=\"end\""));
        assert!(svg.contains("dominant-baseline=\"middle\""));
        assert!(svg.contains("font-size=\"7\""));
        assert!(svg.contains("Thur &amp; Fri"));
        assert!(text.bounds().is_none());
    }
}
