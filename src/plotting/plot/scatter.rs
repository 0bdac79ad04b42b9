//! Scatter plot implementation.

use crate::plotting::element::{Bounds, RenderContext};
use crate::plotting::plot::{finite_bounds, Plot};
use crate::plotting::style::{Color, Marker, MarkerStyle};

/// A scatter plot showing individual data points.
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub marker_style: MarkerStyle,
    /// Optional fill color for each point
    pub fill_colors: Option<Vec<Color>>,
    /// Optional edge color for each point
    pub edge_colors: Option<Vec<Color>>,
    pub zorder: f64,
}

impl ScatterPlot {
    /// Create a new scatter plot from x and y data.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        ScatterPlot {
            x,
            y,
            marker_style: MarkerStyle::default(),
            fill_colors: None,
            edge_colors: None,
            zorder: 1.0,
        }
    }

    /// Set both fill and edge color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        let c = color.into();
        self.marker_style.fill = c.clone();
        self.marker_style.edge_color = c;
        self
    }

    pub fn facecolor(mut self, color: impl Into<Color>) -> Self {
        self.marker_style.fill = color.into();
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker_style.marker = marker;
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.marker_style.size = size;
        self
    }

    pub fn fill_colors(mut self, colors: Vec<Color>) -> Self {
        self.fill_colors = Some(colors);
        self
    }

    pub fn edge_colors(mut self, colors: Vec<Color>) -> Self {
        self.edge_colors = Some(colors);
        self
    }

    pub fn edge_width(mut self, width: f64) -> Self {
        self.marker_style.edge_width = width;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.marker_style.fill_opacity = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn zorder(mut self, zorder: f64) -> Self {
        self.zorder = zorder;
        self
    }

    fn style_for(&self, i: usize) -> MarkerStyle {
        let mut style = self.marker_style.clone();
        if let Some(color) = self.fill_colors.as_ref().and_then(|c| c.get(i)) {
            style.fill = color.clone();
        }
        if let Some(color) = self.edge_colors.as_ref().and_then(|c| c.get(i)) {
            style.edge_color = color.clone();
        }
        style
    }
}

impl Plot for ScatterPlot {
    fn bounds(&self) -> Option<Bounds> {
        finite_bounds(&self.x, &self.y)
    }

    fn zorder(&self) -> f64 {
        self.zorder
    }

    fn render_svg(&self, ctx: &RenderContext) -> String {
        let points = self
            .x
            .iter()
            .zip(self.y.iter())
            .enumerate()
            .filter(|(_, (x, y))| x.is_finite() && y.is_finite());

        // Shared attributes go on a group when every point looks the same
        if self.fill_colors.is_none() && self.edge_colors.is_none() {
            let mut svg = format!("<g {}>\n", self.marker_style.to_svg_style());
            for (_, (&x, &y)) in points {
                let (px, py) = ctx.transform(x, y);
                svg.push_str(&self.marker_style.shape_at(px, py, ""));
            }
            svg.push_str("</g>\n");
            return svg;
        }

        let mut svg = String::new();
        for (i, (&x, &y)) in points {
            let (px, py) = ctx.transform(x, y);
            svg.push_str(&self.style_for(i).render_at(px, py));
        }
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RenderContext {
        RenderContext {
            data_bounds: Bounds::new(0.0, 10.0, -2.0, 0.0),
            pixel_bounds: Bounds::new(0.0, 100.0, 0.0, 100.0),
        }
    }

    #[test]
    fn test_per_point_edge_colors() {
        let scatter = ScatterPlot::new(vec![2.0, 8.0], vec![-0.5, -1.5])
            .facecolor(Color::WHITE)
            .edge_colors(vec![Color::RED, Color::BLUE])
            .zorder(5.0);
        let svg = scatter.render_svg(&ctx());
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains("stroke=\"rgb(255,0,0)\""));
        assert!(svg.contains("stroke=\"rgb(0,0,255)\""));
        assert_eq!(svg.matches("fill=\"rgb(255,255,255)\"").count(), 2);
        assert_eq!(Plot::zorder(&scatter), 5.0);
    }

    #[test]
    fn test_uniform_points_share_a_group() {
        let scatter = ScatterPlot::new(vec![1.0, 2.0, 3.0], vec![-1.0, -1.0, -1.0]).color("C0");
        let svg = scatter.render_svg(&ctx());
        assert!(svg.starts_with("<g fill=\"#1f77b4\""));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert_eq!(svg.matches("fill=").count(), 1);
    }
}
