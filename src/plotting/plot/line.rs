//! Line plot implementation.

use crate::plotting::element::{Bounds, RenderContext};
use crate::plotting::plot::{finite_bounds, Plot};
use crate::plotting::style::{Color, DashPattern, LineCap, LineStyle};

/// A polyline connecting data points.
#[derive(Debug, Clone)]
pub struct LinePlot {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub line_style: LineStyle,
    pub zorder: f64,
}

impl LinePlot {
    /// Create a new line plot from x and y data.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        LinePlot {
            x,
            y,
            line_style: LineStyle::default(),
            zorder: 2.0,
        }
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.line_style.color = color.into();
        self
    }

    pub fn linewidth(mut self, width: f64) -> Self {
        self.line_style.width = width;
        self
    }

    pub fn linestyle(mut self, dash: DashPattern) -> Self {
        self.line_style.dash = dash;
        self
    }

    pub fn capstyle(mut self, cap: LineCap) -> Self {
        self.line_style.cap = cap;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.line_style.opacity = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn zorder(mut self, zorder: f64) -> Self {
        self.zorder = zorder;
        self
    }
}

impl Plot for LinePlot {
    fn bounds(&self) -> Option<Bounds> {
        finite_bounds(&self.x, &self.y)
    }

    fn zorder(&self) -> f64 {
        self.zorder
    }

    fn render_svg(&self, ctx: &RenderContext) -> String {
        let points: Vec<(f64, f64)> = self
            .x
            .iter()
            .zip(self.y.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(&x, &y)| ctx.transform(x, y))
            .collect();

        if points.is_empty() {
            return String::new();
        }

        // A single point still draws as a zero-length segment (visible with round caps)
        let path_data: String = points
            .iter()
            .enumerate()
            .map(|(i, (x, y))| {
                if i == 0 {
                    format!("M{:.2},{:.2}", x, y)
                } else {
                    format!(" L{:.2},{:.2}", x, y)
                }
            })
            .collect();
        let path_data = if points.len() == 1 {
            format!("{} l0,0", path_data)
        } else {
            path_data
        };

        format!(
            "<path d=\"{}\" {}/>\n",
            path_data,
            self.line_style.to_svg_style()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RenderContext {
        RenderContext {
            data_bounds: Bounds::new(0.0, 10.0, 0.0, 10.0),
            pixel_bounds: Bounds::new(0.0, 100.0, 0.0, 100.0),
        }
    }

    #[test]
    fn test_line_path() {
        let line = LinePlot::new(vec![0.0, 10.0], vec![5.0, 5.0]).alpha(0.35);
        let svg = line.render_svg(&ctx());
        assert!(svg.contains("M0.00,50.00 L100.00,50.00"));
        assert!(svg.contains("stroke-opacity=\"0.35\""));
        assert_eq!(line.bounds(), Some(Bounds::new(0.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn test_non_finite_points_are_skipped() {
        let line = LinePlot::new(vec![f64::NAN], vec![1.0]);
        assert!(line.bounds().is_none());
        assert!(line.render_svg(&ctx()).is_empty());
    }
}
