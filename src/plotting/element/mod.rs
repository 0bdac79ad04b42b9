//! Visual elements for plots.

mod axis;
mod grid;
mod spine;
pub mod text;

pub use axis::AxisConfig;
pub use grid::GridConfig;
pub use spine::{AxisPosition, Spine, Spines};
pub use text::{escape_xml, Text};

/// Bounding box for elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Create a new bounds with the given values.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// An empty accumulator that any included point replaces.
    pub fn empty() -> Self {
        Bounds::new(
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
        )
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// True once at least one finite point has been included.
    pub fn is_finite(&self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
    }

    /// Expand bounds to include a point.
    pub fn include_point(&mut self, x: f64, y: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    /// Expand bounds to include another bounds.
    pub fn include_bounds(&mut self, other: &Bounds) {
        self.x_min = self.x_min.min(other.x_min);
        self.x_max = self.x_max.max(other.x_max);
        self.y_min = self.y_min.min(other.y_min);
        self.y_max = self.y_max.max(other.y_max);
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::new(0.0, 1.0, 0.0, 1.0)
    }
}

/// Data-to-pixel mapping for one axes during rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// The data bounds being rendered.
    pub data_bounds: Bounds,
    /// The pixel bounds to render into.
    pub pixel_bounds: Bounds,
}

impl RenderContext {
    /// Transform a data point to pixel coordinates.
    pub fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        (self.transform_x(x), self.transform_y(y))
    }

    pub fn transform_x(&self, x: f64) -> f64 {
        let x_norm = (x - self.data_bounds.x_min) / self.data_bounds.width();
        self.pixel_bounds.x_min + x_norm * self.pixel_bounds.width()
    }

    pub fn transform_y(&self, y: f64) -> f64 {
        let y_norm = (y - self.data_bounds.y_min) / self.data_bounds.height();
        // Flip Y axis since SVG has Y increasing downward
        self.pixel_bounds.y_max - y_norm * self.pixel_bounds.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_context_flips_y() {
        let ctx = RenderContext {
            data_bounds: Bounds::new(0.0, 10.0, -2.0, 0.0),
            pixel_bounds: Bounds::new(100.0, 200.0, 50.0, 150.0),
        };
        assert_eq!(ctx.transform(0.0, 0.0), (100.0, 50.0));
        assert_eq!(ctx.transform(10.0, -2.0), (200.0, 150.0));
    }

    #[test]
    fn test_empty_bounds_accumulate() {
        let mut b = Bounds::empty();
        assert!(!b.is_finite());
        b.include_point(1.0, -1.0);
        b.include_point(3.0, 2.0);
        assert_eq!(b, Bounds::new(1.0, 3.0, -1.0, 2.0));
    }
}
