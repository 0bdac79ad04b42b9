//! Plot types for visualizing data.

mod band;
mod line;
mod scatter;
mod text;

pub use band::BandPlot;
pub use line::LinePlot;
pub use scatter::ScatterPlot;
pub use text::TextPlot;

use crate::plotting::element::{Bounds, RenderContext};

/// Trait for plot types that can be rendered.
pub trait Plot {
    /// Data bounds this plot contributes to autoscaling, if any.
    fn bounds(&self) -> Option<Bounds>;

    /// Drawing order; higher values are drawn on top.
    fn zorder(&self) -> f64;

    /// Render this plot to SVG, returning the SVG elements as a string.
    fn render_svg(&self, ctx: &RenderContext) -> String;
}

/// Bounds of the finite points among paired coordinates.
pub(crate) fn finite_bounds(x: &[f64], y: &[f64]) -> Option<Bounds> {
    let mut bounds = Bounds::empty();
    for (&x, &y) in x.iter().zip(y.iter()) {
        if x.is_finite() && y.is_finite() {
            bounds.include_point(x, y);
        }
    }
    bounds.is_finite().then_some(bounds)
}
