//! Minimal matplotlib-like plotting backend.
//! Provides a Figure/Axes model with line, scatter, band and text plots and SVG output.

pub mod axes;
pub mod backend;
pub mod data;
pub mod element;
pub mod error;
pub mod figure;
pub mod plot;
pub mod scale;
pub mod style;

pub use axes::{Axes, Margins};
pub use data::IntoPlotData;
pub use element::{AxisPosition, Bounds};
pub use error::{PlotError, PlotResult};
pub use figure::{AxesId, Figure, RenderOptions};
pub use plot::{BandPlot, LinePlot, Plot, ScatterPlot, TextPlot};
pub use scale::{LinearScale, Scale};
pub use style::{
    Color, DashPattern, FillStyle, LineStyle, Marker, MarkerStyle, TextStyle, ThemeConfig,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::plotting::axes::Axes;
    pub use crate::plotting::data::IntoPlotData;
    pub use crate::plotting::element::{AxisPosition, Bounds};
    pub use crate::plotting::error::{PlotError, PlotResult};
    pub use crate::plotting::figure::{AxesId, Figure, RenderOptions};
    pub use crate::plotting::plot::{BandPlot, LinePlot, ScatterPlot, TextPlot};
    pub use crate::plotting::style::{
        Color, DashPattern, FillStyle, LineCap, LineStyle, Marker, MarkerStyle, TextStyle,
        ThemeConfig,
    };
}
