//! Publication-style plotting helpers: stylesheets, color palettes, axis
//! polishing, grouped error-bar charts, font registration and
//! multi-format figure export, on top of a small Figure/Axes SVG backend.

pub mod charts;
pub mod config;
pub mod export;
pub mod fonts;
pub mod palettes;
pub mod plotting;
pub mod polish;
pub mod styles;

pub use charts::{error_bars, ErrorBarOptions, ErrorBarPlot, ObservationTable};
pub use export::{savefig, SaveOptions};
pub use plotting::{PlotError, PlotResult};
pub use polish::polish;
