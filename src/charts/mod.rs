//! Statistical charts built on the plotting backend.

pub mod error_bars;
pub mod stats;
pub mod table;

pub use error_bars::{
    error_bars, error_bars_with_theme, CentralTendency, Dispersion, ErrorBarLayout,
    ErrorBarOptions, ErrorBarPlot, GroupStats, SectionSlot,
};
pub use table::{Column, ObservationTable};
