//! Grid configuration.

use crate::plotting::style::{Color, DashPattern, LineStyle};

/// Configuration for grid lines.
#[derive(Debug, Clone)]
pub struct GridConfig {
    pub visible: bool,
    pub style: LineStyle,
    /// Whether to show X grid lines
    pub show_x: bool,
    /// Whether to show Y grid lines
    pub show_y: bool,
}

impl GridConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set which axes to show grid for.
    pub fn axes(mut self, show_x: bool, show_y: bool) -> Self {
        self.show_x = show_x;
        self.show_y = show_y;
        self
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            visible: false,
            style: LineStyle::new()
                .color(Color::LIGHT_GRAY)
                .width(0.8)
                .dash(DashPattern::Solid),
            show_x: true,
            show_y: true,
        }
    }
}
