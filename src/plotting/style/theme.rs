//! Rendering defaults shared by a figure and its axes.

use super::color::{default_color_cycle, Color};
use super::text_style::TextStyle;

/// Theme configuration containing all style settings.
///
/// The default mirrors the stock matplotlib look; stylesheets
/// (see [`crate::styles::Stylesheet::apply`]) derive new configurations
/// from it without mutating the original.
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Default figure size in pixels
    pub figure_size: (f64, f64),
    /// Background color for the figure
    pub background: Color,
    /// Background color for the plot area
    pub plot_background: Color,
    /// Color for spines and tick marks
    pub axis_color: Color,
    pub axis_width: f64,
    pub grid_color: Color,
    pub grid_opacity: f64,
    pub grid_width: f64,
    /// Whether new axes show a grid
    pub show_grid: bool,
    pub text_color: Color,
    pub font_family: String,
    pub title_style: TextStyle,
    pub label_style: TextStyle,
    pub tick_style: TextStyle,
    /// Color cycle for plot series
    pub color_cycle: Vec<Color>,
    pub line_width: f64,
    pub marker_size: f64,
}

impl ThemeConfig {
    /// Next color in the cycle for the given series index.
    pub fn cycle_color(&self, index: usize) -> Color {
        if self.color_cycle.is_empty() {
            return Color::default();
        }
        self.color_cycle[index % self.color_cycle.len()].clone()
    }

    /// Re-derive the text styles after a font or color change.
    pub(crate) fn refresh_text_styles(&mut self) {
        for style in [
            &mut self.title_style,
            &mut self.label_style,
            &mut self.tick_style,
        ] {
            style.font_family = self.font_family.clone();
            style.color = self.text_color.clone();
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let font_family = "DejaVu Sans, Arial, sans-serif".to_string();
        ThemeConfig {
            figure_size: (500.0, 400.0),
            background: Color::WHITE,
            plot_background: Color::WHITE,
            axis_color: Color::BLACK,
            axis_width: 0.8,
            grid_color: Color::from("#b0b0b0"),
            grid_opacity: 1.0,
            grid_width: 0.8,
            show_grid: false,
            text_color: Color::BLACK,
            title_style: TextStyle::new()
                .font_family(font_family.clone())
                .font_size(12.0),
            label_style: TextStyle::new()
                .font_family(font_family.clone())
                .font_size(10.0),
            tick_style: TextStyle::new()
                .font_family(font_family.clone())
                .font_size(10.0),
            font_family,
            color_cycle: default_color_cycle(),
            line_width: 1.5,
            marker_size: 6.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_color_wraps() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.cycle_color(0), theme.cycle_color(10));
        assert_ne!(theme.cycle_color(0), theme.cycle_color(1));
    }

    #[test]
    fn test_refresh_text_styles() {
        let mut theme = ThemeConfig::default();
        theme.font_family = "Helvetica".to_string();
        theme.text_color = Color::DARK_GRAY;
        theme.refresh_text_styles();
        assert_eq!(theme.tick_style.font_family, "Helvetica");
        assert_eq!(theme.title_style.color, Color::DARK_GRAY);
    }
}
