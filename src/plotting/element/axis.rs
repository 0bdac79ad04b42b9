//! Axis (tick) configuration.

use crate::plotting::style::{Color, LineStyle, TextStyle};

/// Configuration for the ticks and tick labels of one axis.
#[derive(Debug, Clone)]
pub struct AxisConfig {
    /// Whether anything of this axis (marks, labels) is drawn
    pub visible: bool,
    /// Tick mark style
    pub line_style: LineStyle,
    pub show_tick_marks: bool,
    pub show_tick_labels: bool,
    /// Length of tick marks in pixels
    pub tick_length: f64,
    pub tick_label_style: TextStyle,
    /// Number of ticks to aim for when locating automatically
    pub num_ticks: usize,
    /// Padding between tick marks and labels
    pub tick_padding: f64,
    /// Custom tick positions (overrides automatic generation)
    pub tick_positions: Option<Vec<f64>>,
    /// Custom tick labels (must match tick_positions length)
    pub tick_labels: Option<Vec<String>>,
    /// Format string for tick labels (printf-style)
    pub tick_format: Option<String>,
}

impl AxisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Space the tick marks and labels take beside the spine, in pixels.
    pub fn decoration_extent(&self) -> f64 {
        if !self.visible {
            return 0.0;
        }
        let mut extent = 0.0;
        if self.show_tick_marks {
            extent += self.tick_length;
        }
        if self.show_tick_labels {
            extent += self.tick_padding;
        }
        extent
    }

    /// Format a tick value as a label.
    pub fn format_tick(&self, value: f64) -> String {
        if let Some(ref format) = self.tick_format {
            if format.contains("%e") || format.contains("%E") {
                format!("{:e}", value)
            } else if format.contains("%g") || format.contains("%G") {
                if value.abs() >= 1e6 || (value != 0.0 && value.abs() < 1e-4) {
                    format!("{:e}", value)
                } else {
                    format!("{}", value)
                }
            } else {
                let precision = format
                    .find('.')
                    .and_then(|i| format[i + 1..].chars().next())
                    .and_then(|c| c.to_digit(10))
                    .unwrap_or(2) as usize;
                format!("{:.prec$}", value, prec = precision)
            }
        } else if value == 0.0 {
            "0".to_string()
        } else if value.abs() >= 1e5 || value.abs() < 1e-3 {
            format!("{:.1e}", value)
        } else if value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            // Trim trailing zeros: 0.50 -> 0.5
            let s = format!("{:.3}", value);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        AxisConfig {
            visible: true,
            line_style: LineStyle::new().color(Color::BLACK).width(0.8),
            show_tick_marks: true,
            show_tick_labels: true,
            tick_length: 3.5,
            tick_label_style: TextStyle::new().font_size(10.0),
            num_ticks: 6,
            tick_padding: 3.5,
            tick_positions: None,
            tick_labels: None,
            tick_format: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tick_auto() {
        let axis = AxisConfig::default();
        assert_eq!(axis.format_tick(0.0), "0");
        assert_eq!(axis.format_tick(20.0), "20");
        assert_eq!(axis.format_tick(2.5), "2.5");
        assert_eq!(axis.format_tick(-0.25), "-0.25");
    }

    #[test]
    fn test_format_tick_precision() {
        let axis = AxisConfig {
            tick_format: Some("%.1f".to_string()),
            ..Default::default()
        };
        assert_eq!(axis.format_tick(3.14159), "3.1");
    }

    #[test]
    fn test_hidden_axis_takes_no_space() {
        let axis = AxisConfig {
            visible: false,
            ..Default::default()
        };
        assert_eq!(axis.decoration_extent(), 0.0);
    }
}
