//! Marker styles for scatter points.

use super::color::Color;

/// Marker shapes for data points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    Circle,
    Square,
    Diamond,
    /// Upward-pointing triangle
    Triangle,
}

impl Marker {
    /// Parse from a matplotlib-style marker character.
    pub fn from_format_char(c: char) -> Option<Self> {
        match c {
            'o' => Some(Marker::Circle),
            's' => Some(Marker::Square),
            'D' | 'd' => Some(Marker::Diamond),
            '^' => Some(Marker::Triangle),
            _ => None,
        }
    }

    /// SVG path data for the marker centered at the origin, `None` for circles.
    /// The size parameter is the radius (half the marker size).
    fn to_svg_path(self, size: f64) -> Option<String> {
        match self {
            Marker::Circle => None,
            Marker::Square => Some(format!(
                "M{},{} L{},{} L{},{} L{},{} Z",
                -size, -size, size, -size, size, size, -size, size
            )),
            Marker::Diamond => {
                let s = size * 1.2;
                Some(format!("M0,{} L{},0 L0,{} L{},0 Z", -s, s, s, -s))
            }
            Marker::Triangle => {
                let h = size * 1.1547; // equilateral height factor
                Some(format!(
                    "M0,{} L{},{} L{},{} Z",
                    -h, -size, h * 0.5, size, h * 0.5
                ))
            }
        }
    }
}

/// Style configuration for markers.
#[derive(Debug, Clone)]
pub struct MarkerStyle {
    pub marker: Marker,
    /// Marker size (diameter in pixels)
    pub size: f64,
    pub fill: Color,
    pub edge_color: Color,
    pub edge_width: f64,
    pub fill_opacity: f64,
}

impl MarkerStyle {
    /// Create a new marker style.
    pub fn new(marker: Marker) -> Self {
        MarkerStyle {
            marker,
            ..Default::default()
        }
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn fill(mut self, color: impl Into<Color>) -> Self {
        self.fill = color.into();
        self
    }

    pub fn edge_color(mut self, color: impl Into<Color>) -> Self {
        self.edge_color = color.into();
        self
    }

    pub fn edge_width(mut self, width: f64) -> Self {
        self.edge_width = width;
        self
    }

    /// Generate SVG style attributes.
    pub fn to_svg_style(&self) -> String {
        let mut attrs = vec![format!("fill=\"{}\"", self.fill.to_svg_string())];
        if self.edge_width > 0.0 {
            attrs.push(format!("stroke=\"{}\"", self.edge_color.to_svg_string()));
            attrs.push(format!("stroke-width=\"{}\"", self.edge_width));
        } else {
            attrs.push("stroke=\"none\"".to_string());
        }

        let opacity = self.fill_opacity * self.fill.alpha();
        if opacity < 1.0 {
            attrs.push(format!("fill-opacity=\"{}\"", opacity));
        }

        attrs.join(" ")
    }

    /// Render the marker at a pixel position, returning one SVG element.
    pub fn render_at(&self, x: f64, y: f64) -> String {
        self.shape_at(x, y, &self.to_svg_style())
    }

    /// The marker shape at a pixel position with the given style attributes;
    /// an empty `attrs` leaves styling to an enclosing group.
    pub fn shape_at(&self, x: f64, y: f64, attrs: &str) -> String {
        let radius = self.size / 2.0;
        let sep = if attrs.is_empty() { "" } else { " " };

        match self.marker.to_svg_path(radius) {
            None => format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\"{}{}/>\n",
                x, y, radius, sep, attrs
            ),
            Some(path) => format!(
                "<path d=\"{}\" transform=\"translate({:.2},{:.2})\"{}{}/>\n",
                path, x, y, sep, attrs
            ),
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        MarkerStyle {
            marker: Marker::Circle,
            size: 6.0,
            fill: Color::default(),
            edge_color: Color::default(),
            edge_width: 1.0,
            fill_opacity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_circle_marker() {
        let style = MarkerStyle::new(Marker::Circle)
            .size(6.0)
            .fill(Color::WHITE)
            .edge_color(Color::RED);
        let svg = style.render_at(10.0, 20.0);
        assert!(svg.starts_with("<circle cx=\"10.00\" cy=\"20.00\" r=\"3.00\""));
        assert!(svg.contains("fill=\"rgb(255,255,255)\""));
        assert!(svg.contains("stroke=\"rgb(255,0,0)\""));
    }

    #[test]
    fn test_path_markers() {
        let svg = MarkerStyle::new(Marker::Square).render_at(0.0, 0.0);
        assert!(svg.starts_with("<path d=\"M"));
        assert_eq!(Marker::from_format_char('D'), Some(Marker::Diamond));
        assert_eq!(Marker::from_format_char('?'), None);
    }
}
