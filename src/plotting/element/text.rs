//! Text element for titles and axis labels.

use crate::plotting::style::TextStyle;

/// A positioned piece of text in pixel coordinates.
#[derive(Debug, Clone)]
pub struct Text {
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub style: TextStyle,
}

impl Text {
    pub fn new(content: impl Into<String>, x: f64, y: f64) -> Self {
        Text {
            content: content.into(),
            x,
            y,
            style: TextStyle::default(),
        }
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Copy of this text moved to a new pixel position.
    pub fn at(&self, x: f64, y: f64) -> Self {
        Text {
            x,
            y,
            ..self.clone()
        }
    }

    /// Generate SVG for this text element.
    pub fn to_svg(&self) -> String {
        let transform = if self.style.rotation != 0.0 {
            format!(
                " transform=\"rotate({},{:.2},{:.2})\"",
                self.style.rotation, self.x, self.y
            )
        } else {
            String::new()
        };

        format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" {}{}>{}</text>",
            self.x,
            self.y,
            self.style.to_svg_attrs(),
            transform,
            escape_xml(&self.content)
        )
    }
}

/// Escape special XML characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b & 'c'"), "a&lt;b &amp; &apos;c&apos;");
    }

    #[test]
    fn test_rotated_text() {
        let t = Text::new("Sepal", 0.0, 0.0).at(5.0, 6.0);
        let mut rotated = t.clone();
        rotated.style.rotation = -90.0;
        assert!(rotated.to_svg().contains("rotate(-90,5.00,6.00)"));
        assert!(!t.to_svg().contains("rotate"));
    }
}
