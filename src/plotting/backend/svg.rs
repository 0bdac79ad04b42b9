//! SVG rendering backend.

use crate::plotting::element::text::escape_xml;
use crate::plotting::style::{FillStyle, TextStyle};

/// SVG rendering backend.
#[derive(Debug)]
pub struct SvgBackend {
    /// Image width in pixels
    pub width: f64,
    /// Image height in pixels
    pub height: f64,
    /// SVG content accumulated during rendering
    content: Vec<String>,
    /// SVG defs section (clip paths, etc.)
    defs: Vec<String>,
    /// Whether to include XML declaration
    include_declaration: bool,
}

impl SvgBackend {
    /// Create a new SVG backend with the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        SvgBackend {
            width,
            height,
            content: Vec::new(),
            defs: Vec::new(),
            include_declaration: true,
        }
    }

    /// Set whether to include XML declaration.
    pub fn include_declaration(mut self, include: bool) -> Self {
        self.include_declaration = include;
        self
    }

    /// Add raw SVG content.
    pub fn add_content(&mut self, content: String) {
        self.content.push(content);
    }

    /// Add content to the defs section.
    pub fn add_def(&mut self, def: String) {
        self.defs.push(def);
    }

    /// Draw a rectangle.
    pub fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: &FillStyle) {
        self.content.push(format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>",
            x,
            y,
            width,
            height,
            style.to_svg_style()
        ));
    }

    /// Draw text.
    pub fn draw_text(&mut self, x: f64, y: f64, text: &str, style: &TextStyle) {
        let transform = if style.rotation != 0.0 {
            format!(" transform=\"rotate({},{:.2},{:.2})\"", style.rotation, x, y)
        } else {
            String::new()
        };

        self.content.push(format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" {}{}>{}</text>",
            x,
            y,
            style.to_svg_attrs(),
            transform,
            escape_xml(text)
        ));
    }

    /// Render the final SVG string.
    pub fn render(self) -> String {
        let declaration = if self.include_declaration {
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"
        } else {
            ""
        };

        let defs_section = if self.defs.is_empty() {
            String::new()
        } else {
            format!("  <defs>\n    {}\n  </defs>\n", self.defs.join("\n    "))
        };

        format!(
            r#"{}<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
{}{}
</svg>"#,
            declaration,
            self.width,
            self.height,
            self.width,
            self.height,
            defs_section,
            self.content.join("\n  ")
        )
    }
}

impl Default for SvgBackend {
    fn default() -> Self {
        Self::new(500.0, 400.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::style::Color;

    #[test]
    fn test_document_shell() {
        let mut backend = SvgBackend::new(200.0, 100.0).include_declaration(false);
        backend.draw_rect(0.0, 0.0, 200.0, 100.0, &FillStyle::new(Color::WHITE));
        let svg = backend.render();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"200\""));
        assert!(svg.contains("viewBox=\"0 0 200 100\""));
        assert!(!svg.contains("<defs>"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_defs_section() {
        let mut backend = SvgBackend::default();
        backend.add_def("<clipPath id=\"c\"/>".to_string());
        backend.draw_text(1.0, 2.0, "a<b", &TextStyle::default());
        let svg = backend.render();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<defs>\n    <clipPath id=\"c\"/>"));
        assert!(svg.contains(">a&lt;b</text>"));
    }
}
