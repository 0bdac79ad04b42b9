//! Color definitions and utilities.

use std::fmt;

/// Represents a color for plotting elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    /// RGB color with values 0-255
    Rgb(u8, u8, u8),
    /// RGBA color with alpha 0.0-1.0
    Rgba(u8, u8, u8, f64),
    /// Named color (e.g., "red", "C0", "tab:blue")
    Named(String),
}

impl Color {
    /// Create a new RGB color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Create a new RGBA color.
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::Rgba(r, g, b, a.clamp(0.0, 1.0))
    }

    /// Create a color from a hex string (`#RRGGBB` or `#RRGGBBAA`, `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => {
                let alpha = channel(6)?;
                if alpha == 255 {
                    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
                } else {
                    Some(Color::Rgba(
                        channel(0)?,
                        channel(2)?,
                        channel(4)?,
                        alpha as f64 / 255.0,
                    ))
                }
            }
            _ => None,
        }
    }

    /// Convert the color to an SVG-compatible string.
    pub fn to_svg_string(&self) -> String {
        match self {
            Color::Rgb(r, g, b) => format!("rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => format!("rgba({},{},{},{})", r, g, b, a),
            Color::Named(name) => resolve_named_color(name),
        }
    }

    /// `#rrggbb` form, dropping any alpha.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Get the alpha value (opacity) of the color.
    pub fn alpha(&self) -> f64 {
        match self {
            Color::Rgb(_, _, _) => 1.0,
            Color::Rgba(_, _, _, a) => *a,
            Color::Named(_) => 1.0,
        }
    }

    /// Convert to RGB tuple, resolving named colors.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Rgb(r, g, b) => (*r, *g, *b),
            Color::Rgba(r, g, b, _) => (*r, *g, *b),
            Color::Named(name) => {
                let resolved = resolve_named_color(name);
                Color::from_hex(&resolved)
                    .map(|color| color.to_rgb())
                    .unwrap_or((0, 0, 0)) // fallback to black
            }
        }
    }

    // Predefined colors
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const GRAY: Color = Color::Rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::Rgb(211, 211, 211);
    pub const DARK_GRAY: Color = Color::Rgb(64, 64, 64);
    /// Neutral grey used for row shading.
    pub const SHADOW_GRAY: Color = Color::Rgb(0x93, 0x95, 0x96);
    pub const TRANSPARENT: Color = Color::Rgba(0, 0, 0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Color::Rgb(0x1f, 0x77, 0xb4)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_svg_string())
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.starts_with('#') || (s.len() >= 6 && s.chars().all(|c| c.is_ascii_hexdigit())) {
            Color::from_hex(s).unwrap_or_else(|| Color::Named(s.to_string()))
        } else {
            Color::Named(s.to_string())
        }
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::from(s.as_str())
    }
}

impl From<&String> for Color {
    fn from(s: &String) -> Self {
        Color::from(s.as_str())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, f64)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, f64)) -> Self {
        Color::rgba(r, g, b, a)
    }
}

/// Resolve a named color to its hex value.
fn resolve_named_color(name: &str) -> String {
    let hex = match name.to_lowercase().as_str() {
        "black" | "k" => "#000000",
        "white" | "w" => "#ffffff",
        "red" | "r" => "#ff0000",
        "green" | "g" => "#008000",
        "blue" | "b" => "#0000ff",
        "yellow" | "y" => "#ffff00",
        "cyan" | "c" | "aqua" => "#00ffff",
        "magenta" | "m" | "fuchsia" => "#ff00ff",
        "orange" => "#ffa500",
        "purple" => "#800080",
        "gray" | "grey" => "#808080",
        "lightgray" | "lightgrey" => "#d3d3d3",
        "darkgray" | "darkgrey" => "#404040",
        "navy" => "#000080",
        "teal" => "#008080",
        "none" => "none",

        // Matplotlib tab10 cycle (C0-C9 and tab: names)
        "c0" | "tab:blue" => "#1f77b4",
        "c1" | "tab:orange" => "#ff7f0e",
        "c2" | "tab:green" => "#2ca02c",
        "c3" | "tab:red" => "#d62728",
        "c4" | "tab:purple" => "#9467bd",
        "c5" | "tab:brown" => "#8c564b",
        "c6" | "tab:pink" => "#e377c2",
        "c7" | "tab:gray" | "tab:grey" => "#7f7f7f",
        "c8" | "tab:olive" => "#bcbd22",
        "c9" | "tab:cyan" => "#17becf",

        // Might still be a valid CSS color
        _ => return name.to_string(),
    };
    hex.to_string()
}

/// The default (tab10) color cycle.
pub fn default_color_cycle() -> Vec<Color> {
    (0..10)
        .map(|i| Color::Named(format!("C{}", i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_with_opaque_alpha() {
        assert_eq!(Color::from_hex("#91D1C2FF"), Some(Color::Rgb(0x91, 0xd1, 0xc2)));
        assert_eq!(Color::from_hex("E64B35"), Some(Color::Rgb(0xe6, 0x4b, 0x35)));
        assert!(Color::from_hex("#12345").is_none());
    }

    #[test]
    fn test_from_hex_with_alpha() {
        match Color::from_hex("#00000080") {
            Some(Color::Rgba(0, 0, 0, a)) => assert!((a - 128.0 / 255.0).abs() < 1e-9),
            other => panic!("unexpected color {:?}", other),
        }
    }

    #[test]
    fn test_named_colors_resolve() {
        assert_eq!(Color::from("C1").to_hex(), "#ff7f0e");
        assert_eq!(Color::from("tab:blue").to_rgb(), (0x1f, 0x77, 0xb4));
        assert_eq!(Color::from("#939596").to_hex(), "#939596");
        assert_eq!(Color::from("k").to_svg_string(), "#000000");
    }
}
