//! Named color palettes.
//!
//! The table is static data; [`get_palette`] is the only lookup logic. An
//! unknown name is not an error: a warning lists the supported names and the
//! lookup yields `None`.

use log::warn;

use crate::plotting::style::Color;

const NATURE_REVIEWS: &[&str] = &[
    "#E64B35", "#4DBBD5", "#00A087", "#3C5488", "#F39B7F", "#8491B4", "#91D1C2FF", "#DC0000",
    "#7E6148", "#B09C85",
];

const ECONOMIST: &[&str] = &[
    "#6794a7", "#014d64", "#7ad2f6", "#01a2d9", "#7bc0c1", "#00887d", "#91D1C2FF", "#DC0000",
    "#7E6148", "#B09C85",
];

const AAAS: &[&str] = &[
    "#3B4992FF", "#EE0000FF", "#008B45FF", "#631879FF", "#008280FF", "#BB0021FF", "#5F559BFF",
    "#A20056FF", "#808180FF", "#1B1919FF",
];

// Composition with Red, Blue and Yellow
const MONDRIAN: &[&str] = &["#DD271C", "#015A9C", "#EBDC75", "#071C13", "#E5E3E4"];

// The Great Wave off Kanagawa
const KANAGAWA: &[&str] = &["#7E9CA7", "#C1B9A9", "#DED4C5", "#07244b", "#45494D"];

/// Palette name to ordered hex colors.
pub static PALETTES: &[(&str, &[&str])] = &[
    ("nature-reviews", NATURE_REVIEWS),
    ("nature", NATURE_REVIEWS),
    ("economist", ECONOMIST),
    ("aaas", AAAS),
    ("mondrian", MONDRIAN),
    ("kanagawa", KANAGAWA),
];

/// Default palette name.
pub const DEFAULT_PALETTE: &str = "nature-reviews";

/// Colorblind-safe categorical palette used for default group colors.
const COLORBLIND: &[&str] = &[
    "#0173B2", "#DE8F05", "#029E73", "#D55E00", "#CC78BC", "#CA9161", "#FBAFE4", "#949494",
    "#ECE133", "#56B4E9",
];

/// Names accepted by [`get_palette`].
pub fn supported_palettes() -> Vec<&'static str> {
    PALETTES.iter().map(|(name, _)| *name).collect()
}

/// Hex colors of a named palette, or `None` (with a warning) for an unknown name.
pub fn get_palette(name: &str) -> Option<&'static [&'static str]> {
    match PALETTES.iter().find(|(n, _)| *n == name) {
        Some((_, colors)) => Some(*colors),
        None => {
            warn!(
                "No valid color scheme '{}' specified, returning none. The supported color schemes are {}",
                name,
                supported_palettes().join(", ")
            );
            None
        }
    }
}

/// Colors of a named palette as RGB triples; any alpha channel is dropped.
pub fn get_palette_rgb(name: &str) -> Option<Vec<(u8, u8, u8)>> {
    get_palette_colors(name).map(|colors| colors.iter().map(Color::to_rgb).collect())
}

/// Colors of a named palette, ready for plotting.
pub fn get_palette_colors(name: &str) -> Option<Vec<Color>> {
    get_palette(name).map(|hexes| hexes.iter().map(|&h| Color::from(h)).collect())
}

/// `n` colors from the colorblind-safe palette, cycling when `n` exceeds it.
pub fn colorblind(n: usize) -> Vec<Color> {
    COLORBLIND
        .iter()
        .cycle()
        .take(n)
        .map(|&h| Color::from(h))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nature_aliases_nature_reviews() {
        assert_eq!(get_palette("nature"), get_palette("nature-reviews"));
        assert_eq!(get_palette("nature").map(|p| p.len()), Some(10));
        assert_eq!(get_palette("nature").map(|p| p[0]), Some("#E64B35"));
    }

    #[test]
    fn test_every_supported_palette_resolves() {
        for name in supported_palettes() {
            let colors = get_palette_colors(name).unwrap();
            assert!(!colors.is_empty());
        }
        assert_eq!(get_palette("mondrian").map(|p| p.len()), Some(5));
    }

    #[test]
    fn test_unknown_palette_is_none() {
        assert!(get_palette("viridis").is_none());
        assert!(get_palette_rgb("viridis").is_none());
    }

    #[test]
    fn test_rgb_drops_alpha() {
        let rgb = get_palette_rgb("aaas").unwrap();
        assert_eq!(rgb[0], (0x3B, 0x49, 0x92));
        assert_eq!(rgb[9], (0x1B, 0x19, 0x19));
    }

    #[test]
    fn test_colorblind_cycles() {
        let colors = colorblind(12);
        assert_eq!(colors.len(), 12);
        assert_eq!(colors[0], colors[10]);
        assert_eq!(colors[0].to_hex(), "#0173b2");
    }
}
