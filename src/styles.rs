//! Matplotlib-style stylesheets.
//!
//! [`get_style`] only resolves where a named stylesheet lives; reading it is
//! left to [`Stylesheet::load`], so a wrong name surfaces as the plain I/O
//! error of the missing file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;

use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::style::{Color, ThemeConfig};

/// Stylesheet used when no name is given.
pub const DEFAULT_STYLE: &str = "mmll";

/// Points per inch; figure sizes in stylesheets are given in inches.
const POINTS_PER_INCH: f64 = 72.0;

/// Directory of the stylesheets shipped with the crate.
pub fn bundled_styles_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("styles")
}

/// Path of the bundled stylesheet `name`; the file is not checked for existence.
pub fn get_style(name: &str) -> PathBuf {
    get_style_in(bundled_styles_dir(), name)
}

/// Path of stylesheet `name` inside `dir`.
pub fn get_style_in(dir: impl AsRef<Path>, name: &str) -> PathBuf {
    let path = dir.as_ref().join(format!("{}.mplstyle", name));
    debug!("Style '{}' resolved to {}", name, path.display());
    path
}

/// Names of the stylesheets found in `dir`, sorted.
pub fn available_styles(dir: impl AsRef<Path>) -> PlotResult<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "mplstyle") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Parsed `key : value` pairs of a stylesheet, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    entries: Vec<(String, String)>,
}

impl Stylesheet {
    /// Read and parse a stylesheet file.
    pub fn load(path: impl AsRef<Path>) -> PlotResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let sheet = Self::from_reader(BufReader::new(file))?;
        debug!("Loaded {} style entries from {}", sheet.len(), path.display());
        Ok(sheet)
    }

    pub fn parse(text: &str) -> PlotResult<Self> {
        Self::from_reader(text.as_bytes())
    }

    /// Parse stylesheet lines; a later duplicate key overrides an earlier one.
    pub fn from_reader<R: BufRead>(reader: R) -> PlotResult<Self> {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let content = strip_comment(&line).trim();
            if content.is_empty() {
                continue;
            }
            let (key, value) = content.split_once(':').ok_or_else(|| {
                PlotError::InvalidData(format!(
                    "Malformed style line {} (expected 'key : value'): {}",
                    i + 1,
                    line
                ))
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(PlotError::InvalidData(format!(
                    "Missing key on style line {}: {}",
                    i + 1,
                    line
                )));
            }
            let value = unquote(value.trim()).to_string();
            match entries.iter_mut().find(|(k, _)| k == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key.to_string(), value)),
            }
        }
        Ok(Stylesheet { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Derive a theme from `base` with this stylesheet's settings applied.
    ///
    /// `font.size` is applied first so that named sizes such as `large`
    /// resolve against it wherever it appears in the file.
    pub fn apply(&self, base: &ThemeConfig) -> PlotResult<ThemeConfig> {
        let mut theme = base.clone();

        let base_size = match self.get("font.size") {
            Some(value) => {
                let size = parse_number("font.size", value)?;
                theme.title_style.font_size = size * 1.2;
                theme.label_style.font_size = size;
                theme.tick_style.font_size = size;
                size
            }
            None => theme.label_style.font_size,
        };

        for (key, value) in self.entries() {
            match key {
                "font.size" => {}
                "figure.facecolor" => theme.background = parse_color(value),
                "figure.figsize" => {
                    let (w, h) = parse_pair(key, value)?;
                    theme.figure_size = (w * POINTS_PER_INCH, h * POINTS_PER_INCH);
                }
                "axes.facecolor" => theme.plot_background = parse_color(value),
                "axes.edgecolor" => theme.axis_color = parse_color(value),
                "axes.linewidth" => theme.axis_width = parse_number(key, value)?,
                "axes.grid" => theme.show_grid = parse_bool(key, value)?,
                "axes.titlesize" => {
                    theme.title_style.font_size = parse_font_size(key, value, base_size)?
                }
                "axes.labelsize" => {
                    theme.label_style.font_size = parse_font_size(key, value, base_size)?
                }
                "axes.prop_cycle" => theme.color_cycle = parse_color_cycle(key, value)?,
                "font.family" => theme.font_family = value.to_string(),
                "lines.linewidth" => theme.line_width = parse_number(key, value)?,
                "lines.markersize" => theme.marker_size = parse_number(key, value)?,
                "xtick.labelsize" | "ytick.labelsize" => {
                    theme.tick_style.font_size = parse_font_size(key, value, base_size)?
                }
                "grid.color" => theme.grid_color = parse_color(value),
                "grid.alpha" => theme.grid_opacity = parse_number(key, value)?.clamp(0.0, 1.0),
                "text.color" => theme.text_color = parse_color(value),
                _ => debug!("Style key '{}' has no effect on rendering", key),
            }
        }
        theme.refresh_text_styles();
        Ok(theme)
    }
}

/// Drop a trailing `#` comment unless the `#` sits inside quotes.
fn strip_comment(line: &str) -> &str {
    let mut quote = None;
    for (i, c) in line.char_indices() {
        match (c, quote) {
            ('"' | '\'', None) => quote = Some(c),
            (c, Some(q)) if c == q => quote = None,
            ('#', None) => return &line[..i],
            _ => {}
        }
    }
    line
}

fn unquote(value: &str) -> &str {
    for q in ['"', '\''] {
        if let Some(inner) = value.strip_prefix(q).and_then(|v| v.strip_suffix(q)) {
            return inner;
        }
    }
    value
}

fn invalid_value(key: &str, value: &str) -> PlotError {
    PlotError::InvalidData(format!("Invalid value for '{}': {}", key, value))
}

fn parse_number(key: &str, value: &str) -> PlotResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid_value(key, value))
}

fn parse_bool(key: &str, value: &str) -> PlotResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid_value(key, value)),
    }
}

fn parse_pair(key: &str, value: &str) -> PlotResult<(f64, f64)> {
    let parts: Vec<&str> = value.split(',').collect();
    match parts.as_slice() {
        [w, h] => Ok((parse_number(key, w)?, parse_number(key, h)?)),
        _ => Err(invalid_value(key, value)),
    }
}

fn parse_color(value: &str) -> Color {
    Color::from(unquote(value.trim()))
}

/// A point size or one of the relative size names, scaled by `base`.
fn parse_font_size(key: &str, value: &str, base: f64) -> PlotResult<f64> {
    let scale = match value.trim() {
        "xx-small" => 0.579,
        "x-small" => 0.694,
        "small" | "smaller" => 0.833,
        "medium" => 1.0,
        "large" | "larger" => 1.2,
        "x-large" => 1.44,
        "xx-large" => 1.728,
        other => return parse_number(key, other),
    };
    Ok(base * scale)
}

/// Colors of a `cycler('color', [...])` or `cycler(color=[...])` expression.
fn parse_color_cycle(key: &str, value: &str) -> PlotResult<Vec<Color>> {
    let open = value.find('[').ok_or_else(|| invalid_value(key, value))?;
    let close = value.rfind(']').ok_or_else(|| invalid_value(key, value))?;
    if close < open || !value.contains("color") {
        return Err(invalid_value(key, value));
    }
    let colors: Vec<Color> = value[open + 1..close]
        .split(',')
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(parse_color)
        .collect();
    if colors.is_empty() {
        return Err(invalid_value(key, value));
    }
    Ok(colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = r##"
# Example stylesheet
font.family : Arial
font.size   : 7
axes.titlesize : large       # relative to font.size
axes.labelsize : 7
axes.linewidth : 0.5
axes.grid      : False
axes.prop_cycle : cycler('color', ['E64B35', '4DBBD5', "#00A087"])
figure.figsize : 3.5, 2.5
lines.markersize : 3
text.color : "333333"
savefig.bbox : tight
"##;

    #[test]
    fn test_parse_entries() {
        let sheet = Stylesheet::parse(SHEET).unwrap();
        assert_eq!(sheet.len(), 11);
        assert_eq!(sheet.get("font.family"), Some("Arial"));
        assert_eq!(sheet.get("axes.titlesize"), Some("large"));
        assert_eq!(sheet.get("text.color"), Some("333333"));
        assert_eq!(sheet.get("savefig.bbox"), Some("tight"));
        assert_eq!(sheet.entries().next(), Some(("font.family", "Arial")));
    }

    #[test]
    fn test_apply_to_theme() {
        let theme = Stylesheet::parse(SHEET)
            .unwrap()
            .apply(&ThemeConfig::default())
            .unwrap();
        assert_eq!(theme.font_family, "Arial");
        assert_eq!(theme.tick_style.font_family, "Arial");
        assert!((theme.title_style.font_size - 8.4).abs() < 1e-9);
        assert_eq!(theme.label_style.font_size, 7.0);
        assert_eq!(theme.tick_style.font_size, 7.0);
        assert_eq!(theme.axis_width, 0.5);
        assert!(!theme.show_grid);
        assert_eq!(theme.figure_size, (252.0, 180.0));
        assert_eq!(theme.marker_size, 3.0);
        assert_eq!(
            theme.color_cycle,
            vec![
                Color::Rgb(0xE6, 0x4B, 0x35),
                Color::Rgb(0x4D, 0xBB, 0xD5),
                Color::Rgb(0x00, 0xA0, 0x87)
            ]
        );
        assert_eq!(theme.title_style.color, Color::Rgb(0x33, 0x33, 0x33));
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let err = Stylesheet::parse("font.size : 7\nthis is not a style line\n").unwrap_err();
        match err {
            PlotError::InvalidData(msg) => assert!(msg.contains("line 2"), "{}", msg),
            other => panic!("unexpected error {}", other),
        }
    }

    #[test]
    fn test_bad_value_fails_apply() {
        let sheet = Stylesheet::parse("axes.linewidth : thick").unwrap();
        assert!(matches!(
            sheet.apply(&ThemeConfig::default()),
            Err(PlotError::InvalidData(_))
        ));
    }

    #[test]
    fn test_get_style_does_not_check_existence() {
        let path = get_style("no-such-style");
        assert!(path.ends_with("styles/no-such-style.mplstyle"));
        assert!(matches!(Stylesheet::load(&path), Err(PlotError::Io(_))));
    }

    #[test]
    fn test_bundled_styles_parse() {
        let names = available_styles(bundled_styles_dir()).unwrap();
        for name in ["mmll", "nature", "science"] {
            assert!(names.iter().any(|n| n == name), "missing {}", name);
            let sheet = Stylesheet::load(get_style(name)).unwrap();
            sheet.apply(&ThemeConfig::default()).unwrap();
        }
        assert_eq!(get_style(DEFAULT_STYLE), get_style("mmll"));
    }

    #[test]
    fn test_comment_inside_quotes_is_kept() {
        assert_eq!(strip_comment("a : '#fff' # note"), "a : '#fff' ");
        assert_eq!(unquote("'#fff'"), "#fff");
    }
}
