//! Figure (canvas) implementation.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::{debug, warn};

use crate::plotting::axes::Axes;
use crate::plotting::backend::SvgBackend;
use crate::plotting::element::Bounds;
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::style::{Color, FillStyle, TextAnchor, ThemeConfig};

/// Padding kept between decorations and the figure edge by `tight_layout`, in pixels.
const LAYOUT_PAD: f64 = 6.0;

/// Handle to an axes owned by a [`Figure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxesId(usize);

impl AxesId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Options applied when rendering a figure.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Omit the figure and axes backgrounds
    pub transparent: bool,
    /// Figure background override
    pub facecolor: Option<Color>,
}

/// A figure containing one or more axes (subplots).
pub struct Figure {
    /// Figure width in pixels
    pub width: f64,
    /// Figure height in pixels
    pub height: f64,
    /// Background color
    pub background: Color,
    /// Axes (subplots) in this figure
    axes: Vec<Axes>,
    /// Theme configuration
    pub theme: ThemeConfig,
    /// Figure title
    pub title: Option<String>,
}

impl Figure {
    /// Create a new figure with the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Figure {
            width,
            height,
            ..Self::with_theme(ThemeConfig::default())
        }
    }

    /// Create a figure whose size, background and new axes follow `theme`.
    pub fn with_theme(theme: ThemeConfig) -> Self {
        let (width, height) = theme.figure_size;
        Figure {
            width,
            height,
            background: theme.background.clone(),
            axes: Vec::new(),
            theme,
            title: None,
        }
    }

    /// Set the figure size.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the background color.
    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.background = color.into();
        self
    }

    /// Set the figure title.
    pub fn suptitle(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add an axes at `position` (normalized figure coordinates).
    pub fn add_axes(&mut self, position: Bounds) -> AxesId {
        let mut axes = Axes::with_theme(self.theme.clone());
        axes.position = position;
        self.axes.push(axes);
        AxesId(self.axes.len() - 1)
    }

    /// Add a subplot at the given position.
    /// Uses matplotlib-style indexing: (rows, cols, index) where index is 1-based.
    pub fn add_subplot(&mut self, rows: usize, cols: usize, index: usize) -> PlotResult<AxesId> {
        if rows == 0 || cols == 0 || index == 0 || index > rows * cols {
            return Err(PlotError::InvalidConfig(format!(
                "Subplot index {} is outside a {}x{} grid",
                index, rows, cols
            )));
        }
        let index = index - 1;
        let row = index / cols;
        let col = index % cols;

        // Default subplot parameters: left 0.125, right 0.9, bottom 0.11, top 0.88
        let (left, right, bottom, top) = (0.125, 0.9, 0.11, 0.88);
        let (wspace, hspace) = (0.2, 0.2);
        let cell_w = (right - left) / (cols as f64 + wspace * (cols as f64 - 1.0));
        let cell_h = (top - bottom) / (rows as f64 + hspace * (rows as f64 - 1.0));

        let x0 = left + col as f64 * cell_w * (1.0 + wspace);
        let y1 = top - row as f64 * cell_h * (1.0 + hspace);
        Ok(self.add_axes(Bounds::new(x0, x0 + cell_w, y1 - cell_h, y1)))
    }

    /// The most recently added axes, creating one if the figure has none.
    pub fn gca(&mut self) -> AxesId {
        match self.axes.len() {
            0 => self.add_axes(Axes::default().position),
            n => AxesId(n - 1),
        }
    }

    pub fn axes(&self, id: AxesId) -> PlotResult<&Axes> {
        self.axes.get(id.0).ok_or_else(|| unknown_axes(id))
    }

    pub fn axes_mut(&mut self, id: AxesId) -> PlotResult<&mut Axes> {
        self.axes.get_mut(id.0).ok_or_else(|| unknown_axes(id))
    }

    /// Handles of all axes, in creation order.
    pub fn axes_ids(&self) -> impl Iterator<Item = AxesId> {
        (0..self.axes.len()).map(AxesId)
    }

    /// Split a new axes off the left side of `id`.
    ///
    /// The new axes is `fraction` times as wide as the remaining one, with a
    /// gap of `pad` times that width between them; together they fill the
    /// area the original axes occupied.
    pub fn append_axes_left(&mut self, id: AxesId, fraction: f64, pad: f64) -> PlotResult<AxesId> {
        if !(fraction.is_finite() && fraction > 0.0) || !(pad.is_finite() && pad >= 0.0) {
            return Err(PlotError::InvalidConfig(format!(
                "Appended axes needs a positive size and non-negative pad, got {} and {}",
                fraction, pad
            )));
        }
        let position = self.axes(id)?.position;
        let main_width = position.width() / (1.0 + fraction + pad);
        let new_right = position.x_min + fraction * main_width;

        self.axes_mut(id)?.position.x_min = new_right + pad * main_width;
        let new_id = self.add_axes(Bounds::new(
            position.x_min,
            new_right,
            position.y_min,
            position.y_max,
        ));
        debug!(
            "Appended axes {} left of axes {} ({:.0}% width)",
            new_id.0,
            id.0,
            fraction * 100.0
        );
        Ok(new_id)
    }

    /// Re-flow all axes so their decorations fit inside the figure.
    ///
    /// The axes keep their arrangement relative to each other; the box they
    /// span together is shrunk or grown until every tick label, axis label
    /// and title fits with a small padding.
    pub fn tight_layout(&mut self) {
        if self.axes.is_empty() {
            return;
        }
        let mut union = Bounds::empty();
        for ax in &self.axes {
            union.include_bounds(&ax.position);
        }
        if union.width() <= 0.0 || union.height() <= 0.0 {
            return;
        }

        // Space each side needs beyond the union box, in figure fractions
        let (mut left, mut right, mut bottom, mut top) = (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64);
        for ax in &self.axes {
            let m = ax.decoration_margins();
            left = left.max(m.left / self.width - (ax.position.x_min - union.x_min));
            right = right.max(m.right / self.width - (union.x_max - ax.position.x_max));
            bottom = bottom.max(m.bottom / self.height - (ax.position.y_min - union.y_min));
            top = top.max(m.top / self.height - (union.y_max - ax.position.y_max));
        }
        if self.title.is_some() {
            top += (self.theme.title_style.font_size * 1.2 + LAYOUT_PAD) / self.height;
        }

        let pad_x = LAYOUT_PAD / self.width;
        let pad_y = LAYOUT_PAD / self.height;
        let target = Bounds::new(
            left + pad_x,
            1.0 - right - pad_x,
            bottom + pad_y,
            1.0 - top - pad_y,
        );
        if target.width() <= 0.0 || target.height() <= 0.0 {
            warn!("tight_layout not applied: decorations do not fit in the figure");
            return;
        }

        let sx = target.width() / union.width();
        let sy = target.height() / union.height();
        for ax in &mut self.axes {
            let p = ax.position;
            ax.position = Bounds::new(
                target.x_min + (p.x_min - union.x_min) * sx,
                target.x_min + (p.x_max - union.x_min) * sx,
                target.y_min + (p.y_min - union.y_min) * sy,
                target.y_min + (p.y_max - union.y_min) * sy,
            );
        }
    }

    /// Render the figure to an SVG string.
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    /// Render the figure to an SVG string with explicit options.
    pub fn render_with(&self, options: &RenderOptions) -> String {
        let mut backend = SvgBackend::new(self.width, self.height);

        if !options.transparent {
            let face = options
                .facecolor
                .clone()
                .unwrap_or_else(|| self.background.clone());
            backend.draw_rect(0.0, 0.0, self.width, self.height, &FillStyle::new(face));
        }

        if let Some(ref title) = self.title {
            let style = self.theme.title_style.clone().anchor(TextAnchor::Middle);
            backend.draw_text(
                self.width / 2.0,
                LAYOUT_PAD + style.font_size,
                title,
                &style,
            );
        }

        for (i, axes) in self.axes.iter().enumerate() {
            backend.add_content(axes.render_svg(i, self.width, self.height, options.transparent));
        }

        backend.render()
    }

    /// Save the figure as SVG.
    pub fn save(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        let svg = self.render();
        let mut file = File::create(path)?;
        file.write_all(svg.as_bytes())?;
        Ok(())
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::with_theme(ThemeConfig::default())
    }
}

fn unknown_axes(id: AxesId) -> PlotError {
    PlotError::InvalidConfig(format!("Figure has no axes with id {}", id.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_gca_creates_axes_once() {
        let mut fig = Figure::default();
        let a = fig.gca();
        let b = fig.gca();
        assert_eq!(a, b);
        assert_eq!(fig.axes_ids().count(), 1);
    }

    #[test]
    fn test_unknown_axes_id() {
        let fig = Figure::default();
        assert!(matches!(
            fig.axes(AxesId(3)),
            Err(PlotError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_add_subplot_grid() {
        let mut fig = Figure::default();
        let first = fig.add_subplot(1, 2, 1).unwrap();
        let second = fig.add_subplot(1, 2, 2).unwrap();
        let p1 = fig.axes(first).unwrap().position;
        let p2 = fig.axes(second).unwrap().position;
        assert!(p1.x_max < p2.x_min);
        assert!(approx(p1.y_min, p2.y_min));
        assert!(fig.add_subplot(1, 2, 3).is_err());
    }

    #[test]
    fn test_append_axes_left_splits_area() {
        let mut fig = Figure::default();
        let ax = fig.add_axes(Bounds::new(0.1, 0.8, 0.1, 0.9));
        let cax = fig.append_axes_left(ax, 0.4, 0.0).unwrap();
        let main = fig.axes(ax).unwrap().position;
        let side = fig.axes(cax).unwrap().position;
        assert!(approx(main.width(), 0.5));
        assert!(approx(side.width(), 0.2));
        assert!(approx(side.x_min, 0.1));
        assert!(approx(side.x_max, main.x_min));
        assert_eq!(side.y_min, main.y_min);
        assert!(fig.append_axes_left(ax, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_tight_layout_keeps_decorations_inside() {
        let mut fig = Figure::default();
        let ax = fig.add_axes(Bounds::new(0.0, 1.0, 0.0, 1.0));
        fig.axes_mut(ax)
            .unwrap()
            .plot(vec![0.0, 100.0], vec![0.0, 1000.0])
            .build();
        fig.axes_mut(ax).unwrap().set_xlabel("Sepal Length");
        fig.tight_layout();
        let axes = fig.axes(ax).unwrap();
        let m = axes.decoration_margins();
        let p = axes.position;
        assert!(p.x_min * fig.width >= m.left);
        assert!(p.y_min * fig.height >= m.bottom);
        assert!(p.x_max < 1.0 && p.y_max < 1.0);
    }

    #[test]
    fn test_titles_reserve_space() {
        let mut plain = Figure::default();
        let a = plain.add_subplot(1, 1, 1).unwrap();
        plain.tight_layout();

        let mut titled = Figure::default().suptitle("Total bill");
        let b = titled.add_subplot(1, 1, 1).unwrap();
        titled.axes_mut(b).unwrap().set_title("By day");
        titled.tight_layout();

        let top_plain = plain.axes(a).unwrap().position.y_max;
        let top_titled = titled.axes(b).unwrap().position.y_max;
        assert!(top_titled < top_plain);
        let svg = titled.render();
        assert!(svg.contains(">Total bill</text>"));
        assert!(svg.contains(">By day</text>"));
    }

    #[test]
    fn test_transparent_render_has_no_background() {
        let mut fig = Figure::default();
        fig.gca();
        let opaque = fig.render();
        let clear = fig.render_with(&RenderOptions {
            transparent: true,
            facecolor: None,
        });
        assert!(opaque.contains("fill=\"rgb(255,255,255)\""));
        assert!(!clear.contains("fill=\"rgb(255,255,255)\""));
    }
}
