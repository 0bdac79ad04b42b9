//! Axes (subplot) implementation.

use crate::plotting::data::IntoPlotData;
use crate::plotting::element::{
    AxisConfig, AxisPosition, Bounds, GridConfig, RenderContext, Spines, Text,
};
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::plot::{BandPlot, LinePlot, Plot, ScatterPlot, TextPlot};
use crate::plotting::scale::{LinearScale, Scale};
use crate::plotting::style::{
    Color, DashPattern, DominantBaseline, LineCap, LineStyle, Marker, TextAnchor, TextStyle,
    ThemeConfig,
};

/// Fraction of the data range added on each side when autoscaling.
const AUTOSCALE_MARGIN: f64 = 0.05;
/// Gap between tick labels and an axis label, in pixels.
const LABEL_PAD: f64 = 4.0;
/// Gap between the plot area and the title, in pixels.
const TITLE_PAD: f64 = 6.0;

/// Pixel space an axes needs around its plot area for ticks, labels and title.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// An axes object representing a single plot area.
pub struct Axes {
    /// Position within figure (normalized coordinates, origin bottom-left)
    pub position: Bounds,
    x_scale: Box<dyn Scale>,
    y_scale: Box<dyn Scale>,
    /// Plots contained in this axes, in insertion order
    plots: Vec<Box<dyn Plot>>,
    pub title: Option<Text>,
    pub x_label: Option<Text>,
    pub y_label: Option<Text>,
    pub grid: GridConfig,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    pub spines: Spines,
    /// Union of the plots' data bounds
    data_bounds: Option<Bounds>,
    /// Manual x-axis limits
    x_lim: Option<(f64, f64)>,
    /// Manual y-axis limits
    y_lim: Option<(f64, f64)>,
    /// Current color cycle index
    color_index: usize,
    pub theme: ThemeConfig,
}

impl Axes {
    /// Create a new axes with the default theme.
    pub fn new() -> Self {
        Self::with_theme(ThemeConfig::default())
    }

    /// Create a new axes whose spines, ticks, grid and colors follow `theme`.
    pub fn with_theme(theme: ThemeConfig) -> Self {
        let axis_line = LineStyle::new()
            .color(theme.axis_color.clone())
            .width(theme.axis_width)
            .cap(LineCap::Butt);
        let axis = AxisConfig {
            line_style: axis_line.clone(),
            tick_label_style: theme.tick_style.clone(),
            ..Default::default()
        };
        let mut spines = Spines::default();
        spines.set_line_style(&axis_line);
        let grid = GridConfig {
            visible: theme.show_grid,
            style: LineStyle::new()
                .color(theme.grid_color.clone())
                .width(theme.grid_width)
                .opacity(theme.grid_opacity),
            ..Default::default()
        };

        let mut axes = Axes {
            position: Bounds::new(0.125, 0.9, 0.11, 0.88),
            x_scale: Box::new(LinearScale::auto()),
            y_scale: Box::new(LinearScale::auto()),
            plots: Vec::new(),
            title: None,
            x_label: None,
            y_label: None,
            grid,
            x_axis: axis.clone(),
            y_axis: axis,
            spines,
            data_bounds: None,
            x_lim: None,
            y_lim: None,
            color_index: 0,
            theme,
        };
        axes.sync_scales();
        axes
    }

    /// Set the position within the figure.
    pub fn position(mut self, left: f64, right: f64, bottom: f64, top: f64) -> Self {
        self.position = Bounds::new(left, right, bottom, top);
        self
    }

    /// Add a line plot.
    pub fn plot(&mut self, x: impl IntoPlotData, y: impl IntoPlotData) -> LinePlotBuilder<'_> {
        LinePlotBuilder {
            axes: self,
            x: x.into_plot_data(),
            y: y.into_plot_data(),
            color: None,
            linewidth: None,
            linestyle: None,
            capstyle: None,
            alpha: None,
            zorder: None,
        }
    }

    /// Add a scatter plot.
    pub fn scatter(
        &mut self,
        x: impl IntoPlotData,
        y: impl IntoPlotData,
    ) -> ScatterPlotBuilder<'_> {
        ScatterPlotBuilder {
            axes: self,
            x: x.into_plot_data(),
            y: y.into_plot_data(),
            color: None,
            facecolor: None,
            edge_colors: None,
            size: None,
            marker: None,
            alpha: None,
            edge_width: None,
            zorder: None,
        }
    }

    /// Add a horizontal band filling `y_low..y_high` across the x span `x`.
    pub fn fill_between_x(
        &mut self,
        x: (f64, f64),
        y_low: f64,
        y_high: f64,
    ) -> BandPlotBuilder<'_> {
        BandPlotBuilder {
            axes: self,
            band: BandPlot::new(x, (y_low, y_high)),
            color: None,
        }
    }

    /// Add text at a data-space position.
    pub fn text(&mut self, x: f64, y: f64, content: impl Into<String>) -> TextPlotBuilder<'_> {
        let style = self
            .theme
            .label_style
            .clone()
            .anchor(TextAnchor::End)
            .baseline(DominantBaseline::Middle);
        TextPlotBuilder {
            axes: self,
            text: TextPlot::new(x, y, content).style(style),
        }
    }

    /// Set the title.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(Text::new(title, 0.0, 0.0).style(self.theme.title_style.clone()));
        self
    }

    /// Set the x-axis label.
    pub fn set_xlabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.x_label = Some(Text::new(label, 0.0, 0.0).style(self.theme.label_style.clone()));
        self
    }

    /// Set the y-axis label.
    pub fn set_ylabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.y_label = Some(Text::new(label, 0.0, 0.0).style(self.theme.label_style.clone()));
        self
    }

    /// Set the x-axis view limits. Reversed limits invert the axis.
    pub fn set_xlim(&mut self, min: f64, max: f64) -> PlotResult<&mut Self> {
        self.x_lim = Some(checked_limits("x", min, max)?);
        self.sync_scales();
        Ok(self)
    }

    /// Set the y-axis view limits. Reversed limits invert the axis.
    pub fn set_ylim(&mut self, min: f64, max: f64) -> PlotResult<&mut Self> {
        self.y_lim = Some(checked_limits("y", min, max)?);
        self.sync_scales();
        Ok(self)
    }

    /// Current x view limits.
    pub fn get_xlim(&self) -> (f64, f64) {
        self.x_scale.range()
    }

    /// Current y view limits.
    pub fn get_ylim(&self) -> (f64, f64) {
        self.y_scale.range()
    }

    /// The current view as data-space bounds.
    pub fn view_bounds(&self) -> Bounds {
        let (x_min, x_max) = self.get_xlim();
        let (y_min, y_max) = self.get_ylim();
        Bounds::new(x_min, x_max, y_min, y_max)
    }

    /// Fix the x tick locations instead of locating them automatically.
    pub fn set_xticks(&mut self, ticks: impl IntoPlotData) -> &mut Self {
        self.x_axis.tick_positions = Some(ticks.into_plot_data());
        self
    }

    /// Fix the y tick locations instead of locating them automatically.
    pub fn set_yticks(&mut self, ticks: impl IntoPlotData) -> &mut Self {
        self.y_axis.tick_positions = Some(ticks.into_plot_data());
        self
    }

    /// All x tick locations; automatic locations may lie outside the view.
    pub fn get_xticks(&self) -> Vec<f64> {
        match self.x_axis.tick_positions {
            Some(ref positions) => positions.clone(),
            None => self.x_scale.tick_locations(self.x_axis.num_ticks),
        }
    }

    /// All y tick locations; automatic locations may lie outside the view.
    pub fn get_yticks(&self) -> Vec<f64> {
        match self.y_axis.tick_positions {
            Some(ref positions) => positions.clone(),
            None => self.y_scale.tick_locations(self.y_axis.num_ticks),
        }
    }

    /// The x tick locations inside the view range (inclusive).
    pub fn visible_xticks(&self) -> Vec<f64> {
        let lim = self.get_xlim();
        self.get_xticks()
            .into_iter()
            .filter(|&t| in_view(t, lim))
            .collect()
    }

    /// The y tick locations inside the view range (inclusive).
    pub fn visible_yticks(&self) -> Vec<f64> {
        let lim = self.get_ylim();
        self.get_yticks()
            .into_iter()
            .filter(|&t| in_view(t, lim))
            .collect()
    }

    /// Show or hide the tick marks of both axes; tick labels are unaffected.
    pub fn set_ticks_visible(&mut self, visible: bool) -> &mut Self {
        self.x_axis.show_tick_marks = visible;
        self.y_axis.show_tick_marks = visible;
        self
    }

    pub fn spines_mut(&mut self) -> &mut Spines {
        &mut self.spines
    }

    /// Enable or disable the grid.
    pub fn grid(&mut self, visible: bool) -> &mut Self {
        self.grid.visible = visible;
        self
    }

    /// Plots in insertion order.
    pub fn plots(&self) -> impl Iterator<Item = &dyn Plot> {
        self.plots.iter().map(|p| p.as_ref())
    }

    /// Add a plot to this axes and rescale the view around it.
    pub fn add_plot(&mut self, plot: Box<dyn Plot>) {
        if let Some(plot_bounds) = plot.bounds() {
            match self.data_bounds {
                Some(ref mut bounds) => bounds.include_bounds(&plot_bounds),
                None => self.data_bounds = Some(plot_bounds),
            }
        }
        self.plots.push(plot);
        self.sync_scales();
    }

    /// Get the next color from the cycle.
    pub(crate) fn next_color(&mut self) -> Color {
        let color = self.theme.cycle_color(self.color_index);
        self.color_index += 1;
        color
    }

    fn autoscaled(&self) -> Bounds {
        match self.data_bounds {
            Some(b) => {
                let (x_min, x_max) = pad_range(b.x_min, b.x_max);
                let (y_min, y_max) = pad_range(b.y_min, b.y_max);
                Bounds::new(x_min, x_max, y_min, y_max)
            }
            None => Bounds::default(),
        }
    }

    fn sync_scales(&mut self) {
        let auto = self.autoscaled();
        let (x_min, x_max) = self.x_lim.unwrap_or((auto.x_min, auto.x_max));
        let (y_min, y_max) = self.y_lim.unwrap_or((auto.y_min, auto.y_max));
        // Inputs are finite: plot bounds skip non-finite points and limits are checked
        let x_synced = self.x_scale.set_range(x_min, x_max);
        let y_synced = self.y_scale.set_range(y_min, y_max);
        debug_assert!(x_synced.is_ok(), "x scale rejected {:?}", x_synced);
        debug_assert!(y_synced.is_ok(), "y scale rejected {:?}", y_synced);
    }

    /// The plot area in figure pixels.
    pub fn pixel_bounds(&self, figure_width: f64, figure_height: f64) -> Bounds {
        Bounds::new(
            self.position.x_min * figure_width,
            self.position.x_max * figure_width,
            (1.0 - self.position.y_max) * figure_height,
            (1.0 - self.position.y_min) * figure_height,
        )
    }

    fn x_tick_labels(&self) -> Vec<(f64, String)> {
        labeled_ticks(&self.x_axis, self.get_xticks(), self.get_xlim())
    }

    fn y_tick_labels(&self) -> Vec<(f64, String)> {
        labeled_ticks(&self.y_axis, self.get_yticks(), self.get_ylim())
    }

    /// Space below the plot area taken by x tick marks and labels.
    fn x_tick_extent(&self) -> f64 {
        if !self.x_axis.visible {
            return 0.0;
        }
        let mut extent = self.x_axis.decoration_extent();
        if self.x_axis.show_tick_labels && !self.x_tick_labels().is_empty() {
            extent += self.x_axis.tick_label_style.font_size;
        }
        extent
    }

    /// Space left of the plot area taken by y tick marks and labels.
    fn y_tick_extent(&self) -> f64 {
        if !self.y_axis.visible {
            return 0.0;
        }
        let mut extent = self.y_axis.decoration_extent();
        if self.y_axis.show_tick_labels {
            let style = &self.y_axis.tick_label_style;
            extent += self
                .y_tick_labels()
                .iter()
                .map(|(_, label)| style.estimate_width(label))
                .fold(0.0, f64::max);
        }
        extent
    }

    /// Pixel margins needed around the plot area for the axes' decorations.
    pub fn decoration_margins(&self) -> Margins {
        let mut margins = Margins {
            left: self.y_tick_extent(),
            bottom: self.x_tick_extent(),
            ..Default::default()
        };

        if self.x_axis.visible && self.x_axis.show_tick_labels {
            // Outermost x labels are centered on their ticks and overhang the plot area
            let style = &self.x_axis.tick_label_style;
            let overhang = self
                .x_tick_labels()
                .iter()
                .map(|(_, label)| style.estimate_width(label) / 2.0)
                .fold(0.0, f64::max);
            margins.left = margins.left.max(overhang);
            margins.right = overhang;
        }
        if self.y_axis.visible && self.y_axis.show_tick_labels {
            margins.top = self.y_axis.tick_label_style.font_size / 2.0;
        }
        if let Some(ref label) = self.x_label {
            margins.bottom += LABEL_PAD + label.style.font_size;
        }
        if let Some(ref label) = self.y_label {
            margins.left += LABEL_PAD + label.style.font_size;
        }
        if let Some(ref title) = self.title {
            margins.top += TITLE_PAD + title.style.font_size;
        }
        margins
    }

    /// Render the axes to SVG. `id` distinguishes the clip path of each axes.
    pub fn render_svg(
        &self,
        id: usize,
        figure_width: f64,
        figure_height: f64,
        transparent: bool,
    ) -> String {
        let mut svg = String::new();
        let pixel_bounds = self.pixel_bounds(figure_width, figure_height);
        let ctx = RenderContext {
            data_bounds: self.view_bounds(),
            pixel_bounds,
        };

        if !transparent {
            svg.push_str(&format!(
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>\n",
                pixel_bounds.x_min,
                pixel_bounds.y_min,
                pixel_bounds.width(),
                pixel_bounds.height(),
                self.theme.plot_background.to_svg_string()
            ));
        }

        if self.grid.visible {
            svg.push_str(&self.render_grid(&ctx));
        }

        // Render plots (clipped to plot area), lowest z-order first
        let clip_id = format!("axes-clip-{}", id);
        svg.push_str(&format!(
            "<defs><clipPath id=\"{}\"><rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/></clipPath></defs>\n",
            clip_id, pixel_bounds.x_min, pixel_bounds.y_min, pixel_bounds.width(), pixel_bounds.height()
        ));
        svg.push_str(&format!("<g clip-path=\"url(#{})\">\n", clip_id));
        let mut ordered: Vec<&dyn Plot> = self.plots().collect();
        ordered.sort_by(|a, b| a.zorder().total_cmp(&b.zorder()));
        for plot in ordered {
            svg.push_str(&plot.render_svg(&ctx));
        }
        svg.push_str("</g>\n");

        svg.push_str(&self.render_spines(&ctx));
        svg.push_str(&self.render_ticks(&ctx));

        if let Some(ref title) = self.title {
            let mut t = title.at(
                (pixel_bounds.x_min + pixel_bounds.x_max) / 2.0,
                pixel_bounds.y_min - TITLE_PAD,
            );
            t.style.anchor = TextAnchor::Middle;
            svg.push_str(&t.to_svg());
            svg.push('\n');
        }

        if let Some(ref label) = self.x_label {
            let mut t = label.at(
                (pixel_bounds.x_min + pixel_bounds.x_max) / 2.0,
                pixel_bounds.y_max + self.x_tick_extent() + LABEL_PAD,
            );
            t.style.anchor = TextAnchor::Middle;
            t.style.baseline = DominantBaseline::Hanging;
            svg.push_str(&t.to_svg());
            svg.push('\n');
        }

        if let Some(ref label) = self.y_label {
            let mut t = label.at(
                pixel_bounds.x_min - self.y_tick_extent() - LABEL_PAD,
                (pixel_bounds.y_min + pixel_bounds.y_max) / 2.0,
            );
            t.style.anchor = TextAnchor::Middle;
            t.style.rotation = -90.0;
            svg.push_str(&t.to_svg());
            svg.push('\n');
        }

        svg
    }

    fn render_grid(&self, ctx: &RenderContext) -> String {
        let mut svg = String::new();
        let style = self.grid.style.to_svg_style();
        let px = &ctx.pixel_bounds;

        if self.grid.show_x {
            for tick in self.visible_xticks() {
                let x = ctx.transform_x(tick);
                svg.push_str(&line(x, px.y_min, x, px.y_max, &style));
            }
        }
        if self.grid.show_y {
            for tick in self.visible_yticks() {
                let y = ctx.transform_y(tick);
                svg.push_str(&line(px.x_min, y, px.x_max, y, &style));
            }
        }
        svg
    }

    fn render_spines(&self, ctx: &RenderContext) -> String {
        let mut svg = String::new();
        let view = &ctx.data_bounds;
        let px = &ctx.pixel_bounds;
        let (x_lo, x_hi) = (view.x_min.min(view.x_max), view.x_min.max(view.x_max));
        let (y_lo, y_hi) = (view.y_min.min(view.y_max), view.y_min.max(view.y_max));

        for position in AxisPosition::ALL {
            let spine = self.spines.get(position);
            if !spine.visible {
                continue;
            }
            let style = spine.line_style.to_svg_style();
            match position {
                AxisPosition::Bottom | AxisPosition::Top => {
                    let (lo, hi) = spine.extent(x_lo, x_hi);
                    let y = if position == AxisPosition::Bottom {
                        px.y_max
                    } else {
                        px.y_min
                    };
                    svg.push_str(&line(ctx.transform_x(lo), y, ctx.transform_x(hi), y, &style));
                }
                AxisPosition::Left | AxisPosition::Right => {
                    let (lo, hi) = spine.extent(y_lo, y_hi);
                    let x = if position == AxisPosition::Left {
                        px.x_min
                    } else {
                        px.x_max
                    };
                    svg.push_str(&line(x, ctx.transform_y(lo), x, ctx.transform_y(hi), &style));
                }
            }
        }
        svg
    }

    fn render_ticks(&self, ctx: &RenderContext) -> String {
        let mut svg = String::new();
        let px = &ctx.pixel_bounds;

        if self.x_axis.visible {
            let axis = &self.x_axis;
            let style = axis.line_style.to_svg_style();
            let label_style = axis
                .tick_label_style
                .clone()
                .anchor(TextAnchor::Middle)
                .baseline(DominantBaseline::Hanging);
            for (tick, label) in self.x_tick_labels() {
                let x = ctx.transform_x(tick);
                if axis.show_tick_marks {
                    svg.push_str(&line(x, px.y_max, x, px.y_max + axis.tick_length, &style));
                }
                if axis.show_tick_labels {
                    let y = px.y_max + axis.decoration_extent();
                    svg.push_str(&Text::new(label, x, y).style(label_style.clone()).to_svg());
                    svg.push('\n');
                }
            }
        }

        if self.y_axis.visible {
            let axis = &self.y_axis;
            let style = axis.line_style.to_svg_style();
            let label_style = axis
                .tick_label_style
                .clone()
                .anchor(TextAnchor::End)
                .baseline(DominantBaseline::Middle);
            for (tick, label) in self.y_tick_labels() {
                let y = ctx.transform_y(tick);
                if axis.show_tick_marks {
                    svg.push_str(&line(px.x_min - axis.tick_length, y, px.x_min, y, &style));
                }
                if axis.show_tick_labels {
                    let x = px.x_min - axis.decoration_extent();
                    svg.push_str(&Text::new(label, x, y).style(label_style.clone()).to_svg());
                    svg.push('\n');
                }
            }
        }
        svg
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::new()
    }
}

fn checked_limits(axis: &str, min: f64, max: f64) -> PlotResult<(f64, f64)> {
    if !min.is_finite() || !max.is_finite() {
        return Err(PlotError::InvalidConfig(format!(
            "{} limits must be finite, got ({}, {})",
            axis, min, max
        )));
    }
    if min == max {
        return Err(PlotError::InvalidConfig(format!(
            "{} limits must differ, got ({}, {})",
            axis, min, max
        )));
    }
    Ok((min, max))
}

/// Widen a zero-width range, then add the autoscale margin on both sides.
fn pad_range(min: f64, max: f64) -> (f64, f64) {
    let (min, max) = if max - min == 0.0 {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };
    let pad = (max - min) * AUTOSCALE_MARGIN;
    (min - pad, max + pad)
}

fn in_view(tick: f64, (a, b): (f64, f64)) -> bool {
    let (lo, hi) = (a.min(b), a.max(b));
    let tolerance = (hi - lo) * 1e-9;
    tick >= lo - tolerance && tick <= hi + tolerance
}

/// Visible ticks paired with their labels.
fn labeled_ticks(axis: &AxisConfig, ticks: Vec<f64>, lim: (f64, f64)) -> Vec<(f64, String)> {
    let labels: Vec<String> = match (&axis.tick_positions, &axis.tick_labels) {
        (Some(_), Some(labels)) => labels.clone(),
        _ => ticks.iter().map(|&t| axis.format_tick(t)).collect(),
    };
    ticks
        .into_iter()
        .zip(labels)
        .filter(|(t, _)| in_view(*t, lim))
        .collect()
}

fn line(x1: f64, y1: f64, x2: f64, y2: f64, style: &str) -> String {
    format!(
        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
        x1, y1, x2, y2, style
    )
}

// Builder types for fluent API

/// Builder for line plots.
pub struct LinePlotBuilder<'a> {
    axes: &'a mut Axes,
    x: Vec<f64>,
    y: Vec<f64>,
    color: Option<Color>,
    linewidth: Option<f64>,
    linestyle: Option<DashPattern>,
    capstyle: Option<LineCap>,
    alpha: Option<f64>,
    zorder: Option<f64>,
}

impl<'a> LinePlotBuilder<'a> {
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn linewidth(mut self, width: f64) -> Self {
        self.linewidth = Some(width);
        self
    }

    pub fn linestyle(mut self, style: DashPattern) -> Self {
        self.linestyle = Some(style);
        self
    }

    pub fn capstyle(mut self, cap: LineCap) -> Self {
        self.capstyle = Some(cap);
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn zorder(mut self, zorder: f64) -> Self {
        self.zorder = Some(zorder);
        self
    }

    pub fn build(self) -> &'a mut Axes {
        let color = self.color.unwrap_or_else(|| self.axes.next_color());
        let width = self.linewidth.unwrap_or(self.axes.theme.line_width);

        let mut plot = LinePlot::new(self.x, self.y).color(color).linewidth(width);

        if let Some(style) = self.linestyle {
            plot = plot.linestyle(style);
        }
        if let Some(cap) = self.capstyle {
            plot = plot.capstyle(cap);
        }
        if let Some(alpha) = self.alpha {
            plot = plot.alpha(alpha);
        }
        if let Some(zorder) = self.zorder {
            plot = plot.zorder(zorder);
        }

        self.axes.add_plot(Box::new(plot));
        self.axes
    }
}

/// Builder for scatter plots.
pub struct ScatterPlotBuilder<'a> {
    axes: &'a mut Axes,
    x: Vec<f64>,
    y: Vec<f64>,
    color: Option<Color>,
    facecolor: Option<Color>,
    edge_colors: Option<Vec<Color>>,
    size: Option<f64>,
    marker: Option<Marker>,
    alpha: Option<f64>,
    edge_width: Option<f64>,
    zorder: Option<f64>,
}

impl<'a> ScatterPlotBuilder<'a> {
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Fill color for every marker, overriding `color` for the face.
    pub fn facecolor(mut self, color: impl Into<Color>) -> Self {
        self.facecolor = Some(color.into());
        self
    }

    /// One edge color per point.
    pub fn edge_colors(mut self, colors: Vec<Color>) -> Self {
        self.edge_colors = Some(colors);
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn edge_width(mut self, width: f64) -> Self {
        self.edge_width = Some(width);
        self
    }

    pub fn zorder(mut self, zorder: f64) -> Self {
        self.zorder = Some(zorder);
        self
    }

    pub fn build(self) -> &'a mut Axes {
        let color = self.color.unwrap_or_else(|| self.axes.next_color());
        let size = self.size.unwrap_or(self.axes.theme.marker_size);

        let mut plot = ScatterPlot::new(self.x, self.y).color(color).size(size);

        if let Some(face) = self.facecolor {
            plot = plot.facecolor(face);
        }
        if let Some(edges) = self.edge_colors {
            plot = plot.edge_colors(edges);
        }
        if let Some(marker) = self.marker {
            plot = plot.marker(marker);
        }
        if let Some(alpha) = self.alpha {
            plot = plot.alpha(alpha);
        }
        if let Some(ew) = self.edge_width {
            plot = plot.edge_width(ew);
        }
        if let Some(zorder) = self.zorder {
            plot = plot.zorder(zorder);
        }

        self.axes.add_plot(Box::new(plot));
        self.axes
    }
}

/// Builder for horizontal bands.
pub struct BandPlotBuilder<'a> {
    axes: &'a mut Axes,
    band: BandPlot,
    color: Option<Color>,
}

impl<'a> BandPlotBuilder<'a> {
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.band = self.band.alpha(alpha);
        self
    }

    pub fn zorder(mut self, zorder: f64) -> Self {
        self.band = self.band.zorder(zorder);
        self
    }

    pub fn build(self) -> &'a mut Axes {
        let color = self.color.unwrap_or_else(|| self.axes.next_color());
        self.axes.add_plot(Box::new(self.band.color(color)));
        self.axes
    }
}

/// Builder for data-space text.
pub struct TextPlotBuilder<'a> {
    axes: &'a mut Axes,
    text: TextPlot,
}

impl<'a> TextPlotBuilder<'a> {
    pub fn font_size(mut self, size: f64) -> Self {
        self.text = self.text.font_size(size);
        self
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.text = self.text.anchor(anchor);
        self
    }

    pub fn baseline(mut self, baseline: DominantBaseline) -> Self {
        self.text = self.text.baseline(baseline);
        self
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.text = self.text.style(style);
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.text.style.color = color.into();
        self
    }

    pub fn zorder(mut self, zorder: f64) -> Self {
        self.text = self.text.zorder(zorder);
        self
    }

    pub fn build(self) -> &'a mut Axes {
        self.axes.add_plot(Box::new(self.text));
        self.axes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_autoscale_pads_data_range() {
        let mut ax = Axes::new();
        ax.plot(vec![0.0, 10.0], vec![0.0, 1.0]).build();
        let (x0, x1) = ax.get_xlim();
        assert!(approx(x0, -0.5) && approx(x1, 10.5));
        let (y0, y1) = ax.get_ylim();
        assert!(approx(y0, -0.05) && approx(y1, 1.05));
    }

    #[test]
    fn test_zero_width_range_is_widened() {
        let mut ax = Axes::new();
        ax.scatter(vec![2.0], vec![3.0]).build();
        let (x0, x1) = ax.get_xlim();
        assert!(approx(x0, 1.45) && approx(x1, 2.55));
    }

    #[test]
    fn test_non_finite_points_keep_scales_finite() {
        let mut ax = Axes::new();
        ax.plot(vec![0.0, f64::NAN, 10.0], vec![0.0, 5.0, f64::INFINITY])
            .build();
        let (x0, x1) = ax.get_xlim();
        assert!(approx(x0, -0.55) && approx(x1, 0.55));
        let (y0, y1) = ax.get_ylim();
        assert!(y0.is_finite() && y1.is_finite());
    }

    #[test]
    fn test_manual_limits_are_not_padded() {
        let mut ax = Axes::new();
        ax.plot(vec![0.0, 10.0], vec![0.0, 1.0]).build();
        ax.set_xlim(0.0, 20.0).unwrap();
        assert_eq!(ax.get_xlim(), (0.0, 20.0));
        assert!(ax.set_ylim(1.0, 1.0).is_err());
        assert!(ax.set_ylim(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_ticks_extend_past_view_but_visible_ticks_do_not() {
        let mut ax = Axes::new();
        ax.plot(vec![0.0, 10.0], vec![0.0, 10.0]).build();
        assert_eq!(ax.get_xticks(), vec![-5.0, 0.0, 5.0, 10.0, 15.0]);
        assert_eq!(ax.visible_xticks(), vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_custom_tick_positions() {
        let mut ax = Axes::new();
        ax.set_xticks([0.25, 0.75, 2.0]);
        assert_eq!(ax.get_xticks(), vec![0.25, 0.75, 2.0]);
        assert_eq!(ax.visible_xticks(), vec![0.25, 0.75]);
    }

    #[test]
    fn test_plots_render_in_zorder() {
        let mut ax = Axes::new();
        ax.scatter(vec![1.0], vec![1.0]).zorder(5.0).build();
        ax.fill_between_x((0.0, 2.0), 0.5, 1.5)
            .color(Color::SHADOW_GRAY)
            .zorder(0.0)
            .build();
        let svg = ax.render_svg(0, 500.0, 400.0, false);
        let rect = svg.find("fill=\"rgb(147,149,150)\"").unwrap();
        let circle = svg.find("<circle").unwrap();
        assert!(rect < circle);
    }

    #[test]
    fn test_hidden_spines_and_ticks_are_not_drawn() {
        let mut ax = Axes::new();
        ax.plot(vec![0.0, 1.0], vec![0.0, 1.0]).build();
        ax.spines_mut().set_all_visible(false);
        ax.set_ticks_visible(false);
        ax.x_axis.show_tick_labels = false;
        ax.y_axis.show_tick_labels = false;
        let svg = ax.render_svg(0, 500.0, 400.0, true);
        assert!(!svg.contains("<line"));
        assert!(!svg.contains("<text"));
        assert_eq!(ax.decoration_margins(), Margins::default());
    }

    #[test]
    fn test_spine_bounds_limit_the_drawn_line() {
        let mut ax = Axes::new().position(0.0, 1.0, 0.0, 1.0);
        ax.set_xlim(0.0, 10.0).unwrap();
        ax.set_ylim(0.0, 10.0).unwrap();
        ax.spines_mut().set_all_visible(false);
        ax.spines_mut().bottom.set_visible(true).set_bounds(2.0, 8.0);
        ax.set_ticks_visible(false);
        ax.x_axis.visible = false;
        ax.y_axis.visible = false;
        let svg = ax.render_svg(0, 100.0, 100.0, true);
        assert!(svg.contains("<line x1=\"20.00\" y1=\"100.00\" x2=\"80.00\" y2=\"100.00\""));
    }

    #[test]
    fn test_text_does_not_affect_limits() {
        let mut ax = Axes::new();
        ax.set_xlim(0.0, 1.0).unwrap();
        ax.text(100.0, 100.0, "far away").font_size(7.0).build();
        assert_eq!(ax.get_ylim(), (0.0, 1.0));
        assert_eq!(ax.plots().count(), 1);
    }
}
