//! Grouped error-bar (forest) chart.
//!
//! Observations are aggregated per group into a central tendency and a
//! dispersion interval, stacked top-down one unit per group, and drawn as
//! interval lines with an open marker over alternating row bands. Group and
//! section names live on a companion label axes appended to the left.
//!
//! [`ErrorBarLayout::compute`] does all validation and arithmetic without
//! touching a figure; [`error_bars`] draws the result.

use std::fmt;
use std::str::FromStr;

use log::debug;

use super::stats;
use super::table::ObservationTable;
use crate::palettes;
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::figure::{AxesId, Figure};
use crate::plotting::style::{Color, LineCap, ThemeConfig};

/// Percentile levels for the outer and inner intervals.
pub const PERCENTILE_LEVELS: [f64; 4] = [2.5, 25.0, 75.0, 97.5];

/// Half-height of a group's row band.
const GROUP_BAND_HALF: f64 = 0.48;
/// Half-height of a section's divider band.
const SECTION_BAND_HALF: f64 = 0.23;
/// Extra space above and below each section's block of groups.
const SECTION_GAP: f64 = 0.25;
/// Space kept above the first row.
const TOP_MARGIN: f64 = 0.25;

const OUTER_LINE_WIDTH: f64 = 1.0;
const OUTER_LINE_ALPHA: f64 = 0.35;
const INNER_LINE_WIDTH: f64 = 2.0;
const INNER_LINE_ALPHA: f64 = 0.85;
const MARKER_SIZE: f64 = 3.5;
const MARKER_ZORDER: f64 = 5.0;
const GROUP_BAND_ALPHA: f64 = 0.15;
const SECTION_BAND_ALPHA: f64 = 0.25;
const GROUP_FONT_SIZE: f64 = 7.0;
const SECTION_FONT_SIZE: f64 = 5.0;

/// How a group's values are summarized into one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CentralTendency {
    #[default]
    Median,
    Mean,
}

impl CentralTendency {
    pub fn aggregate(self, values: &[f64]) -> Option<f64> {
        match self {
            CentralTendency::Median => stats::median(values),
            CentralTendency::Mean => stats::mean(values),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CentralTendency::Median => "median",
            CentralTendency::Mean => "mean",
        }
    }
}

impl FromStr for CentralTendency {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "median" => Ok(CentralTendency::Median),
            "mean" => Ok(CentralTendency::Mean),
            other => Err(PlotError::UnsupportedOption(format!(
                "central_tendency has to be either 'mean' or 'median', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for CentralTendency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the interval around the central tendency is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dispersion {
    /// Inner 25-75 and outer 2.5-97.5 percentile intervals
    #[default]
    Percentile,
    /// Central tendency plus or minus one population standard deviation
    StandardDeviation,
    /// Recognized but not supported; always rejected
    ConfidenceInterval,
    /// Zero-width interval at the central tendency
    None,
}

impl Dispersion {
    pub fn name(self) -> &'static str {
        match self {
            Dispersion::Percentile => "percentile",
            Dispersion::StandardDeviation => "standard_deviation",
            Dispersion::ConfidenceInterval => "confidence_interval",
            Dispersion::None => "none",
        }
    }

    /// Reject methods that have no implementation.
    pub fn validate(self) -> PlotResult<()> {
        match self {
            Dispersion::ConfidenceInterval => Err(PlotError::NotImplemented(
                "error_method 'confidence_interval' is not yet supported".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

impl FromStr for Dispersion {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percentile" => Ok(Dispersion::Percentile),
            "standard_deviation" => Ok(Dispersion::StandardDeviation),
            "confidence_interval" => Ok(Dispersion::ConfidenceInterval),
            "none" | "None" => Ok(Dispersion::None),
            other => Err(PlotError::UnsupportedOption(format!(
                "error_method '{}' is not supported",
                other
            ))),
        }
    }
}

impl fmt::Display for Dispersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inputs of an error-bar chart besides the table itself.
#[derive(Debug, Clone)]
pub struct ErrorBarOptions {
    /// Numeric column holding the plotted values
    pub value_column: String,
    /// Label column holding each row's group
    pub group_column: String,
    pub central_tendency: CentralTendency,
    pub dispersion: Dispersion,
    /// Section names with their groups, both in display order
    pub sections: Option<Vec<(String, Vec<String>)>>,
    /// One color per section, or per group when there are no sections
    pub colors: Option<Vec<Color>>,
    /// Value-axis limits; autoscaled from the intervals when absent
    pub xlim: Option<(f64, f64)>,
    /// Width of the label axes relative to the chart axes
    pub label_axis_fraction: f64,
}

impl ErrorBarOptions {
    pub fn new(value_column: impl Into<String>, group_column: impl Into<String>) -> Self {
        ErrorBarOptions {
            value_column: value_column.into(),
            group_column: group_column.into(),
            central_tendency: CentralTendency::default(),
            dispersion: Dispersion::default(),
            sections: None,
            colors: None,
            xlim: None,
            label_axis_fraction: 0.4,
        }
    }

    pub fn central_tendency(mut self, central_tendency: CentralTendency) -> Self {
        self.central_tendency = central_tendency;
        self
    }

    pub fn dispersion(mut self, dispersion: Dispersion) -> Self {
        self.dispersion = dispersion;
        self
    }

    pub fn sections(mut self, sections: Vec<(String, Vec<String>)>) -> Self {
        self.sections = Some(sections);
        self
    }

    pub fn colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn xlim(mut self, min: f64, max: f64) -> Self {
        self.xlim = Some((min, max));
        self
    }

    pub fn label_axis_fraction(mut self, fraction: f64) -> Self {
        self.label_axis_fraction = fraction;
        self
    }
}

/// One row of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStats {
    pub name: String,
    /// Vertical slot (row center)
    pub y: f64,
    pub color: Color,
    pub central: f64,
    pub lower_inner: f64,
    pub upper_inner: f64,
    pub lower_outer: Option<f64>,
    pub upper_outer: Option<f64>,
    /// Index into [`ErrorBarLayout::sections`]
    pub section: Option<usize>,
}

/// A section header row.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSlot {
    pub name: String,
    pub y: f64,
    pub color: Color,
}

/// Aggregated groups and their vertical placement.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBarLayout {
    /// Groups in drawing order, top to bottom
    pub groups: Vec<GroupStats>,
    pub sections: Vec<SectionSlot>,
    /// Vertical view range shared by both axes
    pub y_limits: (f64, f64),
}

/// A drawn error-bar chart.
pub struct ErrorBarPlot {
    pub figure: Figure,
    /// Axes holding the intervals and markers
    pub ax: AxesId,
    /// Label axes left of `ax`
    pub cax: AxesId,
    pub layout: ErrorBarLayout,
    /// Value-axis range shared by both axes
    pub x_range: (f64, f64),
}

impl ErrorBarLayout {
    /// Validate the options against the table and aggregate every group.
    ///
    /// Nothing is drawn; a failure here means no figure is ever created.
    pub fn compute(table: &ObservationTable, options: &ErrorBarOptions) -> PlotResult<Self> {
        options.dispersion.validate()?;
        if !(options.label_axis_fraction.is_finite() && options.label_axis_fraction > 0.0) {
            return Err(PlotError::InvalidConfig(format!(
                "Label axis fraction must be positive, got {}",
                options.label_axis_fraction
            )));
        }

        // Group order, per-group colors and section membership
        let mut sections = Vec::new();
        let mut rows: Vec<(String, Color, Option<usize>)> = Vec::new();
        let section_sizes = match options.sections {
            Some(ref section_map) => {
                check_unique_membership(section_map)?;
                let colors = resolve_colors(options.colors.as_deref(), section_map.len(), "sections")?;
                let mut sizes = Vec::with_capacity(section_map.len());
                for (i, ((name, groups), color)) in section_map.iter().zip(colors).enumerate() {
                    for group in groups {
                        rows.push((group.clone(), color.clone(), Some(i)));
                    }
                    sizes.push(groups.len());
                    sections.push(SectionSlot {
                        name: name.clone(),
                        y: 0.0,
                        color,
                    });
                }
                Some(sizes)
            }
            None => {
                let names = table.unique_labels(&options.group_column)?;
                let colors = resolve_colors(options.colors.as_deref(), names.len(), "groups in data")?;
                rows.extend(names.into_iter().zip(colors).map(|(n, c)| (n, c, None)));
                None
            }
        };
        if rows.is_empty() {
            return Err(PlotError::EmptyData);
        }

        let (group_ys, section_ys) = vertical_plan(section_sizes.as_deref(), rows.len());
        for (section, y) in sections.iter_mut().zip(section_ys) {
            section.y = y;
        }

        // Columns are looked up only once the options are known to be consistent
        table.numeric(&options.value_column)?;
        table.labels(&options.group_column)?;

        let mut groups = Vec::with_capacity(rows.len());
        for ((name, color, section), y) in rows.into_iter().zip(group_ys) {
            let values =
                table.values_where(&options.value_column, &options.group_column, &name)?;
            let central = options
                .central_tendency
                .aggregate(&values)
                .ok_or_else(|| {
                    PlotError::InvalidData(format!(
                        "Group '{}' has no rows in column '{}'",
                        name, options.group_column
                    ))
                })?;
            let (lower_outer, lower_inner, upper_inner, upper_outer) =
                interval(options.dispersion, &values, central);
            groups.push(GroupStats {
                name,
                y,
                color,
                central,
                lower_inner,
                upper_inner,
                lower_outer,
                upper_outer,
                section,
            });
        }

        let bottom = groups.last().map(|g| g.y).unwrap_or(0.0) - 0.5;
        Ok(ErrorBarLayout {
            groups,
            sections,
            y_limits: (bottom, TOP_MARGIN),
        })
    }
}

/// Caller colors when their count matches, else the colorblind palette.
fn resolve_colors(
    colors: Option<&[Color]>,
    expected: usize,
    what: &'static str,
) -> PlotResult<Vec<Color>> {
    match colors {
        Some(colors) if colors.len() != expected => Err(PlotError::CountMismatch {
            what,
            expected,
            found: colors.len(),
        }),
        Some(colors) => Ok(colors.to_vec()),
        None => Ok(palettes::colorblind(expected)),
    }
}

/// Row centers for the groups and for the section headers, stacked down from 0.
///
/// Each group takes one unit. A section records its header at the current
/// position and is padded by [`SECTION_GAP`] above and below its groups.
fn vertical_plan(section_sizes: Option<&[usize]>, n_groups: usize) -> (Vec<f64>, Vec<f64>) {
    let mut cursor = 0.0;
    let mut group_ys = Vec::with_capacity(n_groups);
    let mut section_ys = Vec::new();

    let mut place_group = |cursor: &mut f64| {
        *cursor -= 0.5;
        group_ys.push(*cursor);
        *cursor -= 0.5;
    };

    match section_sizes {
        Some(sizes) => {
            for &size in sizes {
                section_ys.push(cursor);
                cursor -= SECTION_GAP;
                for _ in 0..size {
                    place_group(&mut cursor);
                }
                cursor -= SECTION_GAP;
            }
        }
        None => {
            for _ in 0..n_groups {
                place_group(&mut cursor);
            }
        }
    }
    (group_ys, section_ys)
}

/// `(lower_outer, lower_inner, upper_inner, upper_outer)` for one group.
fn interval(
    dispersion: Dispersion,
    values: &[f64],
    central: f64,
) -> (Option<f64>, f64, f64, Option<f64>) {
    match dispersion {
        Dispersion::Percentile => match stats::percentiles(values, &PERCENTILE_LEVELS) {
            Some(p) => (Some(p[0]), p[1], p[2], Some(p[3])),
            None => (None, central, central, None),
        },
        Dispersion::StandardDeviation => {
            let sd = stats::std_dev(values).unwrap_or(0.0);
            (None, central - sd, central + sd, None)
        }
        Dispersion::ConfidenceInterval | Dispersion::None => (None, central, central, None),
    }
}

/// Draw an error-bar chart with the default theme.
pub fn error_bars(table: &ObservationTable, options: &ErrorBarOptions) -> PlotResult<ErrorBarPlot> {
    error_bars_with_theme(table, options, ThemeConfig::default())
}

/// Draw an error-bar chart on a new figure built from `theme`.
pub fn error_bars_with_theme(
    table: &ObservationTable,
    options: &ErrorBarOptions,
    theme: ThemeConfig,
) -> PlotResult<ErrorBarPlot> {
    let layout = ErrorBarLayout::compute(table, options)?;
    let (y_min, y_max) = layout.y_limits;

    let mut figure = Figure::with_theme(theme);
    let ax = figure.add_subplot(1, 1, 1)?;

    let axes = figure.axes_mut(ax)?;
    for group in &layout.groups {
        if let (Some(lo), Some(hi)) = (group.lower_outer, group.upper_outer) {
            axes.plot(vec![lo, hi], vec![group.y, group.y])
                .color(group.color.clone())
                .alpha(OUTER_LINE_ALPHA)
                .linewidth(OUTER_LINE_WIDTH)
                .capstyle(LineCap::Round)
                .build();
        }
        axes.plot(
            vec![group.lower_inner, group.upper_inner],
            vec![group.y, group.y],
        )
        .color(group.color.clone())
        .alpha(INNER_LINE_ALPHA)
        .linewidth(INNER_LINE_WIDTH)
        .capstyle(LineCap::Round)
        .build();
    }

    let centrals: Vec<f64> = layout.groups.iter().map(|g| g.central).collect();
    let ys: Vec<f64> = layout.groups.iter().map(|g| g.y).collect();
    let edges: Vec<Color> = layout.groups.iter().map(|g| g.color.clone()).collect();
    axes.scatter(centrals, ys)
        .color(edges[0].clone())
        .facecolor(Color::WHITE)
        .edge_colors(edges)
        .size(MARKER_SIZE)
        .zorder(MARKER_ZORDER)
        .build();

    // Autoscaled range covers every interval and marker
    let (x_min, x_max) = options.xlim.unwrap_or_else(|| axes.get_xlim());
    debug!(
        "Error bars: {} groups, {} sections, x range ({}, {})",
        layout.groups.len(),
        layout.sections.len(),
        x_min,
        x_max
    );

    // Row highlights sit behind everything else
    for group in &layout.groups {
        axes.fill_between_x(
            (x_min, x_max),
            group.y - GROUP_BAND_HALF,
            group.y + GROUP_BAND_HALF,
        )
        .color(Color::SHADOW_GRAY)
        .alpha(GROUP_BAND_ALPHA)
        .zorder(0.0)
        .build();
    }
    for section in &layout.sections {
        axes.fill_between_x(
            (x_min, x_max),
            section.y - SECTION_BAND_HALF,
            section.y + SECTION_BAND_HALF,
        )
        .color(section.color.clone())
        .alpha(SECTION_BAND_ALPHA)
        .zorder(0.0)
        .build();
    }

    axes.set_ylim(y_min, y_max)?;
    axes.set_xlim(x_min, x_max)?;
    axes.spines_mut().set_all_visible(false);
    axes.set_ticks_visible(false);
    axes.y_axis.show_tick_labels = false;
    axes.grid(false);

    let cax = figure.append_axes_left(ax, options.label_axis_fraction, 0.0)?;
    let label_x = x_max - 0.05 * (x_max - x_min);
    let labels = figure.axes_mut(cax)?;
    labels.x_axis.visible = false;
    labels.y_axis.visible = false;
    labels.spines_mut().set_all_visible(false);
    labels.grid(false);
    labels.set_ylim(y_min, y_max)?;
    labels.set_xlim(x_min, x_max)?;

    for group in &layout.groups {
        labels
            .fill_between_x(
                (x_min, x_max),
                group.y - GROUP_BAND_HALF,
                group.y + GROUP_BAND_HALF,
            )
            .color(group.color.clone())
            .alpha(GROUP_BAND_ALPHA)
            .zorder(0.0)
            .build();
        labels
            .text(label_x, group.y, group.name.as_str())
            .font_size(GROUP_FONT_SIZE)
            .build();
    }
    for section in &layout.sections {
        labels
            .fill_between_x(
                (x_min, x_max),
                section.y - SECTION_BAND_HALF,
                section.y + SECTION_BAND_HALF,
            )
            .color(section.color.clone())
            .alpha(SECTION_BAND_ALPHA)
            .zorder(0.0)
            .build();
        labels
            .text(label_x, section.y, section.name.as_str())
            .font_size(SECTION_FONT_SIZE)
            .build();
    }

    figure.tight_layout();

    Ok(ErrorBarPlot {
        figure,
        ax,
        cax,
        layout,
        x_range: (x_min, x_max),
    })
}

/// Every group may appear in at most one section, and only once.
fn check_unique_membership(sections: &[(String, Vec<String>)]) -> PlotResult<()> {
    let mut seen: Vec<(&str, &str)> = Vec::new();
    for (section, groups) in sections {
        for group in groups {
            if let Some((_, first)) = seen.iter().find(|(g, _)| *g == group.as_str()) {
                return Err(PlotError::InvalidConfig(format!(
                    "Group '{}' is listed in section '{}' and again in '{}'",
                    group, first, section
                )));
            }
            seen.push((group.as_str(), section.as_str()));
        }
    }
    Ok(())
}
