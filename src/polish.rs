//! Axis polishing: trims the bottom and left spines to the outermost visible
//! ticks, optionally joins the axes at the origin, removes the top and right
//! spines and re-flows the layout.

use log::debug;

use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::figure::{AxesId, Figure};

/// Polish one axes of `fig` in place and hand both back.
///
/// With `handle_zero_zero`, when the lowest visible tick on both axes is 0
/// the view is pinned to start at the origin so the two spines meet there.
///
/// Fails with [`PlotError::NoVisibleTicks`] when an axis has no tick inside
/// its view; the axes is left untouched in that case.
pub fn polish(
    fig: &mut Figure,
    ax: AxesId,
    handle_zero_zero: bool,
) -> PlotResult<(&mut Figure, AxesId)> {
    let axes = fig.axes_mut(ax)?;

    let (x_lo, x_hi) = tick_span(&axes.visible_xticks()).ok_or(PlotError::NoVisibleTicks("x"))?;
    let (y_lo, y_hi) = tick_span(&axes.visible_yticks()).ok_or(PlotError::NoVisibleTicks("y"))?;

    let origin_limits = if handle_zero_zero && x_lo == 0.0 && y_lo == 0.0 {
        Some((
            from_origin(axes.get_xlim()).ok_or(PlotError::InvalidConfig(
                "x view does not extend past the origin".to_string(),
            ))?,
            from_origin(axes.get_ylim()).ok_or(PlotError::InvalidConfig(
                "y view does not extend past the origin".to_string(),
            ))?,
        ))
    } else {
        None
    };

    axes.spines.bottom.set_bounds(x_lo, x_hi);
    axes.spines.left.set_bounds(y_lo, y_hi);

    if let Some(((x0, x1), (y0, y1))) = origin_limits {
        axes.set_xlim(x0, x1)?;
        axes.set_ylim(y0, y1)?;
        debug!("Axes {} joined at the origin", ax.index());
    }

    axes.spines.top.set_visible(false);
    axes.spines.right.set_visible(false);

    fig.tight_layout();
    Ok((fig, ax))
}

/// View limits starting at 0 and ending at the far end of `limits`, keeping
/// the axis direction. `None` when nothing of the view lies above 0.
fn from_origin(limits: (f64, f64)) -> Option<(f64, f64)> {
    let (lo, hi) = limits;
    let far = lo.max(hi);
    if far.is_nan() || far <= 0.0 {
        return None;
    }
    Some(if lo > hi { (far, 0.0) } else { (0.0, far) })
}

/// Lowest and highest tick, `None` when there are none.
fn tick_span(ticks: &[f64]) -> Option<(f64, f64)> {
    let lo = ticks.iter().copied().reduce(f64::min)?;
    let hi = ticks.iter().copied().reduce(f64::max)?;
    Some((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn figure_with_line(x: Vec<f64>, y: Vec<f64>) -> (Figure, AxesId) {
        let mut fig = Figure::new(500.0, 400.0);
        let ax = fig.add_subplot(1, 1, 1).unwrap();
        fig.axes_mut(ax).unwrap().plot(x, y).build();
        (fig, ax)
    }

    #[test]
    fn test_spines_match_outer_visible_ticks() {
        let (mut fig, ax) = figure_with_line(vec![0.0, 10.0], vec![0.0, 10.0]);
        polish(&mut fig, ax, false).unwrap();

        let axes = fig.axes(ax).unwrap();
        assert_eq!(axes.spines.bottom.bounds, Some((0.0, 10.0)));
        assert_eq!(axes.spines.left.bounds, Some((0.0, 10.0)));
        assert!(!axes.spines.top.visible && !axes.spines.right.visible);
        assert!(axes.spines.bottom.visible && axes.spines.left.visible);

        // Limits untouched without the zero merge
        let (x0, x1) = axes.get_xlim();
        assert!((x0 + 0.5).abs() < 1e-9 && (x1 - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_zero_merge() {
        let (mut fig, ax) = figure_with_line(vec![0.0, 10.0], vec![0.0, 10.0]);
        let (fig, ax) = polish(&mut fig, ax, true).unwrap();

        let axes = fig.axes(ax).unwrap();
        let (x0, x1) = axes.get_xlim();
        let (y0, y1) = axes.get_ylim();
        assert_eq!((x0, y0), (0.0, 0.0));
        assert!((x1 - 10.5).abs() < 1e-9 && (y1 - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_merge_needs_both_axes_at_zero() {
        let mut fig = Figure::new(500.0, 400.0);
        let ax = fig.add_subplot(1, 1, 1).unwrap();
        {
            let axes = fig.axes_mut(ax).unwrap();
            axes.set_xlim(-1.0, 9.0).unwrap();
            axes.set_ylim(-1.0, 9.0).unwrap();
            axes.set_xticks([0.0, 4.0, 8.0]);
            axes.set_yticks([2.0, 4.0, 8.0]);
        }
        polish(&mut fig, ax, true).unwrap();
        let axes = fig.axes(ax).unwrap();
        assert_eq!(axes.get_xlim(), (-1.0, 9.0));
        assert_eq!(axes.get_ylim(), (-1.0, 9.0));
        assert_eq!(axes.spines.left.bounds, Some((2.0, 8.0)));
    }

    #[test]
    fn test_no_visible_ticks_leaves_axes_untouched() {
        let mut fig = Figure::new(500.0, 400.0);
        let ax = fig.add_subplot(1, 1, 1).unwrap();
        {
            let axes = fig.axes_mut(ax).unwrap();
            axes.set_xlim(0.0, 1.0).unwrap();
            axes.set_ylim(0.0, 1.0).unwrap();
            axes.set_yticks([5.0]);
        }
        assert!(matches!(
            polish(&mut fig, ax, true),
            Err(PlotError::NoVisibleTicks("y"))
        ));
        let axes = fig.axes(ax).unwrap();
        assert!(axes.spines.top.visible);
        assert_eq!(axes.spines.bottom.bounds, None);
    }

    #[test]
    fn test_zero_merge_keeps_reversed_direction() {
        let mut fig = Figure::new(500.0, 400.0);
        let ax = fig.add_subplot(1, 1, 1).unwrap();
        {
            let axes = fig.axes_mut(ax).unwrap();
            axes.set_xlim(10.0, -0.5).unwrap();
            axes.set_ylim(-0.5, 10.0).unwrap();
            axes.set_xticks([0.0, 5.0, 10.0]);
            axes.set_yticks([0.0, 5.0, 10.0]);
        }
        polish(&mut fig, ax, true).unwrap();

        let axes = fig.axes(ax).unwrap();
        assert_eq!(axes.get_xlim(), (10.0, 0.0));
        assert_eq!(axes.get_ylim(), (0.0, 10.0));
        assert_eq!(axes.spines.bottom.bounds, Some((0.0, 10.0)));
        assert!(!axes.spines.top.visible && !axes.spines.right.visible);
    }

    #[test]
    fn test_from_origin() {
        assert_eq!(from_origin((-0.5, 10.5)), Some((0.0, 10.5)));
        assert_eq!(from_origin((10.0, 0.0)), Some((10.0, 0.0)));
        assert_eq!(from_origin((-3.0, 0.0)), None);
    }

    #[test]
    fn test_unknown_axes() {
        let (_, ax) = figure_with_line(vec![0.0, 1.0], vec![0.0, 1.0]);
        let mut empty = Figure::new(500.0, 400.0);
        assert!(matches!(
            polish(&mut empty, ax, true),
            Err(PlotError::InvalidConfig(_))
        ));
    }
}
