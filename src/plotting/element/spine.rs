//! Axes border lines.

use crate::plotting::style::{Color, LineStyle};

/// Side of an axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPosition {
    Bottom,
    Top,
    Left,
    Right,
}

impl AxisPosition {
    pub const ALL: [AxisPosition; 4] = [
        AxisPosition::Bottom,
        AxisPosition::Top,
        AxisPosition::Left,
        AxisPosition::Right,
    ];
}

/// One border line of an axes.
///
/// Without bounds the spine runs along the whole side; with bounds it
/// spans only that data interval (x for top/bottom, y for left/right).
#[derive(Debug, Clone)]
pub struct Spine {
    pub visible: bool,
    pub bounds: Option<(f64, f64)>,
    pub line_style: LineStyle,
}

impl Spine {
    pub fn set_visible(&mut self, visible: bool) -> &mut Self {
        self.visible = visible;
        self
    }

    pub fn set_bounds(&mut self, low: f64, high: f64) -> &mut Self {
        self.bounds = Some((low.min(high), low.max(high)));
        self
    }

    /// Clamp the spine's data interval to the view interval.
    pub fn extent(&self, view_min: f64, view_max: f64) -> (f64, f64) {
        match self.bounds {
            Some((low, high)) => (low.max(view_min), high.min(view_max)),
            None => (view_min, view_max),
        }
    }
}

impl Default for Spine {
    fn default() -> Self {
        Spine {
            visible: true,
            bounds: None,
            line_style: LineStyle::new().color(Color::BLACK).width(0.8),
        }
    }
}

/// The four spines of an axes.
#[derive(Debug, Clone, Default)]
pub struct Spines {
    pub bottom: Spine,
    pub top: Spine,
    pub left: Spine,
    pub right: Spine,
}

impl Spines {
    pub fn get(&self, position: AxisPosition) -> &Spine {
        match position {
            AxisPosition::Bottom => &self.bottom,
            AxisPosition::Top => &self.top,
            AxisPosition::Left => &self.left,
            AxisPosition::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, position: AxisPosition) -> &mut Spine {
        match position {
            AxisPosition::Bottom => &mut self.bottom,
            AxisPosition::Top => &mut self.top,
            AxisPosition::Left => &mut self.left,
            AxisPosition::Right => &mut self.right,
        }
    }

    /// Show or hide all four spines.
    pub fn set_all_visible(&mut self, visible: bool) {
        for position in AxisPosition::ALL {
            self.get_mut(position).visible = visible;
        }
    }

    /// Apply one line style to every spine.
    pub fn set_line_style(&mut self, style: &LineStyle) {
        for position in AxisPosition::ALL {
            self.get_mut(position).line_style = style.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_is_clamped_to_view() {
        let mut spine = Spine::default();
        assert_eq!(spine.extent(0.0, 10.0), (0.0, 10.0));
        spine.set_bounds(8.0, -2.0);
        assert_eq!(spine.bounds, Some((-2.0, 8.0)));
        assert_eq!(spine.extent(0.0, 10.0), (0.0, 8.0));
    }

    #[test]
    fn test_set_all_visible() {
        let mut spines = Spines::default();
        spines.set_all_visible(false);
        assert!(AxisPosition::ALL.iter().all(|p| !spines.get(*p).visible));
    }
}
