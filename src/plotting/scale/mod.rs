//! Axis scaling and tick location.

mod linear;

pub use linear::LinearScale;

use crate::plotting::error::PlotResult;

/// Trait for axis scale transformations.
pub trait Scale: std::fmt::Debug {
    /// Transform a data value to normalized coordinates (0.0 - 1.0).
    fn transform(&self, value: f64) -> f64;

    /// Inverse transform from normalized coordinates to data value.
    fn inverse(&self, normalized: f64) -> f64;

    /// Set the data range for this scale.
    fn set_range(&mut self, min: f64, max: f64) -> PlotResult<()>;

    /// Get the current data range.
    fn range(&self) -> (f64, f64);

    /// Tick locations for this scale; the outermost may lie past the range.
    fn tick_locations(&self, num_ticks: usize) -> Vec<f64>;

    /// Clone the scale into a boxed trait object.
    fn clone_box(&self) -> Box<dyn Scale>;
}

impl Clone for Box<dyn Scale> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Compute "nice" numbers for axis ticks.
pub fn nice_number(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let fraction = range / 10_f64.powf(exponent);

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * 10_f64.powf(exponent)
}

/// Tick locations covering `[min, max]`, rounded outward to the tick spacing.
///
/// Like matplotlib's locators, the first and last locations may fall
/// outside the range; callers that draw ticks filter with [`nice_ticks`].
pub fn nice_tick_locations(min: f64, max: f64, num_ticks: usize) -> Vec<f64> {
    if !(max > min) || !min.is_finite() || !max.is_finite() {
        return vec![min];
    }
    if num_ticks < 2 {
        return vec![(min + max) / 2.0];
    }

    let range = nice_number(max - min, false);
    let spacing = nice_number(range / (num_ticks - 1) as f64, true);
    let first = (min / spacing).floor() as i64;
    let last = (max / spacing).ceil() as i64;

    // Integer multiples keep zero exactly zero
    (first..=last).map(|k| k as f64 * spacing).collect()
}

/// Tick locations inside `[min, max]` (with a small tolerance).
pub fn nice_ticks(min: f64, max: f64, num_ticks: usize) -> Vec<f64> {
    let locations = nice_tick_locations(min, max, num_ticks);
    let tolerance = (max - min).abs() * 1e-9;
    locations
        .into_iter()
        .filter(|&t| t >= min - tolerance && t <= max + tolerance)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_locations_extend_past_range() {
        let locs = nice_tick_locations(-0.5, 10.5, 5);
        assert_eq!(locs, vec![-5.0, 0.0, 5.0, 10.0, 15.0]);
        assert!(locs.contains(&0.0));
    }

    #[test]
    fn test_nice_ticks_are_inside_range() {
        let ticks = nice_ticks(-0.5, 10.5, 5);
        assert_eq!(ticks, vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(nice_tick_locations(3.0, 3.0, 5), vec![3.0]);
    }
}
