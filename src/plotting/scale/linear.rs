//! Linear scale transformation.

use super::{nice_tick_locations, Scale};
use crate::plotting::error::{PlotError, PlotResult};

/// A linear scale for axis transformation.
#[derive(Debug, Clone)]
pub struct LinearScale {
    min: f64,
    max: f64,
}

impl LinearScale {
    /// Create a new linear scale with the given range.
    pub fn new(min: f64, max: f64) -> PlotResult<Self> {
        if min >= max {
            return Err(PlotError::InvalidConfig(
                "Scale minimum must be less than maximum".to_string(),
            ));
        }
        Ok(LinearScale { min, max })
    }

    /// Create a linear scale with automatic range (to be set later).
    pub fn auto() -> Self {
        LinearScale { min: 0.0, max: 1.0 }
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        LinearScale::auto()
    }
}

impl Scale for LinearScale {
    fn transform(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.5;
        }
        (value - self.min) / range
    }

    fn inverse(&self, normalized: f64) -> f64 {
        self.min + normalized * (self.max - self.min)
    }

    fn set_range(&mut self, min: f64, max: f64) -> PlotResult<()> {
        if !min.is_finite() || !max.is_finite() {
            return Err(PlotError::InvalidConfig(format!(
                "Scale range must be finite, got ({}, {})",
                min, max
            )));
        }
        self.min = min;
        self.max = max;
        Ok(())
    }

    fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    fn tick_locations(&self, num_ticks: usize) -> Vec<f64> {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        nice_tick_locations(lo, hi, num_ticks)
    }

    fn clone_box(&self) -> Box<dyn Scale> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_roundtrip_endpoints() {
        let scale = LinearScale::new(-2.0, 2.0).unwrap();
        assert_eq!(scale.transform(-2.0), 0.0);
        assert_eq!(scale.transform(2.0), 1.0);
        assert_eq!(scale.inverse(0.5), 0.0);
    }

    #[test]
    fn test_invalid_range() {
        assert!(LinearScale::new(1.0, 1.0).is_err());
        assert!(LinearScale::auto().set_range(f64::NAN, 1.0).is_err());
    }
}
