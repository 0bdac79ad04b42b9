//! Summary statistics over a group's values.
//!
//! Every function returns `None` for an empty slice.

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn median(values: &[f64]) -> Option<f64> {
    percentile(values, 50.0)
}

/// Percentile `p` (0-100) with linear interpolation between closest ranks.
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    percentiles(values, &[p]).map(|v| v[0])
}

/// Several percentiles over one sorted copy of `values`.
pub fn percentiles(values: &[f64], ps: &[f64]) -> Option<Vec<f64>> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let last = sorted.len() - 1;

    Some(
        ps.iter()
            .map(|&p| {
                let rank = p.clamp(0.0, 100.0) / 100.0 * last as f64;
                let lo = rank.floor() as usize;
                let hi = rank.ceil() as usize;
                sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
            })
            .collect(),
    )
}

/// Population standard deviation (divides by n).
pub fn std_dev(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Some(var.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_percentiles_interpolate() {
        let p = percentiles(&[14.0, 10.0, 12.0], &[2.5, 25.0, 75.0, 97.5]).unwrap();
        let expected = [10.1, 11.0, 13.0, 13.9];
        for (got, want) in p.iter().zip(expected) {
            assert!((got - want).abs() < EPS, "{} != {}", got, want);
        }
    }

    #[test]
    fn test_median_even_count() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[7.0]), Some(7.0));
    }

    #[test]
    fn test_population_std() {
        let sd = std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((sd - 2.0).abs() < EPS);
    }

    #[test]
    fn test_empty_input() {
        assert!(mean(&[]).is_none());
        assert!(percentile(&[], 50.0).is_none());
        assert!(std_dev(&[]).is_none());
    }
}
