//! Scalar statistics helpers.
//!
//! Conventions follow the measurement-analysis use case: statistics over an
//! empty slice are `NaN` rather than an error, and the standard deviation is
//! the sample (n - 1) estimator, which is `NaN` for fewer than two values.
//! Callers are expected to filter out missing values before calling in here.

use crate::Real;
use nalgebra::Vector2;

/// Arithmetic mean. `NaN` for an empty slice.
pub fn mean(values: &[Real]) -> Real {
    if values.is_empty() {
        return Real::NAN;
    }
    values.iter().sum::<Real>() / values.len() as Real
}

/// Sample standard deviation (n - 1 denominator). `NaN` for fewer than two
/// values.
pub fn sample_std(values: &[Real]) -> Real {
    let n = values.len();
    if n < 2 {
        return Real::NAN;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<Real>() / (n - 1) as Real;
    var.sqrt()
}

/// Median. Averages the two middle values for even-length input; `NaN` for an
/// empty slice.
pub fn median(values: &[Real]) -> Real {
    if values.is_empty() {
        return Real::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        0.5 * (sorted[mid - 1] + sorted[mid])
    }
}

/// Circular mean of angles in radians, in `[0, 2π)`.
///
/// Each angle contributes a unit vector; the mean is the direction of the
/// vector sum, so values near the 0/2π wraparound average correctly
/// (e.g. {1°, 359°} gives ~0°, not 180°). `NaN` for an empty slice.
pub fn circular_mean(angles: &[Real]) -> Real {
    if angles.is_empty() {
        return Real::NAN;
    }
    let sum = angles
        .iter()
        .map(|a| Vector2::new(a.cos(), a.sin()))
        .fold(Vector2::zeros(), |acc, v| acc + v);
    sum.y.atan2(sum.x).rem_euclid(std::f64::consts::TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_known_values() {
        assert!((mean(&[2.0, 4.0]) - 3.0).abs() < 1e-12);
        assert!((mean(&[1.0, 2.0, 6.0]) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn mean_of_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn sample_std_of_known_values() {
        // {2, 4}: mean 3, variance (1 + 1) / 1 = 2
        assert!((sample_std(&[2.0, 4.0]) - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn sample_std_needs_two_values() {
        assert!(sample_std(&[3.0]).is_nan());
        assert!(sample_std(&[]).is_nan());
    }

    #[test]
    fn median_odd_and_even_lengths() {
        assert!((median(&[5.0, 1.0, 3.0]) - 3.0).abs() < 1e-12);
        assert!((median(&[4.0, 1.0, 3.0, 2.0]) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn median_of_empty_is_nan() {
        assert!(median(&[]).is_nan());
    }

    #[test]
    fn circular_mean_handles_wraparound() {
        let angles = [1.0_f64.to_radians(), 359.0_f64.to_radians()];
        let mean_angle = circular_mean(&angles);

        // Near 0 on the circle: either side of the wraparound is acceptable.
        let tau = std::f64::consts::TAU;
        let dist = mean_angle.min(tau - mean_angle);
        assert!(dist < 1e-9, "circular mean too far from 0: {mean_angle}");
    }

    #[test]
    fn circular_mean_of_identical_angles() {
        let a = 0.75;
        assert!((circular_mean(&[a, a, a]) - a).abs() < 1e-12);
    }

    #[test]
    fn circular_mean_stays_in_range() {
        let angles = [-std::f64::consts::FRAC_PI_2];
        let mean_angle = circular_mean(&angles);
        assert!(mean_angle >= 0.0 && mean_angle < std::f64::consts::TAU);
        assert!((mean_angle - 1.5 * std::f64::consts::PI).abs() < 1e-12);
    }
}
