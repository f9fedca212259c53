//! Descriptive statistics over `f64` samples.
//!
//! All functions accept unsorted slices and never fail. Undefined cases
//! (empty input, a single observation for dispersion measures) return `0.0`.

/// Arithmetic mean of `values`.
///
/// Returns `0.0` for an empty slice.
///
/// # Examples
///
/// ```
/// # use reprotox_stats::descriptive::mean;
/// assert_eq!(mean(&[2.0, 4.0, 9.0]), 5.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance with Bessel's correction (`n - 1` denominator).
///
/// Returns `None` when fewer than two values are present.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() <= 1 {
        return None;
    }
    let mean = mean(values);
    let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    Some(sum_sq / (values.len() - 1) as f64)
}

/// Sample standard deviation (`sqrt` of [`sample_variance`]).
///
/// Returns `None` when fewer than two values are present, leaving the
/// fallback to the caller.
///
/// # Examples
///
/// ```
/// # use reprotox_stats::descriptive::sample_std_dev;
/// assert_eq!(sample_std_dev(&[2.0, 4.0]), Some(2.0_f64.sqrt()));
/// assert_eq!(sample_std_dev(&[7.0]), None);
/// ```
#[must_use]
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// Standard error of the mean: `sqrt(sample_variance / n)`.
///
/// Returns `0.0` when `n <= 1`.
///
/// # Examples
///
/// ```
/// # use reprotox_stats::descriptive::sem;
/// assert_eq!(sem(&[1.0, 3.0]), 1.0);
/// assert_eq!(sem(&[5.0]), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn sem(values: &[f64]) -> f64 {
    sample_variance(values).map_or(0.0, |var| (var / values.len() as f64).sqrt())
}

/// Median of `values`; the two central values are averaged for even lengths.
///
/// Returns `0.0` for an empty slice.
///
/// # Examples
///
/// ```
/// # use reprotox_stats::descriptive::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
/// ```
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sorted = sorted(values);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        f64::midpoint(sorted[mid - 1], sorted[mid])
    } else {
        sorted[mid]
    }
}

/// Smallest value, or `0.0` for an empty slice.
#[must_use]
pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().min_by(f64::total_cmp).unwrap_or(0.0)
}

/// Largest value, or `0.0` for an empty slice.
#[must_use]
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().max_by(f64::total_cmp).unwrap_or(0.0)
}

/// Incidence percentage `affected / total * 100`, or `0.0` when `total` is zero.
///
/// # Examples
///
/// ```
/// # use reprotox_stats::descriptive::percent;
/// assert_eq!(percent(3, 12), 25.0);
/// assert_eq!(percent(0, 0), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn percent(affected: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    affected as f64 / total as f64 * 100.0
}

/// Returns an ascending copy of `values`.
pub(crate) fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}
