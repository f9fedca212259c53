//! Quantiles by linear interpolation.
//!
//! Uses the R-7 definition (the default of R's `quantile()` and of
//! `numpy.percentile`): for `n` sorted values and probability `q`, the
//! quantile sits at fractional index `h = (n - 1) * q`, interpolating
//! linearly between the two neighbouring order statistics.

use crate::descriptive;

/// Computes the `q`-quantile of unsorted `values`.
///
/// `q` is clamped to `[0.0, 1.0]`. Returns `0.0` for an empty slice.
///
/// # Examples
///
/// ```
/// use reprotox_stats::percentiles::quantile;
///
/// let values = [7.0, 1.0, 3.0, 5.0];
/// assert_eq!(quantile(&values, 0.0), 1.0);
/// assert_eq!(quantile(&values, 0.5), 4.0);
/// assert_eq!(quantile(&values, 1.0), 7.0);
/// assert_eq!(quantile(&[], 0.5), 0.0);
/// ```
#[must_use]
pub fn quantile(values: &[f64], q: f64) -> f64 {
    let sorted = descriptive::sorted(values);
    quantile_sorted(&sorted, q)
}

/// Computes the `q`-quantile of values already sorted in ascending order.
///
/// This skips the copy-and-sort step of [`quantile`]; use it when several
/// quantiles are taken from the same sample.
///
/// # Panics
///
/// Panics in debug mode if `sorted_values` is not sorted in ascending order.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn quantile_sorted(sorted_values: &[f64], q: f64) -> f64 {
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    if sorted_values.is_empty() {
        return 0.0;
    }
    let q = q.clamp(0.0, 1.0);
    let h = (sorted_values.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    if lo == hi {
        return sorted_values[lo];
    }
    let lower = sorted_values[lo];
    lower + (h - lo as f64) * (sorted_values[hi] - lower)
}
