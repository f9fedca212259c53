//! Half-up decimal rounding.
//!
//! Every number leaving the workspace passes through [`round2`] so that
//! reports are stable across runs and platforms.

/// Rounds `value` to `digits` decimal places, with ties toward positive
/// infinity.
///
/// Implemented as scale, round half up, unscale. Non-finite inputs are
/// returned as `0.0`.
///
/// # Examples
///
/// ```
/// # use reprotox_stats::rounding::round;
/// assert_eq!(round(2.345, 1), 2.3);
/// assert_eq!(round(2.25, 1), 2.3);
/// assert_eq!(round(-2.25, 1), -2.2);
/// ```
#[must_use]
pub fn round(value: f64, digits: i32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let scale = 10_f64.powi(digits);
    (value * scale + 0.5).floor() / scale
}

/// Rounds `value` to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    round(value, 2)
}
