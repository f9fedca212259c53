use serde::{Deserialize, Serialize};

use crate::{descriptive, percentiles, rounding::round2};

/// Box-plot summary of a sample.
///
/// Combines the raw values with their mean, median, extremes and quartiles.
/// Every statistic is computed from the unrounded sample and then rounded to
/// two decimals independently, so `q1 <= median <= q3` holds before rounding
/// and may only tie after it.
///
/// An empty sample yields all-zero statistics and an empty `values` list.
///
/// # Examples
///
/// ```
/// use reprotox_stats::summary::BoxPlotStats;
///
/// let stats = BoxPlotStats::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(stats.mean, 3.0);
/// assert_eq!(stats.q1, 2.0);
/// assert_eq!(stats.q3, 4.0);
///
/// let empty = BoxPlotStats::new(vec![]);
/// assert_eq!(empty.max, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotStats {
    /// The raw sample, in input order.
    pub values: Vec<f64>,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (average of the two central values for even lengths).
    pub median: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// First quartile (0.25 quantile).
    pub q1: f64,
    /// Third quartile (0.75 quantile).
    pub q3: f64,
}

impl BoxPlotStats {
    /// Summarizes `values`, keeping them in the order given.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        let sorted = descriptive::sorted(&values);
        Self {
            mean: round2(descriptive::mean(&sorted)),
            median: round2(descriptive::median(&sorted)),
            min: round2(descriptive::min(&sorted)),
            max: round2(descriptive::max(&sorted)),
            q1: round2(percentiles::quantile_sorted(&sorted, 0.25)),
            q3: round2(percentiles::quantile_sorted(&sorted, 0.75)),
            values,
        }
    }
}
