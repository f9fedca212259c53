//! Statistical primitives for study-level safety reporting.
//!
//! This crate provides the small set of numeric tools every summary and
//! alert in the workspace is built from:
//!
//! - **Descriptive statistics**: mean, standard error of the mean, median, min/max
//! - **Quantiles**: linear-interpolation quantiles (R-7 / Excel `PERCENTILE.INC`)
//! - **Rounding**: half-up decimal rounding for stable, display-ready output
//! - **Box-plot summaries**: five-number summaries plus mean over a group's values
//!
//! # Empty-input policy
//!
//! Every function here is total. Statistics that are undefined for an empty
//! (or single-element) input resolve to `0.0` instead of `NaN` or a panic, so
//! that a dose group without data still renders as "no data" downstream.
//!
//! # Modules
//!
//! - [`descriptive`]: Mean, SEM, median, min/max and incidence percentages
//! - [`percentiles`]: Quantiles by linear interpolation
//! - [`rounding`]: Half-up decimal rounding
//! - [`summary`]: Box-plot summaries combining the above
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use reprotox_stats::descriptive::{mean, median, sem};
//!
//! let values = [1.0, 2.0, 3.0, 4.0];
//! assert_eq!(mean(&values), 2.5);
//! assert_eq!(median(&values), 2.5);
//! assert!(sem(&values) > 0.0);
//! assert_eq!(mean(&[]), 0.0);
//! ```
//!
//! ## Computing quantiles
//!
//! ```
//! use reprotox_stats::percentiles::quantile;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! assert_eq!(quantile(&values, 0.25), 2.0);
//! assert_eq!(quantile(&[1.0, 2.0, 3.0, 4.0], 0.5), 2.5);
//! ```
//!
//! ## Summarizing a group for a box plot
//!
//! ```
//! use reprotox_stats::summary::BoxPlotStats;
//!
//! let stats = BoxPlotStats::new(vec![12.0, 14.0, 13.0, 15.0]);
//! assert_eq!(stats.median, 13.5);
//! assert_eq!(stats.min, 12.0);
//! assert_eq!(stats.max, 15.0);
//! ```

pub mod descriptive;
pub mod percentiles;
pub mod rounding;
pub mod summary;

pub use self::{
    descriptive::{max, mean, median, min, percent, sample_std_dev, sem},
    percentiles::quantile,
    rounding::{round, round2},
};
