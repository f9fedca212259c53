//! Group-level derived metrics for reproductive toxicology studies.
//!
//! This crate turns one [`StudyDataset`] into the summary structures a
//! study report is built from. It has two layers:
//!
//! - **Aggregators**: generic, per-group reductions over any entity type
//!   - [`time_series`]: mean/SEM per key (day or interval) with key union
//!   - [`box_plot`]: five-number summaries of one scalar per entity
//!   - [`incidence`]: affected/total counts per category and group
//!   - [`milestone`]: milestone achievement with delay against control
//!   - [`findings`]: fetal finding term catalog
//! - **Bundles**: named endpoint sets assembled from the aggregators
//!   - [`MaternalMetrics`], [`LitterMetrics`], [`FetalFindingsMetrics`],
//!     [`PostnatalMetrics`], [`StudyOverview`]
//!   - [`DerivedMetrics`]: all of the above
//!
//! Groups always appear in dataset order. Aggregation is deterministic: the
//! same dataset always produces structurally identical output.
//!
//! # Examples
//!
//! ```
//! use reprotox_data::StudyDataset;
//! use reprotox_metrics::DerivedMetrics;
//!
//! let json = r#"{
//!     "study": {
//!         "study_id": "S-001",
//!         "title": "EFD rat",
//!         "species": "rat",
//!         "study_type": "embryo_fetal_development",
//!         "dosing_start_day": 6,
//!         "dosing_end_day": 17,
//!         "group_count": 2
//!     },
//!     "groups": [
//!         { "group_id": "G1", "name": "Control", "dose_level": 0.0, "role": "baseline" },
//!         { "group_id": "G2", "name": "High", "dose_level": 100.0 }
//!     ]
//! }"#;
//! let dataset: StudyDataset = serde_json::from_str(json).unwrap();
//! let metrics = DerivedMetrics::from_dataset(&dataset);
//!
//! assert_eq!(metrics.litter.summary.len(), 2);
//! assert!(metrics.postnatal.survival.is_empty());
//! ```

use reprotox_data::StudyDataset;
use serde::{Deserialize, Serialize};

pub use self::{
    fetal::FetalFindingsMetrics,
    litter::{LitterMetrics, LitterSummaryRow},
    maternal::MaternalMetrics,
    overview::{GroupOverview, StudyOverview},
    postnatal::{BySex, PostnatalMetrics, PupSurvivalRow},
};

pub mod box_plot;
pub mod fetal;
pub mod findings;
pub mod incidence;
pub mod litter;
pub mod maternal;
pub mod milestone;
pub mod overview;
pub mod postnatal;
pub mod time_series;

/// Every metrics bundle of one study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub overview: StudyOverview,
    pub maternal: MaternalMetrics,
    pub litter: LitterMetrics,
    pub fetal: FetalFindingsMetrics,
    pub postnatal: PostnatalMetrics,
}

impl DerivedMetrics {
    #[must_use]
    pub fn from_dataset(dataset: &StudyDataset) -> Self {
        Self {
            overview: StudyOverview::from_dataset(dataset),
            maternal: MaternalMetrics::from_dataset(dataset),
            litter: LitterMetrics::from_dataset(dataset),
            fetal: FetalFindingsMetrics::from_dataset(dataset),
            postnatal: PostnatalMetrics::from_dataset(dataset),
        }
    }
}
