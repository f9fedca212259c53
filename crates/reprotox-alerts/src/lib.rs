//! Threshold-based safety signals for reproductive toxicology studies.
//!
//! The engine compares every treated group against the baseline group with
//! a fixed, ordered set of rules and reduces the result to one study-level
//! risk badge.
//!
//! # Pipeline
//!
//! ```text
//! StudyDataset
//!   └─ for each treated group (dataset order)
//!        └─ for each rule (fixed order) ─> AlertDraft*
//!             └─ id + study/group/category/endpoint ─> Alert
//! Alert* ─> AlertReport { alerts, risk, summary }
//! ```
//!
//! # Rules
//!
//! | Category      | Rule                          | Tiers                        |
//! |---------------|-------------------------------|------------------------------|
//! | maternal      | [`IndividualBodyWeightLoss`]  | red                          |
//! | maternal      | [`GroupBodyWeightChange`]     | yellow at ½×, red at 1×      |
//! | maternal      | [`FoodConsumptionDecrease`]   | yellow at ½×, red at 1×      |
//! | maternal      | [`MaternalDeaths`]            | yellow, red at 2 deaths      |
//! | maternal      | [`ClinicalSignIncidence`]     | yellow, red above 50%        |
//! | developmental | [`EarlyResorptions`]          | yellow, red at 1.5×          |
//! | developmental | [`LateResorptions`]           | yellow                       |
//! | developmental | [`FetalWeightDecrease`]       | yellow at ½×, red at 1×      |
//! | developmental | [`MalformationIncidence`]     | yellow, red at 2×            |
//! | postnatal     | [`PerinatalMortality`]        | yellow, red at 2×            |
//! | postnatal     | [`PupWeightDecrease`]         | red                          |
//! | postnatal     | [`MilestoneDelay`]            | yellow, red at 2×            |
//!
//! A comparison against a baseline without data produces no alert.
//!
//! # Examples
//!
//! ```
//! use reprotox_alerts::{AlertThresholds, Severity, evaluate_alerts};
//! use reprotox_data::StudyDataset;
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
//! let report = evaluate_alerts(&dataset, &AlertThresholds::default());
//!
//! assert!(report.alerts.is_empty());
//! assert_eq!(report.risk, Severity::Green);
//! ```

pub use self::{
    alert::*,
    engine::{evaluate_alerts, evaluate_alerts_with},
    risk::{AlertReport, AlertSummary, derive_risk_badge},
    rule::{
        AlertRule, BoxedAlertRule, ClinicalSignIncidence, Cohort, EarlyResorptions,
        FetalWeightDecrease, FoodConsumptionDecrease, GroupBodyWeightChange, GroupContext,
        IndividualBodyWeightLoss, LateResorptions, MalformationIncidence, MaternalDeaths,
        MilestoneDelay, PerinatalMortality, PupWeightDecrease, all_alert_rules,
    },
    sequence::AlertIdSequence,
    thresholds::*,
};

pub mod alert;
pub mod engine;
pub mod risk;
pub mod rule;
pub mod sequence;
pub mod thresholds;
