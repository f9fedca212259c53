//! Immutable study dataset for developmental and reproductive toxicology.
//!
//! A [`StudyDataset`] is one fully-loaded snapshot of a study: the study
//! metadata, its ordered dose groups and the entity hierarchy below them.
//!
//! ```text
//! StudyDataset
//! ├─ study: Study
//! ├─ groups: Vec<Group>          (baseline group first)
//! ├─ animals: Vec<Animal>        (dams; body weight, food, clinical signs)
//! ├─ litters: Vec<Litter>        (one per pregnant, surviving dam)
//! ├─ fetuses: Vec<Fetus>         (per litter; findings)
//! └─ pups: Vec<Pup>              (per litter; postnatal studies only)
//! ```
//!
//! Entities reference their group and parent litter/dam by id. The loader is
//! expected to call [`StudyDataset::validate`] once; everything downstream
//! treats the dataset as trusted and read-only.
//!
//! # Examples
//!
//! ```
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
//!         { "group_id": "G1", "name": "Control", "dose_level": 0.0, "dose_unit": "mg/kg/day", "role": "baseline" },
//!         { "group_id": "G2", "name": "High", "dose_level": 100.0, "dose_unit": "mg/kg/day" }
//!     ]
//! }"#;
//! let dataset: StudyDataset = serde_json::from_str(json).unwrap();
//! dataset.validate().unwrap();
//! assert_eq!(dataset.baseline().unwrap().group_id, "G1");
//! assert!(!dataset.has_pups());
//! ```

pub use self::{dataset::*, litter::*, maternal::*, offspring::*, study::*};

pub mod dataset;
pub mod litter;
pub mod maternal;
pub mod offspring;
pub mod study;

/// Integrity violation found while validating a loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DatasetError {
    #[display("dataset has no dose groups")]
    NoGroups,
    #[display("group id '{group_id}' is used more than once")]
    DuplicateGroup { group_id: String },
    #[display("groups '{first}' and '{second}' are both tagged as baseline")]
    MultipleBaselines { first: String, second: String },
    #[display("baseline group '{group_id}' must be listed first, found at index {index}")]
    BaselineNotFirst { group_id: String, index: usize },
    #[display("{entity} '{entity_id}' references unknown group '{group_id}'")]
    UnknownGroup {
        entity: &'static str,
        entity_id: String,
        group_id: String,
    },
    #[display("litter '{litter_id}' references unknown dam '{dam_id}'")]
    UnknownDam { litter_id: String, dam_id: String },
    #[display("{entity} '{entity_id}' references unknown litter '{litter_id}'")]
    UnknownLitter {
        entity: &'static str,
        entity_id: String,
        litter_id: String,
    },
    #[display("litter '{litter_id}' belongs to dam '{dam_id}' which is not pregnant or has died")]
    IneligibleDam { litter_id: String, dam_id: String },
}
