use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

/// A fetus examined at caesarean section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fetus {
    pub fetus_id: String,
    pub litter_id: String,
    pub group_id: String,
    pub sex: Sex,
    pub viable: bool,
    /// Grams.
    pub weight: f64,
    #[serde(default)]
    pub findings: Vec<Finding>,
}

impl Fetus {
    #[must_use]
    pub fn has_malformation(&self) -> bool {
        self.findings
            .iter()
            .any(|f| f.classification.is_malformation())
    }
}

/// A structural finding from fetal examination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub code: String,
    pub term: String,
    pub classification: FindingClassification,
    pub exam_type: ExamType,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum FindingClassification {
    Malformation,
    Variation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamType {
    External,
    Visceral,
    Skeletal,
}

/// A pup followed after birth (pre/postnatal development studies).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pup {
    pub pup_id: String,
    pub litter_id: String,
    pub group_id: String,
    pub sex: Sex,
    #[serde(default)]
    pub weights: Vec<PupWeightRecord>,
    /// Milestone name to postnatal day of achievement; `None` when not (yet) achieved.
    #[serde(default)]
    pub milestones: BTreeMap<String, Option<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neurobehavior_score: Option<f64>,
    pub alive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_day: Option<i32>,
}

/// Pup body weight on a postnatal day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PupWeightRecord {
    pub day: i32,
    pub weight: f64,
}

impl Pup {
    /// Weight at the latest recorded postnatal day.
    #[must_use]
    pub fn last_weight(&self) -> Option<f64> {
        self.weights.iter().max_by_key(|r| r.day).map(|r| r.weight)
    }

    /// Day on which `milestone` was achieved, if it was.
    #[must_use]
    pub fn milestone_day(&self, milestone: &str) -> Option<i32> {
        self.milestones.get(milestone).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetus_malformation_detection() {
        let fetus: Fetus = serde_json::from_value(serde_json::json!({
            "fetus_id": "F1",
            "litter_id": "L1",
            "group_id": "G1",
            "sex": "female",
            "viable": true,
            "weight": 3.6,
            "findings": [
                { "code": "V01", "term": "Wavy rib", "classification": "variation", "exam_type": "skeletal" },
                { "code": "M07", "term": "Cleft palate", "classification": "malformation", "exam_type": "external" }
            ]
        }))
        .unwrap();
        assert!(fetus.has_malformation());
        assert_eq!(fetus.findings[0].term, "Wavy rib");
    }

    #[test]
    fn test_pup_milestones_and_last_weight() {
        let pup: Pup = serde_json::from_value(serde_json::json!({
            "pup_id": "P1",
            "litter_id": "L1",
            "group_id": "G1",
            "sex": "male",
            "weights": [{ "day": 4, "weight": 9.5 }, { "day": 1, "weight": 6.1 }],
            "milestones": { "eye_opening": 14, "pinna_unfolding": null },
            "alive": true
        }))
        .unwrap();
        assert_eq!(pup.last_weight(), Some(9.5));
        assert_eq!(pup.milestone_day("eye_opening"), Some(14));
        assert_eq!(pup.milestone_day("pinna_unfolding"), None);
        assert_eq!(pup.milestone_day("surface_righting"), None);
    }
}
