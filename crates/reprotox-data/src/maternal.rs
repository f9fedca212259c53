use serde::{Deserialize, Serialize};

/// A maternal animal (dam).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub animal_id: String,
    pub group_id: String,
    #[serde(default)]
    pub body_weights: Vec<BodyWeightRecord>,
    #[serde(default)]
    pub food_consumption: Vec<FoodConsumptionRecord>,
    #[serde(default)]
    pub clinical_observations: Vec<ClinicalObservation>,
    pub pregnancy_status: PregnancyStatus,
    /// Found dead or sacrificed moribund.
    #[serde(default)]
    pub died: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_day: Option<i32>,
}

/// Body weight on a gestational day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyWeightRecord {
    pub day: i32,
    /// Grams.
    pub weight: f64,
    /// Cumulative change from the animal's first record, in percent.
    pub percent_change: f64,
}

/// Mean daily food consumption over a gestational-day interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodConsumptionRecord {
    pub start_day: i32,
    pub end_day: i32,
    pub grams_per_day: f64,
}

impl FoodConsumptionRecord {
    #[must_use]
    pub fn interval(&self) -> DayInterval {
        DayInterval {
            start_day: self.start_day,
            end_day: self.end_day,
        }
    }
}

/// Inclusive day interval, ordered by start day then end day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    derive_more::Display,
)]
#[display("{start_day}-{end_day}")]
pub struct DayInterval {
    pub start_day: i32,
    pub end_day: i32,
}

/// A clinical sign recorded for a dam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalObservation {
    pub day: i32,
    pub finding: String,
    #[serde(default)]
    pub severity: ObservationSeverity,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationSeverity {
    #[default]
    Minimal,
    Slight,
    Moderate,
    Marked,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
pub enum PregnancyStatus {
    #[serde(rename = "pregnant")]
    Pregnant,
    #[serde(rename = "not_pregnant", alias = "not pregnant")]
    NotPregnant,
    #[serde(rename = "aborted")]
    Aborted,
    #[serde(rename = "n/a", alias = "N/A")]
    NotApplicable,
}

impl Animal {
    /// Weight at the earliest recorded day.
    #[must_use]
    pub fn first_weight(&self) -> Option<f64> {
        self.body_weights
            .iter()
            .min_by_key(|r| r.day)
            .map(|r| r.weight)
    }

    /// Weight at the latest recorded day.
    #[must_use]
    pub fn last_weight(&self) -> Option<f64> {
        self.body_weights
            .iter()
            .max_by_key(|r| r.day)
            .map(|r| r.weight)
    }

    /// Most negative cumulative percent change across all records.
    #[must_use]
    pub fn worst_percent_change(&self) -> Option<f64> {
        self.body_weights
            .iter()
            .map(|r| r.percent_change)
            .min_by(f64::total_cmp)
    }

    #[must_use]
    pub fn has_clinical_signs(&self) -> bool {
        !self.clinical_observations.is_empty()
    }

    /// Whether the dam can have a litter: pregnant and not dead.
    #[must_use]
    pub fn can_have_litter(&self) -> bool {
        self.pregnancy_status.is_pregnant() && !self.died
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animal(weights: &[(i32, f64, f64)]) -> Animal {
        Animal {
            animal_id: "A1".to_owned(),
            group_id: "G1".to_owned(),
            body_weights: weights
                .iter()
                .map(|&(day, weight, percent_change)| BodyWeightRecord {
                    day,
                    weight,
                    percent_change,
                })
                .collect(),
            food_consumption: vec![],
            clinical_observations: vec![],
            pregnancy_status: PregnancyStatus::Pregnant,
            died: false,
            death_day: None,
        }
    }

    #[test]
    fn test_first_and_last_weight_follow_day_order() {
        let a = animal(&[(12, 280.0, 12.0), (0, 250.0, 0.0), (6, 240.0, -4.0)]);
        assert_eq!(a.first_weight(), Some(250.0));
        assert_eq!(a.last_weight(), Some(280.0));
        assert_eq!(a.worst_percent_change(), Some(-4.0));
    }

    #[test]
    fn test_no_weights() {
        let a = animal(&[]);
        assert_eq!(a.first_weight(), None);
        assert_eq!(a.worst_percent_change(), None);
    }

    #[test]
    fn test_pregnancy_status_serialized_forms() {
        let parsed: Vec<PregnancyStatus> =
            serde_json::from_str(r#"["pregnant", "not pregnant", "aborted", "N/A", "n/a"]"#)
                .unwrap();
        assert_eq!(
            parsed,
            vec![
                PregnancyStatus::Pregnant,
                PregnancyStatus::NotPregnant,
                PregnancyStatus::Aborted,
                PregnancyStatus::NotApplicable,
                PregnancyStatus::NotApplicable,
            ]
        );
    }

    #[test]
    fn test_day_interval_order_and_display() {
        let mut intervals = vec![
            DayInterval { start_day: 6, end_day: 9 },
            DayInterval { start_day: 0, end_day: 3 },
            DayInterval { start_day: 0, end_day: 6 },
        ];
        intervals.sort();
        let labels = intervals.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(labels, vec!["0-3", "0-6", "6-9"]);
    }
}
