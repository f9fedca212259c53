use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Study-level identity and design metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Study {
    pub study_id: String,
    pub title: String,
    pub species: String,
    pub study_type: StudyType,
    /// First gestational day of dosing.
    pub dosing_start_day: i32,
    /// Last gestational (or lactational) day of dosing.
    pub dosing_end_day: i32,
    pub group_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum StudyType {
    /// Dams are sacrificed before term; fetuses are examined.
    EmbryoFetalDevelopment,
    /// Dams deliver; pups are followed through weaning.
    PrePostnatalDevelopment,
    Fertility,
}

/// Role of a dose group in between-group comparisons.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum GroupRole {
    /// The vehicle/control group every other group is compared against.
    Baseline,
    #[default]
    Treated,
}

/// A dose cohort within the study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub group_id: String,
    pub name: String,
    pub dose_level: f64,
    #[serde(default)]
    pub dose_unit: String,
    #[serde(default)]
    pub role: GroupRole,
}
