use serde::{Deserialize, Serialize};

/// Severity of an alert, ordered from benign to critical.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[display("green")]
    Green,
    #[display("yellow")]
    Yellow,
    #[display("red")]
    Red,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum AlertCategory {
    #[display("maternal")]
    Maternal,
    #[display("developmental")]
    Developmental,
    #[display("postnatal")]
    Postnatal,
}

/// Display surface an alert relates to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    #[display("body_weight")]
    BodyWeight,
    #[display("food_consumption")]
    FoodConsumption,
    #[display("mortality")]
    Mortality,
    #[display("clinical_signs")]
    ClinicalSigns,
    #[display("resorptions")]
    Resorptions,
    #[display("fetal_weight")]
    FetalWeight,
    #[display("malformations")]
    Malformations,
    #[display("pup_survival")]
    PupSurvival,
    #[display("pup_weight")]
    PupWeight,
    #[display("milestones")]
    Milestones,
}

/// What an alert measured.
///
/// Consumers group and filter alerts by this tag; the message is for people.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    IndividualBodyWeightLoss,
    GroupBodyWeightChange,
    FoodConsumptionDecrease,
    MaternalDeaths,
    ClinicalSignIncidence,
    EarlyResorptions,
    LateResorptions,
    FetalWeightDecrease,
    MalformationIncidence,
    PerinatalMortality,
    PupWeightDecrease,
    MilestoneDelay,
}

impl MetricKind {
    #[must_use]
    pub fn endpoint(self) -> Endpoint {
        match self {
            Self::IndividualBodyWeightLoss | Self::GroupBodyWeightChange => Endpoint::BodyWeight,
            Self::FoodConsumptionDecrease => Endpoint::FoodConsumption,
            Self::MaternalDeaths => Endpoint::Mortality,
            Self::ClinicalSignIncidence => Endpoint::ClinicalSigns,
            Self::EarlyResorptions | Self::LateResorptions => Endpoint::Resorptions,
            Self::FetalWeightDecrease => Endpoint::FetalWeight,
            Self::MalformationIncidence => Endpoint::Malformations,
            Self::PerinatalMortality => Endpoint::PupSurvival,
            Self::PupWeightDecrease => Endpoint::PupWeight,
            Self::MilestoneDelay => Endpoint::Milestones,
        }
    }
}

/// A safety signal raised for a study or one of its groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub alert_id: String,
    pub study_id: String,
    /// `None` for study-wide alerts.
    pub group_id: Option<String>,
    pub category: AlertCategory,
    pub severity: Severity,
    pub message: String,
    pub endpoint: Endpoint,
    pub metric: MetricKind,
}

/// Rule output before the engine assigns identity and context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertDraft {
    pub severity: Severity,
    pub metric: MetricKind,
    pub message: String,
}

impl AlertDraft {
    #[must_use]
    pub fn new(severity: Severity, metric: MetricKind, message: impl Into<String>) -> Self {
        Self {
            severity,
            metric,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        assert!(Severity::Green < Severity::Yellow);
        assert!(Severity::Yellow < Severity::Red);
        assert_eq!(
            [Severity::Yellow, Severity::Red, Severity::Green].iter().max(),
            Some(&Severity::Red)
        );
    }

    #[test]
    fn test_endpoint_serializes_like_display() {
        for metric in [
            MetricKind::GroupBodyWeightChange,
            MetricKind::LateResorptions,
            MetricKind::PerinatalMortality,
        ] {
            let endpoint = metric.endpoint();
            assert_eq!(
                serde_json::to_string(&endpoint).unwrap(),
                format!("\"{endpoint}\"")
            );
        }
        assert_eq!(MetricKind::PerinatalMortality.endpoint().to_string(), "pup_survival");
    }
}
