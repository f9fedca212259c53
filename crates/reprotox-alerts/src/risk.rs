use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Alert, AlertCategory, Endpoint, Severity};

/// Reduces alerts to the overall study risk.
///
/// Any `red` alert makes the study `red`; otherwise any `yellow` makes it
/// `yellow`; no alerts at all is `green`.
///
/// # Examples
///
/// ```
/// use reprotox_alerts::{Severity, derive_risk_badge};
///
/// assert_eq!(derive_risk_badge(&[]), Severity::Green);
/// ```
#[must_use]
pub fn derive_risk_badge(alerts: &[Alert]) -> Severity {
    alerts
        .iter()
        .map(|a| a.severity)
        .max()
        .unwrap_or(Severity::Green)
}

/// Alert counts, keyed by the structured tags of each alert.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSummary {
    pub total: usize,
    pub by_severity: BTreeMap<Severity, usize>,
    pub by_category: BTreeMap<AlertCategory, usize>,
    pub by_endpoint: BTreeMap<Endpoint, usize>,
}

impl AlertSummary {
    #[must_use]
    pub fn from_alerts(alerts: &[Alert]) -> Self {
        let mut summary = Self {
            total: alerts.len(),
            ..Self::default()
        };
        for alert in alerts {
            *summary.by_severity.entry(alert.severity).or_default() += 1;
            *summary.by_category.entry(alert.category).or_default() += 1;
            *summary.by_endpoint.entry(alert.endpoint).or_default() += 1;
        }
        summary
    }
}

/// Everything one evaluation produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertReport {
    pub alerts: Vec<Alert>,
    pub risk: Severity,
    pub summary: AlertSummary,
}

impl AlertReport {
    #[must_use]
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self {
            risk: derive_risk_badge(&alerts),
            summary: AlertSummary::from_alerts(&alerts),
            alerts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MetricKind;

    fn alert(severity: Severity, metric: MetricKind) -> Alert {
        Alert {
            alert_id: "ALERT-0001".to_owned(),
            study_id: "S".to_owned(),
            group_id: Some("G".to_owned()),
            category: AlertCategory::Maternal,
            severity,
            message: String::new(),
            endpoint: metric.endpoint(),
            metric,
        }
    }

    #[test]
    fn test_empty_is_green() {
        assert_eq!(derive_risk_badge(&[]), Severity::Green);
    }

    #[test]
    fn test_single_yellow_is_yellow() {
        let alerts = [alert(Severity::Yellow, MetricKind::MaternalDeaths)];
        assert_eq!(derive_risk_badge(&alerts), Severity::Yellow);
    }

    #[test]
    fn test_any_red_wins() {
        let mut alerts = vec![alert(Severity::Yellow, MetricKind::MaternalDeaths); 10];
        alerts.insert(4, alert(Severity::Red, MetricKind::FoodConsumptionDecrease));
        assert_eq!(derive_risk_badge(&alerts), Severity::Red);
    }

    #[test]
    fn test_green_alerts_alone_stay_green() {
        let alerts = [alert(Severity::Green, MetricKind::MaternalDeaths)];
        assert_eq!(derive_risk_badge(&alerts), Severity::Green);
    }

    #[test]
    fn test_summary_counts_by_tag() {
        let alerts = [
            alert(Severity::Red, MetricKind::IndividualBodyWeightLoss),
            alert(Severity::Yellow, MetricKind::GroupBodyWeightChange),
            alert(Severity::Yellow, MetricKind::MaternalDeaths),
        ];
        let summary = AlertSummary::from_alerts(&alerts);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.by_severity[&Severity::Yellow], 2);
        assert_eq!(summary.by_endpoint[&Endpoint::BodyWeight], 2);
        assert_eq!(summary.by_endpoint[&Endpoint::Mortality], 1);
        assert_eq!(summary.by_category[&AlertCategory::Maternal], 3);

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains(r#""body_weight":2"#));
    }
}
