use reprotox_data::StudyDataset;

use crate::{
    Alert, AlertIdSequence, AlertReport, AlertThresholds,
    rule::{AlertRule, BoxedAlertRule, Cohort, GroupContext, all_alert_rules},
};

/// Evaluates the standard rule set over every treated group.
///
/// Ids start at `ALERT-0001` for each call.
#[must_use]
pub fn evaluate_alerts(dataset: &StudyDataset, thresholds: &AlertThresholds) -> AlertReport {
    evaluate_alerts_with(
        dataset,
        thresholds,
        &all_alert_rules(),
        &mut AlertIdSequence::new(),
    )
}

/// Evaluates `rules` over every treated group, drawing ids from `ids`.
///
/// Groups are visited in dataset order and rules in slice order; alerts are
/// returned in that order. Postnatal rules only run when the study has pups.
/// The baseline group is never compared to itself.
#[must_use]
pub fn evaluate_alerts_with(
    dataset: &StudyDataset,
    thresholds: &AlertThresholds,
    rules: &[BoxedAlertRule],
    ids: &mut AlertIdSequence,
) -> AlertReport {
    let Some(baseline) = dataset.baseline() else {
        tracing::warn!(study_id = %dataset.study.study_id, "no groups; nothing to evaluate");
        return AlertReport::new(vec![]);
    };
    let has_pups = dataset.has_pups();
    let milestone_names = dataset.milestone_names();
    let baseline_cohort = Cohort::of(dataset, baseline);

    let mut alerts = vec![];
    for group in dataset.treated_groups() {
        let ctx = GroupContext {
            study: &dataset.study,
            group,
            treated: Cohort::of(dataset, group),
            baseline: baseline_cohort.clone(),
            milestone_names: &milestone_names,
        };
        for rule in rules {
            if rule.category().is_postnatal() && !has_pups {
                continue;
            }
            for draft in rule.evaluate(&ctx, thresholds) {
                let alert = Alert {
                    alert_id: ids.next_id(),
                    study_id: dataset.study.study_id.clone(),
                    group_id: Some(group.group_id.clone()),
                    category: rule.category(),
                    severity: draft.severity,
                    message: draft.message,
                    endpoint: draft.metric.endpoint(),
                    metric: draft.metric,
                };
                tracing::debug!(
                    rule = rule.id(),
                    group_id = %group.group_id,
                    severity = %alert.severity,
                    alert_id = %alert.alert_id,
                    "alert raised"
                );
                alerts.push(alert);
            }
        }
    }

    let report = AlertReport::new(alerts);
    tracing::debug!(
        study_id = %dataset.study.study_id,
        alerts = report.alerts.len(),
        risk = %report.risk,
        "alert evaluation finished"
    );
    report
}
