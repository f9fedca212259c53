//! Embryo-fetal development rules. The litter is the unit throughout.

use reprotox_data::Litter;
use reprotox_stats::percent;

use super::{AlertRule, BoxedAlertRule, GroupContext, mean_of, one_decimal, percent_decrease, skipped};
use crate::{AlertCategory, AlertDraft, AlertThresholds, MetricKind, Severity};

fn mean_per_litter(litters: &[&Litter], count: fn(&Litter) -> u32) -> Option<f64> {
    let values = litters
        .iter()
        .map(|&l| f64::from(count(l)))
        .collect::<Vec<_>>();
    mean_of(&values)
}

/// Mean early resorptions per litter.
///
/// # Severity
///
/// - `red`: above 1.5 times the threshold
/// - `yellow`: above the threshold
#[derive(Debug, Clone)]
pub struct EarlyResorptions;

impl AlertRule for EarlyResorptions {
    fn id(&self) -> &'static str {
        "early_resorptions"
    }
    fn name(&self) -> &'static str {
        "Early Resorptions"
    }
    fn category(&self) -> AlertCategory {
        AlertCategory::Developmental
    }
    fn clone_boxed(&self) -> BoxedAlertRule {
        Box::new(self.clone())
    }
    fn evaluate(&self, ctx: &GroupContext<'_>, thresholds: &AlertThresholds) -> Vec<AlertDraft> {
        let Some(mean) = mean_per_litter(&ctx.treated.litters, |l| l.early_resorptions) else {
            skipped(self.id(), ctx, "no litters");
            return vec![];
        };
        let limit = thresholds.developmental.early_resorption_mean;
        if mean <= limit {
            return vec![];
        }
        let severity = if mean > limit * 1.5 { Severity::Red } else { Severity::Yellow };
        vec![AlertDraft::new(
            severity,
            MetricKind::EarlyResorptions,
            format!("Mean early resorptions {} per litter (limit {limit})", one_decimal(mean)),
        )]
    }
}

/// Mean late resorptions per litter. Single tier.
#[derive(Debug, Clone)]
pub struct LateResorptions;

impl AlertRule for LateResorptions {
    fn id(&self) -> &'static str {
        "late_resorptions"
    }
    fn name(&self) -> &'static str {
        "Late Resorptions"
    }
    fn category(&self) -> AlertCategory {
        AlertCategory::Developmental
    }
    fn clone_boxed(&self) -> BoxedAlertRule {
        Box::new(self.clone())
    }
    fn evaluate(&self, ctx: &GroupContext<'_>, thresholds: &AlertThresholds) -> Vec<AlertDraft> {
        let Some(mean) = mean_per_litter(&ctx.treated.litters, |l| l.late_resorptions) else {
            skipped(self.id(), ctx, "no litters");
            return vec![];
        };
        let limit = thresholds.developmental.late_resorption_mean;
        if mean <= limit {
            return vec![];
        }
        vec![AlertDraft::new(
            Severity::Yellow,
            MetricKind::LateResorptions,
            format!("Mean late resorptions {} per litter (limit {limit})", one_decimal(mean)),
        )]
    }
}

/// Group mean of litter mean fetal weights below the control mean.
///
/// # Severity
///
/// - `red`: decrease above the threshold
/// - `yellow`: decrease above half the threshold
#[derive(Debug, Clone)]
pub struct FetalWeightDecrease;

impl AlertRule for FetalWeightDecrease {
    fn id(&self) -> &'static str {
        "fetal_weight_decrease"
    }
    fn name(&self) -> &'static str {
        "Fetal Weight Decrease"
    }
    fn category(&self) -> AlertCategory {
        AlertCategory::Developmental
    }
    fn clone_boxed(&self) -> BoxedAlertRule {
        Box::new(self.clone())
    }
    fn evaluate(&self, ctx: &GroupContext<'_>, thresholds: &AlertThresholds) -> Vec<AlertDraft> {
        let weights = |litters: &[&Litter]| {
            litters
                .iter()
                .filter_map(|l| l.mean_fetal_weight)
                .collect::<Vec<_>>()
        };
        let Some(group) = mean_of(&weights(&ctx.treated.litters)) else {
            skipped(self.id(), ctx, "no fetal weights");
            return vec![];
        };
        let control = mean_of(&weights(&ctx.baseline.litters)).unwrap_or_default();
        let Some(decrease) = percent_decrease(control, group) else {
            skipped(self.id(), ctx, "control mean is zero");
            return vec![];
        };

        let limit = thresholds.developmental.fetal_weight_decrease_percent;
        let severity = if decrease > limit {
            Severity::Red
        } else if decrease > limit * 0.5 {
            Severity::Yellow
        } else {
            return vec![];
        };
        vec![AlertDraft::new(
            severity,
            MetricKind::FetalWeightDecrease,
            format!("Fetal weight decreased {}% vs control", one_decimal(decrease)),
        )]
    }
}

/// Litters with at least one malformed fetus.
///
/// # Severity
///
/// - `red`: incidence above twice the threshold
/// - `yellow`: incidence above the threshold
#[derive(Debug, Clone)]
pub struct MalformationIncidence;

impl AlertRule for MalformationIncidence {
    fn id(&self) -> &'static str {
        "malformation_incidence"
    }
    fn name(&self) -> &'static str {
        "Malformation Incidence"
    }
    fn category(&self) -> AlertCategory {
        AlertCategory::Developmental
    }
    fn clone_boxed(&self) -> BoxedAlertRule {
        Box::new(self.clone())
    }
    fn evaluate(&self, ctx: &GroupContext<'_>, thresholds: &AlertThresholds) -> Vec<AlertDraft> {
        let litters = &ctx.treated.litters;
        let affected = litters
            .iter()
            .filter(|&&l| ctx.treated.fetuses_of(l).any(|f| f.has_malformation()))
            .count();
        let incidence = percent(affected, litters.len());
        let limit = thresholds.developmental.malformation_incidence_percent;
        if incidence <= limit {
            return vec![];
        }
        let severity = if incidence > limit * 2.0 { Severity::Red } else { Severity::Yellow };
        vec![AlertDraft::new(
            severity,
            MetricKind::MalformationIncidence,
            format!(
                "Malformations in {}% of litters ({affected}/{})",
                one_decimal(incidence),
                litters.len()
            ),
        )]
    }
}
