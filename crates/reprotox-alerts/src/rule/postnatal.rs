//! Postnatal (F1) rules. The engine only runs these for studies with pups.

use reprotox_data::Pup;

use super::{AlertRule, BoxedAlertRule, GroupContext, mean_of, one_decimal, percent_decrease, skipped};
use crate::{AlertCategory, AlertDraft, AlertThresholds, MetricKind, Severity};

/// Pups dead between birth and PND 4, pooled over litters with both counts.
///
/// # Severity
///
/// - `red`: mortality above twice the threshold
/// - `yellow`: mortality above the threshold
#[derive(Debug, Clone)]
pub struct PerinatalMortality;

impl AlertRule for PerinatalMortality {
    fn id(&self) -> &'static str {
        "perinatal_mortality"
    }
    fn name(&self) -> &'static str {
        "Perinatal Mortality"
    }
    fn category(&self) -> AlertCategory {
        AlertCategory::Postnatal
    }
    fn clone_boxed(&self) -> BoxedAlertRule {
        Box::new(self.clone())
    }
    fn evaluate(&self, ctx: &GroupContext<'_>, thresholds: &AlertThresholds) -> Vec<AlertDraft> {
        let (born, alive) = ctx
            .treated
            .litters
            .iter()
            .filter_map(|l| Some((u64::from(l.pups_born?), u64::from(l.pups_alive_pnd4?))))
            .fold((0_u64, 0_u64), |(born, alive), (b, a)| {
                (born.saturating_add(b), alive.saturating_add(a))
            });
        if born == 0 {
            skipped(self.id(), ctx, "no pups born");
            return vec![];
        }

        let dead = born.saturating_sub(alive);
        #[expect(clippy::cast_precision_loss)]
        let mortality = dead as f64 / born as f64 * 100.0;
        let limit = thresholds.postnatal.perinatal_mortality_percent;
        if mortality <= limit {
            return vec![];
        }
        let severity = if mortality > limit * 2.0 { Severity::Red } else { Severity::Yellow };
        vec![AlertDraft::new(
            severity,
            MetricKind::PerinatalMortality,
            format!(
                "Perinatal mortality {}% ({dead} of {born} pups dead by PND 4)",
                one_decimal(mortality),
            ),
        )]
    }
}

/// Group mean last-recorded pup weight below the control mean. Single tier.
#[derive(Debug, Clone)]
pub struct PupWeightDecrease;

impl AlertRule for PupWeightDecrease {
    fn id(&self) -> &'static str {
        "pup_weight_decrease"
    }
    fn name(&self) -> &'static str {
        "Pup Weight Decrease"
    }
    fn category(&self) -> AlertCategory {
        AlertCategory::Postnatal
    }
    fn clone_boxed(&self) -> BoxedAlertRule {
        Box::new(self.clone())
    }
    fn evaluate(&self, ctx: &GroupContext<'_>, thresholds: &AlertThresholds) -> Vec<AlertDraft> {
        let last_weights =
            |pups: &[&Pup]| pups.iter().filter_map(|p| p.last_weight()).collect::<Vec<_>>();
        let Some(group) = mean_of(&last_weights(&ctx.treated.pups)) else {
            skipped(self.id(), ctx, "no pup weights");
            return vec![];
        };
        let control = mean_of(&last_weights(&ctx.baseline.pups)).unwrap_or_default();
        let Some(decrease) = percent_decrease(control, group) else {
            skipped(self.id(), ctx, "control mean is zero");
            return vec![];
        };

        if decrease <= thresholds.postnatal.pup_weight_gain_decrease_percent {
            return vec![];
        }
        vec![AlertDraft::new(
            Severity::Red,
            MetricKind::PupWeightDecrease,
            format!("Pup weight decreased {}% vs control", one_decimal(decrease)),
        )]
    }
}

/// Later mean achievement day than control, one alert per milestone.
///
/// Only live pups that achieved the milestone count on either side.
///
/// # Severity
///
/// - `red`: delay above twice the threshold
/// - `yellow`: delay above the threshold
#[derive(Debug, Clone)]
pub struct MilestoneDelay;

impl AlertRule for MilestoneDelay {
    fn id(&self) -> &'static str {
        "milestone_delay"
    }
    fn name(&self) -> &'static str {
        "Milestone Delay"
    }
    fn category(&self) -> AlertCategory {
        AlertCategory::Postnatal
    }
    fn clone_boxed(&self) -> BoxedAlertRule {
        Box::new(self.clone())
    }
    fn evaluate(&self, ctx: &GroupContext<'_>, thresholds: &AlertThresholds) -> Vec<AlertDraft> {
        let mean_day = |pups: &[&Pup], milestone: &str| {
            let days = pups
                .iter()
                .filter(|p| p.alive)
                .filter_map(|p| p.milestone_day(milestone))
                .map(f64::from)
                .collect::<Vec<_>>();
            mean_of(&days)
        };
        let limit = thresholds.postnatal.milestone_delay_days;

        ctx.milestone_names
            .iter()
            .filter_map(|milestone| {
                let (Some(group), Some(control)) = (
                    mean_day(&ctx.treated.pups, milestone),
                    mean_day(&ctx.baseline.pups, milestone),
                ) else {
                    skipped(self.id(), ctx, "milestone not achieved on both sides");
                    return None;
                };
                let delay = group - control;
                if delay <= limit {
                    return None;
                }
                let severity = if delay > limit * 2.0 { Severity::Red } else { Severity::Yellow };
                Some(AlertDraft::new(
                    severity,
                    MetricKind::MilestoneDelay,
                    format!(
                        "Milestone {milestone} delayed {} days vs control",
                        one_decimal(delay)
                    ),
                ))
            })
            .collect()
    }
}
