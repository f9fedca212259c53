//! Maternal toxicity rules.

use reprotox_data::Animal;
use reprotox_stats::percent;

use super::{AlertRule, BoxedAlertRule, GroupContext, mean_of, one_decimal, percent_decrease, skipped};
use crate::{AlertCategory, AlertDraft, AlertThresholds, MetricKind, Severity};

/// A single dam losing more weight than the loss threshold.
///
/// Raises at most one alert per group: the first qualifying dam is reported
/// and the rest are not inspected.
#[derive(Debug, Clone)]
pub struct IndividualBodyWeightLoss;

impl AlertRule for IndividualBodyWeightLoss {
    fn id(&self) -> &'static str {
        "individual_body_weight_loss"
    }
    fn name(&self) -> &'static str {
        "Individual Body Weight Loss"
    }
    fn category(&self) -> AlertCategory {
        AlertCategory::Maternal
    }
    fn clone_boxed(&self) -> BoxedAlertRule {
        Box::new(self.clone())
    }
    fn evaluate(&self, ctx: &GroupContext<'_>, thresholds: &AlertThresholds) -> Vec<AlertDraft> {
        let limit = thresholds.maternal.body_weight_loss_percent;
        ctx.treated
            .animals
            .iter()
            .find_map(|animal| {
                let worst = animal.worst_percent_change()?;
                (worst < -limit).then(|| {
                    AlertDraft::new(
                        Severity::Red,
                        MetricKind::IndividualBodyWeightLoss,
                        format!(
                            "Animal {} lost {}% body weight (limit {limit}%)",
                            animal.animal_id,
                            one_decimal(-worst)
                        ),
                    )
                })
            })
            .into_iter()
            .collect()
    }
}

/// Group mean body weight change from first to last weighing.
///
/// # Severity
///
/// - `red`: change below `-threshold`
/// - `yellow`: change below `-threshold / 2`
#[derive(Debug, Clone)]
pub struct GroupBodyWeightChange;

impl AlertRule for GroupBodyWeightChange {
    fn id(&self) -> &'static str {
        "group_body_weight_change"
    }
    fn name(&self) -> &'static str {
        "Group Body Weight Change"
    }
    fn category(&self) -> AlertCategory {
        AlertCategory::Maternal
    }
    fn clone_boxed(&self) -> BoxedAlertRule {
        Box::new(self.clone())
    }
    fn evaluate(&self, ctx: &GroupContext<'_>, thresholds: &AlertThresholds) -> Vec<AlertDraft> {
        let animals = &ctx.treated.animals;
        let first = animals.iter().filter_map(|a| a.first_weight()).collect::<Vec<_>>();
        let last = animals.iter().filter_map(|a| a.last_weight()).collect::<Vec<_>>();
        let (Some(first), Some(last)) = (mean_of(&first), mean_of(&last)) else {
            skipped(self.id(), ctx, "no body weights");
            return vec![];
        };
        let Some(decrease) = percent_decrease(first, last) else {
            skipped(self.id(), ctx, "mean first weight is zero");
            return vec![];
        };

        let change = -decrease;
        let limit = thresholds.maternal.body_weight_loss_percent;
        let severity = if change < -limit {
            Severity::Red
        } else if change < -limit * 0.5 {
            Severity::Yellow
        } else {
            return vec![];
        };
        vec![AlertDraft::new(
            severity,
            MetricKind::GroupBodyWeightChange,
            format!(
                "Group mean body weight changed {}% from first to last weighing",
                one_decimal(change)
            ),
        )]
    }
}

/// Group mean food consumption below the control mean.
///
/// All interval records of all dams are pooled.
///
/// # Severity
///
/// - `red`: decrease above the threshold
/// - `yellow`: decrease above half the threshold
#[derive(Debug, Clone)]
pub struct FoodConsumptionDecrease;

impl AlertRule for FoodConsumptionDecrease {
    fn id(&self) -> &'static str {
        "food_consumption_decrease"
    }
    fn name(&self) -> &'static str {
        "Food Consumption Decrease"
    }
    fn category(&self) -> AlertCategory {
        AlertCategory::Maternal
    }
    fn clone_boxed(&self) -> BoxedAlertRule {
        Box::new(self.clone())
    }
    fn evaluate(&self, ctx: &GroupContext<'_>, thresholds: &AlertThresholds) -> Vec<AlertDraft> {
        let pooled = |animals: &[&Animal]| {
            animals
                .iter()
                .flat_map(|a| a.food_consumption.iter().map(|r| r.grams_per_day))
                .collect::<Vec<_>>()
        };
        let Some(group) = mean_of(&pooled(&ctx.treated.animals)) else {
            skipped(self.id(), ctx, "no food consumption records");
            return vec![];
        };
        let control = mean_of(&pooled(&ctx.baseline.animals)).unwrap_or_default();
        let Some(decrease) = percent_decrease(control, group) else {
            skipped(self.id(), ctx, "control mean is zero");
            return vec![];
        };

        let limit = thresholds.maternal.food_consumption_decrease_percent;
        let severity = if decrease > limit {
            Severity::Red
        } else if decrease > limit * 0.5 {
            Severity::Yellow
        } else {
            return vec![];
        };
        vec![AlertDraft::new(
            severity,
            MetricKind::FoodConsumptionDecrease,
            format!("Food consumption decreased {}% vs control", one_decimal(decrease)),
        )]
    }
}

/// Dead dams in the group.
///
/// # Severity
///
/// - `red`: two or more deaths
/// - `yellow`: one death
#[derive(Debug, Clone)]
pub struct MaternalDeaths;

impl AlertRule for MaternalDeaths {
    fn id(&self) -> &'static str {
        "maternal_deaths"
    }
    fn name(&self) -> &'static str {
        "Maternal Deaths"
    }
    fn category(&self) -> AlertCategory {
        AlertCategory::Maternal
    }
    fn clone_boxed(&self) -> BoxedAlertRule {
        Box::new(self.clone())
    }
    fn evaluate(&self, ctx: &GroupContext<'_>, thresholds: &AlertThresholds) -> Vec<AlertDraft> {
        let deaths = ctx.treated.animals.iter().filter(|a| a.died).count();
        if deaths == 0 || deaths < thresholds.maternal.maternal_death_count {
            return vec![];
        }
        let severity = if deaths >= 2 { Severity::Red } else { Severity::Yellow };
        let noun = if deaths == 1 { "death" } else { "deaths" };
        vec![AlertDraft::new(
            severity,
            MetricKind::MaternalDeaths,
            format!("{deaths} maternal {noun}"),
        )]
    }
}

/// Dams with at least one clinical observation.
///
/// # Severity
///
/// - `red`: incidence above 50%
/// - `yellow`: incidence above the threshold
#[derive(Debug, Clone)]
pub struct ClinicalSignIncidence;

impl AlertRule for ClinicalSignIncidence {
    fn id(&self) -> &'static str {
        "clinical_sign_incidence"
    }
    fn name(&self) -> &'static str {
        "Clinical Sign Incidence"
    }
    fn category(&self) -> AlertCategory {
        AlertCategory::Maternal
    }
    fn clone_boxed(&self) -> BoxedAlertRule {
        Box::new(self.clone())
    }
    fn evaluate(&self, ctx: &GroupContext<'_>, thresholds: &AlertThresholds) -> Vec<AlertDraft> {
        let animals = &ctx.treated.animals;
        let affected = animals.iter().filter(|a| a.has_clinical_signs()).count();
        let incidence = percent(affected, animals.len());
        if incidence <= thresholds.maternal.clinical_sign_incidence_percent {
            return vec![];
        }
        let severity = if incidence > 50.0 { Severity::Red } else { Severity::Yellow };
        vec![AlertDraft::new(
            severity,
            MetricKind::ClinicalSignIncidence,
            format!(
                "Clinical signs in {}% of dams ({affected}/{})",
                one_decimal(incidence),
                animals.len()
            ),
        )]
    }
}
