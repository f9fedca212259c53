//! Alert rules.
//!
//! Each rule is a small type implementing [`AlertRule`]. A rule sees one
//! treated group and the baseline group through a [`GroupContext`] and
//! returns zero or more [`AlertDraft`]s. Rules hold no state; the engine
//! runs the fixed list from [`all_alert_rules`] once per treated group.

use std::fmt;

use reprotox_data::{Animal, Fetus, Group, Litter, Pup, Study, StudyDataset};
use reprotox_stats::{mean, round};

use crate::{AlertCategory, AlertDraft, AlertThresholds};

pub use self::{developmental::*, maternal::*, postnatal::*};

pub mod developmental;
pub mod maternal;
pub mod postnatal;

/// The rule set, in evaluation order.
#[must_use]
pub fn all_alert_rules() -> Vec<BoxedAlertRule> {
    vec![
        // maternal
        Box::new(IndividualBodyWeightLoss),
        Box::new(GroupBodyWeightChange),
        Box::new(FoodConsumptionDecrease),
        Box::new(MaternalDeaths),
        Box::new(ClinicalSignIncidence),
        // developmental
        Box::new(EarlyResorptions),
        Box::new(LateResorptions),
        Box::new(FetalWeightDecrease),
        Box::new(MalformationIncidence),
        // postnatal
        Box::new(PerinatalMortality),
        Box::new(PupWeightDecrease),
        Box::new(MilestoneDelay),
    ]
}

pub trait AlertRule: fmt::Debug + Send + Sync {
    #[must_use]
    fn id(&self) -> &str;
    #[must_use]
    fn name(&self) -> &str;
    #[must_use]
    fn category(&self) -> AlertCategory;
    #[must_use]
    fn clone_boxed(&self) -> BoxedAlertRule;
    #[must_use]
    fn evaluate(&self, ctx: &GroupContext<'_>, thresholds: &AlertThresholds) -> Vec<AlertDraft>;
}

pub type BoxedAlertRule = Box<dyn AlertRule>;

impl Clone for BoxedAlertRule {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

impl AlertRule for BoxedAlertRule {
    fn id(&self) -> &str {
        self.as_ref().id()
    }

    fn name(&self) -> &str {
        self.as_ref().name()
    }

    fn category(&self) -> AlertCategory {
        self.as_ref().category()
    }

    fn clone_boxed(&self) -> BoxedAlertRule {
        self.as_ref().clone_boxed()
    }

    fn evaluate(&self, ctx: &GroupContext<'_>, thresholds: &AlertThresholds) -> Vec<AlertDraft> {
        self.as_ref().evaluate(ctx, thresholds)
    }
}

/// The entities of one group.
#[derive(Debug, Default, Clone)]
pub struct Cohort<'a> {
    pub animals: Vec<&'a Animal>,
    pub litters: Vec<&'a Litter>,
    pub fetuses: Vec<&'a Fetus>,
    pub pups: Vec<&'a Pup>,
}

impl<'a> Cohort<'a> {
    #[must_use]
    pub fn of(dataset: &'a StudyDataset, group: &'a Group) -> Self {
        let id = group.group_id.as_str();
        Self {
            animals: dataset.animals_in(id).collect(),
            litters: dataset.litters_in(id).collect(),
            fetuses: dataset.fetuses_in(id).collect(),
            pups: dataset.pups_in(id).collect(),
        }
    }

    /// Fetuses of `litter` within this cohort.
    pub fn fetuses_of(&self, litter: &'a Litter) -> impl Iterator<Item = &'a Fetus> {
        self.fetuses
            .iter()
            .copied()
            .filter(move |f| f.litter_id == litter.litter_id)
    }
}

/// Everything a rule may look at when evaluating one treated group.
#[derive(Debug, Clone)]
pub struct GroupContext<'a> {
    pub study: &'a Study,
    pub group: &'a Group,
    pub treated: Cohort<'a>,
    pub baseline: Cohort<'a>,
    /// Milestone names recorded anywhere in the study, sorted.
    pub milestone_names: &'a [String],
}

/// Relative decrease of `value` below `control`, in percent.
///
/// `None` when the control is not positive, so the comparison is skipped.
fn percent_decrease(control: f64, value: f64) -> Option<f64> {
    (control > 0.0).then(|| (control - value) / control * 100.0)
}

/// Mean of `values`, or `None` when there are none.
fn mean_of(values: &[f64]) -> Option<f64> {
    (!values.is_empty()).then(|| mean(values))
}

/// Rounds a value for an alert message.
fn one_decimal(value: f64) -> f64 {
    round(value, 1)
}

/// Logs a rule that could not run for lack of a comparable value.
fn skipped(rule: &str, ctx: &GroupContext<'_>, reason: &str) {
    tracing::trace!(rule, group_id = %ctx.group.group_id, reason, "rule skipped");
}
