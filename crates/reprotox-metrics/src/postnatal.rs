//! Postnatal (F1 generation) endpoints.
//!
//! Studies without a postnatal phase have no pups; every structure is then
//! empty rather than an error.

use reprotox_data::{Group, Litter, Pup, Sex, StudyDataset};
use reprotox_stats::{percent, round2};
use serde::{Deserialize, Serialize};

use crate::{
    box_plot::{BoxPlotSummary, group_box_plots},
    milestone::{MilestoneSummary, milestone_summaries},
    time_series::{GroupSeries, group_time_series},
};

/// A metric computed separately for male and female pups.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BySex<T> {
    pub male: T,
    pub female: T,
}

impl<T> BySex<T> {
    fn build(mut f: impl FnMut(Sex) -> T) -> Self {
        Self {
            male: f(Sex::Male),
            female: f(Sex::Female),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostnatalMetrics {
    /// Pup weight (g) by postnatal day.
    pub pup_weight: Vec<GroupSeries<i32>>,
    pub pup_weight_by_sex: BySex<Vec<GroupSeries<i32>>>,
    pub milestones: Vec<MilestoneSummary>,
    pub milestones_by_sex: BySex<Vec<MilestoneSummary>>,
    /// Composite neurobehavior score.
    pub neurobehavior: Vec<BoxPlotSummary>,
    pub neurobehavior_by_sex: BySex<Vec<BoxPlotSummary>>,
    pub survival: Vec<PupSurvivalRow>,
}

/// Litter-based pup survival for one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PupSurvivalRow {
    pub group_name: String,
    pub group_id: String,
    /// Litters with recorded delivery counts.
    pub litters: usize,
    pub born: usize,
    pub alive_pnd4: usize,
    pub alive_pnd21: usize,
    pub pnd4_survival_percent: f64,
    pub pnd21_survival_percent: f64,
}

impl PostnatalMetrics {
    #[must_use]
    pub fn from_dataset(dataset: &StudyDataset) -> Self {
        let Some(baseline) = dataset.baseline().filter(|_| dataset.has_pups()) else {
            tracing::debug!(
                study_id = %dataset.study.study_id,
                "no pups recorded; postnatal metrics are empty"
            );
            return Self::default();
        };

        let groups = &dataset.groups;
        let pups = dataset.pups.iter().collect::<Vec<_>>();
        let milestone_names = dataset.milestone_names();
        let of_sex = |sex: Sex| {
            pups.iter()
                .copied()
                .filter(|p| p.sex == sex)
                .collect::<Vec<_>>()
        };

        let metrics = Self {
            pup_weight: pup_weight_series(groups, &pups),
            pup_weight_by_sex: BySex::build(|sex| pup_weight_series(groups, &of_sex(sex))),
            milestones: milestone_summaries(groups, baseline, &pups, &milestone_names),
            milestones_by_sex: BySex::build(|sex| {
                milestone_summaries(groups, baseline, &of_sex(sex), &milestone_names)
            }),
            neurobehavior: neurobehavior_box_plots(groups, &pups),
            neurobehavior_by_sex: BySex::build(|sex| neurobehavior_box_plots(groups, &of_sex(sex))),
            survival: survival_rows(dataset),
        };
        tracing::debug!(
            study_id = %dataset.study.study_id,
            pups = pups.len(),
            milestones = milestone_names.len(),
            "assembled postnatal metrics"
        );
        metrics
    }
}

fn pup_weight_series(groups: &[Group], pups: &[&Pup]) -> Vec<GroupSeries<i32>> {
    group_time_series(groups, pups, |p| {
        p.weights
            .iter()
            .map(|r| (r.day, r.weight))
            .collect::<Vec<_>>()
    })
}

fn neurobehavior_box_plots(groups: &[Group], pups: &[&Pup]) -> Vec<BoxPlotSummary> {
    group_box_plots(groups, pups, |p| p.neurobehavior_score)
}

fn survival_rows(dataset: &StudyDataset) -> Vec<PupSurvivalRow> {
    dataset
        .groups
        .iter()
        .map(|group| {
            let delivered = dataset
                .litters_in(&group.group_id)
                .filter_map(|l| Some((l.pups_born?, l)))
                .collect::<Vec<_>>();
            let born = delivered.iter().map(|(n, _)| *n as usize).sum::<usize>();
            let alive_on = |count: fn(&Litter) -> Option<u32>| {
                delivered
                    .iter()
                    .filter_map(|(_, l)| count(l))
                    .map(|n| n as usize)
                    .sum::<usize>()
            };
            let alive_pnd4 = alive_on(|l| l.pups_alive_pnd4);
            let alive_pnd21 = alive_on(|l| l.pups_alive_pnd21);
            PupSurvivalRow {
                group_name: group.name.clone(),
                group_id: group.group_id.clone(),
                litters: delivered.len(),
                born,
                alive_pnd4,
                alive_pnd21,
                pnd4_survival_percent: round2(percent(alive_pnd4, born)),
                pnd21_survival_percent: round2(percent(alive_pnd21, born)),
            }
        })
        .collect()
}
