//! Developmental milestone summaries and delay classification.
//!
//! Only live pups are considered. A pup's achievement day is *delayed* when
//! it exceeds `control_mean + control_sd`, both taken over the baseline
//! group's live pups that achieved the milestone.

use reprotox_data::{Group, Pup};
use reprotox_stats::{mean, round2, sample_std_dev, sem};
use serde::{Deserialize, Serialize};

/// Spread used when the baseline has at most one observation.
pub const DEFAULT_CONTROL_SD: f64 = 1.0;

/// Control reference for one milestone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MilestoneBaseline {
    pub mean: f64,
    pub sd: f64,
}

impl MilestoneBaseline {
    /// Computes the reference from the baseline group's pups.
    ///
    /// `pups` may contain pups of any group; only live pups that achieved
    /// `milestone` contribute.
    #[must_use]
    pub fn from_pups(pups: &[&Pup], milestone: &str) -> Self {
        let days = achievement_days(pups, milestone);
        Self {
            mean: mean(&days),
            sd: sample_std_dev(&days).unwrap_or(DEFAULT_CONTROL_SD),
        }
    }

    /// Upper bound of the normal range.
    #[must_use]
    pub fn delay_cutoff(&self) -> f64 {
        self.mean + self.sd
    }

    #[must_use]
    pub fn is_delayed(&self, day: f64) -> bool {
        day > self.delay_cutoff()
    }
}

/// Milestone achievement within one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneGroupSummary {
    pub group_name: String,
    pub group_id: String,
    /// Live pups that achieved the milestone.
    pub achieved: usize,
    /// Live pups in the group.
    pub total: usize,
    pub mean_day: f64,
    pub sem: f64,
    /// Achieving pups later than the control cutoff.
    pub delayed: usize,
}

/// One milestone across all groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneSummary {
    pub milestone: String,
    pub control_mean: f64,
    pub control_sd: f64,
    pub groups: Vec<MilestoneGroupSummary>,
}

/// Achievement days of live pups that reached `milestone`.
#[must_use]
pub fn achievement_days(pups: &[&Pup], milestone: &str) -> Vec<f64> {
    pups.iter()
        .filter(|p| p.alive)
        .filter_map(|p| p.milestone_day(milestone))
        .map(f64::from)
        .collect()
}

/// Summarizes each of `milestones` over `groups`, using `baseline` as control.
///
/// `pups` holds the pups of every group, already narrowed to the view being
/// built (e.g. one sex).
#[must_use]
pub fn milestone_summaries(
    groups: &[Group],
    baseline: &Group,
    pups: &[&Pup],
    milestones: &[String],
) -> Vec<MilestoneSummary> {
    let pups_of = |group_id: &str| {
        pups.iter()
            .copied()
            .filter(|p| p.group_id == group_id)
            .collect::<Vec<_>>()
    };
    let baseline_pups = pups_of(&baseline.group_id);

    milestones
        .iter()
        .map(|milestone| {
            let reference = MilestoneBaseline::from_pups(&baseline_pups, milestone);
            let groups = groups
                .iter()
                .map(|group| {
                    let group_pups = pups_of(&group.group_id);
                    let days = achievement_days(&group_pups, milestone);
                    MilestoneGroupSummary {
                        group_name: group.name.clone(),
                        group_id: group.group_id.clone(),
                        achieved: days.len(),
                        total: group_pups.iter().filter(|p| p.alive).count(),
                        mean_day: round2(mean(&days)),
                        sem: round2(sem(&days)),
                        delayed: days.iter().filter(|&&d| reference.is_delayed(d)).count(),
                    }
                })
                .collect();
            MilestoneSummary {
                milestone: milestone.clone(),
                control_mean: round2(reference.mean),
                control_sd: round2(reference.sd),
                groups,
            }
        })
        .collect()
}
