//! Caesarean-section litter endpoints.
//!
//! The litter is the statistical unit: every box plot here has one value
//! per litter, and the summary table averages over litters.

use reprotox_data::{Litter, StudyDataset};
use reprotox_stats::{mean, round2};
use serde::{Deserialize, Serialize};

use crate::box_plot::{BoxPlotSummary, group_box_plots};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LitterMetrics {
    pub corpora_lutea: Vec<BoxPlotSummary>,
    pub implantations: Vec<BoxPlotSummary>,
    pub early_resorptions: Vec<BoxPlotSummary>,
    pub late_resorptions: Vec<BoxPlotSummary>,
    pub total_resorptions: Vec<BoxPlotSummary>,
    pub live_fetuses: Vec<BoxPlotSummary>,
    pub litter_size: Vec<BoxPlotSummary>,
    /// Litter mean fetal weight (g); litters without a weight are skipped.
    pub fetal_weight: Vec<BoxPlotSummary>,
    pub pre_implantation_loss: Vec<BoxPlotSummary>,
    pub post_implantation_loss: Vec<BoxPlotSummary>,
    pub summary: Vec<LitterSummaryRow>,
}

/// Flattened per-group view of the litter endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LitterSummaryRow {
    pub group_name: String,
    pub group_id: String,
    pub dose_level: f64,
    pub dam_count: usize,
    pub pregnant_count: usize,
    pub litter_count: usize,
    pub mean_litter_size: f64,
    pub mean_implantations: f64,
    pub mean_total_resorptions: f64,
    pub mean_live_fetuses: f64,
    pub mean_fetal_weight: f64,
}

impl LitterMetrics {
    #[must_use]
    pub fn from_dataset(dataset: &StudyDataset) -> Self {
        let groups = &dataset.groups;
        let litters = dataset.litters.iter().collect::<Vec<_>>();
        let count = |extract: fn(&Litter) -> u32| {
            group_box_plots(groups, &litters, |l| Some(f64::from(extract(l))))
        };

        let metrics = Self {
            corpora_lutea: count(|l| l.corpora_lutea),
            implantations: count(|l| l.implantations),
            early_resorptions: count(|l| l.early_resorptions),
            late_resorptions: count(|l| l.late_resorptions),
            total_resorptions: count(Litter::total_resorptions),
            live_fetuses: count(|l| l.live_fetuses),
            litter_size: count(Litter::litter_size),
            fetal_weight: group_box_plots(groups, &litters, |l| l.mean_fetal_weight),
            pre_implantation_loss: group_box_plots(groups, &litters, |l| {
                Some(l.pre_implantation_loss_percent())
            }),
            post_implantation_loss: group_box_plots(groups, &litters, |l| {
                Some(l.post_implantation_loss_percent())
            }),
            summary: summary_rows(dataset),
        };
        tracing::debug!(
            study_id = %dataset.study.study_id,
            litters = litters.len(),
            "assembled litter metrics"
        );
        metrics
    }
}

fn summary_rows(dataset: &StudyDataset) -> Vec<LitterSummaryRow> {
    dataset
        .groups
        .iter()
        .map(|group| {
            let dams = dataset.animals_in(&group.group_id).collect::<Vec<_>>();
            let litters = dataset.litters_in(&group.group_id).collect::<Vec<_>>();
            let litter_mean = |extract: fn(&Litter) -> u32| {
                let values = litters
                    .iter()
                    .map(|&l| f64::from(extract(l)))
                    .collect::<Vec<_>>();
                round2(mean(&values))
            };
            let fetal_weights = litters
                .iter()
                .filter_map(|l| l.mean_fetal_weight)
                .collect::<Vec<_>>();

            LitterSummaryRow {
                group_name: group.name.clone(),
                group_id: group.group_id.clone(),
                dose_level: group.dose_level,
                dam_count: dams.len(),
                pregnant_count: dams
                    .iter()
                    .filter(|a| a.pregnancy_status.is_pregnant())
                    .count(),
                litter_count: litters.len(),
                mean_litter_size: litter_mean(Litter::litter_size),
                mean_implantations: litter_mean(|l| l.implantations),
                mean_total_resorptions: litter_mean(Litter::total_resorptions),
                mean_live_fetuses: litter_mean(|l| l.live_fetuses),
                mean_fetal_weight: round2(mean(&fetal_weights)),
            }
        })
        .collect()
}
