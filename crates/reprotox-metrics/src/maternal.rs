//! Maternal endpoints: body weight, food consumption, clinical signs, deaths.

use std::collections::BTreeSet;

use reprotox_data::{Animal, DayInterval, StudyDataset};
use serde::{Deserialize, Serialize};

use crate::{
    incidence::{IncidenceCount, IncidenceRow, group_counts, incidence_table},
    time_series::{GroupSeries, group_time_series},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaternalMetrics {
    /// Body weight (g) by gestational day.
    pub body_weight: Vec<GroupSeries<i32>>,
    /// Cumulative body-weight change (%) by gestational day.
    pub body_weight_change: Vec<GroupSeries<i32>>,
    /// Food consumption (g/day) by interval.
    pub food_consumption: Vec<GroupSeries<DayInterval>>,
    /// Dams with each clinical sign vs. all dams.
    pub clinical_signs: Vec<IncidenceRow>,
    /// Dead dams vs. all dams.
    pub mortality: Vec<IncidenceCount>,
}

impl MaternalMetrics {
    #[must_use]
    pub fn from_dataset(dataset: &StudyDataset) -> Self {
        let groups = &dataset.groups;
        let animals = dataset.animals.iter().collect::<Vec<_>>();

        let metrics = Self {
            body_weight: group_time_series(groups, &animals, |a| {
                a.body_weights
                    .iter()
                    .map(|r| (r.day, r.weight))
                    .collect::<Vec<_>>()
            }),
            body_weight_change: group_time_series(groups, &animals, |a| {
                a.body_weights
                    .iter()
                    .map(|r| (r.day, r.percent_change))
                    .collect::<Vec<_>>()
            }),
            food_consumption: group_time_series(groups, &animals, |a| {
                a.food_consumption
                    .iter()
                    .map(|r| (r.interval(), r.grams_per_day))
                    .collect::<Vec<_>>()
            }),
            clinical_signs: incidence_table(groups, &animals, clinical_sign_terms),
            mortality: group_counts(groups, &animals, |a| a.died),
        };
        tracing::debug!(
            study_id = %dataset.study.study_id,
            clinical_signs = metrics.clinical_signs.len(),
            "assembled maternal metrics"
        );
        metrics
    }
}

fn clinical_sign_terms(animal: &Animal) -> BTreeSet<String> {
    animal
        .clinical_observations
        .iter()
        .map(|o| o.finding.clone())
        .collect()
}
