use reprotox_data::{Study, StudyDataset};
use serde::{Deserialize, Serialize};

/// Study identity and entity counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyOverview {
    pub study: Study,
    pub baseline_group_id: Option<String>,
    pub animal_count: usize,
    pub litter_count: usize,
    pub fetus_count: usize,
    pub pup_count: usize,
    pub groups: Vec<GroupOverview>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupOverview {
    pub group_id: String,
    pub group_name: String,
    pub dose_level: f64,
    pub dose_unit: String,
    pub is_baseline: bool,
    pub animals: usize,
    pub deaths: usize,
    pub litters: usize,
    pub fetuses: usize,
    pub pups: usize,
}

impl StudyOverview {
    #[must_use]
    pub fn from_dataset(dataset: &StudyDataset) -> Self {
        let baseline_group_id = dataset.baseline().map(|g| g.group_id.clone());
        let groups = dataset
            .groups
            .iter()
            .map(|group| {
                let id = group.group_id.as_str();
                GroupOverview {
                    group_id: group.group_id.clone(),
                    group_name: group.name.clone(),
                    dose_level: group.dose_level,
                    dose_unit: group.dose_unit.clone(),
                    is_baseline: baseline_group_id.as_deref() == Some(id),
                    animals: dataset.animals_in(id).count(),
                    deaths: dataset.animals_in(id).filter(|a| a.died).count(),
                    litters: dataset.litters_in(id).count(),
                    fetuses: dataset.fetuses_in(id).count(),
                    pups: dataset.pups_in(id).count(),
                }
            })
            .collect();

        Self {
            study: dataset.study.clone(),
            baseline_group_id,
            animal_count: dataset.animals.len(),
            litter_count: dataset.litters.len(),
            fetus_count: dataset.fetuses.len(),
            pup_count: dataset.pups.len(),
            groups,
        }
    }
}
