#![allow(dead_code)]

use std::collections::BTreeMap;

use reprotox_data::{
    Animal, FoodConsumptionRecord, Group, GroupRole, Litter, PregnancyStatus, Pup,
    PupWeightRecord, Sex, Study, StudyDataset, StudyType,
};

/// Builds small datasets one group at a time.
pub struct DatasetBuilder {
    dataset: StudyDataset,
}

impl DatasetBuilder {
    pub fn new(study_type: StudyType) -> Self {
        Self {
            dataset: StudyDataset {
                study: Study {
                    study_id: "RT-2024-002".to_owned(),
                    title: "Scenario".to_owned(),
                    species: "rabbit".to_owned(),
                    study_type,
                    dosing_start_day: 7,
                    dosing_end_day: 19,
                    group_count: 0,
                    start_date: None,
                },
                groups: vec![],
                animals: vec![],
                litters: vec![],
                fetuses: vec![],
                pups: vec![],
            },
        }
    }

    pub fn group(mut self, id: &str, dose_level: f64, role: GroupRole) -> Self {
        self.dataset.groups.push(Group {
            group_id: id.to_owned(),
            name: format!("{dose_level} mg/kg/day"),
            dose_level,
            dose_unit: "mg/kg/day".to_owned(),
            role,
        });
        self.dataset.study.group_count = self.dataset.groups.len();
        self
    }

    /// Adds a pregnant dam eating `grams_per_day` in one interval.
    pub fn dam(mut self, id: &str, group_id: &str, grams_per_day: f64) -> Self {
        self.dataset.animals.push(Animal {
            animal_id: id.to_owned(),
            group_id: group_id.to_owned(),
            body_weights: vec![],
            food_consumption: vec![FoodConsumptionRecord {
                start_day: 7,
                end_day: 10,
                grams_per_day,
            }],
            clinical_observations: vec![],
            pregnancy_status: PregnancyStatus::Pregnant,
            died: false,
            death_day: None,
        });
        self
    }

    pub fn delivered_litter(mut self, dam_id: &str, group_id: &str, born: u32, alive_pnd4: u32) -> Self {
        self.dataset.litters.push(Litter {
            litter_id: format!("L-{dam_id}"),
            dam_id: dam_id.to_owned(),
            group_id: group_id.to_owned(),
            corpora_lutea: born + 2,
            implantations: born + 1,
            early_resorptions: 1,
            late_resorptions: 0,
            live_fetuses: born,
            dead_fetuses: 0,
            mean_fetal_weight: None,
            gravid_uterine_weight: None,
            pups_born: Some(born),
            pups_alive_pnd4: Some(alive_pnd4),
            pups_alive_pnd21: Some(alive_pnd4),
        });
        self
    }

    pub fn pup(mut self, dam_id: &str, group_id: &str, pnd21_weight: f64, eye_opening: i32) -> Self {
        let index = self.dataset.pups.len();
        self.dataset.pups.push(Pup {
            pup_id: format!("P{index}"),
            litter_id: format!("L-{dam_id}"),
            group_id: group_id.to_owned(),
            sex: if index % 2 == 0 { Sex::Male } else { Sex::Female },
            weights: vec![PupWeightRecord {
                day: 21,
                weight: pnd21_weight,
            }],
            milestones: BTreeMap::from([("eye_opening".to_owned(), Some(eye_opening))]),
            neurobehavior_score: None,
            alive: true,
            death_day: None,
        });
        self
    }

    pub fn build(self) -> StudyDataset {
        self.dataset
    }
}

/// Control and high-dose groups; high-dose food consumption is 25% lower.
pub fn food_decrease_dataset() -> StudyDataset {
    DatasetBuilder::new(StudyType::EmbryoFetalDevelopment)
        .group("G1", 0.0, GroupRole::Baseline)
        .group("G4", 300.0, GroupRole::Treated)
        .dam("C1", "G1", 19.0)
        .dam("C2", "G1", 21.0)
        .dam("H1", "G4", 14.0)
        .dam("H2", "G4", 16.0)
        .build()
}
