#![allow(dead_code)]

use std::collections::BTreeMap;

use reprotox_data::{
    Animal, BodyWeightRecord, ClinicalObservation, ExamType, FoodConsumptionRecord, Fetus,
    Finding, FindingClassification, Group, GroupRole, Litter, ObservationSeverity,
    PregnancyStatus, Pup, PupWeightRecord, Sex, Study, StudyDataset, StudyType,
};

pub fn study(study_type: StudyType, group_count: usize) -> Study {
    Study {
        study_id: "RT-2024-001".to_owned(),
        title: "Test article developmental toxicity".to_owned(),
        species: "rat".to_owned(),
        study_type,
        dosing_start_day: 6,
        dosing_end_day: 17,
        group_count,
        start_date: None,
    }
}

pub fn group(id: &str, name: &str, dose_level: f64, role: GroupRole) -> Group {
    Group {
        group_id: id.to_owned(),
        name: name.to_owned(),
        dose_level,
        dose_unit: "mg/kg/day".to_owned(),
        role,
    }
}

pub fn dam(id: &str, group_id: &str, weights: &[(i32, f64)], food: &[f64]) -> Animal {
    let first = weights.first().map_or(0.0, |&(_, w)| w);
    Animal {
        animal_id: id.to_owned(),
        group_id: group_id.to_owned(),
        body_weights: weights
            .iter()
            .map(|&(day, weight)| BodyWeightRecord {
                day,
                weight,
                percent_change: (weight - first) / first * 100.0,
            })
            .collect(),
        food_consumption: food
            .iter()
            .zip((0..).step_by(3))
            .map(|(&grams_per_day, start_day)| FoodConsumptionRecord {
                start_day,
                end_day: start_day + 3,
                grams_per_day,
            })
            .collect(),
        clinical_observations: vec![],
        pregnancy_status: PregnancyStatus::Pregnant,
        died: false,
        death_day: None,
    }
}

pub fn with_sign(mut animal: Animal, day: i32, finding: &str) -> Animal {
    animal.clinical_observations.push(ClinicalObservation {
        day,
        finding: finding.to_owned(),
        severity: ObservationSeverity::Slight,
    });
    animal
}

pub fn litter(id: &str, dam_id: &str, group_id: &str, counts: [u32; 4], weight: f64) -> Litter {
    let [corpora_lutea, implantations, early_resorptions, late_resorptions] = counts;
    Litter {
        litter_id: id.to_owned(),
        dam_id: dam_id.to_owned(),
        group_id: group_id.to_owned(),
        corpora_lutea,
        implantations,
        early_resorptions,
        late_resorptions,
        live_fetuses: implantations - early_resorptions - late_resorptions,
        dead_fetuses: 0,
        mean_fetal_weight: Some(weight),
        gravid_uterine_weight: None,
        pups_born: None,
        pups_alive_pnd4: None,
        pups_alive_pnd21: None,
    }
}

pub fn fetus(id: &str, litter: &Litter, sex: Sex, findings: Vec<Finding>) -> Fetus {
    Fetus {
        fetus_id: id.to_owned(),
        litter_id: litter.litter_id.clone(),
        group_id: litter.group_id.clone(),
        sex,
        viable: true,
        weight: litter.mean_fetal_weight.unwrap_or_default(),
        findings,
    }
}

pub fn malformation(term: &str) -> Finding {
    Finding {
        code: format!("M-{term}"),
        term: term.to_owned(),
        classification: FindingClassification::Malformation,
        exam_type: ExamType::External,
    }
}

pub fn variation(term: &str) -> Finding {
    Finding {
        code: format!("V-{term}"),
        term: term.to_owned(),
        classification: FindingClassification::Variation,
        exam_type: ExamType::Skeletal,
    }
}

pub fn pup(id: &str, litter: &Litter, sex: Sex, weights: &[(i32, f64)], milestones: &[(&str, Option<i32>)]) -> Pup {
    Pup {
        pup_id: id.to_owned(),
        litter_id: litter.litter_id.clone(),
        group_id: litter.group_id.clone(),
        sex,
        weights: weights
            .iter()
            .map(|&(day, weight)| PupWeightRecord { day, weight })
            .collect(),
        milestones: milestones
            .iter()
            .map(|&(name, day)| (name.to_owned(), day))
            .collect::<BTreeMap<_, _>>(),
        neurobehavior_score: None,
        alive: true,
        death_day: None,
    }
}

/// Two-group embryo-fetal study with fetal findings and no pups.
pub fn efd_dataset() -> StudyDataset {
    let control = [
        dam("C1", "G1", &[(0, 250.0), (6, 265.0), (20, 340.0)], &[22.0, 23.0]),
        dam("C2", "G1", &[(0, 245.0), (6, 258.0), (20, 330.0)], &[21.0, 22.0]),
    ];
    let high = [
        with_sign(dam("H1", "G2", &[(0, 252.0), (6, 255.0), (20, 300.0)], &[17.0, 18.0]), 8, "Piloerection"),
        dam("H2", "G2", &[(0, 248.0), (6, 250.0), (20, 295.0)], &[16.0, 17.0]),
    ];
    let litters = vec![
        litter("L-C1", "C1", "G1", [15, 14, 1, 0], 3.6),
        litter("L-C2", "C2", "G1", [16, 15, 0, 0], 3.7),
        litter("L-H1", "H1", "G2", [15, 13, 2, 1], 3.1),
        litter("L-H2", "H2", "G2", [14, 12, 3, 0], 3.0),
    ];
    let fetuses = vec![
        fetus("F-C1-1", &litters[0], Sex::Male, vec![]),
        fetus("F-C1-2", &litters[0], Sex::Female, vec![variation("Wavy rib")]),
        fetus("F-C2-1", &litters[1], Sex::Female, vec![]),
        fetus("F-H1-1", &litters[2], Sex::Male, vec![malformation("Cleft palate")]),
        fetus("F-H1-2", &litters[2], Sex::Female, vec![malformation("Cleft palate"), variation("Wavy rib")]),
        fetus("F-H2-1", &litters[3], Sex::Male, vec![variation("Wavy rib")]),
    ];

    StudyDataset {
        study: study(StudyType::EmbryoFetalDevelopment, 2),
        groups: vec![
            group("G1", "Control", 0.0, GroupRole::Baseline),
            group("G2", "High", 100.0, GroupRole::Treated),
        ],
        animals: control.into_iter().chain(high).collect(),
        litters,
        fetuses,
        pups: vec![],
    }
}

/// Two-group pre/postnatal study with delivered litters and pups.
pub fn ppnd_dataset() -> StudyDataset {
    let mut litters = vec![
        litter("L-C1", "C1", "G1", [15, 14, 0, 0], 0.0),
        litter("L-H1", "H1", "G2", [15, 13, 0, 0], 0.0),
    ];
    for (litter, (born, pnd4, pnd21)) in litters.iter_mut().zip([(12, 12, 11), (12, 9, 8)]) {
        litter.mean_fetal_weight = None;
        litter.pups_born = Some(born);
        litter.pups_alive_pnd4 = Some(pnd4);
        litter.pups_alive_pnd21 = Some(pnd21);
    }
    let pups = vec![
        pup("P-C1-1", &litters[0], Sex::Male, &[(1, 6.5), (4, 9.8), (21, 50.0)], &[("eye_opening", Some(14))]),
        pup("P-C1-2", &litters[0], Sex::Female, &[(1, 6.3), (4, 9.4), (21, 48.0)], &[("eye_opening", Some(15))]),
        pup("P-H1-1", &litters[1], Sex::Male, &[(1, 6.0), (4, 8.8), (21, 41.0)], &[("eye_opening", Some(17))]),
        pup("P-H1-2", &litters[1], Sex::Female, &[(1, 5.8), (4, 8.5), (21, 40.0)], &[("eye_opening", None)]),
    ];

    StudyDataset {
        study: study(StudyType::PrePostnatalDevelopment, 2),
        groups: vec![
            group("G1", "Control", 0.0, GroupRole::Baseline),
            group("G2", "High", 100.0, GroupRole::Treated),
        ],
        animals: vec![
            dam("C1", "G1", &[(0, 250.0), (20, 340.0)], &[22.0]),
            dam("H1", "G2", &[(0, 251.0), (20, 320.0)], &[20.0]),
        ],
        litters,
        fetuses: vec![],
        pups,
    }
}
