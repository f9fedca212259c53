use pretty_assertions::assert_eq;
use reprotox_data::{ExamType, FindingClassification};
use reprotox_metrics::{
    DerivedMetrics, PostnatalMetrics, findings::FindingCategory, time_series::SeriesPoint,
};

mod common;

#[test]
fn test_serialization_is_byte_identical_across_calls() {
    for dataset in [common::efd_dataset(), common::ppnd_dataset()] {
        let first = serde_json::to_string(&DerivedMetrics::from_dataset(&dataset)).unwrap();
        let second = serde_json::to_string(&DerivedMetrics::from_dataset(&dataset)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_maternal_series_and_incidence() {
    let metrics = DerivedMetrics::from_dataset(&common::efd_dataset());
    let maternal = &metrics.maternal;

    let control = &maternal.body_weight[0];
    assert_eq!(control.group_id, "G1");
    assert_eq!(
        control.points[0],
        SeriesPoint {
            key: 0,
            mean: 247.5,
            sem: 2.5,
            n: 2,
        }
    );
    assert_eq!(
        control.points.iter().map(|p| p.key).collect::<Vec<_>>(),
        vec![0, 6, 20]
    );

    let food = &maternal.food_consumption[1];
    assert_eq!(food.points.len(), 2);
    assert_eq!(food.points[0].key.to_string(), "0-3");
    assert_eq!(food.points[0].mean, 16.5);

    assert_eq!(maternal.clinical_signs.len(), 1);
    let sign = &maternal.clinical_signs[0];
    assert_eq!(sign.category, "Piloerection");
    assert_eq!(sign.groups[0].affected, 0);
    assert_eq!(sign.groups[1].percent(), 50.0);

    assert!(maternal.mortality.iter().all(|c| c.affected == 0 && c.total == 2));
}

#[test]
fn test_litter_summary() {
    let metrics = DerivedMetrics::from_dataset(&common::efd_dataset());
    let high = &metrics.litter.summary[1];

    assert_eq!(high.group_name, "High");
    assert_eq!(high.dose_level, 100.0);
    assert_eq!((high.dam_count, high.pregnant_count, high.litter_count), (2, 2, 2));
    assert_eq!(high.mean_implantations, 12.5);
    assert_eq!(high.mean_total_resorptions, 3.0);
    assert_eq!(high.mean_live_fetuses, 9.5);
    assert_eq!(high.mean_litter_size, 9.5);
    assert_eq!(high.mean_fetal_weight, 3.05);

    assert_eq!(metrics.litter.early_resorptions[1].stats.values, vec![2.0, 3.0]);
}

#[test]
fn test_fetal_incidence_by_litter_and_fetus() {
    let metrics = DerivedMetrics::from_dataset(&common::efd_dataset());
    let fetal = &metrics.fetal;

    let terms = fetal.catalog.iter().map(|m| m.term.as_str()).collect::<Vec<_>>();
    assert_eq!(terms, vec!["Cleft palate", "Wavy rib"]);

    let wavy_rib = &fetal.litter_incidence[1];
    assert_eq!(wavy_rib.category, "Wavy rib");
    assert_eq!((wavy_rib.groups[0].affected, wavy_rib.groups[0].total), (1, 2));
    assert_eq!((wavy_rib.groups[1].affected, wavy_rib.groups[1].total), (2, 2));

    let wavy_rib = &fetal.fetus_incidence[1];
    assert_eq!((wavy_rib.groups[0].affected, wavy_rib.groups[0].total), (1, 3));
    assert_eq!((wavy_rib.groups[1].affected, wavy_rib.groups[1].total), (2, 3));

    let external_malformations = &fetal.category_litter_incidence[0];
    assert_eq!(
        external_malformations.category,
        FindingCategory {
            classification: FindingClassification::Malformation,
            exam_type: ExamType::External,
        }
    );
    assert_eq!(external_malformations.groups[0].affected, 0);
    assert_eq!(external_malformations.groups[1].affected, 1);
}

#[test]
fn test_study_without_pups_has_empty_postnatal_metrics() {
    let metrics = DerivedMetrics::from_dataset(&common::efd_dataset());
    assert_eq!(metrics.postnatal, PostnatalMetrics::default());
    assert!(metrics.postnatal.pup_weight.is_empty());
    assert!(metrics.postnatal.milestones_by_sex.female.is_empty());
}

#[test]
fn test_postnatal_survival_and_weights() {
    let metrics = DerivedMetrics::from_dataset(&common::ppnd_dataset());
    let postnatal = &metrics.postnatal;

    let high = &postnatal.survival[1];
    assert_eq!((high.litters, high.born, high.alive_pnd4, high.alive_pnd21), (1, 12, 9, 8));
    assert_eq!(high.pnd4_survival_percent, 75.0);
    assert_eq!(high.pnd21_survival_percent, 66.67);
    assert_eq!(postnatal.survival[0].pnd21_survival_percent, 91.67);

    let control_pnd21 = postnatal.pup_weight[0].points.last().unwrap();
    assert_eq!((control_pnd21.key, control_pnd21.mean, control_pnd21.sem), (21, 49.0, 1.0));

    let male_pnd21 = postnatal.pup_weight_by_sex.male[0].points.last().unwrap();
    assert_eq!((male_pnd21.mean, male_pnd21.sem, male_pnd21.n), (50.0, 0.0, 1));
}

#[test]
fn test_milestone_delay_against_control() {
    let metrics = DerivedMetrics::from_dataset(&common::ppnd_dataset());
    let postnatal = &metrics.postnatal;

    let eye_opening = &postnatal.milestones[0];
    assert_eq!(eye_opening.milestone, "eye_opening");
    assert_eq!(eye_opening.control_mean, 14.5);
    assert_eq!(eye_opening.control_sd, 0.71);

    let high = &eye_opening.groups[1];
    assert_eq!((high.achieved, high.total, high.delayed), (1, 2, 1));
    assert_eq!(high.mean_day, 17.0);

    // one female control observation: the SD falls back to 1
    let female = &postnatal.milestones_by_sex.female[0];
    assert_eq!((female.control_mean, female.control_sd), (15.0, 1.0));
    assert_eq!((female.groups[1].achieved, female.groups[1].total), (0, 1));
}

#[test]
fn test_overview_counts() {
    let metrics = DerivedMetrics::from_dataset(&common::efd_dataset());
    let overview = &metrics.overview;

    assert_eq!(overview.baseline_group_id.as_deref(), Some("G1"));
    assert_eq!(
        (overview.animal_count, overview.litter_count, overview.fetus_count, overview.pup_count),
        (4, 4, 6, 0)
    );
    assert!(overview.groups[0].is_baseline);
    assert!(!overview.groups[1].is_baseline);
    assert_eq!(overview.groups[1].fetuses, 3);
}
