//! Fetal examination findings.

use std::collections::{BTreeSet, HashMap};

use reprotox_data::{Fetus, Litter, StudyDataset};
use serde::{Deserialize, Serialize};

use crate::{
    findings::{FindingCategory, FindingMetadata, finding_catalog},
    incidence::{IncidenceRow, incidence_table},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetalFindingsMetrics {
    /// Litters with at least one affected fetus vs. all litters, per term.
    pub litter_incidence: Vec<IncidenceRow>,
    /// Affected fetuses vs. all examined fetuses, per term.
    pub fetus_incidence: Vec<IncidenceRow>,
    /// First-seen metadata per term.
    pub catalog: Vec<FindingMetadata>,
    /// Litter incidence rolled up by classification and exam type.
    pub category_litter_incidence: Vec<IncidenceRow<FindingCategory>>,
    /// Fetus incidence rolled up by classification and exam type.
    pub category_fetus_incidence: Vec<IncidenceRow<FindingCategory>>,
}

impl FetalFindingsMetrics {
    #[must_use]
    pub fn from_dataset(dataset: &StudyDataset) -> Self {
        let groups = &dataset.groups;
        let fetuses = dataset.fetuses.iter().collect::<Vec<_>>();
        let litters = dataset.litters.iter().collect::<Vec<_>>();

        let mut fetuses_by_litter = HashMap::<&str, Vec<&Fetus>>::new();
        for &fetus in &fetuses {
            fetuses_by_litter
                .entry(fetus.litter_id.as_str())
                .or_default()
                .push(fetus);
        }
        let litter_fetuses = |litter: &Litter| {
            fetuses_by_litter
                .get(litter.litter_id.as_str())
                .map_or(&[][..], Vec::as_slice)
                .to_vec()
        };

        let metrics = Self {
            litter_incidence: incidence_table(groups, &litters, |l| {
                litter_fetuses(l).into_iter().flat_map(terms).collect()
            }),
            fetus_incidence: incidence_table(groups, &fetuses, terms),
            catalog: finding_catalog(&fetuses),
            category_litter_incidence: incidence_table(groups, &litters, |l| {
                litter_fetuses(l).into_iter().flat_map(categories).collect()
            }),
            category_fetus_incidence: incidence_table(groups, &fetuses, categories),
        };
        tracing::debug!(
            study_id = %dataset.study.study_id,
            terms = metrics.catalog.len(),
            "assembled fetal findings metrics"
        );
        metrics
    }
}

fn terms(fetus: &Fetus) -> BTreeSet<String> {
    fetus.findings.iter().map(|f| f.term.clone()).collect()
}

fn categories(fetus: &Fetus) -> BTreeSet<FindingCategory> {
    fetus
        .findings
        .iter()
        .map(|f| FindingCategory {
            classification: f.classification,
            exam_type: f.exam_type,
        })
        .collect()
}
