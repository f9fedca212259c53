use std::collections::BTreeMap;

use reprotox_data::{ExamType, Fetus, FindingClassification};
use serde::{Deserialize, Serialize};

/// Descriptive metadata of a fetal finding term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingMetadata {
    pub term: String,
    pub code: String,
    pub exam_type: ExamType,
    pub classification: FindingClassification,
}

/// Classification and exam type pair used to roll findings up by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FindingCategory {
    pub classification: FindingClassification,
    pub exam_type: ExamType,
}

/// Builds the term catalog, sorted by term.
///
/// Metadata is taken from the first occurrence of each term in `fetuses`
/// order; later occurrences with different code, exam type or
/// classification are ignored.
#[must_use]
pub fn finding_catalog(fetuses: &[&Fetus]) -> Vec<FindingMetadata> {
    let mut catalog = BTreeMap::<&str, FindingMetadata>::new();
    for finding in fetuses.iter().copied().flat_map(|f| &f.findings) {
        catalog
            .entry(finding.term.as_str())
            .or_insert_with(|| FindingMetadata {
                term: finding.term.clone(),
                code: finding.code.clone(),
                exam_type: finding.exam_type,
                classification: finding.classification,
            });
    }
    catalog.into_values().collect()
}
