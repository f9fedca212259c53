//! Group time series over dated observations.
//!
//! Each entity contributes zero or more `(key, value)` observations. For
//! every group the series covers the union of keys seen on the group's
//! entities; the statistics at a key use only the entities observed there.
//! Missing observations are skipped, never imputed.

use std::collections::BTreeMap;

use reprotox_data::{Group, GroupMember};
use reprotox_stats::{mean, round2, sem};
use serde::{Deserialize, Serialize};

/// Mean and SEM at one key of a group series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint<K> {
    pub key: K,
    pub mean: f64,
    pub sem: f64,
    /// Number of entities observed at this key.
    pub n: usize,
}

/// A group's series of [`SeriesPoint`]s, sorted by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSeries<K> {
    pub group_name: String,
    pub group_id: String,
    pub dose_level: f64,
    pub points: Vec<SeriesPoint<K>>,
}

/// Builds one series per group, in `groups` order.
///
/// # Arguments
///
/// * `groups` - Dose groups to report, in output order
/// * `entities` - Entities of all groups; each is routed by [`GroupMember::group_id`]
/// * `observations` - Extracts `(key, value)` pairs from one entity
pub fn group_time_series<E, K, I, F>(
    groups: &[Group],
    entities: &[&E],
    observations: F,
) -> Vec<GroupSeries<K>>
where
    E: GroupMember,
    K: Ord + Clone,
    I: IntoIterator<Item = (K, f64)>,
    F: Fn(&E) -> I,
{
    groups
        .iter()
        .map(|group| {
            let mut by_key = BTreeMap::<K, Vec<f64>>::new();
            for &entity in entities.iter().filter(|e| e.group_id() == group.group_id) {
                for (key, value) in observations(entity) {
                    by_key.entry(key).or_default().push(value);
                }
            }
            let points = by_key
                .into_iter()
                .map(|(key, values)| SeriesPoint {
                    key,
                    mean: round2(mean(&values)),
                    sem: round2(sem(&values)),
                    n: values.len(),
                })
                .collect();
            GroupSeries {
                group_name: group.name.clone(),
                group_id: group.group_id.clone(),
                dose_level: group.dose_level,
                points,
            }
        })
        .collect()
}
