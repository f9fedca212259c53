//! Per-group box-plot summaries of a per-entity scalar.

use reprotox_data::{Group, GroupMember};
use reprotox_stats::summary::BoxPlotStats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotSummary {
    pub group_name: String,
    pub group_id: String,
    #[serde(flatten)]
    pub stats: BoxPlotStats,
}

/// Summarizes `value` over each group's entities.
///
/// Entities for which `value` returns `None` are left out of the sample.
pub fn group_box_plots<E, F>(groups: &[Group], entities: &[&E], value: F) -> Vec<BoxPlotSummary>
where
    E: GroupMember,
    F: Fn(&E) -> Option<f64>,
{
    groups
        .iter()
        .map(|group| {
            let values = entities
                .iter()
                .filter(|e| e.group_id() == group.group_id)
                .filter_map(|&e| value(e))
                .collect();
            BoxPlotSummary {
                group_name: group.name.clone(),
                group_id: group.group_id.clone(),
                stats: BoxPlotStats::new(values),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use reprotox_data::GroupRole;

    use super::*;

    struct Item(&'static str, Option<f64>);

    impl GroupMember for Item {
        fn group_id(&self) -> &str {
            self.0
        }
    }

    fn group(id: &str) -> Group {
        Group {
            group_id: id.to_owned(),
            name: format!("{id} name"),
            dose_level: 1.0,
            dose_unit: String::new(),
            role: GroupRole::Treated,
        }
    }

    #[test]
    fn test_box_plot_per_group_skips_missing_values() {
        let items = [
            Item("G1", Some(10.0)),
            Item("G1", Some(14.0)),
            Item("G1", None),
            Item("G2", Some(3.0)),
        ];
        let refs = items.iter().collect::<Vec<_>>();
        let plots = group_box_plots(&[group("G1"), group("G2")], &refs, |i| i.1);

        assert_eq!(plots[0].group_name, "G1 name");
        assert_eq!(plots[0].stats.values, vec![10.0, 14.0]);
        assert_eq!(plots[0].stats.median, 12.0);
        assert_eq!(plots[1].stats.values, vec![3.0]);
        assert_eq!(plots[1].stats.q1, 3.0);
    }
}
