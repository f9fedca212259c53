//! Incidence tables of categorical findings by group.
//!
//! The *unit* of an incidence table is whatever is counted in the
//! denominator: dams for clinical signs, litters or fetuses for fetal
//! findings. Each unit reports the set of categories it is affected by.

use std::collections::BTreeSet;

use reprotox_data::{Group, GroupMember};
use reprotox_stats::percent;
use serde::{Deserialize, Serialize};

/// Affected and total unit counts for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidenceCount {
    pub group_name: String,
    pub group_id: String,
    pub affected: usize,
    pub total: usize,
}

impl IncidenceCount {
    /// `affected / total * 100`, or `0.0` for a group without units.
    #[must_use]
    pub fn percent(&self) -> f64 {
        percent(self.affected, self.total)
    }
}

/// Incidence of one category across all groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidenceRow<C = String> {
    pub category: C,
    pub groups: Vec<IncidenceCount>,
}

/// Builds one row per distinct category, sorted ascending.
///
/// # Arguments
///
/// * `groups` - Dose groups to report, in output order
/// * `units` - Denominator units of all groups
/// * `categories_of` - Categories a unit is affected by
pub fn incidence_table<E, C, F>(
    groups: &[Group],
    units: &[&E],
    categories_of: F,
) -> Vec<IncidenceRow<C>>
where
    E: GroupMember,
    C: Ord + Clone,
    F: Fn(&E) -> BTreeSet<C>,
{
    let unit_categories = units
        .iter()
        .map(|&u| (u.group_id(), categories_of(u)))
        .collect::<Vec<_>>();
    let all_categories = unit_categories
        .iter()
        .flat_map(|(_, cats)| cats.iter().cloned())
        .collect::<BTreeSet<_>>();

    all_categories
        .into_iter()
        .map(|category| {
            let groups = groups
                .iter()
                .map(|group| {
                    let in_group = unit_categories
                        .iter()
                        .filter(|(group_id, _)| *group_id == group.group_id);
                    let (mut affected, mut total) = (0, 0);
                    for (_, cats) in in_group {
                        total += 1;
                        if cats.contains(&category) {
                            affected += 1;
                        }
                    }
                    IncidenceCount {
                        group_name: group.name.clone(),
                        group_id: group.group_id.clone(),
                        affected,
                        total,
                    }
                })
                .collect();
            IncidenceRow { category, groups }
        })
        .collect()
}

/// Counts units per group satisfying `is_affected`.
pub fn group_counts<E, F>(groups: &[Group], units: &[&E], is_affected: F) -> Vec<IncidenceCount>
where
    E: GroupMember,
    F: Fn(&E) -> bool,
{
    groups
        .iter()
        .map(|group| {
            let in_group = units
                .iter()
                .copied()
                .filter(|u| u.group_id() == group.group_id)
                .collect::<Vec<&E>>();
            IncidenceCount {
                group_name: group.name.clone(),
                group_id: group.group_id.clone(),
                affected: in_group.iter().filter(|u| is_affected(**u)).count(),
                total: in_group.len(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use reprotox_data::GroupRole;

    use super::*;

    struct Dam(&'static str, &'static [&'static str]);

    impl GroupMember for Dam {
        fn group_id(&self) -> &str {
            self.0
        }
    }

    fn group(id: &str) -> Group {
        Group {
            group_id: id.to_owned(),
            name: id.to_owned(),
            dose_level: 0.0,
            dose_unit: String::new(),
            role: GroupRole::Treated,
        }
    }

    fn terms(dam: &Dam) -> BTreeSet<String> {
        dam.1.iter().map(|&t| t.to_owned()).collect()
    }

    #[test]
    fn test_categories_sorted_with_per_group_denominators() {
        let dams = [
            Dam("G1", &["Salivation"]),
            Dam("G1", &[]),
            Dam("G2", &["Alopecia", "Salivation"]),
            Dam("G2", &["Alopecia"]),
            Dam("G2", &[]),
        ];
        let refs = dams.iter().collect::<Vec<_>>();
        let table = incidence_table(&[group("G1"), group("G2")], &refs, terms);

        let categories = table.iter().map(|r| r.category.as_str()).collect::<Vec<_>>();
        assert_eq!(categories, vec!["Alopecia", "Salivation"]);

        let alopecia = &table[0].groups;
        assert_eq!((alopecia[0].affected, alopecia[0].total), (0, 2));
        assert_eq!((alopecia[1].affected, alopecia[1].total), (2, 3));

        let salivation = &table[1].groups;
        assert_eq!(salivation[0].percent(), 50.0);
    }

    #[test]
    fn test_percent_of_empty_group_is_zero() {
        let count = IncidenceCount {
            group_name: "G".to_owned(),
            group_id: "G".to_owned(),
            affected: 0,
            total: 0,
        };
        assert_eq!(count.percent(), 0.0);
    }

    #[test]
    fn test_group_counts() {
        let dams = [Dam("G1", &["x"]), Dam("G1", &[]), Dam("G2", &[])];
        let refs = dams.iter().collect::<Vec<_>>();
        let counts = group_counts(&[group("G1"), group("G2")], &refs, |d| !d.1.is_empty());
        assert_eq!((counts[0].affected, counts[0].total), (1, 2));
        assert_eq!((counts[1].affected, counts[1].total), (0, 1));
    }
}
