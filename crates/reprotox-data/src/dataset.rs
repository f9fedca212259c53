use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{Animal, DatasetError, Fetus, Group, Litter, Pup, Study};

/// An entity assigned to a dose group.
pub trait GroupMember {
    fn group_id(&self) -> &str;
}

macro_rules! impl_group_member {
    ($($ty:ty),*) => {
        $(
            impl GroupMember for $ty {
                fn group_id(&self) -> &str {
                    &self.group_id
                }
            }
        )*
    };
}

impl_group_member!(Animal, Litter, Fetus, Pup);

/// One immutable snapshot of a study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyDataset {
    pub study: Study,
    /// Dose groups in presentation order; the baseline group comes first.
    pub groups: Vec<Group>,
    #[serde(default)]
    pub animals: Vec<Animal>,
    #[serde(default)]
    pub litters: Vec<Litter>,
    #[serde(default)]
    pub fetuses: Vec<Fetus>,
    #[serde(default)]
    pub pups: Vec<Pup>,
}

impl StudyDataset {
    /// The comparison group.
    ///
    /// This is the group tagged [`GroupRole::Baseline`](crate::GroupRole::Baseline),
    /// or the first group when none is tagged. Returns `None` only for a
    /// dataset without groups.
    #[must_use]
    pub fn baseline(&self) -> Option<&Group> {
        self.groups
            .iter()
            .find(|g| g.role.is_baseline())
            .or_else(|| self.groups.first())
    }

    /// Every group except the baseline, in dataset order.
    pub fn treated_groups(&self) -> impl Iterator<Item = &Group> + '_ {
        let baseline_id = self.baseline().map(|g| g.group_id.as_str());
        self.groups
            .iter()
            .filter(move |g| Some(g.group_id.as_str()) != baseline_id)
    }

    pub fn animals_in<'a>(&'a self, group_id: &'a str) -> impl Iterator<Item = &'a Animal> + 'a {
        self.animals.iter().filter(move |a| a.group_id == group_id)
    }

    pub fn litters_in<'a>(&'a self, group_id: &'a str) -> impl Iterator<Item = &'a Litter> + 'a {
        self.litters.iter().filter(move |l| l.group_id == group_id)
    }

    pub fn fetuses_in<'a>(&'a self, group_id: &'a str) -> impl Iterator<Item = &'a Fetus> + 'a {
        self.fetuses.iter().filter(move |f| f.group_id == group_id)
    }

    pub fn pups_in<'a>(&'a self, group_id: &'a str) -> impl Iterator<Item = &'a Pup> + 'a {
        self.pups.iter().filter(move |p| p.group_id == group_id)
    }

    pub fn fetuses_of<'a>(&'a self, litter_id: &'a str) -> impl Iterator<Item = &'a Fetus> + 'a {
        self.fetuses.iter().filter(move |f| f.litter_id == litter_id)
    }

    /// Whether the study has a postnatal phase with recorded pups.
    #[must_use]
    pub fn has_pups(&self) -> bool {
        !self.pups.is_empty()
    }

    /// Distinct milestone names recorded on any pup, sorted.
    #[must_use]
    pub fn milestone_names(&self) -> Vec<String> {
        self.pups
            .iter()
            .flat_map(|p| p.milestones.keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Checks the structural invariants the metrics and alert engines rely on.
    ///
    /// When no group is tagged as baseline, the first group is used and a
    /// warning is logged.
    pub fn validate(&self) -> Result<(), DatasetError> {
        self.validate_groups()?;
        self.validate_references()
    }

    fn validate_groups(&self) -> Result<(), DatasetError> {
        if self.groups.is_empty() {
            return Err(DatasetError::NoGroups);
        }

        let mut seen = HashSet::new();
        for group in &self.groups {
            if !seen.insert(group.group_id.as_str()) {
                return Err(DatasetError::DuplicateGroup {
                    group_id: group.group_id.clone(),
                });
            }
        }

        let baselines = self
            .groups
            .iter()
            .enumerate()
            .filter(|(_, g)| g.role.is_baseline())
            .collect::<Vec<_>>();
        match baselines.as_slice() {
            [] => {
                tracing::warn!(
                    study_id = %self.study.study_id,
                    group_id = %self.groups[0].group_id,
                    "no group tagged as baseline; using the first group"
                );
            }
            [(0, _)] => {}
            [(index, group)] => {
                return Err(DatasetError::BaselineNotFirst {
                    group_id: group.group_id.clone(),
                    index: *index,
                });
            }
            [(_, first), (_, second), ..] => {
                return Err(DatasetError::MultipleBaselines {
                    first: first.group_id.clone(),
                    second: second.group_id.clone(),
                });
            }
        }
        Ok(())
    }

    fn validate_references(&self) -> Result<(), DatasetError> {
        let group_ids = self
            .groups
            .iter()
            .map(|g| g.group_id.as_str())
            .collect::<HashSet<_>>();
        let check_group = |entity: &'static str, entity_id: &str, group_id: &str| {
            if group_ids.contains(group_id) {
                Ok(())
            } else {
                Err(DatasetError::UnknownGroup {
                    entity,
                    entity_id: entity_id.to_owned(),
                    group_id: group_id.to_owned(),
                })
            }
        };

        for animal in &self.animals {
            check_group("animal", &animal.animal_id, &animal.group_id)?;
        }

        let dams = self
            .animals
            .iter()
            .map(|a| (a.animal_id.as_str(), a))
            .collect::<HashMap<_, _>>();
        for litter in &self.litters {
            check_group("litter", &litter.litter_id, &litter.group_id)?;
            let dam = dams
                .get(litter.dam_id.as_str())
                .ok_or_else(|| DatasetError::UnknownDam {
                    litter_id: litter.litter_id.clone(),
                    dam_id: litter.dam_id.clone(),
                })?;
            if !dam.can_have_litter() {
                return Err(DatasetError::IneligibleDam {
                    litter_id: litter.litter_id.clone(),
                    dam_id: litter.dam_id.clone(),
                });
            }
        }

        let litter_ids = self
            .litters
            .iter()
            .map(|l| l.litter_id.as_str())
            .collect::<HashSet<_>>();
        let check_litter = |entity: &'static str, entity_id: &str, litter_id: &str| {
            if litter_ids.contains(litter_id) {
                Ok(())
            } else {
                Err(DatasetError::UnknownLitter {
                    entity,
                    entity_id: entity_id.to_owned(),
                    litter_id: litter_id.to_owned(),
                })
            }
        };

        for fetus in &self.fetuses {
            check_group("fetus", &fetus.fetus_id, &fetus.group_id)?;
            check_litter("fetus", &fetus.fetus_id, &fetus.litter_id)?;
        }
        for pup in &self.pups {
            check_group("pup", &pup.pup_id, &pup.group_id)?;
            check_litter("pup", &pup.pup_id, &pup.litter_id)?;
        }
        Ok(())
    }
}
