use serde::{Deserialize, Serialize};

/// Uterine and litter counts for one pregnant, surviving dam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Litter {
    pub litter_id: String,
    pub dam_id: String,
    pub group_id: String,
    pub corpora_lutea: u32,
    pub implantations: u32,
    pub early_resorptions: u32,
    pub late_resorptions: u32,
    pub live_fetuses: u32,
    pub dead_fetuses: u32,
    /// Mean weight of live fetuses in grams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean_fetal_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravid_uterine_weight: Option<f64>,
    /// Pups delivered (postnatal studies).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pups_born: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pups_alive_pnd4: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pups_alive_pnd21: Option<u32>,
}

impl Litter {
    /// Live plus dead fetuses.
    #[must_use]
    pub fn litter_size(&self) -> u32 {
        self.live_fetuses.saturating_add(self.dead_fetuses)
    }

    /// Early plus late resorptions.
    #[must_use]
    pub fn total_resorptions(&self) -> u32 {
        self.early_resorptions.saturating_add(self.late_resorptions)
    }

    /// `(corpora_lutea - implantations) / corpora_lutea * 100`.
    ///
    /// Zero when there are no corpora lutea.
    #[must_use]
    pub fn pre_implantation_loss_percent(&self) -> f64 {
        loss_percent(self.corpora_lutea, self.implantations)
    }

    /// `(implantations - live_fetuses) / implantations * 100`.
    ///
    /// Zero when there are no implantations.
    #[must_use]
    pub fn post_implantation_loss_percent(&self) -> f64 {
        loss_percent(self.implantations, self.live_fetuses)
    }
}

fn loss_percent(denominator: u32, remaining: u32) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    (f64::from(denominator) - f64::from(remaining)) / f64::from(denominator) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn litter(corpora_lutea: u32, implantations: u32, live_fetuses: u32) -> Litter {
        Litter {
            litter_id: "L1".to_owned(),
            dam_id: "A1".to_owned(),
            group_id: "G1".to_owned(),
            corpora_lutea,
            implantations,
            early_resorptions: 1,
            late_resorptions: 0,
            live_fetuses,
            dead_fetuses: 1,
            mean_fetal_weight: None,
            gravid_uterine_weight: None,
            pups_born: None,
            pups_alive_pnd4: None,
            pups_alive_pnd21: None,
        }
    }

    #[test]
    fn test_loss_percentages() {
        let l = litter(16, 12, 9);
        assert_eq!(l.pre_implantation_loss_percent(), 25.0);
        assert_eq!(l.post_implantation_loss_percent(), 25.0);
        assert_eq!(l.litter_size(), 10);
        assert_eq!(l.total_resorptions(), 1);
    }

    #[test]
    fn test_counts_saturate_instead_of_overflowing() {
        let l = Litter {
            early_resorptions: u32::MAX,
            late_resorptions: 1,
            live_fetuses: u32::MAX,
            ..litter(16, 12, 9)
        };
        assert_eq!(l.litter_size(), u32::MAX);
        assert_eq!(l.total_resorptions(), u32::MAX);
    }

    #[test]
    fn test_zero_denominators_give_zero_loss() {
        let l = litter(0, 0, 0);
        let pre = l.pre_implantation_loss_percent();
        let post = l.post_implantation_loss_percent();
        assert_eq!(pre, 0.0);
        assert_eq!(post, 0.0);
        assert!(pre.is_finite() && post.is_finite());
    }
}
