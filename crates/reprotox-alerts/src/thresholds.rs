//! Alert sensitivity configuration.
//!
//! Thresholds only tune when a rule fires; they never change which rules
//! run. Every field has a default, so a configuration file only needs the
//! values it overrides:
//!
//! ```
//! use reprotox_alerts::AlertThresholds;
//!
//! let thresholds: AlertThresholds =
//!     serde_json::from_str(r#"{ "maternal": { "food_consumption_decrease_percent": 15.0 } }"#)
//!         .unwrap();
//! assert_eq!(thresholds.maternal.food_consumption_decrease_percent, 15.0);
//! assert_eq!(thresholds.maternal.body_weight_loss_percent, 10.0);
//! assert_eq!(thresholds.postnatal.milestone_delay_days, 1.0);
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    pub maternal: MaternalThresholds,
    pub developmental: DevelopmentalThresholds,
    pub postnatal: PostnatalThresholds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaternalThresholds {
    /// Individual or group body-weight loss (%).
    pub body_weight_loss_percent: f64,
    /// Decrease of group mean food consumption vs. control (%).
    pub food_consumption_decrease_percent: f64,
    /// Minimum number of dead dams.
    pub maternal_death_count: usize,
    /// Dams with at least one clinical observation (%).
    pub clinical_sign_incidence_percent: f64,
}

impl Default for MaternalThresholds {
    fn default() -> Self {
        Self {
            body_weight_loss_percent: 10.0,
            food_consumption_decrease_percent: 20.0,
            maternal_death_count: 1,
            clinical_sign_incidence_percent: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevelopmentalThresholds {
    /// Mean early resorptions per litter.
    pub early_resorption_mean: f64,
    /// Mean late resorptions per litter.
    pub late_resorption_mean: f64,
    /// Decrease of group mean fetal weight vs. control (%).
    pub fetal_weight_decrease_percent: f64,
    /// Litters with at least one malformed fetus (%).
    pub malformation_incidence_percent: f64,
    /// Litters with at least one variation (%). Reported, not evaluated.
    pub variation_incidence_percent: f64,
}

impl Default for DevelopmentalThresholds {
    fn default() -> Self {
        Self {
            early_resorption_mean: 1.5,
            late_resorption_mean: 0.5,
            fetal_weight_decrease_percent: 10.0,
            malformation_incidence_percent: 5.0,
            variation_incidence_percent: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostnatalThresholds {
    /// Pups dying between birth and PND 4 (%).
    pub perinatal_mortality_percent: f64,
    /// Decrease of group mean last-recorded pup weight vs. control (%).
    pub pup_weight_gain_decrease_percent: f64,
    /// Group mean minus control mean achievement day.
    pub milestone_delay_days: f64,
}

impl Default for PostnatalThresholds {
    fn default() -> Self {
        Self {
            perinatal_mortality_percent: 10.0,
            pup_weight_gain_decrease_percent: 10.0,
            milestone_delay_days: 1.0,
        }
    }
}
