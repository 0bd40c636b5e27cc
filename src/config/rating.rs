//! Rating system configuration

use crate::rating::PairwiseEloConfig;
use serde::{Deserialize, Serialize};

/// Rating engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingSettings {
    /// Base K-factor, divided by (participants - 1) per match
    pub base_k: f64,
    /// Rating assigned on first appearance
    pub initial_rating: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            base_k: 32.0,
            initial_rating: 1000.0,
        }
    }
}

impl From<RatingSettings> for PairwiseEloConfig {
    fn from(settings: RatingSettings) -> Self {
        Self {
            base_k: settings.base_k,
            initial_rating: settings.initial_rating,
        }
    }
}
