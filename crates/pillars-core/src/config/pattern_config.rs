//! Pattern classifier configuration.

use serde::{Deserialize, Serialize};

use crate::constants::*;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PatternConfig {
    /// Command days at which a dominant hidden stem counts as strong. Default: 16.
    pub strong_dominant_days: Option<u8>,
    /// Root strength below which a following pattern may form. Default: 10.
    pub rootless_threshold: Option<f64>,
    /// Following score per visible stem. Default: 50.
    pub following_stem_score: Option<f64>,
    /// Lead required over the runner-up family. Default: 1.5.
    pub following_dominance_ratio: Option<f64>,
}

impl PatternConfig {
    pub fn effective_strong_dominant_days(&self) -> u8 {
        self.strong_dominant_days
            .unwrap_or(DEFAULT_STRONG_DOMINANT_DAYS)
    }

    pub fn effective_rootless_threshold(&self) -> f64 {
        self.rootless_threshold.unwrap_or(DEFAULT_ROOTLESS_THRESHOLD)
    }

    pub fn effective_following_stem_score(&self) -> f64 {
        self.following_stem_score
            .unwrap_or(DEFAULT_FOLLOWING_STEM_SCORE)
    }

    pub fn effective_following_dominance_ratio(&self) -> f64 {
        self.following_dominance_ratio
            .unwrap_or(DEFAULT_FOLLOWING_DOMINANCE_RATIO)
    }
}
