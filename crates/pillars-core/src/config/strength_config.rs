//! Strength classifier configuration.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Configuration for the strength classifier.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct StrengthConfig {
    /// Rootedness multiplier by position (year, month, day, hour).
    pub rootedness_weights: Option<[f64; 4]>,
    /// Added to the index when the month supports the reference. Default: 10.
    pub seasonal_bonus: Option<f64>,
    /// Added to the index when the day branch supports the reference. Default: 5.
    pub seat_bonus: Option<f64>,
    /// Supporting share of the month period required. Default: 0.5.
    pub seasonal_support_ratio: Option<f64>,
    pub extreme_strong_threshold: Option<f64>,
    pub strong_threshold: Option<f64>,
    pub neutral_floor: Option<f64>,
    pub extreme_weak_threshold: Option<f64>,
}

impl StrengthConfig {
    pub fn effective_rootedness_weights(&self) -> [f64; 4] {
        self.rootedness_weights
            .unwrap_or(DEFAULT_ROOTEDNESS_WEIGHTS)
    }

    pub fn effective_seasonal_bonus(&self) -> f64 {
        self.seasonal_bonus.unwrap_or(DEFAULT_SEASONAL_BONUS)
    }

    pub fn effective_seat_bonus(&self) -> f64 {
        self.seat_bonus.unwrap_or(DEFAULT_SEAT_BONUS)
    }

    pub fn effective_seasonal_support_ratio(&self) -> f64 {
        self.seasonal_support_ratio
            .unwrap_or(DEFAULT_SEASONAL_SUPPORT_RATIO)
    }

    pub fn effective_extreme_strong_threshold(&self) -> f64 {
        self.extreme_strong_threshold
            .unwrap_or(DEFAULT_EXTREME_STRONG_THRESHOLD)
    }

    pub fn effective_strong_threshold(&self) -> f64 {
        self.strong_threshold.unwrap_or(DEFAULT_STRONG_THRESHOLD)
    }

    pub fn effective_neutral_floor(&self) -> f64 {
        self.neutral_floor.unwrap_or(DEFAULT_NEUTRAL_FLOOR)
    }

    pub fn effective_extreme_weak_threshold(&self) -> f64 {
        self.extreme_weak_threshold
            .unwrap_or(DEFAULT_EXTREME_WEAK_THRESHOLD)
    }
}
