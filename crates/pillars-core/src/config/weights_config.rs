//! Force aggregation weights.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Overrides for the force aggregator. Every field falls back to the
/// matching `DEFAULT_*` constant.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct WeightsConfig {
    /// Score of one fully weighted symbol. Default: 10.
    pub base_unit: Option<f64>,
    /// Stem weights by position (year, month, day, hour).
    pub stem_weights: Option<[f64; 4]>,
    /// Branch weights by position (year, month, day, hour).
    pub branch_weights: Option<[f64; 4]>,
    /// Default: 1.5.
    pub commanding_bonus: Option<f64>,
    pub full_combination_ratio: Option<f64>,
    pub partial_with_peak_ratio: Option<f64>,
    pub partial_without_peak_ratio: Option<f64>,
    pub paired_fraction: Option<f64>,
    pub transform_fraction: Option<f64>,
    pub tied_retention: Option<f64>,
    pub peak_clash_retention: Option<f64>,
    pub growth_clash_retention: Option<f64>,
    pub vault_clash_retention: Option<f64>,
    /// Default: 0.1.
    pub open_vault_ratio: Option<f64>,
}

impl WeightsConfig {
    pub fn effective_base_unit(&self) -> f64 {
        self.base_unit.unwrap_or(DEFAULT_BASE_UNIT)
    }

    pub fn effective_stem_weights(&self) -> [f64; 4] {
        self.stem_weights.unwrap_or(DEFAULT_STEM_WEIGHTS)
    }

    pub fn effective_branch_weights(&self) -> [f64; 4] {
        self.branch_weights.unwrap_or(DEFAULT_BRANCH_WEIGHTS)
    }

    pub fn effective_commanding_bonus(&self) -> f64 {
        self.commanding_bonus.unwrap_or(DEFAULT_COMMANDING_BONUS)
    }

    pub fn effective_full_combination_ratio(&self) -> f64 {
        self.full_combination_ratio
            .unwrap_or(DEFAULT_FULL_COMBINATION_RATIO)
    }

    pub fn effective_partial_with_peak_ratio(&self) -> f64 {
        self.partial_with_peak_ratio
            .unwrap_or(DEFAULT_PARTIAL_WITH_PEAK_RATIO)
    }

    pub fn effective_partial_without_peak_ratio(&self) -> f64 {
        self.partial_without_peak_ratio
            .unwrap_or(DEFAULT_PARTIAL_WITHOUT_PEAK_RATIO)
    }

    pub fn effective_paired_fraction(&self) -> f64 {
        self.paired_fraction.unwrap_or(DEFAULT_PAIRED_FRACTION)
    }

    pub fn effective_transform_fraction(&self) -> f64 {
        self.transform_fraction.unwrap_or(DEFAULT_TRANSFORM_FRACTION)
    }

    pub fn effective_tied_retention(&self) -> f64 {
        self.tied_retention.unwrap_or(DEFAULT_TIED_RETENTION)
    }

    pub fn effective_peak_clash_retention(&self) -> f64 {
        self.peak_clash_retention
            .unwrap_or(DEFAULT_PEAK_CLASH_RETENTION)
    }

    pub fn effective_growth_clash_retention(&self) -> f64 {
        self.growth_clash_retention
            .unwrap_or(DEFAULT_GROWTH_CLASH_RETENTION)
    }

    pub fn effective_vault_clash_retention(&self) -> f64 {
        self.vault_clash_retention
            .unwrap_or(DEFAULT_VAULT_CLASH_RETENTION)
    }

    pub fn effective_open_vault_ratio(&self) -> f64 {
        self.open_vault_ratio.unwrap_or(DEFAULT_OPEN_VAULT_RATIO)
    }
}
