//! Tuning constants for every analysis stage.
//!
//! `EngineWeights::default()` reproduces the compiled defaults in
//! `pillars_core::constants`; `from_config` resolves a layered
//! [`PillarsConfig`] into the same shape.

use pillars_core::chart::Position;
use pillars_core::config::PillarsConfig;
use pillars_core::Terrain;
use serde::{Deserialize, Serialize};

use crate::interactions::Tier;

/// Force aggregator weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceWeights {
    pub base_unit: f64,
    pub stem_weights: [f64; 4],
    pub branch_weights: [f64; 4],
    pub commanding_bonus: f64,
    pub full_combination_ratio: f64,
    pub partial_with_peak_ratio: f64,
    pub partial_without_peak_ratio: f64,
    pub paired_fraction: f64,
    pub transform_fraction: f64,
    pub tied_retention: f64,
    pub peak_clash_retention: f64,
    pub growth_clash_retention: f64,
    pub vault_clash_retention: f64,
    pub open_vault_ratio: f64,
}

impl ForceWeights {
    pub fn stem_weight(&self, position: Position) -> f64 {
        self.stem_weights[position.index()]
    }

    pub fn branch_weight(&self, position: Position) -> f64 {
        self.branch_weights[position.index()]
    }

    /// Share of a clashing element that survives a clash on this terrain.
    pub fn clash_retention(&self, terrain: Terrain) -> f64 {
        match terrain {
            Terrain::Peak => self.peak_clash_retention,
            Terrain::Growth => self.growth_clash_retention,
            Terrain::Vault => self.vault_clash_retention,
        }
    }

    /// Multiplier for a trine or directional combination of the given tier.
    pub fn tier_ratio(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Full => self.full_combination_ratio,
            Tier::PartialWithPeak => self.partial_with_peak_ratio,
            Tier::PartialWithoutPeak => self.partial_without_peak_ratio,
            Tier::Pair => 1.0,
        }
    }
}

/// Strength classifier weights and level thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthWeights {
    pub rootedness_weights: [f64; 4],
    pub seasonal_bonus: f64,
    pub seat_bonus: f64,
    pub seasonal_support_ratio: f64,
    pub extreme_strong_threshold: f64,
    pub strong_threshold: f64,
    pub neutral_floor: f64,
    pub extreme_weak_threshold: f64,
}

impl StrengthWeights {
    pub fn rootedness(&self, position: Position) -> f64 {
        self.rootedness_weights[position.index()]
    }
}

/// Pattern classifier thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternWeights {
    pub strong_dominant_days: u8,
    pub rootless_threshold: f64,
    pub following_stem_score: f64,
    pub following_dominance_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineWeights {
    pub force: ForceWeights,
    pub strength: StrengthWeights,
    pub pattern: PatternWeights,
}

impl EngineWeights {
    /// Materialize the effective values of a resolved config.
    pub fn from_config(config: &PillarsConfig) -> Self {
        let w = &config.weights;
        let s = &config.strength;
        let p = &config.pattern;
        Self {
            force: ForceWeights {
                base_unit: w.effective_base_unit(),
                stem_weights: w.effective_stem_weights(),
                branch_weights: w.effective_branch_weights(),
                commanding_bonus: w.effective_commanding_bonus(),
                full_combination_ratio: w.effective_full_combination_ratio(),
                partial_with_peak_ratio: w.effective_partial_with_peak_ratio(),
                partial_without_peak_ratio: w.effective_partial_without_peak_ratio(),
                paired_fraction: w.effective_paired_fraction(),
                transform_fraction: w.effective_transform_fraction(),
                tied_retention: w.effective_tied_retention(),
                peak_clash_retention: w.effective_peak_clash_retention(),
                growth_clash_retention: w.effective_growth_clash_retention(),
                vault_clash_retention: w.effective_vault_clash_retention(),
                open_vault_ratio: w.effective_open_vault_ratio(),
            },
            strength: StrengthWeights {
                rootedness_weights: s.effective_rootedness_weights(),
                seasonal_bonus: s.effective_seasonal_bonus(),
                seat_bonus: s.effective_seat_bonus(),
                seasonal_support_ratio: s.effective_seasonal_support_ratio(),
                extreme_strong_threshold: s.effective_extreme_strong_threshold(),
                strong_threshold: s.effective_strong_threshold(),
                neutral_floor: s.effective_neutral_floor(),
                extreme_weak_threshold: s.effective_extreme_weak_threshold(),
            },
            pattern: PatternWeights {
                strong_dominant_days: p.effective_strong_dominant_days(),
                rootless_threshold: p.effective_rootless_threshold(),
                following_stem_score: p.effective_following_stem_score(),
                following_dominance_ratio: p.effective_following_dominance_ratio(),
            },
        }
    }
}

impl Default for EngineWeights {
    fn default() -> Self {
        Self::from_config(&PillarsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pillars_core::constants;

    #[test]
    fn defaults_match_constants() {
        let w = EngineWeights::default();
        assert_eq!(w.force.base_unit, constants::DEFAULT_BASE_UNIT);
        assert_eq!(w.force.branch_weight(Position::Month), 3.0);
        assert_eq!(w.strength.rootedness(Position::Day), 1.3);
        assert_eq!(w.pattern.strong_dominant_days, 16);
        assert!(w.force.clash_retention(Terrain::Peak) < w.force.clash_retention(Terrain::Vault));
    }

    #[test]
    fn config_overrides_flow_through() {
        let config = PillarsConfig::from_toml("[weights]\nopen_vault_ratio = 0.25\n").unwrap();
        let w = EngineWeights::from_config(&config);
        assert_eq!(w.force.open_vault_ratio, 0.25);
        assert_eq!(w.force.commanding_bonus, constants::DEFAULT_COMMANDING_BONUS);
    }
}
