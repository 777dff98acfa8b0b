//! Top-level engine configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{PatternConfig, StrengthConfig, WeightsConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`PILLARS_*`)
/// 3. Project config (`pillars.toml` in project root)
/// 4. User config (`~/.pillars/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PillarsConfig {
    pub weights: WeightsConfig,
    pub strength: StrengthConfig,
    pub pattern: PatternConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub commanding_bonus: Option<f64>,
    pub open_vault_ratio: Option<f64>,
    pub strong_threshold: Option<f64>,
    pub rootless_threshold: Option<f64>,
}

impl PillarsConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("pillars.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the effective values, so partially specified sections are
    /// checked against the defaults they will be combined with.
    pub fn validate(config: &PillarsConfig) -> Result<(), ConfigError> {
        let w = &config.weights;
        if w.effective_base_unit() <= 0.0 {
            return Err(invalid("weights.base_unit", "must be greater than 0"));
        }
        if w.effective_stem_weights().iter().any(|v| *v < 0.0) {
            return Err(invalid("weights.stem_weights", "must be non-negative"));
        }
        if w.effective_branch_weights().iter().any(|v| *v < 0.0) {
            return Err(invalid("weights.branch_weights", "must be non-negative"));
        }
        if w.effective_commanding_bonus() < 1.0 {
            return Err(invalid("weights.commanding_bonus", "must be at least 1.0"));
        }
        for (field, ratio) in [
            ("weights.full_combination_ratio", w.effective_full_combination_ratio()),
            ("weights.partial_with_peak_ratio", w.effective_partial_with_peak_ratio()),
            (
                "weights.partial_without_peak_ratio",
                w.effective_partial_without_peak_ratio(),
            ),
        ] {
            if ratio < 1.0 {
                return Err(invalid(field, "must be at least 1.0"));
            }
        }
        for (field, fraction) in [
            ("weights.paired_fraction", w.effective_paired_fraction()),
            ("weights.transform_fraction", w.effective_transform_fraction()),
            ("weights.tied_retention", w.effective_tied_retention()),
            ("weights.peak_clash_retention", w.effective_peak_clash_retention()),
            ("weights.growth_clash_retention", w.effective_growth_clash_retention()),
            ("weights.vault_clash_retention", w.effective_vault_clash_retention()),
            ("weights.open_vault_ratio", w.effective_open_vault_ratio()),
            (
                "strength.seasonal_support_ratio",
                config.strength.effective_seasonal_support_ratio(),
            ),
        ] {
            if !(0.0..=1.0).contains(&fraction) {
                return Err(invalid(field, "must be between 0.0 and 1.0"));
            }
        }

        let s = &config.strength;
        if s.effective_rootedness_weights().iter().any(|v| *v < 1.0) {
            return Err(invalid("strength.rootedness_weights", "must be at least 1.0"));
        }
        let thresholds = [
            s.effective_extreme_strong_threshold(),
            s.effective_strong_threshold(),
            s.effective_neutral_floor(),
            s.effective_extreme_weak_threshold(),
        ];
        if thresholds.windows(2).any(|pair| pair[0] <= pair[1]) {
            return Err(invalid(
                "strength",
                "thresholds must satisfy extreme_strong > strong > neutral_floor > extreme_weak",
            ));
        }

        let p = &config.pattern;
        let days = p.effective_strong_dominant_days();
        if days == 0 || days > crate::constants::BRANCH_PERIOD_DAYS {
            return Err(invalid("pattern.strong_dominant_days", "must be between 1 and 30"));
        }
        if p.effective_rootless_threshold() < 0.0 {
            return Err(invalid("pattern.rootless_threshold", "must be non-negative"));
        }
        if p.effective_following_stem_score() <= 0.0 {
            return Err(invalid("pattern.following_stem_score", "must be greater than 0"));
        }
        if p.effective_following_dominance_ratio() < 1.0 {
            return Err(invalid(
                "pattern.following_dominance_ratio",
                "must be at least 1.0",
            ));
        }
        Ok(())
    }

    /// Returns the user config path: `~/.pillars/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut PillarsConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: PillarsConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    pub fn merge(base: &mut PillarsConfig, other: &PillarsConfig) {
        let (b, o) = (&mut base.weights, &other.weights);
        b.base_unit = o.base_unit.or(b.base_unit);
        b.stem_weights = o.stem_weights.or(b.stem_weights);
        b.branch_weights = o.branch_weights.or(b.branch_weights);
        b.commanding_bonus = o.commanding_bonus.or(b.commanding_bonus);
        b.full_combination_ratio = o.full_combination_ratio.or(b.full_combination_ratio);
        b.partial_with_peak_ratio = o.partial_with_peak_ratio.or(b.partial_with_peak_ratio);
        b.partial_without_peak_ratio = o
            .partial_without_peak_ratio
            .or(b.partial_without_peak_ratio);
        b.paired_fraction = o.paired_fraction.or(b.paired_fraction);
        b.transform_fraction = o.transform_fraction.or(b.transform_fraction);
        b.tied_retention = o.tied_retention.or(b.tied_retention);
        b.peak_clash_retention = o.peak_clash_retention.or(b.peak_clash_retention);
        b.growth_clash_retention = o.growth_clash_retention.or(b.growth_clash_retention);
        b.vault_clash_retention = o.vault_clash_retention.or(b.vault_clash_retention);
        b.open_vault_ratio = o.open_vault_ratio.or(b.open_vault_ratio);

        let (b, o) = (&mut base.strength, &other.strength);
        b.rootedness_weights = o.rootedness_weights.or(b.rootedness_weights);
        b.seasonal_bonus = o.seasonal_bonus.or(b.seasonal_bonus);
        b.seat_bonus = o.seat_bonus.or(b.seat_bonus);
        b.seasonal_support_ratio = o.seasonal_support_ratio.or(b.seasonal_support_ratio);
        b.extreme_strong_threshold = o.extreme_strong_threshold.or(b.extreme_strong_threshold);
        b.strong_threshold = o.strong_threshold.or(b.strong_threshold);
        b.neutral_floor = o.neutral_floor.or(b.neutral_floor);
        b.extreme_weak_threshold = o.extreme_weak_threshold.or(b.extreme_weak_threshold);

        let (b, o) = (&mut base.pattern, &other.pattern);
        b.strong_dominant_days = o.strong_dominant_days.or(b.strong_dominant_days);
        b.rootless_threshold = o.rootless_threshold.or(b.rootless_threshold);
        b.following_stem_score = o.following_stem_score.or(b.following_stem_score);
        b.following_dominance_ratio = o
            .following_dominance_ratio
            .or(b.following_dominance_ratio);
    }

    /// Apply environment variable overrides.
    /// Pattern: `PILLARS_WEIGHTS_BASE_UNIT`, `PILLARS_STRENGTH_STRONG_THRESHOLD`, etc.
    /// Unparsable values are ignored.
    fn apply_env_overrides(config: &mut PillarsConfig) {
        let w = &mut config.weights;
        env_f64("PILLARS_WEIGHTS_BASE_UNIT", &mut w.base_unit);
        env_f64("PILLARS_WEIGHTS_COMMANDING_BONUS", &mut w.commanding_bonus);
        env_f64("PILLARS_WEIGHTS_OPEN_VAULT_RATIO", &mut w.open_vault_ratio);
        env_f64("PILLARS_WEIGHTS_TIED_RETENTION", &mut w.tied_retention);

        let s = &mut config.strength;
        env_f64(
            "PILLARS_STRENGTH_EXTREME_STRONG_THRESHOLD",
            &mut s.extreme_strong_threshold,
        );
        env_f64("PILLARS_STRENGTH_STRONG_THRESHOLD", &mut s.strong_threshold);
        env_f64("PILLARS_STRENGTH_NEUTRAL_FLOOR", &mut s.neutral_floor);
        env_f64(
            "PILLARS_STRENGTH_EXTREME_WEAK_THRESHOLD",
            &mut s.extreme_weak_threshold,
        );

        let p = &mut config.pattern;
        if let Ok(val) = std::env::var("PILLARS_PATTERN_STRONG_DOMINANT_DAYS") {
            if let Ok(v) = val.parse::<u8>() {
                p.strong_dominant_days = Some(v);
            }
        }
        env_f64("PILLARS_PATTERN_ROOTLESS_THRESHOLD", &mut p.rootless_threshold);
        env_f64(
            "PILLARS_PATTERN_FOLLOWING_DOMINANCE_RATIO",
            &mut p.following_dominance_ratio,
        );
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut PillarsConfig, cli: &CliOverrides) {
        if let Some(v) = cli.commanding_bonus {
            config.weights.commanding_bonus = Some(v);
        }
        if let Some(v) = cli.open_vault_ratio {
            config.weights.open_vault_ratio = Some(v);
        }
        if let Some(v) = cli.strong_threshold {
            config.strength.strong_threshold = Some(v);
        }
        if let Some(v) = cli.rootless_threshold {
            config.pattern.rootless_threshold = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn env_f64(key: &str, slot: &mut Option<f64>) {
    if let Ok(val) = std::env::var(key) {
        if let Ok(v) = val.parse::<f64>() {
            *slot = Some(v);
        }
    }
}

/// Returns the user-level config directory: `~/.pillars/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".pillars"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
