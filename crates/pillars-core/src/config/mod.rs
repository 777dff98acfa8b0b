//! Configuration system for the Four Pillars engine.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod pattern_config;
pub mod pillars_config;
pub mod strength_config;
pub mod weights_config;

pub use pattern_config::PatternConfig;
pub use pillars_config::{CliOverrides, PillarsConfig};
pub use strength_config::StrengthConfig;
pub use weights_config::WeightsConfig;
