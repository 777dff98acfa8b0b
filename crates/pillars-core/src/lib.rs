//! Core types, static tables, errors, config, and tracing for the Four Pillars engine.
//!
//! Everything here is read-only shared data or pure functions over it. The
//! analysis crate builds the interaction detector, force aggregator, and
//! classifiers on top of these types.

pub mod chart;
pub mod config;
pub mod constants;
pub mod errors;
pub mod relations;
pub mod symbols;
pub mod tracing;

pub use chart::{Chart, ChartInput, Pillar, PillarInput, Position};
pub use config::PillarsConfig;
pub use errors::{AnalysisError, ChartError, ConfigError, PillarsErrorCode};
pub use relations::{TenGod, TenGodFamily};
pub use symbols::{
    Branch, Element, HiddenRank, HiddenStemEntry, Polarity, Stem, Symbol, Terrain, TwelveStage,
};
