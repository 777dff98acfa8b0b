//! Analysis engine for Four Pillars charts.
//!
//! Raw pillars flow through the interaction detector into the force
//! aggregator and then the strength classifier. The pattern classifier reads
//! the raw pillars independently. Every stage is a pure function of its
//! inputs and the [`EngineWeights`] in effect.

pub mod force;
pub mod interactions;
pub mod pattern;
pub mod pipeline;
pub mod scores;
pub mod strength;
pub mod weights;

pub use force::{compute_force_matrix, ForceMatrix, ForceSummary};
pub use interactions::{detect_interactions, InteractionRecord, InteractionSet};
pub use pattern::{classify_pattern, PatternResult};
pub use pipeline::{analyze_batch, analyze_chart, AnalysisOptions, ChartAnalysis};
pub use scores::ElementScores;
pub use strength::{classify_strength, StrengthLevel, StrengthResult};
pub use weights::EngineWeights;
