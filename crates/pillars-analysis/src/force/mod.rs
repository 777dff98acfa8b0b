//! Elemental force aggregation.

pub mod aggregator;
pub mod report;
pub mod types;

pub use aggregator::{compute_force_matrix, ForceAggregator};
pub use report::ForceSummary;
pub use types::{AppliedInteraction, ForceMatrix, HiddenScore, SymbolScore};
