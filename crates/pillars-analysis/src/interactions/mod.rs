//! Branch and stem interactions: clashes, combinations, punishments.

pub mod clash;
pub mod combination;
pub mod detector;
pub mod punishment;
pub mod report;
pub mod stem_combination;
pub mod tables;
pub mod types;

pub use detector::{detect_interactions, InteractionDetector};
pub use report::InteractionSet;
pub use types::{
    InteractionKind, InteractionRecord, InteractionType, ScoreEffect, Tier, VaultOpening,
};
