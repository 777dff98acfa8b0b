//! Structural pattern classification.

pub mod classifier;
pub mod rules;
pub mod types;

pub use classifier::{classify_pattern, PatternClassifier};
pub use rules::{PatternContext, PatternRule};
pub use types::{
    FollowingKind, Integrity, NormalPattern, PatternBasis, PatternResult, RuleId, SpecialPattern,
};
