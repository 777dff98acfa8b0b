//! Reference-stem strength classification.

pub mod classifier;
pub mod types;

pub use classifier::{classify_strength, StrengthClassifier};
pub use types::{StrengthLevel, StrengthResult};
