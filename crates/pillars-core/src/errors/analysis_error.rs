//! Analysis errors.

use super::error_code::{self, PillarsErrorCode};
use super::{ChartError, ConfigError};

/// Errors surfaced by the analysis pipeline.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rule {id} panicked: {message}")]
    RulePanic { id: String, message: String },

    #[error("Reference stem mismatch: chart has {chart}, force matrix has {matrix}")]
    ReferenceMismatch { chart: String, matrix: String },
}

impl PillarsErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Chart(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::RulePanic { .. } => error_code::RULE_PANIC,
            Self::ReferenceMismatch { .. } => error_code::ANALYSIS_ERROR,
        }
    }
}
