//! Chart input errors.

use super::error_code::{self, PillarsErrorCode};

/// Errors raised while turning raw pillar strings into a [`crate::Chart`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    #[error("Unknown stem: {input:?}")]
    UnknownStem { input: String },

    #[error("Unknown branch: {input:?}")]
    UnknownBranch { input: String },

    #[error("Malformed pillar: {input:?}")]
    MalformedPillar { input: String },

    #[error("Missing {position} pillar")]
    MissingPillar { position: String },

    #[error("Invalid {position} pillar: {source}")]
    InvalidPillar {
        position: String,
        source: Box<ChartError>,
    },
}

impl PillarsErrorCode for ChartError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingPillar { .. } => error_code::MISSING_PILLAR,
            _ => error_code::CHART_ERROR,
        }
    }
}
