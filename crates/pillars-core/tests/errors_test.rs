//! Tests for error codes and coded rendering.

use pillars_core::errors::error_code;
use pillars_core::{AnalysisError, ChartError, ConfigError, PillarsErrorCode};

#[test]
fn test_chart_error_codes() {
    let e = ChartError::UnknownStem {
        input: "x".to_string(),
    };
    assert_eq!(e.error_code(), error_code::CHART_ERROR);
    let e = ChartError::MissingPillar {
        position: "day".to_string(),
    };
    assert_eq!(e.error_code(), error_code::MISSING_PILLAR);
    assert_eq!(e.coded_string(), "[MISSING_PILLAR] Missing day pillar");
}

#[test]
fn test_analysis_error_delegates_codes() {
    let e: AnalysisError = ConfigError::ValidationFailed {
        field: "strength".to_string(),
        message: "bad".to_string(),
    }
    .into();
    assert_eq!(e.error_code(), error_code::CONFIG_ERROR);

    let e = AnalysisError::RulePanic {
        id: "following".to_string(),
        message: "boom".to_string(),
    };
    assert_eq!(e.error_code(), error_code::RULE_PANIC);
    assert!(e.coded_string().starts_with("[RULE_PANIC]"));
}
