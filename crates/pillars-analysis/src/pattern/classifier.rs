//! Ordered rule evaluation for pattern classification.
//!
//! Rules run in priority order (dominance, transformation, following,
//! normal) and the first match wins. A panicking rule is contained and
//! reported as an undeterminable result instead of unwinding into the
//! caller.

use std::panic::{catch_unwind, AssertUnwindSafe};

use pillars_core::{AnalysisError, Chart, ChartInput, PillarsErrorCode};
use tracing::{debug, debug_span, warn};

use super::rules::{
    DominanceRule, FollowingRule, NormalRule, PatternContext, PatternRule, TransformationRule,
};
use super::types::PatternResult;
use crate::weights::{EngineWeights, PatternWeights};

pub struct PatternClassifier {
    rules: Vec<Box<dyn PatternRule>>,
    weights: PatternWeights,
}

impl PatternClassifier {
    pub fn new() -> Self {
        Self::with_weights(&EngineWeights::default())
    }

    pub fn with_weights(weights: &EngineWeights) -> Self {
        Self::with_rules(
            vec![
                Box::new(DominanceRule),
                Box::new(TransformationRule),
                Box::new(FollowingRule),
                Box::new(NormalRule),
            ],
            weights,
        )
    }

    /// Classifier with a custom rule list, evaluated in the given order.
    pub fn with_rules(rules: Vec<Box<dyn PatternRule>>, weights: &EngineWeights) -> Self {
        Self {
            rules,
            weights: weights.pattern.clone(),
        }
    }

    pub fn rules(&self) -> &[Box<dyn PatternRule>] {
        &self.rules
    }

    pub fn classify(&self, chart: &Chart, is_hour_unknown: bool) -> PatternResult {
        let _span = debug_span!("pattern", chart = %chart, is_hour_unknown).entered();
        let ctx = PatternContext::new(chart, is_hour_unknown, &self.weights);

        for rule in &self.rules {
            let outcome = catch_unwind(AssertUnwindSafe(|| rule.evaluate(&ctx)));
            match outcome {
                Ok(Some(result)) => {
                    debug!(rule = %rule.id(), pattern = %result.display_name(), "pattern rule matched");
                    return result;
                }
                Ok(None) => debug!(rule = %rule.id(), "pattern rule not applicable"),
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    warn!(rule = %rule.id(), message = %message, "pattern rule panicked");
                    let err = AnalysisError::RulePanic {
                        id: rule.id().to_string(),
                        message,
                    };
                    return PatternResult::undeterminable(err.coded_string());
                }
            }
        }

        PatternResult::undeterminable("no pattern rule matched")
    }

    /// Parse raw input and classify. Shape errors come back as an
    /// undeterminable result carrying the coded error.
    pub fn classify_input(&self, input: &ChartInput, is_hour_unknown: bool) -> PatternResult {
        match input.to_chart() {
            Ok(chart) => self.classify(&chart, is_hour_unknown),
            Err(e) => PatternResult::undeterminable(e.coded_string()),
        }
    }
}

impl Default for PatternClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Classify with the default weights and rule order.
pub fn classify_pattern(chart: &Chart, is_hour_unknown: bool) -> PatternResult {
    PatternClassifier::new().classify(chart, is_hour_unknown)
}
