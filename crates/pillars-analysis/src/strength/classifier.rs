//! Reference-stem strength classifier.

use pillars_core::chart::Position;
use pillars_core::constants::{BRANCH_PERIOD_DAYS, ROOTLESS_MULTIPLIER};
use pillars_core::relations::twelve_stage;
use pillars_core::{AnalysisError, Chart, ChartInput, Element, PillarsErrorCode};
use tracing::{debug, warn};

use super::types::{StrengthLevel, StrengthResult};
use crate::force::{ForceAggregator, ForceMatrix};
use crate::weights::{EngineWeights, StrengthWeights};

pub struct StrengthClassifier {
    weights: StrengthWeights,
}

impl StrengthClassifier {
    pub fn new() -> Self {
        Self::with_weights(&EngineWeights::default())
    }

    pub fn with_weights(weights: &EngineWeights) -> Self {
        Self {
            weights: weights.strength.clone(),
        }
    }

    pub fn classify(&self, chart: &Chart, matrix: &ForceMatrix) -> StrengthResult {
        let w = &self.weights;
        let reference = chart.reference_stem();
        let e = reference.element();
        let mut notes = Vec::new();

        if matrix.reference_stem != reference {
            warn!(
                chart = %reference,
                matrix = %matrix.reference_stem,
                "force matrix was built for a different reference stem"
            );
            let err = AnalysisError::ReferenceMismatch {
                chart: reference.to_string(),
                matrix: matrix.reference_stem.to_string(),
            };
            notes.push(err.coded_string());
        }

        // Seasonal support: month days drawn from E or the element generating E.
        let supporting_days: u32 = chart
            .month
            .branch
            .hidden_stems()
            .iter()
            .filter(|entry| entry.stem.element().supports(e))
            .map(|entry| u32::from(entry.command_days))
            .sum();
        let seasonal_ratio = f64::from(supporting_days) / f64::from(BRANCH_PERIOD_DAYS);
        let seasonal_support = seasonal_ratio >= w.seasonal_support_ratio;
        notes.push(format!(
            "month {} supplies {supporting_days}/{BRANCH_PERIOD_DAYS} supporting days",
            chart.month.branch
        ));

        // Seat support: day branch element supports E, or a strong stage.
        let day_branch = chart.day.branch;
        let stage = twelve_stage(reference, day_branch);
        let seat_support = day_branch.element().supports(e) || stage.is_strong();
        notes.push(format!("day seat {day_branch} at stage {stage}"));

        let s = &matrix.scores;
        let ally_score = s[e] + s[e.generated_by()];
        let opposition_score = s[e.generates()] + s[e.dominates()] + s[e.dominated_by()];
        let net_ally_score = ally_score - opposition_score;

        let (rootedness, root_position) = rootedness(chart, e, w);
        match root_position {
            Some(p) => notes.push(format!("rooted in {p} branch")),
            None => notes.push("no root among present branches".to_string()),
        }

        let mut index = ally_score * rootedness - opposition_score;
        if seasonal_support {
            index += w.seasonal_bonus;
        }
        if seat_support {
            index += w.seat_bonus;
        }

        let level = self.level_for(index);
        debug!(index, level = %level, "strength classified");

        StrengthResult {
            level,
            index,
            seasonal_support,
            seat_support,
            net_ally_score,
            rootedness,
            root_position,
            ally_score,
            opposition_score,
            seasonal_ratio,
            notes,
            error: None,
        }
    }

    /// Map an index onto the five levels.
    pub fn level_for(&self, index: f64) -> StrengthLevel {
        let w = &self.weights;
        if index >= w.extreme_strong_threshold {
            StrengthLevel::ExtremeStrong
        } else if index > w.strong_threshold {
            StrengthLevel::Strong
        } else if index >= w.neutral_floor {
            StrengthLevel::Neutral
        } else if index > w.extreme_weak_threshold {
            StrengthLevel::Weak
        } else {
            StrengthLevel::ExtremeWeak
        }
    }

    /// Parse raw input, build the force matrix, and classify. Shape errors
    /// come back as an error-carrying result.
    pub fn classify_input(&self, input: &ChartInput, aggregator: &ForceAggregator) -> StrengthResult {
        match input.to_chart() {
            Ok(chart) => self.classify(&chart, &aggregator.compute(&chart, None)),
            Err(e) => StrengthResult::failed(e.coded_string()),
        }
    }
}

impl Default for StrengthClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Highest position weight among present branches whose hidden stems carry
/// `e`. Every stem of element `e` includes the reference stem itself.
fn rootedness(chart: &Chart, e: Element, w: &StrengthWeights) -> (f64, Option<Position>) {
    let mut best: Option<(f64, Position)> = None;
    for (position, branch) in chart.present_branches() {
        let rooted = branch
            .hidden_stems()
            .iter()
            .any(|entry| entry.stem.element() == e);
        if !rooted {
            continue;
        }
        let weight = w.rootedness(position);
        if best.map_or(true, |(b, _)| weight > b) {
            best = Some((weight, position));
        }
    }
    match best {
        Some((weight, position)) => (weight, Some(position)),
        None => (ROOTLESS_MULTIPLIER, None),
    }
}

/// Classify with the default weights.
pub fn classify_strength(chart: &Chart, matrix: &ForceMatrix) -> StrengthResult {
    StrengthClassifier::new().classify(chart, matrix)
}
