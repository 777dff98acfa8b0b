//! Combined analysis: interactions, force, strength and pattern in one report.

use std::fmt;

use pillars_core::{AnalysisError, Chart, ChartInput, PillarsConfig, Stem};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, info_span};

use crate::force::{ForceAggregator, ForceMatrix};
use crate::interactions::InteractionSet;
use crate::pattern::{PatternClassifier, PatternResult};
use crate::strength::{StrengthClassifier, StrengthResult};
use crate::weights::EngineWeights;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub weights: EngineWeights,
    pub commanding_override: Option<Stem>,
    pub is_hour_unknown: bool,
}

impl AnalysisOptions {
    pub fn from_config(config: &PillarsConfig) -> Self {
        Self {
            weights: EngineWeights::from_config(config),
            ..Default::default()
        }
    }

    pub fn with_commanding_override(mut self, stem: Stem) -> Self {
        self.commanding_override = Some(stem);
        self
    }

    pub fn hour_unknown(mut self) -> Self {
        self.is_hour_unknown = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAnalysis {
    pub chart: Chart,
    pub force: ForceMatrix,
    pub strength: StrengthResult,
    pub pattern: PatternResult,
}

impl ChartAnalysis {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Plain-text report: chart, interactions, force matrix, strength, pattern.
impl fmt::Display for ChartAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "chart: {}", self.chart)?;
        writeln!(f)?;
        writeln!(f, "{}", InteractionSet::new(&self.force.interactions))?;
        writeln!(f)?;
        writeln!(f, "{}", self.force)?;
        writeln!(f)?;
        writeln!(f, "{}", self.strength)?;
        writeln!(f)?;
        write!(f, "pattern: {}", self.pattern.display_name())?;
        match &self.pattern {
            PatternResult::Undeterminable { reasons } => {
                for reason in reasons {
                    write!(f, "\n  reason: {reason}")?;
                }
            }
            determined => write!(f, " (confidence {})", determined.confidence())?,
        }
        Ok(())
    }
}

/// Stage instances built once per options value and shared across charts.
struct Engine {
    aggregator: ForceAggregator,
    strength: StrengthClassifier,
    pattern: PatternClassifier,
}

impl Engine {
    fn new(options: &AnalysisOptions) -> Self {
        Self {
            aggregator: ForceAggregator::with_weights(options.weights.clone()),
            strength: StrengthClassifier::with_weights(&options.weights),
            pattern: PatternClassifier::with_weights(&options.weights),
        }
    }

    fn run(&self, chart: &Chart, options: &AnalysisOptions) -> ChartAnalysis {
        let _span = info_span!("analyze_chart", chart = %chart).entered();
        // An unknown hour is dropped before every stage.
        let force_chart = if options.is_hour_unknown {
            chart.without_hour()
        } else {
            *chart
        };

        let force = {
            let _phase = debug_span!("force_phase").entered();
            let force = self
                .aggregator
                .compute(&force_chart, options.commanding_override);
            debug!(
                interactions = %InteractionSet::new(&force.interactions).counts_line(),
                summary = %force.summary(),
                "force phase done"
            );
            force
        };

        let strength = {
            let _phase = debug_span!("strength_phase").entered();
            let strength = self.strength.classify(&force_chart, &force);
            debug!(
                level = %strength.level,
                index = strength.index,
                "strength phase done"
            );
            strength
        };

        let pattern = {
            let _phase = debug_span!("pattern_phase").entered();
            let pattern = self.pattern.classify(chart, options.is_hour_unknown);
            debug!(pattern = %pattern.display_name(), "pattern phase done");
            pattern
        };

        ChartAnalysis {
            chart: *chart,
            force,
            strength,
            pattern,
        }
    }
}

pub fn analyze_chart(chart: &Chart, options: &AnalysisOptions) -> ChartAnalysis {
    Engine::new(options).run(chart, options)
}

/// Validate raw input, then analyze.
pub fn analyze_input(
    input: &ChartInput,
    options: &AnalysisOptions,
) -> Result<ChartAnalysis, AnalysisError> {
    let chart = input.to_chart()?;
    Ok(analyze_chart(&chart, options))
}

/// Analyze many charts in parallel. Output order matches input order.
pub fn analyze_batch(charts: &[Chart], options: &AnalysisOptions) -> Vec<ChartAnalysis> {
    let _span = info_span!("analyze_batch", count = charts.len()).entered();
    let engine = Engine::new(options);
    charts
        .par_iter()
        .map(|chart| engine.run(chart, options))
        .collect()
}
