//! Force aggregation: pillar base scores plus interaction adjustments.

use pillars_core::chart::Position;
use pillars_core::{Chart, Element, HiddenRank, Stem, Symbol};
use smallvec::SmallVec;
use tracing::{debug, debug_span};

use super::types::{AppliedInteraction, ForceMatrix, HiddenScore, SymbolScore};
use crate::interactions::{InteractionDetector, InteractionRecord, ScoreEffect};
use crate::scores::ElementScores;
use crate::weights::{EngineWeights, ForceWeights};

pub struct ForceAggregator {
    weights: EngineWeights,
}

/// Base scores and the per-position stem contributions a tied combination
/// can remove.
struct BaseTally {
    scores: ElementScores,
    stem_scores: [f64; 4],
    stem_elements: [Option<Element>; 4],
    details: Vec<SymbolScore>,
}

impl ForceAggregator {
    pub fn new() -> Self {
        Self::with_weights(EngineWeights::default())
    }

    pub fn with_weights(weights: EngineWeights) -> Self {
        Self { weights }
    }

    /// Build the force matrix for `chart`. When `commanding_override` equals
    /// the month branch's dominant hidden stem, that entry is multiplied by
    /// the commanding bonus.
    pub fn compute(&self, chart: &Chart, commanding_override: Option<Stem>) -> ForceMatrix {
        let _span = debug_span!("force_matrix", chart = %chart).entered();
        let w = &self.weights.force;

        let base = tally_base(chart, commanding_override, w);
        let interactions = InteractionDetector::with_weights(&self.weights).detect_chart(chart);

        let mut adjustments = ElementScores::default();
        let mut applied = Vec::with_capacity(interactions.len());
        let mut bound = [false; 4];
        for record in &interactions {
            let deltas = evaluate_effect(record, &base, &mut bound);
            adjustments += deltas;
            applied.push(AppliedInteraction {
                interaction_type: record.interaction_type,
                description: record.description.clone(),
                deltas,
            });
        }

        let scores = (base.scores + adjustments).floored_at_zero();
        let total = scores.total();
        debug!(
            total,
            strongest = %scores.strongest(),
            interactions = interactions.len(),
            "force matrix computed"
        );

        let reference = chart.reference_stem();
        ForceMatrix {
            base_scores: base.scores,
            adjustments,
            scores,
            percentages: scores.percentages(),
            total,
            details: base.details,
            interactions,
            applied,
            reference_stem: reference,
            reference_element: reference.element(),
            reference_polarity: reference.polarity(),
            commanding_override,
        }
    }
}

impl Default for ForceAggregator {
    fn default() -> Self {
        Self::new()
    }
}

fn tally_base(chart: &Chart, commanding_override: Option<Stem>, w: &ForceWeights) -> BaseTally {
    let mut tally = BaseTally {
        scores: ElementScores::default(),
        stem_scores: [0.0; 4],
        stem_elements: [None; 4],
        details: Vec::with_capacity(8),
    };

    for (position, pillar) in chart.present_pillars() {
        // The reference stem is the subject of the analysis, not a force.
        if position != Position::Day {
            let weight = w.stem_weight(position);
            let score = w.base_unit * weight;
            let element = pillar.stem.element();
            tally.scores[element] += score;
            tally.stem_scores[position.index()] = score;
            tally.stem_elements[position.index()] = Some(element);
            tally.details.push(SymbolScore {
                symbol: Symbol::Stem(pillar.stem),
                position,
                element,
                position_weight: weight,
                score,
                hidden: SmallVec::new(),
            });
        }

        let weight = w.branch_weight(position);
        let mut hidden = SmallVec::new();
        let mut branch_total = 0.0;
        for entry in pillar.branch.hidden_stems() {
            let commanding = position == Position::Month
                && entry.rank == HiddenRank::Dominant
                && commanding_override == Some(entry.stem);
            let mut score = entry.fraction() * weight * w.base_unit;
            if commanding {
                score *= w.commanding_bonus;
            }
            let element = entry.stem.element();
            tally.scores[element] += score;
            branch_total += score;
            hidden.push(HiddenScore {
                stem: entry.stem,
                element,
                rank: entry.rank,
                days: entry.command_days,
                score,
                commanding,
            });
        }
        tally.details.push(SymbolScore {
            symbol: Symbol::Branch(pillar.branch),
            position,
            element: pillar.branch.element(),
            position_weight: weight,
            score: branch_total,
            hidden,
        });
    }
    tally
}

/// Deltas for one record, computed against the base scores. `bound` tracks
/// stem positions already removed by an earlier tie.
fn evaluate_effect(record: &InteractionRecord, base: &BaseTally, bound: &mut [bool; 4]) -> ElementScores {
    let mut deltas = ElementScores::default();
    match &record.effect {
        ScoreEffect::None => {}
        ScoreEffect::Boost { element, fraction } => {
            deltas[*element] += fraction * base.scores[*element];
        }
        ScoreEffect::Bind {
            positions,
            retention,
        } => {
            for p in positions {
                let idx = p.index();
                if bound[idx] {
                    continue;
                }
                if let Some(element) = base.stem_elements[idx] {
                    deltas[element] -= (1.0 - retention) * base.stem_scores[idx];
                    bound[idx] = true;
                }
            }
        }
        ScoreEffect::Clash {
            elements,
            retention,
            opening,
        } => {
            for e in elements {
                deltas[*e] -= (1.0 - retention) * base.scores[*e];
            }
            if let Some(opening) = opening {
                let released: f64 = elements.iter().map(|e| base.scores[*e]).sum();
                for e in elements {
                    deltas[*e] += opening.ratio * released;
                }
                for e in &opening.stored {
                    deltas[*e] += opening.ratio * base.scores[*e];
                }
            }
        }
    }
    deltas
}

/// Compute the force matrix with the default weights.
pub fn compute_force_matrix(chart: &Chart, commanding_override: Option<Stem>) -> ForceMatrix {
    ForceAggregator::new().compute(chart, commanding_override)
}
