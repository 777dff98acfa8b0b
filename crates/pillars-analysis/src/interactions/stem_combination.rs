//! Stem combinations between adjacent visible stems.

use pillars_core::chart::Position;
use pillars_core::{Branch, Stem};
use smallvec::SmallVec;

use super::tables;
use super::types::{InteractionRecord, InteractionType, ScoreEffect, Tier};
use crate::weights::ForceWeights;

/// A combining adjacent pair transforms when the month branch's dominant
/// hidden stem carries the pair's element; otherwise the two stems are tied.
/// Without a month branch every pair is tied.
pub fn detect_stem_combinations(
    stems: &[Option<Stem>; 4],
    month_branch: Option<Branch>,
    weights: &ForceWeights,
) -> Vec<InteractionRecord> {
    let month_element = month_branch.map(|b| b.dominant().stem.element());
    let mut records = Vec::new();

    for window in Position::ALL.windows(2) {
        let (pa, pb) = (window[0], window[1]);
        let (Some(a), Some(b)) = (stems[pa.index()], stems[pb.index()]) else {
            continue;
        };
        let Some(element) = tables::stem_combination(a, b) else {
            continue;
        };

        let record = if month_element == Some(element) {
            InteractionRecord::new(
                InteractionType::StemTransformed,
                Tier::Pair,
                format!("{a}{b} stem combination ({pa}–{pb}) transforms → {element}"),
            )
            .with_effect(ScoreEffect::Boost {
                element,
                fraction: weights.transform_fraction,
            })
        } else {
            // The reference stem keeps its own contribution; it is never scored.
            let bound: SmallVec<[Position; 2]> = [pa, pb]
                .into_iter()
                .filter(|p| *p != Position::Day)
                .collect();
            InteractionRecord::new(
                InteractionType::StemTied,
                Tier::Pair,
                format!("{a}{b} stem combination ({pa}–{pb}) tied, {element} not supported by month"),
            )
            .with_effect(ScoreEffect::Bind {
                positions: bound,
                retention: weights.tied_retention,
            })
        };

        records.push(
            record
                .with_members([a, b])
                .with_positions(&[pa, pb])
                .with_result(element),
        );
    }
    records
}
