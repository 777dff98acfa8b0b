//! Branch combinations: trines, directionals, and adjacent pairs.

use pillars_core::chart::Position;
use pillars_core::Branch;

use super::tables::{self, TriadSet};
use super::types::{InteractionRecord, InteractionType, ScoreEffect, Tier};
use crate::weights::ForceWeights;

/// Trine and directional combinations over the distinct present branches.
/// Position-independent.
pub fn detect_triads(unique: &[Branch], weights: &ForceWeights) -> Vec<InteractionRecord> {
    let mut records = Vec::new();
    for set in &tables::DIRECTIONALS {
        if let Some(r) = triad_record(set, InteractionType::Directional, unique, weights) {
            records.push(r);
        }
    }
    for set in &tables::TRINES {
        if let Some(r) = triad_record(set, InteractionType::Trine, unique, weights) {
            records.push(r);
        }
    }
    records
}

fn triad_record(
    set: &TriadSet,
    interaction_type: InteractionType,
    unique: &[Branch],
    weights: &ForceWeights,
) -> Option<InteractionRecord> {
    let mut present: Vec<Branch> = set
        .members
        .iter()
        .copied()
        .filter(|m| unique.contains(m))
        .collect();
    let tier = match present.len() {
        3 => Tier::Full,
        2 if present.contains(&set.peak) => Tier::PartialWithPeak,
        2 => Tier::PartialWithoutPeak,
        _ => return None,
    };
    present.sort();

    let glyphs: String = present.iter().map(|b| b.glyph()).collect();
    let description = match tier {
        Tier::Full => format!("{glyphs} full {interaction_type} → {}", set.element),
        Tier::PartialWithPeak => format!(
            "{glyphs} partial {interaction_type} with peak {} → {}",
            set.peak, set.element
        ),
        _ => format!(
            "{glyphs} partial {interaction_type} without peak → {}",
            set.element
        ),
    };

    Some(
        InteractionRecord::new(interaction_type, tier, description)
            .with_members(present)
            .with_result(set.element)
            .with_effect(ScoreEffect::Boost {
                element: set.element,
                fraction: weights.tier_ratio(tier) - 1.0,
            }),
    )
}

/// Paired combinations between adjacent pillars only (year–month,
/// month–day, day–hour). Absent slots never pair.
pub fn detect_paired(
    branches: &[Option<Branch>; 4],
    weights: &ForceWeights,
) -> Vec<InteractionRecord> {
    let mut records = Vec::new();
    for window in Position::ALL.windows(2) {
        let (pa, pb) = (window[0], window[1]);
        let (Some(a), Some(b)) = (branches[pa.index()], branches[pb.index()]) else {
            continue;
        };
        let Some(element) = tables::paired_result(a, b) else {
            continue;
        };
        records.push(
            InteractionRecord::new(
                InteractionType::Paired,
                Tier::Pair,
                format!("{a}{b} paired combination ({pa}–{pb}) → {element}"),
            )
            .with_members([a, b])
            .with_positions(&[pa, pb])
            .with_result(element)
            .with_effect(ScoreEffect::Boost {
                element,
                fraction: weights.paired_fraction,
            }),
        );
    }
    records
}
