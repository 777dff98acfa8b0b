//! Clash detection between fixed opposite branches.

use pillars_core::{Branch, Element, HiddenRank, Terrain};
use smallvec::SmallVec;

use super::types::{InteractionRecord, InteractionType, ScoreEffect, Tier, VaultOpening};
use crate::weights::ForceWeights;

/// One record per unordered pair of distinct present branches that sit six
/// places apart. `unique` must be deduplicated and sorted by cycle order.
pub fn detect_clashes(unique: &[Branch], weights: &ForceWeights) -> Vec<InteractionRecord> {
    let mut records = Vec::new();
    for (i, &a) in unique.iter().enumerate() {
        for &b in &unique[i + 1..] {
            if a.clash_partner() != b {
                continue;
            }
            records.push(clash_record(a, b, weights));
        }
    }
    records
}

fn clash_record(a: Branch, b: Branch, weights: &ForceWeights) -> InteractionRecord {
    let terrain = a.terrain();
    // One entry per branch: two vaults reduce and credit earth twice.
    let elements: SmallVec<[Element; 2]> = SmallVec::from_buf([a.element(), b.element()]);

    let opening = (terrain == Terrain::Vault).then(|| VaultOpening {
        ratio: weights.open_vault_ratio,
        stored: stored_elements(a, b),
    });
    let opens_vault = opening.is_some();

    let description = if opens_vault {
        format!("{a}{b} {terrain} clash (opens vault)")
    } else {
        format!("{a}{b} {terrain} clash")
    };

    let mut record = InteractionRecord::new(InteractionType::clash_for(terrain), Tier::Pair, description)
        .with_members([a, b])
        .with_effect(ScoreEffect::Clash {
            elements,
            retention: weights.clash_retention(terrain),
            opening,
        });
    record.opens_vault = opens_vault;
    record
}

/// Distinct elements of the non-dominant hidden stems of both vaults, in
/// cycle order.
fn stored_elements(a: Branch, b: Branch) -> SmallVec<[Element; 4]> {
    let mut stored: SmallVec<[Element; 4]> = a
        .hidden_stems()
        .iter()
        .chain(b.hidden_stems())
        .filter(|entry| entry.rank != HiddenRank::Dominant)
        .map(|entry| entry.stem.element())
        .collect();
    stored.sort();
    stored.dedup();
    stored
}
