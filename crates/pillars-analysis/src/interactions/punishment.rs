//! Punishment detection. Punishments carry no score effect.

use pillars_core::Branch;
use rustc_hash::FxHashMap;

use super::tables;
use super::types::{InteractionRecord, InteractionType, Tier};

pub fn detect_punishments(branches: &[Option<Branch>; 4]) -> Vec<InteractionRecord> {
    let mut counts: FxHashMap<Branch, usize> = FxHashMap::default();
    for b in branches.iter().flatten() {
        *counts.entry(*b).or_insert(0) += 1;
    }
    let has = |b: &Branch| counts.contains_key(b);

    let mut records = Vec::new();

    for set in &tables::TRIPLE_PUNISHMENTS {
        if set.iter().all(has) {
            let mut members = *set;
            members.sort();
            let glyphs: String = members.iter().map(|b| b.glyph()).collect();
            records.push(
                InteractionRecord::new(
                    InteractionType::TriplePunishment,
                    Tier::Full,
                    format!("{glyphs} triple punishment"),
                )
                .with_members(members),
            );
        }
    }

    let (a, b) = tables::MUTUAL_PUNISHMENT;
    if has(&a) && has(&b) {
        records.push(
            InteractionRecord::new(
                InteractionType::MutualPunishment,
                Tier::Pair,
                format!("{a}{b} mutual punishment"),
            )
            .with_members([a, b]),
        );
    }

    for branch in tables::SELF_PUNISHING {
        let n = counts.get(&branch).copied().unwrap_or(0);
        if n >= 2 {
            records.push(
                InteractionRecord::new(
                    InteractionType::SelfPunishment,
                    Tier::Pair,
                    format!("{branch}{branch} self punishment"),
                )
                .with_members(std::iter::repeat(branch).take(n)),
            );
        }
    }

    records
}
