//! Interaction detector: runs every sub-detector and returns records in
//! canonical order.

use pillars_core::{Branch, Chart, Stem};
use tracing::debug;

use super::clash::detect_clashes;
use super::combination::{detect_paired, detect_triads};
use super::punishment::detect_punishments;
use super::stem_combination::detect_stem_combinations;
use super::types::InteractionRecord;
use crate::weights::{EngineWeights, ForceWeights};

/// Detects clashes, combinations, and punishments among a chart's symbols.
pub struct InteractionDetector {
    weights: ForceWeights,
}

impl InteractionDetector {
    pub fn new() -> Self {
        Self::with_weights(&EngineWeights::default())
    }

    pub fn with_weights(weights: &EngineWeights) -> Self {
        Self {
            weights: weights.force.clone(),
        }
    }

    /// Detect over the four branch and stem slots. `None` slots (an unknown
    /// hour) are excluded from every check.
    ///
    /// Records are sorted by subtype, then members, then positions, so
    /// permuting the branches leaves the position-free records unchanged.
    pub fn detect(
        &self,
        branches: &[Option<Branch>; 4],
        stems: &[Option<Stem>; 4],
        month_branch: Option<Branch>,
    ) -> Vec<InteractionRecord> {
        let mut unique: Vec<Branch> = branches.iter().flatten().copied().collect();
        unique.sort();
        unique.dedup();

        let mut records = Vec::new();
        records.extend(detect_triads(&unique, &self.weights));
        records.extend(detect_paired(branches, &self.weights));
        records.extend(detect_stem_combinations(stems, month_branch, &self.weights));
        records.extend(detect_clashes(&unique, &self.weights));
        records.extend(detect_punishments(branches));

        records.sort_by(|a, b| {
            (a.interaction_type, &a.members, &a.positions).cmp(&(
                b.interaction_type,
                &b.members,
                &b.positions,
            ))
        });

        debug!(count = records.len(), "interactions detected");
        records
    }

    pub fn detect_chart(&self, chart: &Chart) -> Vec<InteractionRecord> {
        self.detect(&chart.branches(), &chart.stems(), Some(chart.month.branch))
    }

    /// Lenient string entry point. Unknown symbols and the `"-"` sentinel
    /// become empty slots instead of errors.
    pub fn detect_strs(
        &self,
        branches: [&str; 4],
        stems: [&str; 4],
        month_branch: &str,
    ) -> Vec<InteractionRecord> {
        let branches = branches.map(|s| lenient::<Branch>(s));
        let stems = stems.map(|s| lenient::<Stem>(s));
        self.detect(&branches, &stems, lenient::<Branch>(month_branch))
    }
}

impl Default for InteractionDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn lenient<T: std::str::FromStr>(s: &str) -> Option<T> {
    let parsed = s.parse::<T>().ok();
    if parsed.is_none() && !s.trim().trim_matches('-').is_empty() {
        debug!(symbol = s, "skipping unknown symbol");
    }
    parsed
}

/// Detect with the default weights.
pub fn detect_interactions(
    branches: &[Option<Branch>; 4],
    stems: &[Option<Stem>; 4],
    month_branch: Option<Branch>,
) -> Vec<InteractionRecord> {
    InteractionDetector::new().detect(branches, stems, month_branch)
}
