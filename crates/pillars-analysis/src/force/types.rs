//! Force matrix types.

use pillars_core::chart::Position;
use pillars_core::{Element, HiddenRank, Polarity, Stem, Symbol};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::interactions::{InteractionRecord, InteractionType};
use crate::scores::ElementScores;

/// Score contributed by one hidden stem of a branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiddenScore {
    pub stem: Stem,
    pub element: Element,
    pub rank: HiddenRank,
    pub days: u8,
    pub score: f64,
    /// True when the commanding bonus was applied.
    pub commanding: bool,
}

/// Detail line for one visible stem or branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolScore {
    pub symbol: Symbol,
    pub position: Position,
    pub element: Element,
    pub position_weight: f64,
    pub score: f64,
    pub hidden: SmallVec<[HiddenScore; 3]>,
}

/// Deltas an interaction produced against the base scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedInteraction {
    pub interaction_type: InteractionType,
    pub description: String,
    pub deltas: ElementScores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceMatrix {
    /// Scores from the pillars alone.
    pub base_scores: ElementScores,
    /// Sum of every interaction's deltas.
    pub adjustments: ElementScores,
    /// `base + adjustments`, floored at zero.
    pub scores: ElementScores,
    /// Share of `total` per element, one decimal.
    pub percentages: ElementScores,
    pub total: f64,
    pub details: Vec<SymbolScore>,
    pub interactions: Vec<InteractionRecord>,
    pub applied: Vec<AppliedInteraction>,
    pub reference_stem: Stem,
    pub reference_element: Element,
    pub reference_polarity: Polarity,
    pub commanding_override: Option<Stem>,
}
