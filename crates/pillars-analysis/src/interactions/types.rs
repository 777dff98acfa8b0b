//! Interaction record types.

use std::fmt;

use pillars_core::chart::Position;
use pillars_core::{Element, Symbol, Terrain};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Clash,
    Combination,
    Punishment,
}

/// Subtype of an interaction. Declaration order is the canonical output
/// order of the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    Directional,
    Trine,
    Paired,
    StemTransformed,
    StemTied,
    PeakClash,
    GrowthClash,
    VaultClash,
    TriplePunishment,
    MutualPunishment,
    SelfPunishment,
}

impl InteractionType {
    pub fn kind(&self) -> InteractionKind {
        match self {
            Self::Directional
            | Self::Trine
            | Self::Paired
            | Self::StemTransformed
            | Self::StemTied => InteractionKind::Combination,
            Self::PeakClash | Self::GrowthClash | Self::VaultClash => InteractionKind::Clash,
            Self::TriplePunishment | Self::MutualPunishment | Self::SelfPunishment => {
                InteractionKind::Punishment
            }
        }
    }

    pub fn clash_for(terrain: Terrain) -> Self {
        match terrain {
            Terrain::Peak => Self::PeakClash,
            Terrain::Growth => Self::GrowthClash,
            Terrain::Vault => Self::VaultClash,
        }
    }

    /// True for records whose detection depends on pillar adjacency.
    pub fn is_positional(&self) -> bool {
        matches!(self, Self::Paired | Self::StemTransformed | Self::StemTied)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Directional => "directional",
            Self::Trine => "trine",
            Self::Paired => "paired",
            Self::StemTransformed => "stem_transformed",
            Self::StemTied => "stem_tied",
            Self::PeakClash => "peak_clash",
            Self::GrowthClash => "growth_clash",
            Self::VaultClash => "vault_clash",
            Self::TriplePunishment => "triple_punishment",
            Self::MutualPunishment => "mutual_punishment",
            Self::SelfPunishment => "self_punishment",
        }
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Completeness of a combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// All three members of a trine or directional set (or a triple punishment).
    Full,
    /// Two members, one of them the set's peak member.
    PartialWithPeak,
    /// Two members, neither the peak member.
    PartialWithoutPeak,
    /// A two-symbol relation with no partial form.
    Pair,
}

/// Stored elements released when a vault clash opens the vaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultOpening {
    pub ratio: f64,
    pub stored: SmallVec<[Element; 4]>,
}

/// How an interaction moves the element scores. The force aggregator
/// evaluates the effect against the base scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum ScoreEffect {
    None,
    /// Adds `fraction × base(element)` to `element`.
    Boost { element: Element, fraction: f64 },
    /// Removes `(1 − retention)` of the stem contributions at `positions`.
    Bind {
        positions: SmallVec<[Position; 2]>,
        retention: f64,
    },
    /// Removes `(1 − retention)` of the clashing element once per branch.
    /// An opening credits each branch's element with `ratio` of the summed
    /// clashing scores and each stored element with `ratio` of its own.
    Clash {
        elements: SmallVec<[Element; 2]>,
        retention: f64,
        opening: Option<VaultOpening>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub kind: InteractionKind,
    pub interaction_type: InteractionType,
    /// Participating symbols, sorted by cycle order for position-free records.
    pub members: SmallVec<[Symbol; 3]>,
    /// Pillar positions, only for adjacency-bound records.
    pub positions: SmallVec<[Position; 2]>,
    pub result_element: Option<Element>,
    pub tier: Tier,
    pub opens_vault: bool,
    pub description: String,
    pub effect: ScoreEffect,
}

impl InteractionRecord {
    pub fn new(interaction_type: InteractionType, tier: Tier, description: String) -> Self {
        Self {
            kind: interaction_type.kind(),
            interaction_type,
            members: SmallVec::new(),
            positions: SmallVec::new(),
            result_element: None,
            tier,
            opens_vault: false,
            description,
            effect: ScoreEffect::None,
        }
    }

    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.members = members.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_positions(mut self, positions: &[Position]) -> Self {
        self.positions = positions.iter().copied().collect();
        self
    }

    pub fn with_result(mut self, element: Element) -> Self {
        self.result_element = Some(element);
        self
    }

    pub fn with_effect(mut self, effect: ScoreEffect) -> Self {
        self.effect = effect;
        self
    }

    /// Glyphs of the members, concatenated.
    pub fn member_glyphs(&self) -> String {
        self.members.iter().map(|s| s.glyph()).collect()
    }
}

impl fmt::Display for InteractionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
