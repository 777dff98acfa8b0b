//! Pattern classification result types.

use std::fmt;

use pillars_core::{Branch, Element, Stem, Symbol, TenGod, TenGodFamily};
use serde::{Deserialize, Serialize};

/// Identifier of the rule that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    Dominance,
    Transformation,
    Following,
    Normal,
}

impl RuleId {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dominance => "dominance",
            Self::Transformation => "transformation",
            Self::Following => "following",
            Self::Normal => "normal",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Integrity {
    Intact,
    Broken,
}

/// Which family a following pattern follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowingKind {
    Output,
    Wealth,
    Authority,
}

impl FollowingKind {
    pub const ALL: [FollowingKind; 3] = [Self::Output, Self::Wealth, Self::Authority];

    pub fn family(&self) -> TenGodFamily {
        match self {
            Self::Output => TenGodFamily::Output,
            Self::Wealth => TenGodFamily::Wealth,
            Self::Authority => TenGodFamily::Authority,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "pattern", rename_all = "snake_case")]
pub enum SpecialPattern {
    /// The reference element monopolizes the chart.
    Dominance { element: Element },
    /// The reference stem combines and transforms.
    Transformation {
        reference: Stem,
        partner: Stem,
        element: Element,
    },
    /// A rootless reference stem yields to one family.
    Following { kind: FollowingKind },
}

impl SpecialPattern {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dominance { element } => match element {
                Element::Wood => "curved-straight",
                Element::Fire => "blazing-up",
                Element::Earth => "sowing-reaping",
                Element::Metal => "following-reform",
                Element::Water => "moistening-down",
            },
            Self::Transformation { element, .. } => match element {
                Element::Earth => "jia-ji transforms to earth",
                Element::Metal => "yi-geng transforms to metal",
                Element::Water => "bing-xin transforms to water",
                Element::Wood => "ding-ren transforms to wood",
                Element::Fire => "wu-gui transforms to fire",
            },
            Self::Following { kind } => match kind {
                FollowingKind::Output => "following output",
                FollowingKind::Wealth => "following wealth",
                FollowingKind::Authority => "following authority",
            },
        }
    }

    pub fn hanja(&self) -> &'static str {
        match self {
            Self::Dominance { element } => match element {
                Element::Wood => "曲直格",
                Element::Fire => "炎上格",
                Element::Earth => "稼穡格",
                Element::Metal => "從革格",
                Element::Water => "潤下格",
            },
            Self::Transformation { element, .. } => match element {
                Element::Earth => "甲己化土格",
                Element::Metal => "乙庚化金格",
                Element::Water => "丙辛化水格",
                Element::Wood => "丁壬化木格",
                Element::Fire => "戊癸化火格",
            },
            Self::Following { kind } => match kind {
                FollowingKind::Output => "從兒格",
                FollowingKind::Wealth => "從財格",
                FollowingKind::Authority => "從殺格",
            },
        }
    }
}

impl fmt::Display for SpecialPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.hanja())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "pattern", content = "ten_god", rename_all = "snake_case")]
pub enum NormalPattern {
    /// Named after the ten god of the forming stem.
    TenGod(TenGod),
    /// Companion forming stem in the reference stem's career-seat month.
    CareerSeat,
    /// Rob-wealth forming stem for a yang reference at its peak month.
    BladeSeat,
    /// Rob-wealth forming stem for a yin reference.
    MonthlyPeer,
}

impl NormalPattern {
    pub fn name(&self) -> String {
        match self {
            Self::TenGod(god) => format!("{god} pattern"),
            Self::CareerSeat => "career seat".to_string(),
            Self::BladeSeat => "blade seat".to_string(),
            Self::MonthlyPeer => "monthly peer".to_string(),
        }
    }
}

impl fmt::Display for NormalPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Evidence behind a pattern decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternBasis {
    pub rule: RuleId,
    pub month_branch: Branch,
    /// Stem that forms the pattern.
    pub forming_stem: Option<Stem>,
    /// Hidden stems that also appear among the visible stems.
    pub revealed: Vec<Symbol>,
    /// Symbols of the combination the rule relied on.
    pub combined: Vec<Symbol>,
    pub element: Option<Element>,
    pub root_strength: Option<f64>,
    /// 0–100.
    pub confidence: u8,
    pub integrity: Integrity,
    pub notes: Vec<String>,
}

impl PatternBasis {
    pub fn new(rule: RuleId, month_branch: Branch, confidence: u8) -> Self {
        Self {
            rule,
            month_branch,
            forming_stem: None,
            revealed: Vec::new(),
            combined: Vec::new(),
            element: None,
            root_strength: None,
            confidence,
            integrity: Integrity::Intact,
            notes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatternResult {
    Undeterminable {
        reasons: Vec<String>,
    },
    Special {
        name: SpecialPattern,
        basis: PatternBasis,
    },
    Normal {
        name: NormalPattern,
        basis: PatternBasis,
    },
}

impl PatternResult {
    pub fn undeterminable(reason: impl Into<String>) -> Self {
        Self::Undeterminable {
            reasons: vec![reason.into()],
        }
    }

    pub fn basis(&self) -> Option<&PatternBasis> {
        match self {
            Self::Undeterminable { .. } => None,
            Self::Special { basis, .. } | Self::Normal { basis, .. } => Some(basis),
        }
    }

    pub fn is_determined(&self) -> bool {
        !matches!(self, Self::Undeterminable { .. })
    }

    pub fn confidence(&self) -> u8 {
        self.basis().map_or(0, |b| b.confidence)
    }

    /// Human-readable pattern name.
    pub fn display_name(&self) -> String {
        match self {
            Self::Undeterminable { .. } => "undeterminable".to_string(),
            Self::Special { name, .. } => name.to_string(),
            Self::Normal { name, .. } => name.to_string(),
        }
    }
}
