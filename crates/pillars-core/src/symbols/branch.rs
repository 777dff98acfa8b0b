//! The twelve earthly branches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::element::{Element, Polarity};
use super::hidden::{self, HiddenStemEntry};
use crate::errors::ChartError;

/// Terrain class of a branch. Every third branch starting at 子 is a peak,
/// followed by a vault and then a growth branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    Peak,
    Growth,
    Vault,
}

impl Terrain {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Peak => "peak",
            Self::Growth => "growth",
            Self::Vault => "vault",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the twelve branches, in cycle order starting at 子.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

const GLYPHS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

const ROMANIZED: [&str; 12] = [
    "zi", "chou", "yin", "mao", "chen", "si", "wu", "wei", "shen", "you", "xu", "hai",
];

const ELEMENTS: [Element; 12] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(idx: usize) -> Branch {
        Self::ALL[idx % 12]
    }

    pub const fn element(self) -> Element {
        ELEMENTS[self.index()]
    }

    /// Ordinal polarity: odd positions in the cycle are yin.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    pub const fn terrain(self) -> Terrain {
        match self.index() % 3 {
            0 => Terrain::Peak,
            1 => Terrain::Vault,
            _ => Terrain::Growth,
        }
    }

    /// The branch six places away.
    pub const fn clash_partner(self) -> Branch {
        Self::from_index(self.index() + 6)
    }

    /// Hidden-stem decomposition, ordered residual → transitional → dominant.
    pub fn hidden_stems(self) -> &'static [HiddenStemEntry] {
        hidden::entries(self)
    }

    pub fn dominant(self) -> HiddenStemEntry {
        hidden::dominant(self)
    }

    pub fn glyph(self) -> char {
        GLYPHS[self.index()]
    }

    pub fn romanized(self) -> &'static str {
        ROMANIZED[self.index()]
    }

    pub fn from_glyph(c: char) -> Option<Branch> {
        GLYPHS.iter().position(|&g| g == c).map(Self::from_index)
    }

    pub fn from_romanized(s: &str) -> Option<Branch> {
        let lower = s.trim().to_ascii_lowercase();
        ROMANIZED
            .iter()
            .position(|&r| r == lower)
            .map(Self::from_index)
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl FromStr for Branch {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(branch) = Branch::from_glyph(c) {
                return Ok(branch);
            }
        }
        Branch::from_romanized(trimmed).ok_or_else(|| ChartError::UnknownBranch {
            input: s.to_string(),
        })
    }
}
