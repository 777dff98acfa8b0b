//! The five elements and their two cycles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five elements.
///
/// Declaration order follows the generative cycle, so `generates` is simply
/// "the next variant" and `dominates` is "two variants ahead".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Position in the generative cycle (wood = 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(idx: usize) -> Element {
        Self::ALL[idx % 5]
    }

    /// Wood → fire → earth → metal → water → wood.
    pub const fn generates(self) -> Element {
        Self::from_index(self.index() + 1)
    }

    /// Wood → earth → water → fire → metal → wood.
    pub const fn dominates(self) -> Element {
        Self::from_index(self.index() + 2)
    }

    /// The element that generates `self`.
    pub const fn generated_by(self) -> Element {
        Self::from_index(self.index() + 4)
    }

    /// The element that dominates `self`.
    pub const fn dominated_by(self) -> Element {
        Self::from_index(self.index() + 3)
    }

    /// True when `self` is `other` or generates `other`.
    pub fn supports(self, other: Element) -> bool {
        self == other || self.generates() == other
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Self::Wood => '木',
            Self::Fire => '火',
            Self::Earth => '土',
            Self::Metal => '金',
            Self::Water => '水',
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Yang or yin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Yang => "yang",
            Self::Yin => "yin",
        }
    }

    pub fn is_yang(&self) -> bool {
        matches!(self, Self::Yang)
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
