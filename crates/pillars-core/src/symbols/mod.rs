//! Symbol tables: the five elements, ten stems, twelve branches, hidden-stem
//! decompositions, and the twelve-stage cycle.
//!
//! All tables are `const` data. Nothing here allocates or mutates.

pub mod branch;
pub mod element;
pub mod hidden;
pub mod stage;
pub mod stem;

pub use branch::{Branch, Terrain};
pub use element::{Element, Polarity};
pub use hidden::{HiddenRank, HiddenStemEntry};
pub use stage::TwelveStage;
pub use stem::Stem;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Either a stem or a branch. Used wherever a record lists the symbols that
/// took part in an interaction or a pattern decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Stem(Stem),
    Branch(Branch),
}

impl Symbol {
    pub fn glyph(&self) -> char {
        match self {
            Self::Stem(s) => s.glyph(),
            Self::Branch(b) => b.glyph(),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl From<Stem> for Symbol {
    fn from(s: Stem) -> Self {
        Self::Stem(s)
    }
}

impl From<Branch> for Symbol {
    fn from(b: Branch) -> Self {
        Self::Branch(b)
    }
}
