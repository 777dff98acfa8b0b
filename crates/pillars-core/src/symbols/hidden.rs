//! Hidden-stem decompositions.
//!
//! Each branch stores two or three stems that "command" part of its 30-day
//! period. The entry with the most days is the dominant one and stands for
//! the branch in ten-god lookups and pattern formation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::branch::Branch;
use super::stem::Stem;
use crate::constants::BRANCH_PERIOD_DAYS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiddenRank {
    Residual,
    Transitional,
    Dominant,
}

impl HiddenRank {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Residual => "residual",
            Self::Transitional => "transitional",
            Self::Dominant => "dominant",
        }
    }
}

impl fmt::Display for HiddenRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HiddenStemEntry {
    pub stem: Stem,
    pub command_days: u8,
    pub rank: HiddenRank,
}

impl HiddenStemEntry {
    const fn new(stem: Stem, command_days: u8, rank: HiddenRank) -> Self {
        Self {
            stem,
            command_days,
            rank,
        }
    }

    /// Share of the branch period, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        f64::from(self.command_days) / f64::from(BRANCH_PERIOD_DAYS)
    }
}

use HiddenRank::{Dominant as D, Residual as R, Transitional as T};

const ZI: [HiddenStemEntry; 2] = [
    HiddenStemEntry::new(Stem::Ren, 10, R),
    HiddenStemEntry::new(Stem::Gui, 20, D),
];
const CHOU: [HiddenStemEntry; 3] = [
    HiddenStemEntry::new(Stem::Gui, 9, R),
    HiddenStemEntry::new(Stem::Xin, 3, T),
    HiddenStemEntry::new(Stem::Ji, 18, D),
];
const YIN: [HiddenStemEntry; 3] = [
    HiddenStemEntry::new(Stem::Wu, 7, R),
    HiddenStemEntry::new(Stem::Bing, 7, T),
    HiddenStemEntry::new(Stem::Jia, 16, D),
];
const MAO: [HiddenStemEntry; 2] = [
    HiddenStemEntry::new(Stem::Jia, 10, R),
    HiddenStemEntry::new(Stem::Yi, 20, D),
];
const CHEN: [HiddenStemEntry; 3] = [
    HiddenStemEntry::new(Stem::Yi, 9, R),
    HiddenStemEntry::new(Stem::Gui, 3, T),
    HiddenStemEntry::new(Stem::Wu, 18, D),
];
const SI: [HiddenStemEntry; 3] = [
    HiddenStemEntry::new(Stem::Wu, 7, R),
    HiddenStemEntry::new(Stem::Geng, 7, T),
    HiddenStemEntry::new(Stem::Bing, 16, D),
];
const WU: [HiddenStemEntry; 3] = [
    HiddenStemEntry::new(Stem::Bing, 10, R),
    HiddenStemEntry::new(Stem::Ji, 9, T),
    HiddenStemEntry::new(Stem::Ding, 11, D),
];
const WEI: [HiddenStemEntry; 3] = [
    HiddenStemEntry::new(Stem::Ding, 9, R),
    HiddenStemEntry::new(Stem::Yi, 3, T),
    HiddenStemEntry::new(Stem::Ji, 18, D),
];
const SHEN: [HiddenStemEntry; 3] = [
    HiddenStemEntry::new(Stem::Wu, 7, R),
    HiddenStemEntry::new(Stem::Ren, 7, T),
    HiddenStemEntry::new(Stem::Geng, 16, D),
];
const YOU: [HiddenStemEntry; 2] = [
    HiddenStemEntry::new(Stem::Geng, 10, R),
    HiddenStemEntry::new(Stem::Xin, 20, D),
];
const XU: [HiddenStemEntry; 3] = [
    HiddenStemEntry::new(Stem::Xin, 9, R),
    HiddenStemEntry::new(Stem::Ding, 3, T),
    HiddenStemEntry::new(Stem::Wu, 18, D),
];
const HAI: [HiddenStemEntry; 3] = [
    HiddenStemEntry::new(Stem::Wu, 7, R),
    HiddenStemEntry::new(Stem::Jia, 7, T),
    HiddenStemEntry::new(Stem::Ren, 16, D),
];

/// Table lookup for a branch's hidden stems.
pub fn entries(branch: Branch) -> &'static [HiddenStemEntry] {
    match branch {
        Branch::Zi => &ZI,
        Branch::Chou => &CHOU,
        Branch::Yin => &YIN,
        Branch::Mao => &MAO,
        Branch::Chen => &CHEN,
        Branch::Si => &SI,
        Branch::Wu => &WU,
        Branch::Wei => &WEI,
        Branch::Shen => &SHEN,
        Branch::You => &YOU,
        Branch::Xu => &XU,
        Branch::Hai => &HAI,
    }
}

/// The dominant entry is always last in the table.
pub fn dominant(branch: Branch) -> HiddenStemEntry {
    let table = entries(branch);
    table[table.len() - 1]
}
