//! Twelve-stage life cycle and the career-seat table.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::branch::Branch;
use super::stem::Stem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwelveStage {
    Birth,
    Bath,
    Capping,
    Career,
    Peak,
    Decline,
    Sickness,
    Death,
    Tomb,
    Extinction,
    Conception,
    Nurture,
}

/// Branch at which each stem's cycle begins, indexed by stem.
const BIRTH_BRANCH: [Branch; 10] = [
    Branch::Hai,
    Branch::Wu,
    Branch::Yin,
    Branch::You,
    Branch::Yin,
    Branch::You,
    Branch::Si,
    Branch::Zi,
    Branch::Shen,
    Branch::Mao,
];

const CAREER_SEAT: [Branch; 10] = [
    Branch::Yin,
    Branch::Mao,
    Branch::Si,
    Branch::Wu,
    Branch::Si,
    Branch::Wu,
    Branch::Shen,
    Branch::You,
    Branch::Hai,
    Branch::Zi,
];

impl TwelveStage {
    pub const ALL: [TwelveStage; 12] = [
        TwelveStage::Birth,
        TwelveStage::Bath,
        TwelveStage::Capping,
        TwelveStage::Career,
        TwelveStage::Peak,
        TwelveStage::Decline,
        TwelveStage::Sickness,
        TwelveStage::Death,
        TwelveStage::Tomb,
        TwelveStage::Extinction,
        TwelveStage::Conception,
        TwelveStage::Nurture,
    ];

    /// Stage of `stem` at `branch`. Yang stems step forward from their birth
    /// branch, yin stems step backward.
    pub fn of(stem: Stem, branch: Branch) -> TwelveStage {
        let birth = BIRTH_BRANCH[stem.index()].index();
        let at = branch.index();
        let offset = if stem.polarity().is_yang() {
            (at + 12 - birth) % 12
        } else {
            (birth + 12 - at) % 12
        };
        Self::ALL[offset]
    }

    /// Birth, capping, career, and peak count as strong.
    pub fn is_strong(&self) -> bool {
        matches!(
            self,
            Self::Birth | Self::Capping | Self::Career | Self::Peak
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Birth => "birth",
            Self::Bath => "bath",
            Self::Capping => "capping",
            Self::Career => "career",
            Self::Peak => "peak",
            Self::Decline => "decline",
            Self::Sickness => "sickness",
            Self::Death => "death",
            Self::Tomb => "tomb",
            Self::Extinction => "extinction",
            Self::Conception => "conception",
            Self::Nurture => "nurture",
        }
    }
}

impl fmt::Display for TwelveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The branch at which `stem` reaches its career stage.
pub fn career_seat(stem: Stem) -> Branch {
    CAREER_SEAT[stem.index()]
}
