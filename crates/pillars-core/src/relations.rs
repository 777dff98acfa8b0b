//! Ten-god relations of stems and branches to a reference stem.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::symbols::{Branch, Element, Stem, TwelveStage};

pub use crate::symbols::stage::career_seat;

/// Element relation of a target to the reference element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenGodFamily {
    /// Same element.
    Peer,
    /// The reference generates the target.
    Output,
    /// The reference dominates the target.
    Wealth,
    /// The target dominates the reference.
    Authority,
    /// The target generates the reference.
    Resource,
}

impl TenGodFamily {
    pub fn of(reference: Element, target: Element) -> TenGodFamily {
        if target == reference {
            Self::Peer
        } else if reference.generates() == target {
            Self::Output
        } else if reference.dominates() == target {
            Self::Wealth
        } else if target.dominates() == reference {
            Self::Authority
        } else {
            Self::Resource
        }
    }

    /// Element a member of this family carries for the given reference.
    pub fn element_for(&self, reference: Element) -> Element {
        match self {
            Self::Peer => reference,
            Self::Output => reference.generates(),
            Self::Wealth => reference.dominates(),
            Self::Authority => reference.dominated_by(),
            Self::Resource => reference.generated_by(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Peer => "peer",
            Self::Output => "output",
            Self::Wealth => "wealth",
            Self::Authority => "authority",
            Self::Resource => "resource",
        }
    }
}

impl fmt::Display for TenGodFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenGod {
    Companion,
    RobWealth,
    EatingGod,
    HurtingOfficer,
    IndirectWealth,
    DirectWealth,
    SevenKillings,
    DirectOfficer,
    IndirectResource,
    DirectResource,
}

impl TenGod {
    pub fn family(&self) -> TenGodFamily {
        match self {
            Self::Companion | Self::RobWealth => TenGodFamily::Peer,
            Self::EatingGod | Self::HurtingOfficer => TenGodFamily::Output,
            Self::IndirectWealth | Self::DirectWealth => TenGodFamily::Wealth,
            Self::SevenKillings | Self::DirectOfficer => TenGodFamily::Authority,
            Self::IndirectResource | Self::DirectResource => TenGodFamily::Resource,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Companion => "companion",
            Self::RobWealth => "rob_wealth",
            Self::EatingGod => "eating_god",
            Self::HurtingOfficer => "hurting_officer",
            Self::IndirectWealth => "indirect_wealth",
            Self::DirectWealth => "direct_wealth",
            Self::SevenKillings => "seven_killings",
            Self::DirectOfficer => "direct_officer",
            Self::IndirectResource => "indirect_resource",
            Self::DirectResource => "direct_resource",
        }
    }
}

impl fmt::Display for TenGod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ten-god relation of `target` to `reference`.
///
/// The family comes from the element relation; matching polarity selects the
/// first member of each pair, opposite polarity the second.
pub fn ten_god(reference: Stem, target: Stem) -> TenGod {
    let same_polarity = reference.polarity() == target.polarity();
    match (TenGodFamily::of(reference.element(), target.element()), same_polarity) {
        (TenGodFamily::Peer, true) => TenGod::Companion,
        (TenGodFamily::Peer, false) => TenGod::RobWealth,
        (TenGodFamily::Output, true) => TenGod::EatingGod,
        (TenGodFamily::Output, false) => TenGod::HurtingOfficer,
        (TenGodFamily::Wealth, true) => TenGod::IndirectWealth,
        (TenGodFamily::Wealth, false) => TenGod::DirectWealth,
        (TenGodFamily::Authority, true) => TenGod::SevenKillings,
        (TenGodFamily::Authority, false) => TenGod::DirectOfficer,
        (TenGodFamily::Resource, true) => TenGod::IndirectResource,
        (TenGodFamily::Resource, false) => TenGod::DirectResource,
    }
}

/// Ten-god relation of a branch, read through its dominant hidden stem.
pub fn ten_god_of_branch(reference: Stem, branch: Branch) -> TenGod {
    ten_god(reference, branch.dominant().stem)
}

pub fn twelve_stage(stem: Stem, branch: Branch) -> TwelveStage {
    TwelveStage::of(stem, branch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_to_itself_is_companion() {
        for s in Stem::ALL {
            assert_eq!(ten_god(s, s), TenGod::Companion);
        }
    }

    #[test]
    fn family_element_round_trips() {
        for reference in Element::ALL {
            for target in Element::ALL {
                let family = TenGodFamily::of(reference, target);
                assert_eq!(family.element_for(reference), target);
            }
        }
    }
}
