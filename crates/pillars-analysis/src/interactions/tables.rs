//! Static combination and punishment tables.

use pillars_core::{Branch, Element, Stem};

/// A three-branch set that combines into one element.
#[derive(Debug, Clone, Copy)]
pub struct TriadSet {
    pub members: [Branch; 3],
    pub element: Element,
    /// The peak-terrain member that anchors partial combinations.
    pub peak: Branch,
}

pub const TRINES: [TriadSet; 4] = [
    TriadSet {
        members: [Branch::Hai, Branch::Mao, Branch::Wei],
        element: Element::Wood,
        peak: Branch::Mao,
    },
    TriadSet {
        members: [Branch::Yin, Branch::Wu, Branch::Xu],
        element: Element::Fire,
        peak: Branch::Wu,
    },
    TriadSet {
        members: [Branch::Si, Branch::You, Branch::Chou],
        element: Element::Metal,
        peak: Branch::You,
    },
    TriadSet {
        members: [Branch::Shen, Branch::Zi, Branch::Chen],
        element: Element::Water,
        peak: Branch::Zi,
    },
];

pub const DIRECTIONALS: [TriadSet; 4] = [
    TriadSet {
        members: [Branch::Yin, Branch::Mao, Branch::Chen],
        element: Element::Wood,
        peak: Branch::Mao,
    },
    TriadSet {
        members: [Branch::Si, Branch::Wu, Branch::Wei],
        element: Element::Fire,
        peak: Branch::Wu,
    },
    TriadSet {
        members: [Branch::Shen, Branch::You, Branch::Xu],
        element: Element::Metal,
        peak: Branch::You,
    },
    TriadSet {
        members: [Branch::Hai, Branch::Zi, Branch::Chou],
        element: Element::Water,
        peak: Branch::Zi,
    },
];

/// Paired branch combinations and their result element.
pub const PAIRED: [(Branch, Branch, Element); 6] = [
    (Branch::Zi, Branch::Chou, Element::Earth),
    (Branch::Yin, Branch::Hai, Element::Wood),
    (Branch::Mao, Branch::Xu, Element::Fire),
    (Branch::Chen, Branch::You, Element::Metal),
    (Branch::Si, Branch::Shen, Element::Water),
    (Branch::Wu, Branch::Wei, Element::Fire),
];

/// Stem combinations and their transformation element.
pub const STEM_COMBINATIONS: [(Stem, Stem, Element); 5] = [
    (Stem::Jia, Stem::Ji, Element::Earth),
    (Stem::Yi, Stem::Geng, Element::Metal),
    (Stem::Bing, Stem::Xin, Element::Water),
    (Stem::Ding, Stem::Ren, Element::Wood),
    (Stem::Wu, Stem::Gui, Element::Fire),
];

/// Punishments that need all three members present.
pub const TRIPLE_PUNISHMENTS: [[Branch; 3]; 2] = [
    [Branch::Yin, Branch::Si, Branch::Shen],
    [Branch::Chou, Branch::Wei, Branch::Xu],
];

pub const MUTUAL_PUNISHMENT: (Branch, Branch) = (Branch::Zi, Branch::Mao);

/// Branches that punish themselves when repeated.
pub const SELF_PUNISHING: [Branch; 4] = [Branch::Chen, Branch::Wu, Branch::You, Branch::Hai];

pub fn paired_result(a: Branch, b: Branch) -> Option<Element> {
    PAIRED
        .iter()
        .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
        .map(|(_, _, e)| *e)
}

/// Transformation element of a stem pair, in either order.
pub fn stem_combination(a: Stem, b: Stem) -> Option<Element> {
    STEM_COMBINATIONS
        .iter()
        .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
        .map(|(_, _, e)| *e)
}

/// The stem that combines with `stem`.
pub fn stem_partner(stem: Stem) -> Stem {
    // Partners sit five places apart in the stem cycle.
    Stem::from_index(stem.index() + 5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partner_table_agrees_with_offset() {
        for stem in Stem::ALL {
            assert!(stem_combination(stem, stem_partner(stem)).is_some());
        }
    }

    #[test]
    fn triad_peaks_are_members() {
        for set in TRINES.iter().chain(DIRECTIONALS.iter()) {
            assert!(set.members.contains(&set.peak));
            assert_eq!(set.peak.terrain(), pillars_core::Terrain::Peak);
        }
    }
}
