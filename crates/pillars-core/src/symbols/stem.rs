//! The ten heavenly stems.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::element::{Element, Polarity};
use crate::errors::ChartError;

/// One of the ten stems, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

const GLYPHS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

const ROMANIZED: [&str; 10] = [
    "jia", "yi", "bing", "ding", "wu", "ji", "geng", "xin", "ren", "gui",
];

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(idx: usize) -> Stem {
        Self::ALL[idx % 10]
    }

    /// Stems come in yang/yin pairs per element, in generative order.
    pub const fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    pub fn glyph(self) -> char {
        GLYPHS[self.index()]
    }

    pub fn romanized(self) -> &'static str {
        ROMANIZED[self.index()]
    }

    pub fn from_glyph(c: char) -> Option<Stem> {
        GLYPHS.iter().position(|&g| g == c).map(Self::from_index)
    }

    /// Case-insensitive romanized lookup.
    pub fn from_romanized(s: &str) -> Option<Stem> {
        let lower = s.trim().to_ascii_lowercase();
        ROMANIZED
            .iter()
            .position(|&r| r == lower)
            .map(Self::from_index)
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl FromStr for Stem {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(stem) = Stem::from_glyph(c) {
                return Ok(stem);
            }
        }
        Stem::from_romanized(trimmed).ok_or_else(|| ChartError::UnknownStem {
            input: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_follow_pairs() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Ding.element(), Element::Fire);
        assert_eq!(Stem::Ji.element(), Element::Earth);
        assert_eq!(Stem::Geng.element(), Element::Metal);
        assert_eq!(Stem::Gui.element(), Element::Water);
        assert_eq!(Stem::Bing.polarity(), Polarity::Yang);
        assert_eq!(Stem::Xin.polarity(), Polarity::Yin);
    }

    #[test]
    fn parses_glyph_and_romanized() {
        assert_eq!("庚".parse::<Stem>().unwrap(), Stem::Geng);
        assert_eq!("GENG".parse::<Stem>().unwrap(), Stem::Geng);
        assert!("x".parse::<Stem>().is_err());
    }
}
