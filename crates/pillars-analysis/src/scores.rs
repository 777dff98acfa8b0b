//! Per-element score vector.

use std::ops::{Add, AddAssign, Index, IndexMut};

use pillars_core::Element;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementScores {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
}

impl ElementScores {
    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        Element::ALL.into_iter().map(move |e| (e, self[e]))
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }

    pub fn floored_at_zero(&self) -> Self {
        let mut out = *self;
        for e in Element::ALL {
            out[e] = out[e].max(0.0);
        }
        out
    }

    /// Share of the total per element, rounded to one decimal place.
    /// All zeros when the total is zero.
    pub fn percentages(&self) -> Self {
        let total = self.total();
        let mut out = Self::default();
        if total <= 0.0 {
            return out;
        }
        for e in Element::ALL {
            out[e] = round1(self[e] / total * 100.0);
        }
        out
    }

    /// The element with the highest score; ties resolve to cycle order.
    pub fn strongest(&self) -> Element {
        let mut best = Element::Wood;
        for e in Element::ALL {
            if self[e] > self[best] {
                best = e;
            }
        }
        best
    }
}

pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

impl Index<Element> for ElementScores {
    type Output = f64;

    fn index(&self, e: Element) -> &f64 {
        match e {
            Element::Wood => &self.wood,
            Element::Fire => &self.fire,
            Element::Earth => &self.earth,
            Element::Metal => &self.metal,
            Element::Water => &self.water,
        }
    }
}

impl IndexMut<Element> for ElementScores {
    fn index_mut(&mut self, e: Element) -> &mut f64 {
        match e {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }
}

impl Add for ElementScores {
    type Output = ElementScores;

    fn add(mut self, rhs: ElementScores) -> ElementScores {
        self += rhs;
        self
    }
}

impl AddAssign for ElementScores {
    fn add_assign(&mut self, rhs: ElementScores) {
        for e in Element::ALL {
            self[e] += rhs[e];
        }
    }
}
