//! Pattern rules and the context they evaluate against.

pub mod dominance;
pub mod following;
pub mod normal;
pub mod transformation;

pub use dominance::DominanceRule;
pub use following::FollowingRule;
pub use normal::NormalRule;
pub use transformation::TransformationRule;

use pillars_core::chart::Position;
use pillars_core::constants::ROOT_RANK_WEIGHTS;
use pillars_core::{Branch, Chart, Element, HiddenRank, HiddenStemEntry, Stem};

use super::types::{PatternResult, RuleId};
use crate::weights::PatternWeights;

/// A single pattern rule. Rules are pure predicates over the chart; a rule
/// that does not apply returns `None` and the next rule runs.
pub trait PatternRule: Send + Sync {
    fn id(&self) -> RuleId;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn evaluate(&self, ctx: &PatternContext<'_>) -> Option<PatternResult>;
}

/// Chart view shared by all rules. When the hour is unknown the chart has
/// already had its hour pillar removed.
pub struct PatternContext<'a> {
    pub chart: Chart,
    pub hour_unknown: bool,
    pub weights: &'a PatternWeights,
}

impl<'a> PatternContext<'a> {
    pub fn new(chart: &Chart, hour_unknown: bool, weights: &'a PatternWeights) -> Self {
        let hour_unknown = hour_unknown || !chart.has_hour();
        let chart = if hour_unknown {
            chart.without_hour()
        } else {
            *chart
        };
        Self {
            chart,
            hour_unknown,
            weights,
        }
    }

    pub fn reference(&self) -> Stem {
        self.chart.reference_stem()
    }

    pub fn element(&self) -> Element {
        self.reference().element()
    }

    pub fn month_branch(&self) -> Branch {
        self.chart.month.branch
    }

    pub fn month_dominant(&self) -> HiddenStemEntry {
        self.month_branch().dominant()
    }

    /// All visible stems, the reference included.
    pub fn visible_stems(&self) -> impl Iterator<Item = (Position, Stem)> + '_ {
        self.chart.present_pillars().map(|(p, x)| (p, x.stem))
    }

    pub fn is_revealed(&self, stem: Stem) -> bool {
        self.visible_stems().any(|(_, s)| s == stem)
    }

    pub fn unique_branches(&self) -> Vec<Branch> {
        let mut unique: Vec<Branch> = self.chart.present_branches().map(|(_, b)| b).collect();
        unique.sort();
        unique.dedup();
        unique
    }

    /// Present as a visible stem or as a branch's dominant hidden stem.
    pub fn is_present(&self, e: Element) -> bool {
        self.visible_stems().any(|(_, s)| s.element() == e)
            || self
                .chart
                .present_branches()
                .any(|(_, b)| b.dominant().stem.element() == e)
    }

    /// Visible as a stem, or dominant in a branch for at least the strong
    /// day count.
    pub fn is_present_and_strong(&self, e: Element) -> bool {
        self.visible_stems().any(|(_, s)| s.element() == e)
            || self.chart.present_branches().any(|(_, b)| {
                let d = b.dominant();
                d.stem.element() == e && d.command_days >= self.weights.strong_dominant_days
            })
    }

    /// Rank-weighted command days of the reference element across the
    /// present branches.
    pub fn root_strength(&self) -> f64 {
        let e = self.element();
        self.chart
            .present_branches()
            .flat_map(|(_, b)| b.hidden_stems().iter())
            .filter(|entry| entry.stem.element() == e)
            .fold(0.0, |acc, entry| {
                acc + f64::from(entry.command_days) * rank_weight(entry.rank)
            })
    }
}

fn rank_weight(rank: HiddenRank) -> f64 {
    match rank {
        HiddenRank::Residual => ROOT_RANK_WEIGHTS[0],
        HiddenRank::Transitional => ROOT_RANK_WEIGHTS[1],
        HiddenRank::Dominant => ROOT_RANK_WEIGHTS[2],
    }
}
