//! Following: a practically rootless reference stem yields to the one
//! family that clearly leads the chart.

use pillars_core::constants::{CONFIDENCE_FOLLOWING_LIGHTLY_ROOTED, CONFIDENCE_FOLLOWING_ROOTLESS};
use pillars_core::relations::TenGodFamily;

use super::{PatternContext, PatternRule};
use crate::pattern::types::{FollowingKind, Integrity, PatternBasis, PatternResult, RuleId, SpecialPattern};

pub struct FollowingRule;

impl FollowingRule {
    /// Following score per family: visible non-reference stems plus the
    /// command days of each branch's dominant entry.
    pub fn family_scores(ctx: &PatternContext<'_>) -> [(FollowingKind, f64); 3] {
        let e = ctx.element();
        let stem_score = ctx.weights.following_stem_score;
        FollowingKind::ALL.map(|kind| {
            let family = kind.family();
            let stems: f64 = ctx
                .chart
                .other_stems()
                .filter(|(_, s)| TenGodFamily::of(e, s.element()) == family)
                .map(|_| stem_score)
                .sum();
            let branches: f64 = ctx
                .chart
                .present_branches()
                .map(|(_, b)| b.dominant())
                .filter(|d| TenGodFamily::of(e, d.stem.element()) == family)
                .map(|d| f64::from(d.command_days))
                .sum();
            (kind, stems + branches)
        })
    }
}

impl PatternRule for FollowingRule {
    fn id(&self) -> RuleId {
        RuleId::Following
    }

    fn name(&self) -> &'static str {
        "Following"
    }

    fn description(&self) -> &'static str {
        "Rootless reference with no strong resource follows a single dominant family"
    }

    fn evaluate(&self, ctx: &PatternContext<'_>) -> Option<PatternResult> {
        let root_strength = ctx.root_strength();
        if root_strength >= ctx.weights.rootless_threshold {
            return None;
        }

        let resource = ctx.element().generated_by();
        if ctx.is_present_and_strong(resource) {
            return None;
        }

        let mut scores = Self::family_scores(ctx);
        scores.sort_by(|a, b| b.1.total_cmp(&a.1));
        let (kind, top) = scores[0];
        let runner_up = scores[1].1;
        if top <= 0.0 || top < ctx.weights.following_dominance_ratio * runner_up {
            return None;
        }

        let rootless = root_strength == 0.0;
        let confidence = if rootless {
            CONFIDENCE_FOLLOWING_ROOTLESS
        } else {
            CONFIDENCE_FOLLOWING_LIGHTLY_ROOTED
        };
        let mut basis = PatternBasis::new(RuleId::Following, ctx.month_branch(), confidence);
        basis.element = Some(kind.family().element_for(ctx.element()));
        basis.root_strength = Some(root_strength);
        if !rootless {
            basis.integrity = Integrity::Broken;
            basis.notes.push(format!("reference keeps a light root ({root_strength:.1})"));
        }
        basis
            .notes
            .push(format!("leading score {top:.1} against runner-up {runner_up:.1}"));

        Some(PatternResult::Special {
            name: SpecialPattern::Following { kind },
            basis,
        })
    }
}
