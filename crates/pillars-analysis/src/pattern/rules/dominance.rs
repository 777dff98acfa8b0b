//! Dominance: the reference element commands the month and forms a full
//! branch combination, with no strong element against it.

use pillars_core::constants::CONFIDENCE_DOMINANCE;
use pillars_core::Symbol;

use super::{PatternContext, PatternRule};
use crate::interactions::tables::{DIRECTIONALS, TRINES};
use crate::pattern::types::{Integrity, PatternBasis, PatternResult, RuleId, SpecialPattern};

pub struct DominanceRule;

impl PatternRule for DominanceRule {
    fn id(&self) -> RuleId {
        RuleId::Dominance
    }

    fn name(&self) -> &'static str {
        "Dominance"
    }

    fn description(&self) -> &'static str {
        "Month dominant and a full trine or directional share the reference element"
    }

    fn evaluate(&self, ctx: &PatternContext<'_>) -> Option<PatternResult> {
        let e = ctx.element();
        if ctx.month_dominant().stem.element() != e {
            return None;
        }

        let unique = ctx.unique_branches();
        let set = DIRECTIONALS
            .iter()
            .chain(TRINES.iter())
            .find(|set| set.element == e && set.members.iter().all(|m| unique.contains(m)))?;

        let controller = e.dominated_by();
        if ctx.is_present_and_strong(controller) {
            return None;
        }

        let mut basis = PatternBasis::new(RuleId::Dominance, ctx.month_branch(), CONFIDENCE_DOMINANCE);
        basis.element = Some(e);
        basis.combined = set.members.iter().copied().map(Symbol::Branch).collect();
        if ctx.is_present(controller) {
            basis.integrity = Integrity::Broken;
            basis.notes.push(format!("{controller} is present but weak"));
        }

        Some(PatternResult::Special {
            name: SpecialPattern::Dominance { element: e },
            basis,
        })
    }
}
