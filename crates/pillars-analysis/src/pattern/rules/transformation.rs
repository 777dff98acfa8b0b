//! Transformation: the reference stem combines with an adjacent month or
//! hour stem and the month supports the combined element.

use pillars_core::chart::Position;
use pillars_core::constants::CONFIDENCE_TRANSFORMATION;
use pillars_core::Symbol;

use super::{PatternContext, PatternRule};
use crate::interactions::tables::{stem_combination, stem_partner};
use crate::pattern::types::{PatternBasis, PatternResult, RuleId, SpecialPattern};

pub struct TransformationRule;

impl PatternRule for TransformationRule {
    fn id(&self) -> RuleId {
        RuleId::Transformation
    }

    fn name(&self) -> &'static str {
        "Transformation"
    }

    fn description(&self) -> &'static str {
        "Reference stem combines with the month or hour stem and the month supports the result"
    }

    fn evaluate(&self, ctx: &PatternContext<'_>) -> Option<PatternResult> {
        let reference = ctx.reference();
        let partner = stem_partner(reference);
        let element = stem_combination(reference, partner)?;
        if ctx.month_dominant().stem.element() != element {
            return None;
        }

        let position = [Position::Month, Position::Hour]
            .into_iter()
            .find(|p| ctx.chart.pillar(*p).is_some_and(|x| x.stem == partner))?;

        let mut basis = PatternBasis::new(
            RuleId::Transformation,
            ctx.month_branch(),
            CONFIDENCE_TRANSFORMATION,
        );
        basis.forming_stem = Some(partner);
        basis.element = Some(element);
        basis.combined = vec![Symbol::Stem(reference), Symbol::Stem(partner)];
        basis
            .notes
            .push(format!("{reference}{partner} combine with the {position} stem"));

        Some(PatternResult::Special {
            name: SpecialPattern::Transformation {
                reference,
                partner,
                element,
            },
            basis,
        })
    }
}
