//! Normal pattern: named after the ten god of the month's forming stem.

use pillars_core::constants::{CONFIDENCE_NORMAL_REVEALED, CONFIDENCE_NORMAL_UNREVEALED};
use pillars_core::relations::{career_seat, ten_god, twelve_stage};
use pillars_core::{Symbol, TenGod, Terrain, TwelveStage};

use super::{PatternContext, PatternRule};
use crate::pattern::types::{NormalPattern, PatternBasis, PatternResult, RuleId};

pub struct NormalRule;

impl PatternRule for NormalRule {
    fn id(&self) -> RuleId {
        RuleId::Normal
    }

    fn name(&self) -> &'static str {
        "Normal"
    }

    fn description(&self) -> &'static str {
        "Forming stem from the month branch's hidden stems, named by ten god"
    }

    fn evaluate(&self, ctx: &PatternContext<'_>) -> Option<PatternResult> {
        let reference = ctx.reference();
        let month = ctx.month_branch();
        let dominant = ctx.month_dominant().stem;
        let dominant_revealed = ctx.is_revealed(dominant);

        if !dominant_revealed && month.terrain() == Terrain::Vault {
            let mut reasons = vec![format!(
                "awaiting revealing: vault month {month} holds {dominant}, which no visible stem reveals"
            )];
            if ctx.hour_unknown {
                reasons.push(format!("hour pillar unknown; its stem could reveal {dominant}"));
            }
            return Some(PatternResult::Undeterminable { reasons });
        }

        let confidence = if dominant_revealed {
            CONFIDENCE_NORMAL_REVEALED
        } else {
            CONFIDENCE_NORMAL_UNREVEALED
        };
        let mut basis = PatternBasis::new(RuleId::Normal, month, confidence);
        basis.forming_stem = Some(dominant);
        basis.element = Some(dominant.element());
        basis.revealed = month
            .hidden_stems()
            .iter()
            .filter(|entry| ctx.is_revealed(entry.stem))
            .map(|entry| Symbol::Stem(entry.stem))
            .collect();
        if !dominant_revealed {
            basis
                .notes
                .push(format!("{dominant} forms from {month} without revealing"));
        }

        let name = match ten_god(reference, dominant) {
            TenGod::Companion if career_seat(reference) == month => NormalPattern::CareerSeat,
            TenGod::RobWealth
                if reference.polarity().is_yang()
                    && twelve_stage(reference, month) == TwelveStage::Peak =>
            {
                NormalPattern::BladeSeat
            }
            TenGod::RobWealth if !reference.polarity().is_yang() => NormalPattern::MonthlyPeer,
            god => NormalPattern::TenGod(god),
        };

        Some(PatternResult::Normal { name, basis })
    }
}
