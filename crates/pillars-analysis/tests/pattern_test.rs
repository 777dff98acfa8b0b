//! Tests for the pattern classifier.

use pillars_analysis::pattern::{
    FollowingKind, Integrity, NormalPattern, PatternClassifier, PatternContext, PatternResult,
    PatternRule, RuleId, SpecialPattern,
};
use pillars_analysis::{classify_pattern, EngineWeights};
use pillars_core::{Branch, Chart, ChartInput, Element, PillarInput, Stem, Symbol, TenGod};

fn chart(pillars: &str) -> Chart {
    let p: Vec<&str> = pillars.split_whitespace().collect();
    Chart::parse(p[0], p[1], p[2], p.get(3).copied().unwrap_or("-")).unwrap()
}

fn special(result: &PatternResult) -> SpecialPattern {
    match result {
        PatternResult::Special { name, .. } => *name,
        other => panic!("expected a special pattern, got {other:?}"),
    }
}

fn normal(result: &PatternResult) -> NormalPattern {
    match result {
        PatternResult::Normal { name, .. } => *name,
        other => panic!("expected a normal pattern, got {other:?}"),
    }
}

// ---- Dominance ----

#[test]
fn test_fire_dominance_intact() {
    let r = classify_pattern(&chart("甲寅 庚午 丙戌 甲午"), false);
    assert_eq!(special(&r), SpecialPattern::Dominance { element: Element::Fire });
    assert_eq!(special(&r).hanja(), "炎上格");
    let basis = r.basis().unwrap();
    assert_eq!(basis.rule, RuleId::Dominance);
    assert_eq!(basis.confidence, 90);
    assert_eq!(basis.integrity, Integrity::Intact);
    assert_eq!(
        basis.combined,
        vec![
            Symbol::Branch(Branch::Yin),
            Symbol::Branch(Branch::Wu),
            Symbol::Branch(Branch::Xu)
        ]
    );
}

#[test]
fn test_metal_dominance_broken_by_weak_fire() {
    let r = classify_pattern(&chart("壬申 己酉 庚戌 壬午"), false);
    assert_eq!(special(&r), SpecialPattern::Dominance { element: Element::Metal });
    let basis = r.basis().unwrap();
    assert_eq!(basis.integrity, Integrity::Broken);
    assert_eq!(basis.confidence, 90);
}

// ---- Transformation ----

#[test]
fn test_transformation_with_month_support() {
    let r = classify_pattern(&chart("戊戌 庚申 乙丑 辛酉"), false);
    assert_eq!(
        special(&r),
        SpecialPattern::Transformation {
            reference: Stem::Yi,
            partner: Stem::Geng,
            element: Element::Metal,
        }
    );
    assert_eq!(r.confidence(), 85);
    assert_eq!(special(&r).hanja(), "乙庚化金格");
}

#[test]
fn test_transformation_mismatch_falls_to_normal() {
    let r = classify_pattern(&chart("戊辰 庚寅 乙丑 辛巳"), false);
    assert_eq!(normal(&r), NormalPattern::MonthlyPeer);
    let basis = r.basis().unwrap();
    assert_eq!(basis.forming_stem, Some(Stem::Jia));
    assert_eq!(basis.confidence, 65);
    assert_eq!(basis.revealed, vec![Symbol::Stem(Stem::Wu)]);
}

// ---- Following ----

#[test]
fn test_rootless_follows_authority() {
    let r = classify_pattern(&chart("庚申 辛酉 甲申 庚午"), false);
    assert_eq!(special(&r), SpecialPattern::Following { kind: FollowingKind::Authority });
    let basis = r.basis().unwrap();
    assert_eq!(basis.confidence, 90);
    assert_eq!(basis.integrity, Integrity::Intact);
    assert_eq!(basis.root_strength, Some(0.0));
    assert_eq!(basis.element, Some(Element::Metal));
}

#[test]
fn test_light_root_lowers_following_confidence() {
    let c = chart("庚申 辛酉 甲申 庚辰");
    let r = classify_pattern(&c, false);
    assert_eq!(special(&r), SpecialPattern::Following { kind: FollowingKind::Authority });
    let basis = r.basis().unwrap();
    assert_eq!(basis.confidence, 70);
    assert_eq!(basis.integrity, Integrity::Broken);
    assert!((basis.root_strength.unwrap() - 2.7).abs() < 1e-9);

    // The only root sits in the hour branch.
    let unknown = classify_pattern(&c, true);
    assert_eq!(unknown.confidence(), 90);
    assert_eq!(unknown.basis().unwrap().root_strength, Some(0.0));
}

#[test]
fn test_strong_resource_blocks_following() {
    let r = classify_pattern(&chart("辛酉 丁酉 甲子 甲子"), false);
    assert_eq!(normal(&r), NormalPattern::TenGod(TenGod::DirectOfficer));
    let basis = r.basis().unwrap();
    assert_eq!(basis.confidence, 80);
    assert_eq!(basis.revealed, vec![Symbol::Stem(Stem::Xin)]);
}

// ---- Normal ----

#[test]
fn test_career_seat() {
    let r = classify_pattern(&chart("壬子 壬寅 甲午 丙寅"), false);
    assert_eq!(normal(&r), NormalPattern::CareerSeat);
    assert_eq!(r.confidence(), 80);
}

#[test]
fn test_blade_seat_for_yang_reference_at_peak() {
    let r = classify_pattern(&chart("甲子 庚午 丙申 戊子"), false);
    assert_eq!(normal(&r), NormalPattern::BladeSeat);
    let basis = r.basis().unwrap();
    assert_eq!(basis.forming_stem, Some(Stem::Ding));
    assert_eq!(basis.confidence, 65);
    assert_eq!(basis.revealed, vec![Symbol::Stem(Stem::Bing)]);
}

#[test]
fn test_revealed_rob_wealth_blade_seat() {
    let r = classify_pattern(&chart("庚申 庚酉 庚申 辛酉"), false);
    assert_eq!(normal(&r), NormalPattern::BladeSeat);
    assert_eq!(r.confidence(), 80);
}

#[test]
fn test_unrevealed_vault_month_is_undeterminable() {
    let c = chart("壬子 甲辰 甲寅 丙寅");
    match classify_pattern(&c, false) {
        PatternResult::Undeterminable { reasons } => {
            assert_eq!(reasons.len(), 1);
            assert!(reasons[0].starts_with("awaiting revealing"));
        }
        other => panic!("unexpected result {other:?}"),
    }
    match classify_pattern(&c, true) {
        PatternResult::Undeterminable { reasons } => {
            assert_eq!(reasons.len(), 2);
            assert!(reasons[1].contains("hour"));
        }
        other => panic!("unexpected result {other:?}"),
    }
}

// ---- Boundary ----

struct ExplodingRule;

impl PatternRule for ExplodingRule {
    fn id(&self) -> RuleId {
        RuleId::Dominance
    }

    fn name(&self) -> &'static str {
        "Exploding"
    }

    fn description(&self) -> &'static str {
        "Always panics"
    }

    fn evaluate(&self, _ctx: &PatternContext<'_>) -> Option<PatternResult> {
        panic!("table lookup failed");
    }
}

#[test]
fn test_panicking_rule_becomes_undeterminable() {
    let classifier =
        PatternClassifier::with_rules(vec![Box::new(ExplodingRule)], &EngineWeights::default());
    match classifier.classify(&chart("甲寅 庚午 丙戌 甲午"), false) {
        PatternResult::Undeterminable { reasons } => {
            assert!(reasons[0].starts_with("[RULE_PANIC]"));
            assert!(reasons[0].contains("table lookup failed"));
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn test_empty_rule_list_is_undeterminable() {
    let classifier = PatternClassifier::with_rules(Vec::new(), &EngineWeights::default());
    let r = classifier.classify(&chart("甲寅 庚午 丙戌 甲午"), false);
    assert!(!r.is_determined());
    assert_eq!(r.confidence(), 0);
}

#[test]
fn test_default_rule_order() {
    let ids: Vec<RuleId> = PatternClassifier::new().rules().iter().map(|r| r.id()).collect();
    assert_eq!(
        ids,
        vec![RuleId::Dominance, RuleId::Transformation, RuleId::Following, RuleId::Normal]
    );
}

#[test]
fn test_invalid_input_is_undeterminable() {
    let input = ChartInput {
        year: PillarInput::Ganji("甲子".to_string()),
        month: PillarInput::Ganji("丙Q".to_string()),
        day: PillarInput::Ganji("戊辰".to_string()),
        hour: None,
    };
    match PatternClassifier::new().classify_input(&input, false) {
        PatternResult::Undeterminable { reasons } => {
            assert!(reasons[0].starts_with("[CHART_ERROR]"));
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn test_pattern_is_idempotent() {
    let c = chart("庚申 辛酉 甲申 庚辰");
    assert_eq!(classify_pattern(&c, false), classify_pattern(&c, false));
}

#[test]
fn test_result_serializes_with_kind_tag() {
    let r = classify_pattern(&chart("甲寅 庚午 丙戌 甲午"), false);
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["kind"], "special");
    assert_eq!(json["name"]["pattern"], "dominance");
    let back: PatternResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, r);
}
