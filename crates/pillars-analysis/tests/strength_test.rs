//! Tests for the strength classifier.

use pillars_analysis::force::ForceAggregator;
use pillars_analysis::strength::StrengthClassifier;
use pillars_analysis::{classify_strength, compute_force_matrix, StrengthLevel};
use pillars_core::chart::Position;
use pillars_core::{Chart, ChartInput, PillarInput};

fn chart(pillars: &str) -> Chart {
    let p: Vec<&str> = pillars.split_whitespace().collect();
    Chart::parse(p[0], p[1], p[2], p.get(3).copied().unwrap_or("-")).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_extreme_strong_metal_chart() {
    let c = chart("庚申 庚酉 庚申 辛酉");
    let r = classify_strength(&c, &compute_force_matrix(&c, None));
    assert!(r.seasonal_support);
    assert!(r.seat_support);
    assert_eq!(r.rootedness, 1.5);
    assert_eq!(r.root_position, Some(Position::Month));
    assert!(approx(r.seasonal_ratio, 1.0));
    let ally = 102.4 + 35.0 / 6.0;
    let opposition = 35.0 / 6.0;
    assert!(approx(r.ally_score, ally));
    assert!(approx(r.opposition_score, opposition));
    assert!(approx(r.index, ally * 1.5 - opposition + 15.0));
    assert_eq!(r.level, StrengthLevel::ExtremeStrong);
    assert!(r.error.is_none());
}

#[test]
fn test_extreme_weak_rootless_wood() {
    let c = chart("戊戌 庚申 乙丑 辛酉");
    let r = classify_strength(&c, &compute_force_matrix(&c, None));
    assert!(!r.seasonal_support);
    assert!(!r.seat_support);
    assert_eq!(r.rootedness, 1.0);
    assert_eq!(r.root_position, None);
    assert!(approx(r.ally_score, 11.5));
    assert!(approx(r.opposition_score, 148.5));
    assert!(approx(r.net_ally_score, -137.0));
    assert!(approx(r.index, -137.0));
    assert_eq!(r.level, StrengthLevel::ExtremeWeak);
}

#[test]
fn test_level_boundaries() {
    let c = StrengthClassifier::new();
    assert_eq!(c.level_for(40.0), StrengthLevel::ExtremeStrong);
    assert_eq!(c.level_for(39.9), StrengthLevel::Strong);
    assert_eq!(c.level_for(10.01), StrengthLevel::Strong);
    assert_eq!(c.level_for(10.0), StrengthLevel::Neutral);
    assert_eq!(c.level_for(-10.0), StrengthLevel::Neutral);
    assert_eq!(c.level_for(-10.01), StrengthLevel::Weak);
    assert_eq!(c.level_for(-39.9), StrengthLevel::Weak);
    assert_eq!(c.level_for(-40.0), StrengthLevel::ExtremeWeak);
}

#[test]
fn test_rootedness_uses_highest_position_weight() {
    // Only the year branch 亥 holds wood.
    let c = chart("癸亥 丙午 甲戌 庚申");
    let r = classify_strength(&c, &compute_force_matrix(&c, None));
    assert_eq!(r.rootedness, 1.1);
    assert_eq!(r.root_position, Some(Position::Year));
}

#[test]
fn test_missing_month_is_error_result() {
    let input = ChartInput {
        year: PillarInput::Ganji("甲子".to_string()),
        month: PillarInput::Ganji("-".to_string()),
        day: PillarInput::Ganji("戊辰".to_string()),
        hour: None,
    };
    let r = StrengthClassifier::new().classify_input(&input, &ForceAggregator::new());
    assert!(r.is_error());
    assert!(r.error.as_deref().unwrap().starts_with("[MISSING_PILLAR]"));
    assert!(!r.notes.is_empty());
}

#[test]
fn test_reference_mismatch_is_noted() {
    let a = chart("庚申 庚酉 庚申 辛酉");
    let b = chart("戊戌 庚申 乙丑 辛酉");
    let r = classify_strength(&a, &compute_force_matrix(&b, None));
    assert!(r.notes.iter().any(|n| n.starts_with("[ANALYSIS_ERROR]")));
}

#[test]
fn test_strength_is_idempotent() {
    let c = chart("甲寅 庚午 丙戌 甲午");
    let m = compute_force_matrix(&c, None);
    assert_eq!(classify_strength(&c, &m), classify_strength(&c, &m));
}
