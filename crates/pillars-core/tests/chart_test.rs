//! Tests for chart parsing and the hour sentinel.

use pillars_core::{Branch, Chart, ChartError, ChartInput, Pillar, Position, Stem};

#[test]
fn test_parse_glyph_chart() {
    let chart = Chart::parse("甲子", "丙寅", "戊辰", "庚申").unwrap();
    assert_eq!(chart.reference_stem(), Stem::Wu);
    assert_eq!(chart.month, Pillar::new(Stem::Bing, Branch::Yin));
    assert_eq!(chart.hour, Some(Pillar::new(Stem::Geng, Branch::Shen)));
}

#[test]
fn test_parse_romanized_pillars() {
    let p: Pillar = "Geng Shen".parse().unwrap();
    assert_eq!(p, Pillar::new(Stem::Geng, Branch::Shen));
    let p: Pillar = "ren-wu".parse().unwrap();
    assert_eq!(p, Pillar::new(Stem::Ren, Branch::Wu));
}

/// `"-"` and `""` mark an unknown hour.
#[test]
fn test_hour_sentinel() {
    for sentinel in ["-", "", "--", "  "] {
        let chart = Chart::parse("甲子", "丙寅", "戊辰", sentinel).unwrap();
        assert!(chart.hour.is_none());
        assert_eq!(chart.stems()[Position::Hour.index()], None);
        assert_eq!(chart.branches()[Position::Hour.index()], None);
        assert_eq!(chart.present_branches().count(), 3);
    }
}

#[test]
fn test_missing_required_pillar() {
    let err = Chart::parse("甲子", "-", "戊辰", "-").unwrap_err();
    assert_eq!(
        err,
        ChartError::MissingPillar {
            position: "month".to_string()
        }
    );
}

#[test]
fn test_unknown_symbol_is_positioned() {
    let err = Chart::parse("甲子", "丙寅", "戊X", "-").unwrap_err();
    match err {
        ChartError::InvalidPillar { position, .. } => assert_eq!(position, "day"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_chart_input_from_json() {
    let json = r#"{
        "year": "甲子",
        "month": { "stem": "bing", "branch": "yin" },
        "day": "戊辰"
    }"#;
    let input: ChartInput = serde_json::from_str(json).unwrap();
    let chart = Chart::try_from(input).unwrap();
    assert_eq!(chart.month, Pillar::new(Stem::Bing, Branch::Yin));
    assert!(!chart.has_hour());
}

#[test]
fn test_other_stems_skip_day() {
    let chart = Chart::parse("甲子", "丙寅", "戊辰", "庚申").unwrap();
    let others: Vec<_> = chart.other_stems().map(|(_, s)| s).collect();
    assert_eq!(others, vec![Stem::Jia, Stem::Bing, Stem::Geng]);
    assert_eq!(chart.without_hour().other_stems().count(), 2);
}

#[test]
fn test_display() {
    let chart = Chart::parse("甲子", "丙寅", "戊辰", "-").unwrap();
    assert_eq!(chart.to_string(), "甲子 丙寅 戊辰 --");
}
