//! Tests for the combined analysis pipeline.

use std::fs;
use std::io;
use std::sync::{Arc, Mutex};

use pillars_analysis::pipeline::analyze_input;
use pillars_analysis::{analyze_batch, analyze_chart, AnalysisOptions, ChartAnalysis, StrengthLevel};
use pillars_core::{AnalysisError, Chart, ChartInput, PillarsConfig, Stem};
use tempfile::TempDir;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn chart(pillars: &str) -> Chart {
    let p: Vec<&str> = pillars.split_whitespace().collect();
    Chart::parse(p[0], p[1], p[2], p.get(3).copied().unwrap_or("-")).unwrap()
}

#[test]
fn test_analyze_chart_combines_stages() {
    let c = chart("戊戌 庚申 乙丑 辛酉");
    let a = analyze_chart(&c, &AnalysisOptions::default());
    assert_eq!(a.chart, c);
    assert_eq!(a.force.interactions.len(), 3);
    assert_eq!(a.strength.level, StrengthLevel::ExtremeWeak);
    assert_eq!(a.pattern.confidence(), 85);
}

#[test]
fn test_commanding_override_reaches_force() {
    let c = chart("戊戌 庚申 乙丑 辛酉");
    let options = AnalysisOptions::default().with_commanding_override(Stem::Geng);
    let a = analyze_chart(&c, &options);
    assert_eq!(a.force.commanding_override, Some(Stem::Geng));
    assert!((a.force.base_scores.metal - 60.5).abs() < 1e-9);
}

#[test]
fn test_hour_unknown_drops_hour_everywhere() {
    let c = chart("庚申 辛酉 甲申 庚辰");
    let a = analyze_chart(&c, &AnalysisOptions::default().hour_unknown());
    assert_eq!(a.chart, c);
    assert!(a.force.details.iter().all(|d| d.position != pillars_core::Position::Hour));
    assert_eq!(a.pattern.confidence(), 90);
}

#[test]
fn test_batch_preserves_order() {
    let charts = vec![
        chart("甲寅 庚午 丙戌 甲午"),
        chart("戊戌 庚申 乙丑 辛酉"),
        chart("壬子 甲辰 甲寅 丙寅"),
        chart("庚申 庚酉 庚申 辛酉"),
    ];
    let options = AnalysisOptions::default();
    let batch = analyze_batch(&charts, &options);
    assert_eq!(batch.len(), charts.len());
    for (c, a) in charts.iter().zip(&batch) {
        assert_eq!(*a, analyze_chart(c, &options));
    }
}

#[test]
fn test_analyze_input_rejects_missing_day() {
    let json = r#"{ "year": "甲子", "month": "丙寅", "day": "-" }"#;
    let input: ChartInput = serde_json::from_str(json).unwrap();
    let err = analyze_input(&input, &AnalysisOptions::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::Chart(_)));
}

#[test]
fn test_analysis_json_round_trip() {
    let a = analyze_chart(&chart("甲寅 庚午 丙戌 甲午"), &AnalysisOptions::default());
    let json = a.to_json().unwrap();
    let back: ChartAnalysis = serde_json::from_str(&json).unwrap();
    assert_eq!(back.pattern, a.pattern);
    assert_eq!(back.strength.level, a.strength.level);
}

#[test]
fn test_options_from_project_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    std::env::set_var("HOME", home.path());
    fs::write(
        project.path().join("pillars.toml"),
        "[strength]\nseasonal_bonus = 0.0\nseat_bonus = 0.0\n",
    )
    .unwrap();

    let config = PillarsConfig::load(project.path(), None).unwrap();
    let options = AnalysisOptions::from_config(&config);
    assert_eq!(options.weights.strength.seasonal_bonus, 0.0);

    let c = chart("庚申 庚酉 庚申 辛酉");
    let tuned = analyze_chart(&c, &options);
    let plain = analyze_chart(&c, &AnalysisOptions::default());
    assert!((plain.strength.index - tuned.strength.index - 15.0).abs() < 1e-9);
}

#[test]
fn test_tracing_init_is_repeatable() {
    pillars_core::tracing::init_tracing();
    pillars_core::tracing::init_tracing();
    let a = analyze_chart(&chart("甲寅 庚午 丙戌 甲午"), &AnalysisOptions::default());
    assert!(a.pattern.is_determined());
}

#[test]
fn test_report_covers_every_stage() {
    let a = analyze_chart(&chart("戊戌 庚申 乙丑 辛酉"), &AnalysisOptions::default());
    let text = a.to_string();
    assert!(text.starts_with("chart: 戊戌 庚申 乙丑 辛酉"));
    assert!(text.contains("interactions: 3 combinations, 0 clashes, 0 punishments"));
    assert!(text.contains("force matrix for 乙 (wood, yin)"));
    assert!(text.contains("strength: extreme_weak"));
    assert!(text.ends_with("(confidence 85)"));
}

#[test]
fn test_report_lists_undeterminable_reasons() {
    let options = AnalysisOptions::default().hour_unknown();
    let a = analyze_chart(&chart("壬子 甲辰 甲寅 丙寅"), &options);
    assert!(!a.pattern.is_determined());
    let text = a.to_string();
    assert!(text.contains("pattern: undeterminable"));
    assert!(text.contains("\n  reason: awaiting revealing"));
    assert_eq!(text.matches("\n  reason: ").count(), 2);
}

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_phase_spans_are_logged() {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        analyze_chart(&chart("戊戌 庚申 乙丑 辛酉"), &AnalysisOptions::default());
    });
    let text = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
    for phase in ["force_phase", "strength_phase", "pattern_phase"] {
        assert!(text.contains(phase), "missing {phase} in log:\n{text}");
    }
    assert!(text.contains("force phase done"));
    assert!(text.contains("strength phase done"));
    assert!(text.contains("pattern phase done"));
}
