//! Property tests over arbitrary charts.

use pillars_analysis::interactions::InteractionRecord;
use pillars_analysis::{
    analyze_chart, classify_pattern, classify_strength, compute_force_matrix, detect_interactions,
    AnalysisOptions, PatternResult,
};
use pillars_core::{Branch, Chart, Pillar, Stem};
use proptest::prelude::*;

fn arb_pillar() -> impl Strategy<Value = Pillar> {
    (0usize..10, 0usize..12).prop_map(|(s, b)| Pillar::new(Stem::from_index(s), Branch::from_index(b)))
}

fn arb_chart() -> impl Strategy<Value = Chart> {
    (arb_pillar(), arb_pillar(), arb_pillar(), proptest::option::of(arb_pillar()))
        .prop_map(|(y, m, d, h)| Chart::new(y, m, d, h))
}

fn arb_branches() -> impl Strategy<Value = Vec<Option<Branch>>> {
    proptest::collection::vec(proptest::option::weighted(0.85, (0usize..12).prop_map(Branch::from_index)), 4)
}

fn position_free(records: Vec<InteractionRecord>) -> Vec<InteractionRecord> {
    records
        .into_iter()
        .filter(|r| !r.interaction_type.is_positional())
        .collect()
}

fn slots(v: &[Option<Branch>]) -> [Option<Branch>; 4] {
    [v[0], v[1], v[2], v[3]]
}

proptest! {
    #[test]
    fn branch_order_does_not_change_position_free_records(
        (original, shuffled) in arb_branches().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let stems = [None; 4];
        let a = position_free(detect_interactions(&slots(&original), &stems, None));
        let b = position_free(detect_interactions(&slots(&shuffled), &stems, None));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn adjusted_scores_are_never_negative(chart in arb_chart()) {
        let m = compute_force_matrix(&chart, None);
        for (e, v) in m.scores.iter() {
            prop_assert!(v >= 0.0, "{} scored {}", e, v);
        }
        prop_assert!(m.total >= 0.0);
    }

    #[test]
    fn entry_points_are_idempotent(chart in arb_chart(), hour_unknown in any::<bool>()) {
        let m1 = compute_force_matrix(&chart, None);
        let m2 = compute_force_matrix(&chart, None);
        prop_assert_eq!(&m1, &m2);
        prop_assert_eq!(classify_strength(&chart, &m1), classify_strength(&chart, &m2));
        prop_assert_eq!(
            classify_pattern(&chart, hour_unknown),
            classify_pattern(&chart, hour_unknown)
        );
    }

    #[test]
    fn pattern_is_one_well_formed_variant(chart in arb_chart(), hour_unknown in any::<bool>()) {
        match classify_pattern(&chart, hour_unknown) {
            PatternResult::Undeterminable { reasons } => prop_assert!(!reasons.is_empty()),
            PatternResult::Special { basis, .. } | PatternResult::Normal { basis, .. } => {
                prop_assert!(basis.confidence > 0 && basis.confidence <= 100);
                prop_assert_eq!(basis.month_branch, chart.month.branch);
            }
        }
    }

    #[test]
    fn unknown_hour_matches_dropped_hour(chart in arb_chart()) {
        prop_assert_eq!(
            classify_pattern(&chart, true),
            classify_pattern(&chart.without_hour(), false)
        );
    }

    #[test]
    fn pipeline_never_panics(chart in arb_chart()) {
        let a = analyze_chart(&chart, &AnalysisOptions::default());
        prop_assert!(a.strength.index.is_finite());
    }
}
