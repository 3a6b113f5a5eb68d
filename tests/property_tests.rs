use proptest::prelude::*;
use roadscore::geometry::{haversine_m, GeoPoint};
use roadscore::lanes::{Metric, SideReadings, Span};
use roadscore::model::RawMeasurementRow;
use roadscore::scorer::aggregate::span_average;
use roadscore::scorer::engine::composite;
use roadscore::scorer::normalize::normalize;
use roadscore::scorer::{Scorer, QUALITY_WEIGHTS};
use strum::IntoEnumIterator;

// --- STRATEGIES ---

fn arb_reading() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        1 => Just(None::<f64>),
        1 => Just(Some(0.0)),
        4 => (-100.0..5000.0f64).prop_map(Some),
    ]
}

prop_compose! {
    fn arb_side_readings()(
        left in proptest::array::uniform4(arb_reading()),
        right in proptest::array::uniform4(arb_reading())
    ) -> SideReadings {
        SideReadings { left, right }
    }
}

prop_compose! {
    fn arb_row()(
        roughness in arb_side_readings(),
        rut_depth in arb_side_readings(),
        crack_area in arb_side_readings(),
        ravelling in arb_side_readings()
    ) -> RawMeasurementRow {
        let mut row = RawMeasurementRow::default();
        row.readings.roughness = roughness;
        row.readings.rut_depth = rut_depth;
        row.readings.crack_area = crack_area;
        row.readings.ravelling = ravelling;
        row
    }
}

prop_compose! {
    fn arb_point()(lat in -89.0..89.0f64, lon in -180.0..180.0f64) -> GeoPoint {
        GeoPoint::new(lat, lon)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_scores_stay_in_unit_range(row in arb_row()) {
        let seg = Scorer::new().unwrap().score_row(1, &row);
        for metric in Metric::iter() {
            for span in Span::iter() {
                let s = *seg.scores.get(metric).get(span);
                prop_assert!((0.0..=1.0).contains(&s), "{} {} score {}", metric, span, s);
            }
        }
        for span in Span::iter() {
            let q = *seg.quality.get(span);
            prop_assert!((-1e-9..=1.0 + 1e-9).contains(&q), "quality {}", q);
        }
    }

    #[test]
    fn test_quality_is_weighted_sum(row in arb_row()) {
        let seg = Scorer::new().unwrap().score_row(1, &row);
        for span in Span::iter() {
            let expected = seg.scores.get(Metric::Roughness).get(span) * 0.4
                + seg.scores.get(Metric::RutDepth).get(span) * 0.3
                + seg.scores.get(Metric::CrackArea).get(span) * 0.2
                + seg.scores.get(Metric::Ravelling).get(span) * 0.1;
            prop_assert_eq!(*seg.quality.get(span), expected);
        }
    }

    #[test]
    fn test_score_matches_normalized_average(readings in arb_side_readings()) {
        let avg = span_average(&readings, Span::Overall);
        let mut row = RawMeasurementRow::default();
        row.readings.rut_depth = readings;
        let seg = Scorer::new().unwrap().score_row(1, &row);
        prop_assert_eq!(seg.averages.rut_depth.overall, avg);
        prop_assert_eq!(seg.scores.rut_depth.overall, normalize(Metric::RutDepth, avg));
    }

    #[test]
    fn test_scoring_is_deterministic(row in arb_row()) {
        let scorer = Scorer::new().unwrap();
        let a = serde_json::to_string(&scorer.score_row(3, &row)).unwrap();
        let b = serde_json::to_string(&scorer.score_row(3, &row)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_composite_of_unit_scores_is_bounded(
        r in 0.0..=1.0f64, u in 0.0..=1.0f64, c in 0.0..=1.0f64, v in 0.0..=1.0f64
    ) {
        let scores = roadscore::lanes::ByMetric { roughness: r, rut_depth: u, crack_area: c, ravelling: v };
        let q = composite(&scores, &QUALITY_WEIGHTS);
        prop_assert!(q >= 0.0 && q <= 1.0 + 1e-9);
    }

    #[test]
    fn test_haversine_symmetric(a in arb_point(), b in arb_point()) {
        let ab = haversine_m(a, b);
        let ba = haversine_m(b, a);
        prop_assert!(ab >= 0.0);
        prop_assert!((ab - ba).abs() < 1e-6);
        // Half the circumference bounds every great-circle distance.
        prop_assert!(ab <= std::f64::consts::PI * 6_371_000.0 + 1e-3);
    }

    #[test]
    fn test_haversine_self_is_zero(a in arb_point()) {
        prop_assert_eq!(haversine_m(a, a), 0.0);
    }
}
