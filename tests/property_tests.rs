//! Property-based checks of the quarterly transforms.

use place_analysis::model::QuarterlyDataPoint;
use place_analysis::quarterly::{growth, pivot, summary, valid_data};
use proptest::prelude::*;

fn point_strategy() -> impl Strategy<Value = QuarterlyDataPoint> {
    (
        2018..2027i32,
        1..=4u8,
        prop_oneof![Just(0.0), 1.0..5_000_000_000.0f64],
    )
        .prop_map(|(year, quarter, amount)| QuarterlyDataPoint {
            year,
            quarter,
            quarter_label: format!("{year} Q{quarter}"),
            amount,
            transaction_count: None,
            average_transaction: None,
            note: None,
        })
}

/// Series with at most one point per (year, quarter).
fn unique_series_strategy() -> impl Strategy<Value = Vec<QuarterlyDataPoint>> {
    prop::collection::vec(point_strategy(), 0..40).prop_map(|points| {
        let mut seen = std::collections::HashSet::new();
        points
            .into_iter()
            .filter(|p| seen.insert((p.year, p.quarter)))
            .collect()
    })
}

proptest! {
    #[test]
    fn filter_keeps_exactly_positive_amounts_in_order(points in prop::collection::vec(point_strategy(), 0..40)) {
        let valid = valid_data(&points);
        let expected: Vec<&QuarterlyDataPoint> = points.iter().filter(|p| p.amount > 0.0).collect();
        prop_assert_eq!(valid, expected);
    }

    #[test]
    fn yoy_is_none_without_baseline_and_exact_with_one(points in unique_series_strategy()) {
        let valid = valid_data(&points);
        for item in growth::with_yoy(&valid) {
            let baseline = valid
                .iter()
                .find(|p| p.year == item.point.year - 1 && p.quarter == item.point.quarter);
            match baseline {
                None => prop_assert!(item.yoy_growth.is_none()),
                Some(prev) => {
                    let expected = (item.point.amount - prev.amount) / prev.amount * 100.0;
                    let actual = item.yoy_growth.unwrap();
                    prop_assert!((actual - expected).abs() <= 1e-9 * expected.abs().max(1.0));
                }
            }
        }
    }

    #[test]
    fn pivot_has_four_rows_and_preserves_year_totals(points in unique_series_strategy()) {
        let valid = valid_data(&points);
        let table = pivot::build_pivot(&valid);

        let labels: Vec<_> = table.rows.iter().map(|r| r.quarter.clone()).collect();
        prop_assert_eq!(labels, vec!["Q1", "Q2", "Q3", "Q4"]);

        for &year in &table.years {
            let expected: f64 = valid.iter().filter(|p| p.year == year).map(|p| p.amount).sum();
            let actual = table.year_total(year);
            prop_assert!((actual - expected).abs() <= 1e-6 * expected.max(1.0));
        }
        prop_assert!(table.years.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn summary_bounds_hold(points in prop::collection::vec(point_strategy(), 0..40)) {
        let valid = valid_data(&points);
        match summary::summarize(&valid) {
            None => prop_assert!(valid.is_empty()),
            Some(stats) => {
                prop_assert_eq!(stats.count, valid.len());
                prop_assert_eq!(stats.average, stats.total / stats.count as f64);
                for p in &valid {
                    prop_assert!(stats.best.amount >= p.amount);
                    prop_assert!(stats.worst.amount <= p.amount);
                }
            }
        }
    }
}
