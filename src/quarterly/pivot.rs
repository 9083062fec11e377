use std::collections::{BTreeMap, BTreeSet};

use crate::model::QuarterlyDataPoint;
use crate::quarterly::types::{QuarterPivot, QuarterPivotRow};

/// Row order of the comparison table.
pub const QUARTERS: [u8; 4] = [1, 2, 3, 4];

/// Distinct years present in `valid`, ascending.
pub fn distinct_years(valid: &[&QuarterlyDataPoint]) -> Vec<i32> {
    valid
        .iter()
        .map(|p| p.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Reshapes the series into one row per quarter with a column per year.
///
/// All four quarters are always present, even with no data. If a (year,
/// quarter) pair occurs more than once the later point wins.
pub fn build_pivot(valid: &[&QuarterlyDataPoint]) -> QuarterPivot {
    let rows = QUARTERS
        .iter()
        .map(|&q| {
            let mut amounts = BTreeMap::new();
            for p in valid.iter().filter(|p| p.quarter == q) {
                amounts.insert(p.year, p.amount);
            }

            QuarterPivotRow {
                quarter: format!("Q{q}"),
                amounts,
            }
        })
        .collect();

    QuarterPivot {
        years: distinct_years(valid),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quarterly::test_support::point;

    #[test]
    fn test_empty_input_yields_four_empty_rows() {
        let pivot = build_pivot(&[]);

        assert!(pivot.years.is_empty());
        let labels: Vec<_> = pivot.rows.iter().map(|r| r.quarter.as_str()).collect();
        assert_eq!(labels, vec!["Q1", "Q2", "Q3", "Q4"]);
        assert!(pivot.rows.iter().all(|r| r.amounts.is_empty()));
    }

    #[test]
    fn test_years_sorted_ascending() {
        let a = point(2024, 1, 1.0);
        let b = point(2019, 3, 1.0);
        let c = point(2021, 2, 1.0);
        let d = point(2024, 2, 1.0);

        assert_eq!(distinct_years(&[&a, &b, &c, &d]), vec![2019, 2021, 2024]);
    }

    #[test]
    fn test_missing_year_is_absent_not_zero() {
        let a = point(2023, 1, 100.0);
        let b = point(2024, 2, 200.0);
        let pivot = build_pivot(&[&a, &b]);

        assert_eq!(pivot.years, vec![2023, 2024]);
        assert_eq!(pivot.rows[0].amount(2023), Some(100.0));
        assert_eq!(pivot.rows[0].amount(2024), None);
        assert_eq!(pivot.rows[1].amount(2024), Some(200.0));
        assert_eq!(pivot.rows[1].amount(2023), None);
    }

    #[test]
    fn test_out_of_range_quarter_is_not_pivoted() {
        let a = point(2023, 5, 100.0);
        let pivot = build_pivot(&[&a]);

        assert_eq!(pivot.years, vec![2023]);
        assert!(pivot.rows.iter().all(|r| r.amounts.is_empty()));
    }

    #[test]
    fn test_duplicate_pair_later_point_wins() {
        let a = point(2023, 3, 100.0);
        let b = point(2023, 3, 250.0);
        let pivot = build_pivot(&[&a, &b]);

        assert_eq!(pivot.rows[2].amount(2023), Some(250.0));
    }

    #[test]
    fn test_year_total_matches_column() {
        let points = [
            point(2023, 1, 10.0),
            point(2023, 2, 20.0),
            point(2023, 4, 30.0),
            point(2024, 1, 5.0),
        ];
        let refs: Vec<_> = points.iter().collect();
        let pivot = build_pivot(&refs);

        assert_eq!(pivot.year_total(2023), 60.0);
        assert_eq!(pivot.year_total(2024), 5.0);
        assert_eq!(pivot.year_total(2030), 0.0);
    }
}
