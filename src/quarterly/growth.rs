use crate::model::QuarterlyDataPoint;
use crate::quarterly::types::YoyPoint;

/// Signed percentage change from `previous` to `current`.
pub fn yoy_growth(current: f64, previous: f64) -> f64 {
    (current - previous) / previous * 100.0
}

/// Annotates each valid point with growth against the same quarter of the
/// previous year.
///
/// The baseline is the first matching point in input order, so a duplicated
/// (year, quarter) pair still yields one deterministic value. Output order
/// follows the input.
pub fn with_yoy<'a>(valid: &[&'a QuarterlyDataPoint]) -> Vec<YoyPoint<'a>> {
    valid
        .iter()
        .map(|&current| {
            let previous = valid
                .iter()
                .find(|p| p.year == current.year - 1 && p.quarter == current.quarter);

            YoyPoint {
                point: current,
                yoy_growth: previous.map(|p| yoy_growth(current.amount, p.amount)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quarterly::test_support::point;

    #[test]
    fn test_yoy_growth_positive_and_negative() {
        assert_eq!(yoy_growth(150.0, 100.0), 50.0);
        assert_eq!(yoy_growth(75.0, 100.0), -25.0);
        assert_eq!(yoy_growth(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_with_yoy_without_baseline_is_none() {
        let a = point(2023, 2, 100.0);
        let b = point(2024, 3, 200.0);
        let result = with_yoy(&[&a, &b]);

        assert_eq!(result[0].yoy_growth, None);
        assert_eq!(result[1].yoy_growth, None);
    }

    #[test]
    fn test_with_yoy_matches_same_quarter_only() {
        let q1_2023 = point(2023, 1, 100.0);
        let q2_2023 = point(2023, 2, 400.0);
        let q2_2024 = point(2024, 2, 300.0);
        let result = with_yoy(&[&q1_2023, &q2_2023, &q2_2024]);

        assert_eq!(result[2].yoy_growth, Some(-25.0));
    }

    #[test]
    fn test_with_yoy_skips_gap_years() {
        let q1_2022 = point(2022, 1, 100.0);
        let q1_2024 = point(2024, 1, 300.0);
        let result = with_yoy(&[&q1_2022, &q1_2024]);

        assert_eq!(result[1].yoy_growth, None);
    }

    #[test]
    fn test_with_yoy_preserves_input_order() {
        let late = point(2024, 1, 120.0);
        let early = point(2023, 1, 100.0);
        let result = with_yoy(&[&late, &early]);

        assert_eq!(result[0].point.year, 2024);
        assert_eq!(result[1].point.year, 2023);
        assert!((result[0].yoy_growth.unwrap() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_with_yoy_duplicate_baseline_uses_first() {
        let first = point(2023, 4, 100.0);
        let duplicate = point(2023, 4, 200.0);
        let current = point(2024, 4, 150.0);
        let result = with_yoy(&[&first, &duplicate, &current]);

        assert_eq!(result[2].yoy_growth, Some(50.0));
    }
}
