use crate::model::QuarterlyDataPoint;
use crate::quarterly::types::{QuarterExtreme, SummaryStatistics};

/// Total, average, best and worst quarter over the valid points.
///
/// Returns `None` for an empty slice: there is no meaningful average or
/// extreme, and callers are expected to show a "no data" state instead. Ties
/// for best or worst resolve to the earliest point.
pub fn summarize(valid: &[&QuarterlyDataPoint]) -> Option<SummaryStatistics> {
    let (&first, rest) = valid.split_first()?;

    let total: f64 = valid.iter().map(|p| p.amount).sum();
    let count = valid.len();

    let mut best = first;
    let mut worst = first;
    for &p in rest {
        if p.amount > best.amount {
            best = p;
        }
        if p.amount < worst.amount {
            worst = p;
        }
    }

    Some(SummaryStatistics {
        total,
        average: total / count as f64,
        best: extreme(best),
        worst: extreme(worst),
        count,
    })
}

fn extreme(point: &QuarterlyDataPoint) -> QuarterExtreme {
    QuarterExtreme {
        amount: point.amount,
        label: point.quarter_label.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quarterly::test_support::point;

    #[test]
    fn test_summarize_empty_is_none() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_summarize_single_point() {
        let a = point(2024, 2, 80.0);
        let summary = summarize(&[&a]).unwrap();

        assert_eq!(summary.count, 1);
        assert_eq!(summary.total, 80.0);
        assert_eq!(summary.average, 80.0);
        assert_eq!(summary.best, summary.worst);
        assert_eq!(summary.best.label, "2024 Q2");
    }

    #[test]
    fn test_summarize_best_and_worst() {
        let a = point(2023, 1, 300.0);
        let b = point(2023, 2, 100.0);
        let c = point(2023, 3, 500.0);
        let d = point(2023, 4, 200.0);
        let summary = summarize(&[&a, &b, &c, &d]).unwrap();

        assert_eq!(summary.total, 1100.0);
        assert_eq!(summary.average, 275.0);
        assert_eq!(summary.best.amount, 500.0);
        assert_eq!(summary.best.label, "2023 Q3");
        assert_eq!(summary.worst.amount, 100.0);
        assert_eq!(summary.worst.label, "2023 Q2");
    }

    #[test]
    fn test_summarize_ties_pick_first() {
        let a = point(2022, 1, 100.0);
        let b = point(2023, 1, 100.0);
        let summary = summarize(&[&a, &b]).unwrap();

        assert_eq!(summary.best.label, "2022 Q1");
        assert_eq!(summary.worst.label, "2022 Q1");
    }
}
