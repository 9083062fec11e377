//! Data-quality checks run when a series is loaded. Issues are reported, not
//! rejected: the transforms have a defined result for each of them.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::model::QuarterlyDataPoint;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QualityIssue {
    QuarterOutOfRange { index: usize, quarter: u8 },
    DuplicateQuarter { year: i32, quarter: u8, count: usize },
    NegativeAmount { index: usize, amount: f64 },
}

impl fmt::Display for QualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuarterOutOfRange { index, quarter } => {
                write!(f, "point {index} has quarter {quarter}, expected 1-4")
            }
            Self::DuplicateQuarter {
                year,
                quarter,
                count,
            } => write!(f, "{year} Q{quarter} appears {count} times"),
            Self::NegativeAmount { index, amount } => {
                write!(f, "point {index} has negative amount {amount}")
            }
        }
    }
}

/// Collects issues in input order. Duplicates are reported once per pair and
/// only counted among points with a real amount.
pub fn check(points: &[QuarterlyDataPoint]) -> Vec<QualityIssue> {
    let mut issues = Vec::new();
    let mut seen: HashMap<(i32, u8), usize> = HashMap::new();
    let mut order = Vec::new();

    for (index, p) in points.iter().enumerate() {
        if !(1..=4).contains(&p.quarter) {
            issues.push(QualityIssue::QuarterOutOfRange {
                index,
                quarter: p.quarter,
            });
        }
        if p.amount < 0.0 {
            issues.push(QualityIssue::NegativeAmount {
                index,
                amount: p.amount,
            });
        }
        if p.is_valid() {
            let count = seen.entry((p.year, p.quarter)).or_default();
            *count += 1;
            if *count == 2 {
                order.push((p.year, p.quarter));
            }
        }
    }

    for (year, quarter) in order {
        issues.push(QualityIssue::DuplicateQuarter {
            year,
            quarter,
            count: seen[&(year, quarter)],
        });
    }

    issues
}
