//! Derived views produced by the quarterly transforms.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::QuarterlyDataPoint;

/// A valid data point annotated with its growth against the same quarter one
/// year earlier. `None` means there is no baseline, which is not the same as
/// zero growth.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YoyPoint<'a> {
    #[serde(flatten)]
    pub point: &'a QuarterlyDataPoint,
    pub yoy_growth: Option<f64>,
}

/// One quarter across all years. Years without data are absent from
/// `amounts`; they must be read as "no data", never as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuarterPivotRow {
    pub quarter: String,
    #[serde(flatten)]
    pub amounts: BTreeMap<i32, f64>,
}

impl QuarterPivotRow {
    pub fn amount(&self, year: i32) -> Option<f64> {
        self.amounts.get(&year).copied()
    }
}

/// Quarter-by-year comparison table. `rows` always holds Q1..Q4 in order and
/// `years` is the ascending column set shared by every row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuarterPivot {
    pub years: Vec<i32>,
    pub rows: Vec<QuarterPivotRow>,
}

impl QuarterPivot {
    /// Sum of a year's column.
    pub fn year_total(&self, year: i32) -> f64 {
        self.rows.iter().filter_map(|r| r.amount(year)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuarterExtreme {
    pub amount: f64,
    pub label: String,
}

/// Aggregate cards. Only defined for a non-empty set of valid points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub total: f64,
    pub average: f64,
    pub best: QuarterExtreme,
    pub worst: QuarterExtreme,
    pub count: usize,
}
