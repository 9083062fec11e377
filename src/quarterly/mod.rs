//! Quarterly trend transforms.
//!
//! Placeholder quarters (`amount == 0`) are dropped first; every derived view
//! (year-over-year growth, the per-quarter comparison table and the summary
//! cards) is computed from the remaining points in input order.

pub mod growth;
pub mod pivot;
pub mod quality;
pub mod summary;
pub mod types;

use serde::Serialize;
use tracing::debug;

use crate::model::{QuarterlyDataPoint, QuarterlySeries, SeriesMetadata};
pub use types::{QuarterExtreme, QuarterPivot, QuarterPivotRow, SummaryStatistics, YoyPoint};

/// Points with `amount > 0`, in their original relative order.
pub fn valid_data(points: &[QuarterlyDataPoint]) -> Vec<&QuarterlyDataPoint> {
    points.iter().filter(|p| p.is_valid()).collect()
}

/// All derived views of one series.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterlyReport<'a> {
    pub metadata: &'a SeriesMetadata,
    pub series: Vec<YoyPoint<'a>>,
    pub pivot: QuarterPivot,
    /// `None` when the series has no valid quarters; callers render the
    /// "no data" state instead of summary cards.
    pub summary: Option<SummaryStatistics>,
}

impl<'a> QuarterlyReport<'a> {
    #[tracing::instrument(skip(series), fields(title = %series.metadata.title, points = series.data.len()))]
    pub fn build(series: &'a QuarterlySeries) -> Self {
        let valid = valid_data(&series.data);
        debug!(
            valid = valid.len(),
            placeholders = series.data.len() - valid.len(),
            "Filtered placeholder quarters"
        );

        let report = QuarterlyReport {
            metadata: &series.metadata,
            series: growth::with_yoy(&valid),
            pivot: pivot::build_pivot(&valid),
            summary: summary::summarize(&valid),
        };

        debug!(years = ?report.pivot.years, "Quarterly report built");
        report
    }

    pub fn has_data(&self) -> bool {
        !self.series.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::{QuarterlyDataPoint, QuarterlySeries, SeriesMetadata};

    pub fn point(year: i32, quarter: u8, amount: f64) -> QuarterlyDataPoint {
        QuarterlyDataPoint {
            year,
            quarter,
            quarter_label: format!("{year} Q{quarter}"),
            amount,
            transaction_count: None,
            average_transaction: None,
            note: None,
        }
    }

    pub fn series(data: Vec<QuarterlyDataPoint>) -> QuarterlySeries {
        QuarterlySeries {
            metadata: SeriesMetadata {
                title: "Card transactions".into(),
                period: "2019-2025".into(),
                area: "Grünerløkka".into(),
                currency: "NOK".into(),
                data_source: "Bank".into(),
                last_updated: "2025-03-01".into(),
                notes: None,
            },
            data,
        }
    }
}
