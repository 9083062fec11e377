use serde::{Deserialize, Serialize};

/// One quarter of a financial series. An `amount` of zero marks a quarter
/// that has not been collected yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterlyDataPoint {
    pub year: i32,
    pub quarter: u8,
    pub quarter_label: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_transaction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl QuarterlyDataPoint {
    /// Placeholder quarters carry `amount == 0` and are left out of every
    /// derived view.
    pub fn is_valid(&self) -> bool {
        self.amount > 0.0
    }
}

/// Descriptive header of a quarterly series document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesMetadata {
    pub title: String,
    pub period: String,
    pub area: String,
    pub currency: String,
    pub data_source: String,
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
}

/// An ordered quarterly series as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterlySeries {
    pub metadata: SeriesMetadata,
    pub data: Vec<QuarterlyDataPoint>,
}

impl QuarterlySeries {
    /// Points with a real amount, in input order.
    pub fn valid_points(&self) -> impl Iterator<Item = &QuarterlyDataPoint> {
        self.data.iter().filter(|p| p.is_valid())
    }
}
