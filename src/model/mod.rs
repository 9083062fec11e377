//! Data model for place analysis reports.
//!
//! JSON documents keep their original camelCase (and partly Norwegian) keys;
//! the Rust side uses English field names with serde renames.

pub mod actors;
pub mod analysis;
pub mod quarterly;

pub use actors::{Actor, ActorRoster, CategoryStat};
pub use analysis::{
    AnalysisMetadata, AnalysisStatus, AnalysisType, AreaDefinition, AreaKind, KeyMetrics,
    PlaceAnalysis, PlaceMetrics, ScreenshotCategory, ScreenshotData, TimePeriod,
};
pub use quarterly::{QuarterlyDataPoint, QuarterlySeries, SeriesMetadata};
