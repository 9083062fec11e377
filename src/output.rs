//! Output of derived views: debug logging, JSON and CSV export.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::quarterly::{QuarterPivot, QuarterlyReport, YoyPoint};

/// Logs a quarterly report using Rust's debug pretty-print format.
pub fn print_pretty(report: &QuarterlyReport<'_>) {
    debug!("{:#?}", report);
}

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(mut writer: W, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// One row of the year-over-year CSV export.
#[derive(Debug, Serialize)]
struct YoyRecord<'a> {
    year: i32,
    quarter: u8,
    quarter_label: &'a str,
    amount: f64,
    yoy_growth: Option<f64>,
}

/// Writes the annotated series to `path`, replacing any existing file.
/// Quarters without a baseline leave the `yoy_growth` cell empty.
pub fn write_yoy_csv(path: &Path, series: &[YoyPoint<'_>]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    for item in series {
        writer.serialize(YoyRecord {
            year: item.point.year,
            quarter: item.point.quarter,
            quarter_label: &item.point.quarter_label,
            amount: item.point.amount,
            yoy_growth: item.yoy_growth,
        })?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = series.len(), "Wrote YoY CSV");
    Ok(())
}

/// Writes the quarter comparison table: a `quarter` column followed by one
/// column per year. Missing (quarter, year) cells are left empty.
pub fn write_pivot_csv(path: &Path, pivot: &QuarterPivot) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    let mut header = vec!["quarter".to_string()];
    header.extend(pivot.years.iter().map(|y| y.to_string()));
    writer.write_record(&header)?;

    for row in &pivot.rows {
        let mut record = vec![row.quarter.clone()];
        record.extend(
            pivot
                .years
                .iter()
                .map(|&y| row.amount(y).map(|a| a.to_string()).unwrap_or_default()),
        );
        writer.write_record(&record)?;
    }
    writer.flush()?;

    info!(path = %path.display(), years = pivot.years.len(), "Wrote pivot CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quarterly::QuarterlyReport;
    use crate::quarterly::test_support::{point, series};
    use std::fs;

    #[test]
    fn test_print_pretty_does_not_panic() {
        let s = series(vec![point(2024, 1, 10.0)]);
        print_pretty(&QuarterlyReport::build(&s));
    }

    #[test]
    fn test_write_json_ends_with_newline() {
        let mut buf = Vec::new();
        write_json(&mut buf, &serde_json::json!({"a": 1})).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn test_write_pivot_csv_leaves_gaps_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("pivot.csv");
        let s = series(vec![
            point(2023, 1, 100.0),
            point(2024, 1, 150.0),
            point(2024, 2, 90.5),
        ]);
        let report = QuarterlyReport::build(&s);

        write_pivot_csv(&path, &report.pivot).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(
            lines,
            vec!["quarter,2023,2024", "Q1,100,150", "Q2,,90.5", "Q3,,", "Q4,,"]
        );
    }

    #[test]
    fn test_write_yoy_csv_rows() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("yoy.csv");
        let s = series(vec![point(2023, 1, 100.0), point(2024, 1, 150.0)]);
        let report = QuarterlyReport::build(&s);

        write_yoy_csv(&path, &report.series).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[0], "year,quarter,quarter_label,amount,yoy_growth");
        assert_eq!(lines[1], "2023,1,2023 Q1,100.0,");
        assert_eq!(lines[2], "2024,1,2024 Q1,150.0,50.0");
    }

    #[test]
    fn test_write_pivot_csv_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("pivot.csv");
        fs::write(&path, "stale\n").unwrap();

        let s = series(vec![]);
        write_pivot_csv(&path, &QuarterlyReport::build(&s).pivot).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        assert_eq!(content.lines().count(), 5);
    }
}
