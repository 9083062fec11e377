use place_analysis::loader::{self, DataDir};
use place_analysis::model::{ActorRoster, PlaceAnalysis, QuarterlySeries, ScreenshotCategory};
use place_analysis::quarterly::QuarterlyReport;
use place_analysis::report::{PlaceReport, render_quarterly};
use std::fs;
use std::time::Duration;

const ANALYSIS: &str = include_str!("fixtures/2024-arsrapport.json");
const SERIES: &str = include_str!("fixtures/banktransaksjoner.json");
const ACTORS: &str = include_str!("fixtures/aktorer-2024-arsrapport.json");

fn data_dir() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().unwrap();
    for folder in ["analyser", "aktorer", "quarterly"] {
        fs::create_dir_all(tmp.path().join(folder)).unwrap();
    }
    fs::write(tmp.path().join("analyser/2024-arsrapport.json"), ANALYSIS).unwrap();
    fs::write(tmp.path().join("aktorer/2024-arsrapport.json"), ACTORS).unwrap();
    fs::write(tmp.path().join("quarterly/banktransaksjoner.json"), SERIES).unwrap();
    tmp
}

#[test]
fn test_quarterly_fixture_pipeline() {
    let series: QuarterlySeries = serde_json::from_str(SERIES).unwrap();
    let report = QuarterlyReport::build(&series);

    // two 2025 placeholders are dropped
    assert_eq!(report.series.len(), 10);
    assert_eq!(report.pivot.years, vec![2022, 2023, 2024]);

    let q1_2023 = report
        .series
        .iter()
        .find(|p| p.point.quarter_label == "2023 Q1")
        .unwrap();
    assert!((q1_2023.yoy_growth.unwrap() - 10.0).abs() < 1e-9);

    let q2_2023 = report
        .series
        .iter()
        .find(|p| p.point.quarter_label == "2023 Q2")
        .unwrap();
    assert!(q2_2023.yoy_growth.unwrap() < 0.0);

    let q3 = &report.pivot.rows[2];
    assert_eq!(q3.amount(2024), None);
    assert_eq!(q3.amount(2023), Some(861_000_000.0));

    let summary = report.summary.as_ref().unwrap();
    assert_eq!(summary.count, 10);
    assert_eq!(summary.best.label, "2023 Q4");
    assert_eq!(summary.worst.label, "2022 Q1");
    assert_eq!(summary.average, summary.total / 10.0);

    let text = render_quarterly(&report, "fixtures/banktransaksjoner.json");
    assert!(text.contains("1.0B kr"));
    assert!(text.contains("2025 Q2 onwards not yet collected."));
    assert!(text.contains("updated 2.4.2025"));
}

#[test]
fn test_place_report_from_fixtures() {
    let analysis: PlaceAnalysis = serde_json::from_str(ANALYSIS).unwrap();
    let actors: ActorRoster = serde_json::from_str(ACTORS).unwrap();
    let series: QuarterlySeries = serde_json::from_str(SERIES).unwrap();

    let report = PlaceReport::build(&analysis, Some(&actors), Some(&series), "quarterly.json");

    let categories: Vec<_> = report.sections.iter().map(|s| s.category).collect();
    assert_eq!(
        categories,
        vec![
            ScreenshotCategory::Competition,
            ScreenshotCategory::CardSpending,
            ScreenshotCategory::Movement,
            ScreenshotCategory::Visitors,
            ScreenshotCategory::Development,
        ]
    );
    assert_eq!(report.cards.len(), 4);

    let text = report.render();
    assert!(text.contains("Grünerløkka, Oslo"));
    assert!(text.contains("Hero image: /images/analyser/2024/hero.jpg"));
    assert!(text.contains("62\u{a0}345"));
    assert!(text.contains("Actors (3)"));
    assert!(text.contains("Visitor counts are estimates"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["quarterly"]["pivot"]["rows"][0]["quarter"], "Q1");
    assert_eq!(json["sections"][0]["map"]["id"], "konkurranse-aktorer-kart");
}

#[tokio::test]
async fn test_loader_reads_data_directory() {
    let tmp = data_dir();
    let dir = DataDir::new(tmp.path());

    let analysis = loader::load_analysis(&dir, "2024-arsrapport")
        .await
        .unwrap()
        .expect("analysis present");
    assert_eq!(analysis.place_data.screenshots.len(), 8);

    let actors = loader::load_actors(&dir, "2024-arsrapport").await.unwrap();
    assert_eq!(actors.category_stats.len(), 3);

    let series = loader::load_quarterly_from(&dir, "banktransaksjoner")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(series.data.len(), 12);

    assert!(loader::load_analysis(&dir, "2023-arsrapport").await.unwrap().is_none());
    assert!(loader::load_actors(&dir, "2023-arsrapport").await.is_none());
}

#[tokio::test]
async fn test_load_quarterly_by_path_and_malformed() {
    let tmp = data_dir();
    let good = tmp.path().join("quarterly/banktransaksjoner.json");
    let series = loader::load_quarterly(good.to_str().unwrap(), Duration::from_secs(1))
        .await
        .unwrap();
    assert_eq!(series.metadata.currency, "NOK");

    let bad = tmp.path().join("quarterly/bad.json");
    fs::write(&bad, r#"{"metadata": {}, "data": []}"#).unwrap();
    let err = loader::load_quarterly(bad.to_str().unwrap(), Duration::from_secs(1))
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("malformed JSON"));
}
