//! Plain-text rendering of place reports and quarterly comparisons.
//!
//! Section order follows the yearly report: header, key-metric cards,
//! screenshot galleries (with the actor listing under card spending), the
//! quarterly comparison, notes and a footer.

use serde::Serialize;
use std::fmt::{self, Write};

use crate::format::{format_count, format_currency, format_date, format_millions, format_percentage};
use crate::model::{ActorRoster, PlaceAnalysis, QuarterlySeries, ScreenshotCategory, ScreenshotData};
use crate::quarterly::QuarterlyReport;
use crate::screenshots::{Section, group_by_category, report_sections};

const RULE_WIDTH: usize = 72;
const MISSING_CELL: &str = "-";

/// A headline number shown at the top of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
    pub caption: String,
}

/// Cards for the key metrics that are present and non-zero.
pub fn metric_cards(analysis: &PlaceAnalysis) -> Vec<MetricCard> {
    let metrics = &analysis.place_data.key_metrics;
    let year = analysis.period.year;
    let present = |v: Option<f64>| v.filter(|&v| v != 0.0);

    let mut cards = Vec::new();
    if let Some(v) = present(metrics.population) {
        cards.push(MetricCard {
            label: "Population",
            value: format_count(v),
            caption: "Residents".into(),
        });
    }
    if let Some(v) = present(metrics.daily_traffic) {
        cards.push(MetricCard {
            label: "Daily traffic",
            value: format_count(v),
            caption: "Average".into(),
        });
    }
    if let Some(v) = present(metrics.visitors) {
        cards.push(MetricCard {
            label: "Visitors",
            value: format_count(v),
            caption: format!("Total {year}"),
        });
    }
    if let Some(v) = present(metrics.retail_turnover) {
        cards.push(MetricCard {
            label: "Retail turnover",
            value: format_millions(v),
            caption: format!("Total {year}"),
        });
    }
    cards
}

/// Everything shown on a place report page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceReport<'a> {
    pub analysis: &'a PlaceAnalysis,
    pub cards: Vec<MetricCard>,
    pub sections: Vec<Section<'a>>,
    pub actors: Option<&'a ActorRoster>,
    /// `None` when the series file does not exist yet.
    pub quarterly: Option<QuarterlyReport<'a>>,
    /// Where the quarterly series is expected; named in the "no data" notice.
    pub quarterly_source: String,
}

impl<'a> PlaceReport<'a> {
    pub fn build(
        analysis: &'a PlaceAnalysis,
        actors: Option<&'a ActorRoster>,
        quarterly: Option<&'a QuarterlySeries>,
        quarterly_source: impl Into<String>,
    ) -> Self {
        PlaceReport {
            analysis,
            cards: metric_cards(analysis),
            sections: report_sections(&analysis.place_data.screenshots),
            actors,
            quarterly: quarterly.map(QuarterlyReport::build),
            quarterly_source: quarterly_source.into(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) -> fmt::Result {
        let analysis = self.analysis;
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(out, "{rule}")?;
        writeln!(out, "{}", analysis.title)?;
        writeln!(out, "{}", analysis.area.display_name)?;
        writeln!(out, "{}", analysis.period.label)?;
        if let Some(hero) = &analysis.metadata.hero_image {
            writeln!(out, "Hero image: {hero}")?;
        }
        writeln!(out, "{rule}")?;

        if !self.cards.is_empty() {
            heading(out, "Key metrics")?;
            for card in &self.cards {
                writeln!(out, "  {:<18}{:>16}  {}", card.label, card.value, card.caption)?;
            }
        }

        for section in &self.sections {
            write_section(out, section)?;
            if section.category == ScreenshotCategory::CardSpending {
                if let Some(actors) = self.actors {
                    write_actors(out, actors)?;
                }
            }
        }

        match &self.quarterly {
            Some(report) => write_quarterly(out, report, &self.quarterly_source)?,
            None => {
                heading(out, "Quarterly transactions")?;
                write_no_data(out, &self.quarterly_source)?;
            }
        }

        if let Some(notes) = analysis.metadata.notes.as_ref().filter(|n| !n.is_empty()) {
            heading(out, "Notes")?;
            for note in notes {
                writeln!(out, "  - {note}")?;
            }
        }

        writeln!(out)?;
        writeln!(
            out,
            "Data sources: {} | Updated: {}",
            analysis.place_data.data_sources.join(", "),
            format_date(&analysis.metadata.last_updated)
        )
    }
}

fn heading(out: &mut String, title: &str) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", title.to_uppercase())?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

fn write_shot(out: &mut String, shot: &ScreenshotData) -> fmt::Result {
    writeln!(out, "  - {} [{}]", shot.description, shot.path)
}

fn write_section(out: &mut String, section: &Section<'_>) -> fmt::Result {
    heading(out, section.title)?;
    if let Some(map) = section.map {
        writeln!(out, "  Map: {} [{}]", map.description, map.path)?;
    }
    for shot in &section.gallery {
        write_shot(out, shot)?;
    }
    if section.is_empty() {
        writeln!(out, "  (no screenshots)")?;
    }
    Ok(())
}

fn write_actors(out: &mut String, roster: &ActorRoster) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "  Actors ({})", roster.actors.len())?;
    for stat in &roster.category_stats {
        writeln!(out, "    {:<24}{:>6}", stat.category, stat.count)?;
    }
    for actor in &roster.actors {
        if actor.category.is_empty() {
            writeln!(out, "    - {}", actor.name)?;
        } else {
            writeln!(out, "    - {} ({})", actor.name, actor.category)?;
        }
    }
    Ok(())
}

/// Renders only the quarterly comparison, as used by the `quarterly` command.
pub fn render_quarterly(report: &QuarterlyReport<'_>, source: &str) -> String {
    let mut out = String::new();
    let _ = write_quarterly(&mut out, report, source);
    out
}

fn write_no_data(out: &mut String, source: &str) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "  No data available yet")?;
    writeln!(out, "  Add quarterly transaction data to {source}")
}

fn write_quarterly(out: &mut String, report: &QuarterlyReport<'_>, source: &str) -> fmt::Result {
    let meta = report.metadata;
    heading(out, &meta.title)?;
    writeln!(out, "  {} | {} | {}", meta.area, meta.period, meta.currency)?;

    let Some(summary) = &report.summary else {
        return write_no_data(out, source);
    };

    writeln!(out)?;
    writeln!(out, "  Development over time")?;
    writeln!(out, "  {:<12}{:>18}{:>12}", "Quarter", "Amount", "YoY")?;
    for item in &report.series {
        writeln!(
            out,
            "  {:<12}{:>18}{:>12}",
            item.point.quarter_label,
            format_currency(item.point.amount),
            format_percentage(item.yoy_growth)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "  Same quarter across years")?;
    write!(out, "  {:<8}", "")?;
    for year in &report.pivot.years {
        write!(out, "{year:>16}")?;
    }
    writeln!(out)?;
    for row in &report.pivot.rows {
        write!(out, "  {:<8}", row.quarter)?;
        for &year in &report.pivot.years {
            let cell = row
                .amount(year)
                .map(format_currency)
                .unwrap_or_else(|| MISSING_CELL.to_string());
            write!(out, "{cell:>16}")?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(out, "  Key statistics")?;
    writeln!(
        out,
        "  Total:               {} ({} quarters)",
        format_currency(summary.total),
        summary.count
    )?;
    writeln!(
        out,
        "  Average per quarter: {}",
        format_currency(summary.average)
    )?;
    writeln!(
        out,
        "  Best quarter:        {} ({})",
        format_currency(summary.best.amount),
        summary.best.label
    )?;
    writeln!(
        out,
        "  Lowest quarter:      {} ({})",
        format_currency(summary.worst.amount),
        summary.worst.label
    )?;

    if let Some(notes) = &meta.notes {
        writeln!(out)?;
        for note in notes {
            writeln!(out, "  * {note}")?;
        }
    }
    writeln!(
        out,
        "  Source: {} (updated {})",
        meta.data_source,
        format_date(&meta.last_updated)
    )
}

/// Lists every screenshot grouped by category, in order of first appearance.
pub fn render_screenshot_groups(shots: &[ScreenshotData]) -> String {
    let mut out = String::new();
    for (category, members) in group_by_category(shots) {
        let _ = writeln!(out, "{} ({}, {})", category.title(), category.key(), members.len());
        for shot in members {
            let _ = writeln!(out, "  {:<32} {}", shot.id, shot.path);
        }
    }
    out
}
