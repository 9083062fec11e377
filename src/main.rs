//! CLI entry point for the place analysis reports.
//!
//! Provides subcommands for rendering a full place report, the quarterly
//! comparison of a single series, and the screenshot inventory of a report.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use place_analysis::{
    config::AppConfig,
    loader::{self, DataDir},
    output::{print_pretty, write_json, write_pivot_csv, write_yoy_csv},
    quarterly::QuarterlyReport,
    report::{PlaceReport, render_quarterly, render_screenshot_groups},
};
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "place-analysis")]
#[command(about = "Render place analysis reports from pre-computed JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the full report for a place analysis
    Report {
        /// Analysis id, e.g. "2024-arsrapport"
        #[arg(value_name = "ID")]
        id: String,

        /// Data directory (defaults to PLACE_DATA_DIR or "data")
        #[arg(short, long)]
        data_dir: Option<PathBuf>,

        /// Quarterly series name under <data-dir>/quarterly/
        #[arg(short, long)]
        quarterly: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Analyze a quarterly series from a file or URL
    Quarterly {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write the quarter comparison table to this CSV file
        #[arg(long)]
        pivot_csv: Option<PathBuf>,

        /// Write the series with YoY growth to this CSV file
        #[arg(long)]
        yoy_csv: Option<PathBuf>,
    },
    /// List the screenshots of a place analysis grouped by category
    Screenshots {
        #[arg(value_name = "ID")]
        id: String,

        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = config
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = config
        .log_file
        .file_name()
        .unwrap_or(OsStr::new("place_analysis.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        );

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(
            EnvFilter::builder()
                .with_env_var("RUST_LOG_JSON")
                .with_default_directive(LevelFilter::DEBUG.into())
                .from_env_lossy(),
        );

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            id,
            data_dir,
            quarterly,
            format,
        } => {
            let dir = DataDir::new(data_dir.unwrap_or_else(|| config.data_dir.clone()));
            let series_name = quarterly.unwrap_or_else(|| config.quarterly_series.clone());
            report(&dir, &id, &series_name, format).await?;
        }
        Commands::Quarterly {
            source,
            format,
            pivot_csv,
            yoy_csv,
        } => {
            let series = loader::load_quarterly(&source, config.http_timeout).await?;
            let report = QuarterlyReport::build(&series);
            print_pretty(&report);

            match format {
                OutputFormat::Text => print!("{}", render_quarterly(&report, &source)),
                OutputFormat::Json => write_json(std::io::stdout().lock(), &report)?,
            }

            if let Some(path) = pivot_csv {
                write_pivot_csv(&path, &report.pivot)?;
            }
            if let Some(path) = yoy_csv {
                write_yoy_csv(&path, &report.series)?;
            }
        }
        Commands::Screenshots { id, data_dir } => {
            let dir = DataDir::new(data_dir.unwrap_or_else(|| config.data_dir.clone()));
            let Some(analysis) = loader::load_analysis(&dir, &id).await? else {
                bail!("no analysis '{id}' in {}", dir.root().display());
            };
            print!("{}", render_screenshot_groups(&analysis.place_data.screenshots));
        }
    }

    std::io::stdout().flush().context("failed to flush stdout")?;
    Ok(())
}

/// Loads an analysis with its actor roster and quarterly series and renders
/// the full report.
#[tracing::instrument(skip(dir, format), fields(data_dir = %dir.root().display()))]
async fn report(dir: &DataDir, id: &str, series_name: &str, format: OutputFormat) -> Result<()> {
    let Some(analysis) = loader::load_analysis(dir, id).await? else {
        bail!("no analysis '{id}' in {}", dir.root().display());
    };

    let actors = loader::load_actors(dir, id).await;
    let series = loader::load_quarterly_from(dir, series_name).await?;
    let series_path = dir.quarterly_path(series_name)?;

    let report = PlaceReport::build(
        &analysis,
        actors.as_ref(),
        series.as_ref(),
        series_path.display().to_string(),
    );

    info!(
        sections = report.sections.len(),
        cards = report.cards.len(),
        has_actors = report.actors.is_some(),
        has_quarterly_data = report.quarterly.as_ref().is_some_and(|q| q.has_data()),
        "Report assembled"
    );

    match format {
        OutputFormat::Text => print!("{}", report.render()),
        OutputFormat::Json => write_json(std::io::stdout().lock(), &report)?,
    }
    Ok(())
}
