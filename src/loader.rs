//! Loading of analysis, actor and quarterly documents from disk or HTTP.
//!
//! A source is read in full and parsed in one step; there is no partial or
//! streamed loading.

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::fetch::{BasicClient, fetch_bytes, is_remote};
use crate::model::{ActorRoster, PlaceAnalysis, QuarterlySeries};
use crate::quarterly::quality;

/// Layout of the data directory:
///
/// ```text
/// <root>/analyser/<id>.json     place analyses
/// <root>/aktorer/<id>.json      actor rosters
/// <root>/quarterly/<name>.json  quarterly series
/// ```
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn analysis_path(&self, id: &str) -> Result<PathBuf> {
        self.document_path("analyser", id)
    }

    pub fn actors_path(&self, id: &str) -> Result<PathBuf> {
        self.document_path("aktorer", id)
    }

    pub fn quarterly_path(&self, name: &str) -> Result<PathBuf> {
        self.document_path("quarterly", name)
    }

    fn document_path(&self, folder: &str, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.root.join(folder).join(format!("{name}.json")))
    }
}

/// Document names are single path components: no separators, no `..`.
fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        bail!("invalid document name '{name}'");
    }
    Ok(())
}

/// Loads raw bytes from a local path or, for `http(s)://` sources, over HTTP.
#[tracing::instrument(skip_all, fields(source = %source))]
pub async fn read_source(source: &str, timeout: Duration) -> Result<Vec<u8>> {
    let bytes = if is_remote(source) {
        let client = BasicClient::new(timeout)?;
        fetch_bytes(&client, source)
            .await
            .with_context(|| format!("failed to fetch {source}"))?
    } else {
        tokio::fs::read(source)
            .await
            .with_context(|| format!("failed to read {source}"))?
    };
    debug!(bytes = bytes.len(), "Source loaded");
    Ok(bytes)
}

pub fn parse_json<T: DeserializeOwned>(bytes: &[u8], source: &str) -> Result<T> {
    serde_json::from_slice(bytes).with_context(|| format!("malformed JSON in {source}"))
}

/// Reads a file, mapping "not found" to `Ok(None)`.
async fn read_optional(path: &Path) -> Result<Option<Vec<u8>>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Loads a quarterly series and logs any data-quality issues it contains.
pub async fn load_quarterly(source: &str, timeout: Duration) -> Result<QuarterlySeries> {
    let bytes = read_source(source, timeout).await?;
    let series: QuarterlySeries = parse_json(&bytes, source)?;
    report_quality(&series, source);
    Ok(series)
}

/// Loads a quarterly series from the data directory. A missing file is
/// `Ok(None)` so callers can show the "no data" state.
pub async fn load_quarterly_from(dir: &DataDir, name: &str) -> Result<Option<QuarterlySeries>> {
    let path = dir.quarterly_path(name)?;
    let source = path.display().to_string();

    let Some(bytes) = read_optional(&path).await? else {
        info!(path = %source, "Quarterly series not found");
        return Ok(None);
    };

    let series: QuarterlySeries = parse_json(&bytes, &source)?;
    report_quality(&series, &source);
    Ok(Some(series))
}

fn report_quality(series: &QuarterlySeries, source: &str) {
    let issues = quality::check(&series.data);
    for issue in &issues {
        warn!(source, issue = %issue, "Quarterly data quality issue");
    }
    info!(
        source,
        points = series.data.len(),
        valid = series.valid_points().count(),
        issues = issues.len(),
        "Quarterly series loaded"
    );
}

/// Loads `analyser/<id>.json`. `Ok(None)` when no such analysis exists.
#[tracing::instrument(skip(dir), fields(data_dir = %dir.root().display()))]
pub async fn load_analysis(dir: &DataDir, id: &str) -> Result<Option<PlaceAnalysis>> {
    let path = dir.analysis_path(id)?;
    let Some(bytes) = read_optional(&path).await? else {
        return Ok(None);
    };

    let analysis: PlaceAnalysis = parse_json(&bytes, &path.display().to_string())?;
    info!(
        title = %analysis.title,
        screenshots = analysis.place_data.screenshots.len(),
        "Place analysis loaded"
    );
    Ok(Some(analysis))
}

/// Loads the actor roster for an analysis. The report renders without it, so
/// every failure is logged and turned into `None`.
pub async fn load_actors(dir: &DataDir, id: &str) -> Option<ActorRoster> {
    let path = match dir.actors_path(id) {
        Ok(path) => path,
        Err(e) => {
            error!(error = %e, "Could not resolve actor roster path");
            return None;
        }
    };

    let bytes = match read_optional(&path).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            debug!(path = %path.display(), "No actor roster");
            return None;
        }
        Err(e) => {
            error!(error = %e, "Could not load actor roster");
            return None;
        }
    };

    match parse_json::<ActorRoster>(&bytes, &path.display().to_string()) {
        Ok(roster) => {
            debug!(actors = roster.actors.len(), "Actor roster loaded");
            Some(roster)
        }
        Err(e) => {
            let message = format!("{e:#}");
            warn!(error = %message, "Ignoring malformed actor roster");
            None
        }
    }
}
