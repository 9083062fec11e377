//! Runtime configuration read from the environment (after `.env` is loaded).

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_LOG_FILE: &str = "logs/place_analysis.log";
pub const DEFAULT_QUARTERLY_SERIES: &str = "banktransaksjoner-2019-2025";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Root of the `analyser/`, `aktorer/` and `quarterly/` folders.
    pub data_dir: PathBuf,
    pub log_file: PathBuf,
    /// Series shown in the quarterly section of place reports.
    pub quarterly_series: String,
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            quarterly_series: DEFAULT_QUARTERLY_SERIES.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Reads `PLACE_DATA_DIR`, `LOG_FILE_PATH`, `PLACE_QUARTERLY_SERIES` and
    /// `PLACE_HTTP_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup. Empty values and
    /// unparseable timeouts count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            data_dir: get("PLACE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            log_file: get("LOG_FILE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
            quarterly_series: get("PLACE_QUARTERLY_SERIES").unwrap_or(defaults.quarterly_series),
            http_timeout: get("PLACE_HTTP_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
        }
    }
}
