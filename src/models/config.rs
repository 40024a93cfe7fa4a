//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// HTTP and scheduling behavior settings
    #[serde(default)]
    pub scraper: ScraperConfig,

    /// Output location and format
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.scraper.user_agent.trim().is_empty() {
            return Err(AppError::validation("scraper.user_agent is empty"));
        }
        if self.scraper.timeout_secs == 0 {
            return Err(AppError::validation("scraper.timeout_secs must be > 0"));
        }
        if self.scraper.max_concurrent == 0 {
            return Err(AppError::validation("scraper.max_concurrent must be > 0"));
        }
        Url::parse(&self.scraper.rankings_url).map_err(|e| {
            AppError::validation(format!("scraper.rankings_url is invalid: {e}"))
        })?;
        let base = Url::parse(&self.scraper.athlete_base_url).map_err(|e| {
            AppError::validation(format!("scraper.athlete_base_url is invalid: {e}"))
        })?;
        if !base.path().ends_with('/') {
            return Err(AppError::validation(
                "scraper.athlete_base_url must end with '/'",
            ));
        }
        if self.output.dir.as_os_str().is_empty() {
            return Err(AppError::validation("output.dir is empty"));
        }
        Ok(())
    }
}

/// HTTP client and scheduling settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Profiles fetched per batch
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,

    /// Rankings page URL
    #[serde(default = "defaults::rankings_url")]
    pub rankings_url: String,

    /// Prefix for athlete profile URLs
    #[serde(default = "defaults::athlete_base_url")]
    pub athlete_base_url: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
            rankings_url: defaults::rankings_url(),
            athlete_base_url: defaults::athlete_base_url(),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the export and the rankings listing
    #[serde(default = "defaults::output_dir")]
    pub dir: PathBuf,

    /// Export file format
    #[serde(default)]
    pub format: ExportFormat,

    /// Also write the plain-text rankings listing
    #[serde(default = "defaults::write_roster_listing")]
    pub write_roster_listing: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: defaults::output_dir(),
            format: ExportFormat::default(),
            write_roster_listing: defaults::write_roster_listing(),
        }
    }
}

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "json" => Ok(ExportFormat::Json),
            other => Err(AppError::config(format!(
                "unknown export format '{other}' (expected xlsx or json)"
            ))),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; fightstats/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn max_concurrent() -> usize {
        50
    }
    pub fn rankings_url() -> String {
        "https://www.ufc.com/rankings".into()
    }
    pub fn athlete_base_url() -> String {
        "https://www.ufc.com/athlete/".into()
    }
    pub fn output_dir() -> PathBuf {
        PathBuf::from("fighter_stats")
    }
    pub fn write_roster_listing() -> bool {
        true
    }
}
