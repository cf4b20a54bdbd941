//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP and scraping behavior settings
    #[serde(default)]
    pub scraper: ScraperConfig,

    /// Catalog site layout
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Output file locations
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
        Url::parse(&self.catalog.base_url)
            .map_err(|e| AppError::validation(format!("catalog.base_url is invalid: {e}")))?;
        if self.catalog.programs_path.trim().is_empty() {
            return Err(AppError::validation("catalog.programs_path is empty"));
        }
        if self.output.dir.trim().is_empty() {
            return Err(AppError::validation("output.dir is empty"));
        }
        Ok(())
    }
}

/// HTTP client and scraping behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Delay between page requests in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            request_delay_ms: defaults::request_delay(),
        }
    }
}

/// Catalog site layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Root URL of the catalog site
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Path of the programs-of-study index page, relative to the base URL
    #[serde(default = "defaults::programs_path")]
    pub programs_path: String,

    /// Cap on the number of department pages to fetch (for test runs)
    #[serde(default)]
    pub department_limit: Option<usize>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            programs_path: defaults::programs_path(),
            department_limit: None,
        }
    }
}

/// Output file locations, all relative to `dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory all artifacts are written to
    #[serde(default = "defaults::output_dir")]
    pub dir: String,

    /// Raw catalog table
    #[serde(default = "defaults::catalog_file")]
    pub catalog_file: String,

    /// Deduplicated catalog table
    #[serde(default = "defaults::deduplicated_file")]
    pub deduplicated_file: String,

    /// Department statistics table
    #[serde(default = "defaults::departments_file")]
    pub departments_file: String,

    /// Plain-text summary report
    #[serde(default = "defaults::answers_file")]
    pub answers_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: defaults::output_dir(),
            catalog_file: defaults::catalog_file(),
            deduplicated_file: defaults::deduplicated_file(),
            departments_file: defaults::departments_file(),
            answers_file: defaults::answers_file(),
        }
    }
}

/// Default values for configuration fields.
mod defaults {
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; catalog-crawler/0.1)".to_string()
    }

    pub fn timeout() -> u64 {
        30
    }

    pub fn request_delay() -> u64 {
        1000
    }

    pub fn base_url() -> String {
        "http://collegecatalog.uchicago.edu/".to_string()
    }

    pub fn programs_path() -> String {
        "thecollege/programsofstudy/".to_string()
    }

    pub fn output_dir() -> String {
        "output".to_string()
    }

    pub fn catalog_file() -> String {
        "catalog.csv".to_string()
    }

    pub fn deduplicated_file() -> String {
        "deduplicated.csv".to_string()
    }

    pub fn departments_file() -> String {
        "departments.csv".to_string()
    }

    pub fn answers_file() -> String {
        "answers.txt".to_string()
    }
}
