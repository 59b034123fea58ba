//! Pandemic-Report: country-level pandemic statistics compiler
//!
//! This crate extracts per-country case and death counts from a pandemic
//! reference page, joins them with populations from a second reference page,
//! derives per-100,000 rates, fetches a descriptive paragraph per country,
//! and writes a flat text report.

pub mod config;
pub mod extract;
pub mod fetch;
pub mod report;
pub mod stats;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Pandemic-Report operations
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch failed for {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Statistics table not found (marker `{marker}`)")]
    TableMarkerMissing { marker: String },

    #[error("Malformed table row: {context}")]
    MalformedRow { context: String },

    #[error("No row matches `{pattern}`")]
    NotFound { pattern: String },

    #[error("Population must be positive, got {population}")]
    InvalidPopulation { population: u64 },

    #[error("Invalid search pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("Output file already exists: {path}")]
    OutputExists { path: PathBuf },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Pandemic-Report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Sources;
pub use extract::{extract_countries, first_paragraph, lookup_population, CountryEntry};
pub use report::{build_report_set, CountryReport, ReportOutcome, ReportSet};
pub use stats::per_hundred_thousand;
