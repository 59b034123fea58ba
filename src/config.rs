//! Source configuration
//!
//! The two reference pages have fixed, well-known addresses; the compiled-in
//! defaults point at them. An optional TOML file can override the addresses,
//! the user agent, and the request timeout, which the end-to-end tests use to
//! aim the pipeline at a mock server.

use crate::ConfigResult;
use serde::Deserialize;
use std::path::Path;

/// Default address of the pandemic-by-country-and-territory reference page
pub const DEFAULT_PANDEMIC_URL: &str =
    "https://en.wikipedia.org/wiki/2019%E2%80%9320_coronavirus_pandemic_by_country_and_territory";

/// Default address of the countries-by-population reference page
pub const DEFAULT_POPULATION_URL: &str =
    "https://en.wikipedia.org/wiki/List_of_countries_and_dependencies_by_population";

/// Addresses and fetch settings for the reference documents
#[derive(Debug, Clone, Deserialize)]
pub struct Sources {
    /// Pandemic-by-country-and-territory page
    #[serde(rename = "pandemic-url", default = "default_pandemic_url")]
    pub pandemic_url: String,

    /// Countries-by-population page
    #[serde(rename = "population-url", default = "default_population_url")]
    pub population_url: String,

    /// User agent sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_pandemic_url() -> String {
    DEFAULT_PANDEMIC_URL.to_string()
}

fn default_population_url() -> String {
    DEFAULT_POPULATION_URL.to_string()
}

fn default_user_agent() -> String {
    format!("PandemicReport/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Sources {
    fn default() -> Self {
        Sources {
            pandemic_url: default_pandemic_url(),
            population_url: default_population_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Sources {
    /// Loads source settings from a TOML file
    ///
    /// Missing keys fall back to the compiled-in defaults.
    pub fn load(path: &Path) -> ConfigResult<Sources> {
        let contents = std::fs::read_to_string(path)?;
        let sources: Sources = toml::from_str(&contents)?;
        sources.validate()?;
        Ok(sources)
    }

    /// Checks that both source addresses are absolute http(s) URLs
    fn validate(&self) -> ConfigResult<()> {
        for address in [&self.pandemic_url, &self.population_url] {
            match url::Url::parse(address) {
                Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {}
                _ => return Err(crate::ConfigError::InvalidUrl(address.clone())),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_reference_pages() {
        let sources = Sources::default();
        assert!(sources.pandemic_url.contains("coronavirus_pandemic"));
        assert!(sources.population_url.contains("by_population"));
        assert_eq!(sources.timeout_secs, 30);
    }

    #[test]
    fn test_load_partial_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sources.toml");
        std::fs::write(&path, "pandemic-url = \"https://example.com/pandemic\"\n").unwrap();

        let sources = Sources::load(&path).unwrap();
        assert_eq!(sources.pandemic_url, "https://example.com/pandemic");
        assert_eq!(sources.population_url, DEFAULT_POPULATION_URL);
    }

    #[test]
    fn test_load_rejects_non_http_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sources.toml");
        std::fs::write(&path, "population-url = \"ftp://example.com/pop\"\n").unwrap();

        assert!(Sources::load(&path).is_err());
    }
}
