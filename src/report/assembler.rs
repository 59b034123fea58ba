//! Report set assembly
//!
//! The assembler fetches the pandemic page once, extracts the matching
//! country rows, fetches the population page once, then enriches each
//! country in extraction order. Failures for the two reference pages are
//! fatal for the run; per-country enrichment failures are isolated, the
//! country is skipped with a recorded reason and the rest of the batch
//! proceeds.

use crate::config::Sources;
use crate::extract::{extract_countries, first_paragraph, lookup_population, CountryEntry};
use crate::fetch::{fetch_document, FetchedPage};
use crate::stats::per_hundred_thousand;
use crate::{ReportError, Result};
use regex::RegexBuilder;
use reqwest::Client;

/// Shown in place of a summary when a detail page has no usable paragraph
pub const NO_SUMMARY_PLACEHOLDER: &str = "(no summary available)";

/// One fully-resolved country record, the unit written to output
#[derive(Debug, Clone, PartialEq)]
pub struct CountryReport {
    /// Country display name
    pub name: String,

    /// Population from the reference page
    pub population: u64,

    /// Total confirmed cases
    pub cases: u64,

    /// Total deaths
    pub deaths: u64,

    /// Cases per 100,000 people, one decimal
    pub cases_per_100k: f64,

    /// Deaths per 100,000 people, one decimal
    pub deaths_per_100k: f64,

    /// First descriptive paragraph of the country's detail page
    pub summary: String,
}

/// Ordered collection of country reports, unique by name, first match wins
#[derive(Debug, Default, Clone)]
pub struct ReportSet {
    entries: Vec<CountryReport>,
}

impl ReportSet {
    pub fn new() -> Self {
        ReportSet::default()
    }

    /// Inserts a report unless one with the same name is already present
    ///
    /// Returns whether the report was inserted.
    pub fn insert(&mut self, report: CountryReport) -> bool {
        if self.contains(&report.name) {
            return false;
        }
        self.entries.push(report);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|r| r.name == name)
    }

    /// Reports in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CountryReport> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A country that matched the search but could not be fully resolved
#[derive(Debug, Clone)]
pub struct Skipped {
    /// Country display name
    pub name: String,

    /// Why the country was left out of the report
    pub reason: String,
}

/// Result of one assembly run
#[derive(Debug)]
pub struct ReportOutcome {
    /// Fully-resolved reports, in extraction order
    pub reports: ReportSet,

    /// Countries skipped by the isolate-and-continue policy
    pub skipped: Vec<Skipped>,
}

/// Builds the full report set for a search term
///
/// # Arguments
///
/// * `client` - The HTTP client to use for every fetch
/// * `sources` - Reference page addresses
/// * `term` - Case-insensitive name pattern
///
/// # Returns
///
/// * `Ok(ReportOutcome)` - Reports plus any skipped countries
/// * `Err(ReportError)` - A reference page could not be fetched, the
///   statistics table is missing, a matched row is malformed, or the search
///   term is not a valid pattern
pub async fn build_report_set(
    client: &Client,
    sources: &Sources,
    term: &str,
) -> Result<ReportOutcome> {
    let pattern = RegexBuilder::new(term)
        .case_insensitive(true)
        .build()
        .map_err(|source| ReportError::InvalidPattern {
            pattern: term.to_string(),
            source,
        })?;

    // Both reference pages are run-fatal on failure
    let pandemic_page = fetch_document(client, &sources.pandemic_url).await?;
    let entries = extract_countries(&pandemic_page.body, &pandemic_page.url, &pattern)?;
    tracing::info!("Matched {} country rows for `{}`", entries.len(), term);

    if entries.is_empty() {
        return Ok(ReportOutcome {
            reports: ReportSet::new(),
            skipped: Vec::new(),
        });
    }

    let population_page = fetch_document(client, &sources.population_url).await?;

    let mut reports = ReportSet::new();
    let mut skipped = Vec::new();

    for entry in entries {
        if reports.contains(&entry.name) {
            tracing::debug!("Duplicate match for {}, first row wins", entry.name);
            continue;
        }

        match resolve_country(client, &population_page, &entry).await {
            Ok(report) => {
                reports.insert(report);
            }
            Err(e) => {
                tracing::warn!("Skipping {}: {}", entry.name, e);
                skipped.push(Skipped {
                    name: entry.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(ReportOutcome { reports, skipped })
}

/// Enriches one extracted row into a full report
///
/// Population lookup, rate computation, and the detail-page fetch can each
/// fail; the caller isolates the failure to this country. An absent
/// paragraph on a successfully fetched detail page is not a failure and is
/// replaced by [`NO_SUMMARY_PLACEHOLDER`].
async fn resolve_country(
    client: &Client,
    population_page: &FetchedPage,
    entry: &CountryEntry,
) -> Result<CountryReport> {
    let population = lookup_population(&population_page.body, &entry.name)?;
    let cases_per_100k = per_hundred_thousand(population, entry.cases)?;
    let deaths_per_100k = per_hundred_thousand(population, entry.deaths)?;

    let detail_page = fetch_document(client, entry.detail_url.as_str()).await?;
    let summary = first_paragraph(&detail_page.body)
        .unwrap_or_else(|| NO_SUMMARY_PLACEHOLDER.to_string());

    Ok(CountryReport {
        name: entry.name.clone(),
        population,
        cases: entry.cases,
        deaths: entry.deaths,
        cases_per_100k,
        deaths_per_100k,
        summary,
    })
}
