//! Country row extraction from the pandemic statistics page
//!
//! The pandemic-by-country page carries one authoritative statistics table,
//! identified by a stable `id` marker. Country rows are found by scanning
//! the table's anchors: an anchor is a country row exactly when its visible
//! text matches the search pattern and its link target follows the
//! per-country detail page convention. Aggregate rows (continents, world
//! totals) link elsewhere and are excluded by that address filter.

use crate::extract::table::{cells_after_anchor, element_text, parse_count};
use crate::{ReportError, Result};
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

/// `id` attribute of the authoritative statistics table
pub const PANDEMIC_TABLE_MARKER: &str = "thetable";

/// Link-target prefix that marks an anchor as a per-country detail page
pub const COUNTRY_PAGE_PREFIX: &str = "/wiki/2020_coronavirus_pandemic_in_";

/// One matched country row from the statistics table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryEntry {
    /// Country display name (the anchor's visible text)
    pub name: String,

    /// Total confirmed cases
    pub cases: u64,

    /// Total deaths
    pub deaths: u64,

    /// Absolute address of the country's detail page
    pub detail_url: Url,
}

/// Extracts the country rows whose names match the given pattern
///
/// Rows appear in document order. The call has no side effects and yields
/// identical results for a fixed document.
///
/// # Arguments
///
/// * `html` - The pandemic reference page body
/// * `base_url` - Base address for resolving relative detail-page links
/// * `pattern` - Case-insensitive name pattern
///
/// # Returns
///
/// * `Ok(Vec<CountryEntry>)` - Matched rows, possibly empty
/// * `Err(ReportError::TableMarkerMissing)` - The statistics table is absent
/// * `Err(ReportError::MalformedRow)` - A matched row lacks the two numeric
///   cells; no partial entry is produced
pub fn extract_countries(
    html: &str,
    base_url: &Url,
    pattern: &Regex,
) -> Result<Vec<CountryEntry>> {
    let document = Html::parse_document(html);

    let table = Selector::parse(&format!("table#{}", PANDEMIC_TABLE_MARKER))
        .ok()
        .and_then(|selector| document.select(&selector).next())
        .ok_or_else(|| ReportError::TableMarkerMissing {
            marker: PANDEMIC_TABLE_MARKER.to_string(),
        })?;

    let mut entries = Vec::new();

    if let Ok(anchor_selector) = Selector::parse("a[href]") {
        for anchor in table.select(&anchor_selector) {
            let name = element_text(anchor);
            if name.is_empty() || !pattern.is_match(&name) {
                continue;
            }

            let Some(href) = anchor.value().attr("href") else {
                continue;
            };

            // Aggregate rows (continents, world totals) link elsewhere
            if !href.starts_with(COUNTRY_PAGE_PREFIX) {
                continue;
            }

            let cells = cells_after_anchor(anchor).ok_or_else(|| ReportError::MalformedRow {
                context: format!("`{}`: anchor is not inside a table row", name),
            })?;

            if cells.len() < 2 {
                return Err(ReportError::MalformedRow {
                    context: format!(
                        "`{}`: expected cases and deaths cells, found {}",
                        name,
                        cells.len()
                    ),
                });
            }

            let cases = parse_count(&cells[0], &format!("`{}` cases", name))?;
            let deaths = parse_count(&cells[1], &format!("`{}` deaths", name))?;
            let detail_url = base_url.join(href)?;

            tracing::debug!(
                "Matched country row: {} (cases={}, deaths={})",
                name,
                cases,
                deaths
            );

            entries.push(CountryEntry {
                name,
                cases,
                deaths,
                detail_url,
            });
        }
    }

    Ok(entries)
}
