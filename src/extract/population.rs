//! Population lookup from the countries-by-population page
//!
//! The first table on the page is the ranked population table. The join
//! between the two reference pages is by country display name; the name is
//! matched case-insensitively as a literal, and the first structural match
//! wins. A country whose name is a substring of another's can therefore
//! false-join if the caller's name is not specific enough.

use crate::extract::table::{cells_after_anchor, element_text, parse_count};
use crate::{ReportError, Result};
use regex::RegexBuilder;
use scraper::{Html, Selector};

/// Looks up a country's population in the population reference page
///
/// # Arguments
///
/// * `html` - The population reference page body
/// * `country_name` - Display name to match, treated as a literal
///
/// # Returns
///
/// * `Ok(u64)` - Population from the cell after the first matching anchor
/// * `Err(ReportError::TableMarkerMissing)` - The page has no table
/// * `Err(ReportError::NotFound)` - No anchor matches the name
/// * `Err(ReportError::MalformedRow)` - The matched row's next cell is not
///   numeric
pub fn lookup_population(html: &str, country_name: &str) -> Result<u64> {
    let document = Html::parse_document(html);

    let table = Selector::parse("table")
        .ok()
        .and_then(|selector| document.select(&selector).next())
        .ok_or_else(|| ReportError::TableMarkerMissing {
            marker: "table".to_string(),
        })?;

    let pattern = RegexBuilder::new(&regex::escape(country_name))
        .case_insensitive(true)
        .build()
        .map_err(|source| ReportError::InvalidPattern {
            pattern: country_name.to_string(),
            source,
        })?;

    if let Ok(anchor_selector) = Selector::parse("a[href]") {
        for anchor in table.select(&anchor_selector) {
            let text = element_text(anchor);
            if !pattern.is_match(&text) {
                continue;
            }

            let cells = cells_after_anchor(anchor).ok_or_else(|| ReportError::MalformedRow {
                context: format!("`{}`: anchor is not inside a table row", text),
            })?;

            let Some(cell) = cells.first() else {
                return Err(ReportError::MalformedRow {
                    context: format!("`{}`: no cell follows the country anchor", text),
                });
            };

            return parse_count(cell, &format!("`{}` population", text));
        }
    }

    Err(ReportError::NotFound {
        pattern: country_name.to_string(),
    })
}
