//! First-paragraph extraction from country detail pages
//!
//! Detail pages often open with empty placeholder paragraphs; the summary is
//! the first paragraph whose rendered text is not purely whitespace. An
//! absent paragraph is not a failure, the caller decides what to show.

use scraper::{Html, Selector};

/// Returns the first non-empty paragraph of the page, trimmed
pub fn first_paragraph(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("p").ok()?;

    document
        .select(&selector)
        .map(|p| p.text().collect::<String>())
        .find(|text| !text.trim().is_empty())
        .map(|text| text.trim().to_string())
}
