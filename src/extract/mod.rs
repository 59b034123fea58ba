//! Extraction of statistics from the reference documents
//!
//! This module contains the document-side logic of the pipeline:
//! - locating the authoritative tables inside loosely-structured pages
//! - pulling per-country case/death rows and detail-page links
//! - looking up populations
//! - finding the first descriptive paragraph of a detail page
//!
//! All extraction is pure over already-fetched HTML; nothing here performs
//! I/O.

mod countries;
mod paragraph;
mod population;
mod table;

pub use countries::{extract_countries, CountryEntry, COUNTRY_PAGE_PREFIX, PANDEMIC_TABLE_MARKER};
pub use paragraph::first_paragraph;
pub use population::lookup_population;
pub use table::{cells_after_anchor, parse_count};
