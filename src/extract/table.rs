//! Table traversal helpers
//!
//! Both reference pages associate a matched anchor with numeric values held
//! in the cells that follow it within the same row. Rather than chasing
//! "next sibling" links through the tree, a row is modeled as an ordered
//! sequence of cells and fields are indexed by position, which makes the
//! fixed-schema assumption explicit.

use crate::{ReportError, Result};
use scraper::ElementRef;

/// Returns the text of the cells that follow the anchor's own cell, in row
/// order
///
/// The anchor's enclosing `td`/`th` is located first, then the enclosing
/// `tr`; the result is the trimmed text of every cell after the anchor's
/// cell. Returns `None` when the anchor is not inside a table row.
pub fn cells_after_anchor(anchor: ElementRef<'_>) -> Option<Vec<String>> {
    let mut anchor_cell = None;
    let mut row = None;

    for node in anchor.ancestors() {
        if let Some(element) = ElementRef::wrap(node) {
            match element.value().name() {
                "td" | "th" if anchor_cell.is_none() => anchor_cell = Some(element),
                "tr" => {
                    row = Some(element);
                    break;
                }
                _ => {}
            }
        }
    }

    let anchor_cell = anchor_cell?;
    let row = row?;

    // Cells of the row in document order
    let cells: Vec<ElementRef<'_>> = row
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "td" | "th"))
        .collect();

    let anchor_index = cells.iter().position(|cell| cell.id() == anchor_cell.id())?;

    Some(
        cells[anchor_index + 1..]
            .iter()
            .map(|cell| element_text(*cell))
            .collect(),
    )
}

/// Collects an element's visible text, trimmed
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Parses a numeric cell, stripping `,` thousands separators
///
/// # Arguments
///
/// * `text` - The cell text, e.g. `"1,234,567"`
/// * `context` - What the cell was expected to hold, used in the error
///
/// # Returns
///
/// * `Ok(u64)` - The parsed value
/// * `Err(ReportError::MalformedRow)` - The cell is not numeric
pub fn parse_count(text: &str, context: &str) -> Result<u64> {
    let stripped = text.trim().replace(',', "");
    stripped.parse::<u64>().map_err(|_| ReportError::MalformedRow {
        context: format!("{}: expected a number, got `{}`", context, text.trim()),
    })
}
