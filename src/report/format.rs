//! Summary-file rendering
//!
//! The boundary format is a flat text block per country: fixed field order,
//! numeric fields right-aligned to fixed widths, thousands separators on
//! integer counts, one decimal place on rates, then the descriptive
//! paragraph and a blank line. Field widths are part of the format contract.

use crate::report::assembler::{CountryReport, ReportSet};
use crate::{ReportError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Formats an integer with `,` thousands separators
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// Renders one country block in the summary-file format
pub fn format_block(report: &CountryReport) -> String {
    format!(
        "Country: {}\n\
         Population:{:>30}\n\
         Total Confirmed Cases:{:>19}\n\
         Total Deaths:{:>28}\n\
         Cases per 100,000 people:{:>18}\n\
         Deaths per 100,000 people:{:>17}\n\
         {}\n\n",
        report.name,
        group_thousands(report.population),
        group_thousands(report.cases),
        group_thousands(report.deaths),
        format!("{:.1}", report.cases_per_100k),
        format!("{:.1}", report.deaths_per_100k),
        report.summary,
    )
}

/// Renders the whole report set, blocks in insertion order
pub fn render_report(set: &ReportSet) -> String {
    set.iter().map(format_block).collect()
}

/// Name of the summary file for a search term
pub fn summary_filename(term: &str) -> String {
    format!("{}summary.txt", term)
}

/// Writes the report set to a fresh file
///
/// The file is created new; a pre-existing file of the same name fails the
/// run rather than being overwritten.
///
/// # Arguments
///
/// * `set` - The assembled report set
/// * `path` - Destination path
///
/// # Returns
///
/// * `Ok(PathBuf)` - The path written
/// * `Err(ReportError::OutputExists)` - A file of that name already exists
/// * `Err(ReportError::Io)` - Any other write failure
pub fn write_summary_file(set: &ReportSet, path: &Path) -> Result<PathBuf> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                ReportError::OutputExists {
                    path: path.to_path_buf(),
                }
            } else {
                ReportError::Io(e)
            }
        })?;

    file.write_all(render_report(set).as_bytes())?;
    tracing::info!("Wrote {} country blocks to {}", set.len(), path.display());

    Ok(path.to_path_buf())
}
