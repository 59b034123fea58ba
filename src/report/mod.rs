//! Report assembly and output
//!
//! This module drives the pipeline end to end: extract matching country
//! rows, enrich each with population, rates, and a descriptive paragraph,
//! and render the ordered result into the flat summary-file format.

mod assembler;
mod format;

pub use assembler::{
    build_report_set, CountryReport, ReportOutcome, ReportSet, Skipped, NO_SUMMARY_PLACEHOLDER,
};
pub use format::{format_block, group_thousands, render_report, summary_filename, write_summary_file};
