//! JSON output formatter.
//!
//! Formats the report as machine-readable JSON. Fixability flags are not
//! part of the JSON shape.

use super::{Report, ReportFormatter, Status};
use serde::Serialize;
use std::io::Write;

/// Formats the report as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    path: String,
    passed: usize,
    errors: Vec<&'a str>,
    warnings: Vec<&'a str>,
    fixed: &'a [String],
    status: Status,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &Report<'_>, writer: &mut W) -> std::io::Result<()> {
        let results = report.results;
        let output = JsonOutput {
            path: report.path.display().to_string(),
            passed: results.passed().len(),
            errors: results.errors().iter().map(|f| f.message.as_str()).collect(),
            warnings: results
                .warnings()
                .iter()
                .map(|f| f.message.as_str())
                .collect(),
            fixed: results.fixed_actions(),
            status: report.status(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
