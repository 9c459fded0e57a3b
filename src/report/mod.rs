//! Report rendering and exit status.
//!
//! A [`Report`] pairs a finished [`ResultSet`] with the settings that
//! affect presentation. [`Status`] and [`Report::exit_code`] are derived
//! identically for both output formats.

pub mod human;
pub mod json;

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::checks::ResultSet;
use crate::config::RunConfig;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

/// Overall outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Nothing fails the run.
    Ok,
    /// Warnings present and strict mode is on.
    Warning,
    /// At least one error.
    Error,
}

impl Status {
    /// Derive the status from results.
    pub fn from_results(results: &ResultSet, strict: bool) -> Self {
        if results.has_errors() {
            Self::Error
        } else if strict && results.has_warnings() {
            Self::Warning
        } else {
            Self::Ok
        }
    }

    /// Process exit code for this status.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Error => 1,
            Self::Warning => 2,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Ok => write!(f, "ok"),
            Status::Warning => write!(f, "warning"),
            Status::Error => write!(f, "error"),
        }
    }
}

/// Finished results plus the settings that shape the report.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    /// Directory that was checked.
    pub path: &'a Path,
    /// Results of every check.
    pub results: &'a ResultSet,
    /// Whether warnings fail the run.
    pub strict: bool,
    /// Whether fixes were applied.
    pub fix: bool,
}

impl<'a> Report<'a> {
    /// Build a report for a finished run.
    pub fn new(config: &'a RunConfig, results: &'a ResultSet) -> Self {
        Self {
            path: &config.root,
            results,
            strict: config.strict,
            fix: config.fix,
        }
    }

    /// Overall status.
    pub fn status(&self) -> Status {
        Status::from_results(self.results, self.strict)
    }

    /// Process exit code.
    pub fn exit_code(&self) -> u8 {
        self.status().exit_code()
    }
}

/// Trait for formatting a report.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &Report<'_>, writer: &mut W) -> std::io::Result<()>;
}

/// Render a report as JSON or human-readable text.
pub fn render(report: &Report<'_>, json: bool, use_color: bool) -> std::io::Result<String> {
    let mut output = Vec::new();
    if json {
        JsonFormatter::new().format(report, &mut output)?;
    } else {
        HumanFormatter::new(use_color).format(report, &mut output)?;
    }
    Ok(String::from_utf8_lossy(&output).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::Finding;

    fn with_warning() -> ResultSet {
        let mut results = ResultSet::new();
        results.pass("README.md exists (80 chars)");
        results.warning(Finding::new("SKILL.md is missing"));
        results
    }

    #[test]
    fn error_wins_regardless_of_strict() {
        let mut results = with_warning();
        results.error(Finding::fixable("No LICENSE file found"));
        assert_eq!(Status::from_results(&results, false), Status::Error);
        assert_eq!(Status::from_results(&results, true), Status::Error);
        assert_eq!(Status::Error.exit_code(), 1);
    }

    #[test]
    fn warnings_only_fail_under_strict() {
        let results = with_warning();
        assert_eq!(Status::from_results(&results, false), Status::Ok);
        assert_eq!(Status::from_results(&results, true), Status::Warning);
        assert_eq!(Status::Warning.exit_code(), 2);
    }

    #[test]
    fn clean_results_are_ok() {
        let mut results = ResultSet::new();
        results.pass("x");
        assert_eq!(Status::from_results(&results, true), Status::Ok);
        assert_eq!(Status::Ok.exit_code(), 0);
    }

    #[test]
    fn status_display_matches_serialized_form() {
        for status in [Status::Ok, Status::Warning, Status::Error] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }

    #[test]
    fn render_selects_format() {
        let results = with_warning();
        let report = Report {
            path: Path::new("/work/demo"),
            results: &results,
            strict: false,
            fix: false,
        };

        let json = render(&report, true, false).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());

        let human = render(&report, false, false).unwrap();
        assert!(human.contains("Warnings (1)"));
    }
}
