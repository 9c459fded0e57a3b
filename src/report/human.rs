//! Human-readable output formatter.
//!
//! Prints a header, one section per non-empty bucket, and a summary line.
//! Outside fix mode the summary is followed by a `--fix` tip counting the
//! fixable issues. Issues that `--fix` cannot remediate never produce the
//! tip, so a run whose only issues are unfixable ends at the summary.

use super::{Report, ReportFormatter};
use crate::checks::Finding;
use crate::ui::{StatusKind, Theme};
use std::io::Write;

const FIX_HINT: &str = "(fixable with --fix)";

/// Formats the report for terminal display.
pub struct HumanFormatter {
    /// Whether to use colors and icons.
    pub use_color: bool,
    theme: Theme,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            theme: Theme::for_color(use_color),
        }
    }

    fn line(&self, kind: StatusKind, msg: &str) -> String {
        if self.use_color {
            kind.format(&self.theme, msg)
        } else {
            kind.format_plain(msg)
        }
    }

    fn section<W: Write>(
        &self,
        writer: &mut W,
        title: &str,
        kind: StatusKind,
        lines: &[String],
    ) -> std::io::Result<()> {
        if lines.is_empty() {
            return Ok(());
        }
        writeln!(
            writer,
            "{}",
            self.theme
                .header
                .apply_to(format!("{} ({})", title, lines.len()))
        )?;
        for msg in lines {
            writeln!(writer, "  {}", self.line(kind, msg))?;
        }
        writeln!(writer)
    }

    fn with_hint(&self, findings: &[Finding]) -> Vec<String> {
        findings
            .iter()
            .map(|f| {
                if f.fixable {
                    format!("{} {}", f.message, self.theme.dim.apply_to(FIX_HINT))
                } else {
                    f.message.clone()
                }
            })
            .collect()
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &Report<'_>, writer: &mut W) -> std::io::Result<()> {
        let results = report.results;

        writeln!(
            writer,
            "{} {}",
            self.theme.header.apply_to("readycheck"),
            report.path.display()
        )?;
        writeln!(writer)?;

        self.section(writer, "Passed", StatusKind::Success, results.passed())?;
        self.section(writer, "Fixed", StatusKind::Fixed, results.fixed_actions())?;
        self.section(
            writer,
            "Warnings",
            StatusKind::Warning,
            &self.with_hint(results.warnings()),
        )?;
        self.section(
            writer,
            "Errors",
            StatusKind::Failed,
            &self.with_hint(results.errors()),
        )?;

        let passed = results.passed().len();
        let total = passed + results.issue_count();
        writeln!(writer, "{}/{} checks passed", passed, total)?;

        // Only fixable issues earn the tip.
        let fixable = results.fixable_count();
        if !report.fix && fixable > 0 {
            writeln!(
                writer,
                "{}",
                self.theme
                    .hint
                    .apply_to(format!("Run with --fix to fix {} issue(s)", fixable))
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::ResultSet;
    use std::path::Path;

    fn render(results: &ResultSet, fix: bool) -> String {
        let report = Report {
            path: Path::new("/work/demo"),
            results,
            strict: false,
            fix,
        };
        let mut output = Vec::new();
        HumanFormatter::new(false)
            .format(&report, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn mixed() -> ResultSet {
        let mut results = ResultSet::new();
        results.pass("README.md exists (80 chars)");
        results.pass(".gitignore exists");
        results.fixed("Initialized git repository");
        results.warning(Finding::new("SKILL.md is missing"));
        results.error(Finding::fixable("No LICENSE file found"));
        results
    }

    #[test]
    fn groups_sections_in_order() {
        let out = render(&mixed(), false);
        let passed = out.find("Passed (2)").unwrap();
        let fixed = out.find("Fixed (1)").unwrap();
        let warnings = out.find("Warnings (1)").unwrap();
        let errors = out.find("Errors (1)").unwrap();
        assert!(passed < fixed && fixed < warnings && warnings < errors);
        assert!(out.starts_with("readycheck /work/demo\n"));
    }

    #[test]
    fn marks_fixable_findings() {
        let out = render(&mixed(), false);
        assert!(out.contains("  [FAIL] No LICENSE file found (fixable with --fix)\n"));
        assert!(out.contains("  [warn] SKILL.md is missing\n"));
        assert!(out.contains("  [ok] .gitignore exists\n"));
        assert!(out.contains("  [fixed] Initialized git repository\n"));
    }

    #[test]
    fn summary_and_tip() {
        let out = render(&mixed(), false);
        assert!(out.contains("2/4 checks passed\n"));
        assert!(out.contains("Run with --fix to fix 1 issue(s)"));
    }

    #[test]
    fn no_tip_in_fix_mode() {
        let out = render(&mixed(), true);
        assert!(!out.contains("Run with --fix"));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let mut results = ResultSet::new();
        results.pass("Git repository found");
        let out = render(&results, false);
        assert!(!out.contains("Warnings"));
        assert!(!out.contains("Errors"));
        assert!(out.contains("1/1 checks passed"));
    }

    #[test]
    fn no_tip_when_nothing_is_fixable() {
        let mut results = ResultSet::new();
        results.warning(Finding::new("SKILL.md is missing"));
        results.error(Finding::new("package.json is missing \"name\""));
        let out = render(&results, false);
        assert!(out.trim_end().ends_with("0/2 checks passed"));
        assert!(!out.contains("Run with --fix"));
    }
}
