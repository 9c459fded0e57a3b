//! Conventional entry point, for projects without a `package.json`.

use crate::checks::{Check, CheckContext, CheckId, CheckOutcome, Fact, Facts, Finding};
use crate::error::Result;

const ENTRY_POINTS: &[&str] = &[
    "index.js",
    "index.mjs",
    "index.ts",
    "main.js",
    "cli.js",
    "main.py",
    "__main__.py",
    "app.py",
    "main.go",
    "src/main.rs",
    "src/lib.rs",
    "src/index.js",
    "src/index.ts",
];

/// Looks for a recognizable entry file or a top-level shell script.
///
/// Skipped when a `package.json` was found, since the manifest check
/// already validates the declared entry points.
pub struct EntryPointCheck;

impl Check for EntryPointCheck {
    fn id(&self) -> CheckId {
        CheckId::new("entry-point")
    }

    fn name(&self) -> &str {
        "Entry point"
    }

    fn run(&self, cx: &CheckContext<'_>, facts: &Facts) -> Result<CheckOutcome> {
        let mut outcome = CheckOutcome::new();

        if facts.contains(Fact::ManifestPresent) {
            tracing::debug!("package.json present, skipping entry point check");
            return Ok(outcome);
        }

        let found = cx
            .fs
            .find_first(ENTRY_POINTS)
            .map(str::to_string)
            .or_else(|| {
                cx.fs
                    .top_level_files()
                    .into_iter()
                    .find(|name| name.ends_with(".sh"))
            });

        match found {
            Some(entry) => outcome
                .results
                .pass(format!("Entry point found: {}", entry)),
            None => outcome
                .results
                .warning(Finding::new("No entry point found")),
        }

        Ok(outcome)
    }
}
