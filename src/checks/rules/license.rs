//! License file presence.

use chrono::Datelike;

use crate::checks::{Check, CheckContext, CheckId, CheckOutcome, Facts, Finding};
use crate::error::Result;
use crate::probe::VersionControl;
use crate::templates::{self, DEFAULT_AUTHOR};

const LICENSE: &str = "LICENSE";
const LICENSE_VARIANTS: &[&str] = &[
    LICENSE,
    "LICENSE.md",
    "LICENSE.txt",
    "LICENCE",
    "license",
    "license.md",
];

/// Requires a license file; `--fix` writes the MIT license.
pub struct LicenseCheck;

/// Copyright holder for a generated license: git's `user.name`, else a placeholder.
pub fn resolve_author(vcs: &dyn VersionControl) -> String {
    vcs.run(&["config", "user.name"])
        .value()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_AUTHOR)
        .to_string()
}

impl Check for LicenseCheck {
    fn id(&self) -> CheckId {
        CheckId::new("license")
    }

    fn name(&self) -> &str {
        "License"
    }

    fn supports_fix(&self) -> bool {
        true
    }

    fn run(&self, cx: &CheckContext<'_>, _facts: &Facts) -> Result<CheckOutcome> {
        let mut outcome = CheckOutcome::new();

        if let Some(found) = cx.fs.find_first(LICENSE_VARIANTS) {
            outcome
                .results
                .pass(format!("License file found: {}", found));
            return Ok(outcome);
        }

        if cx.fix() {
            let year = chrono::Local::now().year();
            let author = resolve_author(cx.vcs);
            cx.fs.write(LICENSE, &templates::mit_license(year, &author)?)?;
            tracing::info!("created {} for {}", LICENSE, author);
            outcome
                .results
                .fixed(format!("Created {} (MIT, {}, {})", LICENSE, year, author));
        } else {
            outcome
                .results
                .error(Finding::fixable(format!("No {} file found", LICENSE)));
        }

        Ok(outcome)
    }
}
