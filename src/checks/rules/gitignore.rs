//! `.gitignore` presence.

use crate::checks::{Check, CheckContext, CheckId, CheckOutcome, Facts, Finding};
use crate::error::Result;
use crate::templates;

const GITIGNORE: &str = ".gitignore";

/// Recommends a `.gitignore`; a missing one is a warning, not an error.
pub struct GitignoreCheck;

impl Check for GitignoreCheck {
    fn id(&self) -> CheckId {
        CheckId::new("gitignore")
    }

    fn name(&self) -> &str {
        "Ignore file"
    }

    fn supports_fix(&self) -> bool {
        true
    }

    fn run(&self, cx: &CheckContext<'_>, _facts: &Facts) -> Result<CheckOutcome> {
        let mut outcome = CheckOutcome::new();

        if cx.fs.exists(GITIGNORE) {
            outcome.results.pass(format!("{} exists", GITIGNORE));
        } else if cx.fix() {
            cx.fs.write(GITIGNORE, &templates::gitignore()?)?;
            tracing::info!("created {}", GITIGNORE);
            outcome.results.fixed(format!("Created {}", GITIGNORE));
        } else {
            outcome
                .results
                .warning(Finding::fixable(format!("{} is missing", GITIGNORE)));
        }

        Ok(outcome)
    }
}
