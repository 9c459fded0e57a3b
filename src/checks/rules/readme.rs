//! README presence and length.

use super::MIN_DOC_CHARS;
use crate::checks::{Check, CheckContext, CheckId, CheckOutcome, Facts, Finding};
use crate::error::Result;
use crate::templates;

const README: &str = "README.md";
const README_VARIANTS: &[&str] = &[README, "readme.md", "README"];

/// Requires a README with some content; `--fix` writes a starter README.
pub struct ReadmeCheck;

impl Check for ReadmeCheck {
    fn id(&self) -> CheckId {
        CheckId::new("readme")
    }

    fn name(&self) -> &str {
        "README"
    }

    fn supports_fix(&self) -> bool {
        true
    }

    fn run(&self, cx: &CheckContext<'_>, _facts: &Facts) -> Result<CheckOutcome> {
        let mut outcome = CheckOutcome::new();
        let results = &mut outcome.results;

        let Some(found) = cx.fs.find_first(README_VARIANTS) else {
            if cx.fix() {
                cx.fs.write(README, &templates::readme(&cx.fs.dir_name())?)?;
                tracing::info!("created {}", README);
                results.fixed(format!("Created {}", README));
            } else {
                results.error(Finding::fixable(format!("{} is missing", README)));
            }
            return Ok(outcome);
        };

        let len = cx.fs.read(found).map(|c| c.chars().count()).unwrap_or(0);
        if len >= MIN_DOC_CHARS {
            results.pass(format!("{} exists ({} chars)", found, len));
        } else {
            results.warning(Finding::new(format!(
                "{} is too short ({} chars, minimum {})",
                found, len, MIN_DOC_CHARS
            )));
        }

        Ok(outcome)
    }
}
