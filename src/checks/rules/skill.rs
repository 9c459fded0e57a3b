//! SKILL descriptor presence and length.

use super::MIN_DOC_CHARS;
use crate::checks::{Check, CheckContext, CheckId, CheckOutcome, Facts, Finding};
use crate::error::Result;

const SKILL: &str = "SKILL.md";

/// Recommends a SKILL.md descriptor. Never an error and never fixed.
pub struct SkillCheck;

impl Check for SkillCheck {
    fn id(&self) -> CheckId {
        CheckId::new("skill")
    }

    fn name(&self) -> &str {
        "Skill descriptor"
    }

    fn run(&self, cx: &CheckContext<'_>, _facts: &Facts) -> Result<CheckOutcome> {
        let mut outcome = CheckOutcome::new();

        if !cx.fs.exists(SKILL) {
            outcome
                .results
                .warning(Finding::new(format!("{} is missing", SKILL)));
            return Ok(outcome);
        }

        let len = cx.fs.read(SKILL).map(|c| c.chars().count()).unwrap_or(0);
        if len >= MIN_DOC_CHARS {
            outcome
                .results
                .pass(format!("{} exists ({} chars)", SKILL, len));
        } else {
            outcome.results.warning(Finding::new(format!(
                "{} is too short ({} chars, minimum {})",
                SKILL, len, MIN_DOC_CHARS
            )));
        }

        Ok(outcome)
    }
}
