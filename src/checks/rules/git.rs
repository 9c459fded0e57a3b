//! Git repository state.

use crate::checks::{Check, CheckContext, CheckId, CheckOutcome, Facts, Finding};
use crate::error::Result;

const GIT_MARKER: &str = ".git";

/// Requires a git repository and reports remote and working-tree state.
///
/// Remote and status queries that fail are treated as unknown and produce
/// nothing, since a missing `git` binary looks the same as a broken repo.
pub struct GitCheck;

impl Check for GitCheck {
    fn id(&self) -> CheckId {
        CheckId::new("git")
    }

    fn name(&self) -> &str {
        "Git repository"
    }

    fn supports_fix(&self) -> bool {
        true
    }

    fn run(&self, cx: &CheckContext<'_>, _facts: &Facts) -> Result<CheckOutcome> {
        let mut outcome = CheckOutcome::new();
        let results = &mut outcome.results;

        if !cx.fs.exists(GIT_MARKER) {
            if !cx.fix() {
                results.error(Finding::fixable("Not a git repository"));
            } else if cx.vcs.run(&["init"]).is_value() {
                tracing::info!("initialized git repository");
                results.fixed("Initialized git repository");
            } else {
                tracing::warn!("git init failed in {}", cx.fs.root().display());
                results.error(Finding::new("Failed to initialize git repository"));
            }
            return Ok(outcome);
        }

        results.pass("Git repository found");

        if let Some(remotes) = cx.vcs.run(&["remote"]).value() {
            if remotes.trim().is_empty() {
                results.warning(Finding::new("No git remote configured"));
            } else {
                results.pass("Git remote configured");
            }
        }

        if let Some(status) = cx.vcs.run(&["status", "--porcelain"]).value() {
            let changes = status.lines().filter(|l| !l.trim().is_empty()).count();
            if changes == 0 {
                results.pass("Working tree clean");
            } else {
                results.warning(Finding::new(format!(
                    "{} uncommitted change(s)",
                    changes
                )));
            }
        }

        Ok(outcome)
    }
}
