//! Check registry.
//!
//! The [`CheckRegistry`] stores checks in registration order and runs them
//! one after another, concatenating their results.

use super::check::{Check, CheckContext, CheckId, Facts};
use super::result::ResultSet;
use super::rules::{
    EntryPointCheck, GitCheck, GitignoreCheck, LicenseCheck, ManifestCheck, ReadmeCheck,
    SkillCheck,
};
use crate::error::Result;

/// Ordered collection of checks.
pub struct CheckRegistry {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Create a registry with all built-in checks in their documented order.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ReadmeCheck));
        registry.register(Box::new(LicenseCheck));
        registry.register(Box::new(SkillCheck));
        registry.register(Box::new(GitCheck));
        registry.register(Box::new(GitignoreCheck));
        registry.register(Box::new(ManifestCheck));
        registry.register(Box::new(EntryPointCheck));
        registry
    }

    /// Append a check. A check with an already registered ID replaces it in place.
    pub fn register(&mut self, check: Box<dyn Check>) {
        let id = check.id();
        match self.checks.iter().position(|c| c.id() == id) {
            Some(index) => self.checks[index] = check,
            None => self.checks.push(check),
        }
    }

    /// Get a check by ID.
    pub fn get(&self, id: &CheckId) -> Option<&dyn Check> {
        self.checks
            .iter()
            .find(|c| &c.id() == id)
            .map(|c| c.as_ref())
    }

    /// Iterate over checks in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(|c| c.as_ref())
    }

    /// Get the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check in order and merge the results.
    ///
    /// Findings from a check that does not support fixes are never
    /// reported as fixable.
    pub fn run(&self, cx: &CheckContext<'_>) -> Result<ResultSet> {
        let mut results = ResultSet::new();
        let mut facts = Facts::new();

        for check in self.iter() {
            tracing::debug!("running check {} ({})", check.id(), check.name());
            let mut outcome = check.run(cx, &facts)?;
            if !check.supports_fix() {
                outcome.results.clear_fixable();
            }
            tracing::debug!(
                "check {} finished: {} error(s), {} warning(s)",
                check.id(),
                outcome.results.errors().len(),
                outcome.results.warnings().len()
            );
            results.extend(outcome.results);
            facts.extend(outcome.facts);
        }

        Ok(results)
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}
