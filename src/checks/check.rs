//! Check definitions.
//!
//! - [`Check`] - The trait that every readiness check implements
//! - [`CheckId`] - Unique identifier for a check
//! - [`CheckContext`] - Probes and configuration handed to each check
//! - [`CheckOutcome`] - Results and facts produced by one check

use std::collections::BTreeSet;

use super::result::ResultSet;
use crate::config::RunConfig;
use crate::error::Result;
use crate::probe::{ProjectFs, VersionControl};

/// Unique identifier for a check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckId(pub String);

impl CheckId {
    /// Create a new check ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Something an earlier check established for later checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Fact {
    /// A `package.json` exists, parseable or not.
    ManifestPresent,
}

/// Facts accumulated over a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facts(BTreeSet<Fact>);

impl Facts {
    /// Create an empty fact set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fact.
    pub fn insert(&mut self, fact: Fact) {
        self.0.insert(fact);
    }

    /// Whether a fact has been recorded.
    pub fn contains(&self, fact: Fact) -> bool {
        self.0.contains(&fact)
    }

    /// Merge another fact set into this one.
    pub fn extend(&mut self, other: Facts) {
        self.0.extend(other.0);
    }
}

/// What a single check produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Findings, passes and fixes.
    pub results: ResultSet,
    /// Facts for later checks.
    pub facts: Facts,
}

impl CheckOutcome {
    /// Create an empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// An outcome carrying only results.
    pub fn from_results(results: ResultSet) -> Self {
        Self {
            results,
            facts: Facts::new(),
        }
    }
}

/// Everything a check may inspect.
pub struct CheckContext<'a> {
    /// Filesystem access rooted at the target.
    pub fs: &'a ProjectFs,
    /// Version-control queries against the target.
    pub vcs: &'a dyn VersionControl,
    /// Resolved run settings.
    pub config: &'a RunConfig,
}

impl<'a> CheckContext<'a> {
    /// Bundle the probes and configuration for a run.
    pub fn new(fs: &'a ProjectFs, vcs: &'a dyn VersionControl, config: &'a RunConfig) -> Self {
        Self { fs, vcs, config }
    }

    /// Whether fixes should be applied.
    pub fn fix(&self) -> bool {
        self.config.fix
    }
}

/// A readiness check over the target directory.
///
/// Checks inspect the target through the [`CheckContext`] and return their
/// own [`CheckOutcome`]; they never see results of other checks, only the
/// [`Facts`] earlier checks produced. An `Err` is reserved for failures
/// that must stop the run, such as a failed write during a fix.
pub trait Check {
    /// Unique identifier for this check.
    fn id(&self) -> CheckId;

    /// Human-readable name of the check.
    fn name(&self) -> &str;

    /// Run the check.
    fn run(&self, cx: &CheckContext<'_>, facts: &Facts) -> Result<CheckOutcome>;

    /// Whether this check can fix what it finds.
    fn supports_fix(&self) -> bool {
        false
    }
}
