//! Check results.
//!
//! A [`ResultSet`] holds the four buckets a run reports: errors, warnings,
//! passes and the log of applied fixes. Sets are append-only; the registry
//! concatenates the set of each check in execution order.

/// An error or warning produced by a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Human-readable message.
    pub message: String,
    /// Whether `--fix` can remediate this finding.
    pub fixable: bool,
}

impl Finding {
    /// Create a finding with no automated remediation.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fixable: false,
        }
    }

    /// Create a finding that `--fix` can remediate.
    pub fn fixable(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fixable: true,
        }
    }
}

/// Accumulated results of one or more checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    errors: Vec<Finding>,
    warnings: Vec<Finding>,
    passed: Vec<String>,
    fixed: Vec<String>,
}

impl ResultSet {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error.
    pub fn error(&mut self, finding: Finding) {
        self.errors.push(finding);
    }

    /// Record a warning.
    pub fn warning(&mut self, finding: Finding) {
        self.warnings.push(finding);
    }

    /// Record a pass.
    pub fn pass(&mut self, message: impl Into<String>) {
        self.passed.push(message.into());
    }

    /// Record an applied fix.
    pub fn fixed(&mut self, message: impl Into<String>) {
        self.fixed.push(message.into());
    }

    /// Append another set, preserving order.
    pub fn extend(&mut self, other: ResultSet) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.passed.extend(other.passed);
        self.fixed.extend(other.fixed);
    }

    /// Mark every error and warning as not fixable.
    pub fn clear_fixable(&mut self) {
        for finding in self.errors.iter_mut().chain(self.warnings.iter_mut()) {
            finding.fixable = false;
        }
    }

    /// All errors in order.
    pub fn errors(&self) -> &[Finding] {
        &self.errors
    }

    /// All warnings in order.
    pub fn warnings(&self) -> &[Finding] {
        &self.warnings
    }

    /// All pass messages in order.
    pub fn passed(&self) -> &[String] {
        &self.passed
    }

    /// All applied fixes in order.
    pub fn fixed_actions(&self) -> &[String] {
        &self.fixed
    }

    /// Whether any error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether any warning was recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Number of errors plus warnings.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Number of errors and warnings `--fix` could remediate.
    pub fn fixable_count(&self) -> usize {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .filter(|f| f.fixable)
            .count()
    }

    /// Whether a message appears in any bucket.
    pub fn mentions(&self, needle: &str) -> bool {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .any(|f| f.message.contains(needle))
            || self
                .passed
                .iter()
                .chain(self.fixed.iter())
                .any(|m| m.contains(needle))
    }
}
