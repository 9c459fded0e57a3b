//! Run configuration.
//!
//! [`RunConfig`] is resolved once from the parsed [`Cli`] and is read-only
//! afterwards. Resolution validates the target path before any check runs.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::cli::Cli;
use crate::error::{ReadyError, Result};

fn canonical_root(path: &Path) -> anyhow::Result<PathBuf> {
    path.canonicalize()
        .with_context(|| format!("Failed to resolve {}", path.display()))
}

/// Resolved settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Canonical absolute path of the directory being checked.
    pub root: PathBuf,
    /// Emit the JSON report instead of the human one.
    pub json: bool,
    /// Apply fixes for fixable findings.
    pub fix: bool,
    /// Warnings make the run exit non-zero.
    pub strict: bool,
}

impl RunConfig {
    /// Resolve a configuration for the given target directory.
    pub fn new(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ReadyError::TargetNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_dir() {
            return Err(ReadyError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        let root = canonical_root(path)?;
        Ok(Self {
            root,
            json: false,
            fix: false,
            strict: false,
        })
    }

    /// Resolve from parsed command-line arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self::new(&cli.path)?
            .with_json(cli.json)
            .with_fix(cli.fix)
            .with_strict(cli.strict))
    }

    /// Set JSON output.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Set fix mode.
    pub fn with_fix(mut self, fix: bool) -> Self {
        self.fix = fix;
        self
    }

    /// Set strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
