//! readycheck - Project readiness checklist runner.
//!
//! readycheck inspects a directory for the boilerplate a publishable
//! project is expected to carry (README, LICENSE, SKILL.md, git state,
//! `.gitignore`, a manifest and an entry point) and reports what passed,
//! what needs attention and what it fixed.
//!
//! # Modules
//!
//! - [`checks`] - The check trait, registry, built-in checks and results
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Resolved run configuration
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Filesystem and git probes over the target directory
//! - [`report`] - JSON and human-readable reports, exit status
//! - [`templates`] - Files written by `--fix`
//! - [`ui`] - Terminal styling
//!
//! # Example
//!
//! ```no_run
//! use readycheck::config::RunConfig;
//! use readycheck::report::Report;
//!
//! let config = RunConfig::new(std::path::Path::new(".")).unwrap();
//! let results = readycheck::run(&config).unwrap();
//! println!("exit code {}", Report::new(&config, &results).exit_code());
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod report;
pub mod templates;
pub mod ui;

pub use error::{ReadyError, Result};

use checks::{CheckContext, CheckRegistry, ResultSet};
use config::RunConfig;
use probe::{Git, ProjectFs};

/// Run the built-in checks against the configured directory using `git` on PATH.
pub fn run(config: &RunConfig) -> Result<ResultSet> {
    let fs = ProjectFs::new(&config.root);
    let git = Git::new(&config.root);
    let cx = CheckContext::new(&fs, &git, config);
    CheckRegistry::with_builtins().run(&cx)
}
