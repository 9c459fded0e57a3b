//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. `--help` and `--version`
//! are handled by clap and exit before any check runs.

use clap::Parser;
use std::path::PathBuf;

/// readycheck - Check a project directory for release-ready boilerplate.
#[derive(Debug, Parser)]
#[command(name = "readycheck")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Exit codes:\n  0  all checks passed (warnings allowed)\n  1  at least one error\n  2  warnings present with --strict\n\nExamples:\n  readycheck\n  readycheck ./my-skill --fix\n  readycheck ./my-skill --json --strict")]
pub struct Cli {
    /// Directory to check
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Emit a machine-readable JSON report
    #[arg(short, long)]
    pub json: bool,

    /// Create missing README, LICENSE and .gitignore and initialize git
    #[arg(short, long)]
    pub fix: bool,

    /// Exit with code 2 when warnings are present
    #[arg(short, long, env = "READYCHECK_STRICT")]
    pub strict: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
