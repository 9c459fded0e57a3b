//! Version-control probe.
//!
//! Git is consulted through the [`VersionControl`] trait so checks can be
//! exercised against a scripted fake. Every query yields a [`VcsOutput`],
//! which keeps "the command failed" apart from "the command answered".

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Outcome of a version-control query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsOutput {
    /// Command succeeded; holds its standard output.
    Value(String),
    /// Command ran but exited non-zero (`None` if killed by a signal).
    Failed { code: Option<i32> },
    /// Binary missing or could not be started.
    Unavailable,
}

impl VcsOutput {
    /// Standard output when the command succeeded.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Value(stdout) => Some(stdout.as_str()),
            _ => None,
        }
    }

    /// Whether the command succeeded.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

/// Runs version-control subcommands against the target directory.
pub trait VersionControl {
    /// Run a subcommand with the given arguments.
    fn run(&self, args: &[&str]) -> VcsOutput;
}

/// The `git` binary on PATH.
#[derive(Debug, Clone)]
pub struct Git {
    root: PathBuf,
    program: String,
}

impl Git {
    /// Create a git probe for the given repository root.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            program: "git".to_string(),
        }
    }

    /// Use a different executable (mainly for tests).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl VersionControl for Git {
    fn run(&self, args: &[&str]) -> VcsOutput {
        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        // Never discover a repository above the target.
        if let Some(parent) = self.root.parent() {
            cmd.env("GIT_CEILING_DIRECTORIES", parent);
        }

        let output = match cmd.output() {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("{} {:?} could not start: {}", self.program, args, e);
                return VcsOutput::Unavailable;
            }
        };

        if output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout).to_string();
            tracing::debug!("{} {:?} succeeded", self.program, args);
            VcsOutput::Value(stdout)
        } else {
            tracing::debug!(
                "{} {:?} exited with {:?}: {}",
                self.program,
                args,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
            VcsOutput::Failed {
                code: output.status.code(),
            }
        }
    }
}
