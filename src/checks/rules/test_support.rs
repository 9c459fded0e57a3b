//! Shared fixtures for check tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::checks::{Check, CheckContext, CheckOutcome, Facts};
use crate::config::RunConfig;
use crate::probe::{ProjectFs, VcsOutput, VersionControl};

/// Scripted version control. Unscripted commands are unavailable.
#[derive(Default)]
pub struct FakeVcs {
    responses: HashMap<String, VcsOutput>,
    calls: RefCell<Vec<String>>,
}

impl FakeVcs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, command: &str, output: VcsOutput) -> Self {
        self.responses.insert(command.to_string(), output);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl VersionControl for FakeVcs {
    fn run(&self, args: &[&str]) -> VcsOutput {
        let key = args.join(" ");
        self.calls.borrow_mut().push(key.clone());
        self.responses
            .get(&key)
            .cloned()
            .unwrap_or(VcsOutput::Unavailable)
    }
}

pub fn write(root: &Path, name: &str, content: &str) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

pub fn run_check(
    check: &dyn Check,
    temp: &TempDir,
    fix: bool,
    vcs: &dyn VersionControl,
    facts: &Facts,
) -> CheckOutcome {
    let config = RunConfig::new(temp.path()).unwrap().with_fix(fix);
    let fs = ProjectFs::new(&config.root);
    let cx = CheckContext::new(&fs, vcs, &config);
    check.run(&cx, facts).unwrap()
}

pub fn run_simple(check: &dyn Check, temp: &TempDir, fix: bool) -> CheckOutcome {
    run_check(check, temp, fix, &FakeVcs::new(), &Facts::new())
}

pub fn messages(findings: &[crate::checks::Finding]) -> Vec<String> {
    findings.iter().map(|f| f.message.clone()).collect()
}
