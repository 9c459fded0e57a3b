//! Probes over the target directory.
//!
//! - [`ProjectFs`] - existence, read and write helpers joined against the root
//! - [`VersionControl`] - git queries with an explicit tri-state result

pub mod fs;
pub mod vcs;

pub use fs::ProjectFs;
pub use vcs::{Git, VcsOutput, VersionControl};
