//! Built-in checks.

mod entry_point;
mod git;
mod gitignore;
mod license;
mod manifest;
mod readme;
mod skill;

#[cfg(test)]
pub(crate) mod test_support;

pub use entry_point::EntryPointCheck;
pub use git::GitCheck;
pub use gitignore::GitignoreCheck;
pub use license::LicenseCheck;
pub use manifest::ManifestCheck;
pub use readme::ReadmeCheck;
pub use skill::SkillCheck;

/// Minimum length, in characters, of a README or SKILL descriptor.
pub const MIN_DOC_CHARS: usize = 50;
