//! Readiness checks.
//!
//! The check system consists of:
//!
//! - **Checks** - Independent inspections of the target ([`Check`] trait)
//! - **Registry** - Ordered collection of checks ([`CheckRegistry`])
//! - **Results** - Errors, warnings, passes and fixes ([`ResultSet`])
//!
//! # Example
//!
//! ```
//! use readycheck::checks::{CheckId, CheckRegistry};
//!
//! let registry = CheckRegistry::with_builtins();
//! assert_eq!(registry.iter().next().unwrap().id(), CheckId::new("readme"));
//! assert!(registry.get(&CheckId::new("entry-point")).is_some());
//! ```

pub mod check;
pub mod registry;
pub mod result;
pub mod rules;

pub use check::{Check, CheckContext, CheckId, CheckOutcome, Fact, Facts};
pub use registry::CheckRegistry;
pub use result::{Finding, ResultSet};
pub use rules::{
    EntryPointCheck, GitCheck, GitignoreCheck, LicenseCheck, ManifestCheck, ReadmeCheck,
    SkillCheck,
};
