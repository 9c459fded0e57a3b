//! Terminal styling for the human-readable report.

pub mod icons;
pub mod theme;

pub use icons::StatusKind;
pub use theme::{should_use_colors, Theme};
