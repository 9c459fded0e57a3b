//! Boilerplate files written by `--fix`, embedded at compile time.

use include_dir::{include_dir, Dir};

use crate::error::{ReadyError, Result};

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Fallback copyright holder when git has no configured user.
pub const DEFAULT_AUTHOR: &str = "Author";

fn load(name: &str) -> Result<&'static str> {
    TEMPLATES_DIR
        .get_file(name)
        .and_then(|f| f.contents_utf8())
        .ok_or_else(|| ReadyError::MissingTemplate {
            name: name.to_string(),
        })
}

/// README with a heading for the project name.
pub fn readme(project_name: &str) -> Result<String> {
    Ok(load("README.md")?.replace("{name}", project_name))
}

/// Standard MIT license text.
pub fn mit_license(year: i32, author: &str) -> Result<String> {
    Ok(load("LICENSE-MIT")?
        .replace("{year}", &year.to_string())
        .replace("{author}", author))
}

/// Common ignore patterns.
pub fn gitignore() -> Result<String> {
    Ok(load("gitignore")?.to_string())
}
