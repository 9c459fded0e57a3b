//! `package.json` validation, with fallbacks for other ecosystems.

use serde_json::Value;

use crate::checks::{Check, CheckContext, CheckId, CheckOutcome, Fact, Facts, Finding, ResultSet};
use crate::error::Result;

/// Manifest file this check validates in depth.
pub const PACKAGE_JSON: &str = "package.json";

/// Manifests of other ecosystems that count as a project descriptor.
const ALTERNATE_MANIFESTS: &[(&str, &str)] = &[
    ("Cargo.toml", "Rust"),
    ("go.mod", "Go"),
    ("pyproject.toml", "Python"),
    ("requirements.txt", "Python"),
    ("setup.py", "Python"),
];

/// A declared executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinEntry {
    /// Command name.
    pub name: String,
    /// Path relative to the project root.
    pub path: String,
}

/// The fields of `package.json` the check cares about.
///
/// Fields holding the wrong JSON type are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    /// Length of the `keywords` array.
    pub keywords: usize,
    pub author: Option<String>,
    pub main: Option<String>,
    pub bin: Vec<BinEntry>,
    pub scripts: Vec<String>,
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl PackageManifest {
    /// Parse manifest content. Only JSON syntax errors fail.
    pub fn parse(content: &str) -> std::result::Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(content)?;
        Ok(Self::from_value(&value))
    }

    fn from_value(value: &Value) -> Self {
        let name = non_empty_str(value.get("name"));

        let keywords = value
            .get("keywords")
            .and_then(Value::as_array)
            .map(Vec::len)
            .unwrap_or(0);

        // "author" is either "Name <email>" or { "name": ... }.
        let author = match value.get("author") {
            Some(Value::Object(person)) => non_empty_str(person.get("name")),
            other => non_empty_str(other),
        };

        let bin = match value.get("bin") {
            Some(Value::String(path)) => vec![BinEntry {
                name: name.clone().unwrap_or_else(|| "default".to_string()),
                path: path.clone(),
            }],
            Some(Value::Object(map)) => map
                .iter()
                .filter_map(|(cmd, path)| {
                    path.as_str().map(|p| BinEntry {
                        name: cmd.clone(),
                        path: p.to_string(),
                    })
                })
                .collect(),
            _ => Vec::new(),
        };

        let scripts = value
            .get("scripts")
            .and_then(Value::as_object)
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default();

        Self {
            name,
            version: non_empty_str(value.get("version")),
            description: non_empty_str(value.get("description")),
            keywords,
            author,
            main: non_empty_str(value.get("main")),
            bin,
            scripts,
        }
    }
}

/// Validates `package.json`, or accepts another ecosystem's manifest.
pub struct ManifestCheck;

impl ManifestCheck {
    fn check_fields(manifest: &PackageManifest, results: &mut ResultSet) {
        match &manifest.name {
            Some(name) => results.pass(format!("Package name: {}", name)),
            None => results.error(Finding::new(format!("{} is missing \"name\"", PACKAGE_JSON))),
        }
        match &manifest.version {
            Some(version) => results.pass(format!("Package version: {}", version)),
            None => results.error(Finding::new(format!(
                "{} is missing \"version\"",
                PACKAGE_JSON
            ))),
        }

        if manifest.description.is_some() {
            results.pass("Has description");
        } else {
            results.warning(Finding::new(format!(
                "{} is missing \"description\"",
                PACKAGE_JSON
            )));
        }
        if manifest.keywords == 0 {
            results.warning(Finding::new(format!(
                "{} is missing \"keywords\"",
                PACKAGE_JSON
            )));
        } else {
            results.pass(format!("Has {} keywords", manifest.keywords));
        }
        match &manifest.author {
            Some(author) => results.pass(format!("Author: {}", author)),
            None => results.warning(Finding::new(format!(
                "{} is missing \"author\"",
                PACKAGE_JSON
            ))),
        }
    }

    fn check_files(cx: &CheckContext<'_>, manifest: &PackageManifest, results: &mut ResultSet) {
        if let Some(main) = &manifest.main {
            if cx.fs.exists(main) {
                results.pass(format!("Main entry exists: {}", main));
            } else {
                results.error(Finding::new(format!("Main entry not found: {}", main)));
            }
        }

        for bin in &manifest.bin {
            if !cx.fs.exists(&bin.path) {
                results.error(Finding::new(format!(
                    "Binary '{}' not found: {}",
                    bin.name, bin.path
                )));
                continue;
            }

            match cx.fs.is_executable(&bin.path) {
                Some(true) => results.pass(format!("Binary '{}' is executable", bin.name)),
                Some(false) => results.warning(Finding::new(format!(
                    "Binary '{}' is not executable: {}",
                    bin.name, bin.path
                ))),
                None => {}
            }

            if let Some(content) = cx.fs.read_bytes(&bin.path) {
                if content.starts_with(b"#!") {
                    results.pass(format!("Binary '{}' has a shebang", bin.name));
                } else {
                    results.warning(Finding::new(format!(
                        "Binary '{}' is missing a shebang line: {}",
                        bin.name, bin.path
                    )));
                }
            }
        }

        if manifest.scripts.is_empty() {
            results.warning(Finding::new(format!(
                "No scripts defined in {}",
                PACKAGE_JSON
            )));
        } else {
            results.pass(format!("Has {} script(s)", manifest.scripts.len()));
        }
    }
}

impl Check for ManifestCheck {
    fn id(&self) -> CheckId {
        CheckId::new("manifest")
    }

    fn name(&self) -> &str {
        "Manifest"
    }

    fn run(&self, cx: &CheckContext<'_>, _facts: &Facts) -> Result<CheckOutcome> {
        let mut outcome = CheckOutcome::new();

        if !cx.fs.exists(PACKAGE_JSON) {
            let alternate = ALTERNATE_MANIFESTS
                .iter()
                .find(|(file, _)| cx.fs.exists(file));
            match alternate {
                Some((file, ecosystem)) => outcome
                    .results
                    .pass(format!("Found {} ({} project)", file, ecosystem)),
                None => outcome.results.warning(Finding::new(format!(
                    "No {} or other project manifest found",
                    PACKAGE_JSON
                ))),
            }
            return Ok(outcome);
        }

        outcome.facts.insert(Fact::ManifestPresent);

        let content = cx.fs.read(PACKAGE_JSON).unwrap_or_default();
        let manifest = match PackageManifest::parse(&content) {
            Ok(manifest) => manifest,
            Err(e) => {
                tracing::debug!("{} failed to parse: {}", PACKAGE_JSON, e);
                outcome.results.error(Finding::new(format!(
                    "{} is not valid JSON: {}",
                    PACKAGE_JSON, e
                )));
                return Ok(outcome);
            }
        };

        outcome
            .results
            .pass(format!("{} is valid JSON", PACKAGE_JSON));
        Self::check_fields(&manifest, &mut outcome.results);
        Self::check_files(cx, &manifest, &mut outcome.results);

        Ok(outcome)
    }
}
