//! Filesystem probe.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReadyError, Result};

/// File access rooted at the target directory.
///
/// Reads never fail: any I/O error is reported as an absent file. Writes
/// return [`ReadyError::Write`] so a failed fix stops the run.
#[derive(Debug, Clone)]
pub struct ProjectFs {
    root: PathBuf,
}

impl ProjectFs {
    /// Create a probe for the given root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a file under the root.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Final component of the root, used as the project name.
    pub fn dir_name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string())
    }

    /// Check if a file or directory exists.
    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }

    /// Return the first of `names` that exists.
    pub fn find_first<'a>(&self, names: &[&'a str]) -> Option<&'a str> {
        names.iter().copied().find(|n| self.exists(n))
    }

    /// Read a file as UTF-8.
    pub fn read(&self, name: &str) -> Option<String> {
        match fs::read_to_string(self.path(name)) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::debug!("read {} failed: {}", name, e);
                None
            }
        }
    }

    /// Read a file as raw bytes.
    pub fn read_bytes(&self, name: &str) -> Option<Vec<u8>> {
        match fs::read(self.path(name)) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::debug!("read {} failed: {}", name, e);
                None
            }
        }
    }

    /// Write a file, replacing any existing content.
    pub fn write(&self, name: &str, content: &str) -> Result<()> {
        let path = self.path(name);
        tracing::debug!("writing {}", path.display());
        fs::write(&path, content).map_err(|source| ReadyError::Write { path, source })
    }

    /// Whether a file has any executable permission bit set.
    #[cfg(unix)]
    pub fn is_executable(&self, name: &str) -> Option<bool> {
        use std::os::unix::fs::PermissionsExt;
        self.path(name)
            .metadata()
            .ok()
            .map(|m| m.permissions().mode() & 0o111 != 0)
    }

    /// Permission bits carry no meaning here, so the check is skipped.
    #[cfg(not(unix))]
    pub fn is_executable(&self, _name: &str) -> Option<bool> {
        None
    }

    /// Names of regular files directly under the root, sorted. Symlinks to
    /// files are included.
    pub fn top_level_files(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("listing {} failed: {}", self.root.display(), e);
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn exists_and_read() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "hello").unwrap();

        let probe = ProjectFs::new(temp.path());
        assert!(probe.exists("README.md"));
        assert!(!probe.exists("LICENSE"));
        assert_eq!(probe.read("README.md").as_deref(), Some("hello"));
        assert!(probe.read("LICENSE").is_none());
    }

    #[test]
    fn read_of_directory_is_absent() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("docs")).unwrap();

        let probe = ProjectFs::new(temp.path());
        assert!(probe.exists("docs"));
        assert!(probe.read("docs").is_none());
    }

    #[test]
    fn write_creates_file() {
        let temp = TempDir::new().unwrap();
        let probe = ProjectFs::new(temp.path());

        probe.write(".gitignore", "dist/\n").unwrap();
        assert_eq!(
            fs::read_to_string(temp.path().join(".gitignore")).unwrap(),
            "dist/\n"
        );
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let probe = ProjectFs::new(temp.path().join("gone"));

        let err = probe.write("README.md", "x").unwrap_err();
        assert!(matches!(err, ReadyError::Write { .. }));
    }

    #[test]
    fn find_first_respects_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("LICENSE.md"), "").unwrap();
        fs::write(temp.path().join("LICENSE.txt"), "").unwrap();

        let probe = ProjectFs::new(temp.path());
        assert_eq!(
            probe.find_first(&["LICENSE", "LICENSE.md", "LICENSE.txt"]),
            Some("LICENSE.md")
        );
        assert_eq!(probe.find_first(&["COPYING"]), None);
    }

    #[test]
    fn top_level_files_skips_directories() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("run.sh"), "").unwrap();
        fs::write(temp.path().join("a.txt"), "").unwrap();
        fs::create_dir(temp.path().join("src")).unwrap();

        let probe = ProjectFs::new(temp.path());
        assert_eq!(probe.top_level_files(), vec!["a.txt", "run.sh"]);
    }

    #[test]
    fn read_bytes_accepts_non_utf8() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("tool"), [0x7f, b'E', b'L', b'F', 0xff, 0xfe, 0x00]).unwrap();

        let probe = ProjectFs::new(temp.path());
        assert!(probe.read("tool").is_none());
        assert_eq!(probe.read_bytes("tool").map(|b| b.len()), Some(7));
        assert!(probe.read_bytes("missing").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn top_level_files_follows_symlinks() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("scripts")).unwrap();
        fs::write(temp.path().join("scripts/start.sh"), "#!/bin/sh\n").unwrap();
        std::os::unix::fs::symlink("scripts/start.sh", temp.path().join("start.sh")).unwrap();
        std::os::unix::fs::symlink("scripts", temp.path().join("bin")).unwrap();

        let probe = ProjectFs::new(temp.path());
        assert_eq!(probe.top_level_files(), vec!["start.sh"]);
    }

    #[test]
    fn dir_name_is_last_component() {
        let probe = ProjectFs::new("/work/my-tool");
        assert_eq!(probe.dir_name(), "my-tool");
    }

    #[cfg(unix)]
    #[test]
    fn is_executable_reads_mode_bits() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let script = temp.path().join("cli.js");
        fs::write(&script, "#!/usr/bin/env node\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o644)).unwrap();

        let probe = ProjectFs::new(temp.path());
        assert_eq!(probe.is_executable("cli.js"), Some(false));

        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(probe.is_executable("cli.js"), Some(true));
        assert_eq!(probe.is_executable("missing.js"), None);
    }
}
