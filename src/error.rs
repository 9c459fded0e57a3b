//! Error types for readycheck.
//!
//! Check findings (missing files, short READMEs, bad manifests) are never
//! errors in this sense; they are recorded in a
//! [`ResultSet`](crate::checks::ResultSet). [`ReadyError`] covers the
//! conditions that stop a run: an unusable target path or a failed write
//! during a fix.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for readycheck operations.
#[derive(Debug, Error)]
pub enum ReadyError {
    /// Target directory does not exist.
    #[error("Path does not exist: {path}")]
    TargetNotFound { path: PathBuf },

    /// Target exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Writing a generated file failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An embedded template is absent from the binary.
    #[error("Missing built-in template: {name}")]
    MissingTemplate { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for readycheck operations.
pub type Result<T> = std::result::Result<T, ReadyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_not_found_displays_path() {
        let err = ReadyError::TargetNotFound {
            path: PathBuf::from("/no/such/dir"),
        };
        assert_eq!(err.to_string(), "Path does not exist: /no/such/dir");
    }

    #[test]
    fn write_error_displays_path_and_cause() {
        let err = ReadyError::Write {
            path: PathBuf::from("/repo/README.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/repo/README.md"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn missing_template_displays_name() {
        let err = ReadyError::MissingTemplate {
            name: "gitignore".into(),
        };
        assert!(err.to_string().contains("gitignore"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ReadyError = io_err.into();
        assert!(matches!(err, ReadyError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: ReadyError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}
