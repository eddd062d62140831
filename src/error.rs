//! Domain-specific error types for the configuration scanner.
//!
//! Internal modules return typed errors ([`ConfigError`], [`PlatformError`])
//! while command handlers at the CLI boundary convert them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! - [`ConfigError`]: reading or decoding one config file
//! - [`PlatformError`]: home / working directory detection
//!
//! Nothing below the recognizer is fatal: a [`ConfigError`] means "this source
//! contributes nothing" and never aborts a scan.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that arise while reading one configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An I/O error occurred while reading the file.
    #[error("IO error reading config file {}: {source}", path.display())]
    Io {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file content is not valid JSON for the expected schema.
    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        /// Path to the file that could not be decoded.
        path: PathBuf,
        /// Underlying decode error.
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Return `true` if the file simply does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Errors that arise from environment detection.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Neither `HOME` nor `USERPROFILE` is set.
    #[error("neither HOME nor USERPROFILE environment variable is set")]
    HomeNotFound,

    /// The current working directory is unavailable (e.g. deleted).
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn config_error_io_display() {
        let e = ConfigError::Io {
            path: PathBuf::from("/home/u/.mcp.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert!(e.to_string().contains("/home/u/.mcp.json"));
        assert!(e.to_string().contains("IO error reading config file"));
    }

    #[test]
    fn config_error_parse_display() {
        let source = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid json");
        let e = ConfigError::Parse {
            path: PathBuf::from("/home/u/.claude.json"),
            source,
        };
        assert!(e.to_string().starts_with("Invalid JSON in /home/u/.claude.json"));
    }

    #[test]
    fn config_error_io_has_source() {
        use std::error::Error as StdError;
        let e = ConfigError::Io {
            path: PathBuf::from("x"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(e.source().is_some());
    }

    #[test]
    fn not_found_is_detected() {
        let missing = ConfigError::Io {
            path: PathBuf::from("x"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let denied = ConfigError::Io {
            path: PathBuf::from("x"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(missing.is_not_found());
        assert!(!denied.is_not_found());
    }

    #[test]
    fn platform_error_home_display() {
        assert_eq!(
            PlatformError::HomeNotFound.to_string(),
            "neither HOME nor USERPROFILE environment variable is set"
        );
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<ConfigError>();
        assert_send_sync::<PlatformError>();
    }

    #[test]
    fn config_error_converts_to_anyhow() {
        let e = ConfigError::Io {
            path: PathBuf::from("x"),
            source: io::Error::other("boom"),
        };
        let _anyhow_err: anyhow::Error = e.into();
    }
}
