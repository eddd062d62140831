//! Environment detection: home directory, working directory and seeds.
use std::path::PathBuf;

use crate::error::PlatformError;

/// Well-known user folders walked in addition to `$HOME` itself.
const USER_FOLDERS: &[&str] = &["Desktop", "Documents", "Projects", "Developer", "code"];

/// The invoking user's environment: home and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    /// The user's home directory.
    pub home: PathBuf,
    /// The directory the tool was invoked from.
    pub cwd: PathBuf,
}

impl Platform {
    /// Detect the current user's home and working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if neither `HOME` nor `USERPROFILE` is set, or the
    /// working directory cannot be read.
    pub fn detect() -> Result<Self, PlatformError> {
        let home = Self::detect_home()?;
        let cwd = std::env::current_dir().map_err(PlatformError::CurrentDir)?;
        Ok(Self { home, cwd })
    }

    /// Create a platform with explicit values.
    #[must_use]
    pub fn new(home: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            cwd: cwd.into(),
        }
    }

    /// Path of the primary registry file, `$HOME/.claude.json`.
    #[must_use]
    pub fn registry_path(&self) -> PathBuf {
        self.home.join(crate::config::PRIMARY_REGISTRY)
    }

    /// Seed directories for discovery: home, common user folders, then the
    /// working directory. Missing folders are dropped; order is preserved and
    /// duplicates removed.
    #[must_use]
    pub fn seed_dirs(&self) -> Vec<PathBuf> {
        let candidates = std::iter::once(self.home.clone())
            .chain(USER_FOLDERS.iter().map(|f| self.home.join(f)))
            .chain(std::iter::once(self.cwd.clone()));

        let mut seeds: Vec<PathBuf> = Vec::new();
        for dir in candidates {
            if dir.is_dir() && !seeds.contains(&dir) {
                seeds.push(dir);
            }
        }
        seeds
    }

    fn detect_home() -> Result<PathBuf, PlatformError> {
        std::env::var_os("HOME")
            .filter(|v| !v.is_empty())
            .or_else(|| std::env::var_os("USERPROFILE").filter(|v| !v.is_empty()))
            .map(PathBuf::from)
            .ok_or(PlatformError::HomeNotFound)
    }
}
