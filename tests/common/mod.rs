// Shared helpers for integration tests.
//
// Provides a temporary home directory and a fluent builder so each
// integration test can lay out registry and project files without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use mcpscope::config::DiscoveryRecord;
use mcpscope::discovery::{self, ScanOptions};
use mcpscope::logging::BufferedLog;
use mcpscope::platform::Platform;

/// An isolated machine layout backed by a [`tempfile::TempDir`].
///
/// `home/` plays the user's home directory; anything else under the root is
/// outside of it. The directory is deleted when dropped.
pub struct IntegrationTestContext {
    /// Temporary directory containing `home/` and any outside locations.
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Create a new context with an empty home directory.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(root.path().join("home")).expect("create home dir");
        Self { root }
    }

    /// Path to the fake home directory.
    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// Path of `rel` below the home directory.
    pub fn home_path(&self, rel: &str) -> PathBuf {
        if rel.is_empty() {
            self.home()
        } else {
            self.home().join(rel)
        }
    }

    /// Scan options rooted at the fake home, with `cwd` as working directory.
    pub fn options(&self, cwd: &Path) -> ScanOptions {
        ScanOptions::new(Platform::new(self.home(), cwd))
    }

    /// Run discovery with the working directory set to the home directory.
    pub fn discover(&self) -> (Vec<DiscoveryRecord>, BufferedLog) {
        self.discover_from(&self.home())
    }

    /// Run discovery with `cwd` as the working directory.
    pub fn discover_from(&self, cwd: &Path) -> (Vec<DiscoveryRecord>, BufferedLog) {
        let log = BufferedLog::new();
        let records = discovery::discover(&self.options(cwd), &log);
        (records, log)
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building a new context with an empty home.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Write the primary registry, `home/.claude.json`.
    pub fn with_registry(self, content: &str) -> Self {
        self.with_file("", ".claude.json", content)
    }

    /// Write `content` to `home/<dir>/<name>`, creating parent directories.
    pub fn with_file(self, dir: &str, name: &str, content: &str) -> Self {
        let dir = self.ctx.home_path(dir);
        std::fs::create_dir_all(&dir).expect("create config dir");
        std::fs::write(dir.join(name), content).expect("write config file");
        self
    }

    /// Write `content` to `<root>/<dir>/<name>`, outside the home directory.
    pub fn with_outside_file(self, dir: &str, name: &str, content: &str) -> Self {
        let dir = self.ctx.root.path().join(dir);
        std::fs::create_dir_all(&dir).expect("create outside dir");
        std::fs::write(dir.join(name), content).expect("write config file");
        self
    }

    /// Create an empty directory below home.
    pub fn with_dir(self, dir: &str) -> Self {
        std::fs::create_dir_all(self.ctx.home_path(dir)).expect("create dir");
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}
