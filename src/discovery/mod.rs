//! Discovery pipeline: registry + directory sweep, merged and ordered.
//!
//! ```text
//! registry::load ─┐
//!                 ├─► aggregate ─► Vec<DiscoveryRecord>
//! walk ─► parser ─┘
//! ```
//!
//! All configuration is passed in through [`ScanOptions`]; nothing is cached
//! between calls, so two scans of an unchanged tree return equal results.
pub mod aggregate;
pub mod walker;

use std::path::PathBuf;

use crate::config::{DiscoveryRecord, RECOGNIZED_FILES, parser, registry};
use crate::logging::Log;
use crate::platform::Platform;
use walker::WalkRules;

/// Default recursion depth below each seed directory.
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Everything a scan needs to know about its environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Home and working directory.
    pub platform: Platform,
    /// Starting points for the directory sweep, walked in order.
    pub seeds: Vec<PathBuf>,
    /// Depth limit and exclusions for the sweep.
    pub rules: WalkRules,
}

impl ScanOptions {
    /// Options with the default seeds and rules for `platform`.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        let seeds = platform.seed_dirs();
        Self {
            platform,
            seeds,
            rules: WalkRules::default(),
        }
    }

    /// Override the maximum walk depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.rules.max_depth = max_depth;
        self
    }

    /// Replace the seed directories.
    #[must_use]
    pub fn with_seeds(mut self, seeds: Vec<PathBuf>) -> Self {
        self.seeds = seeds;
        self
    }
}

/// Run a full discovery pass and return the deduplicated, ordered records.
///
/// Registry records come first in encounter order, so a registry entry wins
/// deduplication against the same file found by the sweep.
pub fn discover(options: &ScanOptions, log: &dyn Log) -> Vec<DiscoveryRecord> {
    let home = &options.platform.home;
    let mut records = registry::load(&options.platform, log);

    for dir in walker::walk(&options.seeds, &options.rules, log) {
        for name in RECOGNIZED_FILES {
            if let Some(record) = parser::load_source(&dir, name, home, log) {
                log.debug(&format!(
                    "found {} server(s) in {}",
                    record.servers.len(),
                    record.source.file.display()
                ));
                records.push(record);
            }
        }
    }

    let before = records.len();
    let merged = aggregate::aggregate(records);
    if merged.len() < before {
        log.debug(&format!(
            "dropped {} duplicate source(s)",
            before - merged.len()
        ));
    }
    merged
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::{FormatKind, Scope};
    use crate::logging::BufferedLog;
    use std::fs;
    use std::path::Path;

    fn home_with_registry(root: &Path, registry: &str) -> PathBuf {
        let home = root.join("home");
        fs::create_dir_all(&home).unwrap();
        fs::write(home.join(".claude.json"), registry).unwrap();
        home
    }

    #[test]
    fn registry_in_home_is_not_counted_twice() {
        let tmp = tempfile::tempdir().unwrap();
        let home = home_with_registry(tmp.path(), r#"{"mcpServers": {"gh": {}}}"#);
        let options = ScanOptions::new(Platform::new(&home, &home));

        let records = discover(&options, &BufferedLog::new());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source.format, FormatKind::ClaudeJson);
        assert_eq!(records[0].source.scope, Scope::User);
    }

    #[test]
    fn finds_project_files_below_cwd() {
        let tmp = tempfile::tempdir().unwrap();
        let home = home_with_registry(tmp.path(), "{}");
        let project = home.join("work/app");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join(".mcp.json"), r#"{"servers": {"db": {}}}"#).unwrap();
        fs::write(project.join("mcp.json"), r#"{"servers": {"fs": {}}}"#).unwrap();
        let options = ScanOptions::new(Platform::new(&home, home.join("work")));

        let records = discover(&options, &BufferedLog::new());
        let formats: Vec<FormatKind> = records.iter().map(|r| r.source.format).collect();
        assert_eq!(formats, [FormatKind::ProjectMcp, FormatKind::GenericMcp]);
        assert!(records.iter().all(|r| r.source.scope == Scope::Workspace));
    }

    #[test]
    fn sources_outside_home_are_system_scope() {
        let tmp = tempfile::tempdir().unwrap();
        let home = home_with_registry(tmp.path(), "{}");
        let outside = tmp.path().join("srv");
        fs::create_dir_all(&outside).unwrap();
        fs::write(outside.join(".mcp.config.json"), r#"{"mcpServers": {"x": {}}}"#).unwrap();
        let options = ScanOptions::new(Platform::new(&home, &outside));

        let records = discover(&options, &BufferedLog::new());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source.scope, Scope::System);
        assert_eq!(records[0].source.format, FormatKind::McpConfig);
    }

    #[test]
    fn with_max_depth_limits_sweep() {
        let tmp = tempfile::tempdir().unwrap();
        let home = home_with_registry(tmp.path(), "{}");
        let deep = home.join("a/b/c");
        fs::create_dir_all(&deep).unwrap();
        fs::write(deep.join(".mcp.json"), r#"{"servers": {"x": {}}}"#).unwrap();
        let platform = Platform::new(&home, &home);

        let shallow = ScanOptions::new(platform.clone()).with_max_depth(2);
        assert!(discover(&shallow, &BufferedLog::new()).is_empty());

        let full = ScanOptions::new(platform).with_max_depth(3);
        assert_eq!(discover(&full, &BufferedLog::new()).len(), 1);
    }

    #[test]
    fn discovery_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let home = home_with_registry(
            tmp.path(),
            r#"{"mcpServers": {"a": {}}, "projects": {"/x/y": {"mcpServers": {"b": {}}}}}"#,
        );
        for dir in ["p/q", "r"] {
            fs::create_dir_all(home.join(dir)).unwrap();
            fs::write(home.join(dir).join(".mcp.json"), r#"{"servers": {"a": {}}}"#).unwrap();
        }
        let options = ScanOptions::new(Platform::new(&home, &home));

        let first = discover(&options, &BufferedLog::new());
        let second = discover(&options, &BufferedLog::new());
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }
}
