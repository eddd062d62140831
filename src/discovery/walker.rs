//! Bounded-depth directory traversal.
//!
//! Walks each seed with [`walkdir`], pruning excluded and hidden directories,
//! and returns every directory reached in pre-order. Symlinked directories are
//! followed; a directory reached a second time (through another seed or a
//! link) is not descended into again, which also breaks link cycles.
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::FormatKind;
use crate::logging::Log;

/// Directory names never descended into.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".svn",
    ".hg",
    "target",
    "dist",
    "build",
    "out",
    "vendor",
    "__pycache__",
    ".venv",
    "venv",
    ".cache",
    ".next",
    "coverage",
    "tmp",
    "temp",
    "logs",
    "Library",
];

/// Pruning rules applied below each seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkRules {
    /// Deepest level inspected; the seed itself is depth 0.
    pub max_depth: usize,
    /// Directory names that are skipped with their whole subtree.
    pub excluded_dirs: Vec<String>,
}

impl WalkRules {
    /// Return `true` if the walk must not enter `entry`.
    ///
    /// Seeds are never pruned. Below a seed, excluded names and any name
    /// starting with `.` are pruned unless the name is a recognized config
    /// file name.
    fn prunes(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        if self.excluded_dirs.iter().any(|d| *d == name) {
            return true;
        }
        name.starts_with('.') && FormatKind::recognize(&name).is_none()
    }
}

impl Default for WalkRules {
    fn default() -> Self {
        Self {
            max_depth: super::DEFAULT_MAX_DEPTH,
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Canonical identity of a directory, falling back to the path as given
/// when it cannot be resolved.
fn visit_key(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Collect the directories to inspect, starting from `seeds` in order.
///
/// Unreadable entries (permission denied, broken links, link loops, races
/// with deletion) are skipped silently.
pub fn walk(seeds: &[PathBuf], rules: &WalkRules, log: &dyn Log) -> Vec<PathBuf> {
    let mut visited: HashSet<PathBuf> = HashSet::new();
    let mut dirs = Vec::new();
    let mut errors = 0usize;

    for seed in seeds {
        let mut entries = WalkDir::new(seed)
            .max_depth(rules.max_depth)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !rules.prunes(e));

        while let Some(next) = entries.next() {
            let entry = match next {
                Ok(entry) => entry,
                Err(_) => {
                    errors += 1;
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }
            if !visited.insert(visit_key(entry.path())) {
                entries.skip_current_dir();
                continue;
            }
            dirs.push(entry.into_path());
        }
    }

    log.debug(&format!(
        "walked {} director{} from {} seed(s), {errors} unreadable entr{}",
        dirs.len(),
        if dirs.len() == 1 { "y" } else { "ies" },
        seeds.len(),
        if errors == 1 { "y" } else { "ies" },
    ));
    dirs
}
