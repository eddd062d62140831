//! The primary registry: `$HOME/.claude.json`.
//!
//! Besides a top-level `mcpServers` table (user scope), the registry keeps a
//! `projects` table keyed by project directory, each entry holding its own
//! `mcpServers` (workspace scope). Every project with at least one server
//! becomes its own [`DiscoveryRecord`].
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::parser::{read_json, servers_under};
use super::{ConfigSource, DiscoveryRecord, FormatKind, Scope};
use crate::error::ConfigError;
use crate::logging::Log;
use crate::platform::Platform;

/// Load every record declared by the primary registry.
///
/// A missing registry yields nothing. A registry that cannot be read or
/// decoded yields nothing and emits exactly one warning naming the file.
pub fn load(platform: &Platform, log: &dyn Log) -> Vec<DiscoveryRecord> {
    let path = platform.registry_path();
    match parse(&path, &platform.home, log) {
        Ok(records) => {
            log.debug(&format!(
                "registry {}: {} record(s)",
                path.display(),
                records.len()
            ));
            records
        }
        Err(e) if e.is_not_found() => {
            log.debug(&format!("no registry at {}", path.display()));
            Vec::new()
        }
        Err(e) => {
            log.warn(&format!("ignoring registry: {e}"));
            Vec::new()
        }
    }
}

/// Parse the registry at `path` into records: the user-scope record first,
/// then one workspace record per accepted project, ordered by project path.
///
/// Off-schema server entries are skipped one by one (see
/// [`servers_under`]); they never discard the rest of the registry.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn parse(path: &Path, home: &Path, log: &dyn Log) -> Result<Vec<DiscoveryRecord>, ConfigError> {
    let value = read_json(path)?;
    let key = FormatKind::ClaudeProject.servers_key();
    let mut records = Vec::new();

    let servers = servers_under(&value, FormatKind::ClaudeJson.servers_key(), path, log);
    if !servers.is_empty() {
        records.push(DiscoveryRecord {
            source: ConfigSource {
                directory: home.to_path_buf(),
                file: path.to_path_buf(),
                format: FormatKind::ClaudeJson,
                scope: Scope::User,
            },
            servers,
        });
    }

    let Some(projects) = value.get("projects").and_then(Value::as_object) else {
        return Ok(records);
    };

    let mut entries: Vec<(&String, &Value)> = projects.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (project, entry) in entries {
        if !is_plausible_project(project) {
            continue;
        }
        let servers = servers_under(entry, key, path, log);
        if servers.is_empty() {
            continue;
        }
        records.push(DiscoveryRecord {
            source: ConfigSource {
                directory: PathBuf::from(project),
                file: path.to_path_buf(),
                format: FormatKind::ClaudeProject,
                scope: Scope::Workspace,
            },
            servers,
        });
    }

    Ok(records)
}

/// Accept a project key if it exists on disk or at least looks like a path.
///
/// The separator check keeps entries for unmounted or moved projects without
/// verifying them.
fn is_plausible_project(project: &str) -> bool {
    Path::new(project).exists() || project.contains(['/', '\\'])
}
