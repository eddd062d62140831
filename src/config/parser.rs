//! Recognize and decode a single configuration file.
use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde::de::IgnoredAny;
use serde_json::Value;

use super::{ConfigSource, DiscoveryRecord, FormatKind, Scope, ServerDeclaration, UNKNOWN_KIND};
use crate::error::ConfigError;
use crate::logging::Log;

/// A server entry as written on disk, before normalization.
///
/// Every field is optional and `null` is treated as absent; an entry whose
/// present fields have the wrong type is rejected on its own.
#[derive(Debug, Deserialize)]
struct RawServer {
    #[serde(rename = "type")]
    kind: Option<String>,
    command: Option<String>,
    args: Option<Vec<String>>,
    url: Option<String>,
    env: Option<BTreeMap<String, IgnoredAny>>,
}

impl RawServer {
    fn into_declaration(self, name: String) -> ServerDeclaration {
        ServerDeclaration {
            name,
            kind: self.kind.unwrap_or_else(|| UNKNOWN_KIND.to_string()),
            command: self.command,
            args: self.args.unwrap_or_default(),
            url: self.url,
            env_keys: self.env.unwrap_or_default().into_keys().collect(),
        }
    }
}

/// Short name of a JSON value's type, for diagnostics.
const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Read `path` as JSON.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if it is not valid JSON.
pub(super) fn read_json(path: &Path) -> Result<Value, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode the servers stored under `key` in `value`, sorted by name.
///
/// A missing or `null` key yields nothing. Each entry is decoded on its own:
/// an off-schema entry is skipped with a debug message and the rest of the
/// table survives.
pub(super) fn servers_under(value: &Value, key: &str, path: &Path, log: &dyn Log) -> Vec<ServerDeclaration> {
    let table = match value.get(key) {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Object(table)) => table,
        Some(other) => {
            log.debug(&format!(
                "ignoring '{key}' in {}: expected an object, found {}",
                path.display(),
                json_type(other)
            ));
            return Vec::new();
        }
    };

    let mut servers: Vec<ServerDeclaration> = table
        .iter()
        .filter_map(|(name, entry)| match RawServer::deserialize(entry) {
            Ok(raw) => Some(raw.into_declaration(name.clone())),
            Err(e) => {
                log.debug(&format!(
                    "skipping server '{name}' in {}: {e}",
                    path.display()
                ));
                None
            }
        })
        .collect();
    servers.sort_by(|a, b| a.name.cmp(&b.name));
    servers
}

/// Read the servers declared in `path` using the key of `format`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn read_servers(
    path: &Path,
    format: FormatKind,
    log: &dyn Log,
) -> Result<Vec<ServerDeclaration>, ConfigError> {
    let value = read_json(path)?;
    Ok(servers_under(&value, format.servers_key(), path, log))
}

/// Recognize `file_name` inside `dir` and parse it into a record.
///
/// Returns `None` when the name is not recognized, the file is absent or
/// unreadable, it fails to decode, or it declares no servers. Failures are
/// only reported at debug level; the primary registry is reported by
/// [`registry::load`](super::registry::load) instead.
pub fn load_source(dir: &Path, file_name: &str, home: &Path, log: &dyn Log) -> Option<DiscoveryRecord> {
    let format = FormatKind::recognize(file_name)?;
    let file = dir.join(file_name);
    if !file.is_file() {
        return None;
    }

    let servers = match read_servers(&file, format, log) {
        Ok(servers) => servers,
        Err(e) => {
            log.debug(&format!("skipping {e}"));
            return None;
        }
    };
    if servers.is_empty() {
        return None;
    }

    Some(DiscoveryRecord {
        source: ConfigSource {
            directory: dir.to_path_buf(),
            file,
            format,
            scope: Scope::classify(dir, home),
        },
        servers,
    })
}
