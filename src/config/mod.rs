//! Configuration sources and the normalized server model.
//!
//! Every recognized file format is decoded into the same shape: a
//! [`DiscoveryRecord`] pairing one [`ConfigSource`] with the
//! [`ServerDeclaration`]s it declares.
pub mod parser;
pub mod registry;

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// File name of the primary registry, located directly under `$HOME`.
pub const PRIMARY_REGISTRY: &str = ".claude.json";

/// Every file name the scanner recognizes, in the order they are checked
/// within a directory.
pub const RECOGNIZED_FILES: &[&str] = &[PRIMARY_REGISTRY, ".mcp.json", "mcp.json", ".mcp.config.json"];

/// Transport tag used when a declaration does not specify `type`.
pub const UNKNOWN_KIND: &str = "unknown";

/// Recognized file-naming conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatKind {
    /// `.claude.json`, top-level `mcpServers` (the registry itself, or a copy elsewhere).
    ClaudeJson,
    /// An entry of the registry's `projects` table.
    ClaudeProject,
    /// `.mcp.json`, top-level `servers`.
    ProjectMcp,
    /// `mcp.json`, top-level `servers`.
    GenericMcp,
    /// `.mcp.config.json`, top-level `mcpServers`.
    McpConfig,
}

impl FormatKind {
    /// Map a bare file name to its format. Matching is exact and case-sensitive.
    #[must_use]
    pub fn recognize(file_name: &str) -> Option<Self> {
        match file_name {
            PRIMARY_REGISTRY => Some(Self::ClaudeJson),
            ".mcp.json" => Some(Self::ProjectMcp),
            "mcp.json" => Some(Self::GenericMcp),
            ".mcp.config.json" => Some(Self::McpConfig),
            _ => None,
        }
    }

    /// Top-level key holding the server mapping in this format.
    #[must_use]
    pub const fn servers_key(self) -> &'static str {
        match self {
            Self::ClaudeJson | Self::ClaudeProject | Self::McpConfig => "mcpServers",
            Self::ProjectMcp | Self::GenericMcp => "servers",
        }
    }

    /// Short human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ClaudeJson => "claude",
            Self::ClaudeProject => "claude project",
            Self::ProjectMcp => "project",
            Self::GenericMcp => "generic",
            Self::McpConfig => "config",
        }
    }
}

/// Where a source sits relative to the user's home directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The home directory itself.
    User,
    /// Below the home directory.
    Workspace,
    /// Anywhere else.
    System,
}

impl Scope {
    /// Classify `dir` against `home` by path components.
    #[must_use]
    pub fn classify(dir: &Path, home: &Path) -> Self {
        if dir == home {
            Self::User
        } else if dir.starts_with(home) {
            Self::Workspace
        } else {
            Self::System
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Workspace => write!(f, "workspace"),
            Self::System => write!(f, "system"),
        }
    }
}

/// One physical file contributing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ConfigSource {
    /// The owning location; for registry project entries, the project path.
    pub directory: PathBuf,
    /// The file itself.
    pub file: PathBuf,
    /// Naming convention the file was recognized by.
    pub format: FormatKind,
    /// Classification relative to `$HOME`.
    pub scope: Scope,
}

impl ConfigSource {
    /// Deduplication key: two sources with the same key are the same source.
    #[must_use]
    pub fn key(&self) -> (PathBuf, FormatKind) {
        (self.directory.clone(), self.format)
    }

    /// Length of the directory path string, the ordering and precedence metric.
    #[must_use]
    pub fn path_len(&self) -> usize {
        self.directory.to_string_lossy().chars().count()
    }
}

/// One named MCP server declared inside a [`ConfigSource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerDeclaration {
    /// Key of the declaration within its source.
    pub name: String,
    /// Declared transport (`stdio`, `http`, `sse`, ...), or [`UNKNOWN_KIND`].
    pub kind: String,
    /// Launch command, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Arguments passed to `command`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    /// Endpoint for remote transports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Names of the environment variables the declaration sets. Values are
    /// never read.
    pub env_keys: BTreeSet<String>,
}

impl ServerDeclaration {
    /// The command line as displayed: `command` followed by `args`.
    #[must_use]
    pub fn invocation(&self) -> Option<String> {
        let command = self.command.as_deref()?;
        Some(
            std::iter::once(command)
                .chain(self.args.iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}

/// A source paired with the servers parsed from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryRecord {
    /// Where the servers were declared.
    pub source: ConfigSource,
    /// Declarations sorted by name; never empty.
    pub servers: Vec<ServerDeclaration>,
}
