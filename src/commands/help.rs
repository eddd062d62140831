//! Command: usage summary and setup guidance for well-known servers.
use std::fmt::Write as _;

use clap::CommandFactory;
use serde_json::json;

use crate::cli::{Cli, HelpOpts};
use crate::logging::Log;
use crate::render::Style;

/// Setup guidance for one well-known MCP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpTopic {
    /// Server name as used in configuration files.
    pub name: &'static str,
    /// What the server provides.
    pub description: &'static str,
    /// Launch command.
    pub command: &'static str,
    /// Arguments to `command`.
    pub args: &'static [&'static str],
    /// Environment variables the server needs.
    pub env: &'static [&'static str],
}

/// Built-in guidance table.
pub const HELP_TOPICS: &[HelpTopic] = &[
    HelpTopic {
        name: "github",
        description: "Repositories, issues and pull requests through the GitHub API",
        command: "npx",
        args: &["-y", "@modelcontextprotocol/server-github"],
        env: &["GITHUB_PERSONAL_ACCESS_TOKEN"],
    },
    HelpTopic {
        name: "filesystem",
        description: "Read and write access to a set of allowed directories",
        command: "npx",
        args: &[
            "-y",
            "@modelcontextprotocol/server-filesystem",
            "/path/to/allowed/dir",
        ],
        env: &[],
    },
    HelpTopic {
        name: "postgres",
        description: "Read-only SQL queries and schema inspection for PostgreSQL",
        command: "npx",
        args: &[
            "-y",
            "@modelcontextprotocol/server-postgres",
            "postgresql://localhost/mydb",
        ],
        env: &[],
    },
    HelpTopic {
        name: "slack",
        description: "Channels, messages and users of a Slack workspace",
        command: "npx",
        args: &["-y", "@modelcontextprotocol/server-slack"],
        env: &["SLACK_BOT_TOKEN", "SLACK_TEAM_ID"],
    },
    HelpTopic {
        name: "brave-search",
        description: "Web and local search through the Brave Search API",
        command: "npx",
        args: &["-y", "@modelcontextprotocol/server-brave-search"],
        env: &["BRAVE_API_KEY"],
    },
];

/// Find a topic by name, ignoring ASCII case.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static HelpTopic> {
    HELP_TOPICS
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Comma-separated list of every topic name.
#[must_use]
pub fn known_names() -> String {
    HELP_TOPICS
        .iter()
        .map(|t| t.name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the guidance for `topic`, including a ready-to-paste `.mcp.json`.
#[must_use]
pub fn render_topic(topic: &HelpTopic, style: Style) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style.header(topic.name));
    let _ = writeln!(out, "{}", topic.description);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Command: {} {}",
        topic.command,
        topic.args.join(" ")
    );
    if topic.env.is_empty() {
        let _ = writeln!(out, "Environment: none required");
    } else {
        let _ = writeln!(out, "Environment: {}", topic.env.join(", "));
    }

    let env: serde_json::Map<String, serde_json::Value> = topic
        .env
        .iter()
        .map(|k| ((*k).to_string(), json!(format!("<{k}>"))))
        .collect();
    let mut server = json!({
        "type": "stdio",
        "command": topic.command,
        "args": topic.args,
    });
    if !env.is_empty() {
        server["env"] = serde_json::Value::Object(env);
    }
    let mut servers = serde_json::Map::new();
    servers.insert(topic.name.to_string(), server);
    let example = json!({ "servers": servers });

    let _ = writeln!(out);
    let _ = writeln!(out, "Example .mcp.json:");
    let _ = writeln!(
        out,
        "{}",
        serde_json::to_string_pretty(&example).unwrap_or_default()
    );
    out
}

/// The usage summary shown by `help` without a name.
#[must_use]
pub fn usage() -> String {
    let mut out = Cli::command().render_long_help().to_string();
    let _ = writeln!(out);
    let names: Vec<&str> = HELP_TOPICS.iter().map(|t| t.name).collect();
    let _ = writeln!(out, "Server guides: mcpscope help <{}>", names.join("|"));
    out
}

/// Render usage or a topic. An unknown name is reported through `log` and
/// yields no output.
pub fn run(opts: &HelpOpts, style: Style, log: &dyn Log) -> String {
    let Some(name) = opts.name.as_deref() else {
        return usage();
    };
    if let Some(topic) = lookup(name) {
        render_topic(topic, style)
    } else {
        log.error(&format!("unknown server '{name}'"));
        log.info(&format!("known servers: {}", known_names()));
        String::new()
    }
}
