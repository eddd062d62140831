//! Text rendering for the tree and conflict views.
//!
//! Renderers return `String`s and never touch stdout so they can be tested
//! without a terminal. Colors are ANSI escapes, emitted only when
//! [`Style::color`] is set.
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::config::{ConfigSource, DiscoveryRecord, FormatKind, RECOGNIZED_FILES, ServerDeclaration};
use crate::resolve::{ConflictGroup, Resolution, ResolutionIndex};

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const HEADER: &str = "\x1b[1;34m";

/// Output styling options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Emit ANSI color codes.
    pub color: bool,
}

impl Style {
    /// Plain-text style.
    pub const PLAIN: Self = Self { color: false };

    /// Wrap `text` in `code` when colors are enabled.
    #[must_use]
    pub fn paint(self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    /// A `==>` section header.
    #[must_use]
    pub fn header(self, text: &str) -> String {
        format!("{} {}", self.paint(HEADER, "==>"), self.paint(BOLD, text))
    }
}

/// `1 source`, `2 sources`.
fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// The label of a resolution as shown in both views.
fn tag(style: Style, status: Resolution) -> String {
    match status {
        Resolution::Active => style.paint(GREEN, "✓ active"),
        Resolution::Overridden => style.paint(RED, "✗ overridden"),
    }
}

/// Where a declaration lives, as one line of text.
fn location(source: &ConfigSource) -> String {
    match source.format {
        FormatKind::ClaudeProject => format!(
            "{} (project {})",
            source.file.display(),
            source.directory.display()
        ),
        _ => source.file.display().to_string(),
    }
}

fn file_label(record: &DiscoveryRecord) -> String {
    let name = record
        .source
        .file
        .file_name()
        .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
    match record.source.format {
        FormatKind::ClaudeProject => format!("{name} → projects"),
        _ => name,
    }
}

fn server_line(style: Style, server: &ServerDeclaration) -> String {
    let mut line = format!(
        "{} {}",
        style.paint(BOLD, &server.name),
        style.paint(CYAN, &format!("[{}]", server.kind))
    );
    if let Some(invocation) = server.invocation() {
        let _ = write!(line, " {invocation}");
    } else if let Some(url) = &server.url {
        let _ = write!(line, " {url}");
    }
    line
}

/// Render every record as a tree, in collection order.
///
/// Servers that take part in a conflict are tagged with their resolution.
#[must_use]
pub fn render_tree(records: &[DiscoveryRecord], conflicts: &[ConflictGroup<'_>], style: Style) -> String {
    let index = ResolutionIndex::new(conflicts);
    let mut out = String::new();
    let _ = writeln!(out, "{}", style.header("MCP configuration"));

    let mut previous_dir: Option<&Path> = None;
    for record in records {
        let source = &record.source;
        if previous_dir != Some(source.directory.as_path()) {
            let _ = writeln!(
                out,
                "{} {}",
                style.paint(BOLD, &source.directory.display().to_string()),
                style.paint(DIM, &format!("({})", source.scope))
            );
            previous_dir = Some(source.directory.as_path());
        }
        let _ = writeln!(
            out,
            "  {} {}",
            file_label(record),
            style.paint(DIM, &format!("[{}]", source.format.label()))
        );

        let last = record.servers.len().saturating_sub(1);
        for (i, server) in record.servers.iter().enumerate() {
            let (branch, stem) = if i == last { ("└─", "  ") } else { ("├─", "│ ") };
            let mut line = format!("    {branch} {}", server_line(style, server));
            if let Some(status) = index.status(source, server) {
                let _ = write!(line, "  {}", tag(style, status));
            }
            let _ = writeln!(out, "{line}");
            if !server.env_keys.is_empty() {
                let keys: Vec<&str> = server.env_keys.iter().map(String::as_str).collect();
                let _ = writeln!(
                    out,
                    "    {stem}   {}",
                    style.paint(DIM, &format!("env: {}", keys.join(", ")))
                );
            }
        }
    }

    let servers: usize = records.iter().map(|r| r.servers.len()).sum();
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}, {}, {}",
        count(records.len(), "source"),
        count(servers, "server"),
        count(conflicts.len(), "conflict")
    );
    out
}

/// Render the hint shown when no configuration was found.
#[must_use]
pub fn render_empty(seeds: &[PathBuf], max_depth: usize, style: Style) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style.paint(YELLOW, "No MCP configuration files found."));
    let noun = if seeds.len() == 1 { "directory" } else { "directories" };
    let _ = writeln!(out, "Searched {} {noun} (depth {max_depth}):", seeds.len());
    for seed in seeds {
        let _ = writeln!(out, "  {}", seed.display());
    }
    let _ = writeln!(out, "Looked for: {}", RECOGNIZED_FILES.join(", "));
    out
}

/// Render the conflict report.
#[must_use]
pub fn render_conflicts(conflicts: &[ConflictGroup<'_>], style: Style) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style.header("Conflicts"));

    if conflicts.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            style.paint(GREEN, "No conflicts: every server name is declared once.")
        );
        return out;
    }

    for group in conflicts {
        let _ = writeln!(
            out,
            "{} {}",
            style.paint(BOLD, group.name),
            style.paint(DIM, &format!("({})", count(group.instances.len(), "definition")))
        );
        for instance in &group.instances {
            let label = match instance.status {
                Resolution::Active => format!("{:<13}", "✓ active"),
                Resolution::Overridden => format!("{:<13}", "✗ overridden"),
            };
            let painted = match instance.status {
                Resolution::Active => style.paint(GREEN, &label),
                Resolution::Overridden => style.paint(RED, &label),
            };
            let _ = writeln!(
                out,
                "  {painted} {} {}",
                location(instance.source),
                style.paint(DIM, &format!("({})", instance.source.scope))
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}; the declaration with the longest directory path wins",
        count(conflicts.len(), "conflict")
    );
    out
}
