//! Command: print version information.

/// The build's version: `git describe` output when available.
#[must_use]
pub fn version() -> &'static str {
    option_env!("MCPSCOPE_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// The version line printed by `--version`.
#[must_use]
pub fn render() -> String {
    format!("mcpscope {}\n", version())
}
