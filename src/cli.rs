//! Command-line interface definition.
use std::ffi::{OsStr, OsString};

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the MCP configuration scanner.
#[derive(Parser, Debug)]
#[command(
    name = "mcpscope",
    about = "Find MCP server configurations and show which definition wins",
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Subcommand; none means `scan`.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print version information
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// How many directory levels to descend below each search root
    #[arg(long, global = true, default_value_t = crate::discovery::DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Emit the report as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show every discovered configuration (default)
    Scan,
    /// Alias of `scan`
    List,
    /// Show only server names defined in more than one place
    Conflicts,
    /// Show usage, or setup guidance for a known server
    Help(HelpOpts),
}

/// Options for the `help` subcommand.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct HelpOpts {
    /// Server name to show guidance for
    pub name: Option<String>,
}

impl Cli {
    /// The command to run; no command means `scan`.
    #[must_use]
    pub fn effective_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Scan)
    }
}

/// Parse `args`, treating an unknown subcommand as a plain scan.
///
/// The unknown word is dropped and the remaining flags are parsed as usual,
/// so `mcpscope frobnicate --json` behaves like `mcpscope --json`.
///
/// # Errors
///
/// Returns the clap error for anything else that fails to parse, including
/// `--help`, which clap reports as an error to be printed.
pub fn parse_lenient<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    loop {
        match Cli::try_parse_from(&args) {
            Err(e) if e.kind() == ErrorKind::InvalidSubcommand => {
                let Some(pos) = unknown_subcommand_position(&e, &args) else {
                    return Err(e);
                };
                args.remove(pos);
            }
            other => return other,
        }
    }
}

/// Index in `args` of the word clap rejected as a subcommand.
fn unknown_subcommand_position(err: &clap::Error, args: &[OsString]) -> Option<usize> {
    let Some(ContextValue::String(word)) = err.get(ContextKind::InvalidSubcommand) else {
        return None;
    };
    args.iter()
        .skip(1)
        .position(|a| a.as_os_str() == OsStr::new(word))
        .map(|i| i + 1)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_scans() {
        let cli = Cli::parse_from(["mcpscope"]);
        assert_eq!(cli.effective_command(), Command::Scan);
        assert!(!cli.version);
    }

    #[test]
    fn parse_list_and_conflicts() {
        assert_eq!(Cli::parse_from(["mcpscope", "list"]).effective_command(), Command::List);
        assert_eq!(
            Cli::parse_from(["mcpscope", "conflicts"]).effective_command(),
            Command::Conflicts
        );
    }

    #[test]
    fn parse_help_with_name() {
        let cli = Cli::parse_from(["mcpscope", "help", "github"]);
        assert_eq!(
            cli.effective_command(),
            Command::Help(HelpOpts {
                name: Some("github".to_string())
            })
        );
    }

    #[test]
    fn parse_help_without_name() {
        let cli = Cli::parse_from(["mcpscope", "help"]);
        assert_eq!(cli.effective_command(), Command::Help(HelpOpts { name: None }));
    }

    #[test]
    fn parse_version_short_and_long() {
        assert!(Cli::parse_from(["mcpscope", "-v"]).version);
        assert!(Cli::parse_from(["mcpscope", "--version"]).version);
    }

    #[test]
    fn parse_verbose_is_global() {
        let cli = Cli::parse_from(["mcpscope", "conflicts", "--verbose"]);
        assert!(cli.verbose);
        assert!(!cli.version);
    }

    #[test]
    fn max_depth_defaults_and_overrides() {
        let cli = Cli::parse_from(["mcpscope"]);
        assert_eq!(cli.global.max_depth, crate::discovery::DEFAULT_MAX_DEPTH);

        let cli = Cli::parse_from(["mcpscope", "scan", "--max-depth", "2"]);
        assert_eq!(cli.global.max_depth, 2);
    }

    #[test]
    fn parse_json() {
        let cli = Cli::parse_from(["mcpscope", "--json", "conflicts"]);
        assert!(cli.global.json);
    }

    #[test]
    fn unknown_subcommand_falls_back_to_scan() {
        let cli = parse_lenient(["mcpscope", "frobnicate"]).unwrap();
        assert_eq!(cli.effective_command(), Command::Scan);
    }

    #[test]
    fn unknown_subcommand_keeps_other_flags() {
        let cli = parse_lenient([
            "mcpscope",
            "frobnicate",
            "--json",
            "--verbose",
            "--max-depth",
            "2",
        ])
        .unwrap();
        assert_eq!(cli.effective_command(), Command::Scan);
        assert!(cli.global.json);
        assert!(cli.verbose);
        assert_eq!(cli.global.max_depth, 2);
    }

    #[test]
    fn flags_before_unknown_subcommand_are_kept() {
        let cli = parse_lenient(["mcpscope", "--json", "frobnicate"]).unwrap();
        assert!(cli.global.json);
    }

    #[test]
    fn other_parse_errors_are_reported() {
        let err = parse_lenient(["mcpscope", "--max-depth", "deep"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
