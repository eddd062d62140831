//! Top-level subcommand orchestration.
pub mod conflicts;
pub mod help;
pub mod scan;
pub mod version;

use anyhow::Result;
use serde::Serialize;

use crate::cli::{Cli, Command, GlobalOpts};
use crate::config::DiscoveryRecord;
use crate::discovery::{self, ScanOptions};
use crate::logging::Log;
use crate::platform::Platform;
use crate::render::Style;
use crate::resolve::{self, ConflictGroup};

/// Shared state produced by the common command setup sequence.
#[derive(Debug)]
pub struct CommandSetup {
    /// Scan configuration derived from the environment and global flags.
    pub options: ScanOptions,
}

impl CommandSetup {
    /// Detect the platform and build the scan options.
    ///
    /// # Errors
    ///
    /// Returns an error if neither the home nor the current directory can be
    /// determined.
    pub fn init(global: &GlobalOpts, log: &dyn Log) -> Result<Self> {
        let platform = Platform::detect()?;
        log.debug(&format!("home: {}", platform.home.display()));
        log.debug(&format!("cwd: {}", platform.cwd.display()));

        let options = ScanOptions::new(platform).with_max_depth(global.max_depth);
        for seed in &options.seeds {
            log.debug(&format!("seed: {}", seed.display()));
        }
        Ok(Self { options })
    }
}

/// Discovered records and the conflicts among them.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// Every source, ordered by directory path length.
    pub records: &'a [DiscoveryRecord],
    /// One group per server name declared more than once.
    pub conflicts: Vec<ConflictGroup<'a>>,
}

impl<'a> Report<'a> {
    /// Resolve conflicts among `records`.
    #[must_use]
    pub fn new(records: &'a [DiscoveryRecord]) -> Self {
        Self {
            records,
            conflicts: resolve::resolve(records),
        }
    }

    /// Pretty-printed JSON form of the report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)? + "\n")
    }
}

/// Run a discovery pass with the options from `setup`.
fn discover(setup: &CommandSetup, log: &dyn Log) -> Vec<DiscoveryRecord> {
    log.stage(&format!(
        "Scanning {} location(s)",
        setup.options.seeds.len()
    ));
    let records = discovery::discover(&setup.options, log);
    log.debug(&format!("{} source(s) after merge", records.len()));
    records
}

/// Run the parsed command and return what it prints to stdout.
///
/// # Errors
///
/// Returns an error if setup fails or the report cannot be serialized.
pub fn execute(cli: &Cli, style: Style, log: &dyn Log) -> Result<String> {
    if cli.version {
        return Ok(version::render());
    }
    match cli.effective_command() {
        Command::Scan | Command::List => {
            let setup = CommandSetup::init(&cli.global, log)?;
            scan::run(&setup, &cli.global, style, log)
        }
        Command::Conflicts => {
            let setup = CommandSetup::init(&cli.global, log)?;
            conflicts::run(&setup, &cli.global, style, log)
        }
        Command::Help(opts) => Ok(help::run(&opts, style, log)),
    }
}

/// Execute the command and write its output to stdout.
///
/// # Errors
///
/// Returns any error from [`execute`].
#[allow(clippy::print_stdout)]
pub fn dispatch(cli: &Cli, style: Style, log: &dyn Log) -> Result<()> {
    let out = execute(cli, style, log)?;
    print!("{out}");
    Ok(())
}
