//! Command: show only conflicting server names.
use anyhow::Result;

use super::{CommandSetup, Report};
use crate::cli::GlobalOpts;
use crate::logging::Log;
use crate::render::{self, Style};

/// Discover all sources and render the conflict report, or the full report
/// as JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(setup: &CommandSetup, global: &GlobalOpts, style: Style, log: &dyn Log) -> Result<String> {
    let records = super::discover(setup, log);
    let report = Report::new(&records);

    if global.json {
        return report.to_json();
    }
    log.debug(&format!("{} conflicting name(s)", report.conflicts.len()));
    Ok(render::render_conflicts(&report.conflicts, style))
}
