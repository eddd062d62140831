//! Command: show every discovered configuration.
use anyhow::Result;

use super::{CommandSetup, Report};
use crate::cli::GlobalOpts;
use crate::logging::Log;
use crate::render::{self, Style};

/// Discover all sources and render them as a tree, or as JSON.
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
    if records.is_empty() {
        return Ok(render::render_empty(
            &setup.options.seeds,
            setup.options.rules.max_depth,
            style,
        ));
    }
    Ok(render::render_tree(&records, &report.conflicts, style))
}
