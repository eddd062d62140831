//! Tracing subscriber setup: console formatter and initialisation.
use super::utils::strip_ansi;

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// Render one event as a console line, without the trailing newline.
fn format_line(level: tracing::Level, target: &str, msg: &str) -> String {
    match level {
        tracing::Level::ERROR => format!("\x1b[31mERROR\x1b[0m {msg}"),
        tracing::Level::WARN => format!("\x1b[33mWARN\x1b[0m  {msg}"),
        tracing::Level::INFO if target == "mcpscope::stage" => {
            format!("\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m")
        }
        tracing::Level::INFO => format!("  {msg}"),
        _ => format!("  \x1b[2m{msg}\x1b[0m"),
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits mcpscope-style
/// console output, optionally without ANSI colors.
struct ScanFormatter {
    color: bool,
}

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for ScanFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);

        let line = format_line(*metadata.level(), metadata.target(), &extractor.message);
        if self.color {
            writeln!(writer, "{line}")
        } else {
            writeln!(writer, "{}", strip_ansi(&line))
        }
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// All events go to stderr so that stdout carries only the report (and stays
/// valid JSON under `--json`). `verbose` lowers the level from `INFO` to
/// `DEBUG`. Must be called once at program startup, before any logging.
pub fn init_subscriber(verbose: bool, color: bool) {
    use tracing_subscriber::{
        Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let console_layer = fmt::layer()
        .event_format(ScanFormatter { color })
        .with_writer(std::io::stderr)
        .with_filter(console_level);

    tracing_subscriber::registry().with(console_layer).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_target_renders_arrow() {
        let line = strip_ansi(&format_line(tracing::Level::INFO, "mcpscope::stage", "Scan"));
        assert_eq!(line, "==> Scan");
    }

    #[test]
    fn warn_and_error_are_tagged() {
        assert_eq!(
            strip_ansi(&format_line(tracing::Level::WARN, "mcpscope", "careful")),
            "WARN  careful"
        );
        assert_eq!(
            strip_ansi(&format_line(tracing::Level::ERROR, "mcpscope", "broken")),
            "ERROR broken"
        );
    }

    #[test]
    fn info_and_debug_are_indented() {
        assert_eq!(format_line(tracing::Level::INFO, "mcpscope", "x"), "  x");
        assert_eq!(
            strip_ansi(&format_line(tracing::Level::DEBUG, "mcpscope", "y")),
            "  y"
        );
    }
}
