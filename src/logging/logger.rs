//! Console logger backed by the global `tracing` subscriber.
use super::types::Log;

/// Implement the methods of [`Log`] by delegating to inherent methods of the
/// same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Structured logger that emits every message as a `tracing` event.
///
/// Formatting and routing (all levels go to stderr, stdout is reserved for
/// reports) are decided by [`init_subscriber`](super::subscriber::init_subscriber).
#[derive(Debug, Default, Clone, Copy)]
pub struct Logger;

#[allow(clippy::unused_self)]
impl Logger {
    /// Create a new logger.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: "mcpscope::stage", "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, warn, error);
}
