//! In-memory logger that captures entries for later inspection or replay.
use std::sync::Mutex;

use super::types::{Log, LogEntry};

/// Implement the methods of [`Log`] by pushing each message into
/// `self.entries` as the corresponding [`LogEntry`] variant.
macro_rules! buffer_log_methods {
    ($($method:ident => $variant:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                if let Ok(mut guard) = self.entries.lock() {
                    guard.push(LogEntry::$variant(msg.to_string()));
                }
            }
        )+
    };
}

/// Captures log output in memory.
///
/// Useful when a caller needs to know exactly which diagnostics a scan
/// produced.
#[derive(Debug, Default)]
pub struct BufferedLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl BufferedLog {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of every captured entry, in order.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().map_or_else(|_| Vec::new(), |g| g.clone())
    }

    /// Count captured warnings and errors.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.entries.lock().map_or(0, |guard| {
            guard
                .iter()
                .filter(|e| matches!(e, LogEntry::Warn(_) | LogEntry::Error(_)))
                .count()
        })
    }
}

impl Log for BufferedLog {
    buffer_log_methods! {
        stage => Stage,
        info  => Info,
        debug => Debug,
        warn  => Warn,
        error => Error,
    }
}
