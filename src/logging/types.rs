//! Core logging types: captured entries and the [`Log`] trait.

/// A single log message, tagged with its level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    /// A stage header entry.
    Stage(String),
    /// An informational entry.
    Info(String),
    /// A debug entry.
    Debug(String),
    /// A warning entry.
    Warn(String),
    /// An error entry.
    Error(String),
}

impl LogEntry {
    /// The message text regardless of level.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Stage(msg)
            | Self::Info(msg)
            | Self::Debug(msg)
            | Self::Warn(msg)
            | Self::Error(msg) => msg,
        }
    }
}

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) forwards to `tracing`;
/// [`BufferedLog`](super::buffered::BufferedLog) keeps entries in memory.
/// Discovery code only sees `&dyn Log`.
pub trait Log {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (suppressed on console unless verbose).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_ignores_level() {
        assert_eq!(LogEntry::Warn("w".to_string()).message(), "w");
        assert_eq!(LogEntry::Stage("s".to_string()).message(), "s");
    }

    #[test]
    fn entries_compare_by_level_and_text() {
        assert_eq!(LogEntry::Info("a".into()), LogEntry::Info("a".into()));
        assert_ne!(LogEntry::Info("a".into()), LogEntry::Debug("a".into()));
    }
}
