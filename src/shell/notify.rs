//! Toast notifications.
//!
//! Notices are fire-and-forget: the caller never learns whether one was shown.

use std::fmt;
use tracing::trace;

/// How a notice is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something the user asked for happened
    Success,
    /// Guidance, such as what to do before checkout can go through
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "✅",
            Self::Info => "ℹ️",
        })
    }
}

/// Anything that can show a short message to the user.
pub trait Notifier {
    /// Shows `message`. Must not fail or block.
    fn notify(&mut self, severity: Severity, message: &str);
}

/// Prints notices to standard output, for the terminal front-end.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    #[allow(clippy::print_stdout)]
    fn notify(&mut self, severity: Severity, message: &str) {
        trace!(?severity, message, "Notice");
        println!("{severity} {message}");
    }
}

/// Keeps every notice in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingNotifier {
    notices: Vec<(Severity, String)>,
}

impl RecordingNotifier {
    /// Every notice so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> &[(Severity, String)] {
        &self.notices
    }

    /// The most recent notice, if any.
    #[must_use]
    pub fn last(&self) -> Option<(Severity, &str)> {
        self.notices
            .last()
            .map(|(severity, message)| (*severity, message.as_str()))
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, severity: Severity, message: &str) {
        self.notices.push((severity, message.to_string()));
    }
}
