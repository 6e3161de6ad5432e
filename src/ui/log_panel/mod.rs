// SPDX-License-Identifier: MPL-2.0
//! Build log panel.
//!
//! An append-only list of timestamped entries describing what happened
//! during builds. Entries live for the lifetime of the process only.

mod view;

pub use view::{view, LOG_SCROLLABLE_ID};

use chrono::{DateTime, Local};
use iced::Color;

use crate::ui::design_tokens::palette;

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogSeverity {
    #[default]
    Info,
    Success,
    Error,
}

impl LogSeverity {
    #[must_use]
    pub fn color(self) -> Option<Color> {
        match self {
            LogSeverity::Info => None,
            LogSeverity::Success => Some(palette::SUCCESS_500),
            LogSeverity::Error => Some(palette::ERROR_500),
        }
    }
}

/// One immutable line of the build log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    message: String,
    severity: LogSeverity,
    timestamp: DateTime<Local>,
}

impl LogEntry {
    #[must_use]
    pub fn new(message: impl Into<String>, severity: LogSeverity, timestamp: DateTime<Local>) -> Self {
        Self {
            message: message.into(),
            severity,
            timestamp,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> LogSeverity {
        self.severity
    }

    /// Wall-clock time of the entry, e.g. `14:03:27`.
    #[must_use]
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    /// Entry as a single export line: `[time] message`.
    #[must_use]
    pub fn export_line(&self) -> String {
        format!("[{}] {}", self.time_label(), self.message)
    }
}

/// Ordered build log.
#[derive(Debug, Clone, Default)]
pub struct LogPanel {
    entries: Vec<LogEntry>,
}

impl LogPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry stamped with the current local time.
    pub fn append(&mut self, message: impl Into<String>, severity: LogSeverity) {
        self.append_at(message, severity, Local::now());
    }

    pub fn append_at(
        &mut self,
        message: impl Into<String>,
        severity: LogSeverity,
        timestamp: DateTime<Local>,
    ) {
        self.entries.push(LogEntry::new(message, severity, timestamp));
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Plain-text rendering used for copy and download.
    #[must_use]
    pub fn export_text(&self) -> String {
        self.entries
            .iter()
            .map(LogEntry::export_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
