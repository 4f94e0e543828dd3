//! Notification sink: short user-facing toasts.

use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Fire-and-forget. Implementations must not fail the caller.
pub trait NotificationSink: Send + Sync {
    fn show(&self, notification: Notification);
}

/// Prints notifications to stderr and mirrors them as tracing events.
pub struct ConsoleNotifier {
    color: bool,
}

impl ConsoleNotifier {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn render(&self, notification: &Notification) -> String {
        if !self.color {
            return format!("[{}] {}", notification.kind, notification.message);
        }
        match notification.kind {
            NotificationKind::Info => format!("{} {}", "[info]".cyan(), notification.message),
            NotificationKind::Success => {
                format!("{} {}", "[success]".green(), notification.message)
            }
            NotificationKind::Error => {
                format!("{} {}", "[error]".red().bold(), notification.message)
            }
        }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new(true)
    }
}

impl NotificationSink for ConsoleNotifier {
    fn show(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Error => tracing::warn!(text = %notification.message, "notification"),
            _ => tracing::info!(kind = %notification.kind, text = %notification.message, "notification"),
        }
        eprintln!("{}", self.render(&notification));
    }
}
