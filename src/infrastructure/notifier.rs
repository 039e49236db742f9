// src/infrastructure/notifier.rs
use crate::domain::notification::{Notification, Severity};
use crate::domain::services::notifier::Notifier;
use crossterm::style::Stylize;
use tracing::{error, info};

/// Prints notifications to stderr, coloured by severity.
///
/// stderr keeps stdout clean for `--json` output.
#[derive(Debug, Clone)]
pub struct TerminalNotifier {
    color: bool,
}

impl TerminalNotifier {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        let line = if self.color {
            match notification.severity {
                Severity::Success => format!("{}", notification.message.as_str().green()),
                Severity::Info => format!("{}", notification.message.as_str().blue()),
                Severity::Error => format!("{}", notification.message.as_str().red()),
            }
        } else {
            notification.message.clone()
        };
        eprintln!("{}", line);
    }
}

/// Sends notifications to the tracing log only
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Error => error!(target: "learnify::notify", "{}", notification.message),
            _ => info!(target: "learnify::notify", severity = %notification.severity, "{}", notification.message),
        }
    }
}
