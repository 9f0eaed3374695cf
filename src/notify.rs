//! User-facing notifications
//!
//! The viewer surfaces a handful of conditions directly to the user rather
//! than only to the log: description load failure, a structurally invalid
//! description, and a successful initial load. With no windowing layer in
//! the workspace these render as framed console boxes.

use tracing::error;

/// How prominent a notification is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Error => "ERROR",
        }
    }
}

/// Show a notification to the user.
pub fn notify(severity: Severity, title: &str, message: &str) {
    if severity == Severity::Error {
        error!("{}: {}", title, message);
    }
    eprintln!("{}", format_notification(severity, title, message));
}

fn format_notification(severity: Severity, title: &str, message: &str) -> String {
    let heading = format!("[{}] {}", severity.label(), title);
    let width = heading.len().max(message.len());
    let rule = "=".repeat(width);
    format!("{rule}\n{heading}\n{message}\n{rule}")
}
