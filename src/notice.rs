//! Classified user-facing messages.
//!
//! Hosts decide how to render a [`Notice`]; the CLI prints it to stderr with a
//! coloured prefix.

use std::fmt;

use owo_colors::{OwoColorize, Stream};

pub const NOTICE_TITLE: &str = "Open in Cursor";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: NOTICE_TITLE,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Write the notice to stderr, colouring the prefix when the terminal allows it.
    pub fn emit(&self) {
        let prefix_raw = format!("{} {}:", self.title, self.severity.label());
        let prefix = match self.severity {
            Severity::Error => format!(
                "{}",
                prefix_raw
                    .as_str()
                    .if_supports_color(Stream::Stderr, |text| format!("{}", text.red().bold()))
            ),
            Severity::Warning => format!(
                "{}",
                prefix_raw
                    .as_str()
                    .if_supports_color(Stream::Stderr, |text| format!("{}", text.yellow()))
            ),
        };
        eprintln!("{} {}", prefix, self.message);
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.title, self.severity.label(), self.message)
    }
}
