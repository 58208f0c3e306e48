//! Transient notification messages, one visible at a time.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn sev_as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sev_as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new<T: Into<String>>(message: T, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn info<T: Into<String>>(message: T) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn success<T: Into<String>>(message: T) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn warning<T: Into<String>>(message: T) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn danger<T: Into<String>>(message: T) -> Self {
        Self::new(message, Severity::Danger)
    }
}
