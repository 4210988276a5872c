//! SNP 1.1 message encoding
//!
//! One notification is one line:
//!
//! ```text
//! type=SNP#?version=1.1#?action=notification#?app=Gradle Snarl Notifier#?class=alert#?title=<T>#?text=<M>[#?icon=<path>]#?timeout=10\r\n
//! ```
//!
//! Property order is fixed. Empty or absent values are left out entirely.

use std::fmt::Write as _;
use std::path::PathBuf;

/// Protocol header
pub const SNP_HEADER: &str = "type=SNP#?version=1.1";

/// TCP port Snarl listens on
pub const SNARL_PORT: u16 = 9887;

pub const APP_NAME: &str = "Gradle Snarl Notifier";

/// Seconds the notification stays visible
pub const TIMEOUT_SECS: u32 = 10;

/// Icon size requested from the icon provider
pub const ICON_SIZE: u32 = 32;

const LINE_END: &str = "\r\n";

/// A notification ready for SNP encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnpMessage {
    pub title: String,
    pub body: String,
    pub icon: Option<PathBuf>,
    pub timeout_secs: u32,
}

impl SnpMessage {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            icon: None,
            timeout_secs: TIMEOUT_SECS,
        }
    }

    pub fn with_icon(mut self, icon: Option<PathBuf>) -> Self {
        self.icon = icon;
        self
    }

    /// Properties in wire order; `None` for anything that will be skipped
    pub fn properties(&self) -> [(&'static str, Option<String>); 7] {
        [
            ("action", Some("notification".to_string())),
            ("app", Some(APP_NAME.to_string())),
            ("class", Some("alert".to_string())),
            ("title", Some(self.title.clone())),
            ("text", Some(self.body.clone())),
            ("icon", self.icon.as_ref().map(|p| p.to_string_lossy().into_owned())),
            ("timeout", Some(self.timeout_secs.to_string())),
        ]
    }

    /// Full wire line including the trailing CRLF
    pub fn encode(&self) -> String {
        let mut line = String::from(SNP_HEADER);
        for (name, value) in self.properties() {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                let _ = write!(line, "#?{}={}", name, value);
            }
        }
        line.push_str(LINE_END);
        line
    }
}
