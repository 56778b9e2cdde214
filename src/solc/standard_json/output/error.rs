//!
//! The `solc --standard-json` output diagnostic.
//!

use colored::Colorize;

use serde::Deserialize;
use serde::Serialize;

///
/// The `solc --standard-json` output diagnostic.
///
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    /// The diagnostic severity.
    #[serde(default)]
    pub severity: String,
    /// The diagnostic message.
    pub message: String,
    /// The diagnostic message with the source location rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_message: Option<String>,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = self
            .formatted_message
            .as_deref()
            .unwrap_or(self.message.as_str());
        match self.severity.as_str() {
            "error" => write!(f, "{}", message.red()),
            "warning" => write!(f, "{}", message.yellow()),
            _ => write!(f, "{}", message),
        }
    }
}
