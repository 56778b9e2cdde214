//!
//! The `solc --standard-json` input optimizer settings.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The `solc --standard-json` input optimizer settings.
///
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimizer {
    /// Whether the optimizer is enabled.
    pub enabled: bool,
    /// The optimizer details. The Yul optimizer is always requested, since
    /// the pipeline compiles nothing else.
    pub details: serde_json::Value,
}

impl Optimizer {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            details: serde_json::json!({ "yul": true }),
        }
    }
}
