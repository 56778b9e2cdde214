//!
//! The `solc --standard-json` input settings.
//!

pub mod optimizer;

use serde::Deserialize;
use serde::Serialize;

use self::optimizer::Optimizer;

///
/// The `solc --standard-json` input settings.
///
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// The output selection filters.
    pub output_selection: serde_json::Value,
    /// The optimizer settings.
    pub optimizer: Optimizer,
}

impl Settings {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(output_selection: serde_json::Value, optimize: bool) -> Self {
        Self {
            output_selection,
            optimizer: Optimizer::new(optimize),
        }
    }

    ///
    /// The output selection for the Yul pipeline: everything for every
    /// contract, in named and unnamed source units alike.
    ///
    pub fn get_output_selection() -> serde_json::Value {
        serde_json::json!({ "*": { "*": [ "*" ], "": [ "*" ] } })
    }
}
