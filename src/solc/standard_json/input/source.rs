//!
//! The `solc --standard-json` input source.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The `solc --standard-json` input source.
///
#[derive(Debug, Serialize, Deserialize)]
pub struct Source {
    /// The source code file content.
    pub content: String,
}

impl From<String> for Source {
    fn from(content: String) -> Self {
        Self { content }
    }
}
