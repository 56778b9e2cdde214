//!
//! The Yul+ front-end ABI annotation.
//!

use serde::Deserialize;

///
/// One ABI annotation: a single `sig"..."` or `topic"..."` text.
///
#[derive(Debug, Deserialize)]
pub struct Annotation {
    /// The annotation text.
    pub abi: String,
}
