//!
//! The Yul+ front-end output.
//!

pub mod annotation;

use serde::Deserialize;

use self::annotation::Annotation;

///
/// The Yul+ front-end output for one source file.
///
#[derive(Debug, Deserialize)]
pub struct Output {
    /// The printed Yul text, fed to `solc` as the source content.
    pub text: String,
    /// The function signature annotations in source order.
    #[serde(default)]
    pub signatures: Vec<Annotation>,
    /// The event topic annotations in source order.
    #[serde(default)]
    pub topics: Vec<Annotation>,
}
