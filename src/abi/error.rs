//!
//! The Yul+ ABI annotation parser error.
//!

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The function signature annotation does not match the grammar.
    #[error("Malformed function signature `{text}`")]
    MalformedSignature {
        /// The annotation text as received from the front-end.
        text: String,
    },
    /// The event topic annotation does not match the grammar.
    #[error("Malformed event topic `{text}`")]
    MalformedTopic {
        /// The annotation text as received from the front-end.
        text: String,
    },
}
