//!
//! The `solc --standard-json` protocol.
//!

pub mod input;
pub mod output;
