//!
//! The ABI entry state mutability.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The ABI entry state mutability.
///
/// The front-end annotations only distinguish `view`. Every other declared
/// function is treated as `payable`; only the synthesized constructor entry
/// is `nonpayable`.
///
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    /// The synthesized constructor mutability.
    Nonpayable,
    /// The default mutability of declared functions.
    Payable,
    /// The mutability of functions carrying the `view` marker.
    View,
}
