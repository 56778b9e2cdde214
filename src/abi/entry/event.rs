//!
//! The ABI event entry.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::abi::parameter::Parameter;

///
/// The ABI event entry.
///
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// The event name.
    pub name: String,
    /// The event inputs in declaration order.
    pub inputs: Vec<Parameter>,
    /// Whether the event is anonymous. The Yul+ grammar cannot declare
    /// anonymous events, so the flag is always `false`.
    pub anonymous: bool,
}
