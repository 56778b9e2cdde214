//!
//! The ABI constructor entry.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::abi::parameter::Parameter;
use crate::abi::state_mutability::StateMutability;

///
/// The ABI constructor entry.
///
/// The Yul+ front-end emits no constructor annotation, so the entry is
/// synthesized with no inputs and the `nonpayable` mutability.
///
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Constructor {
    /// The constructor inputs. Always empty.
    pub inputs: Vec<Parameter>,
    /// The constructor state mutability. Always `nonpayable`.
    pub state_mutability: StateMutability,
}

impl Default for Constructor {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            state_mutability: StateMutability::Nonpayable,
        }
    }
}
