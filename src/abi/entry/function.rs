//!
//! The ABI function entry.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::abi::parameter::Parameter;
use crate::abi::state_mutability::StateMutability;

///
/// The ABI function entry.
///
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    /// The function name.
    pub name: String,
    /// The function inputs in declaration order.
    pub inputs: Vec<Parameter>,
    /// The function outputs in declaration order.
    pub outputs: Vec<Parameter>,
    /// The function state mutability.
    pub state_mutability: StateMutability,
}
