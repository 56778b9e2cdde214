//!
//! The ABI function or event parameter.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::abi::type_name;

///
/// The ABI function or event parameter.
///
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// The parameter name. Omitted for unnamed parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The normalized parameter type.
    #[serde(rename = "type")]
    pub r#type: String,
    /// The normalized parameter type as seen by the source language.
    pub internal_type: String,
    /// Whether the parameter is indexed. Only present on event parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
}

impl Parameter {
    ///
    /// A shortcut constructor for function inputs and outputs.
    ///
    pub fn new(r#type: &str, name: Option<String>) -> Self {
        let r#type = type_name::normalize(r#type);
        Self {
            name,
            internal_type: r#type.clone(),
            r#type,
            indexed: None,
        }
    }

    ///
    /// A shortcut constructor for event inputs.
    ///
    pub fn new_indexed(r#type: &str, name: Option<String>, indexed: bool) -> Self {
        let mut parameter = Self::new(r#type, name);
        parameter.indexed = Some(indexed);
        parameter
    }
}
