//!
//! The contract build artifact.
//!

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::abi::Abi;

///
/// The contract build artifact: one per `(source name, contract name)` pair.
///
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// The artifact format version, distinguishing these artifacts from
    /// those of other tools sharing the same store.
    #[serde(rename = "_format")]
    pub format: String,
    /// The contract name.
    pub contract_name: String,
    /// The source-root-relative file path.
    pub source_name: String,
    /// The contract ABI.
    pub abi: Abi,
    /// The deploy bytecode as a normalized hexadecimal string.
    pub bytecode: String,
    /// The runtime bytecode as a normalized hexadecimal string.
    pub deployed_bytecode: String,
    /// The deploy bytecode link references. Always empty: the Yul+ pipeline
    /// produces no library placeholders.
    pub link_references: BTreeMap<String, serde_json::Value>,
    /// The runtime bytecode link references. Always empty.
    pub deployed_link_references: BTreeMap<String, serde_json::Value>,
}

impl Artifact {
    /// The artifact format version.
    pub const FORMAT_VERSION: &'static str = "hh-yulp-artifact-1";

    ///
    /// A shortcut constructor. Normalizes both bytecode strings.
    ///
    pub fn new(
        source_name: String,
        contract_name: String,
        bytecode: &str,
        deployed_bytecode: &str,
        abi: Abi,
    ) -> Self {
        Self {
            format: Self::FORMAT_VERSION.to_owned(),
            contract_name,
            source_name,
            abi,
            bytecode: Self::normalize_hex(bytecode),
            deployed_bytecode: Self::normalize_hex(deployed_bytecode),
            link_references: BTreeMap::new(),
            deployed_link_references: BTreeMap::new(),
        }
    }

    ///
    /// Lower-cases the hexadecimal string and prepends the `0x` prefix if it
    /// is absent.
    ///
    fn normalize_hex(string: &str) -> String {
        let string = string.to_lowercase();
        if string.starts_with("0x") {
            string
        } else {
            format!("0x{}", string)
        }
    }
}
