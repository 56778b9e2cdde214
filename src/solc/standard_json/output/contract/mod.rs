//!
//! The `solc --standard-json` output contract.
//!

pub mod evm;

use serde::Deserialize;
use serde::Serialize;

use self::evm::EVM;

///
/// The `solc --standard-json` output contract.
///
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// The contract EVM data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evm: Option<EVM>,
}
