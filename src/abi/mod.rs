//!
//! The contract ABI assembled from the Yul+ front-end annotations.
//!

pub mod entry;
pub mod error;
pub mod parameter;
pub mod signature;
pub mod state_mutability;
pub mod topic;
pub mod type_name;

use serde::Deserialize;
use serde::Serialize;

use self::entry::constructor::Constructor;
use self::entry::Entry;
use self::error::Error;

///
/// The contract ABI.
///
/// Entries keep insertion order: the synthesized constructor first, then the
/// functions in annotation order, then the events in annotation order. The
/// order is what makes repeated builds of the same sources reproducible, so
/// no sorting or deduplication is applied.
///
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Abi(pub Vec<Entry>);

impl Abi {
    ///
    /// Assembles the ABI from the signature and topic annotations of one
    /// source file.
    ///
    /// Any annotation that fails to parse aborts the assembly of the whole
    /// file: an unparseable annotation means the front-end emitted output in
    /// an unexpected shape, and dropping the entry silently would persist a
    /// wrong ABI.
    ///
    pub fn try_from_annotations(signatures: &[String], topics: &[String]) -> Result<Self, Error> {
        let mut entries = Vec::with_capacity(1 + signatures.len() + topics.len());
        entries.push(Entry::Constructor(Constructor::default()));

        for text in signatures.iter() {
            entries.push(signature::parse(text.as_str())?);
        }
        for text in topics.iter() {
            entries.push(topic::parse(text.as_str())?);
        }

        Ok(Self(entries))
    }
}

#[cfg(test)]
mod tests {
    use crate::abi::entry::constructor::Constructor;
    use crate::abi::entry::Entry;
    use crate::abi::error::Error;
    use crate::abi::Abi;

    #[test]
    fn empty_input_yields_constructor_only() {
        let abi = Abi::try_from_annotations(&[], &[]).expect("Always valid");
        assert_eq!(abi, Abi(vec![Entry::Constructor(Constructor::default())]));
    }

    #[test]
    fn constructor_serialization_shape() {
        let abi = Abi::try_from_annotations(&[], &[]).expect("Always valid");
        assert_eq!(
            serde_json::to_value(&abi).expect("Always valid"),
            serde_json::json!([
                {
                    "inputs": [],
                    "stateMutability": "nonpayable",
                    "type": "constructor"
                }
            ])
        );
    }

    #[test]
    fn entries_keep_annotation_order() {
        let signatures = vec![
            r#"sig"mint(address to, uint256 amount)""#.to_owned(),
            r#"sig"burn(uint256 amount)""#.to_owned(),
        ];
        let topics = vec![
            r#"topic"event Minted(address indexed to, uint256 amount)""#.to_owned(),
            r#"topic"event Burned(uint256 amount)""#.to_owned(),
        ];
        let abi = Abi::try_from_annotations(signatures.as_slice(), topics.as_slice())
            .expect("Always valid");

        let names: Vec<Option<&str>> = abi
            .0
            .iter()
            .map(|entry| match entry {
                Entry::Constructor(_) => None,
                Entry::Function(function) => Some(function.name.as_str()),
                Entry::Event(event) => Some(event.name.as_str()),
            })
            .collect();
        assert_eq!(
            names,
            vec![
                None,
                Some("mint"),
                Some("burn"),
                Some("Minted"),
                Some("Burned")
            ]
        );
    }

    #[test]
    fn function_serialization_shape() {
        let signatures =
            vec![r#"sig"transfer(address to, uint256 amount) returns (bool)""#.to_owned()];
        let abi = Abi::try_from_annotations(signatures.as_slice(), &[]).expect("Always valid");
        assert_eq!(
            serde_json::to_value(&abi.0[1]).expect("Always valid"),
            serde_json::json!({
                "type": "function",
                "name": "transfer",
                "inputs": [
                    { "name": "to", "type": "address", "internalType": "address" },
                    { "name": "amount", "type": "uint256", "internalType": "uint256" }
                ],
                "outputs": [
                    { "type": "bool", "internalType": "bool" }
                ],
                "stateMutability": "payable"
            })
        );
    }

    #[test]
    fn serialization_round_trip() {
        let signatures = vec![r#"sig"balanceOf(address who) view returns (uint)""#.to_owned()];
        let topics =
            vec![r#"topic"event Transfer(address indexed from, uint256 amount)""#.to_owned()];
        let abi = Abi::try_from_annotations(signatures.as_slice(), topics.as_slice())
            .expect("Always valid");

        let json = serde_json::to_string(&abi).expect("Always valid");
        let restored: Abi = serde_json::from_str(json.as_str()).expect("Always valid");
        assert_eq!(abi, restored);
    }

    #[test]
    fn malformed_signature_aborts_assembly() {
        let signatures = vec![
            r#"sig"mint(address to)""#.to_owned(),
            r#"sig"burn(uint256"#.to_owned(),
        ];
        assert_eq!(
            Abi::try_from_annotations(signatures.as_slice(), &[]),
            Err(Error::MalformedSignature {
                text: r#"sig"burn(uint256"#.to_owned(),
            })
        );
    }
}
