//!
//! The ABI entry.
//!

pub mod constructor;
pub mod event;
pub mod function;

use serde::Deserialize;
use serde::Serialize;

use self::constructor::Constructor;
use self::event::Event;
use self::function::Function;

///
/// The ABI entry.
///
/// Serialized with the entry kind in the `type` field, matching the JSON ABI
/// layout consumed by contract tooling.
///
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Entry {
    /// The synthesized constructor entry.
    Constructor(Constructor),
    /// A function entry parsed from a signature annotation.
    Function(Function),
    /// An event entry parsed from a topic annotation.
    Event(Event),
}
