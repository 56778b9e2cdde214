//!
//! The function signature annotation parser.
//!

use regex::Regex;

use crate::abi::entry::function::Function;
use crate::abi::entry::Entry;
use crate::abi::error::Error;
use crate::abi::parameter::Parameter;
use crate::abi::state_mutability::StateMutability;

///
/// Parses one `sig"..."` annotation into an ABI function entry.
///
/// The grammar is fixed by the front-end:
/// `sig"<name>(<params>)( public)?( external)?( view)?( returns (<returns>))?"`.
/// A text that does not match it is an upstream contract violation and fails
/// with `MalformedSignature` instead of yielding a partial entry.
///
pub fn parse(text: &str) -> Result<Entry, Error> {
    let signature = Regex::new(
        r#"^sig"([\w]+)\(([\w, \[\]]*)\)(?: public)?(?: external)?(?: (view))?(?: returns \(([\w, \[\]]+)\))?"$"#,
    )
    .expect("Always valid");

    let captures = signature.captures(text).ok_or_else(|| Error::MalformedSignature {
        text: text.to_owned(),
    })?;

    let name = captures[1].to_owned();
    let inputs = parse_parameter_list(&captures[2], text)?;
    let outputs =
        parse_parameter_list(captures.get(4).map(|list| list.as_str()).unwrap_or(""), text)?;
    let state_mutability = if captures.get(3).is_some() {
        StateMutability::View
    } else {
        StateMutability::Payable
    };

    Ok(Entry::Function(Function {
        name,
        inputs,
        outputs,
        state_mutability,
    }))
}

///
/// Splits a comma-separated parameter list and parses each element.
///
/// An empty list yields zero parameters. The split is literal, so types
/// containing commas are not representable, which matches the grammar.
///
fn parse_parameter_list(list: &str, text: &str) -> Result<Vec<Parameter>, Error> {
    let parameter = Regex::new(r#"^([\w\[\]]+)(?: memory| external)?( [\w]+)?$"#)
        .expect("Always valid");

    if list.is_empty() {
        return Ok(Vec::new());
    }

    list.split(',')
        .map(|element| {
            let captures =
                parameter
                    .captures(element.trim())
                    .ok_or_else(|| Error::MalformedSignature {
                        text: text.to_owned(),
                    })?;
            let name = captures.get(2).map(|name| name.as_str().trim().to_owned());
            Ok(Parameter::new(&captures[1], name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::abi::entry::function::Function;
    use crate::abi::entry::Entry;
    use crate::abi::error::Error;
    use crate::abi::parameter::Parameter;
    use crate::abi::state_mutability::StateMutability;

    #[test]
    fn function_with_named_parameters() {
        let result = super::parse(r#"sig"transfer(address to, uint256 amount) returns (bool)""#);
        assert_eq!(
            result,
            Ok(Entry::Function(Function {
                name: "transfer".to_owned(),
                inputs: vec![
                    Parameter::new("address", Some("to".to_owned())),
                    Parameter::new("uint256", Some("amount".to_owned())),
                ],
                outputs: vec![Parameter::new("bool", None)],
                state_mutability: StateMutability::Payable,
            }))
        );
    }

    #[test]
    fn view_function_with_normalized_return_type() {
        let result = super::parse(r#"sig"balanceOf(address who) view returns (uint)""#);
        assert_eq!(
            result,
            Ok(Entry::Function(Function {
                name: "balanceOf".to_owned(),
                inputs: vec![Parameter::new("address", Some("who".to_owned()))],
                outputs: vec![Parameter::new("uint256", None)],
                state_mutability: StateMutability::View,
            }))
        );
    }

    #[test]
    fn function_without_parameters() {
        let result = super::parse(r#"sig"totalSupply() view returns (uint256)""#);
        assert_eq!(
            result,
            Ok(Entry::Function(Function {
                name: "totalSupply".to_owned(),
                inputs: vec![],
                outputs: vec![Parameter::new("uint256", None)],
                state_mutability: StateMutability::View,
            }))
        );
    }

    #[test]
    fn function_with_location_markers() {
        let result = super::parse(r#"sig"write(bytes memory data) external""#);
        assert_eq!(
            result,
            Ok(Entry::Function(Function {
                name: "write".to_owned(),
                inputs: vec![Parameter::new("bytes", Some("data".to_owned()))],
                outputs: vec![],
                state_mutability: StateMutability::Payable,
            }))
        );
    }

    #[test]
    fn error_missing_closing_quote() {
        let text = r#"sig"transfer(address to, uint256 amount)"#;
        assert_eq!(
            super::parse(text),
            Err(Error::MalformedSignature {
                text: text.to_owned(),
            })
        );
    }

    #[test]
    fn error_missing_wrapper() {
        let text = "transfer(address to)";
        assert_eq!(
            super::parse(text),
            Err(Error::MalformedSignature {
                text: text.to_owned(),
            })
        );
    }
}
