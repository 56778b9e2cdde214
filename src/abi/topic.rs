//!
//! The event topic annotation parser.
//!

use regex::Regex;

use crate::abi::entry::event::Event;
use crate::abi::entry::Entry;
use crate::abi::error::Error;
use crate::abi::parameter::Parameter;

///
/// Parses one `topic"event ..."` annotation into an ABI event entry.
///
/// The grammar is `topic"event <name>(<params>)"`, where each parameter is
/// `<type>( indexed)?( <name>)?`. A mismatch fails with `MalformedTopic`.
///
pub fn parse(text: &str) -> Result<Entry, Error> {
    let topic = Regex::new(r#"^topic"event ([\w]+)\(([\w, \[\]]*)\)"$"#).expect("Always valid");

    let captures = topic.captures(text).ok_or_else(|| Error::MalformedTopic {
        text: text.to_owned(),
    })?;

    let name = captures[1].to_owned();
    let inputs = parse_parameter_list(&captures[2], text)?;

    Ok(Entry::Event(Event {
        name,
        inputs,
        anonymous: false,
    }))
}

///
/// Splits a comma-separated event parameter list and parses each element.
///
fn parse_parameter_list(list: &str, text: &str) -> Result<Vec<Parameter>, Error> {
    let parameter =
        Regex::new(r#"^([\w\[\]]+)( indexed)?( [\w]+)?$"#).expect("Always valid");

    if list.is_empty() {
        return Ok(Vec::new());
    }

    list.split(',')
        .map(|element| {
            let captures =
                parameter
                    .captures(element.trim())
                    .ok_or_else(|| Error::MalformedTopic {
                        text: text.to_owned(),
                    })?;
            let indexed = captures.get(2).is_some();
            let name = captures.get(3).map(|name| name.as_str().trim().to_owned());
            Ok(Parameter::new_indexed(&captures[1], name, indexed))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::abi::entry::event::Event;
    use crate::abi::entry::Entry;
    use crate::abi::error::Error;
    use crate::abi::parameter::Parameter;

    #[test]
    fn event_with_indexed_parameters() {
        let result = super::parse(
            r#"topic"event Transfer(address indexed from, address indexed to, uint256 amount)""#,
        );
        assert_eq!(
            result,
            Ok(Entry::Event(Event {
                name: "Transfer".to_owned(),
                inputs: vec![
                    Parameter::new_indexed("address", Some("from".to_owned()), true),
                    Parameter::new_indexed("address", Some("to".to_owned()), true),
                    Parameter::new_indexed("uint256", Some("amount".to_owned()), false),
                ],
                anonymous: false,
            }))
        );
    }

    #[test]
    fn event_with_unnamed_parameter() {
        let result = super::parse(r#"topic"event Ping(uint)""#);
        assert_eq!(
            result,
            Ok(Entry::Event(Event {
                name: "Ping".to_owned(),
                inputs: vec![Parameter::new_indexed("uint256", None, false)],
                anonymous: false,
            }))
        );
    }

    #[test]
    fn event_without_parameters() {
        let result = super::parse(r#"topic"event Paused()""#);
        assert_eq!(
            result,
            Ok(Entry::Event(Event {
                name: "Paused".to_owned(),
                inputs: vec![],
                anonymous: false,
            }))
        );
    }

    #[test]
    fn error_missing_event_keyword() {
        let text = r#"topic"Transfer(address from)""#;
        assert_eq!(
            super::parse(text),
            Err(Error::MalformedTopic {
                text: text.to_owned(),
            })
        );
    }
}
