//!
//! The `solc --standard-json` output representation.
//!

pub mod contract;
pub mod error;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use self::contract::Contract;
use self::error::Error;

///
/// The `solc --standard-json` output representation.
///
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    /// The compilation diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,
    /// The contract map: source-relative path to contract name to contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contracts: Option<BTreeMap<String, BTreeMap<String, Contract>>>,
}

impl Output {
    /// The warning `solc` emits for every Yul-language input.
    pub const YUL_EXPERIMENTAL_WARNING: &'static str =
        "Yul is still experimental. Please use the output with care.";

    ///
    /// Checks for fatal diagnostics, printing each one and aborting the
    /// build if any is found.
    ///
    /// The experimental-Yul warning is the single diagnostic every run of
    /// this pipeline produces, so it is the only one treated as benign.
    ///
    pub fn check_errors(&self) -> anyhow::Result<()> {
        let errors: Vec<&Error> = self
            .errors
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|error| error.message != Self::YUL_EXPERIMENTAL_WARNING)
            .collect();
        if errors.is_empty() {
            return Ok(());
        }

        for error in errors.iter() {
            eprintln!("{}", error);
        }
        anyhow::bail!("Error(s) found. Compilation aborted");
    }
}

#[cfg(test)]
mod tests {
    use crate::solc::standard_json::output::error::Error;
    use crate::solc::standard_json::output::Output;

    fn diagnostic(severity: &str, message: &str) -> Error {
        Error {
            severity: severity.to_owned(),
            message: message.to_owned(),
            formatted_message: None,
        }
    }

    #[test]
    fn experimental_warning_is_benign() {
        let output = Output {
            errors: Some(vec![diagnostic(
                "warning",
                Output::YUL_EXPERIMENTAL_WARNING,
            )]),
            contracts: None,
        };
        assert!(output.check_errors().is_ok());
    }

    #[test]
    fn any_other_diagnostic_is_fatal() {
        let output = Output {
            errors: Some(vec![
                diagnostic("warning", Output::YUL_EXPERIMENTAL_WARNING),
                diagnostic("error", "DeclarationError: identifier not found"),
            ]),
            contracts: None,
        };
        assert!(output.check_errors().is_err());
    }

    #[test]
    fn no_diagnostics() {
        let output = Output {
            errors: None,
            contracts: None,
        };
        assert!(output.check_errors().is_ok());
    }
}
