//!
//! The `solc --standard-json` input representation.
//!

pub mod language;
pub mod settings;
pub mod source;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use self::language::Language;
use self::settings::Settings;
use self::source::Source;

///
/// The `solc --standard-json` input representation.
///
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// The input language.
    pub language: Language,
    /// The input source code files map: source-relative path to content.
    pub sources: BTreeMap<String, Source>,
    /// The compiler settings.
    pub settings: Settings,
}

impl Input {
    ///
    /// A shortcut constructor for the printed Yul sources of a project.
    ///
    pub fn from_yul_sources(sources: BTreeMap<String, String>, optimize: bool) -> Self {
        let sources = sources
            .into_iter()
            .map(|(path, content)| (path, Source::from(content)))
            .collect();

        Self {
            language: Language::Yul,
            sources,
            settings: Settings::new(Settings::get_output_selection(), optimize),
        }
    }
}
