//!
//! The Yul+ project.
//!

use std::collections::BTreeMap;
use std::path::Path;

use crate::abi::Abi;
use crate::solc::standard_json::input::Input as SolcStandardJsonInput;
use crate::yulp::Compiler as YulpCompiler;

///
/// The Yul+ project: the printed Yul sources and the per-file ABIs,
/// accumulated one source file at a time.
///
/// Both maps are keyed by the source-root-relative path, so the keys stay
/// stable across machines and match the source names `solc` reports back.
///
#[derive(Debug, Default)]
pub struct Project {
    /// The printed Yul source map.
    pub sources: BTreeMap<String, String>,
    /// The ABI map.
    pub abis: BTreeMap<String, Abi>,
}

impl Project {
    /// The Yul+ source file extension.
    pub const SOURCE_EXTENSION: &'static str = "yulp";

    ///
    /// Discovers and compiles every Yul+ source under `sources_root`.
    ///
    /// Files are processed sequentially in discovery order. The first
    /// front-end or annotation failure aborts the whole gathering, so no
    /// partial source set ever reaches `solc`.
    ///
    pub fn try_from_sources_root(
        sources_root: &Path,
        yulp: &YulpCompiler,
    ) -> anyhow::Result<Self> {
        let pattern = sources_root
            .join("**")
            .join(format!("*.{}", Self::SOURCE_EXTENSION));
        let paths = glob::glob(pattern.to_string_lossy().as_ref())
            .map_err(|error| anyhow::anyhow!("Source file discovery error: {}", error))?;

        let mut project = Self::default();
        for path in paths {
            let path =
                path.map_err(|error| anyhow::anyhow!("Source file discovery error: {}", error))?;
            let source_name = path
                .strip_prefix(sources_root)
                .unwrap_or(path.as_path())
                .to_string_lossy()
                .to_string();

            println!("Compiling {}", source_name);

            let output = yulp.compile(path.as_path())?;
            let signatures: Vec<String> = output
                .signatures
                .into_iter()
                .map(|annotation| annotation.abi)
                .collect();
            let topics: Vec<String> = output
                .topics
                .into_iter()
                .map(|annotation| annotation.abi)
                .collect();
            let abi = Abi::try_from_annotations(signatures.as_slice(), topics.as_slice())
                .map_err(|error| anyhow::anyhow!("File {:?} ABI error: {}", path, error))?;

            project.sources.insert(source_name.clone(), output.text);
            project.abis.insert(source_name, abi);
        }

        Ok(project)
    }

    ///
    /// Converts the gathered sources into one multi-source `solc` input,
    /// yielding the ABI map for the artifact builder.
    ///
    pub fn into_solc_input(self, optimize: bool) -> (SolcStandardJsonInput, BTreeMap<String, Abi>) {
        (
            SolcStandardJsonInput::from_yul_sources(self.sources, optimize),
            self.abis,
        )
    }
}
