//!
//! The build configuration.
//!

use std::path::PathBuf;

use crate::solc::Compiler as SolcCompiler;
use crate::yulp::Compiler as YulpCompiler;

///
/// The build configuration.
///
/// Defaults are applied explicitly by the caller assembling the build step.
/// There is no ambient global configuration state.
///
#[derive(Debug, Clone)]
pub struct Config {
    /// The directory scanned recursively for Yul+ sources.
    pub sources_path: PathBuf,
    /// The directory the artifacts are written to.
    pub artifacts_path: PathBuf,
    /// The `solc` executable name or path.
    pub solc_executable: String,
    /// The Yul+ front-end executable name or path.
    pub yulp_executable: String,
    /// Whether the `solc` optimizer is enabled.
    pub optimize: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources_path: PathBuf::from("contracts"),
            artifacts_path: PathBuf::from("artifacts"),
            solc_executable: SolcCompiler::DEFAULT_EXECUTABLE_NAME.to_owned(),
            yulp_executable: YulpCompiler::DEFAULT_EXECUTABLE_NAME.to_owned(),
            optimize: true,
        }
    }
}
