//!
//! The Yul+ contract build tool arguments.
//!

use std::path::PathBuf;

use structopt::StructOpt;

///
/// The Yul+ contract build tool arguments.
///
#[derive(Debug, StructOpt)]
#[structopt(name = "yulpc", about = "The Yul+ contract build tool")]
pub struct Arguments {
    /// The directory scanned recursively for `*.yulp` sources.
    #[structopt(long = "sources", default_value = "contracts")]
    pub sources_path: PathBuf,

    /// The directory the artifacts are written to.
    #[structopt(long = "artifacts", default_value = "artifacts")]
    pub artifacts_path: PathBuf,

    /// The `solc` executable. The one from `PATH` is used by default.
    #[structopt(long = "solc")]
    pub solc: Option<String>,

    /// The Yul+ front-end executable. The one from `PATH` is used by default.
    #[structopt(long = "yulp")]
    pub yulp: Option<String>,

    /// Disables the `solc` optimizer.
    #[structopt(long = "no-optimize")]
    pub no_optimize: bool,
}

impl Arguments {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::from_args()
    }
}
