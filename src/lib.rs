//!
//! The Yul+ contract build tool library.
//!

pub mod abi;
pub mod build;
pub mod config;
pub mod project;
pub mod solc;
pub mod yulp;

pub use self::abi::entry::Entry as AbiEntry;
pub use self::abi::error::Error as AbiError;
pub use self::abi::Abi;
pub use self::build::artifact::Artifact;
pub use self::build::store::Store as ArtifactStore;
pub use self::build::Build;
pub use self::config::Config;
pub use self::project::Project;
pub use self::solc::standard_json::input::Input as SolcStandardJsonInput;
pub use self::solc::standard_json::output::Output as SolcStandardJsonOutput;
pub use self::solc::Compiler as SolcCompiler;
pub use self::yulp::Compiler as YulpCompiler;

/// The process exit code on success.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code on failure.
pub const EXIT_CODE_FAILURE: i32 = 1;
