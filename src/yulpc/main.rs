//!
//! The Yul+ contract build tool binary.
//!

pub mod arguments;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    std::process::exit(match main_inner() {
        Ok(()) => compiler_yulp::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{}", error);
            compiler_yulp::EXIT_CODE_FAILURE
        }
    })
}

///
/// The auxiliary `main` function to facilitate the `?` error conversion operator.
///
fn main_inner() -> anyhow::Result<()> {
    let arguments = Arguments::new();

    let config = compiler_yulp::Config {
        sources_path: arguments.sources_path,
        artifacts_path: arguments.artifacts_path,
        solc_executable: arguments.solc.unwrap_or_else(|| {
            compiler_yulp::SolcCompiler::DEFAULT_EXECUTABLE_NAME.to_owned()
        }),
        yulp_executable: arguments.yulp.unwrap_or_else(|| {
            compiler_yulp::YulpCompiler::DEFAULT_EXECUTABLE_NAME.to_owned()
        }),
        optimize: !arguments.no_optimize,
    };

    let yulp = compiler_yulp::YulpCompiler::new(config.yulp_executable.clone());
    let solc = compiler_yulp::SolcCompiler::new(config.solc_executable.clone());

    let solc_version = solc.version()?;
    if solc_version < compiler_yulp::SolcCompiler::FIRST_YUL_VERSION {
        anyhow::bail!(
            "solc versions <{} cannot compile standalone Yul, found {}",
            compiler_yulp::SolcCompiler::FIRST_YUL_VERSION,
            solc_version
        );
    }

    let project =
        compiler_yulp::Project::try_from_sources_root(config.sources_path.as_path(), &yulp)?;
    let (solc_input, abis) = project.into_solc_input(config.optimize);

    let solc_output = solc.standard_json(&solc_input)?;
    solc_output.check_errors()?;

    let store = compiler_yulp::ArtifactStore::new(config.artifacts_path.clone());
    let build_info_id = store.write_build_info(&solc_input, &solc_output)?;

    let build = compiler_yulp::Build::try_from_solc_output(&solc_output, &abis)?;
    build.write_to_store(&store, build_info_id.as_str())?;

    eprintln!(
        "Compiler run successful. Artifact(s) can be found in directory {:?}.",
        config.artifacts_path
    );

    Ok(())
}
