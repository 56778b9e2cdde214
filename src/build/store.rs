//!
//! The filesystem artifact store.
//!

use std::path::PathBuf;

use serde::Serialize;

use crate::build::artifact::Artifact;
use crate::solc::standard_json::input::Input as SolcStandardJsonInput;
use crate::solc::standard_json::output::Output as SolcStandardJsonOutput;

///
/// The filesystem artifact store.
///
/// Lays artifacts out one `<source name>/<contract name>.json` per contract,
/// with a companion `.dbg.json` pointing at the build info, and keeps the
/// `solc` input/output pair under `build-info/`. Saving a key that already
/// exists overwrites the previous build.
///
#[derive(Debug)]
pub struct Store {
    /// The artifacts directory root.
    pub path: PathBuf,
}

///
/// The debug file companion, pointing a contract artifact at its build info.
///
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DebugFile {
    /// The debug file format version.
    #[serde(rename = "_format")]
    format: String,
    /// The artifact-relative path to the build info file.
    build_info: String,
}

impl Store {
    /// The debug file format version.
    pub const DEBUG_FORMAT_VERSION: &'static str = "hh-yulp-dbg-1";

    /// The build info directory name.
    pub const BUILD_INFO_DIRECTORY: &'static str = "build-info";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    ///
    /// Persists the `solc` input and output under `build-info/`, returning
    /// the build identifier derived from the input hash.
    ///
    pub fn write_build_info(
        &self,
        input: &SolcStandardJsonInput,
        output: &SolcStandardJsonOutput,
    ) -> anyhow::Result<String> {
        let input_json = serde_json::to_vec(input).expect("Always valid");
        let id = hex::encode(md5::compute(input_json.as_slice()).0);

        let directory = self.path.join(Self::BUILD_INFO_DIRECTORY);
        std::fs::create_dir_all(&directory).map_err(|error| {
            anyhow::anyhow!("Directory {:?} creating error: {}", directory, error)
        })?;

        let build_info = serde_json::json!({
            "id": id,
            "input": input,
            "output": output,
        });
        let file_path = directory.join(format!("{}.json", id));
        std::fs::write(
            &file_path,
            serde_json::to_vec(&build_info).expect("Always valid"),
        )
        .map_err(|error| anyhow::anyhow!("File {:?} writing error: {}", file_path, error))?;

        Ok(id)
    }

    ///
    /// Persists one artifact and its debug file companion, overwriting any
    /// previous build of the same `(source name, contract name)` pair.
    ///
    pub fn save_artifact_and_debug_file(
        &self,
        artifact: &Artifact,
        build_info_id: &str,
    ) -> anyhow::Result<()> {
        let directory = self.path.join(artifact.source_name.as_str());
        std::fs::create_dir_all(&directory).map_err(|error| {
            anyhow::anyhow!("Directory {:?} creating error: {}", directory, error)
        })?;

        let artifact_path = directory.join(format!("{}.json", artifact.contract_name));
        std::fs::write(
            &artifact_path,
            serde_json::to_vec_pretty(artifact).expect("Always valid"),
        )
        .map_err(|error| anyhow::anyhow!("File {:?} writing error: {}", artifact_path, error))?;

        let debug_file = DebugFile {
            format: Self::DEBUG_FORMAT_VERSION.to_owned(),
            build_info: Self::build_info_relative_path(
                artifact.source_name.as_str(),
                build_info_id,
            ),
        };
        let debug_path = directory.join(format!("{}.dbg.json", artifact.contract_name));
        std::fs::write(
            &debug_path,
            serde_json::to_vec_pretty(&debug_file).expect("Always valid"),
        )
        .map_err(|error| anyhow::anyhow!("File {:?} writing error: {}", debug_path, error))?;

        Ok(())
    }

    ///
    /// The path from the artifact's directory back up to the build info file.
    ///
    fn build_info_relative_path(source_name: &str, id: &str) -> String {
        let depth = source_name.matches('/').count() + 1;
        format!(
            "{}{}/{}.json",
            "../".repeat(depth),
            Self::BUILD_INFO_DIRECTORY,
            id
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::abi::Abi;
    use crate::build::artifact::Artifact;
    use crate::build::store::Store;

    fn temp_store() -> Store {
        let path = std::env::temp_dir().join(format!(
            "yulpc-store-test-{:016x}",
            rand::random::<u64>()
        ));
        Store::new(path)
    }

    fn artifact(bytecode: &str) -> Artifact {
        Artifact::new(
            "Token.yulp".to_owned(),
            "Token".to_owned(),
            bytecode,
            "ef01",
            Abi::default(),
        )
    }

    #[test]
    fn writes_artifact_and_debug_file() {
        let store = temp_store();
        store
            .save_artifact_and_debug_file(&artifact("abcd"), "deadbeef")
            .expect("Always valid");

        let directory = store.path.join("Token.yulp");
        let written: Artifact = serde_json::from_slice(
            std::fs::read(directory.join("Token.json"))
                .expect("Always exists")
                .as_slice(),
        )
        .expect("Always valid");
        assert_eq!(written, artifact("abcd"));

        let debug: serde_json::Value = serde_json::from_slice(
            std::fs::read(directory.join("Token.dbg.json"))
                .expect("Always exists")
                .as_slice(),
        )
        .expect("Always valid");
        assert_eq!(
            debug["buildInfo"],
            serde_json::json!("../build-info/deadbeef.json")
        );

        std::fs::remove_dir_all(&store.path).ok();
    }

    #[test]
    fn overwrites_previous_artifact() {
        let store = temp_store();
        store
            .save_artifact_and_debug_file(&artifact("aa"), "deadbeef")
            .expect("Always valid");
        store
            .save_artifact_and_debug_file(&artifact("bb"), "deadbeef")
            .expect("Always valid");

        let written: Artifact = serde_json::from_slice(
            std::fs::read(store.path.join("Token.yulp").join("Token.json"))
                .expect("Always exists")
                .as_slice(),
        )
        .expect("Always valid");
        assert_eq!(written.bytecode, "0xbb");

        std::fs::remove_dir_all(&store.path).ok();
    }
}
