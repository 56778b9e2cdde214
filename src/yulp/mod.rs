//!
//! The Yul+ front-end compiler.
//!

pub mod output;

use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::process::Stdio;

use self::output::Output;

///
/// The Yul+ front-end compiler.
///
/// A wrapper around the `yulp` executable, which lowers Yul+ to plain Yul and
/// emits the signature and topic annotations consumed by the ABI assembler.
///
#[derive(Debug)]
pub struct Compiler {
    /// The binary executable name.
    pub executable: String,
}

impl Compiler {
    /// The default executable name.
    pub const DEFAULT_EXECUTABLE_NAME: &'static str = "yulp";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(executable: String) -> Self {
        Self { executable }
    }

    ///
    /// Compiles one Yul+ source file, returning the printed Yul text and the
    /// signature and topic annotations.
    ///
    pub fn compile(&self, path: &Path) -> anyhow::Result<Output> {
        let source_code = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Source file {:?} reading error: {}", path, error))?;

        let mut process = Command::new(self.executable.as_str())
            .arg("--json")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|error| {
                anyhow::anyhow!("{} subprocess spawning error: {}", self.executable, error)
            })?;

        process
            .stdin
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("{} subprocess stdin getting error", self.executable))?
            .write_all(source_code.as_bytes())
            .map_err(|error| {
                anyhow::anyhow!("{} subprocess stdin writing error: {}", self.executable, error)
            })?;

        let result = process.wait_with_output().map_err(|error| {
            anyhow::anyhow!("{} subprocess output reading error: {}", self.executable, error)
        })?;
        if !result.status.success() {
            anyhow::bail!(
                "{} error: {}",
                self.executable,
                String::from_utf8_lossy(result.stderr.as_slice())
            );
        }

        let output: Output = serde_json::from_slice(result.stdout.as_slice()).map_err(|error| {
            anyhow::anyhow!("{} subprocess output parsing error: {}", self.executable, error)
        })?;
        Ok(output)
    }
}
