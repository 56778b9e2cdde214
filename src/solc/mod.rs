//!
//! The Solidity compiler.
//!

pub mod standard_json;

use std::io::Write;
use std::process::Command;
use std::process::Stdio;

use self::standard_json::input::Input as StandardJsonInput;
use self::standard_json::output::Output as StandardJsonOutput;

///
/// The Solidity compiler.
///
/// A wrapper around the `solc` executable, which consumes the printed Yul
/// sources through the standard JSON interface.
///
#[derive(Debug)]
pub struct Compiler {
    /// The binary executable name.
    pub executable: String,
}

impl Compiler {
    /// The default executable name.
    pub const DEFAULT_EXECUTABLE_NAME: &'static str = "solc";

    /// The first version able to compile standard JSON input in the Yul language.
    pub const FIRST_YUL_VERSION: semver::Version = semver::Version::new(0, 7, 0);

    ///
    /// A shortcut constructor.
    ///
    pub fn new(executable: String) -> Self {
        Self { executable }
    }

    ///
    /// Compiles the standard JSON input and returns the parsed output.
    ///
    pub fn standard_json(&self, input: &StandardJsonInput) -> anyhow::Result<StandardJsonOutput> {
        let mut process = Command::new(self.executable.as_str())
            .arg("--standard-json")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|error| {
                anyhow::anyhow!("{} subprocess spawning error: {}", self.executable, error)
            })?;

        let input_json = serde_json::to_vec(input).expect("Always valid");
        process
            .stdin
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("{} subprocess stdin getting error", self.executable))?
            .write_all(input_json.as_slice())
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

        let output: StandardJsonOutput = serde_json::from_slice(result.stdout.as_slice())
            .map_err(|error| {
                anyhow::anyhow!("{} subprocess output parsing error: {}", self.executable, error)
            })?;
        Ok(output)
    }

    ///
    /// Queries the executable version.
    ///
    pub fn version(&self) -> anyhow::Result<semver::Version> {
        let output = Command::new(self.executable.as_str())
            .arg("--version")
            .output()
            .map_err(|error| {
                anyhow::anyhow!("{} subprocess spawning error: {}", self.executable, error)
            })?;
        if !output.status.success() {
            anyhow::bail!(
                "{} error: {}",
                self.executable,
                String::from_utf8_lossy(output.stderr.as_slice())
            );
        }

        let stdout = String::from_utf8_lossy(output.stdout.as_slice());
        let version: semver::Version = stdout
            .lines()
            .nth(1)
            .and_then(|line| line.split(' ').nth(1))
            .and_then(|version| version.split('+').next())
            .ok_or_else(|| {
                anyhow::anyhow!("{} version parsing error: unexpected output", self.executable)
            })?
            .parse()
            .map_err(|error| {
                anyhow::anyhow!("{} version parsing error: {}", self.executable, error)
            })?;
        Ok(version)
    }
}
