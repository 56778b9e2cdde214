//!
//! The Yul+ build.
//!

pub mod artifact;
pub mod store;

use std::collections::BTreeMap;

use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

use crate::abi::Abi;
use crate::solc::standard_json::output::Output as SolcStandardJsonOutput;

use self::artifact::Artifact;
use self::store::Store;

///
/// The Yul+ build: one artifact per compiled contract.
///
#[derive(Debug, Default)]
pub struct Build {
    /// The artifacts in `solc` output order.
    pub artifacts: Vec<Artifact>,
}

impl Build {
    ///
    /// Pairs every compiled unit of the `solc` output with the ABI of its
    /// source file.
    ///
    /// A contract whose source has no ABI entry still gets an artifact with
    /// an empty ABI. This is deliberate leniency: the compiled output is
    /// valid on its own, and dropping it would hide the contract from the
    /// downstream tooling entirely.
    ///
    pub fn try_from_solc_output(
        output: &SolcStandardJsonOutput,
        abis: &BTreeMap<String, Abi>,
    ) -> anyhow::Result<Self> {
        let contracts = match output.contracts.as_ref() {
            Some(contracts) => contracts,
            None => return Ok(Self::default()),
        };

        let mut artifacts = Vec::new();
        for (source_name, file) in contracts.iter() {
            for (contract_name, contract) in file.iter() {
                let evm = contract.evm.as_ref().ok_or_else(|| {
                    anyhow::anyhow!("Contract `{}` EVM data not found in the solc output", contract_name)
                })?;
                let bytecode = evm.bytecode.as_ref().ok_or_else(|| {
                    anyhow::anyhow!("Contract `{}` deploy bytecode not found in the solc output", contract_name)
                })?;
                let deployed_bytecode = evm.deployed_bytecode.as_ref().ok_or_else(|| {
                    anyhow::anyhow!("Contract `{}` runtime bytecode not found in the solc output", contract_name)
                })?;

                let abi = abis.get(source_name).cloned().unwrap_or_default();
                artifacts.push(Artifact::new(
                    source_name.clone(),
                    contract_name.clone(),
                    bytecode.object.as_str(),
                    deployed_bytecode.object.as_str(),
                    abi,
                ));
            }
        }

        Ok(Self { artifacts })
    }

    ///
    /// Persists every artifact through the store.
    ///
    /// Each artifact targets a distinct `(source name, contract name)` file,
    /// so the writes run in parallel.
    ///
    pub fn write_to_store(self, store: &Store, build_info_id: &str) -> anyhow::Result<()> {
        self.artifacts
            .into_par_iter()
            .map(|artifact| store.save_artifact_and_debug_file(&artifact, build_info_id))
            .collect::<anyhow::Result<()>>()
    }
}
