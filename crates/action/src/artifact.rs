//! Hardhat compilation artifacts.

use alloy_primitives::{hex, Bytes};
use eyre::{bail, WrapErr};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Marker solc leaves where a library address still has to be linked.
const LINK_PLACEHOLDER: &str = "__$";

/// The parts of a Hardhat artifact needed to deploy a contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Solidity contract name
    pub contract_name: String,
    /// Creation bytecode, without constructor arguments
    pub bytecode: Bytes,
}

/// Artifact as found on disk, bytecode still as hex text.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    contract_name: String,
    bytecode: String,
}

impl Artifact {
    /// Parse an artifact from JSON.
    ///
    /// Fails on an empty bytecode (abstract contracts and interfaces) and on
    /// bytecode with unlinked library placeholders.
    pub fn from_json_str(contents: &str) -> eyre::Result<Self> {
        let raw: RawArtifact =
            serde_json::from_str(contents).wrap_err("failed to parse Hardhat artifact")?;

        if raw.bytecode.contains(LINK_PLACEHOLDER) {
            bail!(
                "artifact for {} has unlinked library placeholders; link its libraries first",
                raw.contract_name
            );
        }

        let bytecode = hex::decode(&raw.bytecode)
            .wrap_err_with(|| format!("artifact for {} has invalid bytecode", raw.contract_name))?;
        if bytecode.is_empty() {
            bail!(
                "artifact for {} has no bytecode (abstract contract or interface?)",
                raw.contract_name
            );
        }

        Ok(Self {
            contract_name: raw.contract_name,
            bytecode: bytecode.into(),
        })
    }

    /// Read an artifact from disk.
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read artifact {}", path.display()))?;
        Self::from_json_str(&contents)
    }
}

/// Default Hardhat location: `<dir>/contracts/<name>.sol/<name>.json`.
pub fn artifact_path(artifacts_dir: impl AsRef<Path>, contract_name: &str) -> PathBuf {
    artifacts_dir
        .as_ref()
        .join("contracts")
        .join(format!("{contract_name}.sol"))
        .join(format!("{contract_name}.json"))
}
