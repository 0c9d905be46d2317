//! Deployment of the router and quoter contracts.
//!
//! A [`plan::DeployPlan`] is built from a resolved network profile and a
//! Hardhat artifact; a [`deploy::DeployAction`] sends it onchain.

pub mod artifact;
pub mod deploy;
pub mod plan;
pub mod quoter;

use alloy_primitives::{Address, TxHash, U256};
use std::future::Future;

/// Trait for executable onchain actions.
pub trait Action: Send + Sync {
    /// Execute the action.
    ///
    /// Returns the deployed contract and the transaction that created it.
    fn execute(&mut self) -> impl Future<Output = eyre::Result<Deployment>> + Send;

    /// Get a human-readable description of this action.
    fn description(&self) -> String;
}

/// Result of a contract deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    /// Address of the created contract
    pub address: Address,
    /// Transaction hash
    pub tx_hash: TxHash,
    /// Block number where transaction was included
    pub block_number: Option<u64>,
    /// Gas used
    pub gas_used: Option<U256>,
}

#[cfg(test)]
pub(crate) mod test_utils {
    use alloy_primitives::Bytes;
    use alloy_provider::{network::Ethereum, Provider, RootProvider};
    use config::{builtin, Network};

    use crate::artifact::Artifact;

    /// Mock provider for unit tests.
    #[derive(Clone)]
    pub struct MockProvider;

    impl Provider for MockProvider {
        fn root(&self) -> &RootProvider<Ethereum> {
            todo!()
        }
    }

    /// Artifact with a tiny stand-in bytecode.
    pub fn artifact(contract_name: &str) -> Artifact {
        Artifact {
            contract_name: contract_name.to_string(),
            bytecode: Bytes::from_static(&[0x60, 0x80, 0x60, 0x40]),
        }
    }

    pub fn polygon() -> Network {
        builtin::polygon()
    }
}
