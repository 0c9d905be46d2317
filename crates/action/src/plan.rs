//! Deployment plans.
//!
//! A plan fixes everything about a deployment before anything is sent:
//! the bytecode, the ABI-encoded constructor arguments and the arguments
//! to reproduce them for source verification.

use crate::artifact::Artifact;
use alloy_primitives::{Address, Bytes};
use alloy_sol_types::SolConstructor;
use binding::{quoter::MixedRouteQuoterV1, router::ApeSwapMultiSwapRouter};
use config::Network;
use eyre::bail;

pub const ROUTER_CONTRACT: &str = "ApeSwapMultiSwapRouter";
pub const QUOTER_CONTRACT: &str = "MixedRouteQuoterV1";

/// A fully resolved contract deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPlan {
    /// Canonical network name
    pub network: String,
    /// Expected chain id of the target network, if known
    pub chain_id: Option<u64>,
    /// Solidity contract name
    pub contract_name: String,
    /// Creation bytecode
    pub bytecode: Bytes,
    /// ABI-encoded constructor arguments
    pub constructor_args: Bytes,
    /// Constructor arguments as given to `hardhat verify`
    pub verify_args: Vec<String>,
}

impl DeployPlan {
    /// Plan an `ApeSwapMultiSwapRouter(factories, wrappedNative)` deployment.
    pub fn router(network: &Network, artifact: Artifact) -> eyre::Result<Self> {
        ensure_contract(&artifact, ROUTER_CONTRACT)?;

        let factories = network.require_router_factories()?;
        let wrapped_native = network.wrapped_native_token()?;

        let verify_args = vec![format_address_list(&factories), wrapped_native.to_string()];
        let constructor_args = ApeSwapMultiSwapRouter::constructorCall {
            factories,
            wrappedNative: wrapped_native,
        }
        .abi_encode();

        Ok(Self::new(network, artifact, constructor_args, verify_args))
    }

    /// Plan a `MixedRouteQuoterV1(factoryV3, factoryV2, WETH9)` deployment.
    pub fn quoter(network: &Network, artifact: Artifact) -> eyre::Result<Self> {
        ensure_contract(&artifact, QUOTER_CONTRACT)?;

        let (factory_v3, factory_v2) = network.quoter_factories()?;
        let wrapped_native = network.wrapped_native_token()?;

        let constructor_args = MixedRouteQuoterV1::constructorCall {
            factory: factory_v3,
            factoryV2: factory_v2,
            WETH9: wrapped_native,
        }
        .abi_encode();
        let verify_args = vec![
            factory_v3.to_string(),
            factory_v2.to_string(),
            wrapped_native.to_string(),
        ];

        Ok(Self::new(network, artifact, constructor_args, verify_args))
    }

    fn new(
        network: &Network,
        artifact: Artifact,
        constructor_args: Vec<u8>,
        verify_args: Vec<String>,
    ) -> Self {
        Self {
            network: network.name.clone(),
            chain_id: network.chain_id,
            contract_name: artifact.contract_name,
            bytecode: artifact.bytecode,
            constructor_args: constructor_args.into(),
            verify_args,
        }
    }

    /// Creation bytecode followed by the encoded constructor arguments.
    pub fn init_code(&self) -> Bytes {
        [&self.bytecode[..], &self.constructor_args[..]]
            .concat()
            .into()
    }

    /// Command line to verify the deployed source on the block explorer.
    pub fn verify_command(&self, address: Address) -> String {
        let mut command = format!("npx hardhat verify --network {} {}", self.network, address);
        for arg in &self.verify_args {
            command.push(' ');
            command.push_str(arg);
        }
        command
    }
}

fn ensure_contract(artifact: &Artifact, expected: &str) -> eyre::Result<()> {
    if artifact.contract_name != expected {
        bail!(
            "artifact is for {}, expected {}",
            artifact.contract_name,
            expected
        );
    }
    Ok(())
}

/// `'["0x..","0x.."]'`, quoted for the shell.
fn format_address_list(addresses: &[Address]) -> String {
    let inner = addresses
        .iter()
        .map(|a| format!("\"{a}\""))
        .collect::<Vec<_>>()
        .join(",");
    format!("'[{inner}]'")
}
