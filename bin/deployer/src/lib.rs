pub mod settings;

use action::{
    artifact::{artifact_path, Artifact},
    deploy::DeployAction,
    plan::{DeployPlan, QUOTER_CONTRACT, ROUTER_CONTRACT},
    quoter::check_quoter,
    Action, Deployment,
};
use alloy_primitives::Address;
use config::{Network, ProfileRegistry};
use eyre::{eyre, WrapErr};
use settings::{DeployerConfig, Endpoint};
use std::path::PathBuf;
use tracing::{info, warn};

/// Output format for a resolved profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Json,
    Toml,
}

/// Contracts this tool deploys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contract {
    Router,
    Quoter,
}

impl Contract {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Router => ROUTER_CONTRACT,
            Self::Quoter => QUOTER_CONTRACT,
        }
    }

    pub fn plan(self, network: &Network, artifact: Artifact) -> eyre::Result<DeployPlan> {
        match self {
            Self::Router => DeployPlan::router(network, artifact),
            Self::Quoter => DeployPlan::quoter(network, artifact),
        }
    }
}

/// A resolved network together with how to reach it.
#[derive(Debug, Clone)]
pub struct Target {
    /// Identifier as supplied by the caller
    pub identifier: String,
    /// Matched network
    pub network: Network,
    /// Configured RPC endpoint, if any
    pub endpoint: Option<Endpoint>,
    /// Chain id the endpoint must report, if it should be checked
    pub chain_id: Option<u64>,
}

/// Options of the deploy subcommands.
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    /// Artifact path overriding the Hardhat default location
    pub artifact: Option<PathBuf>,
    /// Deployer private key
    pub private_key: Option<String>,
    /// Log the plan without sending anything
    pub dry_run: bool,
}

/// Built-in table with the configured profile file merged on top.
pub fn load_registry(config: &DeployerConfig) -> eyre::Result<ProfileRegistry> {
    let registry = ProfileRegistry::builtin();
    match &config.profiles {
        Some(path) => {
            info!(path = %path.display(), "Loading profile overrides");
            Ok(registry.merge(ProfileRegistry::from_file(path)?)?)
        }
        None => Ok(registry),
    }
}

/// Resolve `identifier`; fails with `ConfigNotFound` for unknown networks.
///
/// The chain id comes from the endpoint when set there. Otherwise the
/// profile's chain id is used, but only when the canonical name was given:
/// aliases typically point at local forks with their own chain id.
pub fn resolve_target(
    config: &DeployerConfig,
    registry: &ProfileRegistry,
    identifier: &str,
) -> eyre::Result<Target> {
    let network = registry.resolve(identifier)?.clone();
    let endpoint = config.endpoint(identifier, &network.name).cloned();

    let chain_id = endpoint
        .as_ref()
        .and_then(|endpoint| endpoint.chain_id)
        .or_else(|| {
            if identifier == network.name {
                network.chain_id
            } else {
                None
            }
        });

    Ok(Target {
        identifier: identifier.to_string(),
        network,
        endpoint,
        chain_id,
    })
}

/// Serialize the profile of `network`.
pub fn render_profile(network: &Network, format: Format) -> eyre::Result<String> {
    let rendered = match format {
        Format::Json => serde_json::to_string_pretty(&network.profile)?,
        Format::Toml => toml::to_string(&network.profile)?,
    };
    Ok(rendered)
}

/// One line per network, in priority order.
pub fn render_networks(registry: &ProfileRegistry) -> String {
    let mut out = String::new();
    for network in registry.networks() {
        let chain = network
            .chain_id
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        out.push_str(&format!("{:<14} chain {:<7}", network.name, chain));
        if !network.aliases.is_empty() {
            out.push_str(&format!(" aliases {}", network.aliases.join(", ")));
        }
        out.push('\n');
    }
    out
}

/// Derived pool address of `token_a`/`token_b` on `factory`.
///
/// `fee` is the pool's fee tier and is required for v3 factories only.
pub fn pair_address(
    target: &Target,
    factory: Address,
    token_a: Address,
    token_b: Address,
    fee: Option<u32>,
) -> eyre::Result<Address> {
    Ok(target
        .network
        .profile
        .pair_address(&target.network.name, factory, token_a, token_b, fee)?)
}

/// Lines printed once a contract is on-chain.
pub fn deployment_report(plan: &DeployPlan, deployment: &Deployment) -> String {
    format!(
        "{} deployed at: {}\n{}",
        plan.contract_name,
        deployment.address,
        plan.verify_command(deployment.address)
    )
}

/// Build the deployment plan of `contract` on `target`.
pub fn plan(
    config: &DeployerConfig,
    target: &Target,
    contract: Contract,
    artifact: Option<PathBuf>,
) -> eyre::Result<DeployPlan> {
    let path = artifact.unwrap_or_else(|| artifact_path(&config.artifacts, contract.name()));
    info!(path = %path.display(), "Loading artifact");

    let artifact = Artifact::from_file(&path)?;
    contract.plan(&target.network, artifact)
}

/// Deploy `contract` on `target`.
///
/// Returns `None` on a dry run. The deployment report is printed as soon as
/// the contract is on-chain, before the quoter's immutables are checked.
pub async fn deploy(
    config: &DeployerConfig,
    target: &Target,
    contract: Contract,
    options: DeployOptions,
) -> eyre::Result<Option<Deployment>> {
    let plan = plan(config, target, contract, options.artifact)?;

    info!(
        contract = %plan.contract_name,
        network = %target.identifier,
        args = %plan.verify_args.join(" "),
        "Planned deployment"
    );

    if options.dry_run {
        info!(
            init_code_size = plan.init_code().len(),
            constructor_args = %plan.constructor_args,
            "Dry run: nothing will be sent"
        );
        match (&target.endpoint, target.chain_id) {
            (Some(endpoint), Some(chain_id)) => {
                let provider = client::create_provider(&endpoint.url).await?;
                client::ensure_chain_id(&provider, chain_id).await?;
                info!(chain_id, "Endpoint chain id matches");
            }
            (Some(_), None) => warn!("No chain id to check the endpoint against"),
            (None, _) => info!("No endpoint configured, skipping chain id check"),
        }
        return Ok(None);
    }

    let endpoint = target
        .endpoint
        .as_ref()
        .ok_or_else(|| eyre!("no RPC endpoint configured for network {}", target.identifier))?;
    let private_key = options
        .private_key
        .as_deref()
        .ok_or_else(|| eyre!("a private key is required to deploy (set PRIVATE_KEY or use --dry-run)"))?;

    let provider = client::create_wallet_provider(&endpoint.url, private_key)?;
    match target.chain_id {
        Some(chain_id) => client::ensure_chain_id(&provider, chain_id).await?,
        None => warn!(network = %target.identifier, "Deploying without a chain id check"),
    }

    let mut action = DeployAction::new(provider.clone(), plan);
    info!("{}", action.description());

    let deployment = action.execute().await?;
    info!(
        address = %deployment.address,
        tx_hash = %deployment.tx_hash,
        block = ?deployment.block_number,
        "{} deployed",
        contract.name()
    );

    println!("{}", deployment_report(action.plan(), &deployment));

    if contract == Contract::Quoter {
        check_quoter(&provider, deployment.address, &target.network)
            .await
            .wrap_err_with(|| format!("quoter deployed at {}", deployment.address))?;
    }

    Ok(Some(deployment))
}
