//! Deploy the multi-swap router and route quoter using per-network profiles.
//!
//! Subcommands:
//! - `networks`: list known networks and their aliases
//! - `resolve`: print the profile a network identifier resolves to
//! - `pair`: derive a pair or pool address from a factory's init code hash
//! - `deploy-router` / `deploy-quoter`: deploy a contract from its Hardhat artifact

use alloy_primitives::Address;
use clap::{Args, Parser, Subcommand};
use deployer::{
    deploy, load_registry, pair_address, render_networks, render_profile, resolve_target,
    settings::DeployerConfig, Contract, DeployOptions, Format,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "deployer")]
#[command(about = "Deploy the multi-swap router and route quoter")]
struct Cli {
    /// Path to the configuration file (defaults to ./deployer.toml when present)
    #[arg(short, long, env = "DEPLOYER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct NetworkArgs {
    /// Network identifier, e.g. bsc, bsc-fork, polygon
    #[arg(short, long, env = "NETWORK")]
    network: String,
}

#[derive(Args)]
struct DeployArgs {
    #[command(flatten)]
    target: NetworkArgs,

    /// Hardhat artifact JSON (defaults to the standard artifacts layout)
    #[arg(long)]
    artifact: Option<PathBuf>,

    /// Private key for signing transactions (hex string, with or without 0x prefix)
    #[arg(short = 'k', long, env = "PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,

    /// Dry-run mode: log the deployment without sending it
    #[arg(long)]
    dry_run: bool,
}

impl From<DeployArgs> for DeployOptions {
    fn from(args: DeployArgs) -> Self {
        Self {
            artifact: args.artifact,
            private_key: args.private_key,
            dry_run: args.dry_run,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List known networks in resolution order
    Networks,

    /// Print the profile of a network
    Resolve {
        #[command(flatten)]
        target: NetworkArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Derive the pair address of two tokens on a listed factory
    Pair {
        #[command(flatten)]
        target: NetworkArgs,

        /// Factory address (must be listed in the profile's factories)
        #[arg(long)]
        factory: Address,

        /// First token
        #[arg(long)]
        token_a: Address,

        /// Second token
        #[arg(long)]
        token_b: Address,

        /// Pool fee tier in hundredths of a bip, required for v3 factories (e.g. 500, 3000)
        #[arg(long)]
        fee: Option<u32>,
    },

    /// Deploy ApeSwapMultiSwapRouter
    DeployRouter(DeployArgs),

    /// Deploy MixedRouteQuoterV1
    DeployQuoter(DeployArgs),
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = DeployerConfig::load(cli.config.as_deref())?;
    let registry = load_registry(&config)?;

    match cli.command {
        Command::Networks => {
            print!("{}", render_networks(&registry));
        }
        Command::Resolve { target, format } => {
            let target = resolve_target(&config, &registry, &target.network)?;
            println!("{}", render_profile(&target.network, format)?);
        }
        Command::Pair {
            target,
            factory,
            token_a,
            token_b,
            fee,
        } => {
            let target = resolve_target(&config, &registry, &target.network)?;
            println!("{}", pair_address(&target, factory, token_a, token_b, fee)?);
        }
        Command::DeployRouter(args) => {
            let target = resolve_target(&config, &registry, &args.target.network)?;
            run_deploy(&config, &target, Contract::Router, args.into()).await?;
        }
        Command::DeployQuoter(args) => {
            let target = resolve_target(&config, &registry, &args.target.network)?;
            run_deploy(&config, &target, Contract::Quoter, args.into()).await?;
        }
    }

    Ok(())
}

async fn run_deploy(
    config: &DeployerConfig,
    target: &deployer::Target,
    contract: Contract,
    options: DeployOptions,
) -> eyre::Result<()> {
    info!(network = %target.identifier, "START");

    if deploy(config, target, contract, options).await?.is_none() {
        info!("{} not deployed (dry run)", contract.name());
    }

    Ok(())
}
