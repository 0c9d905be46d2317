//! Integration tests for deployment planning and the deploy preconditions.
//!
//! Nothing here reaches a live chain: endpoints in the fixtures point at
//! closed ports.


use action::Deployment;
use alloy_primitives::{Address, B256};
use config::builtin;
use deployer::{deploy, deployment_report, plan, resolve_target, Contract, DeployOptions};
use setup::load_test_registry;
use std::path::PathBuf;

const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

#[test]
fn test_router_plan_from_fixture_artifact() {
    let (config, registry) = load_test_registry();
    let target = resolve_target(&config, &registry, "bsc").unwrap();

    let plan = plan(&config, &target, Contract::Router, None).unwrap();
    assert_eq!(plan.contract_name, "ApeSwapMultiSwapRouter");
    assert_eq!(plan.bytecode.len(), 17);
    // legacy bsc profile: factoryV2 + factoryV3
    assert_eq!(plan.constructor_args.len(), 5 * 32);
    assert_eq!(plan.init_code().len(), 17 + 5 * 32);
}

#[test]
fn test_quoter_plan_from_fixture_artifact() {
    let (config, registry) = load_test_registry();
    let target = resolve_target(&config, &registry, "bsc-fork").unwrap();

    let plan = plan(&config, &target, Contract::Quoter, None).unwrap();
    assert_eq!(plan.contract_name, "MixedRouteQuoterV1");
    assert_eq!(plan.network, "bsc");
    assert_eq!(plan.verify_args[2], builtin::WBNB.to_string());
}

#[test]
fn test_artifact_override() {
    let (config, registry) = load_test_registry();
    let target = resolve_target(&config, &registry, "eth").unwrap();

    // router artifact passed where the quoter is expected
    let path = PathBuf::from(
        "tests/fixtures/artifacts/contracts/ApeSwapMultiSwapRouter.sol/ApeSwapMultiSwapRouter.json",
    );
    let err = plan(&config, &target, Contract::Quoter, Some(path)).unwrap_err();
    assert!(err.to_string().contains("expected MixedRouteQuoterV1"));
}

#[test]
fn test_overridden_polygon_cannot_deploy_quoter() {
    let (config, registry) = load_test_registry();
    let target = resolve_target(&config, &registry, "polygon").unwrap();

    // the override dropped factoryV2
    assert!(plan(&config, &target, Contract::Quoter, None).is_err());
    assert!(plan(&config, &target, Contract::Router, None).is_ok());
}

#[test]
fn test_deployment_report() {
    let (config, registry) = load_test_registry();
    let target = resolve_target(&config, &registry, "bsc").unwrap();
    let plan = plan(&config, &target, Contract::Quoter, None).unwrap();

    let deployment = Deployment {
        address: Address::repeat_byte(0xaa),
        tx_hash: B256::ZERO,
        block_number: Some(1),
        gas_used: None,
    };
    let report = deployment_report(&plan, &deployment);
    let lines: Vec<_> = report.lines().collect();

    // address and verify hint come out together, ahead of the quoter check
    assert_eq!(
        lines[0],
        format!("MixedRouteQuoterV1 deployed at: {}", deployment.address)
    );
    assert_eq!(lines[1], plan.verify_command(deployment.address));
}

#[tokio::test]
async fn test_dry_run_without_endpoint() {
    let (config, registry) = load_test_registry();
    let target = resolve_target(&config, &registry, "eth").unwrap();

    let options = DeployOptions {
        dry_run: true,
        ..Default::default()
    };
    let result = deploy(&config, &target, Contract::Router, options).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_dry_run_checks_endpoint() {
    let (config, registry) = load_test_registry();
    let target = resolve_target(&config, &registry, "bsc").unwrap();

    let options = DeployOptions {
        dry_run: true,
        ..Default::default()
    };
    // closed port: the chain id check cannot succeed
    assert!(deploy(&config, &target, Contract::Quoter, options).await.is_err());
}

#[tokio::test]
async fn test_deploy_requires_endpoint() {
    let (config, registry) = load_test_registry();
    let target = resolve_target(&config, &registry, "arbitrum").unwrap();

    let options = DeployOptions {
        private_key: Some(TEST_KEY.to_string()),
        ..Default::default()
    };
    let err = deploy(&config, &target, Contract::Router, options).await.unwrap_err();
    assert!(err.to_string().contains("no RPC endpoint configured for network arbitrum"));
}

#[tokio::test]
async fn test_deploy_requires_private_key() {
    let (config, registry) = load_test_registry();
    let target = resolve_target(&config, &registry, "bsc").unwrap();

    let err = deploy(&config, &target, Contract::Router, DeployOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("private key"));
}

#[tokio::test]
async fn test_deploy_development_fails_before_sending() {
    let (config, registry) = load_test_registry();
    let target = resolve_target(&config, &registry, "development").unwrap();

    let options = DeployOptions {
        private_key: Some(TEST_KEY.to_string()),
        ..Default::default()
    };
    // the empty profile has no factories to plan with
    assert!(deploy(&config, &target, Contract::Router, options).await.is_err());
}
