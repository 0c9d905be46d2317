//! Compiled-in network profiles.
//!
//! Order of [`networks`] is the resolution priority order.

use crate::{FactoryKind, Network, NetworkProfile};
use alloy_primitives::{address, b256, Address, B256};

/// Wrapped BNB on BSC mainnet
pub const WBNB: Address = address!("0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c");
/// Wrapped BNB on BSC testnet
pub const WBNB_TESTNET: Address = address!("0xae13d989daC2f0dEbFf460aC112a837C89BAa7cd");
/// Wrapped MATIC on Polygon
pub const WMATIC: Address = address!("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270");
/// Wrapped ETH on Ethereum mainnet
pub const WETH: Address = address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
/// Wrapped ETH on Arbitrum One
pub const WETH_ARBITRUM: Address = address!("0x82aF49447D8a07e3bd95BD0d56f35241523fBab1");
/// Wrapped TLOS on Telos EVM
pub const WTLOS: Address = address!("0xD102cE6A4dB07D247fcc28F366A623Df0938CA9E");

// Uniswap deployments share addresses across chains
pub const UNISWAP_V2_FACTORY: Address = address!("0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f");
pub const UNISWAP_V3_FACTORY: Address = address!("0x1F98431c8aD98523631AE4a59f267346ea31F984");
pub const UNISWAP_V3_POSITION_MANAGER: Address =
    address!("0xC36442b4a4522E871399CD717aBDD847Ab11FE88");
pub const UNISWAP_V2_INIT_CODE_HASH: B256 =
    b256!("0x96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f");
pub const UNISWAP_V3_INIT_CODE_HASH: B256 =
    b256!("0xe34f199b19b2b4f47f68442619d555527d244f78a3297ea89325f843f87b8b54");

pub const APESWAP_POLYGON_FACTORY_V2: Address =
    address!("0xCf083Be4164828f00cAE704EC15a36D711491284");
pub const APESWAP_POLYGON_FACTORY_V3: Address =
    address!("0x86A2Ad3771ed3b4722238CEF303048AC44231987");
pub const APESWAP_POLYGON_INIT_CODE_HASH_V2: B256 =
    b256!("0x511f0f358fe530cda0859ec20becf391718fdf5a329be02f4c95361f3d6a42d8");

/// QuickSwap is a Uniswap v2 fork and keeps its pair init code hash.
pub const QUICKSWAP_FACTORY: Address = address!("0x5757371414417b8C6CAad45bAeF941aBc7d3Ab32");

/// All built-in networks, in resolution priority order.
pub fn networks() -> Vec<Network> {
    vec![
        bsc(),
        bsc_testnet(),
        polygon(),
        ethereum(),
        arbitrum(),
        telos(),
        development(),
    ]
}

/// BSC mainnet.
pub fn bsc() -> Network {
    Network::new("bsc", Some(56))
        .with_aliases(["bsc-fork"])
        .with_label("BSC MAINNET")
        .with_profile(NetworkProfile {
            factory_v2: Some(address!("0x0841BD0B734E4F5853f0dD8d7Ea041c241fb0Da6")),
            factory_v3: Some(address!("0x5a6511F7CD85e5bCaad3D72B0ed22AF163363A63")),
            position_manager: Some(address!("0x3f0256533a4c4670B7E4b4CBcE990d7497216489")),
            wrapped_native_token: Some(WBNB),
            ..Default::default()
        })
}

/// BSC testnet.
pub fn bsc_testnet() -> Network {
    Network::new("bscTestnet", Some(97))
        .with_aliases(["bsc-testnet-fork"])
        .with_label("BSC testnet")
        .with_profile(NetworkProfile {
            factory_v2: Some(address!("0x152349604d49c2Af10ADeE94b918b051104a143E")),
            factory_v3: Some(address!("0x13f321ABC34b9BD13a6Db1b1CfA6bfd0f78b3909")),
            position_manager: Some(address!("0x23EAe0CF648314AE40eB26e4bFfFE129bf4Cd8C8")),
            wrapped_native_token: Some(WBNB_TESTNET),
            ..Default::default()
        })
}

/// Polygon PoS.
pub fn polygon() -> Network {
    Network::new("polygon", Some(137))
        .with_label("polygon")
        .with_profile(NetworkProfile {
            factory_v2: Some(APESWAP_POLYGON_FACTORY_V2),
            factory_v3: Some(APESWAP_POLYGON_FACTORY_V3),
            position_manager: Some(address!("0x01B8f5B6647E57607D8d5E323EdBDb3C7Efe86b6")),
            wrapped_native_token: Some(WMATIC),
            factories: vec![
                APESWAP_POLYGON_FACTORY_V2,
                APESWAP_POLYGON_FACTORY_V3,
                UNISWAP_V3_FACTORY,
                QUICKSWAP_FACTORY,
            ],
            // ApeSwap v3 pool hash is not recorded, so its slot is zero
            init_code_hashes: vec![
                APESWAP_POLYGON_INIT_CODE_HASH_V2,
                B256::ZERO,
                UNISWAP_V3_INIT_CODE_HASH,
                UNISWAP_V2_INIT_CODE_HASH,
            ],
            factory_kinds: vec![
                FactoryKind::V2,
                FactoryKind::V3,
                FactoryKind::V3,
                FactoryKind::V2,
            ],
        })
}

/// Ethereum mainnet.
pub fn ethereum() -> Network {
    Network::new("eth", Some(1))
        .with_aliases(["ethereum"])
        .with_label("Ethereum MAINNET")
        .with_profile(NetworkProfile {
            factory_v2: Some(UNISWAP_V2_FACTORY),
            factory_v3: Some(UNISWAP_V3_FACTORY),
            position_manager: Some(UNISWAP_V3_POSITION_MANAGER),
            wrapped_native_token: Some(WETH),
            factories: vec![UNISWAP_V2_FACTORY, UNISWAP_V3_FACTORY],
            init_code_hashes: vec![UNISWAP_V2_INIT_CODE_HASH, UNISWAP_V3_INIT_CODE_HASH],
            factory_kinds: vec![FactoryKind::V2, FactoryKind::V3],
        })
}

/// Arbitrum One.
pub fn arbitrum() -> Network {
    Network::new("arbitrum", Some(42161))
        .with_label("arbitrum")
        .with_profile(NetworkProfile {
            factory_v3: Some(UNISWAP_V3_FACTORY),
            position_manager: Some(UNISWAP_V3_POSITION_MANAGER),
            wrapped_native_token: Some(WETH_ARBITRUM),
            factories: vec![UNISWAP_V3_FACTORY],
            init_code_hashes: vec![UNISWAP_V3_INIT_CODE_HASH],
            factory_kinds: vec![FactoryKind::V3],
            ..Default::default()
        })
}

/// Telos EVM.
pub fn telos() -> Network {
    Network::new("telos", Some(40))
        .with_aliases(["tlos"])
        .with_label("telos")
        .with_profile(NetworkProfile {
            wrapped_native_token: Some(WTLOS),
            ..Default::default()
        })
}

/// Local development chain, with nothing configured.
pub fn development() -> Network {
    Network::new("development", None).with_label("development")
}
