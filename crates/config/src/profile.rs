//! Per-network deployment profile.
//!
//! A profile carries the contract addresses the router and quoter are
//! constructed with. Two shapes coexist: the legacy `factoryV2`/`factoryV3`
//! pair and the list-based `factories`/`initCodeHashes` shape. Both are
//! accepted; [`NetworkProfile::router_factories`] picks the list when it is
//! populated and falls back to the legacy pair otherwise.
//!
//! Pool addresses are derived per factory kind. A v2 pair is salted with the
//! packed token pair, a v3 pool with the ABI-encoded tokens and fee tier.

use crate::ConfigError;
use alloy_primitives::{keccak256, Address, B256, U256};
use alloy_sol_types::SolValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest fee tier a v3 pool accepts (`uint24`).
pub const MAX_POOL_FEE: u32 = (1 << 24) - 1;

/// Pool model of a DEX factory, which decides how pool addresses are salted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactoryKind {
    /// Constant-product pairs, one per token pair
    V2,
    /// Concentrated-liquidity pools, one per token pair and fee tier
    V3,
}

impl fmt::Display for FactoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V2 => write!(f, "v2"),
            Self::V3 => write!(f, "v3"),
        }
    }
}

/// Contract addresses for a single network.
///
/// Every field may be absent; the `development` profile is entirely empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProfile {
    /// Legacy v2 DEX factory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factory_v2: Option<Address>,
    /// Legacy v3 DEX factory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factory_v3: Option<Address>,
    /// v3 liquidity position manager
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_manager: Option<Address>,
    /// ERC-20 wrapped native currency (WETH, WBNB, WMATIC, ...)
    #[serde(
        default,
        alias = "WNATIVE",
        skip_serializing_if = "Option::is_none"
    )]
    pub wrapped_native_token: Option<Address>,
    /// DEX factories registered with the router, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub factories: Vec<Address>,
    /// Pool init code hash for each entry of `factories`, by position.
    /// A zero hash marks a factory whose hash is not recorded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub init_code_hashes: Vec<B256>,
    /// Pool model of each entry of `factories`, by position
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub factory_kinds: Vec<FactoryKind>,
}

impl NetworkProfile {
    /// True if no field is populated.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check that `initCodeHashes` and `factoryKinds`, when given, match
    /// `factories` one to one.
    pub fn validate(&self, network: &str) -> Result<(), ConfigError> {
        if !self.init_code_hashes.is_empty() && self.init_code_hashes.len() != self.factories.len()
        {
            return Err(ConfigError::InitCodeHashMismatch {
                network: network.to_string(),
                factories: self.factories.len(),
                hashes: self.init_code_hashes.len(),
            });
        }
        if !self.factory_kinds.is_empty() && self.factory_kinds.len() != self.factories.len() {
            return Err(ConfigError::FactoryKindMismatch {
                network: network.to_string(),
                factories: self.factories.len(),
                kinds: self.factory_kinds.len(),
            });
        }
        Ok(())
    }

    /// Factories to hand to the router constructor.
    ///
    /// Uses `factories` when non-empty, otherwise the legacy v2 and v3
    /// factories (zero addresses count as unset).
    pub fn router_factories(&self) -> Vec<Address> {
        if !self.factories.is_empty() {
            return self.factories.clone();
        }
        [self.factory_v2, self.factory_v3]
            .into_iter()
            .flatten()
            .filter(|factory| !factory.is_zero())
            .collect()
    }

    /// Init code hash registered for `factory`, if any (zero counts as unset).
    pub fn init_code_hash(&self, factory: Address) -> Option<B256> {
        let index = self.factories.iter().position(|f| *f == factory)?;
        self.init_code_hashes
            .get(index)
            .copied()
            .filter(|hash| !hash.is_zero())
    }

    /// Pool model registered for `factory`, if any.
    pub fn factory_kind(&self, factory: Address) -> Option<FactoryKind> {
        let index = self.factories.iter().position(|f| *f == factory)?;
        self.factory_kinds.get(index).copied()
    }

    /// Derive the pool address of two tokens on `factory`.
    ///
    /// v3 factories need the pool's `fee` tier; v2 factories take none.
    pub fn pair_address(
        &self,
        network: &str,
        factory: Address,
        token_a: Address,
        token_b: Address,
        fee: Option<u32>,
    ) -> Result<Address, ConfigError> {
        let init_code_hash =
            self.init_code_hash(factory)
                .ok_or_else(|| ConfigError::MissingInitCodeHash {
                    network: network.to_string(),
                    factory,
                })?;
        let kind = self
            .factory_kind(factory)
            .ok_or_else(|| ConfigError::MissingFactoryKind {
                network: network.to_string(),
                factory,
            })?;

        match (kind, fee) {
            (FactoryKind::V2, None) => Ok(compute_pair_address(
                factory,
                init_code_hash,
                token_a,
                token_b,
            )),
            (FactoryKind::V3, Some(fee)) if fee <= MAX_POOL_FEE => Ok(compute_pool_address(
                factory,
                init_code_hash,
                token_a,
                token_b,
                fee,
            )),
            (FactoryKind::V3, Some(fee)) => Err(ConfigError::InvalidPoolFee(fee)),
            (FactoryKind::V3, None) => Err(ConfigError::MissingPoolFee {
                network: network.to_string(),
                factory,
            }),
            (kind, Some(_)) => Err(ConfigError::UnexpectedPoolFee {
                network: network.to_string(),
                factory,
                kind,
            }),
        }
    }
}

fn sort_tokens(token_a: Address, token_b: Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    }
}

/// CREATE2 address of a v2-style pair.
///
/// Tokens are sorted first, so argument order does not matter.
/// salt = keccak256(token0 ++ token1)
pub fn compute_pair_address(
    factory: Address,
    init_code_hash: B256,
    token_a: Address,
    token_b: Address,
) -> Address {
    let (token0, token1) = sort_tokens(token_a, token_b);

    let mut packed = [0u8; 40];
    packed[..20].copy_from_slice(token0.as_slice());
    packed[20..].copy_from_slice(token1.as_slice());
    let salt = keccak256(packed);

    factory.create2(salt.0, init_code_hash.0)
}

/// CREATE2 address of a v3-style pool.
///
/// salt = keccak256(abi.encode(token0, token1, fee)), tokens sorted.
pub fn compute_pool_address(
    factory: Address,
    init_code_hash: B256,
    token_a: Address,
    token_b: Address,
    fee: u32,
) -> Address {
    let (token0, token1) = sort_tokens(token_a, token_b);

    // a uint24 occupies a full word in abi.encode, same as a uint256
    let salt = keccak256((token0, token1, U256::from(fee)).abi_encode_sequence());

    factory.create2(salt.0, init_code_hash.0)
}
