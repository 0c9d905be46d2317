//! Network identifier resolution.
//!
//! Identifiers are matched exactly (case-sensitive) against each network's
//! canonical name and aliases. Networks are checked in table order and the
//! first match wins.

use crate::{builtin, ConfigError, NetworkProfile};
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path};
use tracing::{debug, info};

/// A group of identifiers sharing one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Canonical identifier
    pub name: String,
    /// Additional identifiers resolving to the same profile
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Human readable name used when reporting the selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Expected EVM chain id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    /// Deployment addresses
    #[serde(default)]
    pub profile: NetworkProfile,
}

impl Network {
    /// Create a network with an empty profile and no aliases.
    pub fn new(name: impl Into<String>, chain_id: Option<u64>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            label: None,
            chain_id,
            profile: NetworkProfile::default(),
        }
    }

    /// Add alias identifiers.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the profile.
    pub fn with_profile(mut self, profile: NetworkProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Canonical name followed by aliases.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// True if `identifier` is the canonical name or one of the aliases.
    pub fn matches(&self, identifier: &str) -> bool {
        self.identifiers().any(|id| id == identifier)
    }

    /// Label, or the canonical name when no label is set.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// Wrapped native token, required by both contracts.
    pub fn wrapped_native_token(&self) -> Result<Address, ConfigError> {
        self.profile
            .wrapped_native_token
            .filter(|token| !token.is_zero())
            .ok_or_else(|| ConfigError::missing(&self.name, "wrappedNativeToken"))
    }

    /// `(factoryV3, factoryV2)` in quoter constructor order.
    pub fn quoter_factories(&self) -> Result<(Address, Address), ConfigError> {
        let factory_v3 = self
            .profile
            .factory_v3
            .filter(|factory| !factory.is_zero())
            .ok_or_else(|| ConfigError::missing(&self.name, "factoryV3"))?;
        let factory_v2 = self
            .profile
            .factory_v2
            .filter(|factory| !factory.is_zero())
            .ok_or_else(|| ConfigError::missing(&self.name, "factoryV2"))?;
        Ok((factory_v3, factory_v2))
    }

    /// Router factories; fails if neither profile shape provides any.
    pub fn require_router_factories(&self) -> Result<Vec<Address>, ConfigError> {
        let factories = self.profile.router_factories();
        if factories.is_empty() {
            return Err(ConfigError::missing(&self.name, "factories"));
        }
        Ok(factories)
    }
}

/// On-disk layout of a profile table.
#[derive(Debug, Deserialize)]
struct ProfileFile {
    #[serde(default)]
    network: Vec<Network>,
}

/// Ordered, validated table of networks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRegistry {
    #[serde(rename = "network")]
    networks: Vec<Network>,
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProfileRegistry {
    /// The compiled-in table.
    pub fn builtin() -> Self {
        Self {
            networks: builtin::networks(),
        }
    }

    /// Build a registry from networks listed in priority order.
    pub fn new(networks: Vec<Network>) -> Result<Self, ConfigError> {
        let registry = Self { networks };
        registry.validate()?;
        Ok(registry)
    }

    /// Parse a TOML table of `[[network]]` entries.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: ProfileFile = toml::from_str(contents)?;
        Self::new(file.network)
    }

    /// Load a TOML table from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Apply `overrides` on top of this table.
    ///
    /// An override with an existing canonical name replaces that entry in
    /// place; other overrides are appended after the existing entries.
    pub fn merge(mut self, overrides: Self) -> Result<Self, ConfigError> {
        for network in overrides.networks {
            if let Some(existing) = self.networks.iter_mut().find(|n| n.name == network.name) {
                debug!(network = %network.name, "Overriding network profile");
                *existing = network;
            } else {
                debug!(network = %network.name, "Adding network profile");
                self.networks.push(network);
            }
        }
        self.validate()?;
        Ok(self)
    }

    /// Check every profile, and that no identifier is claimed twice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut claimed: HashMap<&str, &str> = HashMap::new();
        for network in &self.networks {
            network.profile.validate(&network.name)?;
            for identifier in network.identifiers() {
                if let Some(first) = claimed.insert(identifier, &network.name) {
                    return Err(ConfigError::DuplicateIdentifier {
                        identifier: identifier.to_string(),
                        first: first.to_string(),
                        second: network.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Networks in priority order.
    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    /// First network, in priority order, accepting `identifier`.
    pub fn lookup(&self, identifier: &str) -> Option<&Network> {
        self.networks.iter().find(|n| n.matches(identifier))
    }

    /// Resolve `identifier`, failing with [`ConfigError::ConfigNotFound`].
    pub fn resolve(&self, identifier: &str) -> Result<&Network, ConfigError> {
        let network = self
            .lookup(identifier)
            .ok_or_else(|| ConfigError::ConfigNotFound(identifier.to_string()))?;

        info!(
            identifier,
            network = %network.name,
            "Deploying with {} config.",
            network.display_name()
        );

        Ok(network)
    }
}

/// Resolve a network identifier against the compiled-in table.
pub fn resolve(identifier: &str) -> Result<NetworkProfile, ConfigError> {
    ProfileRegistry::builtin()
        .resolve(identifier)
        .map(|network| network.profile.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::{
        APESWAP_POLYGON_FACTORY_V3, UNISWAP_V3_FACTORY, WBNB, WETH, WMATIC,
    };
    use alloy_primitives::{address, B256};

    #[test]
    fn test_aliases_resolve_identically() {
        let groups = [
            ("bsc", "bsc-fork"),
            ("bscTestnet", "bsc-testnet-fork"),
            ("eth", "ethereum"),
            ("telos", "tlos"),
        ];

        for (name, alias) in groups {
            assert_eq!(resolve(name).unwrap(), resolve(alias).unwrap(), "{name}");
        }
    }

    #[test]
    fn test_development_is_empty() {
        let profile = resolve("development").unwrap();
        assert!(profile.is_empty());
    }

    #[test]
    fn test_unknown_network() {
        let err = resolve("not-a-network").unwrap_err();
        assert!(matches!(err, ConfigError::ConfigNotFound(ref id) if id == "not-a-network"));
        assert_eq!(err.to_string(), "No config found for network not-a-network.");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(resolve("BSC").is_err());
        assert!(resolve("bsctestnet").is_err());
        assert!(resolve(" bsc").is_err());
    }

    #[test]
    fn test_polygon_profile() {
        let profile = resolve("polygon").unwrap();
        assert_eq!(profile.wrapped_native_token, Some(WMATIC));
        assert_eq!(profile.factories.len(), 4);
        assert_eq!(profile.init_code_hashes.len(), 4);
        assert_eq!(profile.factory_kinds.len(), 4);
    }

    #[test]
    fn test_polygon_apeswap_v3_has_no_hash() {
        let profile = resolve("polygon").unwrap();
        assert_eq!(profile.init_code_hash(APESWAP_POLYGON_FACTORY_V3), None);

        let err = profile
            .pair_address(
                "polygon",
                APESWAP_POLYGON_FACTORY_V3,
                WMATIC,
                Address::repeat_byte(1),
                Some(500),
            )
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingInitCodeHash { .. }));
    }

    #[test]
    fn test_eth_v3_pool_address() {
        let usdc = address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
        let profile = resolve("eth").unwrap();

        let pool = profile
            .pair_address("eth", UNISWAP_V3_FACTORY, usdc, WETH, Some(500))
            .unwrap();
        assert_eq!(pool, address!("0x88e6A0c2dDD26FEEb64F039a2c41296FcB3f5640"));

        let err = profile
            .pair_address("eth", UNISWAP_V3_FACTORY, usdc, WETH, None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingPoolFee { .. }));
    }

    #[test]
    fn test_bsc_profile() {
        let profile = resolve("bsc").unwrap();
        assert_eq!(profile.wrapped_native_token, Some(WBNB));
        assert!(profile.factories.is_empty());
        // legacy shape still yields router factories
        assert_eq!(profile.router_factories().len(), 2);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let registry = ProfileRegistry::builtin();
        let first = registry.resolve("eth").unwrap().clone();
        let second = registry.resolve("eth").unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(resolve("arbitrum").unwrap(), resolve("arbitrum").unwrap());
    }

    #[test]
    fn test_builtin_is_valid() {
        let registry = ProfileRegistry::builtin();
        registry.validate().unwrap();

        for network in registry.networks() {
            let profile = &network.profile;
            if !profile.init_code_hashes.is_empty() {
                assert_eq!(
                    profile.factories.len(),
                    profile.init_code_hashes.len(),
                    "{}",
                    network.name
                );
                // every hash-checked factory knows how its pools are salted
                assert_eq!(
                    profile.factories.len(),
                    profile.factory_kinds.len(),
                    "{}",
                    network.name
                );
            }
        }
    }

    #[test]
    fn test_builtin_priority_order() {
        let names: Vec<_> = ProfileRegistry::builtin()
            .networks()
            .iter()
            .map(|n| n.name.clone())
            .collect();
        assert_eq!(
            names,
            [
                "bsc",
                "bscTestnet",
                "polygon",
                "eth",
                "arbitrum",
                "telos",
                "development"
            ]
        );
    }

    #[test]
    fn test_lookup_first_match_wins() {
        // Bypasses validation to exercise overlapping alias sets.
        let registry = ProfileRegistry {
            networks: vec![
                Network::new("first", Some(1)).with_aliases(["shared"]),
                Network::new("second", Some(2)).with_aliases(["shared"]),
            ],
        };
        assert_eq!(registry.lookup("shared").unwrap().name, "first");
        assert!(registry.validate().is_err());
    }

    #[test]
    fn test_duplicate_identifier_rejected() {
        let err = ProfileRegistry::new(vec![
            Network::new("bsc", Some(56)),
            Network::new("bnb", Some(56)).with_aliases(["bsc"]),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::DuplicateIdentifier { ref identifier, ref first, ref second }
                if identifier == "bsc" && first == "bsc" && second == "bnb"
        ));
    }

    #[test]
    fn test_mismatched_hashes_rejected() {
        let err = ProfileRegistry::new(vec![Network::new("x", None).with_profile(
            NetworkProfile {
                factories: vec![Address::repeat_byte(1)],
                init_code_hashes: vec![B256::repeat_byte(1), B256::repeat_byte(2)],
                ..Default::default()
            },
        )])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InitCodeHashMismatch { .. }));
    }

    #[test]
    fn test_merge_replaces_in_place() {
        let replacement = Network::new("polygon", Some(137)).with_profile(NetworkProfile {
            wrapped_native_token: Some(Address::repeat_byte(5)),
            ..Default::default()
        });
        let overrides = ProfileRegistry::new(vec![replacement]).unwrap();

        let merged = ProfileRegistry::builtin().merge(overrides).unwrap();
        assert_eq!(merged.networks().len(), 7);
        assert_eq!(merged.networks()[2].name, "polygon");

        let polygon = merged.resolve("polygon").unwrap();
        assert_eq!(
            polygon.profile.wrapped_native_token,
            Some(Address::repeat_byte(5))
        );
        assert!(polygon.profile.factories.is_empty());
    }

    #[test]
    fn test_merge_appends_new() {
        let overrides = ProfileRegistry::new(vec![
            Network::new("base", Some(8453)).with_aliases(["base-fork"])
        ])
        .unwrap();

        let merged = ProfileRegistry::builtin().merge(overrides).unwrap();
        assert_eq!(merged.networks().last().unwrap().name, "base");
        assert_eq!(merged.resolve("base-fork").unwrap().chain_id, Some(8453));
    }

    #[test]
    fn test_merge_rejects_alias_collision() {
        let overrides = ProfileRegistry::new(vec![
            Network::new("bnb", Some(56)).with_aliases(["bsc-fork"])
        ])
        .unwrap();

        assert!(ProfileRegistry::builtin().merge(overrides).is_err());
    }

    #[test]
    fn test_from_toml_str() {
        let contents = r#"
            [[network]]
            name = "polygon"
            label = "polygon (rev 2)"
            chainId = 137

            [network.profile]
            WNATIVE = "0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270"
            factories = ["0x1F98431c8aD98523631AE4a59f267346ea31F984"]
            initCodeHashes = ["0xe34f199b19b2b4f47f68442619d555527d244f78a3297ea89325f843f87b8b54"]

            [[network]]
            name = "development"
        "#;

        let registry = ProfileRegistry::from_toml_str(contents).unwrap();
        assert_eq!(registry.networks().len(), 2);

        let polygon = registry.resolve("polygon").unwrap();
        assert_eq!(polygon.display_name(), "polygon (rev 2)");
        assert_eq!(polygon.profile.wrapped_native_token, Some(WMATIC));
        assert_eq!(polygon.profile.factories.len(), 1);

        assert!(registry.resolve("development").unwrap().profile.is_empty());
    }

    #[test]
    fn test_from_toml_str_rejects_bad_address() {
        let contents = r#"
            [[network]]
            name = "bsc"

            [network.profile]
            factoryV2 = "0x1234"
        "#;
        assert!(matches!(
            ProfileRegistry::from_toml_str(contents),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_missing_fields() {
        let development = ProfileRegistry::builtin()
            .resolve("development")
            .unwrap()
            .clone();

        assert!(matches!(
            development.wrapped_native_token(),
            Err(ConfigError::MissingField {
                field: "wrappedNativeToken",
                ..
            })
        ));
        assert!(development.quoter_factories().is_err());
        assert!(development.require_router_factories().is_err());
    }

    #[test]
    fn test_quoter_factories_order() {
        let registry = ProfileRegistry::builtin();
        let eth = registry.resolve("ethereum").unwrap();
        let (v3, v2) = eth.quoter_factories().unwrap();
        assert_eq!(v3, builtin::UNISWAP_V3_FACTORY);
        assert_eq!(v2, builtin::UNISWAP_V2_FACTORY);

        // arbitrum has no v2 factory
        assert!(registry.resolve("arbitrum").unwrap().quoter_factories().is_err());
    }
}
