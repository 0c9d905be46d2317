use crate::profile::{FactoryKind, MAX_POOL_FEE};
use alloy_primitives::Address;
use thiserror::Error;

/// Errors raised while loading, validating or resolving network profiles.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The network identifier matches no known alias group.
    #[error("No config found for network {0}.")]
    ConfigNotFound(String),

    /// `initCodeHashes` does not line up with `factories`.
    #[error("network {network}: {factories} factories but {hashes} init code hashes")]
    InitCodeHashMismatch {
        network: String,
        factories: usize,
        hashes: usize,
    },

    /// `factoryKinds` does not line up with `factories`.
    #[error("network {network}: {factories} factories but {kinds} factory kinds")]
    FactoryKindMismatch {
        network: String,
        factories: usize,
        kinds: usize,
    },

    /// The same identifier is claimed by two alias groups.
    #[error("network identifier {identifier} is claimed by both {first} and {second}")]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },

    /// A field the caller depends on is absent from the profile.
    #[error("network {network} has no {field} configured")]
    MissingField {
        network: String,
        field: &'static str,
    },

    /// The factory is not listed, or has no init code hash next to it.
    #[error("factory {factory} has no init code hash on network {network}")]
    MissingInitCodeHash { network: String, factory: Address },

    /// The factory has no pool model next to it.
    #[error("factory {factory} has no factory kind on network {network}")]
    MissingFactoryKind { network: String, factory: Address },

    /// A v3 pool address was requested without its fee tier.
    #[error("factory {factory} on network {network} is a v3 factory and needs a fee tier")]
    MissingPoolFee { network: String, factory: Address },

    /// A fee tier was given for a factory whose pools have none.
    #[error("factory {factory} on network {network} is a {kind} factory and takes no fee")]
    UnexpectedPoolFee {
        network: String,
        factory: Address,
        kind: FactoryKind,
    },

    /// The fee tier does not fit a `uint24`.
    #[error("pool fee {0} exceeds {MAX_POOL_FEE}")]
    InvalidPoolFee(u32),

    /// Error reading a profile file
    #[error("failed to read profile file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a profile file
    #[error("failed to parse profile file: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ConfigError {
    /// Absent field on the named network.
    pub fn missing(network: &str, field: &'static str) -> Self {
        Self::MissingField {
            network: network.to_string(),
            field,
        }
    }
}
