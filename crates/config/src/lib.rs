//! Deployment configuration for the multi-swap router and route quoter.
//!
//! This crate provides:
//! - Per-network profiles (DEX factories, position managers, wrapped native token)
//! - Network identifier aliases resolved in a fixed priority order
//! - Loading and merging profile tables from TOML
//! - CREATE2 pair and pool address derivation from factory init code hashes

pub mod builtin;
pub mod error;
pub mod profile;
pub mod registry;

pub use error::ConfigError;
pub use profile::{compute_pair_address, compute_pool_address, FactoryKind, NetworkProfile};
pub use registry::{resolve, Network, ProfileRegistry};
