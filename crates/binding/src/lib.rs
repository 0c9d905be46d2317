//! Contract bindings for the deployed periphery contracts.
//!
//! This crate declares the constructor and view interfaces of:
//! - ApeSwapMultiSwapRouter (multi-factory swap router)
//! - MixedRouteQuoterV1 (v2/v3 mixed route quoter)
//!
//! All bindings are generated using alloy's `sol!` macro.

pub mod quoter;
pub mod router;
