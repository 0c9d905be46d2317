//! Post-deployment checks for the route quoter.

use alloy_primitives::Address;
use alloy_provider::Provider;
use binding::quoter::MixedRouteQuoterV1;
use config::Network;
use eyre::bail;
use tracing::info;

/// Immutables a quoter is expected to have been constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoterImmutables {
    pub factory_v3: Address,
    pub factory_v2: Address,
    pub wrapped_native: Address,
}

impl QuoterImmutables {
    /// Expected immutables for `network`.
    pub fn expected(network: &Network) -> eyre::Result<Self> {
        let (factory_v3, factory_v2) = network.quoter_factories()?;
        Ok(Self {
            factory_v3,
            factory_v2,
            wrapped_native: network.wrapped_native_token()?,
        })
    }

    /// Read the immutables of a deployed quoter.
    pub async fn read<P: Provider>(provider: &P, quoter: Address) -> eyre::Result<Self> {
        let contract = MixedRouteQuoterV1::new(quoter, provider);

        Ok(Self {
            factory_v3: contract.factory().call().await?,
            factory_v2: contract.factoryV2().call().await?,
            wrapped_native: contract.WETH9().call().await?,
        })
    }

    /// Names of the fields that differ from `other`.
    pub fn mismatches(&self, other: &Self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.factory_v3 != other.factory_v3 {
            fields.push("factory");
        }
        if self.factory_v2 != other.factory_v2 {
            fields.push("factoryV2");
        }
        if self.wrapped_native != other.wrapped_native {
            fields.push("WETH9");
        }
        fields
    }
}

/// Compare a deployed quoter against the profile it was deployed from.
pub async fn check_quoter<P: Provider>(
    provider: &P,
    quoter: Address,
    network: &Network,
) -> eyre::Result<()> {
    let expected = QuoterImmutables::expected(network)?;
    let actual = QuoterImmutables::read(provider, quoter).await?;

    let mismatches = expected.mismatches(&actual);
    if !mismatches.is_empty() {
        bail!(
            "quoter {} does not match the {} profile: {}",
            quoter,
            network.name,
            mismatches.join(", ")
        );
    }

    info!(%quoter, network = %network.name, "Quoter immutables match profile");
    Ok(())
}
