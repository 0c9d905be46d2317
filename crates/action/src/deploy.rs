//! Contract creation action.

use crate::{plan::DeployPlan, Action, Deployment};
use alloy_network::TransactionBuilder;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use eyre::bail;
use std::time::Duration;
use tokio_retry::{strategy::ExponentialBackoff, Retry};
use tracing::{debug, info, warn};

/// Sends the creation transaction of a [`DeployPlan`].
///
/// The provider must carry a wallet; it fills nonce, gas and fees.
pub struct DeployAction<P> {
    provider: P,
    plan: DeployPlan,
}

impl<P: Provider + Clone> DeployAction<P> {
    pub const fn new(provider: P, plan: DeployPlan) -> Self {
        Self { provider, plan }
    }

    pub const fn plan(&self) -> &DeployPlan {
        &self.plan
    }

    /// Wait until `eth_getCode` returns the deployed runtime code.
    ///
    /// Load-balanced endpoints can serve the receipt before every backend
    /// has the new state.
    async fn wait_for_code(&self, address: Address) -> eyre::Result<()> {
        let retry_strategy = ExponentialBackoff::from_millis(2)
            .factor(250)
            .max_delay(Duration::from_secs(5))
            .take(6);

        Retry::spawn(retry_strategy, || async {
            let code = self.provider.get_code_at(address).await?;
            if code.is_empty() {
                warn!(%address, "Deployed code not visible yet, will retry");
                bail!("no code at {}", address);
            }
            debug!(%address, size = code.len(), "Deployed code visible");
            Ok::<(), eyre::Report>(())
        })
        .await
    }
}

impl<P> Action for DeployAction<P>
where
    P: Provider + Clone,
{
    async fn execute(&mut self) -> eyre::Result<Deployment> {
        let tx = TransactionRequest::default().with_deploy_code(self.plan.init_code());

        let pending = self.provider.send_transaction(tx).await?;
        let tx_hash = *pending.tx_hash();
        info!(
            contract = %self.plan.contract_name,
            network = %self.plan.network,
            %tx_hash,
            "Deployment transaction sent"
        );

        let receipt = pending.get_receipt().await?;
        if !receipt.status() {
            bail!("Deployment of {} reverted", self.plan.contract_name);
        }

        let Some(address) = receipt.contract_address else {
            bail!(
                "Receipt for {} has no contract address",
                self.plan.contract_name
            );
        };

        self.wait_for_code(address).await?;

        Ok(Deployment {
            address,
            tx_hash,
            block_number: receipt.block_number,
            gas_used: Some(U256::from(receipt.gas_used)),
        })
    }

    fn description(&self) -> String {
        format!(
            "Deploy {} on {} ({} bytes of init code)",
            self.plan.contract_name,
            self.plan.network,
            self.plan.init_code().len()
        )
    }
}
