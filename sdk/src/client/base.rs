use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    hash::Hash,
    signature::Signature,
    transaction::Transaction,
};
use tracing::debug;

use crate::{
    client::LedgerClient,
    config::BurnConfig,
    core::{SdkError, SdkResult},
    prelude::*,
};

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// RPC-backed ledger client
pub struct RpcLedger {
    rpc: Arc<RpcClient>,
    poll_interval: Duration,
}

impl RpcLedger {
    pub fn new(rpc: Arc<RpcClient>) -> Self {
        Self {
            rpc,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn from_config(config: &BurnConfig) -> SdkResult<Self> {
        let rpc = RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment_config()?);
        Ok(Self::new(Arc::new(rpc)).with_poll_interval(config.confirm_poll_interval()))
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Get the RPC client
    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    /// Get the RPC endpoint URL
    pub fn rpc_url(&self) -> String {
        self.rpc.url()
    }
}

#[async_trait]
impl LedgerClient for RpcLedger {
    async fn get_token_account_balance(&self, account: &Pubkey) -> SdkResult<u64> {
        let balance = self.rpc.get_token_account_balance(account).await?;
        balance
            .amount
            .parse::<u64>()
            .map_err(|e| SdkError::ParseError(format!("token amount {:?} of {}: {}", balance.amount, account, e)))
    }

    async fn get_latest_blockhash(&self) -> SdkResult<Hash> {
        Ok(self.rpc.get_latest_blockhash().await?)
    }

    async fn send_transaction(&self, tx: &Transaction) -> SdkResult<Signature> {
        Ok(self.rpc.send_transaction(tx).await?)
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
        timeout: Duration,
    ) -> SdkResult<()> {
        let poll = async {
            loop {
                match self
                    .rpc
                    .get_signature_status_with_commitment(signature, commitment)
                    .await?
                {
                    Some(Ok(())) => return Ok(()),
                    Some(Err(err)) => return Err(SdkError::TransactionFailed(err.to_string())),
                    None => {
                        debug!(%signature, "not yet confirmed");
                        tokio::time::sleep(self.poll_interval).await;
                    }
                }
            }
        };

        match tokio::time::timeout(timeout, poll).await {
            Ok(result) => result,
            Err(_) => Err(SdkError::ConfirmationTimeout {
                signature: *signature,
                timeout,
            }),
        }
    }
}
