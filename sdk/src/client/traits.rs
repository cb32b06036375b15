//! Ports to the wallet and the ledger the burn workflow runs against

use std::time::Duration;

use async_trait::async_trait;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    transaction::Transaction,
};

use crate::core::SdkResult;

/// Active wallet: its key and its signing capability
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// `None` while no wallet is connected
    fn pubkey(&self) -> Option<Pubkey>;

    /// Sign `tx` as fee payer against `recent_blockhash`
    async fn sign_transaction(&self, tx: Transaction, recent_blockhash: Hash) -> SdkResult<Transaction>;
}

/// Ledger reads, submission and confirmation
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Raw token amount held by a token account
    async fn get_token_account_balance(&self, account: &Pubkey) -> SdkResult<u64>;

    async fn get_latest_blockhash(&self) -> SdkResult<Hash>;

    /// Submit a signed transaction (with preflight simulation)
    async fn send_transaction(&self, tx: &Transaction) -> SdkResult<Signature>;

    /// Wait until `signature` reaches `commitment` or `timeout` elapses
    async fn confirm_transaction(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
        timeout: Duration,
    ) -> SdkResult<()>;
}
