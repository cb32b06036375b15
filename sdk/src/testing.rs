//! Testing utilities for the burn workflow
//!
//! Provides an in-memory ledger that records what the workflow submits.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex, MutexGuard, PoisonError,
    },
    time::Duration,
};

use async_trait::async_trait;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    hash::Hash,
    signature::Signature,
    transaction::Transaction,
};

use crate::{
    client::LedgerClient,
    core::{SdkError, SdkResult},
    prelude::*,
};

/// Outcome the mock reports when asked to confirm a signature
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockConfirmation {
    Confirmed,
    Failed(String),
    TimedOut,
}

/// In-memory ledger
pub struct MockLedger {
    balances: Mutex<HashMap<Pubkey, u64>>,
    sent: Mutex<Vec<Transaction>>,
    send_error: Mutex<Option<String>>,
    confirmation: Mutex<MockConfirmation>,
    confirm_delay: Duration,
    balance_queries: AtomicUsize,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockLedger {
    pub fn new() -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
            sent: Mutex::new(Vec::new()),
            send_error: Mutex::new(None),
            confirmation: Mutex::new(MockConfirmation::Confirmed),
            confirm_delay: Duration::ZERO,
            balance_queries: AtomicUsize::new(0),
        }
    }

    /// Keep confirmations pending for `delay`
    pub fn with_confirm_delay(mut self, delay: Duration) -> Self {
        self.confirm_delay = delay;
        self
    }

    pub fn set_token_balance(&self, account: Pubkey, amount: u64) {
        lock(&self.balances).insert(account, amount);
    }

    /// Reject every following submission with `message`
    pub fn fail_sends_with(&self, message: impl Into<String>) {
        *lock(&self.send_error) = Some(message.into());
    }

    pub fn set_confirmation(&self, confirmation: MockConfirmation) {
        *lock(&self.confirmation) = confirmation;
    }

    /// Transactions accepted so far
    pub fn sent_transactions(&self) -> Vec<Transaction> {
        lock(&self.sent).clone()
    }

    pub fn balance_queries(&self) -> usize {
        self.balance_queries.load(Ordering::SeqCst)
    }
}

impl Default for MockLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerClient for MockLedger {
    async fn get_token_account_balance(&self, account: &Pubkey) -> SdkResult<u64> {
        self.balance_queries.fetch_add(1, Ordering::SeqCst);
        lock(&self.balances)
            .get(account)
            .copied()
            .ok_or_else(|| SdkError::AccountNotFound(format!("token account {}", account)))
    }

    async fn get_latest_blockhash(&self) -> SdkResult<Hash> {
        Ok(Hash::new_unique())
    }

    async fn send_transaction(&self, tx: &Transaction) -> SdkResult<Signature> {
        if let Some(message) = lock(&self.send_error).clone() {
            return Err(SdkError::TransactionFailed(message));
        }
        tx.verify()
            .map_err(|e| SdkError::TransactionFailed(format!("signature verification failed: {}", e)))?;

        let signature = tx
            .signatures
            .first()
            .copied()
            .ok_or_else(|| SdkError::TransactionFailed("transaction carries no signature".into()))?;
        lock(&self.sent).push(tx.clone());
        Ok(signature)
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
        _commitment: CommitmentConfig,
        timeout: Duration,
    ) -> SdkResult<()> {
        if !self.confirm_delay.is_zero() {
            tokio::time::sleep(self.confirm_delay).await;
        }

        let confirmation = lock(&self.confirmation).clone();
        match confirmation {
            MockConfirmation::Confirmed => Ok(()),
            MockConfirmation::Failed(message) => Err(SdkError::TransactionFailed(message)),
            MockConfirmation::TimedOut => Err(SdkError::ConfirmationTimeout {
                signature: *signature,
                timeout,
            }),
        }
    }
}
