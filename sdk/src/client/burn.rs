use std::{
    collections::HashSet,
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    signature::Signature,
    transaction::Transaction,
};
use tracing::{debug, info};

use crate::{
    burn::{build_account_metas, AssetClassifier, TransactionAssembler},
    client::{LedgerClient, WalletProvider},
    config::BurnConfig,
    core::{BurnAccountMetas, BurnRequest, DigitalAsset, SdkError, SdkResult},
    instructions::BurnInstructionBuilder,
    prelude::*,
    protocol::PdaBuilder,
};

/// Burns assets for vault tickets on behalf of the connected wallet
pub struct BurnService {
    wallet: Arc<dyn WalletProvider>,
    ledger: Arc<dyn LedgerClient>,
    pda: Arc<PdaBuilder>,
    builder: BurnInstructionBuilder,
    commitment: CommitmentConfig,
    confirm_timeout: Duration,
    in_flight: Mutex<HashSet<Pubkey>>,
}

/// Holds a wallet's in-flight slot until dropped
struct InFlightGuard<'a> {
    in_flight: &'a Mutex<HashSet<Pubkey>>,
    wallet: Pubkey,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.wallet);
    }
}

impl BurnService {
    pub fn new(
        config: &BurnConfig,
        pda: Arc<PdaBuilder>,
        wallet: Arc<dyn WalletProvider>,
        ledger: Arc<dyn LedgerClient>,
    ) -> SdkResult<Self> {
        Ok(Self {
            wallet,
            ledger,
            pda,
            builder: BurnInstructionBuilder::new(
                config.program_id,
                config.token_metadata_program_id,
                config.fees_receiver,
            ),
            commitment: config.commitment_config()?,
            confirm_timeout: config.confirm_timeout(),
            in_flight: Mutex::new(HashSet::new()),
        })
    }

    /// Classify `assets` against the current wallet and build the remaining-account lists
    pub fn classify(&self, assets: &[DigitalAsset]) -> BurnAccountMetas {
        let wallet = self.wallet.pubkey();
        let classified = AssetClassifier::new(&self.pda).classify_all(assets, wallet.as_ref());
        build_account_metas(&classified)
    }

    /// Ticket balance of the vault
    pub async fn vault_balance(&self) -> SdkResult<u64> {
        self.ledger
            .get_token_account_balance(&self.pda.vault_ticket_account())
            .await
    }

    /// Run the preconditions and derive every address, without submitting.
    ///
    /// Checks, first failure wins: wallet connected, vault holds tickets,
    /// something left to burn.
    pub async fn prepare(&self, assets: &[DigitalAsset]) -> SdkResult<BurnRequest> {
        let wallet = self.wallet.pubkey().ok_or(SdkError::NotConnected)?;
        self.prepare_for(wallet, assets).await
    }

    async fn prepare_for(&self, wallet: Pubkey, assets: &[DigitalAsset]) -> SdkResult<BurnRequest> {
        let classified = AssetClassifier::new(&self.pda).classify_all(assets, Some(&wallet));
        let metas = build_account_metas(&classified);

        let vault = self.pda.vault_ticket_account();
        let balance = self.vault_balance().await?;
        if balance == 0 {
            return Err(SdkError::InsufficientVaultBalance { vault, balance });
        }

        if metas.is_empty() {
            return Err(SdkError::NothingToBurn);
        }

        Ok(BurnRequest::derive(wallet, metas, &self.pda))
    }

    /// Burn instructions followed by the ticket payout
    pub fn build_instructions(&self, request: &BurnRequest) -> SdkResult<Vec<Instruction>> {
        TransactionAssembler::new(&self.builder, self.pda.tickets_mint).assemble(request)
    }

    /// Burn `assets` and collect the tickets, returning the confirmed signature
    pub async fn burn(&self, assets: &[DigitalAsset]) -> SdkResult<Signature> {
        let wallet = self.wallet.pubkey().ok_or(SdkError::NotConnected)?;
        let _guard = self.begin(wallet)?;

        let request = self.prepare_for(wallet, assets).await?;
        let ixs = self.build_instructions(&request)?;

        let signature = self
            .submit(&request.wallet, &ixs)
            .await
            .map_err(SdkError::submission)?;
        info!(%signature, wallet = %request.wallet, "burn transaction submitted");

        self.ledger
            .confirm_transaction(&signature, self.commitment, self.confirm_timeout)
            .await
            .map_err(SdkError::submission)?;
        info!(%signature, "burn transaction confirmed");

        Ok(signature)
    }

    async fn submit(&self, payer: &Pubkey, ixs: &[Instruction]) -> SdkResult<Signature> {
        let recent_blockhash = self.ledger.get_latest_blockhash().await?;
        let tx = Transaction::new_with_payer(ixs, Some(payer));
        let tx = self.wallet.sign_transaction(tx, recent_blockhash).await?;
        debug!(instructions = ixs.len(), "sending burn transaction");
        self.ledger.send_transaction(&tx).await
    }

    fn begin(&self, wallet: Pubkey) -> SdkResult<InFlightGuard<'_>> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if !in_flight.insert(wallet) {
            return Err(SdkError::BurnInProgress(wallet));
        }
        Ok(InFlightGuard {
            in_flight: &self.in_flight,
            wallet,
        })
    }
}
