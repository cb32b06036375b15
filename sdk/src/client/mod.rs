pub mod base;
pub mod burn;
pub mod traits;
pub mod wallet;

use std::sync::Arc;

use solana_sdk::signature::Signature;
use tracing::info;

use crate::{
    config::BurnConfig,
    core::{DigitalAsset, SdkResult},
    prelude::*,
    protocol::PdaBuilder,
};

pub use base::RpcLedger;
pub use burn::BurnService;
pub use traits::{LedgerClient, WalletProvider};
pub use wallet::KeypairWallet;

/// Main client for the burn program
pub struct BurnClient {
    /// Ledger the workflow talks to
    pub ledger: Arc<dyn LedgerClient>,
    /// Burn workflow service
    pub burn: BurnService,
    /// PDA builder
    pub pda: Arc<PdaBuilder>,
    /// Deployment configuration
    pub config: BurnConfig,
}

impl BurnClient {
    /// Create a client talking to the RPC endpoint of `config`
    pub fn new(config: BurnConfig, wallet: Arc<dyn WalletProvider>) -> SdkResult<Self> {
        config.validate()?;
        let ledger = Arc::new(RpcLedger::from_config(&config)?);
        Self::with_ledger(config, wallet, ledger)
    }

    /// Create a client over an injected ledger
    pub fn with_ledger(
        config: BurnConfig,
        wallet: Arc<dyn WalletProvider>,
        ledger: Arc<dyn LedgerClient>,
    ) -> SdkResult<Self> {
        let pda = Arc::new(PdaBuilder::from_config(&config));
        let burn = BurnService::new(&config, pda.clone(), wallet, ledger.clone())?;
        info!(vault_authority = %pda.vault_authority().0, program_id = %config.program_id, "burn client ready");

        Ok(Self {
            ledger,
            burn,
            pda,
            config,
        })
    }

    /// Get the program ID
    pub fn program_id(&self) -> Pubkey {
        self.config.program_id
    }

    /// Vault authority PDA
    pub fn vault_authority(&self) -> Pubkey {
        self.pda.vault_authority().0
    }

    /// Ticket account of the vault
    pub fn vault_ticket_account(&self) -> Pubkey {
        self.pda.vault_ticket_account()
    }

    /// Burn state PDA of `wallet`
    pub fn burn_state(&self, wallet: &Pubkey) -> Pubkey {
        self.pda.burn_state(wallet).0
    }

    pub async fn vault_balance(&self) -> SdkResult<u64> {
        self.burn.vault_balance().await
    }

    pub async fn burn(&self, assets: &[DigitalAsset]) -> SdkResult<Signature> {
        self.burn.burn(assets).await
    }
}
