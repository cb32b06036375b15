use std::collections::HashMap;
use std::sync::RwLock;

use spl_associated_token_account::get_associated_token_address;

use crate::config::BurnConfig;
use crate::prelude::*;

/// PDA cache to avoid recomputing addresses
pub struct PdaCache {
    cache: RwLock<HashMap<String, (Pubkey, u8)>>,
}

impl PdaCache {
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn get_or_compute<F>(&self, key: &str, compute: F) -> (Pubkey, u8)
    where
        F: FnOnce() -> (Pubkey, u8),
    {
        if let Some(cached) = self.cache.read().ok().and_then(|cache| cache.get(key).copied()) {
            return cached;
        }

        let result = compute();
        // A poisoned cache only loses memoization, the derivation is pure.
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(key.to_string(), result);
        }
        result
    }

    pub fn len(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PdaCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives every address the burn program works with
pub struct PdaBuilder {
    cache: PdaCache,
    pub program_id: Pubkey,
    pub token_metadata_program_id: Pubkey,
    pub tickets_mint: Pubkey,
    authority_seed: String,
    burn_state_seed: String,
}

impl PdaBuilder {
    pub fn new(program_id: Pubkey) -> Self {
        Self::from_config(&BurnConfig::default().with_program_id(program_id))
    }

    pub fn from_config(config: &BurnConfig) -> Self {
        Self {
            cache: PdaCache::new(),
            program_id: config.program_id,
            token_metadata_program_id: config.token_metadata_program_id,
            tickets_mint: config.tickets_mint,
            authority_seed: config.authority_seed.clone(),
            burn_state_seed: config.burn_state_seed.clone(),
        }
    }

    /// Vault authority owning the ticket vault
    pub fn vault_authority(&self) -> (Pubkey, u8) {
        self.cache.get_or_compute("vault_authority", || {
            Pubkey::find_program_address(&[self.authority_seed.as_bytes()], &self.program_id)
        })
    }

    /// Per-wallet burn state tracked by the program
    pub fn burn_state(&self, wallet: &Pubkey) -> (Pubkey, u8) {
        let key = format!("burn_state:{}", wallet);
        self.cache.get_or_compute(&key, || {
            Pubkey::find_program_address(
                &[self.burn_state_seed.as_bytes(), wallet.as_ref()],
                &self.program_id,
            )
        })
    }

    /// Token Metadata account of `mint`
    pub fn metadata(&self, mint: &Pubkey) -> (Pubkey, u8) {
        let key = format!("metadata:{}", mint);
        self.cache.get_or_compute(&key, || {
            Pubkey::find_program_address(
                &[
                    seeds::METADATA,
                    self.token_metadata_program_id.as_ref(),
                    mint.as_ref(),
                ],
                &self.token_metadata_program_id,
            )
        })
    }

    /// Ticket account of the vault authority
    pub fn vault_ticket_account(&self) -> Pubkey {
        let (vault_authority, _) = self.vault_authority();
        get_associated_token_address(&vault_authority, &self.tickets_mint)
    }

    /// Ticket account of `wallet`
    pub fn wallet_ticket_account(&self, wallet: &Pubkey) -> Pubkey {
        get_associated_token_address(wallet, &self.tickets_mint)
    }

    /// Token account holding `mint` for `owner`
    pub fn token_account(&self, owner: &Pubkey, mint: &Pubkey) -> Pubkey {
        get_associated_token_address(owner, mint)
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

/// Convenience functions for one-off PDA derivations
pub fn find_vault_authority_address() -> (Pubkey, u8) {
    PdaBuilder::new(program_id()).vault_authority()
}

pub fn find_burn_state_address(wallet: &Pubkey) -> (Pubkey, u8) {
    PdaBuilder::new(program_id()).burn_state(wallet)
}
