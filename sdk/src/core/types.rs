use crate::prelude::*;
use mpl_token_metadata::accounts::{MasterEdition, Metadata};
use serde::{Deserialize, Serialize};
use solana_sdk::instruction::AccountMeta;

use crate::utils::{option_pubkey_serde, pubkey_serde};

/// One asset owned by the wallet, as reported by the asset source
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalAsset {
    #[serde(with = "pubkey_serde")]
    pub mint: Pubkey,
    #[serde(default, with = "option_pubkey_serde")]
    pub metadata: Option<Pubkey>,
    #[serde(default, with = "option_pubkey_serde")]
    pub edition: Option<Pubkey>,
}

impl DigitalAsset {
    /// Fungible token without metadata or edition
    pub fn token(mint: Pubkey) -> Self {
        Self {
            mint,
            metadata: None,
            edition: None,
        }
    }

    /// NFT with the canonical Token Metadata addresses for `mint`
    pub fn nft(mint: Pubkey) -> Self {
        Self {
            mint,
            metadata: Some(Metadata::find_pda(&mint).0),
            edition: Some(MasterEdition::find_pda(&mint).0),
        }
    }

    pub fn with_metadata(mut self, metadata: Pubkey) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_edition(mut self, edition: Pubkey) -> Self {
        self.edition = Some(edition);
        self
    }

    /// An edition record is the only thing that makes an asset an NFT
    pub fn is_nft(&self) -> bool {
        self.edition.is_some()
    }
}

/// An asset resolved against the connected wallet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassifiedAsset {
    Nft {
        mint: Pubkey,
        metadata: Pubkey,
        edition: Pubkey,
        token_account: Pubkey,
    },
    Token {
        mint: Pubkey,
        token_account: Pubkey,
    },
}

impl ClassifiedAsset {
    pub fn mint(&self) -> Pubkey {
        match self {
            ClassifiedAsset::Nft { mint, .. } | ClassifiedAsset::Token { mint, .. } => *mint,
        }
    }

    /// Remaining accounts the burn instruction expects for this asset.
    ///
    /// NFTs: mint, metadata, edition, token account.
    /// Tokens: mint, token account.
    /// All writable, none signers.
    pub fn account_metas(&self) -> Vec<AccountMeta> {
        match *self {
            ClassifiedAsset::Nft {
                mint,
                metadata,
                edition,
                token_account,
            } => vec![
                AccountMeta::new(mint, false),
                AccountMeta::new(metadata, false),
                AccountMeta::new(edition, false),
                AccountMeta::new(token_account, false),
            ],
            ClassifiedAsset::Token {
                mint,
                token_account,
            } => vec![
                AccountMeta::new(mint, false),
                AccountMeta::new(token_account, false),
            ],
        }
    }
}

/// Remaining-account lists for the two burn instructions
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BurnAccountMetas {
    pub nfts: Vec<AccountMeta>,
    pub tokens: Vec<AccountMeta>,
}

impl BurnAccountMetas {
    pub fn is_empty(&self) -> bool {
        self.nfts.is_empty() && self.tokens.is_empty()
    }

    pub fn nft_count(&self) -> usize {
        self.nfts.len() / NFT_ACCOUNTS_PER_ASSET
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len() / TOKEN_ACCOUNTS_PER_ASSET
    }
}

/// Everything needed to build the burn transaction for one wallet
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BurnRequest {
    pub wallet: Pubkey,
    pub metas: BurnAccountMetas,
    pub vault_authority: Pubkey,
    pub vault_ticket_account: Pubkey,
    pub wallet_ticket_account: Pubkey,
    pub burn_state: Pubkey,
}
