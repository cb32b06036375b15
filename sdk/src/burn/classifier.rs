use tracing::{debug, warn};

use crate::{
    core::{ClassifiedAsset, DigitalAsset},
    prelude::*,
    protocol::PdaBuilder,
};

/// Resolves digital assets against the connected wallet
pub struct AssetClassifier<'a> {
    pda: &'a PdaBuilder,
}

impl<'a> AssetClassifier<'a> {
    pub fn new(pda: &'a PdaBuilder) -> Self {
        Self { pda }
    }

    /// Classify one asset.
    ///
    /// Returns `None` when no wallet is connected, since the wallet's token
    /// account for the mint cannot be derived.
    pub fn classify(&self, asset: &DigitalAsset, wallet: Option<&Pubkey>) -> Option<ClassifiedAsset> {
        debug!(mint = %asset.mint, "loaded asset");

        let Some(wallet) = wallet else {
            warn!(mint = %asset.mint, "dropping asset: no wallet connected to own its token account");
            return None;
        };
        let token_account = self.pda.token_account(wallet, &asset.mint);

        let classified = match asset.edition {
            Some(edition) => ClassifiedAsset::Nft {
                mint: asset.mint,
                metadata: asset
                    .metadata
                    .unwrap_or_else(|| self.pda.metadata(&asset.mint).0),
                edition,
                token_account,
            },
            None => ClassifiedAsset::Token {
                mint: asset.mint,
                token_account,
            },
        };
        Some(classified)
    }

    /// Classify every asset, keeping input order and dropping the unresolvable ones
    pub fn classify_all(&self, assets: &[DigitalAsset], wallet: Option<&Pubkey>) -> Vec<ClassifiedAsset> {
        assets
            .iter()
            .filter_map(|asset| self.classify(asset, wallet))
            .collect()
    }
}
