// Burn command

use std::fs;

use anyhow::{bail, Context, Result};
use clap::Args;
use ticket_burn_sdk::{utils::parse_pubkey, DigitalAsset};
use tracing::debug;

use super::utils::{self, GlobalOptions};

#[derive(Args)]
pub struct BurnCmd {
    /// JSON file holding an array of assets ({"mint", "metadata"?, "edition"?})
    #[arg(long)]
    pub assets: Option<String>,

    /// NFT mint to burn; metadata and edition are derived
    #[arg(long = "nft")]
    pub nfts: Vec<String>,

    /// Fungible token mint to burn
    #[arg(long = "token")]
    pub tokens: Vec<String>,
}

impl BurnCmd {
    /// Collect assets from the file first, then the inline mints
    fn collect_assets(&self) -> Result<Vec<DigitalAsset>> {
        let mut assets: Vec<DigitalAsset> = match &self.assets {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read assets file {}", path))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse assets file {}", path))?
            }
            None => Vec::new(),
        };

        for mint in &self.nfts {
            assets.push(DigitalAsset::nft(parse_pubkey(mint)?));
        }
        for mint in &self.tokens {
            assets.push(DigitalAsset::token(parse_pubkey(mint)?));
        }

        Ok(assets)
    }
}

pub async fn execute(cmd: BurnCmd, options: &GlobalOptions) -> Result<()> {
    let assets = cmd.collect_assets()?;
    if assets.is_empty() {
        bail!("No assets given; pass --assets, --nft or --token");
    }
    debug!(count = assets.len(), "collected assets");

    let client = options.connect()?;
    let nfts = assets.iter().filter(|a| a.is_nft()).count();
    utils::info(&format!(
        "Burning {} NFT(s) and {} token(s)",
        nfts,
        assets.len() - nfts
    ));

    let signature = client.burn(&assets).await.context("Burn failed")?;

    utils::success(&format!("Burn confirmed: {}", signature));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;

    #[test]
    fn test_collect_assets_from_file_and_flags() {
        let nft = DigitalAsset::nft(Pubkey::new_unique());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets.json");
        fs::write(&path, serde_json::to_string(&vec![nft]).unwrap()).unwrap();

        let token = Pubkey::new_unique();
        let cmd = BurnCmd {
            assets: Some(path.to_string_lossy().into_owned()),
            nfts: vec![],
            tokens: vec![token.to_string()],
        };

        let assets = cmd.collect_assets().unwrap();
        assert_eq!(assets, vec![nft, DigitalAsset::token(token)]);
    }

    #[test]
    fn test_collect_assets_rejects_bad_mint() {
        let cmd = BurnCmd {
            assets: None,
            nfts: vec!["not-a-key".to_string()],
            tokens: vec![],
        };
        assert!(cmd.collect_assets().is_err());
    }
}
