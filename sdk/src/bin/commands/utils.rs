// Utility functions for CLI commands

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::ValueEnum;
use solana_sdk::signature::{read_keypair_file, Keypair};
use ticket_burn_sdk::{BurnClient, BurnConfig, KeypairWallet};

/// Cluster presets selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ClusterArg {
    Mainnet,
    Devnet,
    Localnet,
}

/// Flags shared by every subcommand
pub struct GlobalOptions {
    pub config: Option<String>,
    pub cluster: ClusterArg,
    pub rpc_url: Option<String>,
    pub wallet: String,
}

impl GlobalOptions {
    /// Resolve the deployment configuration from file or preset
    pub fn load_config(&self) -> Result<BurnConfig> {
        let config = match &self.config {
            Some(path) => BurnConfig::load(&expand_path(path)?)
                .with_context(|| format!("Failed to load config from {}", path))?,
            None => match self.cluster {
                ClusterArg::Mainnet => BurnConfig::mainnet(),
                ClusterArg::Devnet => BurnConfig::devnet(),
                ClusterArg::Localnet => BurnConfig::localnet(),
            },
        };

        let config = match &self.rpc_url {
            Some(url) => config.with_rpc_url(url.clone()),
            None => config,
        };
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    /// Build a client signing with the configured keypair
    pub fn connect(&self) -> Result<BurnClient> {
        let config = self.load_config()?;
        let keypair = load_keypair(&self.wallet)?;
        let wallet = Arc::new(KeypairWallet::new(keypair));
        BurnClient::new(config, wallet).context("Failed to create burn client")
    }
}

fn home_dir() -> Result<String> {
    std::env::var("HOME").context("HOME environment variable not set")
}

/// Expand a leading ~ to `home`
fn expand_home(path: &str, home: &str) -> String {
    if path.starts_with('~') {
        path.replacen('~', home, 1)
    } else {
        path.to_string()
    }
}

fn expand_path(path: &str) -> Result<String> {
    if path.starts_with('~') {
        Ok(expand_home(path, &home_dir()?))
    } else {
        Ok(path.to_string())
    }
}

/// Load a keypair from a file path, expanding ~ if needed
pub fn load_keypair(path: &str) -> Result<Keypair> {
    let expanded_path = expand_path(path)?;
    read_keypair_file(&expanded_path)
        .map_err(|e| anyhow::anyhow!("Failed to load keypair from {}: {}", expanded_path, e))
}

/// Print success message
pub fn success(msg: &str) {
    println!("[OK] {}", msg);
}

/// Print info message
pub fn info(msg: &str) {
    println!("[INFO] {}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("~/id.json", "/home/tester"), "/home/tester/id.json");
        assert_eq!(expand_home("/tmp/id.json", "/home/tester"), "/tmp/id.json");
        assert_eq!(expand_path("/tmp/id.json").unwrap(), "/tmp/id.json");
    }

    #[test]
    fn test_rpc_url_override() {
        let options = GlobalOptions {
            config: None,
            cluster: ClusterArg::Devnet,
            rpc_url: Some("http://127.0.0.1:8899".to_string()),
            wallet: String::new(),
        };
        let config = options.load_config().unwrap();
        assert_eq!(config.rpc_url, "http://127.0.0.1:8899");
        assert_eq!(config.tickets_mint, BurnConfig::devnet().tickets_mint);
    }
}
