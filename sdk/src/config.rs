use serde::{Deserialize, Serialize};
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey};
use std::{fs, path::Path, str::FromStr, time::Duration};

use crate::{
    core::{seeds, SdkError, SdkResult, DEVNET_TICKETS_MINT, FEES_RECEIVER, MAX_SEED_LEN, PROGRAM_ID, TICKETS_MINT},
    utils::pubkey_serde,
};

fn default_authority_seed() -> String {
    seeds::AUTHORITY.to_string()
}

fn default_burn_state_seed() -> String {
    seeds::BURN_STATE.to_string()
}

fn default_commitment() -> String {
    "confirmed".to_string()
}

fn default_confirm_timeout_secs() -> u64 {
    60
}

fn default_confirm_poll_interval_ms() -> u64 {
    500
}

fn default_token_metadata_program_id() -> Pubkey {
    mpl_token_metadata::ID
}

/// Deployment configuration for the burn program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnConfig {
    /// RPC endpoint URL
    pub rpc_url: String,

    /// WebSocket URL for subscriptions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ws_url: Option<String>,

    /// Burn program ID
    #[serde(with = "pubkey_serde")]
    pub program_id: Pubkey,

    /// Token Metadata program ID
    #[serde(with = "pubkey_serde", default = "default_token_metadata_program_id")]
    pub token_metadata_program_id: Pubkey,

    /// Mint of the tickets held by the vault
    #[serde(with = "pubkey_serde")]
    pub tickets_mint: Pubkey,

    /// Account receiving burn fees
    #[serde(with = "pubkey_serde")]
    pub fees_receiver: Pubkey,

    /// Seed of the vault authority PDA
    #[serde(default = "default_authority_seed")]
    pub authority_seed: String,

    /// Seed of the per-wallet burn state PDA
    #[serde(default = "default_burn_state_seed")]
    pub burn_state_seed: String,

    /// Commitment the workflow waits for
    #[serde(default = "default_commitment")]
    pub commitment: String,

    /// Confirmation timeout in seconds
    #[serde(default = "default_confirm_timeout_secs")]
    pub confirm_timeout_secs: u64,

    /// Delay between signature status polls in milliseconds
    #[serde(default = "default_confirm_poll_interval_ms")]
    pub confirm_poll_interval_ms: u64,
}

impl BurnConfig {
    pub fn mainnet() -> Self {
        Self {
            rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
            ws_url: Some("wss://api.mainnet-beta.solana.com".to_string()),
            program_id: PROGRAM_ID,
            token_metadata_program_id: mpl_token_metadata::ID,
            tickets_mint: TICKETS_MINT,
            fees_receiver: FEES_RECEIVER,
            authority_seed: default_authority_seed(),
            burn_state_seed: default_burn_state_seed(),
            commitment: default_commitment(),
            confirm_timeout_secs: default_confirm_timeout_secs(),
            confirm_poll_interval_ms: default_confirm_poll_interval_ms(),
        }
    }

    pub fn devnet() -> Self {
        Self {
            rpc_url: "https://api.devnet.solana.com".to_string(),
            ws_url: Some("wss://api.devnet.solana.com".to_string()),
            tickets_mint: DEVNET_TICKETS_MINT,
            ..Self::mainnet()
        }
    }

    pub fn localnet() -> Self {
        Self {
            rpc_url: "http://localhost:8899".to_string(),
            ws_url: Some("ws://localhost:8900".to_string()),
            confirm_timeout_secs: 30,
            ..Self::devnet()
        }
    }

    pub fn with_rpc_url(mut self, url: String) -> Self {
        self.rpc_url = url;
        self
    }

    pub fn with_program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = program_id;
        self
    }

    pub fn with_tickets_mint(mut self, tickets_mint: Pubkey) -> Self {
        self.tickets_mint = tickets_mint;
        self
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> SdkResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let config: BurnConfig = toml::from_str(&content).map_err(|e| {
            SdkError::ParseError(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> SdkResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SdkError::SerializationError(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> SdkResult<()> {
        if !(self.rpc_url.starts_with("http://") || self.rpc_url.starts_with("https://")) {
            return Err(SdkError::InvalidConfig(format!(
                "rpc_url must be an http(s) URL, got {:?}",
                self.rpc_url
            )));
        }

        for (name, seed) in [
            ("authority_seed", &self.authority_seed),
            ("burn_state_seed", &self.burn_state_seed),
        ] {
            if seed.is_empty() || seed.len() > MAX_SEED_LEN {
                return Err(SdkError::InvalidConfig(format!(
                    "{} must be 1..={} bytes, got {}",
                    name,
                    MAX_SEED_LEN,
                    seed.len()
                )));
            }
        }

        CommitmentConfig::from_str(&self.commitment).map_err(|_| {
            SdkError::InvalidConfig(format!("unknown commitment level {:?}", self.commitment))
        })?;

        if self.confirm_timeout_secs == 0 {
            return Err(SdkError::InvalidConfig("confirm_timeout_secs must be greater than 0".into()));
        }

        if self.confirm_poll_interval_ms == 0 || self.confirm_poll_interval() >= self.confirm_timeout() {
            return Err(SdkError::InvalidConfig(format!(
                "confirm_poll_interval_ms must be greater than 0 and shorter than {}s",
                self.confirm_timeout_secs
            )));
        }

        Ok(())
    }

    /// Commitment level as a Solana commitment config
    pub fn commitment_config(&self) -> SdkResult<CommitmentConfig> {
        CommitmentConfig::from_str(&self.commitment)
            .map_err(|_| SdkError::InvalidConfig(format!("unknown commitment level {:?}", self.commitment)))
    }

    pub fn confirm_timeout(&self) -> Duration {
        Duration::from_secs(self.confirm_timeout_secs)
    }

    pub fn confirm_poll_interval(&self) -> Duration {
        Duration::from_millis(self.confirm_poll_interval_ms)
    }
}

impl Default for BurnConfig {
    fn default() -> Self {
        Self::mainnet()
    }
}

/// Create example configuration file
pub fn create_example_config(path: impl AsRef<Path>) -> SdkResult<()> {
    BurnConfig::devnet().save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        assert!(BurnConfig::mainnet().validate().is_ok());
        assert!(BurnConfig::devnet().validate().is_ok());
        assert!(BurnConfig::localnet().validate().is_ok());
        assert_eq!(BurnConfig::devnet().tickets_mint, DEVNET_TICKETS_MINT);
        assert_eq!(BurnConfig::mainnet().tickets_mint, TICKETS_MINT);
    }

    #[test]
    fn test_config_validation() {
        let mut config = BurnConfig::default();
        config.rpc_url = "localhost:8899".into();
        assert!(config.validate().is_err());

        let mut config = BurnConfig::default();
        config.burn_state_seed = String::new();
        assert!(config.validate().is_err());

        let mut config = BurnConfig::default();
        config.authority_seed = "a".repeat(MAX_SEED_LEN + 1);
        assert!(config.validate().is_err());

        let mut config = BurnConfig::default();
        config.commitment = "eventually".into();
        assert!(config.validate().is_err());

        let mut config = BurnConfig::default();
        config.confirm_poll_interval_ms = config.confirm_timeout_secs * 1000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_huge_timeout_does_not_overflow() {
        let mut config = BurnConfig::default();
        config.confirm_timeout_secs = u64::MAX;
        assert!(config.validate().is_ok());

        config.confirm_poll_interval_ms = u64::MAX;
        assert!(config.validate().is_ok());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("burn.toml");
        let mut config = BurnConfig::localnet();
        config.confirm_timeout_secs = 18_446_744_073_709_552;
        config.save(&path).unwrap();

        assert_eq!(BurnConfig::load(&path).unwrap().confirm_timeout_secs, 18_446_744_073_709_552);
    }

    #[test]
    fn test_poll_interval_equal_to_huge_timeout_is_rejected() {
        let mut config = BurnConfig::default();
        config.confirm_timeout_secs = u64::MAX / 1000;
        config.confirm_poll_interval_ms = (u64::MAX / 1000) * 1000;
        assert!(matches!(config.validate(), Err(SdkError::InvalidConfig(_))));
    }

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let toml = format!(
            r#"
rpc_url = "http://localhost:8899"
program_id = "{}"
tickets_mint = "{}"
fees_receiver = "{}"
"#,
            PROGRAM_ID, TICKETS_MINT, FEES_RECEIVER
        );
        let config: BurnConfig = toml::from_str(&toml).unwrap();

        assert_eq!(config.authority_seed, "authority");
        assert_eq!(config.burn_state_seed, "burnstate");
        assert_eq!(config.token_metadata_program_id, mpl_token_metadata::ID);
        assert_eq!(config.commitment_config().unwrap(), CommitmentConfig::confirmed());
        assert_eq!(config.confirm_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("burn.toml");

        let config = BurnConfig::localnet().with_program_id(Pubkey::new_unique());
        config.save(&path).unwrap();

        assert_eq!(BurnConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("burn.toml");
        fs::write(&path, "rpc_url = 42").unwrap();

        assert!(matches!(BurnConfig::load(&path), Err(SdkError::ParseError(_))));
        assert!(matches!(BurnConfig::load(dir.path().join("missing.toml")), Err(SdkError::Io(_))));
    }
}
