//! Serde helpers that keep public keys as base58 strings in JSON and TOML

use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::core::{SdkError, SdkResult};

/// Parse a base58 public key
pub fn parse_pubkey(s: &str) -> SdkResult<Pubkey> {
    Pubkey::from_str(s.trim()).map_err(|e| SdkError::ParseError(format!("invalid public key {s:?}: {e}")))
}

pub mod pubkey_serde {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&pubkey.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Pubkey, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub mod option_pubkey_serde {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(pubkey: &Option<Pubkey>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match pubkey {
            Some(key) => serializer.serialize_some(&key.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Pubkey>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) if !s.is_empty() => Pubkey::from_str(&s).map(Some).map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DigitalAsset;

    #[test]
    fn test_asset_json_uses_base58() {
        let mint = Pubkey::new_unique();
        let edition = Pubkey::new_unique();
        let asset = DigitalAsset::token(mint).with_edition(edition);

        let json = serde_json::to_value(asset).unwrap();
        assert_eq!(json["mint"], mint.to_string());
        assert_eq!(json["edition"], edition.to_string());
        assert!(json["metadata"].is_null());
    }

    #[test]
    fn test_asset_json_missing_optionals() {
        let mint = Pubkey::new_unique();
        let json = format!(r#"{{"mint": "{mint}"}}"#);
        let asset: DigitalAsset = serde_json::from_str(&json).unwrap();

        assert_eq!(asset, DigitalAsset::token(mint));
        assert!(!asset.is_nft());
    }

    #[test]
    fn test_asset_json_empty_edition_is_token() {
        let mint = Pubkey::new_unique();
        let json = format!(r#"{{"mint": "{mint}", "edition": ""}}"#);
        let asset: DigitalAsset = serde_json::from_str(&json).unwrap();

        assert!(!asset.is_nft());
    }

    #[test]
    fn test_parse_pubkey_rejects_garbage() {
        assert!(parse_pubkey("not-a-key").is_err());
        assert!(parse_pubkey(&format!(" {} ", Pubkey::new_unique())).is_ok());
    }
}
