//! Prelude module for common imports
//!
//! We only use anchor for serialization traits, everything else comes from solana-sdk.

pub use anchor_lang::{AnchorDeserialize, AnchorSerialize};

pub use solana_sdk::{pubkey::Pubkey, sysvar};

pub use crate::core::constants::*;
