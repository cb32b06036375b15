/// Ticket Burn SDK
///
/// Client-side integration for the ticket burn program. A connected wallet
/// burns NFTs and fungible tokens and receives tickets from a program-owned
/// vault, all in one transaction:
/// - Asset classification (NFT vs token) and remaining-account lists
/// - Burn and payout instruction builders
/// - Submission and confirmation through an injectable ledger client
pub mod burn;
pub mod client;
pub mod config;
pub mod core;
pub mod instructions;
pub mod prelude;
pub mod protocol;
pub mod testing;
pub mod utils;

pub use client::{BurnClient, BurnService, KeypairWallet, LedgerClient, RpcLedger, WalletProvider};
pub use config::{create_example_config, BurnConfig};
pub use crate::core::{BurnAccountMetas, BurnRequest, ClassifiedAsset, DigitalAsset, SdkError, SdkResult};

// Re-export the program ID
pub const BURN_PROGRAM_ID: solana_sdk::pubkey::Pubkey = crate::core::PROGRAM_ID;
