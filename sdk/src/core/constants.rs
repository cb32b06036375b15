use solana_sdk::{pubkey, pubkey::Pubkey};

/// Burn program deployed on mainnet
pub const PROGRAM_ID: Pubkey = pubkey!("AADPftBL56zsjQZcCU6XhCKGpq3C2eSLeWcW26rjmjnG");

/// Ticket mint paid out by the vault on mainnet
pub const TICKETS_MINT: Pubkey = pubkey!("Ha8S2T77GegYpcWh3L9REjx4pPYpy6hdu3zW4ERgdsmP");

/// Ticket mint used for devnet testing
pub const DEVNET_TICKETS_MINT: Pubkey = pubkey!("4niSCMSdCw3Rh6dqjjEUeUUL4jhEyLAsKdFewZoZ4Z3Z");

/// Account collecting the burn fees
pub const FEES_RECEIVER: Pubkey = pubkey!("C326k1ZK43BPfLGVzSBc8991L94a3X7XUvX9BSmJZLbb");

/// Get the program ID as a Pubkey
pub fn program_id() -> Pubkey {
    PROGRAM_ID
}

/// Seeds for common PDAs
pub mod seeds {
    pub const AUTHORITY: &str = "authority";
    pub const BURN_STATE: &str = "burnstate";
    pub const METADATA: &[u8] = b"metadata";
}

/// Maximum length of a single PDA seed
pub const MAX_SEED_LEN: usize = 32;

/// Remaining accounts contributed by one NFT-shaped asset
pub const NFT_ACCOUNTS_PER_ASSET: usize = 4;

/// Remaining accounts contributed by one token-shaped asset
pub const TOKEN_ACCOUNTS_PER_ASSET: usize = 2;
