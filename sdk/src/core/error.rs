//! SDK error types

use std::time::Duration;

use solana_sdk::{pubkey::Pubkey, signature::Signature, signer::SignerError};
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// No wallet connected
    #[error("No wallet connected!")]
    NotConnected,

    /// Vault holds no tickets to pay out
    #[error("Insufficient tickets in vault account {vault} (balance {balance}), the vault needs to be topped up")]
    InsufficientVaultBalance { vault: Pubkey, balance: u64 },

    /// Classification left nothing to burn
    #[error("Zero NFTs or tokens to be burnt")]
    NothingToBurn,

    /// A burn for this wallet has not finished yet
    #[error("A burn is already in flight for wallet {0}")]
    BurnInProgress(Pubkey),

    /// Submission or confirmation failed
    #[error("Transaction submission failed: {0}")]
    SubmissionFailed(#[source] Box<SdkError>),

    /// RPC client error
    #[error("Solana client error: {0}")]
    SolanaClientError(#[from] solana_client::client_error::ClientError),

    /// Wallet signing error
    #[error("Signing error: {0}")]
    SigningError(#[from] SignerError),

    /// Account not found
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Transaction rejected or failed on-chain
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Confirmation did not arrive in time
    #[error("Transaction {signature} not confirmed within {timeout:?}")]
    ConfirmationTimeout {
        signature: Signature,
        timeout: Duration,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Parse error
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SdkError {
    /// Wrap a ledger failure raised while submitting or confirming
    pub fn submission(err: SdkError) -> Self {
        match err {
            already @ SdkError::SubmissionFailed(_) => already,
            other => SdkError::SubmissionFailed(Box::new(other)),
        }
    }
}

pub type SdkResult<T> = Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_wraps_once() {
        let err = SdkError::submission(SdkError::TransactionFailed("custom program error: 0x1".into()));
        let err = SdkError::submission(err);

        match err {
            SdkError::SubmissionFailed(inner) => {
                assert!(matches!(*inner, SdkError::TransactionFailed(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_messages_are_human_readable() {
        assert_eq!(SdkError::NotConnected.to_string(), "No wallet connected!");
        let wrapped = SdkError::submission(SdkError::TransactionFailed("blockhash not found".into()));
        assert_eq!(
            wrapped.to_string(),
            "Transaction submission failed: Transaction failed: blockhash not found"
        );
    }
}
