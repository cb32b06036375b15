use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use solana_sdk::{
    hash::Hash,
    signature::Keypair,
    signer::Signer,
    transaction::Transaction,
};

use crate::{
    client::WalletProvider,
    core::{SdkError, SdkResult},
    prelude::*,
};

/// Wallet backed by a local keypair that can be connected and disconnected
#[derive(Default)]
pub struct KeypairWallet {
    keypair: RwLock<Option<Arc<Keypair>>>,
}

impl KeypairWallet {
    pub fn new(keypair: Keypair) -> Self {
        Self::from_arc(Arc::new(keypair))
    }

    pub fn from_arc(keypair: Arc<Keypair>) -> Self {
        Self {
            keypair: RwLock::new(Some(keypair)),
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connect(&self, keypair: Arc<Keypair>) {
        *self.keypair.write().unwrap_or_else(PoisonError::into_inner) = Some(keypair);
    }

    pub fn disconnect(&self) {
        *self.keypair.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn current(&self) -> Option<Arc<Keypair>> {
        self.keypair.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[async_trait]
impl WalletProvider for KeypairWallet {
    fn pubkey(&self) -> Option<Pubkey> {
        self.current().map(|keypair| keypair.pubkey())
    }

    async fn sign_transaction(&self, mut tx: Transaction, recent_blockhash: Hash) -> SdkResult<Transaction> {
        let keypair = self.current().ok_or(SdkError::NotConnected)?;
        let signers: &[&Keypair] = &[keypair.as_ref()];
        tx.try_sign(signers, recent_blockhash)?;
        Ok(tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::{instruction::Instruction, system_instruction};

    fn transfer_tx(payer: &Pubkey) -> Transaction {
        let ix: Instruction = system_instruction::transfer(payer, &Pubkey::new_unique(), 1);
        Transaction::new_with_payer(&[ix], Some(payer))
    }

    #[tokio::test]
    async fn test_signs_as_payer() {
        let keypair = Keypair::new();
        let payer = keypair.pubkey();
        let wallet = KeypairWallet::new(keypair);

        let signed = wallet
            .sign_transaction(transfer_tx(&payer), Hash::new_unique())
            .await
            .unwrap();

        assert!(signed.is_signed());
        assert!(signed.verify().is_ok());
    }

    #[tokio::test]
    async fn test_disconnect() {
        let keypair = Arc::new(Keypair::new());
        let payer = keypair.pubkey();
        let wallet = KeypairWallet::from_arc(keypair.clone());
        assert_eq!(wallet.pubkey(), Some(payer));

        wallet.disconnect();
        assert_eq!(wallet.pubkey(), None);
        let result = wallet.sign_transaction(transfer_tx(&payer), Hash::new_unique()).await;
        assert!(matches!(result, Err(SdkError::NotConnected)));

        wallet.connect(keypair);
        assert_eq!(wallet.pubkey(), Some(payer));
    }
}
