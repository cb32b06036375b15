use crate::prelude::*;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    system_program,
};

use crate::{
    core::SdkResult,
    impl_instruction,
    instructions::{InstructionBuilder, ProgramInstructionBuilder},
};

// Instruction discriminators
const BURN_NFTS_DISCRIMINATOR: [u8; 8] = [68, 251, 225, 156, 151, 156, 192, 131];
const BURN_TOKENS_DISCRIMINATOR: [u8; 8] = [76, 15, 51, 254, 229, 215, 121, 66];
const TRANSFER_NFT_FROM_PDA_DISCRIMINATOR: [u8; 8] = [82, 47, 159, 217, 236, 7, 0, 120];

/// Parameters for burning NFTs (no params)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct BurnNftsParams {}

impl_instruction!(BurnNftsParams, BURN_NFTS_DISCRIMINATOR);

/// Parameters for burning fungible tokens (no params)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct BurnTokensParams {}

impl_instruction!(BurnTokensParams, BURN_TOKENS_DISCRIMINATOR);

/// Parameters for paying out tickets from the vault (no params)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct TransferTicketsParams {}

impl_instruction!(TransferTicketsParams, TRANSFER_NFT_FROM_PDA_DISCRIMINATOR);

/// Fixed accounts of the ticket payout
pub struct TransferTicketsAccounts {
    pub payer: Pubkey,
    pub vault_authority: Pubkey,
    pub tickets_mint: Pubkey,
    pub vault_ticket_account: Pubkey,
    pub wallet_ticket_account: Pubkey,
    pub burn_state: Pubkey,
}

/// Burn program instruction builder
pub struct BurnInstructionBuilder {
    program_id: Pubkey,
    token_metadata_program_id: Pubkey,
    fees_receiver: Pubkey,
}

impl BurnInstructionBuilder {
    pub fn new(program_id: Pubkey, token_metadata_program_id: Pubkey, fees_receiver: Pubkey) -> Self {
        Self {
            program_id,
            token_metadata_program_id,
            fees_receiver,
        }
    }

    /// Build burn_nfts; `remaining` holds 4 accounts per NFT
    pub fn burn_nfts(
        &self,
        authority: Pubkey,
        burn_state: Pubkey,
        remaining: &[AccountMeta],
    ) -> SdkResult<Instruction> {
        Ok(ProgramInstructionBuilder::new(self.program_id)
            .add_signer(authority)
            .add_writable(self.fees_receiver)
            .add_writable(burn_state)
            .add_readonly(spl_token::id())
            .add_readonly(self.token_metadata_program_id)
            .add_readonly(system_program::id())
            .add_remaining(remaining)
            .with_data(BurnNftsParams {}.build_data()?)
            .build())
    }

    /// Build burn_tokens; `remaining` holds 2 accounts per token
    pub fn burn_tokens(
        &self,
        authority: Pubkey,
        burn_state: Pubkey,
        remaining: &[AccountMeta],
    ) -> SdkResult<Instruction> {
        Ok(ProgramInstructionBuilder::new(self.program_id)
            .add_signer(authority)
            .add_writable(self.fees_receiver)
            .add_writable(burn_state)
            .add_readonly(spl_token::id())
            .add_readonly(system_program::id())
            .add_remaining(remaining)
            .with_data(BurnTokensParams {}.build_data()?)
            .build())
    }

    /// Build transfer_nft_from_pda, which pays the tickets out of the vault
    pub fn transfer_tickets(&self, accounts: TransferTicketsAccounts) -> SdkResult<Instruction> {
        Ok(ProgramInstructionBuilder::new(self.program_id)
            .add_signer(accounts.payer)
            .add_readonly(accounts.vault_authority)
            .add_readonly(accounts.tickets_mint)
            .add_writable(accounts.vault_ticket_account)
            .add_writable(accounts.wallet_ticket_account)
            .add_readonly(spl_token::id())
            .add_writable(accounts.burn_state)
            .add_readonly(spl_associated_token_account::id())
            .add_readonly(system_program::id())
            .add_readonly(sysvar::rent::id())
            .with_data(TransferTicketsParams {}.build_data()?)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_program::hash::hash;

    fn anchor_discriminator(name: &str) -> [u8; 8] {
        let digest = hash(format!("global:{}", name).as_bytes());
        let mut out = [0u8; 8];
        out.copy_from_slice(&digest.to_bytes()[..8]);
        out
    }

    fn builder() -> (BurnInstructionBuilder, Pubkey) {
        let fees = Pubkey::new_unique();
        (
            BurnInstructionBuilder::new(PROGRAM_ID, mpl_token_metadata::ID, fees),
            fees,
        )
    }

    #[test]
    fn test_discriminators_match_anchor() {
        assert_eq!(BURN_NFTS_DISCRIMINATOR, anchor_discriminator("burn_nfts"));
        assert_eq!(BURN_TOKENS_DISCRIMINATOR, anchor_discriminator("burn_tokens"));
        assert_eq!(
            TRANSFER_NFT_FROM_PDA_DISCRIMINATOR,
            anchor_discriminator("transfer_nft_from_pda")
        );
    }

    #[test]
    fn test_burn_nfts_layout() {
        let (builder, fees) = builder();
        let authority = Pubkey::new_unique();
        let burn_state = Pubkey::new_unique();
        let remaining: Vec<_> = (0..4).map(|_| AccountMeta::new(Pubkey::new_unique(), false)).collect();

        let ix = builder.burn_nfts(authority, burn_state, &remaining).unwrap();

        assert_eq!(ix.program_id, PROGRAM_ID);
        assert_eq!(ix.data, BURN_NFTS_DISCRIMINATOR.to_vec());
        assert_eq!(
            ix.accounts[..6],
            [
                AccountMeta::new(authority, true),
                AccountMeta::new(fees, false),
                AccountMeta::new(burn_state, false),
                AccountMeta::new_readonly(spl_token::id(), false),
                AccountMeta::new_readonly(mpl_token_metadata::ID, false),
                AccountMeta::new_readonly(system_program::id(), false),
            ]
        );
        assert_eq!(ix.accounts[6..], remaining[..]);
    }

    #[test]
    fn test_burn_tokens_skips_metadata_program() {
        let (builder, fees) = builder();
        let authority = Pubkey::new_unique();
        let burn_state = Pubkey::new_unique();
        let remaining: Vec<_> = (0..2).map(|_| AccountMeta::new(Pubkey::new_unique(), false)).collect();

        let ix = builder.burn_tokens(authority, burn_state, &remaining).unwrap();

        assert_eq!(ix.data, BURN_TOKENS_DISCRIMINATOR.to_vec());
        assert_eq!(ix.accounts.len(), 5 + remaining.len());
        assert_eq!(ix.accounts[1], AccountMeta::new(fees, false));
        assert_eq!(ix.accounts[4], AccountMeta::new_readonly(system_program::id(), false));
        assert!(ix.accounts.iter().all(|meta| meta.pubkey != mpl_token_metadata::ID));
        assert_eq!(ix.accounts[5..], remaining[..]);
    }

    #[test]
    fn test_transfer_tickets_layout() {
        let (builder, _) = builder();
        let accounts = TransferTicketsAccounts {
            payer: Pubkey::new_unique(),
            vault_authority: Pubkey::new_unique(),
            tickets_mint: TICKETS_MINT,
            vault_ticket_account: Pubkey::new_unique(),
            wallet_ticket_account: Pubkey::new_unique(),
            burn_state: Pubkey::new_unique(),
        };
        let expected = vec![
            AccountMeta::new(accounts.payer, true),
            AccountMeta::new_readonly(accounts.vault_authority, false),
            AccountMeta::new_readonly(TICKETS_MINT, false),
            AccountMeta::new(accounts.vault_ticket_account, false),
            AccountMeta::new(accounts.wallet_ticket_account, false),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new(accounts.burn_state, false),
            AccountMeta::new_readonly(spl_associated_token_account::id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
        ];

        let ix = builder.transfer_tickets(accounts).unwrap();

        assert_eq!(ix.data, TRANSFER_NFT_FROM_PDA_DISCRIMINATOR.to_vec());
        assert_eq!(ix.accounts, expected);
    }
}
