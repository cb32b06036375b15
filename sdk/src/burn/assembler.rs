use solana_sdk::instruction::Instruction;
use tracing::debug;

use crate::{
    core::{BurnRequest, SdkError, SdkResult},
    instructions::{BurnInstructionBuilder, TransferTicketsAccounts},
    prelude::*,
};

/// Orders the burn and payout instructions of one transaction
pub struct TransactionAssembler<'a> {
    builder: &'a BurnInstructionBuilder,
    tickets_mint: Pubkey,
}

impl<'a> TransactionAssembler<'a> {
    pub fn new(builder: &'a BurnInstructionBuilder, tickets_mint: Pubkey) -> Self {
        Self {
            builder,
            tickets_mint,
        }
    }

    /// Burn instructions that must run before the payout, NFTs first
    pub fn pre_instructions(&self, request: &BurnRequest) -> SdkResult<Vec<Instruction>> {
        let mut burn_ixs = Vec::with_capacity(2);

        if !request.metas.nfts.is_empty() {
            burn_ixs.push(self.builder.burn_nfts(
                request.wallet,
                request.burn_state,
                &request.metas.nfts,
            )?);
        }

        if !request.metas.tokens.is_empty() {
            burn_ixs.push(self.builder.burn_tokens(
                request.wallet,
                request.burn_state,
                &request.metas.tokens,
            )?);
        }

        Ok(burn_ixs)
    }

    /// The full instruction list: burns, then the single ticket payout
    pub fn assemble(&self, request: &BurnRequest) -> SdkResult<Vec<Instruction>> {
        if request.metas.is_empty() {
            return Err(SdkError::NothingToBurn);
        }

        let mut ixs = self.pre_instructions(request)?;
        ixs.push(self.builder.transfer_tickets(TransferTicketsAccounts {
            payer: request.wallet,
            vault_authority: request.vault_authority,
            tickets_mint: self.tickets_mint,
            vault_ticket_account: request.vault_ticket_account,
            wallet_ticket_account: request.wallet_ticket_account,
            burn_state: request.burn_state,
        })?);

        debug!(
            nfts = request.metas.nft_count(),
            tokens = request.metas.token_count(),
            instructions = ixs.len(),
            "assembled burn transaction"
        );
        Ok(ixs)
    }
}
