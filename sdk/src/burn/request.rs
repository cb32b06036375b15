use crate::{
    core::{BurnAccountMetas, BurnRequest},
    prelude::*,
    protocol::PdaBuilder,
};

impl BurnRequest {
    /// Attach every derived address for `wallet` to the classified metas
    pub fn derive(wallet: Pubkey, metas: BurnAccountMetas, pda: &PdaBuilder) -> Self {
        let (vault_authority, _) = pda.vault_authority();
        let (burn_state, _) = pda.burn_state(&wallet);

        Self {
            wallet,
            metas,
            vault_authority,
            vault_ticket_account: pda.vault_ticket_account(),
            wallet_ticket_account: pda.wallet_ticket_account(&wallet),
            burn_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_addresses() {
        let pda = PdaBuilder::new(program_id());
        let wallet = Pubkey::new_unique();

        let request = BurnRequest::derive(wallet, BurnAccountMetas::default(), &pda);

        assert_eq!(request.wallet, wallet);
        assert_eq!(request.vault_authority, pda.vault_authority().0);
        assert_eq!(request.burn_state, pda.burn_state(&wallet).0);
        assert_eq!(request.vault_ticket_account, pda.vault_ticket_account());
        assert_eq!(request.wallet_ticket_account, pda.wallet_ticket_account(&wallet));
        assert_ne!(request.vault_ticket_account, request.wallet_ticket_account);
    }
}
