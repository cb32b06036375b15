// Read-only commands: addresses, vault balance and config scaffolding

use anyhow::{Context, Result};
use solana_sdk::signer::Signer;
use ticket_burn_sdk::{create_example_config, protocol::PdaBuilder};

use super::utils::{self, GlobalOptions};

pub fn addresses(options: &GlobalOptions) -> Result<()> {
    let config = options.load_config()?;
    let pda = PdaBuilder::from_config(&config);
    let (vault_authority, bump) = pda.vault_authority();

    println!("Program:               {}", config.program_id);
    println!("Tickets mint:          {}", config.tickets_mint);
    println!("Fees receiver:         {}", config.fees_receiver);
    println!("Vault authority:       {} (bump {})", vault_authority, bump);
    println!("Vault ticket account:  {}", pda.vault_ticket_account());

    // Wallet-scoped addresses are optional
    match utils::load_keypair(&options.wallet) {
        Ok(keypair) => {
            let wallet = keypair.pubkey();
            println!("Wallet:                {}", wallet);
            println!("Burn state:            {}", pda.burn_state(&wallet).0);
            println!("Wallet ticket account: {}", pda.wallet_ticket_account(&wallet));
        }
        Err(e) => tracing::debug!(error = %e, "no wallet loaded"),
    }

    Ok(())
}

pub async fn vault_balance(options: &GlobalOptions) -> Result<()> {
    let client = options.connect()?;
    let balance = client
        .vault_balance()
        .await
        .context("Failed to fetch vault balance")?;

    utils::info(&format!(
        "Vault {} holds {} ticket(s)",
        client.vault_ticket_account(),
        balance
    ));
    Ok(())
}

pub fn init_config(path: &str) -> Result<()> {
    create_example_config(path).with_context(|| format!("Failed to write config to {}", path))?;
    utils::success(&format!("Example configuration written to {}", path));
    Ok(())
}
