// CLI tool for the ticket burn program
//
// Burns NFTs and tokens held by a local keypair in exchange for vault tickets,
// and inspects the addresses and vault balance of a deployment.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::utils::ClusterArg;

#[derive(Parser)]
#[command(name = "ticket-burn")]
#[command(about = "Burn NFTs and tokens for vault tickets", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML deployment configuration
    #[arg(long, global = true)]
    config: Option<String>,

    /// Cluster preset used when no configuration file is given
    #[arg(long, value_enum, default_value_t = ClusterArg::Mainnet, global = true)]
    cluster: ClusterArg,

    /// RPC URL overriding the configuration
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// Path to wallet keypair file
    #[arg(long, default_value = "~/.config/solana/id.json", global = true)]
    wallet: String,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Burn assets and collect tickets from the vault
    Burn(commands::burn::BurnCmd),

    /// Print the derived program addresses
    Addresses,

    /// Print the ticket balance of the vault
    VaultBalance,

    /// Write an example configuration file
    InitConfig {
        /// Destination path
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("ticket_burn_sdk={},ticket_burn={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let options = commands::utils::GlobalOptions {
        config: cli.config,
        cluster: cli.cluster,
        rpc_url: cli.rpc_url,
        wallet: cli.wallet,
    };

    match cli.command {
        Commands::Burn(cmd) => commands::burn::execute(cmd, &options).await,
        Commands::Addresses => commands::info::addresses(&options),
        Commands::VaultBalance => commands::info::vault_balance(&options).await,
        Commands::InitConfig { path } => commands::info::init_config(&path),
    }
}
