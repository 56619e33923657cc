// Copyright (c) 2026 Soldeck. All rights reserved.

mod cli_messages;
mod config;
mod consts;
mod controller;
mod environment;
mod events;
mod keys;
mod logging;
mod model;
mod rpc;
mod session;
mod ui;
mod verify;
mod wallet;
mod workers;

use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::session::{
    SessionData, run_airdrop, run_balance, run_history, run_send, run_tokens, run_tui_mode,
    run_verify, setup_session,
};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

/// Wallet and endpoint selection shared by every connected command.
#[derive(clap::Args)]
struct ConnectArgs {
    /// Path to a keypair file used to sign (solana-keygen format)
    #[arg(long, value_name = "FILE")]
    keypair: Option<String>,

    /// Base58 wallet address to watch without signing
    #[arg(long, value_name = "PUBKEY", conflicts_with = "keypair")]
    address: Option<String>,

    /// Custom RPC endpoint URL, overriding the environment
    #[arg(long, value_name = "URL")]
    url: Option<String>,
}

impl ConnectArgs {
    /// Resolve the environment (an explicit URL wins) and set up the session.
    fn into_session(self, environment: Environment) -> Result<SessionData, Box<dyn Error>> {
        let environment = match self.url {
            Some(rpc_url) => Environment::Custom { rpc_url },
            None => environment,
        };
        setup_session(environment, self.keypair, self.address)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive wallet dashboard
    Dashboard {
        #[command(flatten)]
        connect: ConnectArgs,
    },
    /// Print the wallet's SOL balance
    Balance {
        #[command(flatten)]
        connect: ConnectArgs,
    },
    /// Request a SOL airdrop and wait for confirmation
    Airdrop {
        /// Amount in SOL
        #[arg(long, default_value_t = 1.0)]
        amount: f64,

        #[command(flatten)]
        connect: ConnectArgs,
    },
    /// Sign the ownership message and verify the signature locally
    Verify {
        #[command(flatten)]
        connect: ConnectArgs,
    },
    /// Send SOL to a recipient and wait for confirmation
    Send {
        /// Recipient base58 address
        #[arg(value_name = "RECIPIENT")]
        recipient: String,

        /// Amount in SOL
        #[arg(value_name = "AMOUNT")]
        amount: f64,

        #[command(flatten)]
        connect: ConnectArgs,
    },
    /// List token-2022 holdings with their metadata
    Tokens {
        #[command(flatten)]
        connect: ConnectArgs,
    },
    /// Show recent transactions for the wallet
    History {
        /// Maximum number of records to show (up to 50)
        #[arg(long)]
        limit: Option<usize>,

        #[command(flatten)]
        connect: ConnectArgs,
    },
    /// Clear the remembered wallet configuration and logout.
    Logout,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let soldeck_environment_str = std::env::var("SOLDECK_ENVIRONMENT").unwrap_or_default();
    let environment = soldeck_environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let args = Args::parse();
    match args.command {
        Command::Dashboard { connect } => run_tui_mode(connect.into_session(environment)?).await,
        Command::Balance { connect } => run_balance(connect.into_session(environment)?).await,
        Command::Airdrop { amount, connect } => {
            run_airdrop(connect.into_session(environment)?, amount).await
        }
        Command::Verify { connect } => run_verify(connect.into_session(environment)?).await,
        Command::Send {
            recipient,
            amount,
            connect,
        } => run_send(connect.into_session(environment)?, recipient, amount).await,
        Command::Tokens { connect } => run_tokens(connect.into_session(environment)?).await,
        Command::History { limit, connect } => {
            run_history(connect.into_session(environment)?, limit).await
        }
        Command::Logout => {
            crate::print_cmd_info!("Logging out.", "Clearing remembered wallet configuration");
            let config_path = get_config_path()?;
            Config::clear(&config_path)?;
            crate::print_cmd_success!(
                "Logged out.",
                "Run any command with --keypair or --address to reconnect"
            );
            Ok(())
        }
    }
}
