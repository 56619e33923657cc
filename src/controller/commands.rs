//! Intents, commands, and completions exchanged between the controller
//! and the action workers.

use crate::events::Action;
use crate::model::{TokenHolding, TransactionRecord};
use crate::rpc::error::RpcError;
use crate::wallet::WalletError;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use thiserror::Error;

/// A discrete user intent, as entered in the UI or on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    RefreshBalance,
    RequestAirdrop { sol: f64 },
    SignVerification,
    SendTransfer { recipient: String, sol: f64 },
    ListHoldings,
    FetchHistory,
}

impl Intent {
    /// The dashboard action this intent belongs to, for event labeling.
    pub fn action(&self) -> Action {
        match self {
            Intent::RefreshBalance => Action::Balance,
            Intent::RequestAirdrop { .. } => Action::Airdrop,
            Intent::SignVerification => Action::Verify,
            Intent::SendTransfer { .. } => Action::Transfer,
            Intent::ListHoldings => Action::Holdings,
            Intent::FetchHistory => Action::History,
        }
    }
}

/// A validated call sequence, ready to hand to a worker. Refresh-kind
/// commands carry the generation their completion must present to be
/// applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    RefreshBalance {
        address: Pubkey,
        generation: u64,
    },
    RequestAirdrop {
        address: Pubkey,
        lamports: u64,
    },
    SignVerification,
    SendTransfer {
        recipient: Pubkey,
        lamports: u64,
    },
    ListHoldings {
        owner: Pubkey,
        generation: u64,
    },
    FetchHistory {
        address: Pubkey,
        generation: u64,
        limit: usize,
    },
}

impl Command {
    /// The dashboard action this command belongs to, for event labeling.
    pub fn action(&self) -> Action {
        match self {
            Command::RefreshBalance { .. } => Action::Balance,
            Command::RequestAirdrop { .. } => Action::Airdrop,
            Command::SignVerification => Action::Verify,
            Command::SendTransfer { .. } => Action::Transfer,
            Command::ListHoldings { .. } => Action::Holdings,
            Command::FetchHistory { .. } => Action::History,
        }
    }
}

/// Result of an executed command, fed back into the controller.
#[derive(Debug, Clone)]
pub enum Completion {
    Balance {
        generation: u64,
        result: Result<u64, ActionError>,
    },
    Airdrop {
        result: Result<Signature, ActionError>,
    },
    Verification {
        result: Result<Signature, ActionError>,
    },
    Transfer {
        result: Result<Signature, ActionError>,
    },
    Holdings {
        generation: u64,
        result: Result<Vec<TokenHolding>, ActionError>,
    },
    History {
        generation: u64,
        result: Result<Vec<TransactionRecord>, ActionError>,
    },
}

/// Why an action was rejected locally or failed remotely.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("No wallet is connected")]
    NotConnected,

    #[error("The connected wallet cannot sign this request")]
    CapabilityMissing,

    #[error("Signature did not verify against the wallet address")]
    InvalidSignature,

    #[error("Recipient is not a valid address")]
    InvalidRecipient,

    #[error("Amount must stay below the available balance")]
    InsufficientBalance,

    #[error("Amount must be a positive number")]
    InvalidAmount,

    /// Any external failure, rendered for display. Causes are logged at
    /// the worker boundary; the user sees one generic notification.
    #[error("{0}")]
    Chain(String),
}

impl From<RpcError> for ActionError {
    fn from(error: RpcError) -> Self {
        ActionError::Chain(error.to_string())
    }
}

impl From<WalletError> for ActionError {
    fn from(error: WalletError) -> Self {
        ActionError::Chain(error.to_string())
    }
}
