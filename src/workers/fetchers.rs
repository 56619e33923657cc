//! Read-only chain queries that feed the dashboard caches.
//!
//! Each fetcher reports progress on the event channel and finishes by
//! sending a generation-tagged completion. Stale generations are the
//! controller's problem, not ours.

use super::core::EventSender;
use crate::controller::{ActionError, Completion};
use crate::events::{Action, EventType};
use crate::logging::LogLevel;
use crate::model::{Balance, TokenHolding, TransactionRecord};
use crate::rpc::ChainRpc;
use crate::rpc::error::{RpcError, classify_rpc_error};
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Fetch the native balance of `address` in lamports.
pub async fn refresh_balance(
    rpc: Arc<dyn ChainRpc>,
    address: Pubkey,
    generation: u64,
    events: EventSender,
    completions: mpsc::Sender<Completion>,
) {
    events
        .send_action_event(
            Action::Balance,
            "Refreshing balance...".to_string(),
            EventType::Refresh,
            LogLevel::Debug,
        )
        .await;

    let result = rpc.balance(&address).await;
    match &result {
        Ok(lamports) => {
            events
                .send_action_event(
                    Action::Balance,
                    format!("Balance: {}", Balance::from_lamports(*lamports)),
                    EventType::Success,
                    LogLevel::Info,
                )
                .await;
        }
        Err(e) => {
            events
                .send_action_event(
                    Action::Balance,
                    format!("Balance refresh failed: {}", e),
                    EventType::Error,
                    classify_rpc_error(e),
                )
                .await;
        }
    }

    let _ = completions
        .send(Completion::Balance {
            generation,
            result: result.map_err(ActionError::from),
        })
        .await;
}

/// Collect token-2022 holdings for `owner`.
///
/// Accounts whose mint metadata cannot be resolved are dropped from the
/// listing rather than failing the whole refresh.
pub(crate) async fn collect_holdings(
    rpc: &dyn ChainRpc,
    owner: &Pubkey,
) -> Result<Vec<TokenHolding>, RpcError> {
    let accounts = rpc.token_accounts(owner).await?;
    let mut holdings = Vec::with_capacity(accounts.len());
    for account in accounts {
        match rpc.token_metadata(&account.mint).await {
            Ok(metadata) => holdings.push(TokenHolding::new(account, metadata)),
            Err(e) => {
                log::debug!("skipping token account {}: {}", account.account, e);
            }
        }
    }
    Ok(holdings)
}

/// Enumerate token-2022 holdings owned by `owner`.
pub async fn list_holdings(
    rpc: Arc<dyn ChainRpc>,
    owner: Pubkey,
    generation: u64,
    events: EventSender,
    completions: mpsc::Sender<Completion>,
) {
    events
        .send_action_event(
            Action::Holdings,
            "Loading token holdings...".to_string(),
            EventType::Refresh,
            LogLevel::Debug,
        )
        .await;

    let result = collect_holdings(rpc.as_ref(), &owner).await;
    match &result {
        Ok(holdings) => {
            let msg = match holdings.len() {
                0 => "No token-2022 holdings found".to_string(),
                1 => "Found 1 token holding".to_string(),
                n => format!("Found {} token holdings", n),
            };
            events
                .send_action_event(Action::Holdings, msg, EventType::Success, LogLevel::Info)
                .await;
        }
        Err(e) => {
            events
                .send_action_event(
                    Action::Holdings,
                    format!("Holdings refresh failed: {}", e),
                    EventType::Error,
                    classify_rpc_error(e),
                )
                .await;
        }
    }

    let _ = completions
        .send(Completion::Holdings {
            generation,
            result: result.map_err(ActionError::from),
        })
        .await;
}

/// Fetch up to `limit` recent transactions involving `address`.
pub async fn fetch_history(
    rpc: Arc<dyn ChainRpc>,
    address: Pubkey,
    generation: u64,
    limit: usize,
    events: EventSender,
    completions: mpsc::Sender<Completion>,
) {
    events
        .send_action_event(
            Action::History,
            "Fetching transaction history...".to_string(),
            EventType::Refresh,
            LogLevel::Debug,
        )
        .await;

    let result = rpc.signatures_for(&address, limit).await.map(|signatures| {
        signatures
            .into_iter()
            .map(TransactionRecord::from)
            .collect::<Vec<_>>()
    });
    match &result {
        Ok(records) => {
            events
                .send_action_event(
                    Action::History,
                    format!("Loaded {} transactions", records.len()),
                    EventType::Success,
                    LogLevel::Info,
                )
                .await;
        }
        Err(e) => {
            events
                .send_action_event(
                    Action::History,
                    format!("History fetch failed: {}", e),
                    EventType::Error,
                    classify_rpc_error(e),
                )
                .await;
        }
    }

    let _ = completions
        .send(Completion::History {
            generation,
            result: result.map_err(ActionError::from),
        })
        .await;
}
