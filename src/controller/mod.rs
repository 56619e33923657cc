//! Dashboard Controller
//!
//! Translates discrete user intents into external call sequences and folds
//! completions back into an immutable state snapshot. All preconditions are
//! checked here, locally, before any network call is issued; per-cache
//! generation counters ensure only the latest refresh of each kind is ever
//! applied.

use crate::consts::cli_consts::HISTORY_PAGE_SIZE;
use crate::keys;
use crate::model::Balance;
use solana_sdk::native_token::sol_to_lamports;
use solana_sdk::pubkey::Pubkey;

pub(crate) mod commands;
pub(crate) mod snapshot;
pub use commands::{ActionError, Command, Completion, Intent};
pub use snapshot::{BusyFlags, SessionInfo, Snapshot};

pub struct DashboardController {
    snapshot: Snapshot,
    balance_generation: u64,
    holdings_generation: u64,
    history_generation: u64,
    history_limit: usize,
}

impl DashboardController {
    pub fn new() -> Self {
        Self::with_history_limit(HISTORY_PAGE_SIZE)
    }

    pub fn with_history_limit(history_limit: usize) -> Self {
        Self {
            snapshot: Snapshot::default(),
            balance_generation: 0,
            holdings_generation: 0,
            history_generation: 0,
            history_limit,
        }
    }

    /// The current state snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Observe a wallet-connection transition. A transition to connected
    /// emits the three refresh commands as one batch, exactly once; a
    /// transition to disconnected resets every cache and emits nothing.
    /// Re-observing an unchanged state is a no-op.
    pub fn observe_session(&mut self, session: Option<SessionInfo>) -> Vec<Command> {
        match session {
            Some(info) => {
                if self.snapshot.session == Some(info) {
                    return Vec::new();
                }
                self.snapshot.session = Some(info);
                vec![
                    self.begin_balance_refresh(info.address),
                    self.begin_holdings_refresh(info.address),
                    self.begin_history_refresh(info.address),
                ]
            }
            None => {
                if self.snapshot.session.is_some() {
                    self.reset_caches();
                }
                Vec::new()
            }
        }
    }

    /// Validate an intent against the snapshot and mint the command for it.
    /// Every rejection here happens before any network call.
    pub fn request(&mut self, intent: Intent) -> Result<Command, ActionError> {
        let session = self.snapshot.session.ok_or(ActionError::NotConnected)?;
        match intent {
            Intent::RefreshBalance => Ok(self.begin_balance_refresh(session.address)),
            Intent::ListHoldings => Ok(self.begin_holdings_refresh(session.address)),
            Intent::FetchHistory => Ok(self.begin_history_refresh(session.address)),
            Intent::RequestAirdrop { sol } => {
                let lamports = to_lamports(sol)?;
                self.snapshot.busy.airdrop_in_flight = true;
                Ok(Command::RequestAirdrop {
                    address: session.address,
                    lamports,
                })
            }
            Intent::SignVerification => {
                if !session.can_sign_message {
                    return Err(ActionError::CapabilityMissing);
                }
                Ok(Command::SignVerification)
            }
            Intent::SendTransfer { recipient, sol } => {
                if !session.can_sign_transaction {
                    return Err(ActionError::CapabilityMissing);
                }
                let recipient =
                    keys::parse_address(&recipient).ok_or(ActionError::InvalidRecipient)?;
                let lamports = to_lamports(sol)?;
                // Compared in lamports against the cached raw balance; the
                // transfer must stay strictly below it.
                if lamports >= self.snapshot.balance.lamports {
                    return Err(ActionError::InsufficientBalance);
                }
                self.snapshot.busy.send_in_flight = true;
                Ok(Command::SendTransfer {
                    recipient,
                    lamports,
                })
            }
        }
    }

    /// Fold a completion into the snapshot. Stale-generation completions
    /// are discarded untouched. Returns the follow-up commands the
    /// completed action triggers.
    pub fn apply(&mut self, completion: Completion) -> Vec<Command> {
        match completion {
            Completion::Balance { generation, result } => {
                if generation != self.balance_generation {
                    return Vec::new();
                }
                self.snapshot.busy.balance_loading = false;
                if let Ok(lamports) = result {
                    self.snapshot.balance = Balance::from_lamports(lamports);
                }
                Vec::new()
            }
            Completion::Airdrop { result } => {
                self.snapshot.busy.airdrop_in_flight = false;
                match (result, self.snapshot.session) {
                    (Ok(_), Some(session)) => vec![self.begin_balance_refresh(session.address)],
                    _ => Vec::new(),
                }
            }
            Completion::Verification { .. } => {
                // Notification-only: the activity log carries the outcome.
                Vec::new()
            }
            Completion::Transfer { result } => {
                self.snapshot.busy.send_in_flight = false;
                match (result, self.snapshot.session) {
                    (Ok(_), Some(session)) => vec![
                        self.begin_balance_refresh(session.address),
                        self.begin_history_refresh(session.address),
                    ],
                    _ => Vec::new(),
                }
            }
            Completion::Holdings { generation, result } => {
                if generation != self.holdings_generation {
                    return Vec::new();
                }
                if let Ok(holdings) = result {
                    self.snapshot.holdings = holdings;
                }
                Vec::new()
            }
            Completion::History { generation, result } => {
                if generation != self.history_generation {
                    return Vec::new();
                }
                if let Ok(mut records) = result {
                    records.truncate(self.history_limit);
                    self.snapshot.history = records;
                }
                Vec::new()
            }
        }
    }

    fn begin_balance_refresh(&mut self, address: Pubkey) -> Command {
        self.balance_generation += 1;
        self.snapshot.busy.balance_loading = true;
        Command::RefreshBalance {
            address,
            generation: self.balance_generation,
        }
    }

    fn begin_holdings_refresh(&mut self, owner: Pubkey) -> Command {
        self.holdings_generation += 1;
        Command::ListHoldings {
            owner,
            generation: self.holdings_generation,
        }
    }

    fn begin_history_refresh(&mut self, address: Pubkey) -> Command {
        self.history_generation += 1;
        Command::FetchHistory {
            address,
            generation: self.history_generation,
            limit: self.history_limit,
        }
    }

    /// Deterministic disconnect reset. Generations advance so that any
    /// in-flight completion lands stale.
    fn reset_caches(&mut self) {
        self.snapshot = Snapshot::default();
        self.balance_generation += 1;
        self.holdings_generation += 1;
        self.history_generation += 1;
    }
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new()
    }
}

fn to_lamports(sol: f64) -> Result<u64, ActionError> {
    if !sol.is_finite() || sol <= 0.0 {
        return Err(ActionError::InvalidAmount);
    }
    Ok(sol_to_lamports(sol))
}
