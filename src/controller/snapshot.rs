//! Immutable dashboard state snapshot.
//!
//! The snapshot is only ever mutated by the controller's transition
//! functions; everything else reads it by shared reference.

use crate::model::{Balance, TokenHolding, TransactionRecord};
use solana_sdk::pubkey::Pubkey;

/// Wallet facts captured when a session connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionInfo {
    /// Public address of the connected wallet.
    pub address: Pubkey,

    /// Whether the wallet can sign an arbitrary message.
    pub can_sign_message: bool,

    /// Whether the wallet can sign a transaction for submission.
    pub can_sign_transaction: bool,
}

/// Busy flags gating UI affordances while an action is outstanding.
/// Display hints only; correctness is carried by the generation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusyFlags {
    /// A balance refresh is outstanding.
    pub balance_loading: bool,

    /// An airdrop request is outstanding.
    pub airdrop_in_flight: bool,

    /// A transfer is outstanding.
    pub send_in_flight: bool,
}

impl BusyFlags {
    pub fn any(&self) -> bool {
        self.balance_loading || self.airdrop_in_flight || self.send_in_flight
    }
}

/// Everything the dashboard renders, as last fetched. All entries are
/// derived caches: a successful re-fetch replaces the previous value,
/// a failure leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Connected wallet session, if any.
    pub session: Option<SessionInfo>,

    /// Last fetched native balance.
    pub balance: Balance,

    /// Last fetched token-2022 holdings.
    pub holdings: Vec<TokenHolding>,

    /// Last fetched transaction history, most recent first.
    pub history: Vec<TransactionRecord>,

    /// Outstanding-action display hints.
    pub busy: BusyFlags,
}

impl Snapshot {
    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    pub fn address(&self) -> Option<Pubkey> {
        self.session.map(|session| session.address)
    }
}
