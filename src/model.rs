//! Dashboard Data Model
//!
//! Derived snapshots of wallet-facing chain state. Every entity here caches
//! the last successful fetch only; a re-fetch fully replaces the previous
//! value and failures leave it untouched.

use crate::rpc::types::{SignatureInfo, TokenAccountView, TokenMetadataInfo};
use chrono::{DateTime, Utc};
use solana_sdk::native_token::lamports_to_sol;
use solana_sdk::pubkey::Pubkey;
use solana_transaction_status::TransactionConfirmationStatus;
use std::fmt::Display;

/// Native balance, held in lamports and displayed in SOL.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Balance {
    /// Raw balance in lamports.
    pub lamports: u64,
}

impl Balance {
    pub fn from_lamports(lamports: u64) -> Self {
        Self { lamports }
    }

    /// Balance in whole SOL.
    pub fn sol(&self) -> f64 {
        lamports_to_sol(self.lamports)
    }

    /// Balance formatted for display, four fractional digits.
    pub fn display_sol(&self) -> String {
        format!("{:.4}", self.sol())
    }
}

impl Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} SOL", self.display_sol())
    }
}

/// A token-2022 holding with resolved metadata.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TokenHolding {
    /// Display name from the mint's metadata extension.
    pub name: String,

    /// Ticker symbol from the mint's metadata extension.
    pub symbol: String,

    /// Raw balance in the mint's smallest unit.
    pub amount: u64,

    /// Decimal places used by the mint.
    pub decimals: u8,

    /// Address of the token account holding the balance.
    pub account: Pubkey,
}

impl TokenHolding {
    /// Combine an enumerated account with its resolved metadata.
    pub fn new(view: TokenAccountView, metadata: TokenMetadataInfo) -> Self {
        Self {
            name: metadata.name,
            symbol: metadata.symbol,
            amount: view.amount,
            decimals: view.decimals,
            account: view.account,
        }
    }

    /// Raw amount scaled by the mint's decimals, for display.
    pub fn display_amount(&self) -> String {
        if self.decimals == 0 {
            return self.amount.to_string();
        }
        let scaled = self.amount as f64 / 10f64.powi(i32::from(self.decimals));
        format!("{:.prec$}", scaled, prec = usize::from(self.decimals))
    }
}

impl Display for TokenHolding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.name,
            self.symbol,
            self.display_amount()
        )
    }
}

/// Cluster confirmation progression of a transaction, or unknown.
#[derive(Debug, Clone, Copy, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ConfirmationLevel {
    Processed,
    Confirmed,
    Finalized,
    Unknown,
}

impl From<Option<TransactionConfirmationStatus>> for ConfirmationLevel {
    fn from(status: Option<TransactionConfirmationStatus>) -> Self {
        match status {
            Some(TransactionConfirmationStatus::Processed) => ConfirmationLevel::Processed,
            Some(TransactionConfirmationStatus::Confirmed) => ConfirmationLevel::Confirmed,
            Some(TransactionConfirmationStatus::Finalized) => ConfirmationLevel::Finalized,
            None => ConfirmationLevel::Unknown,
        }
    }
}

/// One entry of the transaction history snapshot.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TransactionRecord {
    /// Base58 transaction signature.
    pub signature: String,

    /// Block time, defaulting to the Unix epoch when the chain reports none.
    pub time: DateTime<Utc>,

    /// Confirmation status at query time.
    pub status: ConfirmationLevel,

    /// Chain-reported failure, if the transaction errored.
    pub err: Option<String>,
}

impl From<SignatureInfo> for TransactionRecord {
    fn from(info: SignatureInfo) -> Self {
        Self {
            signature: info.signature,
            time: info
                .block_time
                .and_then(|secs| DateTime::from_timestamp(secs, 0))
                .unwrap_or_default(),
            status: ConfirmationLevel::from(info.confirmation_status),
            err: info.err,
        }
    }
}

impl Display for TransactionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.signature,
            self.status,
            self.time.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    /// Displayed balance equals raw lamports divided by the SOL scale.
    fn balance_display_is_scaled() {
        assert_eq!(Balance::from_lamports(2_500_000_000).display_sol(), "2.5000");
        assert_eq!(Balance::from_lamports(3_500_000_000).display_sol(), "3.5000");
        assert_eq!(Balance::from_lamports(0).display_sol(), "0.0000");
        assert_eq!(Balance::from_lamports(1).display_sol(), "0.0000");
    }

    #[test]
    fn confirmation_level_mapping() {
        assert_eq!(
            ConfirmationLevel::from(Some(TransactionConfirmationStatus::Processed)),
            ConfirmationLevel::Processed
        );
        assert_eq!(
            ConfirmationLevel::from(Some(TransactionConfirmationStatus::Confirmed)),
            ConfirmationLevel::Confirmed
        );
        assert_eq!(
            ConfirmationLevel::from(Some(TransactionConfirmationStatus::Finalized)),
            ConfirmationLevel::Finalized
        );
        assert_eq!(ConfirmationLevel::from(None), ConfirmationLevel::Unknown);
    }

    #[test]
    /// Statuses render lowercase for the history table.
    fn confirmation_level_display() {
        assert_eq!(ConfirmationLevel::Processed.to_string(), "processed");
        assert_eq!(ConfirmationLevel::Confirmed.to_string(), "confirmed");
        assert_eq!(ConfirmationLevel::Finalized.to_string(), "finalized");
        assert_eq!(ConfirmationLevel::Unknown.to_string(), "unknown");
    }

    #[test]
    /// A record without a chain block time falls back to the epoch.
    fn record_defaults_to_epoch() {
        let record = TransactionRecord::from(SignatureInfo {
            signature: "sig".to_string(),
            block_time: None,
            confirmation_status: None,
            err: None,
        });
        assert_eq!(record.time, DateTime::<Utc>::default());
        assert_eq!(record.status, ConfirmationLevel::Unknown);
    }

    #[test]
    fn record_uses_block_time() {
        let record = TransactionRecord::from(SignatureInfo {
            signature: "sig".to_string(),
            block_time: Some(1_700_000_000),
            confirmation_status: Some(TransactionConfirmationStatus::Finalized),
            err: Some("InstructionError".to_string()),
        });
        assert_eq!(record.time.timestamp(), 1_700_000_000);
        assert_eq!(record.status, ConfirmationLevel::Finalized);
        assert_eq!(record.err.as_deref(), Some("InstructionError"));
    }

    #[test]
    fn holding_display_amount_scales_by_decimals() {
        let holding = TokenHolding {
            name: "Wrapped SOL".to_string(),
            symbol: "wSOL".to_string(),
            amount: 1_500_000_000,
            decimals: 9,
            account: Pubkey::from_str("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS")
                .expect("valid address"),
        };
        assert_eq!(holding.display_amount(), "1.500000000");

        let whole = TokenHolding { decimals: 0, amount: 42, ..holding };
        assert_eq!(whole.display_amount(), "42");
    }
}
