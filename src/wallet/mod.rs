use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use thiserror::Error;

pub(crate) mod local;
pub use local::{KeypairWallet, WatchWallet};

#[cfg(test)]
use mockall::{automock, predicate::*};

#[derive(Debug, Error)]
pub enum WalletError {
    /// The wallet cannot perform the requested signing operation.
    #[error("Wallet does not support {0}")]
    Unsupported(&'static str),

    /// The keypair file could not be read or parsed.
    #[error("Failed to load keypair: {0}")]
    Keypair(String),

    /// The wallet refused or failed to sign.
    #[error("Signing failed: {0}")]
    Signing(String),
}

/// External signing capability. Holds key material and exposes signing
/// operations without revealing it; the dashboard only ever sees the
/// public address and returned signatures.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait WalletPort: Send + Sync {
    /// Public address of the wallet.
    fn address(&self) -> Pubkey;

    /// Whether the wallet can sign an arbitrary message.
    fn can_sign_message(&self) -> bool;

    /// Whether the wallet can sign a transaction for submission.
    fn can_sign_transaction(&self) -> bool;

    /// Sign `message` with the wallet's key.
    async fn sign_message(&self, message: &[u8]) -> Result<Signature, WalletError>;

    /// Sign `transaction` in place against `recent_blockhash`.
    async fn sign_transaction(
        &self,
        transaction: &mut Transaction,
        recent_blockhash: Hash,
    ) -> Result<(), WalletError>;
}
