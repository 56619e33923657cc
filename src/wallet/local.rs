//! Local wallet implementations.
//!
//! `KeypairWallet` signs with a keypair file on disk (solana-keygen format).
//! `WatchWallet` carries only an address and declines every signing request.

use crate::wallet::{WalletError, WalletPort};
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, read_keypair_file};
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;
use std::path::Path;

pub struct KeypairWallet {
    keypair: Keypair,
}

impl KeypairWallet {
    pub fn new(keypair: Keypair) -> Self {
        Self { keypair }
    }

    /// Load a wallet from a keypair file.
    pub fn load(path: &Path) -> Result<Self, WalletError> {
        let keypair = read_keypair_file(path).map_err(|e| WalletError::Keypair(e.to_string()))?;
        Ok(Self { keypair })
    }
}

#[async_trait::async_trait]
impl WalletPort for KeypairWallet {
    fn address(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    fn can_sign_message(&self) -> bool {
        true
    }

    fn can_sign_transaction(&self) -> bool {
        true
    }

    async fn sign_message(&self, message: &[u8]) -> Result<Signature, WalletError> {
        self.keypair
            .try_sign_message(message)
            .map_err(|e| WalletError::Signing(e.to_string()))
    }

    async fn sign_transaction(
        &self,
        transaction: &mut Transaction,
        recent_blockhash: Hash,
    ) -> Result<(), WalletError> {
        transaction
            .try_sign(&[&self.keypair], recent_blockhash)
            .map_err(|e| WalletError::Signing(e.to_string()))
    }
}

pub struct WatchWallet {
    address: Pubkey,
}

impl WatchWallet {
    pub fn new(address: Pubkey) -> Self {
        Self { address }
    }
}

#[async_trait::async_trait]
impl WalletPort for WatchWallet {
    fn address(&self) -> Pubkey {
        self.address
    }

    fn can_sign_message(&self) -> bool {
        false
    }

    fn can_sign_transaction(&self) -> bool {
        false
    }

    async fn sign_message(&self, _message: &[u8]) -> Result<Signature, WalletError> {
        Err(WalletError::Unsupported("message signing"))
    }

    async fn sign_transaction(
        &self,
        _transaction: &mut Transaction,
        _recent_blockhash: Hash,
    ) -> Result<(), WalletError> {
        Err(WalletError::Unsupported("transaction signing"))
    }
}
