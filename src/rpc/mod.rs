use crate::environment::Environment;
use crate::rpc::error::RpcError;
use crate::rpc::types::{BlockRef, SignatureInfo, TokenAccountView, TokenMetadataInfo};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

pub(crate) mod client;
pub use client::RpcHandle;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ChainRpc: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Get the lamport balance of an account.
    async fn balance(&self, address: &Pubkey) -> Result<u64, RpcError>;

    /// Request an airdrop of `lamports` to `address`.
    async fn request_airdrop(&self, address: &Pubkey, lamports: u64)
    -> Result<Signature, RpcError>;

    /// Fetch the latest blockhash and the height after which it expires.
    async fn latest_block_ref(&self) -> Result<BlockRef, RpcError>;

    /// Block until `signature` reaches the configured commitment, or fail
    /// once the chain moves past `block_ref.last_valid_block_height`.
    async fn confirm_transaction(
        &self,
        signature: &Signature,
        block_ref: &BlockRef,
    ) -> Result<(), RpcError>;

    /// Submit a signed transaction without waiting for confirmation.
    async fn submit_transaction(&self, transaction: &Transaction) -> Result<Signature, RpcError>;

    /// Enumerate parsed token-2022 accounts owned by `owner`.
    async fn token_accounts(&self, owner: &Pubkey) -> Result<Vec<TokenAccountView>, RpcError>;

    /// Resolve the token-metadata extension carried by a mint.
    async fn token_metadata(&self, mint: &Pubkey) -> Result<TokenMetadataInfo, RpcError>;

    /// Query up to `limit` most recent signatures involving `address`.
    async fn signatures_for(
        &self,
        address: &Pubkey,
        limit: usize,
    ) -> Result<Vec<SignatureInfo>, RpcError>;
}
