//! Error handling for the rpc module

use crate::logging::LogLevel;
use solana_client::client_error::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    /// Transport, node, or request error reported by the RPC client.
    #[error("RPC client error: {0}")]
    Client(#[from] ClientError),

    /// The chain executed and rejected the transaction.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// The blockhash expired before the transaction reached confirmation.
    #[error("Blockhash expired before the transaction was confirmed")]
    BlockhashExpired,

    /// A parsed account payload did not have the expected shape.
    #[error("Unexpected account payload: {0}")]
    AccountPayload(String),

    /// The mint carries no resolvable token metadata.
    #[error("Token metadata unavailable: {0}")]
    Metadata(String),
}

/// Classify an RPC failure to the level it should be logged at.
pub fn classify_rpc_error(error: &RpcError) -> LogLevel {
    match error {
        // Expected for mints that never wrote the metadata extension
        RpcError::Metadata(_) => LogLevel::Debug,

        // Network issues - usually temporary
        RpcError::Client(_) => LogLevel::Warn,
        RpcError::BlockhashExpired => LogLevel::Warn,

        // Critical: chain rejections, malformed responses
        RpcError::TransactionFailed(_) => LogLevel::Error,
        RpcError::AccountPayload(_) => LogLevel::Error,
    }
}
