//! Chain-facing data views returned by the RPC port.

use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_transaction_status::TransactionConfirmationStatus;

/// A recent blockhash together with the height after which it expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRef {
    pub blockhash: Hash,
    pub last_valid_block_height: u64,
}

/// A parsed token-2022 account owned by the wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAccountView {
    /// Address of the token account itself.
    pub account: Pubkey,

    /// Mint the account holds.
    pub mint: Pubkey,

    /// Raw amount in the smallest unit.
    pub amount: u64,

    /// Decimal places used by the mint.
    pub decimals: u8,
}

/// Name and symbol resolved from a mint's token-metadata extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadataInfo {
    pub name: String,
    pub symbol: String,
}

/// One record from the signature history query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureInfo {
    /// Base58 transaction signature.
    pub signature: String,

    /// Chain-reported block time, when the node still has it.
    pub block_time: Option<i64>,

    /// Cluster confirmation status at query time.
    pub confirmation_status: Option<TransactionConfirmationStatus>,

    /// Chain-reported failure, rendered for display.
    pub err: Option<String>,
}
