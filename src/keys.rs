//! Solana address validation functions.

use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// Parse a base58 Solana address, tolerating surrounding whitespace.
pub fn parse_address(address: &str) -> Option<Pubkey> {
    Pubkey::from_str(address.trim()).ok()
}

/// Check if a given string is a valid base58-encoded Solana address.
pub fn is_valid_address(address: &str) -> bool {
    parse_address(address).is_some()
}
