//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Action;
use ratatui::prelude::Color;
use solana_sdk::pubkey::Pubkey;

/// Get a ratatui color for an action based on its kind
pub fn get_action_color(action: &Action) -> Color {
    match action {
        Action::Session => Color::Cyan,
        Action::Balance => Color::LightBlue,
        Action::Airdrop => Color::Yellow,
        Action::Verify => Color::Magenta,
        Action::Transfer => Color::Green,
        Action::Holdings => Color::LightCyan,
        Action::History => Color::Gray,
    }
}

/// Shorten a base58 address for narrow panels, keeping both ends.
pub fn shorten_address(address: &Pubkey) -> String {
    let full = address.to_string();
    if full.len() <= 12 {
        return full;
    }
    format!("{}..{}", &full[..4], &full[full.len() - 4..])
}

/// Shorten a base58 signature for log and table rows.
pub fn shorten_signature(signature: &str) -> String {
    match signature.get(..8) {
        Some(prefix) => format!("{}..", prefix),
        None => signature.to_string(),
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}
