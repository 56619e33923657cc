//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod footer;
pub mod header;
pub mod history;
pub mod holdings;
pub mod logs;
pub mod wallet_panel;
