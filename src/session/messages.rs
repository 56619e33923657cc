//! Unified messaging system for session operations

use crate::environment::Environment;
use solana_sdk::pubkey::Pubkey;

/// Session-specific message types
#[derive(Debug, Clone)]
pub enum SessionMessage {
    /// Normal session start/shutdown messages
    Info(String),
    /// Success messages for completed operations
    Success(String),
}

impl SessionMessage {
    /// Create an info message
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Create a success message
    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    fn tag(&self) -> &'static str {
        // Bold cyan for info, bold green for success
        match self {
            Self::Info(_) => "\x1b[1;36m[INFO]\x1b[0m",
            Self::Success(_) => "\x1b[1;32m[SUCCESS]\x1b[0m",
        }
    }

    /// Print the message with appropriate formatting
    pub fn print(&self) {
        let msg = match self {
            Self::Info(msg) | Self::Success(msg) => msg,
        };
        println!("{} {}", self.tag(), msg);
    }
}

/// Print session startup message
pub fn print_session_starting(mode: &str, address: &Pubkey, environment: &Environment) {
    SessionMessage::info(format!(
        "Starting {} mode for wallet {} on {}",
        mode, address, environment
    ))
    .print();
}

/// Print session shutdown message
pub fn print_session_shutdown() {
    SessionMessage::info("Shutting down...").print();
}

/// Print session exit message
pub fn print_session_exit_success() {
    SessionMessage::success("Soldeck exited successfully").print();
}
