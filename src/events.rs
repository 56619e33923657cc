//! Event System
//!
//! Types and implementations for action events and logging

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// The dashboard action an event originates from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Action {
    /// Wallet connection lifecycle (connect, disconnect).
    Session,
    /// Native balance refresh.
    Balance,
    /// Devnet airdrop request.
    Airdrop,
    /// Ownership message signing and local verification.
    Verify,
    /// Native currency transfer.
    Transfer,
    /// Token-2022 holdings enumeration.
    Holdings,
    /// Transaction history fetch.
    History,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub action: Action,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(action: Action, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            action,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn success(action: Action, msg: String) -> Self {
        Self::new(action, msg, EventType::Success, LogLevel::Info)
    }

    pub fn error(action: Action, msg: String, log_level: LogLevel) -> Self {
        Self::new(action, msg, EventType::Error, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
