//! Dashboard state management
//!
//! Contains the render-side dashboard state and the text entry modes

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::controller::Snapshot;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;

use solana_sdk::pubkey::Pubkey;
use std::collections::VecDeque;
use std::time::Instant;

/// Text entry the footer prompt walks the user through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Keys map directly to dashboard actions.
    Normal,
    /// Collecting the airdrop amount in SOL.
    AirdropAmount,
    /// Collecting the transfer recipient address.
    SendRecipient,
    /// Collecting the transfer amount in SOL.
    SendAmount { recipient: String },
}

/// Render-side dashboard state. Chain facts live in the snapshot and are
/// replaced wholesale after each controller update; everything else here
/// is presentation state.
#[derive(Debug)]
pub struct DashboardState {
    /// Public address of the wallet this dashboard drives.
    pub address: Pubkey,
    /// The cluster the dashboard talks to.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Last observed controller snapshot.
    pub snapshot: Snapshot,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Active text entry mode
    pub input_mode: InputMode,
    /// Text collected for the active entry prompt
    pub input_buffer: String,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(address: Pubkey, environment: Environment, start_time: Instant) -> Self {
        Self {
            address,
            environment,
            start_time,
            snapshot: Snapshot::default(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            tick: 0,
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }

    /// Whether a text prompt currently owns the keyboard.
    pub fn is_entering_text(&self) -> bool {
        self.input_mode != InputMode::Normal
    }
}
