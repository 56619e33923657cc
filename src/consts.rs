pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the wallet
    //! dashboard, organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum buffer size for the activity event channel.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Maximum buffer size for the action completion channel.
    pub const COMPLETION_QUEUE_SIZE: usize = 32;

    // =============================================================================
    // WALLET CONFIGURATION
    // =============================================================================

    /// The literal message signed by the ownership verification action.
    pub const VERIFICATION_MESSAGE: &str = "Please sign this message to verify wallet ownership.";

    /// Default number of records requested by a history fetch.
    pub const HISTORY_PAGE_SIZE: usize = 20;

    /// Upper bound accepted for a user-supplied history limit.
    pub const HISTORY_LIMIT_MAX: usize = 50;

    // =============================================================================
    // CONFIRMATION CONFIGURATION
    // =============================================================================

    /// Transaction confirmation polling configuration
    pub mod confirmation {
        use std::time::Duration;

        /// Interval between signature status polls (milliseconds)
        pub const POLL_INTERVAL_MS: u64 = 500;

        /// Helper function to get the poll interval
        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// Splash screen and input polling configuration
    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen is shown before the dashboard (milliseconds)
        pub const SPLASH_DURATION_MS: u64 = 2000;

        /// Terminal event polling interval (milliseconds)
        pub const TICK_INTERVAL_MS: u64 = 100;

        /// Helper function to get the splash duration
        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }

        /// Helper function to get the tick interval
        pub const fn tick_interval() -> Duration {
            Duration::from_millis(TICK_INTERVAL_MS)
        }
    }
}
