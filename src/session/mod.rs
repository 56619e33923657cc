pub mod messages;
pub mod one_shot;
pub mod setup;
pub mod tui_mode;

pub use one_shot::{run_airdrop, run_balance, run_history, run_send, run_tokens, run_verify};
pub use setup::{SessionData, setup_session};
pub use tui_mode::run_tui_mode;
