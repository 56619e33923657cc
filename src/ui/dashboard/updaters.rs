//! Dashboard state update logic
//!
//! Tick updates plus the prompt state machine that turns collected text
//! into dashboard intents

use super::state::{DashboardState, InputMode};

use crate::controller::{Intent, Snapshot};
use crate::events::Action;

/// What pressing Enter on the active prompt produced.
#[derive(Debug, Clone, PartialEq)]
pub enum InputOutcome {
    /// No prompt was active, or the prompt advanced to its next step.
    Pending,
    /// A fully collected intent, ready for the controller.
    Submit(Intent),
    /// The entered text did not parse.
    Invalid { action: Action, message: String },
}

impl DashboardState {
    /// Update the dashboard state with a new tick, moving queued events
    /// into the activity log.
    pub fn update(&mut self) {
        self.tick += 1;
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }
    }

    /// Replace the rendered snapshot with the controller's latest.
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) {
        self.snapshot = snapshot.clone();
    }

    /// Begin airdrop amount entry.
    pub fn begin_airdrop_entry(&mut self) {
        self.input_mode = InputMode::AirdropAmount;
        self.input_buffer.clear();
    }

    /// Begin transfer entry, starting with the recipient address.
    pub fn begin_send_entry(&mut self) {
        self.input_mode = InputMode::SendRecipient;
        self.input_buffer.clear();
    }

    /// Abort the active prompt.
    pub fn cancel_entry(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    pub fn push_input_char(&mut self, c: char) {
        if !c.is_control() {
            self.input_buffer.push(c);
        }
    }

    pub fn pop_input_char(&mut self) {
        self.input_buffer.pop();
    }

    /// Consume the buffer for the active prompt step.
    ///
    /// Recipient text is passed through untouched; address validation is
    /// the controller's call to make.
    pub fn submit_entry(&mut self) -> InputOutcome {
        match std::mem::replace(&mut self.input_mode, InputMode::Normal) {
            InputMode::Normal => InputOutcome::Pending,
            InputMode::AirdropAmount => match self.take_buffer().trim().parse::<f64>() {
                Ok(sol) => InputOutcome::Submit(Intent::RequestAirdrop { sol }),
                Err(_) => InputOutcome::Invalid {
                    action: Action::Airdrop,
                    message: "Airdrop amount is not a number".to_string(),
                },
            },
            InputMode::SendRecipient => {
                let recipient = self.take_buffer().trim().to_string();
                if recipient.is_empty() {
                    return InputOutcome::Invalid {
                        action: Action::Transfer,
                        message: "Recipient address required".to_string(),
                    };
                }
                self.input_mode = InputMode::SendAmount { recipient };
                InputOutcome::Pending
            }
            InputMode::SendAmount { recipient } => {
                match self.take_buffer().trim().parse::<f64>() {
                    Ok(sol) => InputOutcome::Submit(Intent::SendTransfer { recipient, sol }),
                    Err(_) => InputOutcome::Invalid {
                        action: Action::Transfer,
                        message: "Transfer amount is not a number".to_string(),
                    },
                }
            }
        }
    }

    fn take_buffer(&mut self) -> String {
        std::mem::take(&mut self.input_buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use solana_sdk::pubkey::Pubkey;
    use std::time::Instant;

    fn state() -> DashboardState {
        DashboardState::new(Pubkey::new_unique(), Environment::Devnet, Instant::now())
    }

    #[test]
    fn airdrop_entry_collects_an_amount() {
        let mut state = state();
        state.begin_airdrop_entry();
        for c in "2.5".chars() {
            state.push_input_char(c);
        }
        assert_eq!(
            state.submit_entry(),
            InputOutcome::Submit(Intent::RequestAirdrop { sol: 2.5 })
        );
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.input_buffer.is_empty());
    }

    #[test]
    fn send_entry_collects_recipient_then_amount() {
        let mut state = state();
        state.begin_send_entry();
        for c in "Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS".chars() {
            state.push_input_char(c);
        }
        assert_eq!(state.submit_entry(), InputOutcome::Pending);

        for c in "1.0".chars() {
            state.push_input_char(c);
        }
        match state.submit_entry() {
            InputOutcome::Submit(Intent::SendTransfer { recipient, sol }) => {
                assert_eq!(recipient, "Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");
                assert_eq!(sol, 1.0);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn unparsable_amount_is_rejected_locally() {
        let mut state = state();
        state.begin_airdrop_entry();
        for c in "lots".chars() {
            state.push_input_char(c);
        }
        match state.submit_entry() {
            InputOutcome::Invalid { action, .. } => assert_eq!(action, Action::Airdrop),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn escape_cancels_entry_and_clears_the_buffer() {
        let mut state = state();
        state.begin_send_entry();
        state.push_input_char('x');
        state.cancel_entry();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.input_buffer.is_empty());
    }
}
