//! One-shot command execution
//!
//! Drives a single dashboard action to completion on the current task,
//! printing worker events to the console instead of an activity log.

use super::SessionData;
use crate::consts::cli_consts::{
    COMPLETION_QUEUE_SIZE, EVENT_QUEUE_SIZE, HISTORY_LIMIT_MAX, HISTORY_PAGE_SIZE,
};
use crate::controller::{
    ActionError, Command, Completion, DashboardController, Intent, SessionInfo,
};
use crate::events::Event;
use crate::keys;
use crate::workers::{ActionRunner, core::EventSender};
use crate::{print_cmd_error, print_cmd_info};
use std::collections::VecDeque;
use std::error::Error;
use tokio::sync::mpsc;

/// Print the wallet's current balance.
pub async fn run_balance(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_cmd_info!("Checking balance.", "Wallet: {}", session.wallet.address());
    let mut shot = OneShot::start(&session);
    shot.drive(Intent::RefreshBalance).await
}

/// Request an airdrop and wait for its confirmation.
pub async fn run_airdrop(session: SessionData, sol: f64) -> Result<(), Box<dyn Error>> {
    if !session.environment.supports_airdrop() {
        print_cmd_error!("❌ Airdrops are not available on mainnet.");
        return Err("Airdrops are not available on mainnet".into());
    }
    print_cmd_info!(
        "Requesting airdrop.",
        "{} SOL to {}",
        sol,
        session.wallet.address()
    );
    let mut shot = OneShot::start(&session);
    shot.drive(Intent::RequestAirdrop { sol }).await
}

/// Sign the ownership verification message and check it against the
/// wallet's address.
pub async fn run_verify(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_cmd_info!(
        "Verifying wallet ownership.",
        "Wallet: {}",
        session.wallet.address()
    );
    let mut shot = OneShot::start(&session);
    shot.drive(Intent::SignVerification).await
}

/// Send SOL to a recipient and wait for confirmation.
pub async fn run_send(
    session: SessionData,
    recipient: String,
    sol: f64,
) -> Result<(), Box<dyn Error>> {
    // Fail on a bad recipient before any network round trip.
    if keys::parse_address(&recipient).is_none() {
        print_cmd_error!("❌ Invalid recipient address.");
        return Err(ActionError::InvalidRecipient.into());
    }
    print_cmd_info!("Sending transfer.", "{} SOL to {}", sol, recipient);
    let mut shot = OneShot::start(&session);
    // The insufficient-balance check compares against the cached balance,
    // so that cache has to be populated first.
    shot.drive(Intent::RefreshBalance).await?;
    shot.drive(Intent::SendTransfer { recipient, sol }).await
}

/// List token-2022 holdings with their resolved metadata.
pub async fn run_tokens(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_cmd_info!(
        "Listing token-2022 holdings.",
        "Wallet: {}",
        session.wallet.address()
    );
    let mut shot = OneShot::start(&session);
    shot.drive(Intent::ListHoldings).await?;
    for holding in &shot.controller.snapshot().holdings {
        println!("  {}", holding);
    }
    Ok(())
}

/// Print the most recent transactions for the wallet.
pub async fn run_history(
    session: SessionData,
    limit: Option<usize>,
) -> Result<(), Box<dyn Error>> {
    let limit = limit.unwrap_or(HISTORY_PAGE_SIZE).clamp(1, HISTORY_LIMIT_MAX);
    print_cmd_info!("Fetching transaction history.", "Up to {} records", limit);
    let mut shot = OneShot::with_history_limit(&session, limit);
    shot.drive(Intent::FetchHistory).await?;
    for record in &shot.controller.snapshot().history {
        if record.err.is_some() {
            println!("  {}  failed", record);
        } else {
            println!("  {}", record);
        }
    }
    Ok(())
}

/// Command-queue driver for a single console action.
struct OneShot {
    controller: DashboardController,
    runner: ActionRunner,
    event_receiver: mpsc::Receiver<Event>,
    completion_receiver: mpsc::Receiver<Completion>,
    follow_ups: VecDeque<Command>,
}

impl OneShot {
    fn start(session: &SessionData) -> Self {
        Self::with_history_limit(session, HISTORY_PAGE_SIZE)
    }

    fn with_history_limit(session: &SessionData, history_limit: usize) -> Self {
        let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        let (completion_sender, completion_receiver) = mpsc::channel(COMPLETION_QUEUE_SIZE);
        let runner = ActionRunner::new(
            session.rpc.clone(),
            session.wallet.clone(),
            EventSender::new(event_sender),
            completion_sender,
        );

        let mut controller = DashboardController::with_history_limit(history_limit);
        // The connect-time refresh batch is dashboard behavior; a console
        // run mints exactly the command it was asked for.
        let _ = controller.observe_session(Some(SessionInfo {
            address: session.wallet.address(),
            can_sign_message: session.wallet.can_sign_message(),
            can_sign_transaction: session.wallet.can_sign_transaction(),
        }));

        Self {
            controller,
            runner,
            event_receiver,
            completion_receiver,
            follow_ups: VecDeque::new(),
        }
    }

    /// Run one intent to completion, then any follow-up refresh it
    /// triggered.
    async fn drive(&mut self, intent: Intent) -> Result<(), Box<dyn Error>> {
        let command = self.controller.request(intent)?;
        self.execute(command).await?;
        while let Some(command) = self.follow_ups.pop_front() {
            // A failed follow-up leaves a cache stale; the primary action
            // already succeeded, so the run still counts as a success.
            let _ = self.execute(command).await;
        }
        Ok(())
    }

    async fn execute(&mut self, command: Command) -> Result<(), ActionError> {
        self.runner.execute(command).await;
        self.print_events();

        let mut outcome = Ok(());
        while let Ok(completion) = self.completion_receiver.try_recv() {
            if let Err(e) = completion_outcome(&completion) {
                outcome = Err(e);
            }
            // Only the balance refresh earns an extra round trip here; the
            // dashboard handles the rest of the cache upkeep.
            self.follow_ups.extend(
                self.controller
                    .apply(completion)
                    .into_iter()
                    .filter(|c| matches!(c, Command::RefreshBalance { .. })),
            );
        }
        outcome
    }

    fn print_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            if event.should_display() {
                println!("{}", event);
            }
        }
    }
}

fn completion_outcome(completion: &Completion) -> Result<(), ActionError> {
    let result = match completion {
        Completion::Balance { result, .. } => result.as_ref().map(|_| ()),
        Completion::Airdrop { result } => result.as_ref().map(|_| ()),
        Completion::Verification { result } => result.as_ref().map(|_| ()),
        Completion::Transfer { result } => result.as_ref().map(|_| ()),
        Completion::Holdings { result, .. } => result.as_ref().map(|_| ()),
        Completion::History { result, .. } => result.as_ref().map(|_| ()),
    };
    result.map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::rpc::MockChainRpc;
    use crate::rpc::types::BlockRef;
    use crate::wallet::MockWalletPort;
    use solana_sdk::hash::Hash;
    use solana_sdk::pubkey::Pubkey;
    use solana_sdk::signature::Signature;
    use std::sync::Arc;

    fn signing_wallet(address: Pubkey) -> MockWalletPort {
        let mut wallet = MockWalletPort::new();
        wallet.expect_address().return_const(address);
        wallet.expect_can_sign_message().return_const(true);
        wallet.expect_can_sign_transaction().return_const(true);
        wallet
    }

    fn session_with(rpc: MockChainRpc, environment: Environment) -> SessionData {
        SessionData {
            environment,
            rpc: Arc::new(rpc),
            wallet: Arc::new(signing_wallet(Pubkey::new_unique())),
        }
    }

    #[tokio::test]
    /// A balance run fetches once and caches the result.
    async fn balance_run_populates_the_cache() {
        let mut rpc = MockChainRpc::new();
        rpc.expect_balance()
            .times(1)
            .returning(|_| Ok(2_500_000_000));

        let session = session_with(rpc, Environment::Devnet);
        let mut shot = OneShot::start(&session);
        shot.drive(Intent::RefreshBalance).await.unwrap();
        assert_eq!(shot.controller.snapshot().balance.display_sol(), "2.5000");
    }

    #[tokio::test]
    /// Airdrops are refused on mainnet before any RPC call is made.
    async fn airdrop_refused_on_mainnet() {
        let session = session_with(MockChainRpc::new(), Environment::Mainnet);
        let error = run_airdrop(session, 1.0).await.unwrap_err();
        assert!(error.to_string().contains("mainnet"));
    }

    #[tokio::test]
    /// A confirmed airdrop chains into a balance refresh.
    async fn airdrop_chains_balance_refresh() {
        let mut rpc = MockChainRpc::new();
        rpc.expect_request_airdrop()
            .times(1)
            .returning(|_, _| Ok(Signature::from([1u8; 64])));
        rpc.expect_latest_block_ref().returning(|| {
            Ok(BlockRef {
                blockhash: Hash::new_from_array([3u8; 32]),
                last_valid_block_height: 100,
            })
        });
        rpc.expect_confirm_transaction().returning(|_, _| Ok(()));
        rpc.expect_balance()
            .times(1)
            .returning(|_| Ok(3_500_000_000));

        let session = session_with(rpc, Environment::Devnet);
        let mut shot = OneShot::start(&session);
        shot.drive(Intent::RequestAirdrop { sol: 1.0 })
            .await
            .unwrap();
        assert_eq!(shot.controller.snapshot().balance.display_sol(), "3.5000");
    }

    #[tokio::test]
    /// An overdrawn send is rejected locally; nothing is ever submitted.
    async fn overdrawn_send_never_submits() {
        let mut rpc = MockChainRpc::new();
        rpc.expect_balance()
            .times(1)
            .returning(|_| Ok(1_000_000_000));
        rpc.expect_submit_transaction().times(0);

        let session = session_with(rpc, Environment::Devnet);
        let error = run_send(
            session,
            "Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS".to_string(),
            2.0,
        )
        .await
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            ActionError::InsufficientBalance.to_string()
        );
    }

    #[tokio::test]
    /// A bad recipient fails before the balance is even fetched.
    async fn invalid_recipient_fails_offline() {
        let session = session_with(MockChainRpc::new(), Environment::Devnet);
        let error = run_send(session, "not-an-address".to_string(), 1.0)
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), ActionError::InvalidRecipient.to_string());
    }

    #[tokio::test]
    /// The history limit is clamped to the accepted range.
    async fn history_limit_is_clamped() {
        let mut rpc = MockChainRpc::new();
        rpc.expect_signatures_for()
            .withf(|_, limit| *limit == HISTORY_LIMIT_MAX)
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let session = session_with(rpc, Environment::Devnet);
        run_history(session, Some(500)).await.unwrap();
    }
}
