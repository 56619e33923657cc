//! Background execution of dashboard commands.
//!
//! The controller decides what to do and hands out [`Command`]s; the
//! [`ActionRunner`] here executes them against the chain and wallet
//! ports, reporting progress as events and outcomes as completions.

pub mod core;
pub mod fetchers;
pub mod submitters;

use self::core::EventSender;
use crate::controller::{Command, Completion};
use crate::rpc::ChainRpc;
use crate::wallet::WalletPort;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Spawns one background task per dashboard command.
///
/// The runner owns shared handles only, so cloning it is cheap and each
/// command runs independently of the ones already in flight.
#[derive(Clone)]
pub struct ActionRunner {
    rpc: Arc<dyn ChainRpc>,
    wallet: Arc<dyn WalletPort>,
    events: EventSender,
    completions: mpsc::Sender<Completion>,
}

impl ActionRunner {
    pub fn new(
        rpc: Arc<dyn ChainRpc>,
        wallet: Arc<dyn WalletPort>,
        events: EventSender,
        completions: mpsc::Sender<Completion>,
    ) -> Self {
        Self {
            rpc,
            wallet,
            events,
            completions,
        }
    }

    /// Run `command` on a fresh task.
    pub fn spawn(&self, command: Command) -> JoinHandle<()> {
        let runner = self.clone();
        tokio::spawn(async move { runner.execute(command).await })
    }

    /// Run `command` to completion on the current task.
    pub async fn execute(&self, command: Command) {
        match command {
            Command::RefreshBalance {
                address,
                generation,
            } => {
                fetchers::refresh_balance(
                    self.rpc.clone(),
                    address,
                    generation,
                    self.events.clone(),
                    self.completions.clone(),
                )
                .await
            }
            Command::RequestAirdrop { address, lamports } => {
                submitters::request_airdrop(
                    self.rpc.clone(),
                    address,
                    lamports,
                    self.events.clone(),
                    self.completions.clone(),
                )
                .await
            }
            Command::SignVerification => {
                submitters::sign_verification(
                    self.wallet.clone(),
                    self.events.clone(),
                    self.completions.clone(),
                )
                .await
            }
            Command::SendTransfer {
                recipient,
                lamports,
            } => {
                submitters::send_transfer(
                    self.rpc.clone(),
                    self.wallet.clone(),
                    recipient,
                    lamports,
                    self.events.clone(),
                    self.completions.clone(),
                )
                .await
            }
            Command::ListHoldings { owner, generation } => {
                fetchers::list_holdings(
                    self.rpc.clone(),
                    owner,
                    generation,
                    self.events.clone(),
                    self.completions.clone(),
                )
                .await
            }
            Command::FetchHistory {
                address,
                generation,
                limit,
            } => {
                fetchers::fetch_history(
                    self.rpc.clone(),
                    address,
                    generation,
                    limit,
                    self.events.clone(),
                    self.completions.clone(),
                )
                .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::MockChainRpc;
    use crate::wallet::MockWalletPort;
    use solana_sdk::pubkey::Pubkey;

    fn runner_with(rpc: MockChainRpc) -> (ActionRunner, mpsc::Receiver<Completion>) {
        let (event_tx, _event_rx) = mpsc::channel(16);
        let (completion_tx, completion_rx) = mpsc::channel(16);
        let runner = ActionRunner::new(
            Arc::new(rpc),
            Arc::new(MockWalletPort::new()),
            EventSender::new(event_tx),
            completion_tx,
        );
        (runner, completion_rx)
    }

    #[tokio::test]
    async fn execute_routes_balance_commands() {
        let mut rpc = MockChainRpc::new();
        rpc.expect_balance().returning(|_| Ok(1_000));

        let (runner, mut completion_rx) = runner_with(rpc);
        runner
            .execute(Command::RefreshBalance {
                address: Pubkey::new_unique(),
                generation: 4,
            })
            .await;

        match completion_rx.recv().await {
            Some(Completion::Balance { generation, result }) => {
                assert_eq!(generation, 4);
                assert_eq!(result.unwrap(), 1_000);
            }
            other => panic!("unexpected completion: {:?}", other),
        }
    }

    #[tokio::test]
    async fn spawn_runs_commands_on_background_tasks() {
        let mut rpc = MockChainRpc::new();
        rpc.expect_signatures_for().returning(|_, _| Ok(vec![]));

        let (runner, mut completion_rx) = runner_with(rpc);
        let handle = runner.spawn(Command::FetchHistory {
            address: Pubkey::new_unique(),
            generation: 9,
            limit: 20,
        });
        handle.await.unwrap();

        match completion_rx.recv().await {
            Some(Completion::History { generation, result }) => {
                assert_eq!(generation, 9);
                assert!(result.unwrap().is_empty());
            }
            other => panic!("unexpected completion: {:?}", other),
        }
    }
}
