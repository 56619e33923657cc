//! Chain-mutating actions: airdrops, transfers, and ownership proofs.
//!
//! Submitters drive a full request, sign, submit, confirm sequence and
//! report the outcome both as activity events and as a completion the
//! controller folds back into the snapshot.

use super::core::EventSender;
use crate::consts::cli_consts::VERIFICATION_MESSAGE;
use crate::controller::{ActionError, Completion};
use crate::events::{Action, EventType};
use crate::logging::LogLevel;
use crate::model::Balance;
use crate::rpc::ChainRpc;
use crate::rpc::error::{RpcError, classify_rpc_error};
use crate::verify::verify_wallet_signature;
use crate::wallet::WalletPort;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::system_instruction;
use solana_sdk::transaction::Transaction;
use std::sync::Arc;
use tokio::sync::mpsc;

async fn run_airdrop(
    rpc: &dyn ChainRpc,
    address: &Pubkey,
    lamports: u64,
    events: &EventSender,
) -> Result<Signature, RpcError> {
    let signature = rpc.request_airdrop(address, lamports).await?;
    let block_ref = rpc.latest_block_ref().await?;
    events
        .send_action_event(
            Action::Airdrop,
            format!("Airdrop {} submitted, awaiting confirmation...", signature),
            EventType::Waiting,
            LogLevel::Info,
        )
        .await;
    rpc.confirm_transaction(&signature, &block_ref).await?;
    Ok(signature)
}

/// Request a devnet airdrop and wait for it to confirm.
pub async fn request_airdrop(
    rpc: Arc<dyn ChainRpc>,
    address: Pubkey,
    lamports: u64,
    events: EventSender,
    completions: mpsc::Sender<Completion>,
) {
    events
        .send_action_event(
            Action::Airdrop,
            format!(
                "Requesting airdrop of {}...",
                Balance::from_lamports(lamports)
            ),
            EventType::Refresh,
            LogLevel::Info,
        )
        .await;

    let result = run_airdrop(rpc.as_ref(), &address, lamports, &events).await;
    match &result {
        Ok(signature) => {
            events
                .send_action_event(
                    Action::Airdrop,
                    format!("Airdrop confirmed: {}", signature),
                    EventType::Success,
                    LogLevel::Info,
                )
                .await;
        }
        Err(e) => {
            events
                .send_action_event(
                    Action::Airdrop,
                    format!("Airdrop failed: {}", e),
                    EventType::Error,
                    classify_rpc_error(e),
                )
                .await;
        }
    }

    let _ = completions
        .send(Completion::Airdrop {
            result: result.map_err(ActionError::from),
        })
        .await;
}

async fn run_transfer(
    rpc: &dyn ChainRpc,
    wallet: &dyn WalletPort,
    recipient: &Pubkey,
    lamports: u64,
    events: &EventSender,
) -> Result<Signature, ActionError> {
    let sender = wallet.address();
    let block_ref = rpc.latest_block_ref().await?;
    let instruction = system_instruction::transfer(&sender, recipient, lamports);
    let mut transaction = Transaction::new_with_payer(&[instruction], Some(&sender));
    wallet
        .sign_transaction(&mut transaction, block_ref.blockhash)
        .await?;
    let signature = rpc.submit_transaction(&transaction).await?;
    events
        .send_action_event(
            Action::Transfer,
            format!("Transfer {} submitted, awaiting confirmation...", signature),
            EventType::Waiting,
            LogLevel::Info,
        )
        .await;
    rpc.confirm_transaction(&signature, &block_ref).await?;
    Ok(signature)
}

/// Build, sign, submit and confirm a native transfer.
pub async fn send_transfer(
    rpc: Arc<dyn ChainRpc>,
    wallet: Arc<dyn WalletPort>,
    recipient: Pubkey,
    lamports: u64,
    events: EventSender,
    completions: mpsc::Sender<Completion>,
) {
    events
        .send_action_event(
            Action::Transfer,
            format!(
                "Sending {} to {}...",
                Balance::from_lamports(lamports),
                recipient
            ),
            EventType::Refresh,
            LogLevel::Info,
        )
        .await;

    let result = run_transfer(rpc.as_ref(), wallet.as_ref(), &recipient, lamports, &events).await;
    match &result {
        Ok(signature) => {
            events
                .send_action_event(
                    Action::Transfer,
                    format!("Transfer confirmed: {}", signature),
                    EventType::Success,
                    LogLevel::Info,
                )
                .await;
        }
        Err(e) => {
            events
                .send_action_event(
                    Action::Transfer,
                    format!("Transfer failed: {}", e),
                    EventType::Error,
                    LogLevel::Error,
                )
                .await;
        }
    }

    let _ = completions.send(Completion::Transfer { result }).await;
}

async fn run_verification(wallet: &dyn WalletPort) -> Result<Signature, ActionError> {
    let message = VERIFICATION_MESSAGE.as_bytes();
    let signature = wallet.sign_message(message).await?;
    verify_wallet_signature(&wallet.address(), message, &signature)
        .map_err(|_| ActionError::InvalidSignature)?;
    Ok(signature)
}

/// Sign the fixed ownership message and verify the signature locally
/// against the wallet's public key. Nothing is sent to the chain.
pub async fn sign_verification(
    wallet: Arc<dyn WalletPort>,
    events: EventSender,
    completions: mpsc::Sender<Completion>,
) {
    events
        .send_action_event(
            Action::Verify,
            "Signing verification message...".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        )
        .await;

    let result = run_verification(wallet.as_ref()).await;
    match &result {
        Ok(signature) => {
            events
                .send_action_event(
                    Action::Verify,
                    format!("Wallet ownership verified, signature {}", signature),
                    EventType::Success,
                    LogLevel::Info,
                )
                .await;
        }
        Err(e) => {
            events
                .send_action_event(
                    Action::Verify,
                    format!("Verification failed: {}", e),
                    EventType::Error,
                    LogLevel::Error,
                )
                .await;
        }
    }

    let _ = completions.send(Completion::Verification { result }).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Event;
    use crate::rpc::MockChainRpc;
    use crate::rpc::types::BlockRef;
    use crate::wallet::{MockWalletPort, WalletError};
    use mockall::Sequence;
    use solana_sdk::hash::Hash;
    use solana_sdk::signature::{Keypair, Signer};

    fn channels() -> (
        EventSender,
        mpsc::Receiver<Event>,
        mpsc::Sender<Completion>,
        mpsc::Receiver<Completion>,
    ) {
        let (event_tx, event_rx) = mpsc::channel(16);
        let (completion_tx, completion_rx) = mpsc::channel(16);
        (
            EventSender::new(event_tx),
            event_rx,
            completion_tx,
            completion_rx,
        )
    }

    #[tokio::test]
    async fn airdrop_requests_then_confirms() {
        let address = Pubkey::new_unique();
        let signature = Signature::from([7u8; 64]);
        let block_ref = BlockRef {
            blockhash: Hash::new_from_array([9u8; 32]),
            last_valid_block_height: 100,
        };

        let mut seq = Sequence::new();
        let mut rpc = MockChainRpc::new();
        rpc.expect_request_airdrop()
            .withf(move |a, lamports| *a == address && *lamports == 1_000_000_000)
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_, _| Ok(signature));
        rpc.expect_latest_block_ref()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move || Ok(block_ref));
        rpc.expect_confirm_transaction()
            .withf(move |sig, b| *sig == signature && b.last_valid_block_height == 100)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let (events, _event_rx, completion_tx, mut completion_rx) = channels();
        request_airdrop(Arc::new(rpc), address, 1_000_000_000, events, completion_tx).await;

        match completion_rx.recv().await {
            Some(Completion::Airdrop { result }) => assert_eq!(result.unwrap(), signature),
            other => panic!("unexpected completion: {:?}", other),
        }
    }

    #[tokio::test]
    async fn airdrop_failure_reports_error() {
        let mut rpc = MockChainRpc::new();
        rpc.expect_request_airdrop()
            .returning(|_, _| Err(RpcError::TransactionFailed("airdrop limit reached".to_string())));

        let (events, mut event_rx, completion_tx, mut completion_rx) = channels();
        request_airdrop(
            Arc::new(rpc),
            Pubkey::new_unique(),
            1_000_000_000,
            events,
            completion_tx,
        )
        .await;

        match completion_rx.recv().await {
            Some(Completion::Airdrop { result }) => assert!(result.is_err()),
            other => panic!("unexpected completion: {:?}", other),
        }

        let mut saw_error = false;
        while let Ok(event) = event_rx.try_recv() {
            if event.event_type == EventType::Error {
                assert!(event.msg.contains("airdrop limit reached"));
                saw_error = true;
            }
        }
        assert!(saw_error);
    }

    #[tokio::test]
    async fn transfer_signs_with_fetched_blockhash_then_confirms() {
        let sender = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();
        let signature = Signature::from([5u8; 64]);
        let blockhash = Hash::new_from_array([3u8; 32]);
        let block_ref = BlockRef {
            blockhash,
            last_valid_block_height: 250,
        };

        let mut seq = Sequence::new();
        let mut rpc = MockChainRpc::new();
        let mut wallet = MockWalletPort::new();
        wallet.expect_address().returning(move || sender);

        rpc.expect_latest_block_ref()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move || Ok(block_ref));
        wallet
            .expect_sign_transaction()
            .withf(move |_, recent| *recent == blockhash)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        rpc.expect_submit_transaction()
            .withf(move |transaction| {
                transaction.message.account_keys.contains(&sender)
                    && transaction.message.account_keys.contains(&recipient)
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(signature));
        rpc.expect_confirm_transaction()
            .withf(move |sig, _| *sig == signature)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let (events, _event_rx, completion_tx, mut completion_rx) = channels();
        send_transfer(
            Arc::new(rpc),
            Arc::new(wallet),
            recipient,
            250_000_000,
            events,
            completion_tx,
        )
        .await;

        match completion_rx.recv().await {
            Some(Completion::Transfer { result }) => assert_eq!(result.unwrap(), signature),
            other => panic!("unexpected completion: {:?}", other),
        }
    }

    #[tokio::test]
    async fn transfer_stops_when_wallet_refuses_to_sign() {
        let mut rpc = MockChainRpc::new();
        let mut wallet = MockWalletPort::new();
        wallet.expect_address().returning(Pubkey::new_unique);
        rpc.expect_latest_block_ref().returning(|| {
            Ok(BlockRef {
                blockhash: Hash::default(),
                last_valid_block_height: 1,
            })
        });
        wallet
            .expect_sign_transaction()
            .returning(|_, _| Err(WalletError::Signing("user rejected".to_string())));
        rpc.expect_submit_transaction().times(0);

        let (events, _event_rx, completion_tx, mut completion_rx) = channels();
        send_transfer(
            Arc::new(rpc),
            Arc::new(wallet),
            Pubkey::new_unique(),
            1,
            events,
            completion_tx,
        )
        .await;

        match completion_rx.recv().await {
            Some(Completion::Transfer { result }) => match result {
                Err(ActionError::Chain(msg)) => assert!(msg.contains("user rejected")),
                other => panic!("unexpected result: {:?}", other),
            },
            other => panic!("unexpected completion: {:?}", other),
        }
    }

    #[tokio::test]
    async fn verification_accepts_a_genuine_signature() {
        let keypair = Keypair::new();
        let address = keypair.pubkey();
        let mut wallet = MockWalletPort::new();
        wallet.expect_address().returning(move || address);
        wallet
            .expect_sign_message()
            .returning(move |message| Ok(keypair.sign_message(message)));

        let (events, mut event_rx, completion_tx, mut completion_rx) = channels();
        sign_verification(Arc::new(wallet), events, completion_tx).await;

        match completion_rx.recv().await {
            Some(Completion::Verification { result }) => assert!(result.is_ok()),
            other => panic!("unexpected completion: {:?}", other),
        }

        let mut saw_success = false;
        while let Ok(event) = event_rx.try_recv() {
            if event.event_type == EventType::Success {
                saw_success = true;
            }
        }
        assert!(saw_success);
    }

    #[tokio::test]
    async fn verification_rejects_a_forged_signature() {
        let mut wallet = MockWalletPort::new();
        wallet.expect_address().returning(Pubkey::new_unique);
        wallet
            .expect_sign_message()
            .returning(|_| Ok(Signature::from([42u8; 64])));

        let (events, _event_rx, completion_tx, mut completion_rx) = channels();
        sign_verification(Arc::new(wallet), events, completion_tx).await;

        match completion_rx.recv().await {
            Some(Completion::Verification { result }) => {
                assert_eq!(result.unwrap_err(), ActionError::InvalidSignature);
            }
            other => panic!("unexpected completion: {:?}", other),
        }
    }
}
