//! Solana RPC Client
//!
//! A thin adapter over the nonblocking RPC client, mapping chain responses
//! into the dashboard's views.

use crate::consts::cli_consts::confirmation;
use crate::environment::Environment;
use crate::rpc::ChainRpc;
use crate::rpc::error::RpcError;
use crate::rpc::types::{BlockRef, SignatureInfo, TokenAccountView, TokenMetadataInfo};
use solana_account_decoder::UiAccountData;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_client::GetConfirmedSignaturesForAddress2Config;
use solana_client::rpc_request::TokenAccountsFilter;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use spl_token_2022::extension::{BaseStateWithExtensions, StateWithExtensions};
use spl_token_2022::state::Mint;
use spl_token_metadata_interface::state::TokenMetadata;
use std::str::FromStr;

pub struct RpcHandle {
    client: RpcClient,
    commitment: CommitmentConfig,
    environment: Environment,
}

impl RpcHandle {
    pub fn new(environment: Environment) -> Self {
        let commitment = CommitmentConfig::confirmed();
        Self {
            client: RpcClient::new_with_commitment(environment.rpc_url(), commitment),
            commitment,
            environment,
        }
    }
}

/// Extract a token account view from a jsonParsed account payload.
fn parse_token_account(pubkey: &str, data: &UiAccountData) -> Option<TokenAccountView> {
    let UiAccountData::Json(parsed) = data else {
        return None;
    };
    let info = parsed.parsed.get("info")?;
    let mint = Pubkey::from_str(info.get("mint")?.as_str()?).ok()?;
    let token_amount = info.get("tokenAmount")?;
    let amount = token_amount.get("amount")?.as_str()?.parse::<u64>().ok()?;
    let decimals = u8::try_from(token_amount.get("decimals")?.as_u64()?).ok()?;
    let account = Pubkey::from_str(pubkey).ok()?;
    Some(TokenAccountView {
        account,
        mint,
        amount,
        decimals,
    })
}

#[async_trait::async_trait]
impl ChainRpc for RpcHandle {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn balance(&self, address: &Pubkey) -> Result<u64, RpcError> {
        Ok(self.client.get_balance(address).await?)
    }

    async fn request_airdrop(
        &self,
        address: &Pubkey,
        lamports: u64,
    ) -> Result<Signature, RpcError> {
        Ok(self.client.request_airdrop(address, lamports).await?)
    }

    async fn latest_block_ref(&self) -> Result<BlockRef, RpcError> {
        let (blockhash, last_valid_block_height) = self
            .client
            .get_latest_blockhash_with_commitment(self.commitment)
            .await?;
        Ok(BlockRef {
            blockhash,
            last_valid_block_height,
        })
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
        block_ref: &BlockRef,
    ) -> Result<(), RpcError> {
        loop {
            let statuses = self.client.get_signature_statuses(&[*signature]).await?;
            if let Some(Some(status)) = statuses.value.first() {
                if let Some(err) = &status.err {
                    return Err(RpcError::TransactionFailed(err.to_string()));
                }
                if status.satisfies_commitment(self.commitment) {
                    return Ok(());
                }
            }

            let block_height = self.client.get_block_height().await?;
            if block_height > block_ref.last_valid_block_height {
                return Err(RpcError::BlockhashExpired);
            }
            tokio::time::sleep(confirmation::poll_interval()).await;
        }
    }

    async fn submit_transaction(&self, transaction: &Transaction) -> Result<Signature, RpcError> {
        Ok(self.client.send_transaction(transaction).await?)
    }

    async fn token_accounts(&self, owner: &Pubkey) -> Result<Vec<TokenAccountView>, RpcError> {
        let keyed_accounts = self
            .client
            .get_token_accounts_by_owner(
                owner,
                TokenAccountsFilter::ProgramId(spl_token_2022::id()),
            )
            .await?;

        let mut views = Vec::with_capacity(keyed_accounts.len());
        for keyed in &keyed_accounts {
            match parse_token_account(&keyed.pubkey, &keyed.account.data) {
                Some(view) => views.push(view),
                None => log::debug!("Skipping unparseable token account {}", keyed.pubkey),
            }
        }
        Ok(views)
    }

    async fn token_metadata(&self, mint: &Pubkey) -> Result<TokenMetadataInfo, RpcError> {
        let account = self.client.get_account(mint).await?;
        let state = StateWithExtensions::<Mint>::unpack(&account.data)
            .map_err(|e| RpcError::AccountPayload(e.to_string()))?;
        let metadata = state
            .get_variable_len_extension::<TokenMetadata>()
            .map_err(|e| RpcError::Metadata(e.to_string()))?;
        Ok(TokenMetadataInfo {
            name: metadata.name,
            symbol: metadata.symbol,
        })
    }

    async fn signatures_for(
        &self,
        address: &Pubkey,
        limit: usize,
    ) -> Result<Vec<SignatureInfo>, RpcError> {
        let config = GetConfirmedSignaturesForAddress2Config {
            before: None,
            until: None,
            limit: Some(limit),
            commitment: Some(self.commitment),
        };
        let records = self
            .client
            .get_signatures_for_address_with_config(address, config)
            .await?;

        Ok(records
            .into_iter()
            .take(limit)
            .map(|record| SignatureInfo {
                signature: record.signature,
                block_time: record.block_time,
                confirmation_status: record.confirmation_status,
                err: record.err.map(|err| err.to_string()),
            })
            .collect())
    }
}

#[cfg(test)]
/// These are ignored by default since they require devnet access to run.
mod live_rpc_tests {
    use super::*;

    #[tokio::test]
    #[ignore] // This test requires devnet access.
    /// Should fetch the balance of the system program account.
    async fn test_balance() {
        let handle = RpcHandle::new(Environment::Devnet);
        let system_program = Pubkey::from_str("11111111111111111111111111111111").unwrap();
        match handle.balance(&system_program).await {
            Ok(lamports) => println!("System program balance: {} lamports", lamports),
            Err(e) => panic!("Failed to fetch balance: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires devnet access.
    /// Should fetch a recent blockhash with an expiry height.
    async fn test_latest_block_ref() {
        let handle = RpcHandle::new(Environment::Devnet);
        match handle.latest_block_ref().await {
            Ok(block_ref) => {
                println!(
                    "Blockhash {} valid until height {}",
                    block_ref.blockhash, block_ref.last_valid_block_height
                );
                assert!(block_ref.last_valid_block_height > 0);
            }
            Err(e) => panic!("Failed to fetch block reference: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use solana_account_decoder::UiAccountEncoding;
    use solana_account_decoder::parse_account_data::ParsedAccount;

    fn parsed_payload(mint: &str, amount: &str, decimals: u64) -> UiAccountData {
        UiAccountData::Json(ParsedAccount {
            program: "spl-token-2022".to_string(),
            parsed: json!({
                "type": "account",
                "info": {
                    "mint": mint,
                    "owner": "Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS",
                    "state": "initialized",
                    "tokenAmount": {
                        "amount": amount,
                        "decimals": decimals,
                        "uiAmount": 1.5,
                        "uiAmountString": "1.5"
                    }
                }
            }),
            space: 182,
        })
    }

    #[test]
    /// Should extract mint, amount, and decimals from a jsonParsed payload.
    fn test_parse_token_account() {
        let data = parsed_payload("So11111111111111111111111111111111111111112", "1500000000", 9);
        let view = parse_token_account("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS", &data)
            .expect("payload should parse");
        assert_eq!(
            view.mint.to_string(),
            "So11111111111111111111111111111111111111112"
        );
        assert_eq!(view.amount, 1_500_000_000);
        assert_eq!(view.decimals, 9);
    }

    #[test]
    /// A payload missing the token amount should be rejected, not panic.
    fn test_parse_token_account_missing_amount() {
        let data = UiAccountData::Json(ParsedAccount {
            program: "spl-token-2022".to_string(),
            parsed: json!({
                "type": "account",
                "info": { "mint": "So11111111111111111111111111111111111111112" }
            }),
            space: 182,
        });
        assert!(parse_token_account("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS", &data).is_none());
    }

    #[test]
    /// Binary payloads are not parsed accounts and should be skipped.
    fn test_parse_token_account_binary_payload() {
        let data = UiAccountData::Binary("AAEC".to_string(), UiAccountEncoding::Base64);
        assert!(parse_token_account("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS", &data).is_none());
    }

    #[test]
    /// A malformed account pubkey should be rejected.
    fn test_parse_token_account_bad_pubkey() {
        let data = parsed_payload("So11111111111111111111111111111111111111112", "10", 0);
        assert!(parse_token_account("not-base58", &data).is_none());
    }
}
