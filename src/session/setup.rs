//! Session setup and initialization

use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::keys;
use crate::rpc::{ChainRpc, RpcHandle};
use crate::wallet::{KeypairWallet, WalletPort, WatchWallet};
use std::error::Error;
use std::path::Path;
use std::sync::Arc;

/// Session data for both the dashboard and one-shot commands
pub struct SessionData {
    /// Environment the session talks to
    pub environment: Environment,
    /// RPC access to that environment
    pub rpc: Arc<dyn ChainRpc>,
    /// Wallet driving the session
    pub wallet: Arc<dyn WalletPort>,
}

/// Sets up a wallet session
///
/// This function handles the common setup required for both the dashboard
/// and one-shot modes:
/// 1. Resolves the wallet: explicit flags first, then the remembered config
/// 2. Creates the RPC handle for the chosen environment
/// 3. Returns session data for mode-specific handling
///
/// # Arguments
/// * `env` - Environment to connect to
/// * `keypair` - Optional keypair file path for a signing wallet
/// * `address` - Optional base58 address for a watch-only wallet
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - Session setup failed
pub fn setup_session(
    env: Environment,
    keypair: Option<String>,
    address: Option<String>,
) -> Result<SessionData, Box<dyn Error>> {
    let config_path = get_config_path()?;
    let wallet = resolve_wallet(keypair, address, &config_path)?;
    let rpc: Arc<dyn ChainRpc> = Arc::new(RpcHandle::new(env.clone()));
    Ok(SessionData {
        environment: env,
        rpc,
        wallet,
    })
}

/// Resolve the wallet for this invocation.
///
/// An explicit `--keypair` or `--address` wins and is remembered for the
/// next run; without flags the remembered configuration is used.
fn resolve_wallet(
    keypair: Option<String>,
    address: Option<String>,
    config_path: &Path,
) -> Result<Arc<dyn WalletPort>, Box<dyn Error>> {
    if let Some(path) = keypair {
        let wallet = KeypairWallet::load(Path::new(&path))?;
        remember(Config::with_keypair(path), config_path);
        return Ok(Arc::new(wallet));
    }
    if let Some(address) = address {
        let parsed = keys::parse_address(&address)
            .ok_or_else(|| format!("'{}' is not a valid base58 wallet address", address))?;
        remember(Config::with_watch_address(address), config_path);
        return Ok(Arc::new(WatchWallet::new(parsed)));
    }

    let config = Config::load_from_file(config_path).unwrap_or_default();
    if let Some(path) = config.keypair_path {
        return Ok(Arc::new(KeypairWallet::load(Path::new(&path))?));
    }
    if let Some(address) = config.watch_address {
        let parsed = keys::parse_address(&address).ok_or_else(|| {
            format!("Remembered watch address '{}' is not valid base58", address)
        })?;
        return Ok(Arc::new(WatchWallet::new(parsed)));
    }

    Err("No wallet configured. Pass --keypair <FILE> to sign with a local keypair, \
         or --address <PUBKEY> to watch an address."
        .into())
}

/// Remember an explicitly chosen wallet so later runs can omit the flags.
/// A failure to persist is reported but does not block the session.
fn remember(config: Config, path: &Path) {
    if let Err(e) = config.save(path) {
        crate::print_cmd_warn!("Config", "Could not remember wallet choice: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::{Keypair, write_keypair_file};
    use solana_sdk::signer::Signer;
    use tempfile::tempdir;

    const WATCH_ADDRESS: &str = "Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS";

    #[test]
    /// An explicit keypair flag yields a signing wallet and is remembered.
    fn keypair_flag_resolves_and_is_remembered() {
        let dir = tempdir().unwrap();
        let keypair_path = dir.path().join("id.json");
        let config_path = dir.path().join("config.json");

        let keypair = Keypair::new();
        write_keypair_file(&keypair, &keypair_path).unwrap();

        let wallet = resolve_wallet(
            Some(keypair_path.to_string_lossy().into_owned()),
            None,
            &config_path,
        )
        .unwrap();
        assert_eq!(wallet.address(), keypair.pubkey());
        assert!(wallet.can_sign_transaction());

        let remembered = Config::load_from_file(&config_path).unwrap();
        assert_eq!(
            remembered.keypair_path.as_deref(),
            Some(keypair_path.to_string_lossy().as_ref())
        );
    }

    #[test]
    /// An explicit address flag yields a watch-only wallet.
    fn address_flag_resolves_watch_only() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");

        let wallet =
            resolve_wallet(None, Some(WATCH_ADDRESS.to_string()), &config_path).unwrap();
        assert_eq!(wallet.address().to_string(), WATCH_ADDRESS);
        assert!(!wallet.can_sign_message());
        assert!(!wallet.can_sign_transaction());

        let remembered = Config::load_from_file(&config_path).unwrap();
        assert_eq!(remembered.watch_address.as_deref(), Some(WATCH_ADDRESS));
    }

    #[test]
    /// Without flags the remembered watch address is used.
    fn remembered_config_is_used_without_flags() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        Config::with_watch_address(WATCH_ADDRESS.to_string())
            .save(&config_path)
            .unwrap();

        let wallet = resolve_wallet(None, None, &config_path).unwrap();
        assert_eq!(wallet.address().to_string(), WATCH_ADDRESS);
    }

    #[test]
    /// No flags and no remembered wallet is an error that names the flags.
    fn missing_wallet_reports_the_flags() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");

        let error = resolve_wallet(None, None, &config_path).unwrap_err();
        assert!(error.to_string().contains("--keypair"));
        assert!(error.to_string().contains("--address"));
    }

    #[test]
    fn invalid_address_flag_is_rejected() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");

        let error =
            resolve_wallet(None, Some("not-base58".to_string()), &config_path).unwrap_err();
        assert!(error.to_string().contains("not-base58"));
        // Nothing gets remembered on a failed resolution.
        assert!(!config_path.exists());
    }
}
