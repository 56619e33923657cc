use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the Solana clusters the dashboard can point at.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Main network. Airdrops are unavailable here.
    Mainnet,
    /// Public development cluster with faucet support.
    #[default]
    Devnet,
    /// Public test cluster.
    Testnet,
    /// Local test validator.
    Localnet,
    /// Any other RPC endpoint, supplied by the user.
    Custom { rpc_url: String },
}

impl Environment {
    /// Returns the RPC endpoint URL associated with this cluster.
    pub fn rpc_url(&self) -> String {
        match self {
            Environment::Mainnet => "https://api.mainnet-beta.solana.com".to_string(),
            Environment::Devnet => "https://api.devnet.solana.com".to_string(),
            Environment::Testnet => "https://api.testnet.solana.com".to_string(),
            Environment::Localnet => "http://localhost:8899".to_string(),
            Environment::Custom { rpc_url } => rpc_url.clone(),
        }
    }

    /// Whether the cluster is expected to honor airdrop requests.
    pub fn supports_airdrop(&self) -> bool {
        !matches!(self, Environment::Mainnet)
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "mainnet-beta" => Ok(Environment::Mainnet),
            "devnet" => Ok(Environment::Devnet),
            "testnet" => Ok(Environment::Testnet),
            "localnet" | "local" => Ok(Environment::Localnet),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Mainnet => write!(f, "Mainnet"),
            Environment::Devnet => write!(f, "Devnet"),
            Environment::Testnet => write!(f, "Testnet"),
            Environment::Localnet => write!(f, "Localnet"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.rpc_url())
    }
}
