//! Application configuration.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Path of the keypair file used for a signing wallet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keypair_path: Option<String>,

    /// Base58 address used for a watch-only wallet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch_address: Option<String>,
}

/// Path of the config file under the user's home directory.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Home directory not available",
        )
    })?;
    Ok(home_path.join(".soldeck").join("config.json"))
}

impl Config {
    /// Create a Config remembering a keypair file.
    pub fn with_keypair(keypair_path: String) -> Self {
        Config {
            keypair_path: Some(keypair_path),
            watch_address: None,
        }
    }

    /// Create a Config remembering a watch-only address.
    pub fn with_watch_address(watch_address: String) -> Self {
        Config {
            keypair_path: None,
            watch_address: Some(watch_address),
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Remove the remembered wallet configuration, if present.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
