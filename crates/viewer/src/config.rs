//! Configuration management using config.toml

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use shelfware_core::{Result, ShelfwareError};

const CONFIG_PATH: &str = "config.toml";

const DEFAULT_SERVER_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Base URL of the library service
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Seconds before a games or dashboard request is abandoned
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Known-public profiles offered as search examples
    #[serde(default = "default_example_ids")]
    pub example_steam_ids: Vec<String>,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_example_ids() -> Vec<String> {
    vec![
        "76561198010872093".to_string(),
        "76561197960435530".to_string(),
        "76561198000000000".to_string(),
    ]
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            request_timeout_secs: default_timeout_secs(),
            example_steam_ids: default_example_ids(),
        }
    }
}

impl ViewerConfig {
    /// Load config from file, creating the default one if it doesn't exist
    pub fn load() -> Self {
        if Path::new(CONFIG_PATH).exists() {
            match fs::read_to_string(CONFIG_PATH) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Error parsing config.toml: {}", e);
                    }
                },
                Err(e) => {
                    eprintln!("Error reading config.toml: {}", e);
                }
            }
        }

        let config = ViewerConfig::default();
        let _ = config.save(); // Try to create the file
        config
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ShelfwareError::Config(e.to_string()))?;
        fs::write(CONFIG_PATH, content).map_err(|e| ShelfwareError::Config(e.to_string()))?;
        Ok(())
    }

    /// Request timeout for the games and dashboard calls
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
