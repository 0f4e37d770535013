//! Handles settings for the application. Configuration is written in
//! `spesa.toml`; every key has a default so the file is optional.

use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    /// Path of the JSON snapshot file. Omit to keep the ledger memory-only.
    pub snapshot: Option<String>,
    /// Starting balance for a fresh ledger, e.g. `"5000"` or `"5000.00"`.
    pub initial_balance: Option<String>,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: None,
            port: 3000,
            snapshot: None,
            initial_balance: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    #[serde(default)]
    pub server: Server,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("spesa").required(false))
            .build()?;

        settings.try_deserialize()
    }
}
