use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::database::connection::DbConfig;
use crate::mock::DEFAULT_LATENCY;

pub const MONGODB_URI_ENV: &str = "MONGODB_URI";
pub const DATABASE_ENV: &str = "VRS_DATABASE";
pub const SERVER_ADDRESS_ENV: &str = "VRS_SERVER_ADDRESS";

/// Backing store for the resource endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// MongoDB, addressed by the configured connection string
    Mongo,
    /// In-process store seeded with demo fixtures, also serves the mock API
    Memory,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:3000".to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    pub latency_ms: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY.as_millis() as u64,
        }
    }
}

impl MockConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DbConfig,
    #[serde(default)]
    pub mock: MockConfig,
}

impl AppConfig {
    pub fn from_yaml_file<P: Into<PathBuf>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.into();
        let content = read_to_string(&path).with_context(|| format!("path: {path:?}"))?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Reads `path` when it exists, then applies environment overrides.
    pub fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let mut config = if path.exists() {
            Self::from_yaml_file(path)?
        } else {
            info!("no config file at {path:?}, using defaults");
            Self::default()
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(uri) = lookup(MONGODB_URI_ENV).filter(|v| !v.is_empty()) {
            self.database.uri = Some(uri);
        }
        if let Some(database) = lookup(DATABASE_ENV).filter(|v| !v.is_empty()) {
            self.database.database = Some(database);
        }
        if let Some(address) = lookup(SERVER_ADDRESS_ENV).filter(|v| !v.is_empty()) {
            self.server.address = address;
        }
    }

    /// The connection string has no built in fallback, running against MongoDB
    /// without one is a startup error.
    pub fn require_connection_string(&self) -> Result<&str, anyhow::Error> {
        self.database
            .uri
            .as_deref()
            .filter(|uri| !uri.is_empty())
            .with_context(|| {
                format!("no MongoDB connection string configured, set {MONGODB_URI_ENV} or database.uri")
            })
    }
}
