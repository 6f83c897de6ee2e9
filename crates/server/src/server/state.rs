use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::config::{AppConfig, StoreKind};
use crate::database::memory::MemoryStore;
use crate::database::{DbConnection, ResourceStore};
use crate::mock::{resource_fixtures, MockApi};

pub struct AppState {
    pub config: AppConfig,
    pub resources: Arc<dyn ResourceStore>,
    /// Present in demo mode only.
    pub mock: Option<MockApi>,
}

impl AppState {
    pub fn try_init(config: &AppConfig, store: StoreKind) -> anyhow::Result<Self> {
        match store {
            StoreKind::Mongo => {
                config.require_connection_string()?;
                info!("serving resources from mongodb, connecting on first request");
                Ok(Self::with_store(config, Arc::new(DbConnection::new(&config.database))))
            }
            StoreKind::Memory => {
                info!("serving resources from memory with demo fixtures");
                let resources = Arc::new(MemoryStore::seeded(resource_fixtures(Utc::now())));
                Ok(Self {
                    mock: Some(MockApi::new(config.mock.latency())),
                    ..Self::with_store(config, resources)
                })
            }
        }
    }

    pub fn with_store(config: &AppConfig, resources: Arc<dyn ResourceStore>) -> Self {
        Self {
            config: config.clone(),
            resources,
            mock: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mongo_store_needs_a_connection_string() {
        assert!(AppState::try_init(&AppConfig::default(), StoreKind::Mongo).is_err());
    }

    #[test]
    fn memory_store_enables_mock_api() {
        let state = AppState::try_init(&AppConfig::default(), StoreKind::Memory).unwrap();
        assert!(state.mock.is_some());
    }

    #[test]
    fn mongo_store_is_lazy() {
        let mut config = AppConfig::default();
        config.database.uri = Some("mongodb://127.0.0.1:1/vrs".to_string());
        let state = AppState::try_init(&config, StoreKind::Mongo).unwrap();
        assert!(state.mock.is_none());
    }
}
