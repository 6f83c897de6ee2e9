use async_trait::async_trait;
use mongodb::Collection;

use crate::database::connection::{ConnectionManager, DbConfig, MongoConnector};
use crate::database::schema::ResourceDocument;
use crate::database::utils::parse_resource_id;
use crate::error::StoreError;
use crate::models::resource::{NewResource, Resource, ResourceUpdate};

pub mod commands;
pub mod connection;
pub mod memory;
pub mod queries;
pub mod schema;
pub mod utils;

/// Persistence contract shared by every backing store of the resource endpoints.
///
/// Implementations run schema validation themselves, so a store never holds a
/// record that breaks it. Malformed identifiers are reported as
/// [`StoreError::MalformedId`]; absent records as `None` / `false`.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// All resources, newest first.
    async fn list(&self) -> Result<Vec<Resource>, StoreError>;

    async fn create(&self, resource: NewResource) -> Result<Resource, StoreError>;

    async fn get(&self, id: &str) -> Result<Option<Resource>, StoreError>;

    async fn update(&self, id: &str, update: ResourceUpdate)
        -> Result<Option<Resource>, StoreError>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}

/// MongoDB backed store. The connection is opened on first use and shared by
/// all requests for the lifetime of the process.
pub struct DbConnection {
    connection: ConnectionManager<MongoConnector>,
}

impl DbConnection {
    pub fn new(config: &DbConfig) -> Self {
        Self {
            connection: ConnectionManager::new(MongoConnector::new(config.clone())),
        }
    }

    pub async fn collection(&self) -> Result<Collection<ResourceDocument>, StoreError> {
        self.connection.get().await
    }
}

#[async_trait]
impl ResourceStore for DbConnection {
    async fn list(&self) -> Result<Vec<Resource>, StoreError> {
        self.list_resources().await
    }

    async fn create(&self, resource: NewResource) -> Result<Resource, StoreError> {
        resource.validate()?;
        self.create_resource(&resource).await
    }

    async fn get(&self, id: &str) -> Result<Option<Resource>, StoreError> {
        let id = parse_resource_id(id)?;
        self.find_resource(id).await
    }

    async fn update(
        &self,
        id: &str,
        update: ResourceUpdate,
    ) -> Result<Option<Resource>, StoreError> {
        let id = parse_resource_id(id)?;
        update.validate()?;
        self.update_resource(id, &update).await
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let id = parse_resource_id(id)?;
        self.delete_resource(id).await
    }
}
