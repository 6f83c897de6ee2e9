use async_trait::async_trait;
use bson::oid::ObjectId;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::database::schema::ResourceDocument;
use crate::database::utils::parse_resource_id;
use crate::database::ResourceStore;
use crate::error::StoreError;
use crate::models::resource::{NewResource, Resource, ResourceUpdate};

/// Process local [`ResourceStore`], used for demo mode and tests. Follows the
/// same validation, id and ordering rules as the MongoDB store.
#[derive(Default)]
pub struct MemoryStore {
    resources: RwLock<Vec<Resource>>,
}

impl MemoryStore {
    /// Store holding copies of `resources` under freshly assigned ids.
    pub fn seeded(resources: impl IntoIterator<Item = Resource>) -> Self {
        let resources: Vec<Resource> = resources
            .into_iter()
            .map(|resource| Resource {
                id: ObjectId::new().to_hex(),
                ..resource
            })
            .collect();
        info!("seeded memory store with {} resources", resources.len());
        Self {
            resources: RwLock::new(resources),
        }
    }
}

#[async_trait]
impl ResourceStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Resource>, StoreError> {
        let mut resources = self.resources.read().await.clone();
        resources.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(resources)
    }

    async fn create(&self, resource: NewResource) -> Result<Resource, StoreError> {
        resource.validate()?;
        let created: Resource = ResourceDocument::from_new(&resource)?.into();
        self.resources.write().await.push(created.clone());
        debug!("created resource with id: {}", created.id);
        Ok(created)
    }

    async fn get(&self, id: &str) -> Result<Option<Resource>, StoreError> {
        let id = parse_resource_id(id)?.to_hex();
        let resources = self.resources.read().await;
        Ok(resources.iter().find(|r| r.id == id).cloned())
    }

    async fn update(
        &self,
        id: &str,
        update: ResourceUpdate,
    ) -> Result<Option<Resource>, StoreError> {
        let id = parse_resource_id(id)?.to_hex();
        update.validate()?;
        let mut resources = self.resources.write().await;
        Ok(resources.iter_mut().find(|r| r.id == id).map(|resource| {
            update.apply_to(resource);
            resource.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let id = parse_resource_id(id)?.to_hex();
        let mut resources = self.resources.write().await;
        let before = resources.len();
        resources.retain(|r| r.id != id);
        Ok(resources.len() < before)
    }
}
