use bson::oid::ObjectId;
use bson::{doc, DateTime};
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::StoreError;
use crate::models::resource::{parse_user_reference, NewResource, Resource};

pub const RESOURCES_COLLECTION: &str = "resources";

/// Stored shape of a [`Resource`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub downloads: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_by: Option<ObjectId>,
    pub created_at: DateTime,
}

impl ResourceDocument {
    /// Builds the document for a validated candidate, assigning its id and
    /// creation time.
    pub fn from_new(resource: &NewResource) -> Result<Self, StoreError> {
        let uploaded_by = resource
            .uploaded_by
            .as_deref()
            .map(parse_user_reference)
            .transpose()?;
        Ok(Self {
            id: ObjectId::new(),
            title: resource.title.clone(),
            kind: resource.kind.clone(),
            downloads: 0,
            uploaded_by,
            created_at: DateTime::now(),
        })
    }
}

impl From<ResourceDocument> for Resource {
    fn from(document: ResourceDocument) -> Self {
        Self {
            id: document.id.to_hex(),
            title: document.title,
            kind: document.kind,
            downloads: document.downloads,
            uploaded_by: document.uploaded_by.map(|id| id.to_hex()),
            created_at: document.created_at.to_chrono(),
        }
    }
}

/// Sort order of the listing, newest first with ties broken by id.
pub fn newest_first() -> bson::Document {
    doc! { "createdAt": -1, "_id": -1 }
}

#[instrument(skip_all)]
pub async fn create_indexes(collection: &Collection<ResourceDocument>) -> Result<(), StoreError> {
    let index = IndexModel::builder().keys(newest_first()).build();
    collection.create_index(index).await?;
    Ok(())
}

#[cfg(test)]
#[instrument(skip_all)]
pub async fn drop_all(collection: &Collection<ResourceDocument>) -> Result<(), StoreError> {
    collection.drop().await?;
    Ok(())
}
