use bson::doc;
use bson::oid::ObjectId;
use futures::TryStreamExt;
use mongodb::Collection;
use tracing::instrument;

use crate::database::schema::{newest_first, ResourceDocument};
use crate::database::DbConnection;
use crate::error::StoreError;
use crate::models::resource::Resource;

impl DbConnection {
    pub async fn list_resources(&self) -> Result<Vec<Resource>, StoreError> {
        list_resources_newest_first(&self.collection().await?).await
    }

    pub async fn find_resource(&self, id: ObjectId) -> Result<Option<Resource>, StoreError> {
        find_resource_by_id(&self.collection().await?, id).await
    }
}

#[instrument(skip_all)]
pub async fn list_resources_newest_first(
    collection: &Collection<ResourceDocument>,
) -> Result<Vec<Resource>, StoreError> {
    let documents: Vec<ResourceDocument> = collection
        .find(doc! {})
        .sort(newest_first())
        .await?
        .try_collect()
        .await?;
    Ok(documents.into_iter().map(Resource::from).collect())
}

#[instrument(skip(collection))]
pub async fn find_resource_by_id(
    collection: &Collection<ResourceDocument>,
    id: ObjectId,
) -> Result<Option<Resource>, StoreError> {
    let document = collection.find_one(doc! { "_id": id }).await?;
    Ok(document.map(Resource::from))
}
