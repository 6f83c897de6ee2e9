use bson::oid::ObjectId;
use bson::{doc, Document};
use mongodb::options::ReturnDocument;
use mongodb::Collection;
use tracing::{debug, info, instrument};

use crate::database::queries::find_resource_by_id;
use crate::database::schema::ResourceDocument;
use crate::database::DbConnection;
use crate::error::StoreError;
use crate::models::resource::{parse_user_reference, NewResource, Resource, ResourceUpdate};

impl DbConnection {
    pub async fn create_resource(&self, resource: &NewResource) -> Result<Resource, StoreError> {
        insert_resource(&self.collection().await?, resource).await
    }

    pub async fn update_resource(
        &self,
        id: ObjectId,
        update: &ResourceUpdate,
    ) -> Result<Option<Resource>, StoreError> {
        update_resource_by_id(&self.collection().await?, id, update).await
    }

    pub async fn delete_resource(&self, id: ObjectId) -> Result<bool, StoreError> {
        delete_resource_by_id(&self.collection().await?, id).await
    }
}

#[instrument(skip_all)]
pub async fn insert_resource(
    collection: &Collection<ResourceDocument>,
    resource: &NewResource,
) -> Result<Resource, StoreError> {
    let document = ResourceDocument::from_new(resource)?;
    collection.insert_one(&document).await?;
    info!("created resource with id: {}", document.id);
    Ok(document.into())
}

#[instrument(skip(collection, update))]
pub async fn update_resource_by_id(
    collection: &Collection<ResourceDocument>,
    id: ObjectId,
    update: &ResourceUpdate,
) -> Result<Option<Resource>, StoreError> {
    if update.is_empty() {
        // `$set` refuses an empty document
        return find_resource_by_id(collection, id).await;
    }
    let document = collection
        .find_one_and_update(doc! { "_id": id }, doc! { "$set": set_fields(update)? })
        .return_document(ReturnDocument::After)
        .await?;
    Ok(document.map(Resource::from))
}

#[instrument(skip(collection))]
pub async fn delete_resource_by_id(
    collection: &Collection<ResourceDocument>,
    id: ObjectId,
) -> Result<bool, StoreError> {
    let result = collection.delete_one(doc! { "_id": id }).await?;
    if result.deleted_count == 0 {
        debug!("no resource to delete with id: {id}");
    }
    Ok(result.deleted_count > 0)
}

fn set_fields(update: &ResourceUpdate) -> Result<Document, StoreError> {
    let mut fields = Document::new();
    if let Some(title) = &update.title {
        fields.insert("title", title.as_str());
    }
    if let Some(kind) = &update.kind {
        fields.insert("type", kind.as_str());
    }
    if let Some(downloads) = update.downloads {
        fields.insert("downloads", i64::from(downloads));
    }
    if let Some(uploaded_by) = &update.uploaded_by {
        fields.insert("uploadedBy", parse_user_reference(uploaded_by)?);
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_fields_only_contains_given_fields() {
        let update = ResourceUpdate {
            kind: Some("Video".to_string()),
            downloads: Some(1),
            ..Default::default()
        };
        let fields = set_fields(&update).unwrap();
        assert_eq!(fields, doc! { "type": "Video", "downloads": 1_i64 });
    }

    #[test]
    fn set_fields_stores_uploader_as_object_id() {
        let uploader = ObjectId::new();
        let update = ResourceUpdate {
            uploaded_by: Some(uploader.to_hex()),
            ..Default::default()
        };
        let fields = set_fields(&update).unwrap();
        assert_eq!(fields.get_object_id("uploadedBy").unwrap(), uploader);
    }
}
