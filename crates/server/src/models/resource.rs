use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Hex encoded store identifier.
pub type ResourceId = String;

pub const RESOURCE_TITLE_LENGTH_LIMIT: usize = 60;

/// A shared learning resource, as returned by every store and by the mock layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: ResourceId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub downloads: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Candidate record accepted by the create operation.
///
/// Missing `title` or `type` deserialize as empty strings so that they are
/// rejected by [`NewResource::validate`] like any other empty value. Fields
/// outside the schema (`downloads`, `createdAt`, `id`) are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResource {
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub uploaded_by: Option<String>,
}

impl NewResource {
    pub fn new(title: &str, kind: &str) -> Self {
        Self {
            title: title.to_string(),
            kind: kind.to_string(),
            uploaded_by: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_resource_title(&self.title)?;
        validate_resource_kind(&self.kind)?;
        if let Some(uploaded_by) = &self.uploaded_by {
            validate_user_reference(uploaded_by)?;
        }
        Ok(())
    }
}

/// Partial field set accepted by the update operation. `id` and `createdAt`
/// are not part of it and therefore can't be changed.
///
/// An explicit `null` for `title` or `type` clears the field, which makes it
/// fail the required check instead of being skipped.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUpdate {
    #[serde(default, deserialize_with = "null_as_cleared")]
    pub title: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "null_as_cleared")]
    pub kind: Option<String>,
    pub downloads: Option<u32>,
    pub uploaded_by: Option<String>,
}

impl ResourceUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            validate_resource_title(title)?;
        }
        if let Some(kind) = &self.kind {
            validate_resource_kind(kind)?;
        }
        if let Some(uploaded_by) = &self.uploaded_by {
            validate_user_reference(uploaded_by)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.kind.is_none()
            && self.downloads.is_none()
            && self.uploaded_by.is_none()
    }

    pub fn apply_to(&self, resource: &mut Resource) {
        if let Some(title) = &self.title {
            resource.title.clone_from(title);
        }
        if let Some(kind) = &self.kind {
            resource.kind.clone_from(kind);
        }
        if let Some(downloads) = self.downloads {
            resource.downloads = downloads;
        }
        if let Some(uploaded_by) = &self.uploaded_by {
            resource.uploaded_by = Some(uploaded_by.clone());
        }
    }
}

fn null_as_cleared<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(Option::<String>::deserialize(deserializer)?.unwrap_or_default()))
}

pub fn validate_resource_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::Required { field: "title" });
    }
    let length = title.chars().count();
    if length > RESOURCE_TITLE_LENGTH_LIMIT {
        return Err(ValidationError::TooLong {
            field: "title",
            limit: RESOURCE_TITLE_LENGTH_LIMIT,
            actual: length,
        });
    }
    Ok(())
}

pub fn validate_resource_kind(kind: &str) -> Result<(), ValidationError> {
    if kind.is_empty() {
        return Err(ValidationError::Required { field: "type" });
    }
    Ok(())
}

pub fn validate_user_reference(user_id: &str) -> Result<(), ValidationError> {
    parse_user_reference(user_id).map(|_| ())
}

pub fn parse_user_reference(user_id: &str) -> Result<ObjectId, ValidationError> {
    ObjectId::parse_str(user_id).map_err(|e| ValidationError::InvalidInput {
        value: user_id.to_string(),
        reason: format!("uploadedBy must be a user id: {e}"),
    })
}
