use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};

use crate::error::RequestError;
use crate::models::resource::{NewResource, Resource, ResourceUpdate};
use crate::models::response::ApiResponse;
use crate::server::state::AppState;

pub async fn list_resources(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Resource>>>, RequestError> {
    let resources = state.resources.list().await?;
    Ok(Json(ApiResponse::ok(resources)))
}

pub async fn create_resource(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewResource>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Resource>>), RequestError> {
    let Json(candidate) = payload.map_err(malformed_body)?;
    let resource = state.resources.create(candidate).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(resource))))
}

pub async fn get_resource(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Resource>>, RequestError> {
    let resource = state
        .resources
        .get(&id)
        .await?
        .ok_or(RequestError::NotFound)?;
    Ok(Json(ApiResponse::ok(resource)))
}

pub async fn update_resource(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<ResourceUpdate>, JsonRejection>,
) -> Result<Json<ApiResponse<Resource>>, RequestError> {
    let Json(update) = payload.map_err(malformed_body)?;
    let resource = state
        .resources
        .update(&id, update)
        .await?
        .ok_or(RequestError::NotFound)?;
    Ok(Json(ApiResponse::ok(resource)))
}

/// Deleting an id that matches nothing still succeeds, only a malformed id or a
/// store failure is reported.
pub async fn delete_resource(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Map<String, Value>>>, RequestError> {
    state.resources.delete(&id).await?;
    Ok(Json(ApiResponse::ok(Map::new())))
}

pub async fn unsupported_method() -> RequestError {
    RequestError::UnsupportedMethod
}

pub fn malformed_body(rejection: JsonRejection) -> RequestError {
    RequestError::MalformedBody(rejection.body_text())
}
