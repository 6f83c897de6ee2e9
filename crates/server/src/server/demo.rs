//! HTTP surface of the mock API, mounted in demo mode.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::{RequestError, StoreError};
use crate::mock::MockApi;
use crate::models::resource::{validate_resource_kind, validate_resource_title, NewResource, Resource};
use crate::models::response::ApiResponse;
use crate::models::user::{Profile, Statistics, User};
use crate::server::resources::{malformed_body, unsupported_method};
use crate::server::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/resources",
            get(list_resources)
                .post(upload_resource)
                .fallback(unsupported_method),
        )
        .route(
            "/profile",
            get(get_profile)
                .put(update_profile)
                .fallback(unsupported_method),
        )
        .route("/users", get(list_users).fallback(unsupported_method))
        .route("/statistics", get(get_statistics).fallback(unsupported_method))
}

fn mock_api(state: &AppState) -> Result<&MockApi, RequestError> {
    state.mock.as_ref().ok_or(RequestError::NotFound)
}

pub async fn list_resources(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<Resource>>>, RequestError> {
    let mock = mock_api(&state)?;
    let resources = match query.q.as_deref() {
        Some(q) if !q.is_empty() => mock.search_resources(q).await,
        _ => mock.get_resources().await,
    };
    Ok(Json(ApiResponse::ok(resources)))
}

pub async fn upload_resource(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewResource>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Resource>>), RequestError> {
    let mock = mock_api(&state)?;
    let Json(candidate) = payload.map_err(malformed_body)?;
    // the dashboard only checks presence before uploading
    validate_resource_title(&candidate.title)
        .and_then(|()| validate_resource_kind(&candidate.kind))
        .map_err(StoreError::from)?;
    let resource = mock.upload_resource(candidate).await;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(resource))))
}

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Profile>>, RequestError> {
    let profile = mock_api(&state)?.get_user_profile().await;
    Ok(Json(ApiResponse::ok(profile)))
}

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Profile>, JsonRejection>,
) -> Result<Json<ApiResponse<Profile>>, RequestError> {
    let mock = mock_api(&state)?;
    let Json(profile) = payload.map_err(malformed_body)?;
    Ok(Json(ApiResponse::ok(mock.update_user_profile(profile).await)))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<User>>>, RequestError> {
    let users = mock_api(&state)?.get_users().await;
    Ok(Json(ApiResponse::ok(users)))
}

pub async fn get_statistics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Statistics>>, RequestError> {
    let statistics = mock_api(&state)?.get_statistics().await;
    Ok(Json(ApiResponse::ok(statistics)))
}
