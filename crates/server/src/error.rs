use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{debug, error};

use crate::models::response::ApiResponse;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("requested resource doesn't exist")]
    NotFound,
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error("method is not supported on this route")]
    UnsupportedMethod,
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Clone, Debug, Error)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("malformed resource id: `{0}`")]
    MalformedId(String),
    #[error("could not connect to the document store: {0}")]
    Connection(String),
    #[error("mongodb error: {0}")]
    Mongo(Arc<mongodb::error::Error>),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        Self::Mongo(Arc::new(e))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field `{field}` is required")]
    Required { field: &'static str },
    #[error("field `{field}` cannot be longer than {limit} chars, got {actual}")]
    TooLong {
        field: &'static str,
        limit: usize,
        actual: usize,
    },
    #[error("input value is invalid: `{value}`, reason: {reason}")]
    InvalidInput { value: String, reason: String },
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        // callers only ever see `{success: false}`, the cause stays in the logs
        let status = match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(StoreError::Connection(ref e)) => {
                error!("document store unavailable for user request: {e}");
                StatusCode::BAD_REQUEST
            }
            Self::Store(StoreError::Mongo(ref e)) => {
                error!("received store error for user request: {e}");
                StatusCode::BAD_REQUEST
            }
            ref e => {
                debug!("rejected user request: {e}");
                StatusCode::BAD_REQUEST
            }
        };
        (status, Json(ApiResponse::failure())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = RequestError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn everything_else_collapses_to_400() {
        let errors = [
            RequestError::MalformedBody("expected value".to_string()),
            RequestError::UnsupportedMethod,
            StoreError::MalformedId("nope".to_string()).into(),
            StoreError::Connection("server selection timeout".to_string()).into(),
            StoreError::Validation(ValidationError::Required { field: "title" }).into(),
        ];
        for e in errors {
            assert_eq!(e.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }
}
