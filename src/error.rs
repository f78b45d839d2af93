use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::store::StoreError;

/// Request-boundary error taxonomy. Every failure a handler can see maps to
/// one of these; nothing propagates past the response.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Path identifier is not a valid UUID.
    #[error("Invalid ID")]
    InvalidId,
    /// Well-formed identifier with no matching record.
    #[error("Item not found")]
    NotFound,
    /// Required `name` missing or empty.
    #[error("Name is required")]
    NameRequired,
    /// Storage fault, reported with the route's message and status.
    #[error("{message}")]
    Storage {
        status: StatusCode,
        message: &'static str,
    },
}

impl ApiError {
    /// Maps a store error to the route's failure contract: not-found stays
    /// 404, anything else is logged and reported as `message`.
    pub fn storage(
        status: StatusCode,
        message: &'static str,
    ) -> impl FnOnce(StoreError) -> ApiError {
        move |err| match err {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Fault(e) => {
                tracing::error!("storage fault: {e:#}");
                ApiError::Storage { status, message }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Item not found" })),
            )
                .into_response(),
            ApiError::InvalidId => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid ID" })),
            )
                .into_response(),
            ApiError::NameRequired => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Name is required" })),
            )
                .into_response(),
            ApiError::Storage { status, message } => {
                (status, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_404() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_id_and_missing_name_are_400() {
        assert_eq!(
            ApiError::InvalidId.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NameRequired.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn storage_mapper_keeps_not_found_distinct() {
        let map = ApiError::storage(StatusCode::BAD_REQUEST, "Update failed");
        match map(StoreError::NotFound) {
            ApiError::NotFound => {}
            other => panic!("expected NotFound, got {other:?}"),
        }

        let map = ApiError::storage(StatusCode::BAD_REQUEST, "Update failed");
        match map(StoreError::Fault(anyhow::anyhow!("connection refused"))) {
            ApiError::Storage { status, message } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "Update failed");
            }
            other => panic!("expected Storage, got {other:?}"),
        }
    }
}
