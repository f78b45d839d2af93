use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{Item, ItemBody, ItemChanges, NewItem};
use crate::AppState;

/// An id that is not a UUID is a client error and never reaches the store.
fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::InvalidId)
}

/// `name` is required and non-empty. Validated before any storage call.
fn required_name(body: ItemBody) -> Result<String, ApiError> {
    match body.name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(ApiError::NameRequired),
    }
}

pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state
        .store
        .list()
        .await
        .map_err(ApiError::storage(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server error",
        ))?;
    Ok(Json(items))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let id = parse_id(&id)?;
    let item = state.store.get(id).await.map_err(ApiError::storage(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Server error",
    ))?;
    Ok(Json(item))
}

pub async fn create_item(
    State(state): State<AppState>,
    Json(body): Json<ItemBody>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let name = required_name(body)?;
    let item = state
        .store
        .create(NewItem { name })
        .await
        .map_err(ApiError::storage(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Create failed",
        ))?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn replace_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ItemBody>,
) -> Result<Json<Item>, ApiError> {
    let id = parse_id(&id)?;
    let name = required_name(body)?;
    let item = state
        .store
        .replace(id, name)
        .await
        .map_err(ApiError::storage(StatusCode::BAD_REQUEST, "Update failed"))?;
    Ok(Json(item))
}

pub async fn patch_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ItemBody>,
) -> Result<Json<Item>, ApiError> {
    let id = parse_id(&id)?;
    // A supplied name must still be non-empty; an absent one is fine.
    let changes = match body.name {
        Some(name) if name.is_empty() => return Err(ApiError::NameRequired),
        name => ItemChanges { name },
    };
    let item = state
        .store
        .patch(id, changes)
        .await
        .map_err(ApiError::storage(StatusCode::BAD_REQUEST, "Patch failed"))?;
    Ok(Json(item))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state
        .store
        .delete(id)
        .await
        .map_err(ApiError::storage(StatusCode::BAD_REQUEST, "Delete failed"))?;
    Ok(StatusCode::NO_CONTENT)
}
