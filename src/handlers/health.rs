use axum::Json;
use serde_json::{json, Value};

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "API is running" }))
}

pub async fn version() -> Json<Value> {
    Json(json!({ "version": "1.1", "updatedAt": "2026-01-18" }))
}
