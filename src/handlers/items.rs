use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::Item,
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_items(State(state): State<AppState>) -> (StatusCode, Json<Vec<Item>>) {
    let items = state.items.read().await.all();
    info!(count = items.len(), "Listed items");
    (StatusCode::OK, Json(items))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<(StatusCode, Json<Item>)> {
    // A non-numeric path segment keeps the {"error": ...} body contract
    // instead of axum's plain-text rejection.
    let Path(id) = id.map_err(|_| AppError::BadRequest("Invalid item ID".to_string()))?;

    let item = state
        .items
        .read()
        .await
        .find(id)
        .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

    info!(id, "Fetched item");
    Ok((StatusCode::OK, Json(item)))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_item(
    State(state): State<AppState>,
    Json(item): Json<Item>,
) -> (StatusCode, Json<Item>) {
    state.items.write().await.append(item.clone());
    info!(id = item.id, name = %item.name, "Created item");
    (StatusCode::CREATED, Json(item))
}
