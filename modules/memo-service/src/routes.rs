//! Axum route handlers for the memo REST API.

use crate::store::MemoStore;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use memo_types::{Memo, MemoPayload};
use std::sync::Arc;

pub struct AppState {
    pub store: MemoStore,
}

type ApiError = (StatusCode, &'static str);

const INVALID_BODY: ApiError = (StatusCode::BAD_REQUEST, "Invalid request body");
const NOT_FOUND: ApiError = (StatusCode::NOT_FOUND, "Memo not found");

/// Methods other than the ones registered here get 405 from the method
/// router; unknown paths get 404. `/memos/` is the item route with an empty
/// id, so it answers like any id that matches nothing.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/memos", get(list_memos).post(create_memo))
        .route(
            "/memos/",
            get(get_blank_memo).put(update_blank_memo).delete(delete_blank_memo),
        )
        .route(
            "/memos/:id",
            get(get_memo).put(update_memo).delete(delete_memo),
        )
        .with_state(state)
        .layer(tower_http::cors::CorsLayer::permissive())
}

// GET /memos
pub async fn list_memos(State(state): State<Arc<AppState>>) -> Json<Vec<Memo>> {
    Json(state.store.list())
}

// POST /memos
pub async fn create_memo(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Memo>), ApiError> {
    let payload = MemoPayload::from_slice(&body).map_err(|_| INVALID_BODY)?;
    match state.store.create(payload) {
        Ok(memo) => Ok((StatusCode::CREATED, Json(memo))),
        Err(e) => {
            log::error!("Create failed: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Failed to save memo"))
        }
    }
}

// GET /memos/:id
pub async fn get_memo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Memo>, ApiError> {
    fetch(&state, &id)
}

// PUT /memos/:id
pub async fn update_memo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Memo>, ApiError> {
    replace(&state, &id, &body)
}

// DELETE /memos/:id
pub async fn delete_memo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    remove(&state, &id)
}

// GET /memos/
async fn get_blank_memo(State(state): State<Arc<AppState>>) -> Result<Json<Memo>, ApiError> {
    fetch(&state, "")
}

// PUT /memos/
async fn update_blank_memo(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Memo>, ApiError> {
    replace(&state, "", &body)
}

// DELETE /memos/
async fn delete_blank_memo(State(state): State<Arc<AppState>>) -> Result<StatusCode, ApiError> {
    remove(&state, "")
}

fn fetch(state: &AppState, id: &str) -> Result<Json<Memo>, ApiError> {
    state.store.get(id).map(Json).ok_or(NOT_FOUND)
}

fn replace(state: &AppState, id: &str, body: &[u8]) -> Result<Json<Memo>, ApiError> {
    let payload = MemoPayload::from_slice(body).map_err(|_| INVALID_BODY)?;
    match state.store.update(id, payload) {
        Ok(Some(memo)) => Ok(Json(memo)),
        Ok(None) => Err(NOT_FOUND),
        Err(e) => {
            log::error!("Update of {} failed: {}", id, e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Failed to save memo"))
        }
    }
}

fn remove(state: &AppState, id: &str) -> Result<StatusCode, ApiError> {
    match state.store.delete(id) {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(NOT_FOUND),
        Err(e) => {
            log::error!("Delete of {} failed: {}", id, e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Failed to save changes"))
        }
    }
}
