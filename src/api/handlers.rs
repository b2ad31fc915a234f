use super::error::{ApiError, ERR_EMPTY_CREATE, ERR_EMPTY_REPLACE, ERR_NOT_ARRAY};
use super::protocol::{DeleteResponse, ErrorBody, HealthResponse, StickySetResponse};
use crate::store::handle::StoreHandle;
use crate::store::types::SetId;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde_json::Value;

/// Creates a new sticky set from a non-empty JSON array of note values.
///
/// This is the only way a set comes into existence; both timestamps start at
/// the current time and the generated id is returned to the caller.
pub async fn create_set(
    State(handle): State<StoreHandle>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<StickySetResponse>), ApiError> {
    let stickies = sticky_array(body, ERR_EMPTY_CREATE)?;

    let store = handle.acquire().await;
    let set = store.create(stickies)?;

    tracing::info!("Created sticky set {} ({} notes)", set.id, set.stickies.len());
    Ok((StatusCode::CREATED, Json(set.into())))
}

/// Returns a set by id, advancing its `last_accessed` timestamp.
pub async fn fetch_set(
    State(handle): State<StoreHandle>,
    Path(raw_id): Path<String>,
) -> Result<Json<StickySetResponse>, ApiError> {
    let id = SetId::parse(&raw_id).ok_or(ApiError::InvalidId)?;

    let store = handle.acquire().await;
    let set = store.fetch(&id)?;

    Ok(Json(set.into()))
}

/// Replaces a set's note sequence wholesale.
///
/// An empty array is rejected; clients that want to empty a set are directed
/// to DELETE instead, so a persisted set always holds at least one note.
pub async fn replace_set(
    State(handle): State<StoreHandle>,
    Path(raw_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<StickySetResponse>, ApiError> {
    let id = SetId::parse(&raw_id).ok_or(ApiError::InvalidId)?;
    let stickies = sticky_array(body, ERR_EMPTY_REPLACE)?;

    let store = handle.acquire().await;
    let set = store.replace(&id, stickies)?;

    Ok(Json(set.into()))
}

/// Permanently removes a set, reporting its id and former note count.
pub async fn delete_set(
    State(handle): State<StoreHandle>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = SetId::parse(&raw_id).ok_or(ApiError::InvalidId)?;

    let store = handle.acquire().await;
    let set = store.remove(&id)?;

    tracing::info!("Deleted sticky set {} ({} notes)", set.id, set.stickies.len());
    Ok(Json(DeleteResponse {
        message: "Stickies deleted successfully".to_string(),
        id: set.id,
        stickies_count: set.stickies.len(),
    }))
}

/// Aggregate statistics: set count, total note count, and the five most
/// recently accessed sets.
pub async fn health(
    State(handle): State<StoreHandle>,
) -> Result<Json<HealthResponse>, ApiError> {
    let store = handle.acquire().await;
    let stats = store.stats();

    Ok(Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now(),
        total_stickies_collections: stats.total_sets,
        total_stickies: stats.total_stickies,
        recent_stickies: stats.recent.into_iter().map(Into::into).collect(),
    }))
}

/// Fallback for anything no route or static asset claims.
pub async fn endpoint_not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Endpoint not found".to_string(),
        }),
    )
}

/// Validates a request body down to a non-empty array of opaque note values.
///
/// A body that failed extraction entirely (malformed JSON, wrong content
/// type) surfaces as an internal error, matching the behavior of the
/// catch-all error path rather than the validation one.
fn sticky_array(
    body: Result<Json<Value>, JsonRejection>,
    empty_message: &'static str,
) -> Result<Vec<Value>, ApiError> {
    let Json(body) = body.map_err(|err| {
        tracing::error!("Failed to read request body: {}", err);
        ApiError::Internal
    })?;

    let stickies = body
        .as_array()
        .cloned()
        .ok_or(ApiError::Validation(ERR_NOT_ARRAY))?;

    if stickies.is_empty() {
        return Err(ApiError::Validation(empty_message));
    }

    Ok(stickies)
}
