use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::database::{Content, ContentChanges, ContentRepository, NewContent, StoreError};
use crate::error::ApiError;
use crate::state::AppState;

/// No field is required at creation; absent values are stored as NULL.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContentRequest {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub manufacturing_date: Option<DateTime<Utc>>,
    pub hospital: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentRequest {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub manufacturing_date: Option<DateTime<Utc>>,
}

fn store_error(context: &str, err: StoreError) -> ApiError {
    tracing::error!("{}: {}", context, err);
    ApiError::internal(format!("{}: {}", context, err))
}

/// POST /api/content - Create an inventory record
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateContentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let record = ContentRepository::create(
        &state.db,
        NewContent {
            user_id: req.user_id,
            name: req.name,
            quantity: req.quantity,
            expiry_date: req.expiry_date,
            manufacturing_date: req.manufacturing_date,
            hospital: req.hospital,
            region: req.region,
        },
    )
    .await
    .map_err(|e| store_error("Error creating content", e))?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/content/full - Every record across all users and hospitals
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Content>>, ApiError> {
    let records = ContentRepository::list_all(&state.db)
        .await
        .map_err(|e| store_error("Error fetching full content details", e))?;

    Ok(Json(records))
}

/// GET /api/content/:userId - Records owned by one user; empty is not an error
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Content>>, ApiError> {
    let records = ContentRepository::list_by_user(&state.db, &user_id)
        .await
        .map_err(|e| store_error("Error fetching content", e))?;

    Ok(Json(records))
}

/// PUT /api/content/:id - Replace the mutable fields
///
/// An unknown id answers 200 with a null body, mirroring the original
/// contract.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateContentRequest>,
) -> Result<Json<Option<Content>>, ApiError> {
    let updated = ContentRepository::update(
        &state.db,
        &id,
        ContentChanges {
            name: req.name,
            quantity: req.quantity,
            expiry_date: req.expiry_date,
            manufacturing_date: req.manufacturing_date,
        },
    )
    .await
    .map_err(|e| store_error("Error updating content", e))?;

    Ok(Json(updated))
}

/// DELETE /api/content/:id - 204 whether or not the record existed
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    ContentRepository::delete(&state.db, &id)
        .await
        .map_err(|e| store_error("Error deleting content", e))?;

    Ok(StatusCode::NO_CONTENT)
}
