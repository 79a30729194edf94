use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;

use super::present;
use crate::database::{Message, MessageRepository, NewMessage};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    pub user_id: Option<String>,
    pub hospital_name: Option<String>,
    pub query: Option<String>,
}

/// GET /api/messages - The whole board, visible to every caller
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = MessageRepository::list_all(&state.db).await.map_err(|e| {
        tracing::error!("Error fetching messages: {}", e);
        ApiError::internal("Error fetching messages")
    })?;

    Ok(Json(messages))
}

/// POST /api/messages - Append an inquiry
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(user_id), Some(hospital_name), Some(query)) = (
        present(&req.user_id),
        present(&req.hospital_name),
        present(&req.query),
    ) else {
        return Err(ApiError::bad_request("Invalid message format"));
    };

    let message = MessageRepository::create(
        &state.db,
        NewMessage {
            user_id: user_id.to_string(),
            hospital_name: hospital_name.to_string(),
            query: query.to_string(),
        },
    )
    .await
    .map_err(|e| {
        tracing::error!("Error creating message: {}", e);
        ApiError::internal("Error creating message")
    })?;

    Ok((StatusCode::CREATED, Json(message)))
}
