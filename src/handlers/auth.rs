use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::present;
use crate::auth::{hash_password, verify_password};
use crate::database::{NewUser, UserRepository};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub hospital: Option<String>,
    pub email: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub hospital: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub hospital: String,
    pub email: String,
}

/// POST /api/signup - Register a new account
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(username), Some(password), Some(hospital), Some(email), Some(region)) = (
        present(&req.username),
        present(&req.password),
        present(&req.hospital),
        present(&req.email),
        present(&req.region),
    ) else {
        return Err(ApiError::bad_request("All fields are required"));
    };

    if UserRepository::find_by_username(&state.db, username)
        .await?
        .is_some()
    {
        return Err(ApiError::conflict("Username already exists"));
    }

    let password_hash = hash_password(password, state.config.auth.bcrypt_cost)?;

    let user = UserRepository::create(
        &state.db,
        NewUser {
            username,
            password: &password_hash,
            hospital,
            region,
            email,
        },
    )
    .await?;

    tracing::info!(username = %user.username, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User registered successfully",
            "username": user.username
        })),
    ))
}

/// POST /api/login - Check credentials
///
/// Hospital and region must be present but are never compared to the stored
/// values. No token or session is issued on success.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(username), Some(password), Some(_hospital), Some(_region)) = (
        present(&req.username),
        present(&req.password),
        present(&req.hospital),
        present(&req.region),
    ) else {
        return Err(ApiError::bad_request("Username and password are required"));
    };

    let Some(user) = UserRepository::find_by_username(&state.db, username).await? else {
        return Err(ApiError::bad_request("Invalid credentials"));
    };

    if !verify_password(password, &user.password)? {
        tracing::warn!(username = %user.username, "login with wrong password");
        return Err(ApiError::bad_request("Invalid credentials"));
    }

    Ok(Json(json!({
        "message": "Logged in successfully",
        "username": user.username
    })))
}

/// GET /api/profile?username= - Public profile lookup
pub async fn profile(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = match query.username.as_deref() {
        Some(username) => UserRepository::find_by_username(&state.db, username).await?,
        None => None,
    };

    let user = user.ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(ProfileResponse {
        username: user.username,
        hospital: user.hospital,
        email: user.email,
    }))
}
