use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod state;

use state::AppState;

/// Build the full application router. Kept in the library so tests can drive
/// it in-process against their own store.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_routes())
        .merge(content_routes())
        .merge(message_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::auth;

    Router::new()
        .route("/api/signup", post(auth::signup))
        .route("/api/login", post(auth::login))
        .route("/api/profile", get(auth::profile))
}

fn content_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::content;

    Router::new()
        .route("/api/content", post(content::create))
        // Static "full" wins over the parameterized route below
        .route("/api/content/full", get(content::list_all))
        .route(
            "/api/content/:id",
            get(content::list_by_user)
                .put(content::update)
                .delete(content::delete),
        )
}

fn message_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::messages;

    Router::new().route("/api/messages", get(messages::list).post(messages::create))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "MedSupply API",
        "version": version,
        "description": "Medical-supply inventory tracking across hospitals and regions",
        "endpoints": {
            "signup": "POST /api/signup",
            "login": "POST /api/login",
            "profile": "GET /api/profile?username=",
            "content": "POST /api/content, GET /api/content/full, GET /api/content/:userId",
            "content_by_id": "PUT /api/content/:id, DELETE /api/content/:id",
            "messages": "GET /api/messages, POST /api/messages",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match database::ping(&state.db).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
