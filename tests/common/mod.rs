use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use medsupply_api::{app, config::AppConfig, database, state::AppState};

pub struct TestApp {
    pub router: Router,
    pub db: SqlitePool,
}

/// Fresh router over its own in-memory database per test.
pub async fn spawn_app() -> Result<TestApp> {
    let mut config = AppConfig::default();
    config.database.url = "sqlite::memory:".to_string();
    // sqlite::memory: gives every connection its own database
    config.database.max_connections = 1;
    // minimum bcrypt cost keeps the suite fast
    config.auth.bcrypt_cost = 4;

    let pool = database::connect(&config.database)?;
    database::init(&pool).await?;

    let state = AppState::new(pool.clone(), config);
    Ok(TestApp {
        router: app(state),
        db: pool,
    })
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value)> {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => Request::builder().method(method).uri(uri).body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok((status, value))
    }

    pub async fn get(&self, uri: &str) -> Result<(StatusCode, Value)> {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> Result<(StatusCode, Value)> {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> Result<(StatusCode, Value)> {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> Result<(StatusCode, Value)> {
        self.request(Method::DELETE, uri, None).await
    }
}
