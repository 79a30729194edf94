mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn post_and_list_messages() -> Result<()> {
    let app = common::spawn_app().await?;

    let (status, body) = app
        .post(
            "/api/messages",
            json!({ "userId": "u1", "hospitalName": "H1", "query": "Need more gloves" }),
        )
        .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(body["userId"], "u1");
    assert_eq!(body["hospitalName"], "H1");
    assert_eq!(body["query"], "Need more gloves");

    app.post(
        "/api/messages",
        json!({ "userId": "u2", "hospitalName": "H2", "query": "Oxygen supply status?" }),
    )
    .await?;

    // The board is shared: every caller sees every message
    let (status, body) = app.get("/api/messages").await?;
    assert_eq!(status, StatusCode::OK);
    let messages = body.as_array().expect("array body");
    assert_eq!(messages.len(), 2);
    Ok(())
}

#[tokio::test]
async fn missing_query_is_rejected_and_not_persisted() -> Result<()> {
    let app = common::spawn_app().await?;

    let (status, body) = app
        .post("/api/messages", json!({ "userId": "u1", "hospitalName": "H1" }))
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid message format");

    let (_, body) = app.get("/api/messages").await?;
    assert_eq!(body.as_array().map(Vec::len), Some(0));
    Ok(())
}

#[tokio::test]
async fn empty_fields_count_as_missing() -> Result<()> {
    let app = common::spawn_app().await?;

    let (status, _) = app
        .post(
            "/api/messages",
            json!({ "userId": "u1", "hospitalName": "H1", "query": "" }),
        )
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}
