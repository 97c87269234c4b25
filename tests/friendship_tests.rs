// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wire-level friendship-status resolution tests.

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use bondify_client::friendship::FriendshipStatus;
use bondify_client::store::MemoryTokenStore;
use serde_json::{json, Value};
use std::sync::Arc;

mod common;
use common::{serve, test_client};

fn request_json(created_by: &str, status: &str) -> Value {
    json!({
        "id": "req-1",
        "sender_id": "9",
        "recipient_id": "42",
        "sender_username": created_by,
        "sender_first_name": "Mira",
        "sender_last_name": "Khan",
        "sender_avatar": null,
        "status": status,
        "created_at": "2025-06-01T10:00:00Z",
        "updated_at": "2025-06-02T10:00:00Z",
        "url": "https://bondify.uz/profile/9/friends/requests/req-1/",
        "created_by": created_by,
    })
}

fn requests_route(requests: Vec<Value>) -> Router {
    Router::new().route(
        "/profile/{id}/friends/requests/",
        get(move || {
            let requests = requests.clone();
            async move { Json(Value::Array(requests)) }
        }),
    )
}

#[tokio::test]
async fn test_accepted_status_resolves_case_insensitively() {
    let router = requests_route(vec![request_json("mira", "accepted")]);
    let base = serve(router).await;
    let client = test_client(&base, Arc::new(MemoryTokenStore::new()));

    let status = client.friends.friendship_status("9", "mira").await;
    assert_eq!(status, FriendshipStatus::Accepted);

    // Idempotent under unchanged remote state.
    let again = client.friends.friendship_status("9", "mira").await;
    assert_eq!(again, status);
}

#[tokio::test]
async fn test_pending_request_resolves_sent() {
    let router = requests_route(vec![request_json("mira", "SENT")]);
    let base = serve(router).await;
    let client = test_client(&base, Arc::new(MemoryTokenStore::new()));

    assert_eq!(
        client.friends.friendship_status("9", "mira").await,
        FriendshipStatus::Sent
    );
}

#[tokio::test]
async fn test_no_request_record_resolves_none() {
    let router = requests_route(vec![request_json("someone-else", "ACCEPTED")]);
    let base = serve(router).await;
    let client = test_client(&base, Arc::new(MemoryTokenStore::new()));

    assert_eq!(
        client.friends.friendship_status("9", "mira").await,
        FriendshipStatus::None
    );
}

#[tokio::test]
async fn test_lookup_failure_resolves_none_instead_of_erroring() {
    let router = Router::new().route(
        "/profile/{id}/friends/requests/",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = serve(router).await;
    let client = test_client(&base, Arc::new(MemoryTokenStore::new()));

    // Best-effort contract: resolution never propagates an error.
    assert_eq!(
        client.friends.friendship_status("9", "mira").await,
        FriendshipStatus::None
    );
}
