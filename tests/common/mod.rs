// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers: a mock Bondify server on an ephemeral port, JWT
//! fabrication, and client construction over an in-memory token store.

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use bondify_client::config::ClientConfig;
use bondify_client::store::{Credentials, MemoryTokenStore, TokenStore};
use bondify_client::BondifyClient;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Bind a mock server on an ephemeral port and return its base URL.
#[allow(dead_code)]
pub async fn serve(router: Router) -> String {
    init_logging();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Build a client over the given base URL and an in-memory token store.
#[allow(dead_code)]
pub fn test_client(base_url: &str, store: Arc<MemoryTokenStore>) -> BondifyClient {
    let config = ClientConfig {
        base_url: base_url.to_string(),
        // Unused: the client is built over the in-memory store.
        token_path: std::env::temp_dir().join("bondify-client-tests-unused.json"),
        timeout: Duration::from_secs(5),
    };
    BondifyClient::with_store(config, store).expect("client construction")
}

/// Fabricate an access token with the service's claim set. The signature
/// uses an arbitrary key; the client decodes without verifying.
#[allow(dead_code)]
pub fn make_jwt(profile_id: &str, username: &str, exp: i64) -> String {
    let claims = json!({
        "profile_id": profile_id,
        "username": username,
        "first_name": "Test",
        "last_name": "User",
        "avatar": null,
        "exp": exp,
    });
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"mock-server-secret"),
    )
    .unwrap()
}

/// Unix timestamp `offset_secs` from now.
#[allow(dead_code)]
pub fn now_plus(offset_secs: i64) -> i64 {
    chrono::Utc::now().timestamp() + offset_secs
}

/// Seed a store with a token pair.
#[allow(dead_code)]
pub fn seed_store(store: &MemoryTokenStore, access: &str, refresh: &str) {
    store
        .save(&Credentials {
            access_token: access.to_string(),
            refresh_token: refresh.to_string(),
        })
        .unwrap();
}

/// Configurable `/auth/token/refresh/` route with a call counter.
#[derive(Clone)]
#[allow(dead_code)]
pub struct RefreshEndpoint {
    pub calls: Arc<AtomicUsize>,
    /// `Some(token)` to succeed with that access token, `None` to 401.
    pub new_access: Option<String>,
    pub delay: Duration,
}

#[allow(dead_code)]
impl RefreshEndpoint {
    pub fn succeeding(new_access: &str) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            new_access: Some(new_access.to_string()),
            delay: Duration::ZERO,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            new_access: None,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Router exposing the refresh route with this behavior.
    pub fn router(&self) -> Router {
        let endpoint = self.clone();
        Router::new().route(
            "/auth/token/refresh/",
            post(move |Json(body): Json<Value>| {
                let endpoint = endpoint.clone();
                async move {
                    assert!(
                        body.get("refresh").and_then(Value::as_str).is_some(),
                        "refresh request must carry the refresh token"
                    );
                    endpoint.calls.fetch_add(1, Ordering::SeqCst);
                    tokio::time::sleep(endpoint.delay).await;
                    match &endpoint.new_access {
                        Some(access) => {
                            (StatusCode::OK, Json(json!({ "access": access }))).into_response()
                        }
                        None => (
                            StatusCode::UNAUTHORIZED,
                            Json(json!({ "detail": "Token is invalid or expired" })),
                        )
                            .into_response(),
                    }
                }
            }),
        )
    }
}
