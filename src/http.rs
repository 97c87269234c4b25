// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authenticated HTTP client for the Bondify API.
//!
//! Handles:
//! - Bearer-token attachment from the session
//! - The single refresh-and-retry on 401
//! - Server error-body extraction into [`ApiError::Http`]

use crate::error::{ApiError, Result};
use crate::session::SessionManager;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// An image to attach to a multipart request. Bytes are owned so the form
/// can be rebuilt identically if the request is retried after a refresh.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub field: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Request body, kept in an owned, replayable form.
enum Payload {
    Empty,
    Json(Value),
    Multipart {
        fields: Vec<(String, String)>,
        files: Vec<UploadFile>,
    },
}

impl Payload {
    fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Payload::Empty => builder,
            Payload::Json(value) => builder.json(value),
            Payload::Multipart { fields, files } => {
                let mut form = reqwest::multipart::Form::new();
                for (name, value) in fields {
                    form = form.text(name.clone(), value.clone());
                }
                for file in files {
                    let part = reqwest::multipart::Part::bytes(file.bytes.clone())
                        .file_name(file.file_name.clone());
                    form = form.part(file.field.clone(), part);
                }
                builder.multipart(form)
            }
        }
    }
}

/// HTTP client wrapper shared by all resource APIs.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionManager>,
}

impl ApiClient {
    pub fn new(base_url: String, session: Arc<SessionManager>, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url,
            session,
        }
    }

    /// The session this client attaches tokens from.
    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.execute(Method::GET, path, &Payload::Empty).await?;
        self.check_json(response).await
    }

    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let payload = Payload::Json(to_value(body)?);
        let response = self.execute(Method::POST, path, &payload).await?;
        self.check_json(response).await
    }

    pub async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let payload = Payload::Json(to_value(body)?);
        let response = self.execute(Method::PUT, path, &payload).await?;
        self.check_json(response).await
    }

    /// POST without a body, for action endpoints (like, block, accept).
    /// Only the status is checked; these endpoints return inconsistent
    /// bodies and callers refetch the affected collections anyway.
    pub async fn post_unit(&self, path: &str) -> Result<()> {
        let response = self.execute(Method::POST, path, &Payload::Empty).await?;
        self.check_status(response).await
    }

    /// PUT without a body (unblock, reject).
    pub async fn put_unit(&self, path: &str) -> Result<()> {
        let response = self.execute(Method::PUT, path, &Payload::Empty).await?;
        self.check_status(response).await
    }

    /// DELETE, discarding any response body.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let response = self.execute(Method::DELETE, path, &Payload::Empty).await?;
        self.check_status(response).await
    }

    /// Multipart POST (post creation with image attachments).
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: Vec<(String, String)>,
        files: Vec<UploadFile>,
    ) -> Result<T> {
        let payload = Payload::Multipart { fields, files };
        let response = self.execute(Method::POST, path, &payload).await?;
        self.check_json(response).await
    }

    /// Issue a request with the retry policy from the session contract:
    /// a 401 on the first attempt triggers one coalesced refresh, and on
    /// success the identical request is replayed once with the new token.
    /// No other status is ever retried, and never more than once.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        payload: &Payload,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        let mut retried = false;

        loop {
            let mut builder = self.http.request(method.clone(), &url);
            if let Some(token) = self.session.access_token() {
                builder = builder.bearer_auth(token);
            }
            builder = payload.apply(builder);

            let response = builder
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            if response.status() == reqwest::StatusCode::UNAUTHORIZED && !retried {
                retried = true;
                tracing::debug!(%url, "Got 401; attempting token refresh");
                match self.session.refresh().await {
                    Ok(()) => continue,
                    Err(e) if e.is_auth_error() => return Err(ApiError::Auth),
                    Err(e) => return Err(e),
                }
            }

            return Ok(response);
        }
    }

    /// Check status and parse the JSON body.
    async fn check_json<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        if !response.status().is_success() {
            return Err(self.error_from_response(response).await);
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("JSON parse error: {}", e)))
    }

    /// Check status, ignoring the body.
    async fn check_status(&self, response: reqwest::Response) -> Result<()> {
        if !response.status().is_success() {
            return Err(self.error_from_response(response).await);
        }
        Ok(())
    }

    /// Map a non-2xx response to the error taxonomy. A 401 here already
    /// survived the refresh attempt in `execute`, so it is terminal.
    async fn error_from_response(&self, response: reqwest::Response) -> ApiError {
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return ApiError::Auth;
        }
        let body = response.text().await.unwrap_or_default();
        ApiError::Http {
            status: status.as_u16(),
            message: extract_server_message(&body),
        }
    }
}

fn to_value<B: Serialize>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| ApiError::Parse(format!("Body encode error: {}", e)))
}

/// Pull a human-readable message out of a server error body, checking the
/// keys the service actually uses (`detail`, then `message`, then `error`)
/// and falling back to the raw text.
fn extract_server_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["detail", "message", "error"] {
            if let Some(s) = value.get(key).and_then(Value::as_str) {
                return s.to_string();
            }
        }
    }
    body.to_string()
}
