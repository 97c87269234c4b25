// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session state machine over the stored token pair.
//!
//! Handles:
//! - Advisory decoding of the access token into an [`Identity`]
//! - Startup initialization (load, decode, refresh-if-expired)
//! - Login / logout transitions
//! - Coalesced token refresh (at most one wire call per burst of callers)

use crate::error::{ApiError, Result};
use crate::store::{Credentials, TokenStore};
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Claims carried in the service's access tokens.
#[derive(Debug, Deserialize)]
struct AccessClaims {
    profile_id: String,
    username: String,
    first_name: String,
    last_name: String,
    #[serde(default)]
    avatar: Option<String>,
    exp: i64,
}

/// Decoded, client-visible identity derived from the access token.
///
/// Never persisted independently; always recomputed from the current
/// token. `expires_at` is advisory for the UI — the server remains
/// authoritative for authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub profile_id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl Identity {
    /// True if the access token this identity came from has expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

/// Session states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Refreshing,
    Authenticated {
        identity: Identity,
        access_token: String,
    },
}

/// Response from `POST /auth/token/refresh/`. Only a new access token is
/// issued; the refresh token stays valid.
#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access: String,
}

/// Manages the current session: one instance per application, passed by
/// reference to every resource API.
pub struct SessionManager {
    store: Arc<dyn TokenStore>,
    http: reqwest::Client,
    base_url: String,
    state: Mutex<SessionState>,
    /// Serializes refresh attempts; waiters re-check state after acquiring.
    refresh_lock: tokio::sync::Mutex<()>,
    /// Bumped on logout so an in-flight refresh cannot resurrect the session.
    epoch: AtomicU64,
}

impl SessionManager {
    pub fn new(base_url: String, store: Arc<dyn TokenStore>, http: reqwest::Client) -> Self {
        Self {
            store,
            http,
            base_url,
            state: Mutex::new(SessionState::Unauthenticated),
            refresh_lock: tokio::sync::Mutex::new(()),
            epoch: AtomicU64::new(0),
        }
    }

    /// Startup initialization from the token store.
    ///
    /// Absent credentials leave the session unauthenticated. A stored token
    /// that no longer decodes clears the pair. An expired token triggers one
    /// refresh attempt; if that fails the pair is cleared and the session
    /// ends up unauthenticated. Only storage failures are returned as
    /// errors — auth outcomes are reflected in the resulting state.
    pub async fn initialize(&self) -> Result<()> {
        let credentials = match self.store.load()? {
            Some(c) => c,
            None => {
                self.set_state(SessionState::Unauthenticated);
                return Ok(());
            }
        };

        let identity = match decode_identity(&credentials.access_token) {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(error = %e, "Stored access token is malformed; clearing");
                self.store.clear()?;
                self.set_state(SessionState::Unauthenticated);
                return Ok(());
            }
        };

        if identity.is_expired(Utc::now()) {
            tracing::info!("Stored access token expired; attempting refresh");
            return match self.refresh().await {
                Ok(()) => Ok(()),
                // Session-fatal refresh outcomes land in Unauthenticated
                // with the store already cleared.
                Err(e) if e.is_auth_error() => Ok(()),
                Err(e) => Err(e),
            };
        }

        self.set_state(SessionState::Authenticated {
            identity,
            access_token: credentials.access_token,
        });
        Ok(())
    }

    /// Establish a session from a freshly issued token pair.
    ///
    /// The access token is decoded before anything is persisted; a
    /// non-decodable value fails with `MalformedToken` and leaves the
    /// store untouched.
    pub fn login(&self, access_token: String, refresh_token: String) -> Result<Identity> {
        let identity = decode_identity(&access_token)?;

        self.store.save(&Credentials {
            access_token: access_token.clone(),
            refresh_token,
        })?;
        self.set_state(SessionState::Authenticated {
            identity: identity.clone(),
            access_token,
        });

        tracing::info!(username = %identity.username, "Logged in");
        Ok(identity)
    }

    /// End the session unconditionally, from any state.
    ///
    /// Safe to call while a refresh is in flight: the epoch bump makes the
    /// refresh result non-committing, so the final state is unauthenticated
    /// with both tokens cleared.
    pub fn logout(&self) -> Result<()> {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        let cleared = self.store.clear();
        self.set_state(SessionState::Unauthenticated);
        tracing::info!("Logged out");
        cleared
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// Concurrent callers coalesce: the first through the lock performs the
    /// wire call; waiters observe the changed token afterwards and return
    /// without issuing a second request. Any refresh failure is fatal for
    /// the current session — the pair is cleared and the state becomes
    /// unauthenticated, never retried.
    pub async fn refresh(&self) -> Result<()> {
        let seen = self.access_token();
        let _guard = self.refresh_lock.lock().await;

        // Another caller refreshed while we waited for the lock.
        if let Some(current) = self.access_token() {
            if seen.as_ref() != Some(&current) {
                return Ok(());
            }
        }

        let epoch = self.epoch.load(Ordering::SeqCst);

        let credentials = match self.store.load()? {
            Some(c) => c,
            None => {
                self.set_state(SessionState::Unauthenticated);
                return Err(ApiError::Auth);
            }
        };

        self.set_state(SessionState::Refreshing);

        match self.request_new_access_token(&credentials.refresh_token).await {
            Ok(access_token) => {
                let identity = match decode_identity(&access_token) {
                    Ok(identity) => identity,
                    Err(e) => return Err(self.end_session_with(e)),
                };

                // A logout won the race while the request was in flight;
                // the store is already cleared and must stay that way.
                if self.epoch.load(Ordering::SeqCst) != epoch {
                    tracing::info!("Refresh finished after logout; discarding new token");
                    let _ = self.store.clear();
                    self.set_state(SessionState::Unauthenticated);
                    return Err(ApiError::Auth);
                }

                // State first: a failed write leaves the in-memory session
                // usable and the old pair on disk, never stuck Refreshing.
                self.set_state(SessionState::Authenticated {
                    identity,
                    access_token: access_token.clone(),
                });
                self.store.save(&Credentials {
                    access_token,
                    refresh_token: credentials.refresh_token,
                })?;
                tracing::info!("Access token refreshed");
                Ok(())
            }
            Err(e) => Err(self.end_session_with(e)),
        }
    }

    /// Clear credentials, drop to unauthenticated, and pass the error on.
    fn end_session_with(&self, e: ApiError) -> ApiError {
        tracing::warn!(error = %e, "Token refresh failed; session ended");
        if let Err(clear_err) = self.store.clear() {
            tracing::error!(error = %clear_err, "Failed to clear credentials");
        }
        self.set_state(SessionState::Unauthenticated);
        e
    }

    /// Wire call: `POST /auth/token/refresh/`. All failure modes (transport,
    /// non-2xx, undecodable body) collapse to `Auth` since each is fatal to
    /// the session.
    async fn request_new_access_token(&self, refresh_token: &str) -> Result<String> {
        let url = format!("{}/auth/token/refresh/", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "refresh": refresh_token }))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Refresh request failed to send");
                ApiError::Auth
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!(status = %status, "Refresh rejected by server");
            return Err(ApiError::Auth);
        }

        let body: RefreshResponse = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "Malformed refresh response");
            ApiError::Auth
        })?;
        Ok(body.access)
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.lock().unwrap().clone()
    }

    /// Current identity, when authenticated.
    pub fn identity(&self) -> Option<Identity> {
        match &*self.state.lock().unwrap() {
            SessionState::Authenticated { identity, .. } => Some(identity.clone()),
            _ => None,
        }
    }

    /// Current access token, when authenticated.
    pub fn access_token(&self) -> Option<String> {
        match &*self.state.lock().unwrap() {
            SessionState::Authenticated { access_token, .. } => Some(access_token.clone()),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(*self.state.lock().unwrap(), SessionState::Authenticated { .. })
    }

    fn set_state(&self, next: SessionState) {
        *self.state.lock().unwrap() = next;
    }
}

/// Decode the claims of an access token without verifying its signature.
///
/// The client holds no signing key, so the decoded identity is advisory
/// only; expiry is checked separately by callers.
pub fn decode_identity(access_token: &str) -> Result<Identity> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let token_data = decode::<AccessClaims>(
        access_token,
        &DecodingKey::from_secret(&[]),
        &validation,
    )
    .map_err(|e| ApiError::MalformedToken(e.to_string()))?;

    let claims = token_data.claims;
    let expires_at = DateTime::from_timestamp(claims.exp, 0)
        .ok_or_else(|| ApiError::MalformedToken(format!("exp out of range: {}", claims.exp)))?;

    Ok(Identity {
        profile_id: claims.profile_id,
        username: claims.username,
        first_name: claims.first_name,
        last_name: claims.last_name,
        avatar: claims.avatar,
        expires_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    fn make_token(exp: i64) -> String {
        let claims = json!({
            "profile_id": "42",
            "username": "lily",
            "first_name": "Lily",
            "last_name": "Park",
            "avatar": null,
            "exp": exp,
        });
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"server-side-secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_decode_identity_fields() {
        let exp = Utc::now().timestamp() + 3600;
        let identity = decode_identity(&make_token(exp)).unwrap();

        assert_eq!(identity.profile_id, "42");
        assert_eq!(identity.username, "lily");
        assert_eq!(identity.first_name, "Lily");
        assert_eq!(identity.last_name, "Park");
        assert_eq!(identity.avatar, None);
        assert_eq!(identity.expires_at.timestamp(), exp);
        assert!(!identity.is_expired(Utc::now()));
    }

    #[test]
    fn test_decode_expired_token_still_decodes() {
        // Expiry is advisory and checked by callers, not the decoder.
        let identity = decode_identity(&make_token(1_000_000)).unwrap();
        assert!(identity.is_expired(Utc::now()));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode_identity("not-a-jwt").unwrap_err();
        assert!(matches!(err, ApiError::MalformedToken(_)));
    }
}
